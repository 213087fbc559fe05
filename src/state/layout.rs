//! Placement of menu levels and what each item does when clicked

use crate::config::ActiveMatch;
use crate::state::ActivePath;
use crate::types::{MenuNode, ParentLink};

/// Position of one level inside its parent's frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelLayout {
    /// Horizontal shift in percent of the panel width
    pub translate_x: f64,
    pub opacity: f64,
    pub active: bool,
}

impl LevelLayout {
    /// The root slides left one panel width per level drilled in. Other
    /// levels sit one width to the right of their parent and fade in while
    /// active. Levels on the active path stay opaque even when inactive,
    /// since every deeper level is drawn inside them.
    pub fn compute(depth: usize, title: &str, path: &ActivePath, rule: ActiveMatch) -> Self {
        let active = path.is_active(depth, title, rule);
        let visible = active || path.is_on_path(depth, title);
        if depth == 0 {
            LevelLayout {
                translate_x: -100.0 * path.depth() as f64,
                opacity: 1.0,
                active,
            }
        } else {
            LevelLayout {
                translate_x: 100.0,
                opacity: if visible { 1.0 } else { 0.0 },
                active,
            }
        }
    }

    pub fn to_css(self, duration_secs: f64) -> String {
        let pointer_events = if self.active { "auto" } else { "none" };
        format!(
            "transform: translateX({}%); opacity: {}; pointer-events: {pointer_events}; \
             transition: transform {duration_secs}s ease-in, opacity {duration_secs}s ease-in;",
            self.translate_x, self.opacity
        )
    }
}

/// On-screen offset (percent of panel width) of the level at `depth` along
/// the active path. Zero only for the current level.
pub fn frame_offset(depth: usize, path: &ActivePath) -> f64 {
    100.0 * (depth as f64 - path.depth() as f64)
}

/// Behaviour of a clicked menu entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemAction {
    /// Open the item's own level
    DrillIn,
    Navigate { href: String },
    /// Plain button with nowhere to go
    Inert,
}

impl ItemAction {
    pub fn for_node(node: &MenuNode, base_path: &str) -> Self {
        if node.has_children() {
            ItemAction::DrillIn
        } else if let Some(slug) = &node.slug {
            ItemAction::Navigate {
                href: join_href(base_path, slug),
            }
        } else {
            ItemAction::Inert
        }
    }
}

pub fn join_href(base_path: &str, slug: &str) -> String {
    format!("{base_path}{slug}")
}

/// Link target of a back affordance; `None` renders a button
pub fn back_href(parent: &ParentLink, base_path: &str) -> Option<String> {
    parent.slug.as_deref().map(|slug| join_href(base_path, slug))
}
