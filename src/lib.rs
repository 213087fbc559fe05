//! Docs Nav - mobile navigation components for documentation sites
//!
//! A navigation shell with a toggle button and a drill-down menu that slides
//! between nested levels of the sidebar tree:
//! - `MobileNav` owns the open state, panel sizing and fade animation
//! - `MenuLevel` renders one level of the tree and all of its descendants
//! - `MenuSection` groups sibling entries under an optional label
//!
//! The rules behind them (active path, level placement, height reports,
//! panel animation) live in [`state`] and do not need a renderer.
//!
//! ## Example
//! ```rust
//! use docs_nav::prelude::*;
//!
//! let sidebar = parse_sidebar(r#"[{ "title": "Guides", "items": [{ "title": "Intro", "slug": "/intro" }] }]"#).unwrap();
//!
//! let mut path = ActivePath::new("Home");
//! assert_eq!(ItemAction::for_node(&sidebar[0], "/docs"), ItemAction::DrillIn);
//! path.push(sidebar[0].title.as_str());
//! assert_eq!(path.trigger_label("Documentation menu"), "Guides");
//! ```

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod platform;
pub mod state;
pub mod types;

// Re-export common types
pub mod prelude {
    pub use crate::components::navigation::{MenuLevel, MenuSection, MobileNav};
    pub use crate::config::{ActiveMatch, BackBehavior, NavConfig};
    pub use crate::error::{NavError, NavResult};
    pub use crate::hooks::{use_nav_state, NavHandle};
    pub use crate::state::{
        ActivePath, HeightArbiter, ItemAction, LevelLayout, PanelTransition, SettleOutcome, ShellState,
    };
    pub use crate::types::{parse_sidebar, LevelKey, MenuNode, NodeKind, ParentLink};
}
