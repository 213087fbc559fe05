use serde::{Deserialize, Serialize};

use crate::config::UNNAMED_SECTION;
use crate::error::{NavError, NavResult};

/// One entry of the static sidebar hierarchy
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    /// Section nodes may leave this empty
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MenuNode>>,
}

/// What a node renders as
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeKind<'a> {
    /// Sibling items under an optional label (`None` for "noname")
    Section {
        label: Option<&'a str>,
        items: &'a [MenuNode],
    },
    /// Drillable entry with its own menu level
    Group { items: &'a [MenuNode] },
    Leaf,
}

impl MenuNode {
    pub fn leaf(title: impl Into<String>, slug: Option<&str>) -> Self {
        Self {
            title: title.into(),
            slug: slug.map(str::to_string),
            ..Default::default()
        }
    }

    pub fn group(title: impl Into<String>, items: Vec<MenuNode>) -> Self {
        Self {
            title: title.into(),
            items: Some(items),
            ..Default::default()
        }
    }

    pub fn section(label: impl Into<String>, items: Vec<MenuNode>) -> Self {
        Self {
            section: Some(label.into()),
            items: Some(items),
            ..Default::default()
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn kind(&self) -> NodeKind<'_> {
        let items = self.children();
        match (self.section_name(), items) {
            (Some(section), _) => NodeKind::Section {
                label: section_label(section),
                items: items.unwrap_or(&[]),
            },
            (None, Some(items)) => NodeKind::Group { items },
            (None, None) => NodeKind::Leaf,
        }
    }

    /// Section identifier; an empty string counts as none
    pub fn section_name(&self) -> Option<&str> {
        self.section.as_deref().filter(|section| !section.is_empty())
    }

    /// Child nodes; an empty list counts as none
    pub fn children(&self) -> Option<&[MenuNode]> {
        self.items.as_deref().filter(|items| !items.is_empty())
    }

    pub fn has_children(&self) -> bool {
        self.children().is_some()
    }
}

/// Label shown above a section, `None` for the unnamed sentinel
pub fn section_label(section: &str) -> Option<&str> {
    (section != UNNAMED_SECTION).then_some(section)
}

/// Back-reference from a child level to the level it was opened from
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentLink {
    pub title: String,
    pub slug: Option<String>,
}

impl ParentLink {
    pub fn new(title: impl Into<String>, slug: Option<&str>) -> Self {
        Self {
            title: title.into(),
            slug: slug.map(str::to_string),
        }
    }
}

/// Identity of one rendered menu level.
///
/// `position` holds the sibling indices leading from the root entries to the
/// node that opens the level, so same-titled siblings stay distinct here.
/// Whether a level is current is still decided by depth and title.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LevelKey {
    pub depth: usize,
    pub title: String,
    pub position: Vec<usize>,
}

impl LevelKey {
    pub fn new(depth: usize, title: impl Into<String>) -> Self {
        Self {
            depth,
            title: title.into(),
            position: Vec::new(),
        }
    }

    pub fn at(mut self, position: Vec<usize>) -> Self {
        self.position = position;
        self
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

/// Position of the `index`th entry under `position`
pub fn child_position(position: &[usize], index: usize) -> Vec<usize> {
    let mut child = position.to_vec();
    child.push(index);
    child
}

/// Parse the sidebar JSON and check that every entry is renderable
pub fn parse_sidebar(json: &str) -> NavResult<Vec<MenuNode>> {
    let nodes: Vec<MenuNode> = serde_json::from_str(json)?;
    validate_nodes(&nodes, "sidebar")?;
    Ok(nodes)
}

fn validate_nodes(nodes: &[MenuNode], path: &str) -> NavResult<()> {
    for (index, node) in nodes.iter().enumerate() {
        let node_path = format!("{path}[{index}]");
        if node.section_name().is_none() && node.title.trim().is_empty() {
            return Err(NavError::MissingTitle { path: node_path });
        }
        if let Some(items) = &node.items {
            validate_nodes(items, &format!("{node_path}.items"))?;
        }
    }
    Ok(())
}
