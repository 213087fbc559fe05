use dioxus::prelude::*;

use crate::components::navigation::MenuItem;
use crate::types::{child_position, MenuNode, ParentLink};

/// Sibling entries grouped under an optional label. Entries with children
/// open their own level with the same shared navigation state.
#[component]
pub fn MenuSection(
    #[props(!optional)] label: Option<String>,
    items: Vec<MenuNode>,
    position: Vec<usize>,
    depth: usize,
    parent: ParentLink,
    base_path: String,
    #[props(!optional)] current_slug: Option<String>,
) -> Element {
    rsx! {
        li { class: "menu-section",
            if let Some(label) = label {
                span { class: "menu-section-label", "{label}" }
            }
            if !items.is_empty() {
                ul {
                    for (index, item) in items.iter().enumerate() {
                        MenuItem {
                            key: "{index}",
                            node: item.clone(),
                            position: child_position(&position, index),
                            depth,
                            parent: parent.clone(),
                            base_path: base_path.clone(),
                            current_slug: current_slug.clone(),
                        }
                    }
                }
            }
        }
    }
}
