use dioxus::prelude::*;

use crate::components::navigation::{MenuIcon, MenuItem, MenuSection};
use crate::hooks::{use_settle_report, NavHandle};
use crate::state::back_href;
use crate::types::{child_position, LevelKey, MenuNode, NodeKind, ParentLink};

/// One level of the drill-down menu. Child levels are rendered inside their
/// item so every level exists at once and the carousel can slide between them.
#[component]
pub fn MenuLevel(
    depth: usize,
    title: String,
    #[props(!optional)] slug: Option<String>,
    #[props(!optional)] icon: Option<String>,
    #[props(!optional)] parent: Option<ParentLink>,
    items: Vec<MenuNode>,
    position: Vec<usize>,
    base_path: String,
    #[props(!optional)] current_slug: Option<String>,
) -> Element {
    let nav = use_context::<NavHandle>();
    let level_key = LevelKey::new(depth, title.clone()).at(position.clone());
    let mut level_ref = use_settle_report(nav, level_key.clone());

    let layout = nav.layout(&level_key);
    let level_style = layout.to_css(nav.config.read().animation_secs());
    let site_href = nav.config.read().site_href.clone();
    let this_level = ParentLink {
        title: title.clone(),
        slug: slug.clone(),
    };

    rsx! {
        div {
            class: if level_key.is_root() { "menu-level menu-level-root" } else { "menu-level" },
            style: "{level_style}",
            "data-depth": "{depth}",
            onmounted: move |evt| level_ref.set(Some(evt.data())),

            if let Some(parent) = parent.clone().filter(|_| !level_key.is_root()) {
                div { class: "menu-level-header",
                    BackLink { parent, base_path: base_path.clone() }
                    p { class: "menu-level-title",
                        if let Some(icon) = icon.clone() {
                            MenuIcon { name: icon }
                        }
                        "{title}"
                    }
                }
            }

            ul { class: "menu-items",
                for (index, item) in items.iter().enumerate() {
                    {match item.kind() {
                        NodeKind::Section { label, items: section_items } => rsx! {
                            MenuSection {
                                key: "{index}",
                                label: label.map(str::to_string),
                                items: section_items.to_vec(),
                                position: child_position(&position, index),
                                depth,
                                parent: this_level.clone(),
                                base_path: base_path.clone(),
                                current_slug: current_slug.clone(),
                            }
                        },
                        _ => rsx! {
                            MenuItem {
                                key: "{index}",
                                node: item.clone(),
                                position: child_position(&position, index),
                                depth,
                                parent: this_level.clone(),
                                base_path: base_path.clone(),
                                current_slug: current_slug.clone(),
                            }
                        },
                    }}
                }
            }

            if level_key.is_root() {
                div { class: "menu-level-footer",
                    Link { class: "menu-back-to-site", to: site_href, "Back to site" }
                }
            }
        }
    }
}

/// "Back to {parent}" affordance; a link when the parent is a page
#[component]
fn BackLink(parent: ParentLink, base_path: String) -> Element {
    let nav = use_context::<NavHandle>();
    let label = format!("Back to {}", parent.title);
    let href = back_href(&parent, &base_path);
    let on_back = move |_: MouseEvent| {
        let mut nav = nav;
        nav.back(&parent);
    };

    match href {
        Some(href) => rsx! {
            Link { class: "menu-back", to: href, onclick: on_back,
                span { class: "menu-back-chevron", aria_hidden: "true", "‹" }
                "{label}"
            }
        },
        None => rsx! {
            button { class: "menu-back", r#type: "button", onclick: on_back,
                span { class: "menu-back-chevron", aria_hidden: "true", "‹" }
                "{label}"
            }
        },
    }
}
