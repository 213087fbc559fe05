use dioxus::prelude::*;

use crate::components::navigation::MenuLevel;
use crate::hooks::NavHandle;
use crate::state::ItemAction;
use crate::types::{MenuNode, ParentLink};

/// Icon slot; the glyph itself comes from the stylesheet
#[component]
pub fn MenuIcon(name: String) -> Element {
    rsx! {
        span { class: "menu-icon menu-icon-{name}", aria_hidden: "true" }
    }
}

#[component]
fn MenuTag(label: String) -> Element {
    rsx! {
        span { class: "menu-tag", "{label}" }
    }
}

/// One entry of a menu level. Entries with children drill into their own
/// level, which is rendered right here.
#[component]
pub fn MenuItem(
    node: MenuNode,
    position: Vec<usize>,
    depth: usize,
    parent: ParentLink,
    base_path: String,
    #[props(!optional)] current_slug: Option<String>,
) -> Element {
    let nav = use_context::<NavHandle>();
    let action = ItemAction::for_node(&node, &base_path);
    let is_current_page = node.slug.is_some() && node.slug == current_slug;
    let aria_label = node.aria_label.clone().unwrap_or_else(|| node.title.clone());
    let title = node.title.clone();
    let link_class = if is_current_page {
        "menu-item-link menu-item-current"
    } else {
        "menu-item-link"
    };

    let body = rsx! {
        if let Some(icon) = node.icon.clone() {
            MenuIcon { name: icon }
        }
        span { class: "menu-item-title", "{title}" }
        if let Some(tag) = node.tag.clone() {
            MenuTag { label: tag }
        }
    };

    rsx! {
        li { class: "menu-item",
            {match action {
                ItemAction::DrillIn => rsx! {
                    button {
                        class: "menu-item-link menu-item-group",
                        r#type: "button",
                        aria_label: "{aria_label}",
                        onclick: move |_| {
                            let mut nav = nav;
                            nav.drill_in(&title);
                        },
                        {body}
                        span { class: "menu-item-chevron", aria_hidden: "true", "›" }
                    }
                    MenuLevel {
                        depth: depth + 1,
                        title: node.title.clone(),
                        slug: node.slug.clone(),
                        icon: node.icon.clone(),
                        parent: Some(parent.clone()),
                        items: node.children().map(<[MenuNode]>::to_vec).unwrap_or_default(),
                        position: position.clone(),
                        base_path: base_path.clone(),
                        current_slug: current_slug.clone(),
                    }
                },
                ItemAction::Navigate { href } => rsx! {
                    Link {
                        class: link_class,
                        to: href,
                        onclick: move |_: MouseEvent| {
                            let mut nav = nav;
                            nav.close();
                        },
                        {body}
                        if is_current_page {
                            span { class: "sr-only", "(current page)" }
                        }
                    }
                },
                ItemAction::Inert => rsx! {
                    button {
                        class: "menu-item-link",
                        r#type: "button",
                        aria_label: "{aria_label}",
                        {body}
                    }
                },
            }}
        }
    }
}
