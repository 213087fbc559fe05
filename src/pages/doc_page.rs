use dioxus::prelude::*;

use crate::components::layout::DocsLayout;
use crate::types::{parse_sidebar, MenuNode};

/// Base URL prefix of every documentation page
pub const DOCS_BASE_PATH: &str = "/docs";

static SIDEBAR_JSON: &str = include_str!("../../assets/sidebar.json");

#[component]
pub fn Landing() -> Element {
    rsx! {
        main { class: "landing",
            h1 { "Documentation" }
            Link { class: "btn-primary", to: format!("{DOCS_BASE_PATH}/introduction"), "Read the docs" }
        }
    }
}

#[component]
pub fn DocPage(segments: Vec<String>) -> Element {
    let sidebar = use_hook(load_sidebar);
    let slug = format!("/{}", segments.join("/"));

    match sidebar {
        Some(sidebar) => rsx! {
            DocsLayout {
                sidebar,
                slug: slug.clone(),
                base_path: DOCS_BASE_PATH.to_string(),
                article { class: "doc-article",
                    h1 { "{slug}" }
                }
            }
        },
        None => rsx! {
            main { class: "docs-content",
                p { class: "docs-error", "Navigation is unavailable." }
            }
        },
    }
}

fn load_sidebar() -> Option<Vec<MenuNode>> {
    match parse_sidebar(SIDEBAR_JSON) {
        Ok(sidebar) => Some(sidebar),
        Err(err) => {
            tracing::error!("failed to load sidebar: {err}");
            None
        }
    }
}
