use dioxus::prelude::*;

use crate::components::navigation::MobileNav;
use crate::types::MenuNode;

/// Documentation page frame: mobile navigation above the article body
#[component]
pub fn DocsLayout(sidebar: Vec<MenuNode>, slug: String, base_path: String, children: Element) -> Element {
    rsx! {
        div { class: "docs-container",
            MobileNav {
                class: "docs-mobile-nav",
                sidebar,
                slug,
                base_path,
            }
            main { class: "docs-content",
                {children}
            }
        }
    }
}
