use dioxus::prelude::*;
use std::rc::Rc;

use crate::components::navigation::MenuLevel;
use crate::config::{NavConfig, NAV_ELEMENT_ID, PANEL_ELEMENT_ID};
use crate::hooks::{use_nav_state, use_window_events, NavHandle, WindowEvent};
use crate::platform::sleep;
use crate::types::MenuNode;

/// Mobile documentation navigation: a trigger button showing the current
/// level and a panel holding the drill-down menu.
#[component]
pub fn MobileNav(
    sidebar: Vec<MenuNode>,
    slug: String,
    base_path: String,
    class: Option<String>,
    config: Option<NavConfig>,
) -> Element {
    let nav = use_nav_state(config.unwrap_or_default());
    use_context_provider(|| nav);

    let trigger_ref = use_signal(|| None::<Rc<MountedData>>);
    let mut finish_task = use_signal(|| None::<Task>);

    let is_open = use_memo(move || nav.is_open());
    let generation = use_memo(move || nav.shell.read().generation());

    // Drop the panel out of the stacking order only once the fade has run.
    use_effect(move || {
        let generation = generation();
        if let Some(task) = finish_task.take() {
            task.cancel();
        }
        if generation == 0 {
            return;
        }
        let duration = nav.config.peek().animation_duration();
        let task = spawn(async move {
            sleep(duration).await;
            let mut nav = nav;
            nav.finish_panel_animation(generation);
        });
        finish_task.set(Some(task));
    });

    use_effect(move || {
        if is_open() {
            spawn(measure_trigger(nav, trigger_ref));
        }
    });

    use_window_events(move |event| {
        let mut nav = nav;
        match event {
            WindowEvent::Resize { height } => nav.set_viewport_height(height),
            WindowEvent::Scroll => {
                if nav.shell.peek().is_open() {
                    spawn(measure_trigger(nav, trigger_ref));
                }
            }
            WindowEvent::OutsideClick => {
                nav.close();
            }
        }
    });

    let config = nav.config.read().clone();
    let label = nav.active_path.read().trigger_label(&config.home_label).to_string();
    let shell = nav.shell.read().clone();
    let open = shell.is_open();
    let pointer_events = if shell.is_interactive() { "" } else { " pointer-events: none;" };
    let panel_style = shell.style().to_css(config.animation_secs());
    let panel_height = shell
        .panel_height()
        .map(|height| format!(" height: {height}px;"))
        .unwrap_or_default();
    let menu_height = nav.menu_height();
    let nav_class = match class {
        Some(extra) => format!("mobile-nav {extra}"),
        None => "mobile-nav".to_string(),
    };

    rsx! {
        nav { id: NAV_ELEMENT_ID, class: "{nav_class}",
            button {
                class: "mobile-nav-trigger",
                r#type: "button",
                aria_expanded: "{open}",
                onmounted: move |evt| {
                    let mut trigger_ref = trigger_ref;
                    trigger_ref.set(Some(evt.data()));
                },
                onclick: move |_| {
                    let mut nav = nav;
                    nav.toggle();
                },
                span { class: "mobile-nav-label", "{label}" }
                span {
                    class: if open { "mobile-nav-chevron mobile-nav-chevron-open" } else { "mobile-nav-chevron" },
                    aria_hidden: "true",
                    "›"
                }
            }
            div {
                id: PANEL_ELEMENT_ID,
                class: "mobile-nav-panel",
                style: "{panel_style}{panel_height}{pointer_events}",
                div {
                    class: "mobile-nav-menu",
                    style: "height: {menu_height}px;",
                    MenuLevel {
                        depth: 0,
                        title: config.root_title.clone(),
                        slug: Some(slug.clone()),
                        icon: None,
                        parent: None,
                        items: sidebar.clone(),
                        position: Vec::new(),
                        base_path: base_path.clone(),
                        current_slug: Some(slug.clone()),
                    }
                }
            }
        }
    }
}

/// Track the trigger's distance from the top of the viewport
async fn measure_trigger(mut nav: NavHandle, trigger_ref: Signal<Option<Rc<MountedData>>>) {
    let Some(trigger) = trigger_ref.peek().clone() else {
        return;
    };
    match trigger.get_client_rect().await {
        Ok(rect) => nav.set_trigger_top(rect.origin.y),
        Err(err) => tracing::warn!("failed to measure navigation trigger: {err:?}"),
    }
}
