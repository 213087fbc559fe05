use dioxus::prelude::*;
use dioxus::document::eval;
use serde::Deserialize;

use crate::config::NAV_ELEMENT_ID;

/// Host-window events the navigation shell reacts to
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowEvent {
    /// Viewport height changed (also sent once on subscribe)
    Resize { height: f64 },
    Scroll,
    /// Pointer pressed outside the navigation element
    OutsideClick,
}

fn listener_script() -> String {
    format!(
        r#"
        window.__docsNavListeners?.abort();
        const controller = new AbortController();
        window.__docsNavListeners = controller;
        const options = {{ signal: controller.signal, passive: true }};
        const report = () => dioxus.send({{ kind: "resize", height: window.innerHeight }});
        window.addEventListener("resize", report, options);
        window.addEventListener("scroll", () => dioxus.send({{ kind: "scroll" }}), options);
        document.addEventListener("pointerdown", (event) => {{
            const nav = document.getElementById("{NAV_ELEMENT_ID}");
            if (nav && !nav.contains(event.target)) dioxus.send({{ kind: "outside_click" }});
        }}, options);
        report();
        await new Promise(() => {{}});
        "#
    )
}

const REMOVE_LISTENERS_SCRIPT: &str = r#"
    window.__docsNavListeners?.abort();
    window.__docsNavListeners = undefined;
"#;

/// Feed resize, scroll and outside-click events to `on_event` until the
/// calling component unmounts
pub fn use_window_events(mut on_event: impl FnMut(WindowEvent) + 'static) {
    use_hook(move || {
        spawn(async move {
            let mut events = eval(&listener_script());
            loop {
                match events.recv::<WindowEvent>().await {
                    Ok(event) => on_event(event),
                    Err(err) => {
                        tracing::warn!("window event bridge closed: {err:?}");
                        break;
                    }
                }
            }
        });
    });

    use_drop(move || {
        let _ = eval(REMOVE_LISTENERS_SCRIPT);
    });
}
