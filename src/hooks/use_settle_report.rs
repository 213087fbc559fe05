use dioxus::prelude::*;
use dioxus::document::eval;
use std::rc::Rc;

use crate::config::PANEL_ELEMENT_ID;
use crate::hooks::use_nav_state::NavHandle;
use crate::platform::sleep;
use crate::types::LevelKey;

/// Report the level's content height once it has been current for the settle
/// delay, then scroll the panel back to the top. The pending report is
/// cancelled as soon as the level stops being current or unmounts.
///
/// Returns the slot the level's root element must be mounted into.
pub fn use_settle_report(nav: NavHandle, key: LevelKey) -> Signal<Option<Rc<MountedData>>> {
    let level_ref = use_signal(|| None::<Rc<MountedData>>);
    let mut pending = use_signal(|| None::<Task>);

    let memo_key = key.clone();
    let is_current = use_memo(move || nav.is_current(&memo_key));

    let effect_key = key.clone();
    use_effect(move || {
        let current = is_current();
        let mut nav = nav;
        tracing::trace!(level = %effect_key.title, current, "menu level focus changed");

        if let Some(task) = pending.take() {
            task.cancel();
        }
        nav.cancel_settle(&effect_key);
        if !current {
            return;
        }

        let ticket = nav.begin_settle(&effect_key);
        let delay = nav.settle_delay();
        let task = spawn(async move {
            sleep(delay).await;

            let Some(level) = level_ref.peek().clone() else {
                tracing::warn!("menu level not mounted, skipping height report");
                return;
            };
            match level.get_scroll_size().await {
                Ok(size) => {
                    if nav.complete_settle(ticket, size.height) {
                        scroll_panel_to_top();
                    }
                }
                Err(err) => tracing::warn!("failed to measure menu level: {err:?}"),
            }
        });
        pending.set(Some(task));
    });

    use_drop(move || {
        let mut nav = nav;
        nav.cancel_settle(&key);
    });

    level_ref
}

fn scroll_panel_to_top() {
    let _ = eval(&format!(
        "document.getElementById('{PANEL_ELEMENT_ID}')?.scrollTo(0, 0);"
    ));
}
