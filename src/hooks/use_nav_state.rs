use dioxus::prelude::*;
use std::time::Duration;

use crate::config::NavConfig;
use crate::state::{
    ActivePath, HeightArbiter, LevelLayout, PanelTransition, SettleOutcome, SettleTicket, ShellState,
};
use crate::types::{LevelKey, ParentLink};

/// View state owned by the navigation shell and shared with every menu level
/// through context. All writes go through these methods.
#[derive(Clone, Copy, PartialEq)]
pub struct NavHandle {
    pub config: Signal<NavConfig>,
    pub active_path: Signal<ActivePath>,
    pub shell: Signal<ShellState>,
    pub heights: Signal<HeightArbiter>,
}

pub fn use_nav_state(config: NavConfig) -> NavHandle {
    let active_path = use_signal(|| ActivePath::new(config.root_title.clone()));
    let shell = use_signal(|| ShellState::new(config.header_height));
    let heights = use_signal(|| HeightArbiter::new(config.initial_menu_height));
    let config = use_signal(|| config);

    NavHandle {
        config,
        active_path,
        shell,
        heights,
    }
}

impl NavHandle {
    pub fn toggle(&mut self) -> Option<PanelTransition> {
        let transition = self.shell.write().toggle();
        tracing::debug!(open = self.shell.peek().is_open(), "navigation toggled");
        transition
    }

    /// Close the panel; does nothing when already closed
    pub fn close(&mut self) -> Option<PanelTransition> {
        let transition = self.shell.write().close();
        if transition.is_some() {
            tracing::debug!("navigation closed");
        }
        transition
    }

    pub fn finish_panel_animation(&mut self, generation: u64) {
        if let Ok(mut shell) = self.shell.try_write() {
            shell.finish_transition(generation);
        }
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.shell.write().set_viewport_height(height);
    }

    pub fn set_trigger_top(&mut self, top: f64) {
        self.shell.write().set_trigger_top(top);
    }

    pub fn is_open(&self) -> bool {
        self.shell.read().is_open()
    }

    /// Open the level titled `title` below the current one
    pub fn drill_in(&mut self, title: &str) {
        self.active_path.write().push(title);
        tracing::debug!(path = ?self.active_path.peek().as_slice(), "drilled into menu level");
    }

    /// Return to `parent`; may also close the panel, depending on config
    pub fn back(&mut self, parent: &ParentLink) {
        let left = self.active_path.write().pop();
        tracing::debug!(left = ?left, back_to = %parent.title, "left menu level");

        let closes = self.config.peek().back_behavior.closes_panel(parent);
        if closes {
            self.close();
        }
    }

    pub fn layout(&self, key: &LevelKey) -> LevelLayout {
        let rule = self.config.read().active_match;
        LevelLayout::compute(key.depth, &key.title, &self.active_path.read(), rule)
    }

    pub fn is_current(&self, key: &LevelKey) -> bool {
        self.active_path.read().is_current(key.depth, &key.title)
    }

    pub fn menu_height(&self) -> f64 {
        self.heights.read().height()
    }

    pub fn settle_delay(&self) -> Duration {
        self.config.peek().settle_delay()
    }

    pub fn begin_settle(&mut self, key: &LevelKey) -> SettleTicket {
        self.heights.write().begin(key)
    }

    pub fn cancel_settle(&mut self, key: &LevelKey) {
        // the shell may already be gone when a level unmounts with it
        if let Ok(mut heights) = self.heights.try_write() {
            heights.cancel(key);
        }
    }

    /// Hand in a measured height; true when it became the menu height
    pub fn complete_settle(&mut self, ticket: SettleTicket, height: f64) -> bool {
        let key = ticket.key().clone();
        let outcome = {
            let path = self.active_path.peek();
            self.heights.write().complete(ticket, height, &path)
        };
        match outcome {
            SettleOutcome::Applied => {
                tracing::debug!(level = %key.title, height, "menu height updated");
                true
            }
            other => {
                tracing::trace!(level = %key.title, ?other, "height report dropped");
                false
            }
        }
    }
}
