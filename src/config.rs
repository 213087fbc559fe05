//! Navigation settings and the constants behind their defaults

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{NavError, NavResult};
use crate::types::ParentLink;

/// Fade/slide duration of the panel, in milliseconds
pub const ANIMATION_DURATION_MS: u64 = 200;
/// Wait before a freshly current level reports its height, in milliseconds
pub const SETTLE_DELAY_MS: u64 = 200;
/// Height of the fixed header that sits above the panel (px)
pub const MOBILE_NAV_HEIGHT: f64 = 44.0;
/// Menu height used until a level reports (px)
pub const DEFAULT_MENU_HEIGHT: f64 = 1000.0;
pub const ROOT_TITLE: &str = "Home";
pub const HOME_LABEL: &str = "Documentation menu";
/// Section identifier that suppresses the group label
pub const UNNAMED_SECTION: &str = "noname";
/// DOM id of the `nav` element; clicks outside it close the panel
pub const NAV_ELEMENT_ID: &str = "docs-mobile-nav";
/// DOM id of the scrollable panel
pub const PANEL_ELEMENT_ID: &str = "docs-mobile-nav-panel";

/// How a level decides whether it is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveMatch {
    /// Active when its title appears anywhere in the active path.
    /// Ancestors stay active, and levels sharing a title activate together.
    /// Same-titled siblings also count as current together under either
    /// rule; only their pending height reports are kept apart.
    #[default]
    Contains,
    /// Active only when it is the current level
    TopOfStack,
}

/// What the back affordance does besides popping the active path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackBehavior {
    /// Also close the whole panel when the parent links to a page
    #[default]
    CloseWhenParentHasSlug,
    PopOnly,
}

impl BackBehavior {
    /// Whether going back to `parent` closes the panel
    pub fn closes_panel(self, parent: &ParentLink) -> bool {
        match self {
            BackBehavior::CloseWhenParentHasSlug => parent.slug.is_some(),
            BackBehavior::PopOnly => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub root_title: String,
    pub home_label: String,
    pub site_href: String,
    pub header_height: f64,
    pub animation_ms: u64,
    pub settle_delay_ms: u64,
    pub initial_menu_height: f64,
    pub active_match: ActiveMatch,
    pub back_behavior: BackBehavior,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            root_title: ROOT_TITLE.to_string(),
            home_label: HOME_LABEL.to_string(),
            site_href: "/".to_string(),
            header_height: MOBILE_NAV_HEIGHT,
            animation_ms: ANIMATION_DURATION_MS,
            settle_delay_ms: SETTLE_DELAY_MS,
            initial_menu_height: DEFAULT_MENU_HEIGHT,
            active_match: ActiveMatch::default(),
            back_behavior: BackBehavior::default(),
        }
    }
}

impl NavConfig {
    /// Parse settings from JSON; missing keys fall back to the defaults
    pub fn from_json(json: &str) -> NavResult<Self> {
        let config: NavConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> NavResult<()> {
        if self.root_title.trim().is_empty() {
            return Err(NavError::InvalidConfig("root_title must not be empty".into()));
        }
        if !self.header_height.is_finite() || self.header_height < 0.0 {
            return Err(NavError::InvalidConfig(format!(
                "header_height must be a non-negative number, got {}",
                self.header_height
            )));
        }
        if !self.initial_menu_height.is_finite() || self.initial_menu_height < 0.0 {
            return Err(NavError::InvalidConfig(format!(
                "initial_menu_height must be a non-negative number, got {}",
                self.initial_menu_height
            )));
        }
        Ok(())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Animation duration in seconds, as CSS transitions expect it
    pub fn animation_secs(&self) -> f64 {
        self.animation_duration().as_secs_f64()
    }
}
