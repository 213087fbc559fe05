//! Open/close state of the navigation panel and its animation

/// Where the panel is in its fade/slide cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelPhase {
    Hidden,
    Entering,
    Shown,
    /// Fading out but still stacked above the page
    Leaving,
}

/// Animation started by an open/close request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelTransition {
    FadeIn { generation: u64 },
    FadeOut { generation: u64 },
}

impl PanelTransition {
    pub fn generation(self) -> u64 {
        match self {
            PanelTransition::FadeIn { generation } | PanelTransition::FadeOut { generation } => {
                generation
            }
        }
    }
}

/// Visual state of the panel for one phase
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelStyle {
    pub opacity: f64,
    pub translate_y: f64,
    pub z_index: i32,
}

impl PanelStyle {
    pub const HIDDEN: PanelStyle = PanelStyle {
        opacity: 0.0,
        translate_y: 10.0,
        z_index: -1,
    };
    pub const SHOWN: PanelStyle = PanelStyle {
        opacity: 1.0,
        translate_y: 0.0,
        z_index: 20,
    };

    /// Inline CSS; opacity and transform ease over `duration_secs`
    pub fn to_css(self, duration_secs: f64) -> String {
        format!(
            "opacity: {}; transform: translateY({}px); z-index: {}; \
             transition: opacity {duration_secs}s, transform {duration_secs}s;",
            self.opacity, self.translate_y, self.z_index
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShellState {
    open: bool,
    phase: PanelPhase,
    generation: u64,
    viewport_height: Option<f64>,
    trigger_top: Option<f64>,
    panel_height: Option<f64>,
    header_height: f64,
}

impl ShellState {
    pub fn new(header_height: f64) -> Self {
        Self {
            open: false,
            phase: PanelPhase::Hidden,
            generation: 0,
            viewport_height: None,
            trigger_top: None,
            panel_height: None,
            header_height,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Bumped on every transition so stale completions can be ignored
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn toggle(&mut self) -> Option<PanelTransition> {
        self.set_open(!self.open)
    }

    pub fn close(&mut self) -> Option<PanelTransition> {
        self.set_open(false)
    }

    pub fn open(&mut self) -> Option<PanelTransition> {
        self.set_open(true)
    }

    /// Returns the animation started, or `None` when nothing changed
    pub fn set_open(&mut self, open: bool) -> Option<PanelTransition> {
        if self.open == open {
            return None;
        }
        self.open = open;
        self.generation += 1;
        let generation = self.generation;

        if open {
            self.phase = PanelPhase::Entering;
            self.recompute_panel_height();
            Some(PanelTransition::FadeIn { generation })
        } else {
            self.phase = PanelPhase::Leaving;
            Some(PanelTransition::FadeOut { generation })
        }
    }

    /// Settle the animation started at `generation`. Returns false if a newer
    /// transition has replaced it.
    pub fn finish_transition(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = match self.phase {
            PanelPhase::Entering | PanelPhase::Shown => PanelPhase::Shown,
            PanelPhase::Leaving | PanelPhase::Hidden => PanelPhase::Hidden,
        };
        true
    }

    pub fn style(&self) -> PanelStyle {
        match self.phase {
            PanelPhase::Entering | PanelPhase::Shown => PanelStyle::SHOWN,
            PanelPhase::Leaving => PanelStyle {
                z_index: PanelStyle::SHOWN.z_index,
                ..PanelStyle::HIDDEN
            },
            PanelPhase::Hidden => PanelStyle::HIDDEN,
        }
    }

    /// Whether the panel may receive clicks
    pub fn is_interactive(&self) -> bool {
        matches!(self.phase, PanelPhase::Entering | PanelPhase::Shown)
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = Some(height);
        self.recompute_panel_height();
    }

    pub fn set_trigger_top(&mut self, top: f64) {
        self.trigger_top = Some(top);
        self.recompute_panel_height();
    }

    /// Scroll container height; kept at its last value while closed
    pub fn panel_height(&self) -> Option<f64> {
        self.panel_height
    }

    fn recompute_panel_height(&mut self) {
        if !self.open {
            return;
        }
        if let (Some(viewport), Some(top)) = (self.viewport_height, self.trigger_top) {
            self.panel_height = Some(panel_height(viewport, top, self.header_height));
        }
    }
}

/// Height left for the panel below the trigger. Not clamped.
pub fn panel_height(viewport_height: f64, trigger_top: f64, header_height: f64) -> f64 {
    viewport_height - trigger_top - header_height
}
