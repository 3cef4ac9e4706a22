//! Top-of-page navigation progress bar.
//!
//! Mirrors the router's busy/idle lifecycle: while a navigation is pending
//! the bar creeps toward 90% on a long animation, and when the router
//! settles it snaps to 100% and hides after the completion animation. If
//! the creep finishes before the router does, the bar pulses in place
//! until completion.

/// Visible phase of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressPhase {
    #[default]
    Hidden,
    Loading,
    Completing,
}

/// Easing curve the renderer applies to a width animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    CircOut,
    CircIn,
    EaseIn,
}

/// Width animation to run for the current phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressAnimation {
    /// Target bar width in percent.
    pub width_pct: f32,
    pub duration_secs: f32,
    pub easing: Easing,
}

/// Slide the bar runs as it unmounts: off to the right while fading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitSlide {
    /// Horizontal offset in percent of the bar width.
    pub x_pct: f32,
    pub opacity: f32,
    pub duration_secs: f32,
    pub easing: Easing,
}

/// The exit slide is the same regardless of how far the bar got.
pub const EXIT_SLIDE: ExitSlide = ExitSlide {
    x_pct: 100.0,
    opacity: 0.7,
    duration_secs: 0.7,
    easing: Easing::EaseIn,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationProgress {
    phase: ProgressPhase,
    pulse: bool,
}

impl NavigationProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }

    /// Whether the bar should pulse: the creep ran out while the router
    /// was still busy.
    pub fn pulsing(&self) -> bool {
        self.pulse
    }

    /// Feed every router state change: busy starts the creep, idle starts
    /// the completion snap.
    pub fn router_state(&mut self, busy: bool) {
        self.phase = if busy {
            ProgressPhase::Loading
        } else {
            ProgressPhase::Completing
        };
    }

    /// Animation for the current phase; `None` while hidden.
    pub fn animation(&self) -> Option<ProgressAnimation> {
        match self.phase {
            ProgressPhase::Hidden => None,
            ProgressPhase::Loading => Some(ProgressAnimation {
                width_pct: 90.0,
                duration_secs: 60.0,
                easing: Easing::CircOut,
            }),
            ProgressPhase::Completing => Some(ProgressAnimation {
                width_pct: 100.0,
                duration_secs: 0.5,
                easing: Easing::CircIn,
            }),
        }
    }

    /// The renderer reports each width animation finishing here.
    pub fn animation_finished(&mut self) {
        self.pulse = false;
        match self.phase {
            ProgressPhase::Completing => self.phase = ProgressPhase::Hidden,
            ProgressPhase::Loading => self.pulse = true,
            ProgressPhase::Hidden => {}
        }
    }
}
