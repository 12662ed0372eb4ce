//! Per-button copy feedback with stale-revert protection.

/// Opaque handle identifying one feedback activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertToken {
    generation: u64,
}

/// Visual "copied" state for one copy affordance.
///
/// The host flips the state on with [`CopyFeedback::trigger`], schedules a
/// delayed [`CopyFeedback::revert`] with the returned token, and renders
/// from [`CopyFeedback::is_showing`]. Triggering again bumps the
/// generation, so a revert scheduled for an earlier click can never clear
/// the feedback of a later one.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    generation: u64,
    showing: bool,
}

impl CopyFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the feedback and invalidates any pending revert.
    pub fn trigger(&mut self) -> RevertToken {
        self.generation += 1;
        self.showing = true;
        RevertToken {
            generation: self.generation,
        }
    }

    /// Hides the feedback if `token` is still current. Returns whether the
    /// state changed.
    pub fn revert(&mut self, token: RevertToken) -> bool {
        if token.generation == self.generation && self.showing {
            self.showing = false;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.showing
    }
}
