use crate::action::BentoAction;
use crate::catalog::GridVariant;
use crate::config::BentoConfig;
use crate::grid::{compute_weights, LayoutWeights};
use crate::particles::ParticleBurst;
use crate::viewport::is_mobile_width;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusState {
    #[default]
    Idle,
    /// Desktop hover.
    Focused(usize),
    /// Mobile tap.
    Zoomed(usize),
}

impl FocusState {
    pub fn cell(self) -> Option<usize> {
        match self {
            FocusState::Idle => None,
            FocusState::Focused(cell) | FocusState::Zoomed(cell) => Some(cell),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BentoState {
    pub variant: GridVariant,
    pub is_mobile: bool,
    pub adaptive_enabled: bool,
    pub focus: FocusState,
    pub weights: LayoutWeights,
    pub burst: Option<ParticleBurst>,
}

impl BentoState {
    pub fn new(config: &BentoConfig, viewport_width: f32) -> Self {
        let variant = config.variant;
        let is_mobile = is_mobile_width(viewport_width);
        Self {
            variant,
            is_mobile,
            adaptive_enabled: config.adaptive && !is_mobile,
            focus: FocusState::Idle,
            weights: LayoutWeights::neutral(variant.columns(), variant.rows()),
            burst: None,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.variant.cells().len()
    }

    pub fn adaptive_active(&self) -> bool {
        !self.is_mobile && self.adaptive_enabled
    }

    pub fn focused_cell(&self) -> Option<usize> {
        self.focus.cell()
    }

    /// Applies one event; returns true when anything visible changed.
    pub fn apply(&mut self, action: &BentoAction) -> bool {
        match *action {
            BentoAction::Resize { viewport_width } => self.resize(viewport_width),
            BentoAction::PointerMove {
                client_x,
                client_y,
                container,
            } => {
                if !self.adaptive_active() {
                    return false;
                }
                let Some(weights) = compute_weights(
                    client_x,
                    client_y,
                    container,
                    self.variant.columns(),
                    self.variant.rows(),
                ) else {
                    return false;
                };
                if weights == self.weights {
                    return false;
                }
                self.weights = weights;
                true
            }
            BentoAction::PointerEnter { cell, now_ms } => {
                if self.is_mobile || cell >= self.cell_count() {
                    return false;
                }
                if self.focus == FocusState::Focused(cell) {
                    return false;
                }
                self.enter_focus(FocusState::Focused(cell), now_ms);
                true
            }
            BentoAction::PointerLeave { cell } => {
                if self.is_mobile || self.focus != FocusState::Focused(cell) {
                    return false;
                }
                self.clear_focus();
                true
            }
            BentoAction::Tap { cell, now_ms } => {
                if !self.is_mobile || cell >= self.cell_count() {
                    return false;
                }
                if self.focus == FocusState::Zoomed(cell) {
                    self.clear_focus();
                } else {
                    self.enter_focus(FocusState::Zoomed(cell), now_ms);
                }
                true
            }
            BentoAction::ToggleAdaptive => {
                if self.is_mobile {
                    return false;
                }
                self.set_adaptive(!self.adaptive_enabled)
            }
            BentoAction::SetAdaptive { enabled } => {
                if self.is_mobile && enabled {
                    return false;
                }
                self.set_adaptive(enabled)
            }
            BentoAction::Tick { now_ms } => match self.burst {
                Some(burst) if burst.is_finished(now_ms) => {
                    self.burst = None;
                    true
                }
                Some(_) => true,
                None => false,
            },
        }
    }

    fn resize(&mut self, viewport_width: f32) -> bool {
        let is_mobile = is_mobile_width(viewport_width);
        if is_mobile == self.is_mobile {
            return false;
        }
        self.is_mobile = is_mobile;
        self.clear_focus();
        if is_mobile {
            self.adaptive_enabled = false;
            self.weights.reset();
        }
        true
    }

    fn set_adaptive(&mut self, enabled: bool) -> bool {
        if self.adaptive_enabled == enabled {
            return false;
        }
        self.adaptive_enabled = enabled;
        if !enabled {
            self.weights.reset();
        }
        true
    }

    fn enter_focus(&mut self, focus: FocusState, now_ms: f64) {
        self.focus = focus;
        self.burst = focus.cell().map(|cell| ParticleBurst::new(cell, now_ms));
    }

    fn clear_focus(&mut self) {
        self.focus = FocusState::Idle;
        self.burst = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> BentoState {
        BentoState::new(&BentoConfig::default(), 1280.0)
    }

    #[test]
    fn initial_mount_classifies_viewport() {
        let state = BentoState::new(&BentoConfig::default(), 600.0);
        assert!(state.is_mobile);
        assert!(!state.adaptive_enabled);
        assert!(state.weights.is_neutral());
        assert!(desktop().adaptive_active());
    }

    #[test]
    fn focus_starts_and_clears_burst() {
        let mut state = desktop();
        assert!(state.apply(&BentoAction::PointerEnter { cell: 1, now_ms: 10.0 }));
        assert_eq!(state.focus, FocusState::Focused(1));
        assert_eq!(state.burst, Some(ParticleBurst::new(1, 10.0)));
        assert!(state.apply(&BentoAction::PointerLeave { cell: 1 }));
        assert_eq!(state.focus, FocusState::Idle);
        assert!(state.burst.is_none());
    }

    #[test]
    fn tick_expires_burst_but_keeps_focus() {
        let mut state = desktop();
        state.apply(&BentoAction::PointerEnter { cell: 0, now_ms: 0.0 });
        assert!(state.apply(&BentoAction::Tick { now_ms: 400.0 }));
        assert!(state.burst.is_some());
        assert!(state.apply(&BentoAction::Tick { now_ms: 800.0 }));
        assert!(state.burst.is_none());
        assert_eq!(state.focus, FocusState::Focused(0));
        assert!(!state.apply(&BentoAction::Tick { now_ms: 900.0 }));
    }

    #[test]
    fn toggle_ignored_on_mobile() {
        let mut state = BentoState::new(&BentoConfig::default(), 500.0);
        assert!(!state.apply(&BentoAction::ToggleAdaptive));
        assert!(!state.apply(&BentoAction::SetAdaptive { enabled: true }));
        assert!(!state.adaptive_enabled);
    }
}
