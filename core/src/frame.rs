use crate::catalog::{GridPlacement, ImageKey};
use crate::particles::ParticleFrame;
use crate::state::BentoState;

pub const FOCUSED_Z_INDEX: i32 = 10;
pub const FOCUSED_SCALE: f32 = 1.05;
pub const RESTING_SCALE: f32 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub enum FrameLayout {
    Grid {
        column_template: String,
        row_template: String,
    },
    /// Single column, one full-width cell per row.
    Stack,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CellFrame {
    pub index: usize,
    pub image: ImageKey,
    pub label: Option<&'static str>,
    pub contain: bool,
    pub placement: Option<GridPlacement>,
    pub z_index: i32,
    pub scale: f32,
    pub focused: bool,
    pub particles: Vec<ParticleFrame>,
}

impl CellFrame {
    pub fn transform(&self) -> String {
        format!("scale({})", self.scale)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridFrame {
    pub layout: FrameLayout,
    pub cells: Vec<CellFrame>,
    pub show_switch: bool,
    pub adaptive_enabled: bool,
}

impl GridFrame {
    pub fn build(state: &BentoState, now_ms: f64) -> Self {
        let layout = if state.is_mobile {
            FrameLayout::Stack
        } else {
            FrameLayout::Grid {
                column_template: state.weights.column_template(),
                row_template: state.weights.row_template(),
            }
        };
        let focused_cell = state.focused_cell();
        let cells = state
            .variant
            .cells()
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let focused = focused_cell == Some(index);
                let particles = match state.burst {
                    Some(burst) if focused && burst.cell == index => burst.frames(now_ms),
                    _ => Vec::new(),
                };
                CellFrame {
                    index,
                    image: cell.image,
                    label: cell.label,
                    contain: cell.contain,
                    placement: (!state.is_mobile).then_some(cell.placement),
                    z_index: if focused {
                        FOCUSED_Z_INDEX
                    } else {
                        cell.stack_order
                    },
                    scale: if focused { FOCUSED_SCALE } else { RESTING_SCALE },
                    focused,
                    particles,
                }
            })
            .collect();
        Self {
            layout,
            cells,
            show_switch: !state.is_mobile,
            adaptive_enabled: state.adaptive_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::BentoAction;
    use crate::config::BentoConfig;
    use crate::grid::GridRect;
    use crate::particles::PARTICLE_COUNT;

    #[test]
    fn desktop_frame_carries_templates_and_placements() {
        let mut state = BentoState::new(&BentoConfig::default(), 1280.0);
        state.apply(&BentoAction::PointerMove {
            client_x: 150.0,
            client_y: 75.0,
            container: GridRect::new(0.0, 0.0, 1200.0, 900.0),
        });
        let frame = GridFrame::build(&state, 0.0);
        assert_eq!(
            frame.layout,
            FrameLayout::Grid {
                column_template: "1.4fr 0.9fr 0.9fr 0.9fr".to_string(),
                row_template: "1.4fr 0.9fr 0.9fr 0.9fr 0.9fr 0.9fr".to_string(),
            }
        );
        assert!(frame.cells.iter().all(|cell| cell.placement.is_some()));
        assert!(frame.show_switch);
    }

    #[test]
    fn focused_cell_is_raised_and_bursts() {
        let mut state = BentoState::new(&BentoConfig::default(), 1280.0);
        state.apply(&BentoAction::PointerEnter { cell: 2, now_ms: 100.0 });
        let frame = GridFrame::build(&state, 300.0);
        let focused: Vec<_> = frame.cells.iter().filter(|cell| cell.focused).collect();
        assert_eq!(focused.len(), 1);
        assert_eq!(focused[0].index, 2);
        assert_eq!(focused[0].z_index, FOCUSED_Z_INDEX);
        assert_eq!(focused[0].transform(), "scale(1.05)");
        assert_eq!(focused[0].particles.len(), PARTICLE_COUNT);
        assert!(frame
            .cells
            .iter()
            .filter(|cell| !cell.focused)
            .all(|cell| cell.particles.is_empty() && cell.z_index == 1 && cell.scale == 1.0));
    }

    #[test]
    fn mobile_frame_stacks_cells() {
        let mut state = BentoState::new(&BentoConfig::default(), 500.0);
        state.apply(&BentoAction::Tap { cell: 0, now_ms: 0.0 });
        let frame = GridFrame::build(&state, 1000.0);
        assert_eq!(frame.layout, FrameLayout::Stack);
        assert!(!frame.show_switch);
        assert!(frame.cells.iter().all(|cell| cell.placement.is_none()));
        assert!(frame.cells[0].focused);
        assert!(frame.cells[0].particles.is_empty());
    }
}
