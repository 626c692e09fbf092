use crate::grid::GridRect;

#[derive(Clone, Debug)]
pub enum BentoAction {
    Resize {
        viewport_width: f32,
    },
    PointerMove {
        client_x: f32,
        client_y: f32,
        container: GridRect,
    },
    PointerEnter {
        cell: usize,
        now_ms: f64,
    },
    PointerLeave {
        cell: usize,
    },
    Tap {
        cell: usize,
        now_ms: f64,
    },
    ToggleAdaptive,
    SetAdaptive {
        enabled: bool,
    },
    Tick {
        now_ms: f64,
    },
}
