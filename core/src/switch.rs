pub const SWITCH_WIDTH_PX: f32 = 80.0;
pub const SWITCH_HEIGHT_PX: f32 = 40.0;
/// Space kept free at the right and bottom edges while dragging.
pub const SWITCH_DRAG_MARGIN_PX: f32 = 80.0;
pub const SWITCH_KNOB_TRAVEL_PX: f32 = 40.0;
pub const SWITCH_INITIAL_POSITION: (f32, f32) = (24.0, 24.0);
pub const SWITCH_CLICK_SLOP_PX: f32 = 4.0;
/// Longest press, in milliseconds, that still counts as a click.
pub const SWITCH_CLICK_MAX_MS: f64 = 240.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchRelease {
    Click,
    Dragged,
    /// Pressed in place for too long to count as a click.
    Held,
    Ignored,
}

#[derive(Clone, Copy, Debug)]
struct SwitchGrab {
    pointer_id: Option<i32>,
    start: (f32, f32),
    origin: (f32, f32),
    started_ms: f64,
    moved: bool,
}

/// Position of the floating adaptive-mode switch and the drag in progress.
#[derive(Clone, Copy, Debug)]
pub struct SwitchDrag {
    position: (f32, f32),
    grab: Option<SwitchGrab>,
}

impl SwitchDrag {
    pub fn new() -> Self {
        Self {
            position: SWITCH_INITIAL_POSITION,
            grab: None,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    pub fn press(&mut self, pointer_id: Option<i32>, x: f32, y: f32, now_ms: f64) {
        self.grab = Some(SwitchGrab {
            pointer_id,
            start: (x, y),
            origin: self.position,
            started_ms: now_ms,
            moved: false,
        });
    }

    /// Follows the pointer; returns true when the switch moved.
    pub fn drag_to(
        &mut self,
        pointer_id: Option<i32>,
        x: f32,
        y: f32,
        viewport: (f32, f32),
    ) -> bool {
        let Some(grab) = self.grab.as_mut() else {
            return false;
        };
        if grab.pointer_id != pointer_id {
            return false;
        }
        let dx = x - grab.start.0;
        let dy = y - grab.start.1;
        if !grab.moved && dx * dx + dy * dy <= SWITCH_CLICK_SLOP_PX * SWITCH_CLICK_SLOP_PX {
            return false;
        }
        grab.moved = true;
        let next = clamp_switch_position((grab.origin.0 + dx, grab.origin.1 + dy), viewport);
        if next == self.position {
            return false;
        }
        self.position = next;
        true
    }

    pub fn release(&mut self, pointer_id: Option<i32>, now_ms: f64) -> SwitchRelease {
        match self.grab {
            Some(grab) if grab.pointer_id == pointer_id => {
                self.grab = None;
                let held_ms = (now_ms - grab.started_ms).max(0.0);
                if grab.moved {
                    SwitchRelease::Dragged
                } else if held_ms > SWITCH_CLICK_MAX_MS {
                    SwitchRelease::Held
                } else {
                    SwitchRelease::Click
                }
            }
            _ => SwitchRelease::Ignored,
        }
    }

    pub fn cancel(&mut self) {
        self.grab = None;
    }

    /// Pulls the switch back on screen after the viewport shrinks.
    pub fn fit_viewport(&mut self, viewport: (f32, f32)) -> bool {
        let next = clamp_switch_position(self.position, viewport);
        if next == self.position {
            return false;
        }
        self.position = next;
        true
    }
}

impl Default for SwitchDrag {
    fn default() -> Self {
        Self::new()
    }
}

pub fn clamp_switch_position(position: (f32, f32), viewport: (f32, f32)) -> (f32, f32) {
    let max_x = (viewport.0 - SWITCH_DRAG_MARGIN_PX).max(0.0);
    let max_y = (viewport.1 - SWITCH_DRAG_MARGIN_PX).max(0.0);
    (position.0.clamp(0.0, max_x), position.1.clamp(0.0, max_y))
}

pub fn knob_offset(enabled: bool) -> f32 {
    if enabled {
        SWITCH_KNOB_TRAVEL_PX
    } else {
        0.0
    }
}
