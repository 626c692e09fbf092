use js_sys::Date;
use web_sys::{DomRect, Element, PointerEvent};

use bento_core::GridRect;

pub(crate) trait HasClientRect {
    fn client_rect(&self) -> DomRect;
}

impl HasClientRect for Element {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

pub(crate) fn grid_rect(element: &impl HasClientRect) -> GridRect {
    let rect = element.client_rect();
    GridRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct PointerSample {
    pub id: Option<i32>,
    pub client_x: f32,
    pub client_y: f32,
}

impl PointerSample {
    pub(crate) fn from_event(event: &PointerEvent) -> Self {
        Self {
            id: Some(event.pointer_id()),
            client_x: event.client_x() as f32,
            client_y: event.client_y() as f32,
        }
    }
}

pub(crate) fn now_ms() -> f64 {
    Date::now()
}

pub(crate) fn viewport_size() -> Option<(f32, f32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}
