pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportMode {
    Mobile,
    Desktop,
}

impl ViewportMode {
    pub fn classify(viewport_width: f32) -> Self {
        Self::from_mobile(is_mobile_width(viewport_width))
    }

    pub fn from_mobile(is_mobile: bool) -> Self {
        if is_mobile {
            ViewportMode::Mobile
        } else {
            ViewportMode::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, ViewportMode::Mobile)
    }
}

pub fn is_mobile_width(viewport_width: f32) -> bool {
    viewport_width < MOBILE_BREAKPOINT_PX
}
