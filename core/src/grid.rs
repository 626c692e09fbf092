use std::fmt::Write;

pub const INFLUENCE_RADIUS_PX: f32 = 150.0;
pub const WEIGHT_PEAK: f32 = 1.6;
pub const WEIGHT_MIN: f32 = 0.9;
pub const WEIGHT_MAX: f32 = 1.4;
pub const WEIGHT_NEUTRAL: f32 = 1.0;

/// Bounding box of the grid container in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl GridRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Pointer position relative to the container origin, if inside it.
    pub fn local_point(&self, client_x: f32, client_y: f32) -> Option<(f32, f32)> {
        if !self.has_area() {
            return None;
        }
        let x = client_x - self.left;
        let y = client_y - self.top;
        if !(0.0..=self.width).contains(&x) || !(0.0..=self.height).contains(&y) {
            return None;
        }
        Some((x, y))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutWeights {
    pub columns: Vec<f32>,
    pub rows: Vec<f32>,
}

impl LayoutWeights {
    pub fn neutral(columns: usize, rows: usize) -> Self {
        Self {
            columns: vec![WEIGHT_NEUTRAL; columns],
            rows: vec![WEIGHT_NEUTRAL; rows],
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.columns
            .iter()
            .chain(self.rows.iter())
            .all(|weight| *weight == WEIGHT_NEUTRAL)
    }

    pub fn reset(&mut self) {
        self.columns.iter_mut().for_each(|weight| *weight = WEIGHT_NEUTRAL);
        self.rows.iter_mut().for_each(|weight| *weight = WEIGHT_NEUTRAL);
    }

    pub fn column_template(&self) -> String {
        track_template(&self.columns)
    }

    pub fn row_template(&self) -> String {
        track_template(&self.rows)
    }
}

fn track_template(weights: &[f32]) -> String {
    let mut out = String::new();
    for (index, weight) in weights.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{weight}fr");
    }
    out
}

pub fn track_weight(distance: f32) -> f32 {
    if distance.is_nan() {
        return WEIGHT_MIN;
    }
    (WEIGHT_PEAK - distance / INFLUENCE_RADIUS_PX).clamp(WEIGHT_MIN, WEIGHT_MAX)
}

pub fn zone_centers(extent: f32, count: usize) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let zone = extent / count as f32;
    (0..count).map(|index| zone * (index as f32 + 0.5)).collect()
}

fn axis_weights(position: f32, extent: f32, count: usize) -> Vec<f32> {
    zone_centers(extent, count)
        .into_iter()
        .map(|center| track_weight((position - center).abs()))
        .collect()
}

/// Weights for a pointer at client coordinates over `container`.
///
/// Returns `None` when there is nothing to lay out: a collapsed container,
/// a pointer outside it, or zero tracks on either axis.
pub fn compute_weights(
    client_x: f32,
    client_y: f32,
    container: GridRect,
    columns: usize,
    rows: usize,
) -> Option<LayoutWeights> {
    if columns == 0 || rows == 0 {
        return None;
    }
    let (x, y) = container.local_point(client_x, client_y)?;
    Some(LayoutWeights {
        columns: axis_weights(x, container.width, columns),
        rows: axis_weights(y, container.height, rows),
    })
}
