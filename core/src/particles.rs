use std::f32::consts::TAU;

pub const PARTICLE_COUNT: usize = 12;
pub const PARTICLE_TRAVEL_PX: f32 = 100.0;
pub const PARTICLE_DURATION_MS: f64 = 800.0;
pub const PARTICLE_END_SCALE: f32 = 0.3;

// cubic-bezier(0, 0, 0.58, 1)
const EASE_OUT_X2: f32 = 0.58;
const EASE_SOLVE_STEPS: usize = 24;

/// One particle, offset from the centre of its cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleFrame {
    pub dx: f32,
    pub dy: f32,
    pub opacity: f32,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleBurst {
    pub cell: usize,
    pub started_ms: f64,
}

impl ParticleBurst {
    pub fn new(cell: usize, started_ms: f64) -> Self {
        Self { cell, started_ms }
    }

    pub fn progress(&self, now_ms: f64) -> f32 {
        let elapsed = (now_ms - self.started_ms).max(0.0);
        (elapsed / PARTICLE_DURATION_MS).min(1.0) as f32
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms - self.started_ms >= PARTICLE_DURATION_MS
    }

    /// Particles at `now_ms`; empty once the burst has run its course.
    pub fn frames(&self, now_ms: f64) -> Vec<ParticleFrame> {
        if self.is_finished(now_ms) {
            return Vec::new();
        }
        let eased = ease_out(self.progress(now_ms));
        (0..PARTICLE_COUNT)
            .map(|index| {
                let angle = particle_angle(index);
                ParticleFrame {
                    dx: angle.cos() * PARTICLE_TRAVEL_PX * eased,
                    dy: angle.sin() * PARTICLE_TRAVEL_PX * eased,
                    opacity: 1.0 - eased,
                    scale: 1.0 + (PARTICLE_END_SCALE - 1.0) * eased,
                }
            })
            .collect()
    }
}

pub fn particle_angle(index: usize) -> f32 {
    index as f32 * (TAU / PARTICLE_COUNT as f32)
}

fn bezier_axis(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    for _ in 0..EASE_SOLVE_STEPS {
        let mid = (lo + hi) * 0.5;
        if bezier_axis(mid, 0.0, EASE_OUT_X2) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier_axis((lo + hi) * 0.5, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        let delta = (actual - expected).abs();
        assert!(
            delta <= 1e-3,
            "expected {:.4} got {:.4} (delta {:.4})",
            expected,
            actual,
            delta
        );
    }

    #[test]
    fn angles_are_evenly_spaced() {
        assert_close(particle_angle(0), 0.0);
        assert_close(particle_angle(3), TAU / 4.0);
        assert_close(particle_angle(6), TAU / 2.0);
    }

    #[test]
    fn burst_starts_at_center() {
        let burst = ParticleBurst::new(2, 1000.0);
        let frames = burst.frames(1000.0);
        assert_eq!(frames.len(), PARTICLE_COUNT);
        for frame in frames {
            assert_close(frame.dx, 0.0);
            assert_close(frame.dy, 0.0);
            assert_close(frame.opacity, 1.0);
            assert_close(frame.scale, 1.0);
        }
    }

    #[test]
    fn burst_moves_outward_and_fades() {
        let burst = ParticleBurst::new(0, 0.0);
        let early = burst.frames(200.0);
        let late = burst.frames(700.0);
        assert!(late[0].dx > early[0].dx);
        assert!(late[0].opacity < early[0].opacity);
        assert!(late[0].scale < early[0].scale);
        assert!(late[0].dx <= PARTICLE_TRAVEL_PX);
        assert_close(late[3].dx, 0.0);
        assert!(late[3].dy > 0.0);
    }

    #[test]
    fn burst_ends_after_duration() {
        let burst = ParticleBurst::new(0, 500.0);
        assert!(!burst.is_finished(1299.0));
        assert!(burst.is_finished(1300.0));
        assert!(burst.frames(1300.0).is_empty());
    }

    #[test]
    fn ease_out_is_monotonic() {
        let mut prev = ease_out(0.0);
        assert_close(prev, 0.0);
        for step in 1..=20 {
            let next = ease_out(step as f32 / 20.0);
            assert!(next >= prev);
            prev = next;
        }
        assert_close(prev, 1.0);
        assert!(ease_out(0.5) > 0.5);
    }
}
