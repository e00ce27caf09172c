use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    Power2InOut,
    Power3Out,
    Power3InOut,
    /// Overshoots past the end before settling; the argument is the overshoot.
    BackOut(f32),
    /// Leaves the rest pose and returns to it, reaching the start pose at
    /// the midpoint.
    Pulse,
}

impl Ease {
    /// Maps linear progress in `[0, 1]` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::Power3Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::BackOut(overshoot) => {
                let c3 = overshoot + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + overshoot * (t - 1.0).powi(2)
            }
            Ease::Pulse => 1.0 - (PI * t).sin(),
        }
    }
}
