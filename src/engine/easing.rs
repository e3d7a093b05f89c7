/// Easing curves used by scrubbed timelines and snap tweens.
///
/// `Power2In` and `Power2Out` are cubic curves: the entrance of a pinned
/// section decelerates while its exit accelerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,
    Power2In,
    Power2Out,
}

impl Ease {
    /// Maps `t` in [0,1] onto the curve. Inputs outside the interval are
    /// clamped first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2In => t * t * t,
            Ease::Power2Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_share_endpoints() {
        for ease in [Ease::Linear, Ease::Power2In, Ease::Power2Out] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn ease_in_lags_and_ease_out_leads() {
        assert!(Ease::Power2In.apply(0.5) < 0.5);
        assert!(Ease::Power2Out.apply(0.5) > 0.5);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Ease::Power2Out.apply(-3.0), 0.0);
        assert_eq!(Ease::Power2In.apply(7.0), 1.0);
    }
}
