use super::object::OsuDifficultyObject;

const BROKEN_GAMEFIELD_ROUNDING_ALLOWANCE: f32 = 1.00041;

/// Radius of a circle at scale 1.
pub const OBJECT_RADIUS: f32 = 64.0;

/// Fields around the scaling of hit objects.
///
/// All objects of a chart share the same circle size so the scaling is only
/// computed once.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScalingFactor {
    /// `NORMALIZED_RADIUS / radius` and then adjusted if `radius < 30`
    pub factor: f32,
    pub radius: f64,
}

impl ScalingFactor {
    pub fn new(cs: f64) -> Self {
        let scale =
            (1.0 - 0.7 * ((cs - 5.0) / 5.0)) as f32 / 2.0 * BROKEN_GAMEFIELD_ROUNDING_ALLOWANCE;

        let radius = f64::from(OBJECT_RADIUS * scale);
        let factor = OsuDifficultyObject::NORMALIZED_RADIUS as f32 / radius as f32;

        let factor = if radius < 30.0 {
            factor * (1.0 + (30.0 - radius as f32).min(5.0) / 50.0)
        } else {
            factor
        };

        Self { factor, radius }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_circles_get_bonus() {
        let regular = ScalingFactor::new(4.0);
        let tiny = ScalingFactor::new(9.0);

        assert!(regular.radius > 30.0);
        assert!(tiny.radius < 30.0);

        let tiny_without_bonus = OsuDifficultyObject::NORMALIZED_RADIUS as f32 / tiny.radius as f32;
        assert!(tiny.factor > tiny_without_bonus);
    }
}
