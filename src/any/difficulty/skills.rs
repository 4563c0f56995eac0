use crate::util::{float_ext::FloatExt, strains_vec::StrainsVec};

/// A skill that accumulates strain over difficulty objects and records the
/// highest strain of each section.
///
/// Implementations are generated through `define_skill!`.
pub trait StrainSkill: Sized {
    type DifficultyObject<'a>;
    type DifficultyObjects<'a>: ?Sized;

    const DECAY_WEIGHT: f64 = 0.9;
    const SECTION_LENGTH: i32 = 400;

    fn process<'a>(
        &mut self,
        curr: &Self::DifficultyObject<'a>,
        objects: &Self::DifficultyObjects<'a>,
    );

    /// Strain values of all processed objects.
    fn object_strains(&self) -> &[f64];

    fn count_top_weighted_strains(&self, difficulty_value: f64) -> f64;

    fn save_current_peak(&mut self);

    fn start_new_section_from<'a>(
        &mut self,
        time: f64,
        curr: &Self::DifficultyObject<'a>,
        objects: &Self::DifficultyObjects<'a>,
    );

    fn current_strain_peaks(&self) -> StrainsVec;

    fn into_current_strain_peaks(self) -> StrainsVec;

    fn get_current_strain_peaks(
        mut strain_peaks: StrainsVec,
        current_section_peak: f64,
    ) -> StrainsVec {
        strain_peaks.push(current_section_peak);

        strain_peaks
    }

    fn difficulty_value(current_strain_peaks: StrainsVec) -> f64;

    fn into_difficulty_value(self) -> f64;

    fn cloned_difficulty_value(&self) -> f64;
}

/// A [`StrainSkill`] whose strain decays exponentially over time and is
/// increased by a scaled evaluator value on each object.
pub trait StrainDecaySkill: StrainSkill {
    fn calculate_initial_strain<'a>(
        &self,
        time: f64,
        curr: &Self::DifficultyObject<'a>,
        objects: &Self::DifficultyObjects<'a>,
    ) -> f64;

    fn strain_value_at<'a>(
        &mut self,
        curr: &Self::DifficultyObject<'a>,
        objects: &Self::DifficultyObjects<'a>,
    ) -> f64;

    fn strain_decay(ms: f64) -> f64;
}

/// Counts the objects whose strain is close to the top strain, weighted by
/// how close they are.
pub fn count_top_weighted_strains(object_strains: &[f64], difficulty_value: f64) -> f64 {
    if object_strains.is_empty() {
        return 0.0;
    }

    // What would the top strain be if all strain values were identical
    let consistent_top_strain = difficulty_value / 10.0;

    if FloatExt::eq(consistent_top_strain, 0.0) {
        return 0.0;
    }

    object_strains
        .iter()
        .map(|s| 1.1 / (1.0 + f64::exp(-10.0 * (s / consistent_top_strain - 0.88))))
        .sum()
}

/// Weighted sum of the sorted non-zero peaks.
pub fn difficulty_value(current_strain_peaks: StrainsVec, decay_weight: f64) -> f64 {
    let mut difficulty = 0.0;
    let mut weight = 1.0;

    // Sections with 0 strain are excluded to avoid worst-case time
    // complexity of the following sort. They would not contribute anyway.
    let mut peaks = current_strain_peaks;

    for strain in peaks.sorted_non_zero_iter() {
        difficulty += strain * weight;
        weight *= decay_weight;
    }

    difficulty
}

/// Ratio between the mean of the middle band (40th to 60th percentile) and
/// the mean of the top 20% of the sorted non-zero peaks.
///
/// Values near 1 indicate evenly distributed difficulty, values near 0 a
/// few isolated spikes. Fewer than 10 non-zero peaks yield `1.0`.
pub fn consistency_factor(current_strain_peaks: StrainsVec) -> f64 {
    const MIN_PEAKS: usize = 10;

    let mut peaks = current_strain_peaks;
    peaks.retain_non_zero_and_sort();

    if peaks.len() < MIN_PEAKS {
        return 1.0;
    }

    let peaks = peaks.as_slice();
    let chunk = peaks.len() / 10;

    let mean = |band: &[f64]| band.iter().sum::<f64>() / band.len() as f64;

    let hard = mean(&peaks[..2 * chunk]);
    let mid = mean(&peaks[4 * chunk..6 * chunk]);

    if FloatExt::eq(hard, 0.0) {
        return 0.0;
    }

    mid / hard
}

pub fn strain_decay(ms: f64, strain_decay_base: f64) -> f64 {
    f64::powf(strain_decay_base, ms / 1000.0)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn weighted_sum_ignores_zeros() {
        let peaks = StrainsVec::from(vec![0.0, 1.0, 0.0, 2.0]);

        assert!((difficulty_value(peaks, 0.9) - (2.0 + 0.9)).abs() < 1e-12);
    }

    #[test]
    fn empty_peaks() {
        assert!(difficulty_value(StrainsVec::default(), 0.9).abs() < f64::EPSILON);
        assert!(count_top_weighted_strains(&[], 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn consistency_needs_ten_peaks() {
        let few = StrainsVec::from(vec![5.0; 9]);
        assert!((consistency_factor(few) - 1.0).abs() < f64::EPSILON);

        let uniform = StrainsVec::from(vec![5.0; 30]);
        assert!((consistency_factor(uniform) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn consistency_of_spiky_peaks() {
        let mut peaks = vec![1.0; 16];
        peaks.extend([10.0; 4]);

        // top band: [10, 10, 10, 10], middle band: [1, 1, 1, 1]
        let factor = consistency_factor(StrainsVec::from(peaks));
        assert!((factor - 0.1).abs() < 1e-12);

        let mut peaks = vec![1.0; 18];
        peaks.extend([10.0, 10.0]);

        // top band: [10, 10, 1, 1]
        let factor = consistency_factor(StrainsVec::from(peaks));
        assert!((factor - 1.0 / 5.5).abs() < 1e-12);
    }

    #[test]
    fn top_weighted_strains_of_uniform_strains() {
        let strains = vec![2.0; 20];
        let difficulty = difficulty_value(StrainsVec::from(strains.clone()), 0.9);
        let count = count_top_weighted_strains(&strains, difficulty);

        assert!(count > 0.0);
        assert!(count <= 1.1 * strains.len() as f64);
    }

    proptest! {
        #[test]
        fn decay_is_monotonic(base in 0.01_f64..1.0, ms in 0.0_f64..10_000.0, extra in 0.0_f64..5_000.0) {
            prop_assert!(strain_decay(ms + extra, base) <= strain_decay(ms, base));
        }

        #[test]
        fn consistency_in_unit_interval(peaks in prop::collection::vec(0.0_f64..100.0, 0..200)) {
            let factor = consistency_factor(StrainsVec::from(peaks));

            prop_assert!((0.0..=1.0).contains(&factor));
        }
    }
}
