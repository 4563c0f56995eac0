/// The result of a difficulty calculation on an osu!standard map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OsuDifficultyAttributes {
    /// The difficulty of the aim skill.
    pub aim: f64,
    /// The number of sliders weighted by difficulty.
    pub aim_difficult_slider_count: f64,
    /// Weighted amount of objects whose aim strain is close to the top
    /// strain.
    pub aim_difficult_strain_count: f64,
    /// How evenly the aim difficulty is distributed across the map, between
    /// `0.0` (a few spikes) and `1.0` (even).
    pub aim_consistency: f64,
    /// The difficulty of the tapping skill.
    pub tapping: f64,
    /// The number of clickable objects weighted by difficulty.
    pub speed_note_count: f64,
    /// Weighted amount of objects whose tapping strain is close to the top
    /// strain.
    pub tapping_difficult_strain_count: f64,
    /// How evenly the tapping difficulty is distributed across the map.
    pub tapping_consistency: f64,
    /// The difficulty of the rhythm skill.
    ///
    /// Only reported, it does not contribute to the star rating.
    pub rhythm: f64,
    /// The difficulty of the reading skill.
    pub reading: f64,
    /// The ratio of the aim strain with and without considering sliders.
    pub slider_factor: f64,
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The health drain rate.
    pub hp: f64,
    /// The perceived hit window for a great hit inclusive of rate-adjusting
    /// mods (DT/HT/etc).
    pub great_hit_window: f64,
    /// The perceived hit window for an ok hit inclusive of rate-adjusting
    /// mods (DT/HT/etc).
    pub ok_hit_window: f64,
    /// The perceived hit window for a meh hit inclusive of rate-adjusting
    /// mods (DT/HT/etc).
    pub meh_hit_window: f64,
    /// The amount of circles.
    pub n_circles: u32,
    /// The amount of sliders.
    pub n_sliders: u32,
    /// The amount of spinners.
    pub n_spinners: u32,
    /// The final star rating.
    pub stars: f64,
    /// Version of the calculation the attributes originate from.
    pub version: u32,
}

impl OsuDifficultyAttributes {
    /// Current version of the osu!standard calculation.
    pub const VERSION: u32 = 20_241_007;

    /// Return the amount of hitobjects.
    pub const fn n_objects(&self) -> u32 {
        self.n_circles + self.n_sliders + self.n_spinners
    }
}
