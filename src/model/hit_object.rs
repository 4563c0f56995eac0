use std::cmp::Ordering;

pub use rosu_map::util::Pos;

/// All hitobject related data required for difficulty calculation.
///
/// Hit objects are produced by whatever loads the chart and are never
/// modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    pub pos: Pos,
    pub start_time: f64,
    pub kind: HitObjectKind,
    /// osu!taiko: whether the note is a rim (blue) hit.
    pub is_rim: bool,
    /// osu!taiko: the scroll speed of the note in beats per minute, i.e. the
    /// timing point's BPM multiplied by the effect point's scroll speed.
    pub scroll_bpm: f64,
}

impl HitObject {
    /// Default BPM for objects that don't specify one.
    pub const DEFAULT_BPM: f64 = 120.0;

    /// Create a new [`HitObject`].
    pub const fn new(pos: Pos, start_time: f64, kind: HitObjectKind) -> Self {
        Self {
            pos,
            start_time,
            kind,
            is_rim: false,
            scroll_bpm: Self::DEFAULT_BPM,
        }
    }

    /// Create a new circle.
    pub const fn circle(pos: Pos, start_time: f64) -> Self {
        Self::new(pos, start_time, HitObjectKind::Circle)
    }

    /// Create a new slider that ends at `end_pos` after its last span.
    pub const fn slider(
        pos: Pos,
        start_time: f64,
        end_time: f64,
        end_pos: Pos,
        repeats: usize,
    ) -> Self {
        let slider = Slider {
            end_time,
            end_pos,
            repeats,
        };

        Self::new(pos, start_time, HitObjectKind::Slider(slider))
    }

    /// Create a new spinner.
    pub const fn spinner(pos: Pos, start_time: f64, end_time: f64) -> Self {
        Self::new(pos, start_time, HitObjectKind::Spinner(Spinner { end_time }))
    }

    /// Create a new hold note.
    pub const fn hold(pos: Pos, start_time: f64, end_time: f64) -> Self {
        Self::new(pos, start_time, HitObjectKind::Hold(HoldNote { end_time }))
    }

    /// Mark the object as rim hit.
    #[must_use]
    pub const fn with_rim(mut self, is_rim: bool) -> Self {
        self.is_rim = is_rim;

        self
    }

    /// Specify the scroll BPM.
    #[must_use]
    pub const fn with_scroll_bpm(mut self, scroll_bpm: f64) -> Self {
        self.scroll_bpm = scroll_bpm;

        self
    }

    /// Whether the hitobject is a circle.
    pub const fn is_circle(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Circle)
    }

    /// Whether the hitobject is a slider.
    pub const fn is_slider(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Slider(_))
    }

    /// Whether the hitobject is a spinner.
    ///
    /// Spinners are the only objects that can't be interacted with through
    /// aiming or tapping.
    pub const fn is_spinner(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Spinner(_))
    }

    /// Whether the hitobject is a hold note.
    pub const fn is_hold_note(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Hold(_))
    }

    /// The end time of the object.
    pub const fn end_time(&self) -> f64 {
        match &self.kind {
            HitObjectKind::Circle => self.start_time,
            HitObjectKind::Slider(Slider { end_time, .. })
            | HitObjectKind::Spinner(Spinner { end_time })
            | HitObjectKind::Hold(HoldNote { end_time }) => *end_time,
        }
    }

    /// The position at which the object ends.
    pub const fn end_pos(&self) -> Pos {
        match &self.kind {
            HitObjectKind::Slider(slider) => slider.final_pos(self.pos),
            _ => self.pos,
        }
    }
}

impl PartialOrd for HitObject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.start_time.partial_cmp(&other.start_time)
    }
}

/// Additional data for a [`HitObject`].
///
/// Note that each mode handles hit objects differently.
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Circle,
    Slider(Slider),
    Spinner(Spinner),
    Hold(HoldNote),
}

/// A slider.
///
/// Only the endpoints of its path are known; the cursor is assumed to move
/// along a straight line between the head and `end_pos`, turning around on
/// each repeat.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    pub end_time: f64,
    pub end_pos: Pos,
    pub repeats: usize,
}

impl Slider {
    /// The amount of spans of the slider.
    pub const fn span_count(&self) -> usize {
        self.repeats + 1
    }

    /// The duration of the slider.
    pub fn duration(&self, start_time: f64) -> f64 {
        (self.end_time - start_time).max(0.0)
    }

    /// Position at the end of the last span.
    pub const fn final_pos(&self, head: Pos) -> Pos {
        if self.span_count() % 2 == 0 {
            head
        } else {
            self.end_pos
        }
    }
}

/// A spinner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spinner {
    pub end_time: f64,
}

/// A hold note.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HoldNote {
    pub end_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_end_position_follows_repeats() {
        let head = Pos::new(0.0, 0.0);
        let tail = Pos::new(100.0, 0.0);

        let no_repeat = HitObject::slider(head, 0.0, 300.0, tail, 0);
        let one_repeat = HitObject::slider(head, 0.0, 300.0, tail, 1);

        assert_eq!(no_repeat.end_pos(), tail);
        assert_eq!(one_repeat.end_pos(), head);
        assert!((one_repeat.end_time() - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn kinds() {
        let circle = HitObject::circle(Pos::new(1.0, 2.0), 10.0);
        assert!(circle.is_circle());
        assert!((circle.end_time() - 10.0).abs() < f64::EPSILON);

        let spinner = HitObject::spinner(Pos::new(256.0, 192.0), 10.0, 500.0);
        assert!(spinner.is_spinner());

        let hold = HitObject::hold(Pos::new(64.0, 192.0), 10.0, 200.0);
        assert!(hold.is_hold_note());
    }
}
