use crate::{
    any::difficulty::object::{HasStartTime, IDifficultyObject},
    model::hit_object::HitObject,
};

pub struct ManiaDifficultyObject {
    pub idx: usize,
    pub delta_time: f64,
    pub start_time: f64,
    pub end_time: f64,
    pub column: usize,
    /// For each column, the index of the most recent previous object in it.
    pub prev_hit_objects: Box<[Option<usize>]>,
    /// Index of the previous object in the same column.
    pub prev_in_column: Option<usize>,
    pub column_strain_time: f64,
}

impl ManiaDifficultyObject {
    const PLAYFIELD_WIDTH: f32 = 512.0;

    /// Turn the hit objects into difficulty objects.
    ///
    /// The first hit object has no difficulty object.
    pub fn create_all(hit_objects: &[HitObject], total_columns: usize, clock_rate: f64) -> Vec<Self> {
        let mut diff_objects: Vec<Self> = Vec::with_capacity(hit_objects.len().saturating_sub(1));
        let mut last_in_column: Box<[Option<usize>]> = vec![None; total_columns].into_boxed_slice();

        let pairs = hit_objects.iter().zip(hit_objects.iter().skip(1));

        for (idx, (last, h)) in pairs.enumerate() {
            let start_time = h.start_time / clock_rate;
            let delta_time = (h.start_time - last.start_time) / clock_rate;
            let end_time = h.end_time() / clock_rate;
            let column = Self::column(h.pos.x, total_columns);

            let prev_in_column = last_in_column.get(column).copied().flatten();

            let column_strain_time = start_time
                - prev_in_column
                    .and_then(|i| diff_objects.get(i))
                    .map_or(start_time, |prev| prev.start_time);

            let mut prev_hit_objects = vec![None; total_columns].into_boxed_slice();

            if let Some(prev) = diff_objects.last() {
                prev_hit_objects.clone_from(&prev.prev_hit_objects);

                // Intentionally depends on processing order
                if let Some(slot) = prev_hit_objects.get_mut(prev.column) {
                    *slot = Some(prev.idx);
                }
            }

            if let Some(slot) = last_in_column.get_mut(column) {
                *slot = Some(idx);
            }

            diff_objects.push(Self {
                idx,
                delta_time,
                start_time,
                end_time,
                column,
                prev_hit_objects,
                prev_in_column,
                column_strain_time,
            });
        }

        diff_objects
    }

    /// The column of an x position, clamped into the playfield.
    pub fn column(x: f32, total_columns: usize) -> usize {
        let x_divisor = Self::PLAYFIELD_WIDTH / total_columns as f32;
        let column = (x / x_divisor).floor().max(0.0) as usize;

        column.min(total_columns.saturating_sub(1))
    }

    /// The previous objects of all columns.
    pub fn prev_hit_objects<'a>(
        &'a self,
        objects: &'a [Self],
    ) -> impl Iterator<Item = &'a Self> + 'a {
        self.prev_hit_objects
            .iter()
            .filter_map(|idx| idx.and_then(|idx| objects.get(idx)))
    }
}

impl IDifficultyObject for ManiaDifficultyObject {
    type DifficultyObjects = [Self];

    fn idx(&self) -> usize {
        self.idx
    }
}

impl HasStartTime for ManiaDifficultyObject {
    fn start_time(&self) -> f64 {
        self.start_time
    }
}

#[cfg(test)]
mod tests {
    use crate::model::hit_object::Pos;

    use super::*;

    #[test]
    fn columns() {
        assert_eq!(ManiaDifficultyObject::column(0.0, 4), 0);
        assert_eq!(ManiaDifficultyObject::column(200.0, 4), 1);
        assert_eq!(ManiaDifficultyObject::column(511.0, 4), 3);
        assert_eq!(ManiaDifficultyObject::column(600.0, 4), 3);
        assert_eq!(ManiaDifficultyObject::column(-20.0, 4), 0);
    }

    #[test]
    fn per_column_lookback() {
        let hit_objects = vec![
            HitObject::circle(Pos::new(64.0, 192.0), 0.0),
            HitObject::circle(Pos::new(192.0, 192.0), 100.0),
            HitObject::circle(Pos::new(64.0, 192.0), 200.0),
            HitObject::circle(Pos::new(192.0, 192.0), 300.0),
        ];

        let diff_objects = ManiaDifficultyObject::create_all(&hit_objects, 4, 1.0);

        assert_eq!(diff_objects.len(), 3);
        assert_eq!(diff_objects[0].column, 1);
        assert!(diff_objects[0].prev_in_column.is_none());
        assert_eq!(diff_objects[2].prev_in_column, Some(0));
        assert!((diff_objects[2].column_strain_time - 200.0).abs() < 1e-9);
        assert_eq!(diff_objects[2].prev_hit_objects[0], Some(1));
        assert_eq!(diff_objects[2].prev_hit_objects[1], Some(0));
    }
}
