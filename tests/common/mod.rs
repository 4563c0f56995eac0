#![allow(dead_code)]

use rosu_rating::{
    Beatmap,
    model::{
        GameMode,
        hit_object::{HitObject, Pos},
    },
};

/// Jumps between the four corners of a square, one object every `spacing` ms.
pub fn osu_jumps(n: u32, spacing: f64) -> Beatmap {
    let corners = [
        Pos::new(64.0, 64.0),
        Pos::new(448.0, 64.0),
        Pos::new(448.0, 320.0),
        Pos::new(64.0, 320.0),
    ];

    let hit_objects = (0..n)
        .map(|i| HitObject::circle(corners[i as usize % 4], f64::from(i) * spacing))
        .collect();

    Beatmap::new(GameMode::Osu, hit_objects)
        .with_ar(9.0)
        .with_od(8.0)
        .with_cs(4.0)
}

/// Alternating don/kat patterns where every third note is a kat.
pub fn taiko_stream(n: u32, spacing: f64) -> Beatmap {
    let hit_objects = (0..n)
        .map(|i| HitObject::circle(Pos::default(), f64::from(i) * spacing).with_rim(i % 3 == 2))
        .collect();

    Beatmap::new(GameMode::Taiko, hit_objects).with_od(5.0)
}

/// A staircase across all columns with a long note on every eighth object.
pub fn mania_stairs(n: u32, keys: u8, spacing: f64) -> Beatmap {
    let width = 512.0 / f32::from(keys);

    let hit_objects = (0..n)
        .map(|i| {
            let column = (i % u32::from(keys)) as f32;
            let pos = Pos::new(column * width + width / 2.0, 192.0);
            let start_time = f64::from(i) * spacing;

            if i % 8 == 7 {
                HitObject::hold(pos, start_time, start_time + spacing * 3.0)
            } else {
                HitObject::circle(pos, start_time)
            }
        })
        .collect();

    Beatmap::new(GameMode::Mania, hit_objects)
        .with_cs(f32::from(keys))
        .with_od(8.0)
}

/// Builds a chart out of strictly increasing times and random positions.
pub fn from_deltas(mode: GameMode, deltas: &[(f64, f32, f32, bool)]) -> Beatmap {
    let mut time = 0.0;

    let hit_objects = deltas
        .iter()
        .map(|&(delta, x, y, rim)| {
            time += delta;

            HitObject::circle(Pos::new(x, y), time).with_rim(rim)
        })
        .collect();

    Beatmap::new(mode, hit_objects).with_cs(4.0)
}
