use proptest::prelude::*;
use rosu_rating::{
    Difficulty, Performance, PerformanceAttributes,
    mania::{ManiaDifficultyAttributes, ManiaPerformance, ManiaScoreState},
    model::{GameMode, error::CalculateError},
    taiko::{TaikoDifficultyAttributes, TaikoPerformance, TaikoScoreState},
};

use self::common::*;

mod common;

fn taiko_attrs() -> TaikoDifficultyAttributes {
    let map = taiko_stream(600, 100.0);

    match Difficulty::new().calculate(&map).unwrap() {
        rosu_rating::DifficultyAttributes::Taiko(attrs) => attrs,
        other => panic!("expected taiko attributes, got {other:?}"),
    }
}

fn mania_attrs() -> ManiaDifficultyAttributes {
    let map = mania_stairs(600, 4, 80.0);

    match Difficulty::new().calculate(&map).unwrap() {
        rosu_rating::DifficultyAttributes::Mania(attrs) => attrs,
        other => panic!("expected mania attributes, got {other:?}"),
    }
}

#[test]
fn perfect_taiko_play() {
    let attrs = taiko_attrs();
    let state = TaikoPerformance::new(attrs.clone()).generate_state();

    assert_eq!(state.n300, attrs.max_combo);
    assert!((state.accuracy() - 1.0).abs() < f64::EPSILON);

    let perf = TaikoPerformance::new(attrs).calculate();
    let ur = perf.estimated_unstable_rate.unwrap();

    assert!(ur.is_finite() && ur > 0.0);
    assert!(perf.pp > 0.0);
    assert!(perf.pp_acc > 0.0);
    assert!(perf.pp_difficulty > 0.0);
}

#[test]
fn misses_reduce_taiko_pp() {
    let attrs = taiko_attrs();

    let fc = TaikoPerformance::new(attrs.clone()).calculate();
    let misses = TaikoPerformance::new(attrs).misses(10).calculate();

    assert!(misses.effective_miss_count >= 10.0);
    assert!(misses.pp < fc.pp);
}

#[test]
fn taiko_accuracy_generates_hitresults() {
    let state = TaikoPerformance::new(taiko_attrs())
        .accuracy(97.5)
        .misses(3)
        .generate_state();

    assert_eq!(state.total_hits(), 600);
    assert_eq!(state.misses, 3);
    assert!((state.accuracy() - 0.975).abs() < 0.001);
}

#[test]
fn zero_hits_give_zero_pp() {
    let taiko = TaikoPerformance::new(TaikoDifficultyAttributes::default()).calculate();
    let mania = ManiaPerformance::new(ManiaDifficultyAttributes::default()).calculate();

    assert!(taiko.pp.abs() < f64::EPSILON);
    assert!(taiko.estimated_unstable_rate.is_none());
    assert!(mania.pp.abs() < f64::EPSILON);
}

#[test]
fn perfect_mania_play() {
    let attrs = mania_attrs();
    let state = ManiaPerformance::new(attrs.clone()).generate_state();

    assert_eq!(state.n320, attrs.n_objects);
    assert!((state.accuracy() - 1.0).abs() < f64::EPSILON);

    let perf = ManiaPerformance::new(attrs).calculate();

    assert!(perf.pp > 0.0);
    assert!((perf.pp - perf.pp_difficulty).abs() < 1e-9);
}

#[test]
fn mania_no_fail_and_easy() {
    let attrs = mania_attrs();

    let nomod = ManiaPerformance::new(attrs.clone()).calculate().pp;
    let nfez = ManiaPerformance::new(attrs).mods(1 + 2).calculate().pp;

    assert!((nfez - nomod * 0.75 * 0.5).abs() < 1e-9);
}

#[test]
fn dispatch_through_any_mode() {
    let map = taiko_stream(300, 120.0);
    let attrs = Difficulty::new().calculate(&map).unwrap();
    let stars = attrs.stars();

    let perf = attrs.performance().unwrap().misses(1).calculate();

    assert!(matches!(perf, PerformanceAttributes::Taiko(_)));
    assert!((perf.stars() - stars).abs() < f64::EPSILON);

    // Attributes can be fed back into a new calculation
    let again = Performance::from(perf.clone()).misses(1).calculate();

    assert_eq!(again, perf);
}

#[test]
fn osu_has_no_performance() {
    let map = osu_jumps(50, 200.0);
    let attrs = Difficulty::new().calculate(&map).unwrap();

    assert_eq!(
        attrs.performance(),
        Err(CalculateError::UnsupportedMode(GameMode::Osu))
    );
}

#[test]
fn mode_specific_builders_reject_other_modes() {
    assert_eq!(
        TaikoPerformance::try_new(mania_attrs()),
        Err(CalculateError::UnsupportedMode(GameMode::Mania))
    );

    assert!(ManiaPerformance::try_new(mania_attrs()).is_ok());
}

proptest! {
    #[test]
    fn taiko_accuracy_rises_with_greats(total in 1_u32..2000, n300 in 0_u32..2000, misses in 0_u32..2000) {
        let n300 = n300.min(total - 1);
        let misses = misses.min(total - 1 - n300);
        let n100 = total - 1 - n300 - misses;

        let worse = TaikoScoreState { max_combo: 0, n300, n100: n100 + 1, misses };
        let better = TaikoScoreState { max_combo: 0, n300: n300 + 1, n100, misses };

        prop_assert!(better.accuracy() > worse.accuracy());
    }

    #[test]
    fn mania_accuracy_rises_with_perfects(n320 in 0_u32..1000, n200 in 0_u32..1000, misses in 0_u32..1000) {
        let worse = ManiaScoreState { n320, n200: n200 + 1, misses, ..ManiaScoreState::new() };
        let better = ManiaScoreState { n320: n320 + 1, n200, misses, ..ManiaScoreState::new() };

        prop_assert!(better.accuracy() > worse.accuracy());
    }

    #[test]
    fn taiko_pp_is_finite(misses in 0_u32..700, acc in 0.0_f64..=100.0, mods in prop::sample::select(vec![0_u32, 2, 8, 16, 64, 256, 1024])) {
        let perf = TaikoPerformance::new(taiko_attrs())
            .mods(mods)
            .misses(misses)
            .accuracy(acc)
            .calculate();

        prop_assert!(perf.pp.is_finite() && perf.pp >= 0.0, "invalid pp {}", perf.pp);
    }
}
