use proptest::prelude::*;
use shotmap_rs::core::{RawShot, SeasonId, SeasonStats, filter_season, normalize_shots};

fn shot_strategy() -> impl Strategy<Value = RawShot> {
    (
        0.0f64..=1.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
        prop_oneof![Just("Goal"), Just("SavedShot"), Just("MissedShots"), Just("BlockedShot")],
        prop_oneof![Just("2021"), Just("2022"), Just("2023")],
    )
        .prop_map(|(x, y, xg, result, season)| RawShot::new(x, y, xg, result, season))
}

proptest! {
    #[test]
    fn goals_never_exceed_shots(batch in prop::collection::vec(shot_strategy(), 0..200)) {
        let records = normalize_shots(&batch).records;
        let stats = SeasonStats::from_shots(&records);

        prop_assert_eq!(records.len(), batch.len());
        prop_assert!(stats.total_goals <= stats.total_shots);
        prop_assert!(stats.total_xg >= 0.0);
        prop_assert!(stats.xg_per_shot >= 0.0);
        if stats.total_shots == 0 {
            prop_assert_eq!(stats.xg_per_shot, 0.0);
        } else {
            prop_assert!((stats.xg_per_shot * f64::from(stats.total_shots) - stats.total_xg).abs() <= 1e-9);
        }
    }

    #[test]
    fn season_filter_is_idempotent(
        batch in prop::collection::vec(shot_strategy(), 0..120),
        season in prop_oneof![Just("2021"), Just("2022"), Just("2023"), Just("2024")]
    ) {
        let records = normalize_shots(&batch).records;
        let season = SeasonId::new(season);
        let once = filter_season(&records, &season);
        let twice = filter_season(&once, &season);

        prop_assert_eq!(&once, &twice);
        prop_assert!(once.iter().all(|record| record.season_id == season));
        prop_assert_eq!(
            once.len(),
            records.iter().filter(|record| record.season_id == season).count()
        );
    }
}
