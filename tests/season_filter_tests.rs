use shotmap_rs::core::{RawShot, SeasonId, filter_season, normalize_shots};

fn records() -> Vec<shotmap_rs::core::ShotRecord> {
    normalize_shots(&[
        RawShot::new(0.9, 0.5, 0.30, "Goal", "2022").with_id("a"),
        RawShot::new(0.8, 0.4, 0.10, "SavedShot", "2023").with_id("b"),
        RawShot::new(0.7, 0.6, 0.05, "MissedShots", "2022").with_id("c"),
        RawShot::new(0.95, 0.5, 0.76, "Goal", "2023").with_id("d"),
    ])
    .records
}

#[test]
fn filter_keeps_matching_season_in_order() {
    let selected = filter_season(&records(), &SeasonId::new("2023"));
    let ids: Vec<&str> = selected
        .iter()
        .filter_map(|r| r.context.id.as_deref())
        .collect();
    assert_eq!(ids, vec!["b", "d"]);
}

#[test]
fn no_match_is_an_empty_result() {
    assert!(filter_season(&records(), &SeasonId::new("2019")).is_empty());
    assert!(filter_season(&[], &SeasonId::new("2023")).is_empty());
}

#[test]
fn filtering_twice_is_idempotent() {
    let season = SeasonId::new("2022");
    let once = filter_season(&records(), &season);
    let twice = filter_season(&once, &season);
    assert_eq!(once, twice);
}
