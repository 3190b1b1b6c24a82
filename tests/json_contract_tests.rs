use shotmap_rs::api::{
    League, SHOT_MAP_JSON_SCHEMA_V1, Season, ShotMap, ShotMapConfig, ShotMapSelection,
};
use shotmap_rs::core::RawShot;

fn sample_map() -> ShotMap {
    let shots = vec![
        RawShot::new(0.91, 0.47, 0.52, "Goal", "2021").with_minute(17.0),
        RawShot::new(0.78, 0.61, 0.04, "BlockedShot", "2021").with_id("4410"),
    ];
    ShotMap::build(
        ShotMapSelection::new(League::Ligue1, Season::new("2021").expect("season"), "Kylian Mbappe"),
        &shots,
        &ShotMapConfig::default(),
    )
    .expect("build")
}

#[test]
fn contract_v1_round_trips() {
    let map = sample_map();
    let json = map.to_json_contract_v1_pretty().expect("serialize");

    let value: serde_json::Value = serde_json::from_str(&json).expect("json");
    assert_eq!(value["schema_version"], SHOT_MAP_JSON_SCHEMA_V1);
    assert_eq!(value["shot_map"]["selection"]["league"], "Ligue_1");
    assert_eq!(value["shot_map"]["selection"]["season"], "2021");

    let parsed = ShotMap::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, map);
}

#[test]
fn bare_payload_is_accepted() {
    let map = sample_map();
    let bare = serde_json::to_string(&map).expect("serialize");
    let parsed = ShotMap::from_json_compat_str(&bare).expect("parse");
    assert_eq!(parsed, map);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let map = sample_map();
    let mut value: serde_json::Value =
        serde_json::from_str(&map.to_json_contract_v1_pretty().expect("serialize")).expect("json");
    value["schema_version"] = serde_json::json!(2);

    let err = ShotMap::from_json_compat_str(&value.to_string()).expect_err("version 2");
    assert!(err.to_string().contains("unsupported shot map schema version"));
}

#[test]
fn unsupported_season_in_payload_is_rejected() {
    let map = sample_map();
    let mut value: serde_json::Value = serde_json::to_value(&map).expect("value");
    value["selection"]["season"] = serde_json::json!("1999");
    assert!(ShotMap::from_json_compat_str(&value.to_string()).is_err());
}

#[test]
fn garbage_is_rejected() {
    assert!(ShotMap::from_json_compat_str("{\"schema_version\": 1}").is_err());
    assert!(ShotMap::from_json_compat_str("not json").is_err());
}
