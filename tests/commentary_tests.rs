use shotmap_rs::commentary::{
    Commentary, CommentaryThresholds, ObservationRule, RecommendationRule, RemarkKind,
};
use shotmap_rs::core::SeasonStats;

fn stats(total_shots: u32, total_goals: u32, total_xg: f64) -> SeasonStats {
    SeasonStats {
        total_shots,
        total_goals,
        total_xg,
        xg_per_shot: if total_shots == 0 {
            0.0
        } else {
            total_xg / f64::from(total_shots)
        },
    }
}

#[test]
fn empty_season_yields_no_goals_no_chances_and_only_the_fallback() {
    let commentary = Commentary::evaluate(&SeasonStats::default());

    assert_eq!(
        commentary.observation_kinds(),
        vec![RemarkKind::LowVolume, RemarkKind::NoGoals, RemarkKind::NoChances]
    );
    assert_eq!(commentary.recommendation_kinds(), vec![RemarkKind::KeepItUp]);
    assert_eq!(
        commentary.recommendations[0].text,
        "Keep up the great work! Your shooting and goal-scoring abilities are on point."
    );
}

#[test]
fn accuracy_rule_is_skipped_without_shots() {
    let thresholds = CommentaryThresholds::default();
    assert_eq!(
        RecommendationRule::ShotAccuracy.evaluate(&SeasonStats::default(), &thresholds),
        None
    );
}

#[test]
fn twelve_shot_scenario_reports_finishing_and_volume_seeking() {
    let commentary = Commentary::evaluate(&stats(12, 3, 2.4));

    assert_eq!(
        commentary.observation_kinds(),
        vec![RemarkKind::FinishingAbility, RemarkKind::ChanceCreation]
    );
    assert_eq!(
        commentary.observations[1].text,
        "The player's expected goals (xG) total is 2.40, which suggests they are creating scoring chances."
    );
    // 0.25 conversion and 0.2 xG/shot stay above their cut-offs.
    assert_eq!(
        commentary.recommendation_kinds(),
        vec![RemarkKind::VolumeSeeking]
    );
}

#[test]
fn low_volume_boundary_is_strict() {
    let thresholds = CommentaryThresholds::default();
    assert!(ObservationRule::LowVolume
        .evaluate(&stats(10, 1, 1.0), &thresholds)
        .is_none());
    let nine = ObservationRule::LowVolume
        .evaluate(&stats(9, 1, 1.0), &thresholds)
        .expect("fires below ten");
    assert_eq!(
        nine.text,
        "The player has taken fewer than 10 shots this season, indicating limited goal-scoring opportunities."
    );
}

#[test]
fn finishing_pair_always_fires_exactly_once() {
    let thresholds = CommentaryThresholds::default();
    let scored = ObservationRule::Finishing
        .evaluate(&stats(5, 1, 0.5), &thresholds)
        .expect("always fires");
    let blank = ObservationRule::Finishing
        .evaluate(&stats(5, 0, 0.5), &thresholds)
        .expect("always fires");
    assert_eq!(scored.kind, RemarkKind::FinishingAbility);
    assert_eq!(blank.kind, RemarkKind::NoGoals);
}

#[test]
fn conversion_boundary_is_strict() {
    let thresholds = CommentaryThresholds::default();
    assert!(RecommendationRule::ShotAccuracy
        .evaluate(&stats(10, 2, 6.0), &thresholds)
        .is_none());
    let low = RecommendationRule::ShotAccuracy
        .evaluate(&stats(11, 2, 6.0), &thresholds)
        .expect("2/11 is below 20%");
    assert_eq!(
        low.text,
        "Consider improving shot accuracy, as currently, less than 20% of shots are resulting in goals."
    );
}

#[test]
fn chance_quality_boundary_is_strict() {
    let thresholds = CommentaryThresholds::default();
    let exact = SeasonStats {
        total_shots: 10,
        total_goals: 5,
        total_xg: 1.0,
        xg_per_shot: 0.1,
    };
    assert!(RecommendationRule::ChanceQuality
        .evaluate(&exact, &thresholds)
        .is_none());

    let below = SeasonStats {
        xg_per_shot: 0.099,
        ..exact
    };
    let remark = RecommendationRule::ChanceQuality
        .evaluate(&below, &thresholds)
        .expect("below 0.1");
    assert_eq!(
        remark.text,
        "Focus on taking higher quality chances, as the average xG per shot is below 0.1."
    );
}

#[test]
fn volume_boundary_is_strict() {
    let thresholds = CommentaryThresholds::default();
    assert!(RecommendationRule::VolumeSeeking
        .evaluate(&stats(20, 8, 5.0), &thresholds)
        .is_none());
    assert!(RecommendationRule::VolumeSeeking
        .evaluate(&stats(20, 8, 4.99), &thresholds)
        .is_some());
}

#[test]
fn strong_season_gets_only_the_fallback() {
    let commentary = Commentary::evaluate(&stats(40, 12, 9.6));
    assert_eq!(
        commentary.observation_kinds(),
        vec![RemarkKind::FinishingAbility, RemarkKind::ChanceCreation]
    );
    assert_eq!(commentary.recommendation_kinds(), vec![RemarkKind::KeepItUp]);
}

#[test]
fn weak_season_collects_every_recommendation_in_order() {
    let commentary = Commentary::evaluate(&stats(30, 1, 1.5));
    assert_eq!(
        commentary.recommendation_kinds(),
        vec![
            RemarkKind::ShotAccuracy,
            RemarkKind::ChanceQuality,
            RemarkKind::VolumeSeeking
        ]
    );
}

#[test]
fn custom_thresholds_shift_rules_and_text() {
    let thresholds = CommentaryThresholds {
        low_volume_shots: 20,
        ..CommentaryThresholds::default()
    };
    let commentary = Commentary::evaluate_with(&stats(15, 5, 6.0), &thresholds);
    assert_eq!(commentary.observation_kinds()[0], RemarkKind::LowVolume);
    assert!(commentary.observations[0].text.contains("fewer than 20 shots"));
}

#[test]
fn lists_are_never_empty() {
    for s in [
        SeasonStats::default(),
        stats(1, 0, 0.0),
        stats(1, 1, 0.9),
        stats(50, 25, 20.0),
    ] {
        let commentary = Commentary::evaluate(&s);
        assert!(!commentary.observations.is_empty());
        assert!(!commentary.recommendations.is_empty());
    }
}
