use proptest::prelude::*;
use shotmap_rs::core::{
    FieldPoint, HalfPitchProjection, LinearScale, PanelRect, PitchDimensions, Viewport,
};

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.001f64..1_000.0,
        range_start in -5_000.0f64..5_000.0,
        range_span in 1.0f64..5_000.0,
        reversed in any::<bool>(),
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let range_end = if reversed { range_start - range_span } else { range_start + range_span };
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new(domain_start, domain_end, range_start, range_end).expect("valid scale");
        let recovered = scale.invert(scale.map(value)).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-7);
    }

    #[test]
    fn half_pitch_projection_round_trip_property(
        width in 100u32..4000,
        height in 100u32..4000,
        x in 50.0f64..=100.0,
        y in 0.0f64..=100.0
    ) {
        let panel = PanelRect::new(0.05, 0.25, 0.9, 0.5);
        let projection = HalfPitchProjection::fit(panel, Viewport::new(width, height), PitchDimensions::default())
            .expect("projection");
        let area = projection.area();
        let aspect = PitchDimensions::default().half_pitch_aspect();

        prop_assert!((area.width / area.height - aspect).abs() <= 1e-9);

        let back = projection.unproject(projection.project(FieldPoint::new(x, y))).expect("unproject");
        prop_assert!((back.x - x).abs() <= 1e-7);
        prop_assert!((back.y - y).abs() <= 1e-7);
    }
}
