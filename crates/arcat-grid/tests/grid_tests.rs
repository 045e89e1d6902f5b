//! Integration tests for applying schemes over gridded fields

mod common;

use approx::assert_relative_eq;
use arcat_core::{CategorizationConfig, Error};
use arcat_grid::{apply_along_time, apply_scheme, GridField};
use arcat_scheme::{Categorizer, Scheme};
use common::{init_tracing, synthetic_field};

/// Every lane of the output must equal a direct call on that lane
fn assert_lanes_match(shape: &[usize], time_axis: usize, seed: u64, scheme: Scheme) {
    let size: usize = shape.iter().product();
    let data = synthetic_field(size, seed);
    let field = GridField::new(&data, shape, time_axis).unwrap();
    let categorizer = Categorizer::new(scheme, CategorizationConfig::default());
    let output = apply_along_time(&field, &categorizer).unwrap();

    assert_eq!(output.layout().shape(), shape);
    assert_eq!(output.categories().len(), size);

    for lane in 0..field.layout().lane_count() {
        let direct = categorizer.categorize(&field.lane(lane)).unwrap();
        for (step, index) in field.layout().lane_indices(lane).enumerate() {
            assert_eq!(output.categories()[index], direct.categories()[step]);
            assert_relative_eq!(output.cumulative_ivt()[index], direct.cumulative_ivt()[step]);
            assert_relative_eq!(output.event_ivt()[index], direct.event_ivt()[step]);
            assert_relative_eq!(output.durations()[index], direct.durations()[step]);
        }
    }
}

#[test]
fn test_time_first_matches_direct() {
    init_tracing();
    assert_lanes_match(&[40, 3, 4], 0, 7, Scheme::Event);
    assert_lanes_match(&[40, 3, 4], 0, 7, Scheme::Evolution);
}

#[test]
fn test_time_middle_matches_direct() {
    assert_lanes_match(&[2, 32, 5], 1, 11, Scheme::Event);
    assert_lanes_match(&[2, 32, 5], 1, 11, Scheme::Evolution);
}

#[test]
fn test_time_last_matches_direct() {
    assert_lanes_match(&[3, 2, 50], 2, 42, Scheme::Event);
    assert_lanes_match(&[3, 2, 50], 2, 42, Scheme::Evolution);
}

#[test]
fn test_four_dimensional_field() {
    // ensemble x time x lat x lon
    assert_lanes_match(&[2, 24, 3, 2], 1, 3, Scheme::Event);
}

#[test]
fn test_point_series_in_field() {
    // 12 steps at 2 points, time first: a long event at point 0 and a short
    // one at point 1
    let mut data = Vec::new();
    for step in 0..12 {
        let short = if step < 2 { 600.0 } else { 0.0 };
        data.extend([800.0, short]);
    }
    let field = GridField::new(&data, &[12, 2], 0).unwrap();
    let output = apply_scheme(&field, Scheme::Event, &CategorizationConfig::default()).unwrap();

    let point0: Vec<u32> = output.categories().iter().step_by(2).copied().collect();
    let point1: Vec<u32> = output.categories().iter().skip(1).step_by(2).copied().collect();
    assert_eq!(point0, vec![4; 12]);
    assert_eq!(point1[..2], [1, 1]);
    assert!(point1[2..].iter().all(|&c| c == 0));

    assert_relative_eq!(output.cumulative_ivt()[22], 800.0 * 12.0);
    assert_relative_eq!(output.durations()[1], 2.0);
    assert_relative_eq!(output.event_ivt()[3], 600.0);
}

#[test]
fn test_event_dominates_evolution_on_grid() {
    let data = synthetic_field(6 * 30, 99);
    let field = GridField::new(&data, &[6, 30], 1).unwrap();
    let config = CategorizationConfig::default();
    let event = apply_scheme(&field, Scheme::Event, &config).unwrap();
    let evolution = apply_scheme(&field, Scheme::Evolution, &config).unwrap();

    for (e, v) in event.categories().iter().zip(evolution.categories()) {
        assert!(e >= v);
    }
    // durations follow the binned runs, which collapse leaves unchanged
    assert_eq!(event.durations(), evolution.durations());
}

#[test]
fn test_f32_field() {
    let data: Vec<f32> = synthetic_field(4 * 20, 5).into_iter().map(|v| v as f32).collect();
    let field = GridField::new(&data, &[4, 20], 1).unwrap();
    let output = apply_scheme(&field, Scheme::Evolution, &CategorizationConfig::default()).unwrap();
    assert_eq!(output.durations().len(), 80);
    for (i, &c) in output.categories().iter().enumerate() {
        if c == 0 {
            assert_eq!(output.event_ivt()[i], 0.0f32);
        } else {
            assert_eq!(output.event_ivt()[i], data[i]);
        }
    }
}

#[test]
fn test_geometry_errors() {
    let data = [0.0; 10];
    assert!(matches!(
        GridField::new(&data, &[2, 4], 0),
        Err(Error::SizeMismatch { .. })
    ));
    assert!(matches!(
        GridField::new(&data, &[10], 1),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_invalid_configuration_fails_once() {
    let data = [500.0; 8];
    let field = GridField::new(&data, &[4, 2], 0).unwrap();
    let config = CategorizationConfig::default().with_time_resolution_hours(0);
    assert!(matches!(
        apply_scheme(&field, Scheme::Event, &config),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn test_nan_in_field_names_lane() {
    let mut data = vec![300.0; 3 * 8];
    // time last, lane 2 holds the NaN
    data[2 * 8 + 5] = f64::NAN;
    let field = GridField::new(&data, &[3, 8], 1).unwrap();
    let err = apply_scheme(&field, Scheme::Evolution, &CategorizationConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(err.to_string().contains("lane 2"), "{err}");
}

#[test]
fn test_zero_length_time_axis() {
    let data: Vec<f64> = Vec::new();
    let field = GridField::new(&data, &[0, 4], 0).unwrap();
    let output = apply_scheme(&field, Scheme::Event, &CategorizationConfig::default()).unwrap();
    assert!(output.categories().is_empty());
    assert_eq!(output.layout().lane_count(), 4);
}

#[test]
fn test_non_dividing_resolution_accepted() {
    let data = synthetic_field(30, 1);
    let field = GridField::from_series(&data);
    let config = CategorizationConfig::default().with_time_resolution_hours(5);
    let output = apply_scheme(&field, Scheme::Event, &config).unwrap();
    let direct = Categorizer::event(config).categorize(&data).unwrap();
    assert_eq!(output.categories(), direct.categories());
}
