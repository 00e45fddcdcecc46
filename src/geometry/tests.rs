use crate::geometry::sampling::{random_point_in, SamplingConfig, SamplingError, SamplingStrategy};
use geo::{polygon, Contains, MultiPolygon};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn unit_square() -> MultiPolygon<f64> {
    MultiPolygon::new(vec![polygon![
        (x: 0.0, y: 0.0),
        (x: 0.0, y: 1.0),
        (x: 1.0, y: 1.0),
        (x: 1.0, y: 0.0),
        (x: 0.0, y: 0.0),
    ]])
}

fn square_with_hole() -> MultiPolygon<f64> {
    MultiPolygon::new(vec![polygon![
        exterior: [
            (x: 0.0, y: 0.0),
            (x: 4.0, y: 0.0),
            (x: 4.0, y: 4.0),
            (x: 0.0, y: 4.0),
            (x: 0.0, y: 0.0),
        ],
        interiors: [
            [
                (x: 1.0, y: 1.0),
                (x: 3.0, y: 1.0),
                (x: 3.0, y: 3.0),
                (x: 1.0, y: 3.0),
                (x: 1.0, y: 1.0),
            ],
        ],
    ]])
}

/// A thin "L": most of the bounding box lies outside the shape.
fn concave_sliver() -> MultiPolygon<f64> {
    MultiPolygon::new(vec![polygon![
        (x: 0.0, y: 0.0),
        (x: 10.0, y: 0.0),
        (x: 10.0, y: 0.01),
        (x: 0.01, y: 0.01),
        (x: 0.01, y: 10.0),
        (x: 0.0, y: 10.0),
        (x: 0.0, y: 0.0),
    ]])
}

#[test]
fn samples_land_inside_the_polygon() {
    let area = unit_square();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..1_000 {
        let sample = random_point_in(&area, &SamplingConfig::default(), &mut rng).unwrap();
        assert!(area.contains(&sample.point));
        assert!((0.0..=1.0).contains(&sample.point.x()));
        assert!((0.0..=1.0).contains(&sample.point.y()));
    }
}

#[test]
fn samples_never_land_in_a_hole() {
    let area = square_with_hole();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..1_000 {
        let point = random_point_in(&area, &SamplingConfig::default(), &mut rng)
            .unwrap()
            .point;
        let in_hole = point.x() > 1.0 && point.x() < 3.0 && point.y() > 1.0 && point.y() < 3.0;
        assert!(!in_hole, "{point:?} is inside the hole");
    }
}

#[test]
fn rejection_sampling_reports_its_attempts() {
    let mut rng = StdRng::seed_from_u64(3);

    let sample = random_point_in(&unit_square(), &SamplingConfig::default(), &mut rng).unwrap();

    assert!(matches!(
        sample.strategy,
        SamplingStrategy::Rejection { attempts } if attempts >= 1
    ));
}

#[test]
fn exhausted_attempts_fall_back_to_triangulation() {
    let area = concave_sliver();
    let config = SamplingConfig {
        max_rejection_attempts: 0,
    };
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..500 {
        let sample = random_point_in(&area, &config, &mut rng).unwrap();
        assert_eq!(sample.strategy, SamplingStrategy::Triangulation);
        assert!(area.contains(&sample.point), "{:?} is off the shape", sample.point);
    }
}

#[test]
fn triangulation_respects_holes() {
    let config = SamplingConfig {
        max_rejection_attempts: 0,
    };
    let mut rng = StdRng::seed_from_u64(13);

    let area = square_with_hole();

    for _ in 0..500 {
        let point = random_point_in(&area, &config, &mut rng).unwrap().point;
        assert!(area.contains(&point), "{point:?} is not strictly inside");
    }
}

#[test]
fn flat_polygon_cannot_be_sampled() {
    let flat = MultiPolygon::new(vec![polygon![
        (x: 0.0, y: 0.0),
        (x: 1.0, y: 0.0),
        (x: 2.0, y: 0.0),
        (x: 0.0, y: 0.0),
    ]]);
    let mut rng = StdRng::seed_from_u64(1);

    let result = random_point_in(&flat, &SamplingConfig::default(), &mut rng);

    assert_eq!(result, Err(SamplingError::ZeroArea));
}

#[test]
fn empty_geometry_cannot_be_sampled() {
    let empty: MultiPolygon<f64> = MultiPolygon::new(vec![]);
    let mut rng = StdRng::seed_from_u64(1);

    let result = random_point_in(&empty, &SamplingConfig::default(), &mut rng);

    assert_eq!(result, Err(SamplingError::EmptyGeometry));
}

#[test]
fn triangulation_never_returns_a_vertex() {
    // Always drawing zero puts every candidate on a triangle vertex, i.e. on the boundary.
    let mut rng = StepRng::new(0, 0);
    let config = SamplingConfig {
        max_rejection_attempts: 0,
    };

    let result = random_point_in(&unit_square(), &config, &mut rng);

    assert_eq!(result, Err(SamplingError::NoInteriorPoint));
}
