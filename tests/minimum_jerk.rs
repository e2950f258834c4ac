use std::{sync::Arc, thread};

use minjerk::{
    math::{Line, Point2},
    sampling::{sample, TimeGrid},
    trajectories::{
        straight_position, BoundaryState, Curved1d, Curved2d, Quintic1d, Straight1d, Straight2d,
        Trajectory, ViaPoint,
    },
    DomainError,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn close(expected: f64, actual: f64, delta: f64) {
    assert!(
        (expected - actual).abs() <= delta,
        "expected {expected}, got {actual} (delta {delta})"
    );
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x6d6a)
}

struct CurvedCase {
    x0: f64,
    x_via: f64,
    x_final: f64,
    tf: f64,
    t1: f64,
}

fn random_case(rng: &mut StdRng) -> CurvedCase {
    let tf = rng.gen_range(0.5..3.0);
    CurvedCase {
        x0: rng.gen_range(-2.0..2.0),
        x_via: rng.gen_range(-2.0..2.0),
        x_final: rng.gen_range(-2.0..2.0),
        tf,
        t1: rng.gen_range(0.15..0.85) * tf,
    }
}

fn solve(case: &CurvedCase) -> Curved1d {
    Curved1d::new(
        case.x0,
        ViaPoint::new(case.x_via, case.t1),
        case.x_final,
        case.tf,
    )
    .unwrap()
}

#[test]
fn boundary_value_segment_interpolates_its_states() {
    let mut rng = rng();
    for _ in 0..500 {
        let mut state = || {
            BoundaryState::new(
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
            )
        };
        let (start, end) = (state(), state());
        let d = rng.gen_range(0.5..4.0);
        let q = Quintic1d::new(start, end, d).unwrap();

        close(start.pos, q.get_position(0.), 1e-12);
        close(end.pos, q.get_position(d), 1e-9);
        close(start.vel, q.get_velocity(0.), 1e-12);
        close(end.vel, q.get_velocity(d), 1e-9);
        close(start.acc, q.get_acceleration(0.), 1e-12);
        close(end.acc, q.get_acceleration(d), 1e-8);
    }
}

#[test]
fn via_point_is_hit_exactly() {
    let mut rng = rng();
    for _ in 0..500 {
        let case = random_case(&mut rng);
        let x = solve(&case);
        close(
            case.x_via,
            x.pre_via().position(case.t1),
            1e-9 * case.x_via.abs().max(1.),
        );
        close(
            case.x_via,
            x.get_position(case.t1),
            1e-9 * case.x_via.abs().max(1.),
        );
    }
}

#[test]
fn junction_is_continuous_up_to_acceleration() {
    let mut rng = rng();
    for _ in 0..500 {
        let case = random_case(&mut rng);
        let x = solve(&case);
        let (pre, post) = (x.pre_via(), x.post_via());
        let t1 = case.t1;

        close(pre.position(t1), post.position(t1), 1e-9);
        close(pre.velocity(t1), post.velocity(t1), 1e-7);
        close(pre.acceleration(t1), post.acceleration(t1), 1e-5);
    }
}

#[test]
fn jerk_matches_at_the_junction_too() {
    // the pieces differ by pi * tf^5 / 120 * (tau - tau1)^5, so only the
    // fifth derivative jumps
    let mut rng = rng();
    for _ in 0..200 {
        let case = random_case(&mut rng);
        let x = solve(&case);
        let scale = x
            .pre_via()
            .coeffs()
            .into_iter()
            .chain(x.post_via().coeffs())
            .map(|k| k.abs())
            .fold(1., f64::max);
        close(
            x.pre_via().jerk(case.t1),
            x.post_via().jerk(case.t1),
            1e-12 * scale * 60. * case.tf.max(1.).powi(2),
        );
    }
}

#[test]
fn curved_trajectory_starts_and_ends_at_rest() {
    let mut rng = rng();
    for _ in 0..200 {
        let case = random_case(&mut rng);
        let x = solve(&case);
        close(case.x0, x.get_position(0.), 1e-12);
        close(case.x_final, x.get_position(case.tf), 1e-9);
        close(0., x.get_velocity(0.), 1e-12);
        close(0., x.get_velocity(case.tf), 1e-7);
        close(0., x.get_acceleration(0.), 1e-12);
        close(0., x.get_acceleration(case.tf), 1e-5);
    }
}

#[test]
fn straight_line_time_reversal() {
    let mut rng = rng();
    for _ in 0..500 {
        let a = rng.gen_range(-10.0..10.0);
        let b = rng.gen_range(-10.0..10.0);
        let tau = rng.gen_range(0.0..=1.0);
        // running the movement backwards retraces the same positions
        close(
            straight_position(a, b, tau),
            straight_position(b, a, 1. - tau),
            1e-12,
        );
        // and the profile is point symmetric about the midpoint
        close(
            a + b,
            straight_position(a, b, tau) + straight_position(a, b, 1. - tau),
            1e-12,
        );
    }
}

#[test]
fn via_on_the_chord_at_half_time_collapses_to_a_straight_line() {
    let mut rng = rng();
    for _ in 0..100 {
        let start = Point2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        let target = Point2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        let tf = rng.gen_range(0.5..3.0);
        let midpoint = Point2::new(
            straight_position(start.x, target.x, 0.5),
            straight_position(start.y, target.y, 0.5),
        );

        let curved = Curved2d::new(start, midpoint, tf / 2., target, tf).unwrap();
        let straight = Straight2d::new(start, target, tf).unwrap();
        let grid = TimeGrid::inclusive(0., tf, tf / 50.).unwrap();
        for t in grid.times() {
            let c = Point2::from(curved.get_position(t));
            let s = Point2::from(straight.get_position(t));
            assert!(c.distance_to(s) < 1e-9, "t = {t}: {c:?} vs {s:?}");
        }
    }
}

#[test]
fn curvature_comes_from_the_via_offset() {
    let start = Point2::zero();
    let target = Point2::new(1., 1.);
    let chord = Line::new(start, target);
    let deviation = |via: Point2| {
        let traj = Curved2d::new(start, via, 0.5, target, 1.).unwrap();
        sample(&traj, &TimeGrid::inclusive(0., 1., 0.01).unwrap())
            .iter()
            .map(|s| chord.distance_to(Point2::from(s.pos)))
            .fold(0., f64::max)
    };
    let near = deviation(Point2::new(0.4, 0.6));
    let far = deviation(Point2::new(-0.1, 0.4));
    assert!(near > 0.);
    assert!(far > near);
    // the movement bends towards the side the via point is on
    let traj = Curved2d::new(start, Point2::new(-0.1, 0.4), 0.5, target, 1.).unwrap();
    assert!(chord.side_of(Point2::from(traj.get_position(0.3))) > 0.);
}

#[test]
fn concrete_scenario() {
    let x = Curved1d::new(0., ViaPoint::new(-0.1, 0.5), 1., 1.).unwrap();
    close(0., x.get_position(0.), 1e-12);
    close(1., x.get_position(1.), 1e-9);
    close(-0.1, x.get_position(0.5), 1e-9);
    close(0., x.get_velocity(0.), 1e-9);
    close(0., x.get_velocity(1.), 1e-9);
}

#[test]
fn singular_via_times_are_rejected() {
    for (t1, tf) in [(0., 1.), (1., 1.), (2.5, 2.5), (-0.1, 1.)] {
        let result = Curved1d::new(0., ViaPoint::new(0.5, t1), 1., tf);
        assert_eq!(
            result.map(|_| ()),
            Err(DomainError::ViaTimeOutOfRange {
                via_time: t1,
                duration: tf
            })
        );
    }
}

#[test]
fn non_finite_inputs_are_rejected_at_solve_time() {
    assert!(matches!(
        Curved1d::new(f64::NAN, ViaPoint::new(0.5, 0.5), 1., 1.),
        Err(DomainError::NonFinite { .. })
    ));
    assert!(matches!(
        Straight1d::new(0., f64::NEG_INFINITY, 1.),
        Err(DomainError::NonFinite { .. })
    ));
    assert!(matches!(
        Quintic1d::new(
            BoundaryState::at_rest(0.),
            BoundaryState::at_rest(1.),
            f64::NAN
        ),
        Err(DomainError::NonFinite { .. })
    ));
}

#[test]
fn durations_beyond_float_range_are_rejected() {
    for tf in [1e-70, 1e70] {
        assert_eq!(
            Curved1d::new(0., ViaPoint::new(0.5, tf / 2.), 1., tf).map(|_| ()),
            Err(DomainError::DurationOutOfRange(tf))
        );
        assert_eq!(
            Quintic1d::new(BoundaryState::at_rest(0.), BoundaryState::at_rest(1.), tf)
                .map(|_| ()),
            Err(DomainError::DurationOutOfRange(tf))
        );
    }
}

#[test]
fn accepted_durations_never_evaluate_to_nan() {
    for tf in [1e-60, 1e-3, 1e3, 1e60] {
        let curved = Curved1d::new(0., ViaPoint::new(0.5, tf / 2.), 1., tf).unwrap();
        close(0.5, curved.get_position(tf / 2.), 1e-9);
        assert!(curved.get_position(tf).is_finite());

        let segment =
            Quintic1d::new(BoundaryState::at_rest(0.), BoundaryState::at_rest(1.), tf).unwrap();
        close(1., segment.get_position(tf), 1e-9);
    }
}

#[test]
fn overflowing_shape_parameters_are_rejected() {
    // pi ~ 1 / (tf^5 tau1^5), beyond f64 for a tiny duration and early via
    let result = Curved1d::new(0., ViaPoint::new(0.5, 1e-63), 1., 1e-60);
    assert!(matches!(result, Err(DomainError::NonFinite { .. })));
}

#[test]
fn trajectories_can_be_shared_between_threads() {
    let traj = Arc::new(
        Curved2d::new(
            Point2::zero(),
            Point2::new(-0.1, 0.4),
            0.5,
            Point2::new(1., 1.),
            1.,
        )
        .unwrap(),
    );
    let grid = TimeGrid::inclusive(0., 1., 0.01).unwrap();
    let expected = sample(traj.as_ref(), &grid);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let traj = Arc::clone(&traj);
            thread::spawn(move || {
                // reversed order, nothing is carried between calls
                let grid = TimeGrid::inclusive(0., 1., 0.01).unwrap();
                let mut times: Vec<f64> = grid.times().collect();
                times.reverse();
                times
                    .into_iter()
                    .map(|t| traj.get_position(t))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let mut positions = handle.join().unwrap();
        positions.reverse();
        assert_eq!(positions.len(), expected.len());
        for (p, s) in positions.iter().zip(&expected) {
            assert_eq!(*p, s.pos);
        }
    }
}
