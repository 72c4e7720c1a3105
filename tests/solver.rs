//! Behaviour of the single unknown-force solver.
use approx::assert_relative_eq;
use rstest::rstest;
use statica::{solve, KnownForce, TargetDirection, TargetResultant};
use test_utils::{assert_vec2_close, known};

fn target(magnitude: f64, phi: f64) -> TargetResultant {
    TargetResultant {
        magnitude,
        direction: TargetDirection::FromX { phi },
    }
}

#[test]
fn worked_example_from_the_lecture_notes() {
    let forces = [known(450.0, 45.0), known(200.0, 0.0)];
    let solution = solve(&forces, &target(1000.0, 0.0));

    assert_vec2_close(solution.known_sum, (518.198_051_533_946_5, 318.198_051_533_946_3), 1e-9);
    assert_vec2_close(solution.unknown, (481.801_948_466_053_5, -318.198_051_533_946_3), 1e-9);
    assert_relative_eq!(solution.magnitude, 577.393_381_972_538_5, epsilon = 1e-9);
    assert_relative_eq!(
        solution.angle.expect("non-zero unknown"),
        -33.442_101_100_813_34,
        epsilon = 1e-9
    );
    assert!(solution.check.closes);
}

#[rstest]
#[case::single(vec![known(10.0, 90.0)], target(10.0, 0.0))]
#[case::three_forces(vec![known(120.0, 30.0), known(80.0, 200.0), known(15.5, -75.0)], target(250.0, 110.0))]
#[case::no_known(vec![], target(42.0, -135.0))]
#[case::huge(vec![known(1e6, 12.0), known(3e5, 191.0)], target(5e5, 44.0))]
fn known_plus_unknown_closes_on_target(#[case] forces: Vec<KnownForce>, #[case] goal: TargetResultant) {
    let solution = solve(&forces, &goal);
    let sum = solution.known_sum + solution.unknown;
    let scale = goal.magnitude.max(solution.known_sum.length()).max(1.0);
    assert!(sum.abs_diff_eq(solution.target.components, 1e-9 * scale));
    assert!(solution.check.closes);
    assert_relative_eq!(solution.magnitude, solution.unknown.length());
}

#[test]
fn without_known_forces_the_unknown_is_the_target() {
    let solution = solve(&[], &target(1000.0, 30.0));
    assert_relative_eq!(solution.magnitude, 1000.0, epsilon = 1e-9);
    assert_relative_eq!(solution.angle.expect("defined"), 30.0, epsilon = 1e-9);
}

#[test]
fn already_balanced_forces_need_no_unknown() {
    let solution = solve(&[known(1000.0, 0.0)], &target(1000.0, 0.0));
    assert_relative_eq!(solution.magnitude, 0.0);
    assert_eq!(solution.angle, None);
}

#[test]
fn rotated_axis_target_matches_the_equivalent_angle() {
    let forces = [known(300.0, 60.0), known(125.0, 170.0)];
    let rotated = TargetResultant {
        magnitude: 500.0,
        direction: TargetDirection::AlongRotatedAxis { alpha: 30.0 },
    };
    let along_axis = solve(&forces, &rotated);
    let from_x = solve(&forces, &target(500.0, 30.0));
    assert_vec2_close(along_axis.target.components, (433.012_701_892_219_3, 250.0), 1e-9);
    assert!(along_axis.unknown.abs_diff_eq(from_x.unknown, 1e-12));
}

#[test]
fn default_target_is_one_kilonewton_along_x() {
    let goal = TargetResultant::default();
    assert_relative_eq!(goal.magnitude, 1000.0);
    assert_eq!(goal.direction, TargetDirection::FromX { phi: 0.0 });
}
