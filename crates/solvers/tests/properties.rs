use descent_core::{Descendible, DirectionProvider, LossFn, PartialClamp};
use descent_solvers::optimization::linear_descent::{Bounds, Config, Status, minimize_unobserved};
use proptest::prelude::*;

/// A bumpy loss with many local minima.
fn wavy(x: &f32) -> f32 {
    x.sin() * 3.0 + 0.1 * x * x
}

fn wavy_2d(p: &[f32; 2]) -> f32 {
    wavy(&p[0]) + (p[0] * p[1]).cos() + 0.05 * p[1] * p[1]
}

fn within<const N: usize>(value: [f32; N], min: [f32; N], max: [f32; N]) -> bool {
    (0..N).all(|i| min[i] <= value[i] && value[i] <= max[i])
}

/// Strategy for ordered bounds and a start inside them.
fn bounded_start_2d() -> impl Strategy<Value = ([f32; 2], [f32; 2], [f32; 2])> {
    (
        prop::array::uniform2(-10.0_f32..0.0),
        prop::array::uniform2(0.0_f32..10.0),
        prop::array::uniform2(0.0_f32..1.0),
    )
        .prop_map(|(min, max, t)| {
            let start = std::array::from_fn(|i| {
                (min[i] + t[i] * (max[i] - min[i])).clamp(min[i], max[i])
            });
            (min, max, start)
        })
}

proptest! {
    #[test]
    fn never_worse_than_start(
        start in -20.0_f32..20.0,
        epsilon in 0.01_f32..2.0,
        iters in 0_usize..200,
    ) {
        let contract = LossFn::new(wavy);
        let solution = minimize_unobserved(
            &contract,
            start,
            &Bounds::new(-10.0, 10.0),
            &epsilon,
            &Config::new(iters),
        )
        .unwrap();

        prop_assert!(solution.loss <= wavy(&start));
        prop_assert!(solution.iters <= iters);
    }

    #[test]
    fn zero_budget_is_identity(start in prop::array::uniform3(-50.0_f32..50.0)) {
        let contract = LossFn::new(|v: &[f32; 3]| v.iter().map(|c| c * c).sum::<f32>());
        let solution = minimize_unobserved(
            &contract,
            start,
            &Bounds::new([-1.0; 3], [1.0; 3]),
            &[0.1; 3],
            &Config::new(0),
        )
        .unwrap();

        prop_assert_eq!(solution.input, start);
        prop_assert_eq!(solution.status, Status::MaxIters);
    }

    #[test]
    fn stays_within_bounds(
        (min, max, start) in bounded_start_2d(),
        epsilon in prop::array::uniform2(0.05_f32..3.0),
        iters in 1_usize..100,
    ) {
        let contract = LossFn::new(wavy_2d);
        let solution = minimize_unobserved(
            &contract,
            start,
            &Bounds::new(min, max),
            &epsilon,
            &Config::new(iters),
        )
        .unwrap();

        prop_assert!(within(solution.input, min, max));
        prop_assert!(solution.loss <= wavy_2d(&start));
    }

    #[test]
    fn converged_result_is_a_fixed_point(
        start in -10.0_f32..10.0,
        epsilon in 0.05_f32..1.0,
    ) {
        let contract = LossFn::new(wavy);
        let bounds = Bounds::new(-10.0, 10.0);
        let config = Config::new(10_000);

        let first = minimize_unobserved(&contract, start, &bounds, &epsilon, &config).unwrap();
        prop_assume!(first.status == Status::LocalMinimum);

        let second =
            minimize_unobserved(&contract, first.input, &bounds, &epsilon, &config).unwrap();

        prop_assert_eq!(second.status, Status::LocalMinimum);
        prop_assert_eq!(second.input, first.input);
    }

    #[test]
    fn vector_directions_are_complete(epsilon in prop::array::uniform4(0.001_f32..5.0)) {
        let directions = <[f32; 4]>::directions(epsilon);

        prop_assert_eq!(directions.len(), 80);
        for (i, a) in directions.iter().enumerate() {
            prop_assert!(a.iter().any(|&c| c != 0.0));
            prop_assert!(directions[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn masked_axes_stay_in_bounds(
        start in prop::array::uniform3(-1.0_f32..1.0),
        pull in -5.0_f32..5.0,
    ) {
        // The loss pulls every axis toward `pull`, which may lie outside the bounds.
        let contract = PartialClamp::new(
            LossFn::new(move |v: &[f32; 3]| v.iter().map(|c| (c - pull).powi(2)).sum::<f32>()),
            [true, false, true],
        );
        let solution = minimize_unobserved(
            &contract,
            start,
            &Bounds::new([-1.0; 3], [1.0; 3]),
            &[0.1; 3],
            &Config::new(200),
        )
        .unwrap();

        let [x, _, z] = solution.input;
        prop_assert!((-1.0..=1.0).contains(&x));
        prop_assert!((-1.0..=1.0).contains(&z));
        prop_assert!(solution.loss <= contract.loss(&start).unwrap());
    }
}
