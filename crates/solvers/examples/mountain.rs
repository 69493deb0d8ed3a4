//! Climbs a two-peak mountain with linear descent.
//!
//! The loss is `-height`, so minimizing it climbs. Starting near the short
//! peak ends on the short peak; only a start near the tall peak finds it.
//!
//! Run with `RUST_LOG=descent_solvers=trace` to see every step.

use descent_core::LossFn;
use descent_solvers::optimization::linear_descent::{self, Bounds, Config, Event, Solution};
use tracing_subscriber::EnvFilter;

fn height(p: &[f32; 2]) -> f32 {
    let peak = |cx: f32, cy: f32, h: f32| {
        let d2 = (p[0] - cx).powi(2) + (p[1] - cy).powi(2);
        h * (-d2 / 8.0).exp()
    };
    peak(5.0, 5.0, 10.0) + peak(-5.0, -5.0, 5.0)
}

fn report(label: &str, solution: &Solution<[f32; 2]>) {
    let [x, y] = solution.input;
    println!(
        "{label}: ({x:.2}, {y:.2}) height {:.3} after {} iterations, {} evaluations ({:?})",
        -solution.loss, solution.iters, solution.evals, solution.status,
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let climb = LossFn::new(|p: &[f32; 2]| -height(p));
    let bounds = Bounds::new([-10.0; 2], [10.0; 2]);
    let epsilon = [0.1, 0.1];
    let config = Config::new(1000);

    let mut path = Vec::new();
    let short = linear_descent::minimize(
        &climb,
        [-3.0, -4.0],
        &bounds,
        &epsilon,
        &config,
        |event: &Event<'_, _>| {
            path.push(*event.input());
            None
        },
    )?;
    report("start near short peak", &short);
    println!("  visited {} candidates", path.len());

    let tall = linear_descent::minimize_unobserved(&climb, [3.0, 4.0], &bounds, &epsilon, &config)?;
    report("start near tall peak", &tall);

    Ok(())
}
