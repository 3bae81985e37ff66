//! Integration under the standard normal curve.

use rke::{ODE, Rke};

/// y0 accumulates the area under the standard normal density.
struct NormalDensity;

impl ODE for NormalDensity {
    fn ode(&self, x: f64, _y: &[f64], dydx: &mut [f64]) -> bool {
        dydx[0] = (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt();
        true
    }
}

fn main() {
    let mut solver = Rke::new(1, NormalDensity);
    let mut x = -1.0;
    let mut y = [0.0];

    // Area under the curve between -1 and +1.
    match solver.solve(&mut x, &mut y, 1.0) {
        Ok(()) => println!("Probability   = {:12.6}", y[0]),
        Err(err) => eprintln!("Probability not computed: {err}"),
    }
    println!(
        "    using {:3} accepted and {:3} rejected steps",
        solver.accepted_steps(),
        solver.rejected_steps()
    );

    // Undo it, to see if we get back where we started.
    match solver.solve(&mut x, &mut y, -1.0) {
        Ok(()) => println!("  returning to {:12.6}, got {:12.6}", 0.0, y[0]),
        Err(err) => eprintln!("  return to start not computed: {err}"),
    }
    println!(
        "    using {:3} accepted and {:3} rejected steps",
        solver.accepted_steps(),
        solver.rejected_steps()
    );
}
