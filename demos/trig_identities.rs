//! Rediscovering cos and sin from their coupled derivatives.

use rke::{ODE, Rke};

/// y0 is cos x, y1 is sin x.
struct Trig;

impl ODE for Trig {
    fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) -> bool {
        dydx[0] = -y[1];
        dydx[1] = y[0];
        true
    }
}

fn main() {
    let mut solver = Rke::new(2, Trig);
    let mut x = 0.0;
    let mut y = [1.0, 0.0]; // cos 0 and sin 0

    match solver.solve(&mut x, &mut y, 1.5) {
        Ok(()) => println!("cos (1.5)     = {:12.6}", y[0]),
        Err(err) => eprintln!("cos (1.5) not computed: {err}"),
    }
    println!(
        "    using {:3} accepted and {:3} rejected steps",
        solver.accepted_steps(),
        solver.rejected_steps()
    );

    // Undo it, to see if we get back where we started.
    match solver.solve(&mut x, &mut y, 0.0) {
        Ok(()) => {
            println!("  returning to {:12.6}, got {:12.6}", 1.0, y[0]);
            println!("  returning to {:12.6}, got {:12.6}", 0.0, y[1]);
        }
        Err(err) => eprintln!("  return to start not computed: {err}"),
    }
    println!(
        "    using {:3} accepted and {:3} rejected steps",
        solver.accepted_steps(),
        solver.rejected_steps()
    );
}
