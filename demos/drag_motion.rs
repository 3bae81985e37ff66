//! Box slowing down by friction in air.

use rke::{ODE, Rke};

/// y0 is the distance so far, y1 the current speed.
struct Drag {
    coefficient: f64,
}

impl ODE for Drag {
    fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) -> bool {
        dydx[0] = y[1];
        dydx[1] = -self.coefficient * y[1] * y[1];
        true
    }
}

fn main() {
    let mut solver = Rke::new(2, Drag { coefficient: 0.01 });
    let mut x = 0.0;
    let mut y = [0.0, 100.0]; // no distance so far, but some initial speed

    // Ask the clock to be 5.0 and collect the answer.
    match solver.solve(&mut x, &mut y, 5.0) {
        Ok(()) => println!("Distance      = {:12.6}", y[0]),
        Err(err) => eprintln!("Distance not computed: {err}"),
    }
    println!(
        "    using {:3} accepted and {:3} rejected steps",
        solver.accepted_steps(),
        solver.rejected_steps()
    );

    // Undo it, to see if we get back where we started.
    match solver.solve(&mut x, &mut y, 0.0) {
        Ok(()) => {
            println!("  returning to {:12.6}, got {:12.6}", 0.0, y[0]);
            println!("  returning to {:12.6}, got {:12.6}", 100.0, y[1]);
        }
        Err(err) => eprintln!("  return to start not computed: {err}"),
    }
    println!(
        "    using {:3} accepted and {:3} rejected steps",
        solver.accepted_steps(),
        solver.rejected_steps()
    );
}
