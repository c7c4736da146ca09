//! Rectangle demo.
//!
//! Homes the plotter, moves to a corner and traces square outlines of growing size.
//!
//! Run with: `cargo run --example rectangle`

mod host;

use host::{MockPin, PrintingDriver, SleepDelay, DEMO_CONFIG};
use plotter_motion::{parse_config, Plotter, Result, Steps};

const SIDE: u32 = 500;

fn main() -> Result<()> {
    host::init_logging();
    println!("=== Rectangle Demo ===\n");

    let plotter = Plotter::builder()
        .x_axis(MockPin::default(), MockPin::default())
        .y_axis(MockPin::default(), MockPin::default())
        .delay(SleepDelay)
        .config(parse_config(DEMO_CONFIG)?)
        .build()?;

    let mut plotter = plotter
        .home(&mut PrintingDriver, "uart2")
        .map_err(|(_, e)| e)?;

    plotter.move_to(Steps(1_000), Steps(1_000))?;
    for scale in 1..=3 {
        plotter.trace_rectangle(SIDE * scale)?;
        println!("traced {} step square, back at {:?}", SIDE * scale, plotter.position());
    }

    plotter.move_to(Steps(0), Steps(0))?;
    println!("\n=== Demo Complete ===");
    Ok(())
}
