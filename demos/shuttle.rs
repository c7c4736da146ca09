//! Shuttle demo.
//!
//! Homes the plotter, then moves the cursor out along X and back, pausing a second
//! at each end.
//!
//! Run with: `cargo run --example shuttle`

mod host;

use host::{MockPin, PrintingDriver, SleepDelay, DEMO_CONFIG};
use plotter_motion::{parse_config, Plotter, Result, Steps};

const CYCLES: u32 = 3;
const DWELL_MS: u32 = 1000;

fn main() -> Result<()> {
    host::init_logging();
    println!("=== Shuttle Demo ===\n");

    let config = parse_config(DEMO_CONFIG)?;
    let plotter = Plotter::builder()
        .x_axis(MockPin::default(), MockPin::default())
        .y_axis(MockPin::default(), MockPin::default())
        .delay(SleepDelay)
        .config(config)
        .build()?;

    let mut plotter = plotter
        .home(&mut PrintingDriver, "uart2")
        .map_err(|(_, e)| e)?;
    println!("Homed: {:?}\n", plotter.position());

    for cycle in 1..=CYCLES {
        let out = plotter.move_to(Steps(10_000), Steps(0))?;
        plotter.wait_ms(DWELL_MS);
        let back = plotter.move_to(Steps(0), Steps(0))?;
        plotter.wait_ms(DWELL_MS);
        println!(
            "cycle {}: {} steps out, {} steps back",
            cycle, out.x_steps, back.x_steps
        );
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
