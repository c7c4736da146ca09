//! TMC2209 bring-up demo.
//!
//! Applies the reduced-power homing settings to a TMC2209 and dumps the UART
//! datagrams that would go out on the wire.
//!
//! Run with: `cargo run --example tmc2209_bringup`

use std::convert::Infallible;

use plotter_motion::driver::bring_up;
use plotter_motion::{DriverConfig, Result, Tmc2209};

/// UART that prints each datagram as hex.
struct HexDumpUart;

impl embedded_io::ErrorType for HexDumpUart {
    type Error = Infallible;
}

impl embedded_io::Write for HexDumpUart {
    fn write(&mut self, buf: &[u8]) -> core::result::Result<usize, Infallible> {
        let hex: Vec<String> = buf.iter().map(|b| format!("{:02X}", b)).collect();
        println!("  tx: {}", hex.join(" "));
        Ok(buf.len())
    }

    fn flush(&mut self) -> core::result::Result<(), Infallible> {
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("=== TMC2209 Bring-up ===\n");

    let config = DriverConfig::default();
    println!(
        "run {}%, hold {}%, hold delay {}%, power saving {}, power {}\n",
        config.run_current_percent.value(),
        config.hold_current_percent.value(),
        config.hold_delay_percent.value(),
        config.power_saving,
        config.power_level
    );

    let mut driver: Tmc2209<HexDumpUart> = Tmc2209::new(0);
    println!("TMC2209 node {}", driver.address());
    bring_up(&mut driver, HexDumpUart, &config)?;
    println!("\nOutput stage enabled: {}", driver.is_enabled());

    Ok(())
}
