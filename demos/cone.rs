//! Cone GA: one reported run, then averaged statistics over repeated runs.
//!
//! Run with `RUST_LOG=info cargo run --example cone`.

use nichega::cone::{ConeConfig, ConeExperiment, ConeGa};

fn main() -> Result<(), nichega::GaError> {
    env_logger::init();

    let config = ConeConfig::default();
    let result = ConeGa::new(config.clone())?.run()?;
    print!("{}", result.report());
    println!();

    let summary = ConeExperiment::new(config, 100).run()?;
    print!("{summary}");
    Ok(())
}
