//! Niching GA on the cosine landscape: prints the generation report and
//! the distinct peaks found.
//!
//! Run with `RUST_LOG=info cargo run --example niching`.

use nichega::niching::{NicheConfig, NicheGa};
use nichega::report::PeakReport;

fn main() -> Result<(), nichega::GaError> {
    env_logger::init();

    let ga = NicheGa::new(NicheConfig::default())?;
    let result = ga.run();

    print!("{}", result.report());
    println!();
    print!("{}", PeakReport(&result.peaks(30)));
    Ok(())
}
