use filterspace::error::Result;
use filterspace::table::Report;
use log::{info, trace};

use std::io;

fn main() -> Result<()> {
    env_logger::init();
    trace!("init report...");

    let report = Report::default();
    let stdout = io::stdout();
    report.write(io::BufWriter::new(stdout.lock()))?;

    info!("wrote {} rows", report.rows());
    Ok(())
}
