//! Convert protocol documents to JSON records.
//!
//! Usage:
//!   protocol_converter protocols/mr_hjarna.docx
//!   protocol_converter protocols/
//!
//! Records are written to `output/<document>.json`. Set `RUST_LOG=debug`
//! for loader details.

use clap::Parser;
use protocol_converter::{BatchConverter, ConverterConfig};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "protocol_converter",
    version,
    about = "Convert imaging protocol documents (.docx) into JSON records"
)]
struct Cli {
    /// Can be a single .docx file or a directory of .docx files (no subdirectories)
    input: PathBuf,
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        })
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    log::info!("starting conversion\n----------------------");

    let batch = BatchConverter::new(ConverterConfig::default());
    match batch.run(&cli.input) {
        Ok(report) => {
            if report.has_failures() {
                log::warn!(
                    "{} documents converted, {} failed",
                    report.converted(),
                    report.failed.len()
                );
            } else {
                log::info!("{} documents converted", report.converted());
            }
        },
        Err(e) => log::error!("{}", e),
    }

    log::info!("--------------------------\nend conversion");
}
