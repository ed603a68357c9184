use clap::Parser;
use env_logger::Env;
use std::process::ExitCode;

mod argparser;
mod data;
mod data_load;
mod error;
mod low_coverage_report;
mod processing;

use argparser::{Args, USAGE};
use error::{InputError, ReportError};
use low_coverage_report::low_coverage_report;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            log::debug!("Argument error: {}", e);
            print!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
    };

    match low_coverage_report(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&args, &e);
            ExitCode::FAILURE
        }
    }
}

fn report_failure(args: &Args, err: &ReportError) {
    eprintln!("\nERROR: {}", err);
    match err {
        ReportError::Input(_) => {
            eprintln!("\nUnable to process input file: {}", args.input.display());
            eprintln!("{}\n", InputError::expected_format());
        }
        ReportError::Output(_) => {
            eprintln!("\nUnable to write output to location: {}\n", args.output.display());
        }
    }
}
