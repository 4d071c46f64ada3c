mod correct;

use std::process::ExitCode;
use std::time::Instant;

use log::{LevelFilter, debug, error};

use gccorrect_core::BinTableError;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "gccorrect";

    pub const EXIT_FAILURE: u8 = 1;
    pub const EXIT_SOURCE_NOT_FOUND: u8 = 3;
    pub const EXIT_MALFORMED_INPUT: u8 = 4;
}

fn init_logging(debug_mode: bool) {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(match debug_mode {
        true => LevelFilter::Debug,
        false => LevelFilter::Warn,
    });
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<BinTableError>() {
        Some(BinTableError::SourceNotFound(_)) => consts::EXIT_SOURCE_NOT_FOUND,
        Some(BinTableError::MalformedInput { .. }) => consts::EXIT_MALFORMED_INPUT,
        _ => consts::EXIT_FAILURE,
    }
}

fn main() -> ExitCode {
    let start = Instant::now();

    let app = correct::cli::create_correct_cli();
    let matches = app.get_matches();

    let debug_mode = matches.get_flag(correct::cli::DEBUG_ARG);
    init_logging(debug_mode);
    if debug_mode {
        debug!("Debug mode activated");
    }

    match correct::handlers::run_correct(&matches) {
        Ok(()) => {
            debug!("Elapsed time: {} [s]", start.elapsed().as_secs_f64());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}
