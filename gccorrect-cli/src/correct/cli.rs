use clap::{Arg, ArgAction, Command, arg};

use crate::consts;

pub const COUNTS_ARG: &str = "counts";
pub const OUTPUT_ARG: &str = "output";
pub const DEBUG_ARG: &str = "debug";

pub fn create_correct_cli() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("gccorrect developers")
        .about("Correct read depth over genomic bins for GC-content bias.")
        .long_about(
            "Correct read depth over genomic bins for GC-content bias.\n\n\
             Input is a tab delimited file with chromosome, start, stop, GC, counts \
             for bins that have the same size. Output is the same rows with the \
             corrected counts appended as a sixth column.",
        )
        .disable_version_flag(true)
        .arg(
            Arg::new(COUNTS_ARG)
                .required(true)
                .help("Tab delimited counts file (.gz supported, '-' for stdin)"),
        )
        .arg(
            arg!(-o --output <output>)
                .required(false)
                .help("Write the corrected counts to this file [stdout]"),
        )
        .arg(
            arg!(-d --debug)
                .help("Print debug information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(-v --version)
                .help("Print version and exit")
                .action(ArgAction::Version),
        )
}
