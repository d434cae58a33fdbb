//! Command-line argument definitions

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Builds the argument parser for the `dicomkit` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("dicomkit")
        .version("0.1.0")
        .about("Inspect DICOM headers and export pixel data as PNG")
        .arg(
            Arg::new("inputs")
                .help("Stored file ids, or the file to import with --upload")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Directory holding uploaded files")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tag")
                .short('t')
                .long("tag")
                .help("Print one header value, tag as 8 hex digits (e.g. 00100010)")
                .value_name("TAG")
                .required(false),
        )
        .arg(
            Arg::new("image")
                .short('i')
                .long("image")
                .help("Export pixel data as PNG")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("upload")
                .short('u')
                .long("upload")
                .help("Import a DICOM file into the store")
                .action(ArgAction::SetTrue),
        )
}
