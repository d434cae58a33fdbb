use std::path::Path;
use std::process;
use log::{error, LevelFilter};

use dicomkit::api::DicomKit;
use dicomkit::config::AppConfig;
use dicomkit::dicom::DicomError;
use dicomkit::utils::logger::Logger;
use dicomkit::commands::{build_cli, CommandFactory, DicomkitCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => match AppConfig::from_file(Path::new(path)) {
            Ok(c) => c,
            Err(e) => exit_with(&e),
        },
        None => AppConfig::default(),
    };

    if let Some(dir) = matches.get_one::<String>("data-dir") {
        config = config.with_data_dir(dir);
    }

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let logger = match Logger::new(&config.log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger(&config.log_file, level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let kit = DicomKit::new(config);
    let factory = DicomkitCommandFactory::new();

    match factory.create_command(&matches, &kit, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                exit_with(&e);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            exit_with(&e);
        }
    };
}

fn exit_with(e: &DicomError) -> ! {
    eprintln!("Error [{}]: {}", e.code(), e);
    process::exit(1);
}
