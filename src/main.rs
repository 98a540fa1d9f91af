use std::process::exit;

use colored::Colorize;

use file_deliver::cli::{get_log_file, get_verbosity};
use file_deliver::logging::{format_message, init_logger};
use file_deliver::prelude::*;

fn main() {
    exit(run());
}

fn run() -> i32 {
    let argument_matches = match get_matches() {
        Ok(matches) => matches,
        Err(error) => {
            println!("{error}");
            return 1;
        }
    };

    let verbosity = get_verbosity(&argument_matches);
    match get_log_file(&argument_matches) {
        Ok(log_file) => {
            if init_logger(verbosity, &log_file).is_err() {
                // Console-only logging when the log file cannot be opened
                let _ = init_logger(verbosity, "");
            }
        }
        Err(_) => {
            let _ = init_logger(verbosity, "");
        }
    }

    match perform_delivery_based_on_arguments(argument_matches) {
        Ok(()) => 0,
        Err(error) => {
            let message = error.to_string();
            println!("{}", format_message(&message, &message.red().to_string()));
            1
        }
    }
}
