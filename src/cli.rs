use atty::Stream;
use clap::{Arg, ArgMatches, command, crate_authors, crate_description, crate_name, crate_version};
use directories::ProjectDirs;
use std::fs::create_dir_all;
use std::path::PathBuf;

use crate::constants::{
    APPLICATION, DRY_RUN_HELP, LOCAL_LOGGING_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP, ORGANIZATION,
    QUALIFIER, SOURCE_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error, path_operation_error};
use crate::logging::LogLevel;

/// Checks if stdout is a terminal and waits for user input if it is
///
/// This function is used to prevent the console window from closing
/// immediately after the program finishes when run from a GUI.
pub fn check_for_stdout_stream() {
    if atty::is(Stream::Stdout) {
        dont_disappear::enter_to_continue::default();
    }
}

/// Sets up and returns command-line argument matches
///
/// Defines the following arguments:
/// - `source`: Path of the file to deliver
/// - `dry`: Run without writing the destination file
/// - `verbose`: Increase verbosity level
///
/// The source argument is deliberately not marked required: its absence is
/// part of the tool's own contract (message on stdout, exit code 1) rather
/// than a clap usage error.
///
/// # Returns
/// * `Result<ArgMatches>` - The parsed command-line arguments
///
/// # Errors
/// Returns an error if the command-line arguments cannot be parsed
pub fn get_matches() -> Result<ArgMatches> {
    // define arg for the file to deliver
    let arg_source = Arg::new("source").help(SOURCE_HELP).required(false);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(clap::ArgAction::SetTrue);

    let matches = command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_source)
        .arg(arg_dry)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
        .get_matches();

    Ok(matches)
}

/// Gets the source path from the command-line arguments, if one was given
///
/// An empty argument counts as absent, so `fdeliver ""` reports the missing
/// parameter rather than looking up an empty path.
pub fn get_source(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .get_one::<String>("source")
        .filter(|source| !source.is_empty())
        .map(PathBuf::from)
}

/// Gets the verbosity level from the command-line arguments
///
/// Counts the occurrences of the "verbose" flag and converts the count to
/// a LogLevel value.
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if matches.get_flag("log_locally") {
        Ok(filename)
    } else {
        let folder = find_project_folder()?;
        if !folder.config_dir().exists() {
            create_dir_all(folder.config_dir())?;
        }
        let path = folder.config_dir().join(filename);
        let path_str = path
            .as_path()
            .to_str()
            .ok_or_else(|| path_operation_error(path.clone(), "convert to string"))?;
        Ok(path_str.to_string())
    }
}

/// Locates the per-user project folder used for the log file
fn find_project_folder() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to find the project folder"))
}
