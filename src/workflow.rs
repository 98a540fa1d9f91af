//! Delivery workflow
//!
//! This module contains the engine that orchestrates the delivery steps.

use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;
use log::{debug, info};

use crate::cli::{check_for_stdout_stream, get_source};
use crate::delivery::{DeliveryReceipt, deliver_file, validate_source};
use crate::errors::Error;
use crate::logging::format_message;

/// Options for running a delivery
#[derive(Debug, Clone)]
pub struct DeliveryOptions {
    /// Path of the file to deliver, if one was given on the command line
    pub source: Option<PathBuf>,
    /// Whether to just simulate the delivery (true) or actually write the destination file (false)
    pub dry_run: bool,
}

/// Delivers the source file based on the command-line arguments
///
/// Extracts the delivery options from the parsed arguments, runs the
/// delivery, and holds the console open when launched from a GUI.
///
/// # Errors
/// * Returns an error if any delivery step fails
pub fn perform_delivery_based_on_arguments(argument_matches: ArgMatches) -> Result<()> {
    let options = DeliveryOptions {
        source: get_source(&argument_matches),
        dry_run: argument_matches.get_flag("dry"),
    };

    run_delivery(options)?;

    check_for_stdout_stream();

    Ok(())
}

/// Runs the delivery steps in order
///
/// This function orchestrates the three steps:
/// 1. Check that a source path argument was supplied
/// 2. Check that the source path refers to a regular file
/// 3. Copy the source file to the fixed destination path
///
/// Each step is terminal on failure; nothing is written before step 3.
///
/// # Arguments
/// * `options` - Options for running the delivery
///
/// # Returns
/// * `Result<DeliveryReceipt>` - The source and destination of the delivery or an error
///
/// # Errors
/// * Returns an error if any step fails
pub fn run_delivery(options: DeliveryOptions) -> crate::errors::Result<DeliveryReceipt> {
    // Step 1: A source path must have been supplied
    let source = options.source.ok_or(Error::MissingArgument)?;
    debug!("Delivering file: {}", source.display());

    // Step 2: The source path must refer to a regular file
    validate_source(&source)?;

    // Step 3: Copy the source file to the fixed destination
    let receipt = deliver_file(&source, !options.dry_run)?;

    let source_name = receipt.source_path.display().to_string();
    let destination_name = receipt.destination_path.display().to_string();
    println!(
        "{}",
        format_message(
            &format!("Copying {source_name} to {destination_name}"),
            &format!(
                "Copying {} to {}",
                source_name.bold(),
                destination_name.bold()
            ),
        )
    );

    info!(
        "Delivered {} to {}{}",
        source_name,
        destination_name,
        if receipt.dry_run { " (dry run)" } else { "" }
    );

    Ok(receipt)
}
