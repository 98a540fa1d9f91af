/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Fixed directory that receives every delivery
///
/// The directory is part of the iDea exchange contract and is expected to
/// already exist; the tool never creates it.
pub const DESTINATION_DIR: &str = "test2025-12-01";

/// Fixed filename assigned to every delivered copy
///
/// The exchange reads exactly this name, so the source file's own name and
/// extension are never carried over.
pub const DESTINATION_FILENAME: &str = "ToiDea.xml";

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// log file paths and application identification.
pub const APPLICATION: &str = "file_deliver";

/// Help text for the source command-line argument
pub const SOURCE_HELP: &str = "Path of the file to deliver";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without writing the destination file";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log-file command-line option
pub const LOG_FILE_HELP: &str = "Name of the log file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str = "Write the log file next to the binary instead of the config folder";

/// Default name for the log file
pub const LOG_FILE_DEFAULT: &str = "file_deliver.log";
