pub use cli::*;
pub use delivery::*;
pub use errors::*;
pub use workflow::*;

pub mod cli;
pub mod constants;
pub mod delivery;
pub mod errors;
pub mod logging;
pub mod workflow;

pub mod prelude {
    pub use crate::errors::{
        copy_failed_error, generic_error, path_operation_error, source_not_found_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::get_matches;
    pub use crate::logging::{LogLevel, format_message, init_default_logger, init_logger};
    pub use crate::perform_delivery_based_on_arguments;
}
