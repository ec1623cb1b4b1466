mod config;
pub mod logging;
pub mod progress;

pub use config::{
    DEFAULT_DEPOT_OUTPUT, DEFAULT_DEPOT_PATH, DEFAULT_P4_PROGRAM, P4_PROGRAM_ENV, PREVIEW_LIMIT,
    PROGRAM_LOG_LEVEL, p4_program,
};

pub use logging::init;
