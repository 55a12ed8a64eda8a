//! Chalkboard Application
//!
//! Replays recorded gesture scripts against a canvas session and reports
//! the resulting board.

mod runner;
mod script;

pub use runner::{run_script, AppError, Report};
pub use script::{Command, Step};
