pub mod config;
pub mod tag;

pub use tag::{run_cycle, run_get, run_set};
