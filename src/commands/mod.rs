//! Command implementations

pub mod configure;
pub mod show;
pub mod simple;

pub use configure::{ConfigUpdate, print_config, update_config};
pub use show::{run_show, run_stats};
pub use simple::{play_lines, run_simple};
