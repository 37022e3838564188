//! Library surface of the `bloods` command line tool.

pub mod logging;
pub mod profile;
pub mod render;
