//! Library side of the `carteira` command-line tool.

pub mod commands;
pub mod logging;
pub mod summary;
