//! CSV reading utilities.

mod line;

pub use line::{clean_field, data_lines, sniff_delimiter, split_clean, split_line};
