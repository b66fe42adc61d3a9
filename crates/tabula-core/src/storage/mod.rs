//! The `.tbl` save format: one `ADDR: value` line per occupied cell.

mod parser;
mod writer;

pub use parser::{parse_tbl, parse_tbl_content};
pub use writer::{write_tbl, write_tbl_content};
