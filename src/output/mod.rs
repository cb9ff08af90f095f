//! Output formatting for calculator results.
//!
//! - [`terminal`] - text output with colours
//! - [`json`] - machine-readable output

mod json;
mod terminal;

pub use json::{render_json, write_json_seq};
pub use terminal::{
    render_count, render_interfaces, render_iteration, render_mask, render_ports,
    render_prefix_len, render_private_ranges, render_snapshot,
};
