//! netbuddy: IPv4 subnet calculator and service port lookup.
//!
//! The subnet arithmetic lives in [`processing`] on top of the [`models`]
//! types, everything else is command-line plumbing around it.

pub mod cli;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod logging;
pub mod models;
pub mod output;
pub mod private_ranges;
pub mod processing;
pub mod services;

pub use error::{Error, Result};
pub use models::{Ipv4, SubnetSnapshot};
pub use processing::{compute_range, derive_info, iterate, snapshot, to_prefix_length};
