//! Domain models for the subnet calculator.
//!
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`SubnetSnapshot`] - derived addresses and counts for one subnet

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, next_subnet_ipv4, Ipv4, MAX_LENGTH};
pub use subnet::SubnetSnapshot;
