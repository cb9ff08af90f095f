//! Derived, read-only view of a subnet.

use super::Ipv4;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything the calculator derives for one subnet.
///
/// Computed fresh per query and never mutated. `total_address_count` is u64
/// so a /0 block (2^32 addresses) fits.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetSnapshot {
    /// The block with its address normalised to the network address.
    pub subnet: Ipv4,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    pub first_usable_address: Ipv4Addr,
    pub last_usable_address: Ipv4Addr,
    pub total_address_count: u64,
    /// Hosts that can be assigned: total - 2, except 2 for /31 and 1 for /32.
    pub usable_host_count: u64,
    pub subnet_mask: Ipv4Addr,
    pub wildcard_mask: Ipv4Addr,
}

impl SubnetSnapshot {
    pub fn prefix_len(&self) -> u8 {
        self.subnet.prefix_len()
    }
}
