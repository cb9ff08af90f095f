//! RFC 1918 private address space.

use crate::models::{Ipv4, SubnetSnapshot};
use crate::processing::snapshot;
use std::net::Ipv4Addr;

/// The three RFC 1918 blocks, smallest prefix first.
pub fn private_ranges() -> Vec<SubnetSnapshot> {
    [
        (Ipv4Addr::new(10, 0, 0, 0), 8),
        (Ipv4Addr::new(172, 16, 0, 0), 12),
        (Ipv4Addr::new(192, 168, 0, 0), 16),
    ]
    .into_iter()
    .filter_map(|(addr, len)| Ipv4::from_parts(addr, len).ok())
    .map(snapshot)
    .collect()
}

/// True when `ip` is inside one of the RFC 1918 blocks.
pub fn is_private(ip: Ipv4Addr) -> bool {
    private_ranges().iter().any(|r| r.subnet.contains(ip))
}
