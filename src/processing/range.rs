//! Network and broadcast address calculation.

use crate::error::Result;
use crate::models::{broadcast_addr, cut_addr, Ipv4};
use std::net::Ipv4Addr;

/// Lowest and highest address of a block, tagged with its prefix length.
///
/// Only built by [`compute_range`] / [`range_for`], so the two addresses
/// always describe the same aligned block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    subnet: Ipv4,
    network: Ipv4Addr,
    broadcast: Ipv4Addr,
}

impl AddressRange {
    pub fn network(&self) -> Ipv4Addr {
        self.network
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        self.broadcast
    }

    pub fn prefix_len(&self) -> u8 {
        self.subnet.prefix_len()
    }

    /// The block, with its address normalised to the network address.
    pub fn subnet(&self) -> Ipv4 {
        self.subnet
    }
}

/// Compute the network and broadcast address of a subnet.
///
/// The subnet address may be any address inside the block.
pub fn compute_range(subnet: Ipv4) -> AddressRange {
    log::debug!("compute_range({subnet})");
    AddressRange {
        subnet: subnet.network(),
        network: subnet.lo(),
        broadcast: subnet.hi(),
    }
}

/// Same as [`compute_range`] for a raw address and prefix length.
///
/// Fails with a range error when `len` is above 32.
pub fn range_for(addr: Ipv4Addr, len: u8) -> Result<AddressRange> {
    let network = cut_addr(addr, len)?;
    Ok(AddressRange {
        subnet: Ipv4::from_parts(network, len)?,
        network,
        broadcast: broadcast_addr(addr, len)?,
    })
}
