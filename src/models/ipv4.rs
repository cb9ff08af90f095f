//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] struct for an address paired with a prefix length,
//! along with the bit-level helpers the subnet calculations are built on.
//! Addresses are handled as `u32` internally so mask arithmetic and overflow
//! are explicit.

use crate::error::{Error, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use netbuddy::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    check_len(len)?;
    Ok(mask_bits(len))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Calculate the next subnet of the same size after the given [`Ipv4`] subnet.
///
/// Fails with [`Error::AddressSpaceExhausted`] instead of wrapping to 0.0.0.0.
pub fn next_subnet_ipv4(ipv4: Ipv4) -> Result<Ipv4> {
    let next_bits = u32::from(ipv4.hi())
        .checked_add(1)
        .ok_or(Error::AddressSpaceExhausted(ipv4))?;
    Ok(Ipv4 {
        addr: Ipv4Addr::from(next_bits),
        mask: ipv4.mask,
    })
}

fn check_len(len: u8) -> Result<()> {
    if len > MAX_LENGTH {
        Err(Error::Range(len as u32))
    } else {
        Ok(())
    }
}

// Callers guarantee len <= 32.
fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// IPv4 address with CIDR notation support.
///
/// The address may be any address inside the block, [`Ipv4::lo`] normalises
/// it to the network address. The prefix length is validated on construction.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        let addr_cidr = addr_cidr.trim();
        let Some((addr, prefix)) = addr_cidr.split_once('/') else {
            let reason = "expected something like '192.168.3.1/24'";
            return Err(Error::parse(addr_cidr, reason));
        };
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| Error::parse(addr_cidr, format!("'{addr}' is not an IPv4 address")))?;
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::parse(
                addr_cidr,
                format!("prefix '{prefix}' is not a number"),
            ));
        }
        let mask: u32 = prefix
            .parse()
            .map_err(|_| Error::parse(addr_cidr, format!("prefix '{prefix}' is too large")))?;
        if mask > MAX_LENGTH as u32 {
            return Err(Error::Range(mask));
        }
        Ok(Ipv4 {
            addr,
            mask: mask as u8,
        })
    }

    /// Pair an address with a prefix length, rejecting lengths above 32.
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<Ipv4> {
        check_len(mask)?;
        Ok(Ipv4 { addr, mask })
    }

    /// The address as supplied, not normalised.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix_len(&self) -> u8 {
        self.mask
    }

    /// Subnet mask in dotted-decimal form.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.mask))
    }

    /// Host mask (inverse of the netmask) in dotted-decimal form.
    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!mask_bits(self.mask))
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        let mask = mask_bits(self.mask);
        Ipv4Addr::from((u32::from(self.addr) & mask) | !mask)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & mask_bits(self.mask))
    }

    /// The same block with the address normalised to the network address.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }
}

impl FromStr for Ipv4 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
