//! Dotted-decimal subnet mask to prefix length and back.

use crate::error::{Error, Result};
use crate::models::{get_cidr_mask, MAX_LENGTH};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

lazy_static! {
    static ref DOTTED_MASK: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex?");
}

/// Convert a dotted-decimal mask such as `255.255.255.192` to its prefix length.
///
/// Masks whose one-bits are not a single leading run (e.g. `255.0.255.0`) are
/// rejected rather than miscounted.
pub fn to_prefix_length(mask: &str) -> Result<u8> {
    let mask = mask.trim();
    let caps = DOTTED_MASK
        .captures(mask)
        .ok_or_else(|| Error::format(mask, "expected four dot-separated decimal octets"))?;

    let mut bits: u32 = 0;
    for i in 1..=4 {
        let octet: u8 = caps[i]
            .parse()
            .map_err(|_| Error::format(mask, format!("octet '{}' is above 255", &caps[i])))?;
        bits = (bits << 8) | octet as u32;
    }
    log::trace!("to_prefix_length({mask}) bits={bits:#010x}");

    mask_prefix_len(Ipv4Addr::from(bits))
        .map_err(|_| Error::format(mask, "mask bits are not contiguous"))
}

/// Prefix length of an already parsed mask.
pub fn mask_prefix_len(mask: Ipv4Addr) -> Result<u8> {
    let bits = u32::from(mask);
    let ones = bits.leading_ones();
    if ones + bits.trailing_zeros() != MAX_LENGTH as u32 {
        return Err(Error::format(
            &mask.to_string(),
            "mask bits are not contiguous",
        ));
    }
    Ok(ones as u8)
}

/// Dotted-decimal mask for a prefix length, the inverse of [`to_prefix_length`].
pub fn to_dotted_mask(len: u8) -> Result<Ipv4Addr> {
    Ok(Ipv4Addr::from(get_cidr_mask(len)?))
}
