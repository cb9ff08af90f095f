//! Usable host range and address counts.

use super::range::{compute_range, AddressRange};
use crate::models::{Ipv4, SubnetSnapshot, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Derive the full [`SubnetSnapshot`] from a computed range.
///
/// Usable addresses follow RFC 3021 for point-to-point links:
/// - /32: the single address is first and last usable
/// - /31: both addresses are usable
/// - otherwise network + 1 through broadcast - 1
pub fn derive_info(range: AddressRange) -> SubnetSnapshot {
    let len = range.prefix_len();
    let network = u32::from(range.network());
    let broadcast = u32::from(range.broadcast());

    let (first, last, usable) = match len {
        MAX_LENGTH => (network, broadcast, 1),
        31 => (network, broadcast, 2),
        // prefix <= 30 leaves at least 4 addresses, neither side can wrap
        _ => (network + 1, broadcast - 1, (broadcast - network) as u64 - 1),
    };

    let subnet = range.subnet();
    let total = (broadcast - network) as u64 + 1;

    SubnetSnapshot {
        subnet,
        network_address: range.network(),
        broadcast_address: range.broadcast(),
        first_usable_address: Ipv4Addr::from(first),
        last_usable_address: Ipv4Addr::from(last),
        total_address_count: total,
        usable_host_count: usable,
        subnet_mask: subnet.netmask(),
        wildcard_mask: subnet.wildcard(),
    }
}

/// Range then info, for the common case.
pub fn snapshot(subnet: Ipv4) -> SubnetSnapshot {
    derive_info(compute_range(subnet))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(cidr: &str) -> SubnetSnapshot {
        snapshot(Ipv4::new(cidr).unwrap())
    }

    #[test]
    fn test_snapshot_23() {
        let s = snap("192.168.1.1/23");
        assert_eq!(s.network_address, Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(s.broadcast_address, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(s.first_usable_address, Ipv4Addr::new(192, 168, 0, 1));
        assert_eq!(s.last_usable_address, Ipv4Addr::new(192, 168, 1, 254));
        assert_eq!(s.total_address_count, 512);
        assert_eq!(s.usable_host_count, 510);
        assert_eq!(s.subnet_mask, Ipv4Addr::new(255, 255, 254, 0));
        assert_eq!(s.subnet.to_string(), "192.168.0.0/23");
    }

    #[test]
    fn test_total_counts() {
        assert_eq!(snap("192.168.1.1/24").total_address_count, 256);
        assert_eq!(snap("192.168.4.20/19").total_address_count, 8192);
        assert_eq!(snap("0.0.0.0/0").total_address_count, 4_294_967_296);
    }

    #[test]
    fn test_broadcast_minus_network_is_total_minus_one() {
        let addr = Ipv4Addr::new(203, 0, 113, 77);
        for len in 0..=32 {
            let s = snapshot(Ipv4::from_parts(addr, len).unwrap());
            let span = u32::from(s.broadcast_address) as u64 - u32::from(s.network_address) as u64;
            assert_eq!(span, s.total_address_count - 1, "prefix /{len}");
            assert_eq!(s.total_address_count, 1u64 << (32 - len as u32));
        }
    }

    #[test]
    fn test_slash_32() {
        let s = snap("10.0.0.5/32");
        assert_eq!(s.network_address, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(s.broadcast_address, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(s.first_usable_address, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(s.last_usable_address, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(s.total_address_count, 1);
        assert_eq!(s.usable_host_count, 1);
    }

    #[test]
    fn test_slash_31() {
        let s = snap("10.0.0.5/31");
        assert_eq!(s.first_usable_address, Ipv4Addr::new(10, 0, 0, 4));
        assert_eq!(s.last_usable_address, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(s.usable_host_count, 2);
    }

    #[test]
    fn test_slash_30_and_top_of_space() {
        let s = snap("10.0.0.5/30");
        assert_eq!(s.first_usable_address, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(s.last_usable_address, Ipv4Addr::new(10, 0, 0, 6));
        assert_eq!(s.usable_host_count, 2);

        let top = snap("255.255.255.255/30");
        assert_eq!(top.last_usable_address, Ipv4Addr::new(255, 255, 255, 254));

        let all = snap("1.2.3.4/0");
        assert_eq!(all.first_usable_address, Ipv4Addr::new(0, 0, 0, 1));
        assert_eq!(all.last_usable_address, Ipv4Addr::new(255, 255, 255, 254));
        assert_eq!(all.usable_host_count, 4_294_967_294);
    }
}
