//! Walking forward through contiguous subnets of the same size.

use super::info::snapshot;
use crate::error::{Error, Result};
use crate::models::{next_subnet_ipv4, Ipv4, SubnetSnapshot, MAX_LENGTH};
use std::iter::FusedIterator;
use std::net::Ipv4Addr;

/// Lazy sequence of the subnets following a starting subnet.
///
/// Each item's network address is the previous item's broadcast address + 1.
/// Running past 255.255.255.255 yields one
/// [`Error::AddressSpaceExhausted`](crate::Error::AddressSpaceExhausted) and
/// then ends.
#[derive(Debug, Clone)]
pub struct SubnetIter {
    current: Ipv4,
    remaining: u64,
}

/// Iterate over the next `count` subnets after `subnet`, same prefix length.
///
/// A `count` of zero or less gives an empty sequence. Calling again with the
/// same arguments restarts from the beginning.
pub fn iterate(subnet: Ipv4, count: i64) -> SubnetIter {
    log::debug!("iterate({subnet}, {count})");
    SubnetIter {
        current: subnet.network(),
        remaining: count.max(0) as u64,
    }
}

/// How many subnets of the same size follow `subnet` before 255.255.255.255.
pub fn remaining_subnets(subnet: Ipv4) -> u64 {
    let end = u64::from(u32::from(subnet.hi())) + 1;
    ((1u64 << MAX_LENGTH) - end) >> (MAX_LENGTH - subnet.prefix_len())
}

/// Like [`iterate`], but fails before yielding anything when `count` would run
/// past 255.255.255.255. The error names the last subnet that exists.
pub fn iterate_checked(subnet: Ipv4, count: i64) -> Result<SubnetIter> {
    let available = remaining_subnets(subnet);
    if count > 0 && count as u64 > available {
        let last = Ipv4::from_parts(Ipv4Addr::BROADCAST, subnet.prefix_len())?;
        log::warn!("iterate({subnet}, {count}) needs more than {available} subnets");
        return Err(Error::AddressSpaceExhausted(last.network()));
    }
    Ok(iterate(subnet, count))
}

impl Iterator for SubnetIter {
    type Item = Result<SubnetSnapshot>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match next_subnet_ipv4(self.current) {
            Ok(next) => {
                self.remaining -= 1;
                self.current = next;
                Some(Ok(snapshot(next)))
            }
            Err(e) => {
                log::warn!("iterate stopped after {}: {e}", self.current);
                self.remaining = 0;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = usize::try_from(self.remaining).ok();
        (0, upper)
    }
}

impl FusedIterator for SubnetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(cidr: &str) -> Ipv4 {
        Ipv4::new(cidr).unwrap()
    }

    #[test]
    fn test_iterate_two() {
        let nets: Vec<Ipv4Addr> = iterate(start("192.168.0.0/24"), 2)
            .map(|s| s.unwrap().network_address)
            .collect();
        assert_eq!(
            nets,
            vec![Ipv4Addr::new(192, 168, 1, 0), Ipv4Addr::new(192, 168, 2, 0)]
        );
    }

    #[test]
    fn test_iterate_from_host_address() {
        let first = iterate(start("172.31.5.9/19"), 1).next().unwrap().unwrap();
        assert_eq!(first.subnet.to_string(), "172.31.32.0/19");
    }

    #[test]
    fn test_iterate_is_contiguous() {
        let snaps: Vec<SubnetSnapshot> = iterate(start("10.0.0.0/27"), 20)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(snaps.len(), 20);
        for pair in snaps.windows(2) {
            assert_eq!(
                u32::from(pair[1].network_address),
                u32::from(pair[0].broadcast_address) + 1
            );
            assert_eq!(pair[1].prefix_len(), 27);
        }
    }

    #[test]
    fn test_iterate_non_positive_count() {
        assert_eq!(iterate(start("10.0.0.0/8"), 0).count(), 0);
        assert_eq!(iterate(start("10.0.0.0/8"), -3).count(), 0);
    }

    #[test]
    fn test_iterate_restartable() {
        let subnet = start("10.0.0.0/30");
        let run = || iterate(subnet, 3).collect::<Result<Vec<_>>>();
        assert_eq!(run().unwrap(), run().unwrap());
    }

    #[test]
    fn test_iterate_exhausts_address_space() {
        let mut iter = iterate(start("255.255.254.0/24"), 5);
        let last = iter.next().unwrap().unwrap();
        assert_eq!(last.broadcast_address, Ipv4Addr::BROADCAST);
        assert!(matches!(
            iter.next(),
            Some(Err(Error::AddressSpaceExhausted(_)))
        ));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_iterate_whole_space_has_no_successor() {
        let items: Vec<_> = iterate(start("0.0.0.0/0"), 1).collect();
        assert_eq!(items.len(), 1);
        assert!(items[0].is_err());
    }

    #[test]
    fn test_remaining_subnets() {
        assert_eq!(remaining_subnets(start("10.0.0.0/8")), 245);
        assert_eq!(remaining_subnets(start("10.9.9.9/8")), 245);
        assert_eq!(remaining_subnets(start("255.255.254.0/24")), 1);
        assert_eq!(remaining_subnets(start("255.255.255.0/24")), 0);
        assert_eq!(remaining_subnets(start("0.0.0.0/0")), 0);
        assert_eq!(remaining_subnets(start("10.0.0.0/32")), 4_127_195_135);
    }

    #[test]
    fn test_iterate_checked_fails_up_front() {
        let err = iterate_checked(start("255.255.254.0/24"), 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "address space exhausted: no subnet follows 255.255.255.0/24"
        );
        assert!(iterate_checked(start("10.0.0.0/8"), 5_000_000_000).is_err());
        assert!(iterate_checked(start("0.0.0.0/0"), 1).is_err());
    }

    #[test]
    fn test_iterate_checked_allows_exact_fit() {
        let snaps: Vec<SubnetSnapshot> = iterate_checked(start("10.0.0.0/8"), 245)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(snaps.len(), 245);
        assert_eq!(snaps[244].broadcast_address, Ipv4Addr::BROADCAST);
        assert_eq!(iterate_checked(start("0.0.0.0/0"), 0).unwrap().count(), 0);
        assert_eq!(iterate_checked(start("0.0.0.0/0"), -7).unwrap().count(), 0);
    }
}
