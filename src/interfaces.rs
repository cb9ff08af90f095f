//! Local network interface enumeration.

use crate::error::{Error, Result};
use crate::models::Ipv4;
use crate::private_ranges::is_private;
use crate::processing::{mask_prefix_len, range_for};
use get_if_addrs::IfAddr;
use itertools::Itertools;
use serde::Serialize;
use std::net::IpAddr;

/// One address assigned to a local interface.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InterfaceInfo {
    pub name: String,
    pub address: IpAddr,
    pub netmask: IpAddr,
    /// Only known for IPv4 addresses with a contiguous netmask.
    pub prefix_len: Option<u8>,
    /// The subnet the address belongs to, when `prefix_len` is known.
    pub network: Option<Ipv4>,
    pub loopback: bool,
    /// IPv4 address in RFC 1918 space.
    pub private: bool,
}

/// List the addresses of every local interface, sorted by interface name.
pub fn list_interfaces() -> Result<Vec<InterfaceInfo>> {
    let ifaces = get_if_addrs::get_if_addrs().map_err(Error::Interfaces)?;
    log::debug!("list_interfaces() found {} addresses", ifaces.len());

    Ok(ifaces
        .into_iter()
        .map(|iface| {
            let loopback = iface.is_loopback();
            match iface.addr {
                IfAddr::V4(v4) => {
                    let prefix_len = mask_prefix_len(v4.netmask).ok();
                    let network = prefix_len
                        .and_then(|len| range_for(v4.ip, len).ok())
                        .map(|range| range.subnet());
                    InterfaceInfo {
                        name: iface.name,
                        address: IpAddr::V4(v4.ip),
                        netmask: IpAddr::V4(v4.netmask),
                        prefix_len,
                        network,
                        loopback,
                        private: is_private(v4.ip),
                    }
                }
                IfAddr::V6(v6) => InterfaceInfo {
                    name: iface.name,
                    address: IpAddr::V6(v6.ip),
                    netmask: IpAddr::V6(v6.netmask),
                    prefix_len: None,
                    network: None,
                    loopback,
                    private: false,
                },
            }
        })
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .collect())
}
