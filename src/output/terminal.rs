//! Line-oriented text rendering.
//!
//! Every function returns a `String` for one item; the caller decides when it
//! is written.

use crate::interfaces::InterfaceInfo;
use crate::models::SubnetSnapshot;
use crate::services::PortsInfo;
use colored::Colorize;
use itertools::Itertools;

/// Width of the label column.
const LABEL_WIDTH: usize = 18;

fn line(label: &str, value: impl std::fmt::Display) -> String {
    format!("{}{value}\n", format!("{label:<LABEL_WIDTH$}").bold())
}

/// Full description of one subnet.
pub fn render_snapshot(s: &SubnetSnapshot) -> String {
    let mut out = String::new();
    out += &line("Network:", s.network_address);
    out += &line("First assignable:", s.first_usable_address);
    out += &line("Last assignable:", s.last_usable_address);
    out += &line("Broadcast:", s.broadcast_address);
    out += &line(
        "Subnet mask:",
        format!("{} (/{})", s.subnet_mask, s.prefix_len()),
    );
    out += &line("Wildcard mask:", s.wildcard_mask);
    out += &line("Total addresses:", s.total_address_count);
    out += &line("Usable hosts:", s.usable_host_count);
    out
}

/// One step of `subnet -iterate`, numbered from 1.
pub fn render_iteration(i: usize, s: &SubnetSnapshot) -> String {
    format!(
        "[{i}] {} {}\n{}",
        "Next subnet:".green(),
        s.subnet,
        render_snapshot(s)
    )
}

pub fn render_count(s: &SubnetSnapshot) -> String {
    format!(
        "There are {} total available addresses in this network.\n",
        s.total_address_count
    )
}

pub fn render_prefix_len(mask: &str, len: u8) -> String {
    format!("{mask} is /{len}\n")
}

pub fn render_mask(len: u8, mask: std::net::Ipv4Addr) -> String {
    format!("/{len} is {mask}\n")
}

pub fn render_ports(info: &PortsInfo) -> String {
    let mut out = String::new();
    out += &line("Port Numbers:", info.ports.iter().join(", "));
    out += &line("Transport:", &info.transport);
    out += &format!(
        "For more information on this protocol visit {}\n",
        info.link.underline()
    );
    out
}

pub fn render_private_ranges(ranges: &[SubnetSnapshot]) -> String {
    let mut out = String::from("The RFC 1918 IPv4 private address spaces are:\n");
    for r in ranges {
        out += &format!(
            "\t{} - {}\t({})\n",
            r.network_address, r.broadcast_address, r.subnet
        );
    }
    out
}

pub fn render_interfaces(ifaces: &[InterfaceInfo]) -> String {
    if ifaces.is_empty() {
        return "No network interfaces found.\n".to_string();
    }
    let grouped = ifaces.iter().group_by(|iface| iface.name.as_str());
    grouped
        .into_iter()
        .map(|(name, addrs)| {
            let addrs = addrs
                .map(|a| {
                    let prefix = a.prefix_len.map(|p| format!("/{p}")).unwrap_or_default();
                    let network = a.network.map(|n| format!(" in {n}")).unwrap_or_default();
                    let mut tags = Vec::new();
                    if a.loopback {
                        tags.push("loopback");
                    }
                    if a.private {
                        tags.push("private");
                    }
                    let tags = if tags.is_empty() {
                        String::new()
                    } else {
                        format!(" ({})", tags.join(", "))
                    };
                    format!(
                        "\t{}{prefix}  netmask {}{network}{tags}\n",
                        a.address, a.netmask
                    )
                })
                .collect::<String>();
            format!("{}\n{addrs}", name.bold())
        })
        .collect()
}
