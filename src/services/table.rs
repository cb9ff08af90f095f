//! Built-in service table, initialised once and never mutated.

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// Prefix of every reference link.
pub const WIKI_BASE: &str = "https://en.wikipedia.org/wiki/";

/// Port numbers, transport protocol(s) and a reference link for a service.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PortsInfo {
    pub service: String,
    pub ports: Vec<u16>,
    /// "TCP", "UDP" or "TCP + UDP".
    pub transport: String,
    pub link: String,
}

// (service, ports, transport)
const SERVICE_PORTS: &[(&str, &[u16], &str)] = &[
    ("dns", &[53], "UDP"),
    ("dhcp", &[67, 68], "UDP"),
    ("rdp", &[3389], "TCP + UDP"),
    ("ldap", &[389], "TCP + UDP"),
    ("bgp", &[179], "TCP"),
    ("ftp", &[21], "TCP"),
    ("ssh", &[22], "TCP"),
    ("telnet", &[23], "TCP"),
    ("smtp", &[25], "TCP"),
    ("http", &[80], "TCP"),
    ("pop3", &[110], "TCP"),
    ("imap", &[143], "TCP"),
    ("https", &[443], "TCP"),
];

lazy_static! {
    static ref WIKI_NAMES: HashMap<&'static str, &'static str> = HashMap::from([
        ("dns", "Domain_Name_System"),
        ("dhcp", "Dynamic_Host_Configuration_Protocol"),
        ("rdp", "Remote_Desktop_Protocol"),
        ("smtp", "Simple_Mail_Transfer_Protocol"),
        ("ssh", "Secure_Shell"),
        ("telnet", "Telnet"),
        ("ftp", "File_Transfer_Protocol"),
        ("http", "Hypertext_Transfer_Protocol"),
        ("https", "HTTPS"),
        ("imap", "Internet_Message_Access_Protocol"),
        ("pop3", "Post_Office_Protocol"),
        ("ldap", "Lightweight_Directory_Access_Protocol"),
        ("bgp", "Border_Gateway_Protocol"),
    ]);
}

/// Entry from the built-in table. `service` must already be lower case.
pub fn common_ports(service: &str) -> Option<PortsInfo> {
    let (_, ports, transport) = SERVICE_PORTS.iter().find(|(name, ..)| *name == service)?;
    Some(PortsInfo {
        service: service.to_string(),
        ports: ports.to_vec(),
        transport: transport.to_string(),
        link: wiki_link(service),
    })
}

/// Reference link for a service, falling back to the upper-cased name.
pub fn wiki_link(service: &str) -> String {
    match WIKI_NAMES.get(service) {
        Some(article) => format!("{WIKI_BASE}{article}"),
        None => format!("{WIKI_BASE}{}", service.to_uppercase()),
    }
}
