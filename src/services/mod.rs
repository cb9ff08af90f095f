//! Well-known service ports.
//!
//! - [`table`] - built-in service → port / protocol / reference table
//! - [`system`] - fallback lookup in the system services database

mod system;
mod table;

pub use system::lookup_services_db;
pub use table::{common_ports, wiki_link, PortsInfo, WIKI_BASE};

use crate::error::{Error, Result};
use std::path::Path;

/// Look up the ports of a service by name, case-insensitive.
///
/// The built-in table is consulted first, then the services database at
/// `services_file` (usually `/etc/services`).
pub fn lookup_service(service: &str, services_file: &Path) -> Result<PortsInfo> {
    let name = service.trim().to_lowercase();
    log::debug!("lookup_service({name})");
    if name.is_empty() {
        return Err(Error::UnknownService(service.to_string()));
    }

    if let Some(info) = common_ports(&name) {
        return Ok(info);
    }

    match lookup_services_db(&name, services_file) {
        Some((ports, transport)) => Ok(PortsInfo {
            service: name.clone(),
            ports,
            transport,
            link: wiki_link(&name),
        }),
        None => Err(Error::UnknownService(service.to_string())),
    }
}
