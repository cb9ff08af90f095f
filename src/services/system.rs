//! Lookup in a services database in `/etc/services` format.
//!
//! Each line is `name port/protocol [aliases...] [# comment]`.

use itertools::Itertools;
use std::path::Path;

/// Ports and transport for `service` from the database file at `path`.
///
/// TCP entries win over other protocols. An unreadable file counts as a miss.
pub fn lookup_services_db(service: &str, path: &Path) -> Option<(Vec<u16>, String)> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_services(&content, service),
        Err(e) => {
            log::warn!("Could not read services database {}: {e}", path.display());
            None
        }
    }
}

pub(crate) fn parse_services(content: &str, service: &str) -> Option<(Vec<u16>, String)> {
    let matches: Vec<(u16, String)> = content
        .lines()
        .filter_map(|line| {
            let line = line.split('#').next().unwrap_or_default();
            let mut fields = line.split_whitespace();
            let name = fields.next()?;
            let (port, proto) = fields.next()?.split_once('/')?;
            let port: u16 = port.parse().ok()?;
            let known = name.eq_ignore_ascii_case(service)
                || fields.any(|alias| alias.eq_ignore_ascii_case(service));
            known.then(|| (port, proto.to_lowercase()))
        })
        .collect();
    log::trace!("parse_services({service}) matches={matches:?}");

    let first = matches.first()?;
    let proto = if matches.iter().any(|(_, p)| p == "tcp") {
        "tcp".to_string()
    } else {
        first.1.clone()
    };
    let ports = matches
        .iter()
        .filter(|(_, p)| *p == proto)
        .map(|(port, _)| *port)
        .unique()
        .collect();
    Some((ports, proto.to_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Network services, Internet style
ssh             22/tcp                          # SSH Remote Login Protocol
domain          53/tcp
domain          53/udp
ntp             123/udp
kerberos        88/tcp          kerberos5 krb5 kerberos-sec
kerberos        88/udp          kerberos5 krb5 kerberos-sec
bogus           notaport/tcp
";

    #[test]
    fn test_parse_prefers_tcp() {
        assert_eq!(
            parse_services(SAMPLE, "domain"),
            Some((vec![53], "TCP".to_string()))
        );
    }

    #[test]
    fn test_parse_udp_only() {
        assert_eq!(
            parse_services(SAMPLE, "NTP"),
            Some((vec![123], "UDP".to_string()))
        );
    }

    #[test]
    fn test_parse_alias() {
        assert_eq!(
            parse_services(SAMPLE, "krb5"),
            Some((vec![88], "TCP".to_string()))
        );
    }

    #[test]
    fn test_parse_miss() {
        assert_eq!(parse_services(SAMPLE, "gopher"), None);
        assert_eq!(parse_services(SAMPLE, "bogus"), None);
        assert_eq!(parse_services(SAMPLE, "Network"), None);
    }

    #[test]
    fn test_missing_file() {
        assert!(lookup_services_db("ssh", Path::new("/nonexistent/services")).is_none());
    }
}
