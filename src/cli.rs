//! Command-line surface and dispatch.
//!
//! Every input of a command is checked before the first byte is written, so a
//! failing command prints nothing to stdout. `subnet -iterate` then streams one
//! subnet at a time instead of holding the whole sequence.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::interfaces::list_interfaces;
use crate::models::{Ipv4, SubnetSnapshot};
use crate::output::{
    render_count, render_interfaces, render_iteration, render_json, render_mask, render_ports,
    render_prefix_len, render_private_ranges, render_snapshot, write_json_seq,
};
use crate::private_ranges::private_ranges;
use crate::processing::{iterate_checked, snapshot, to_dotted_mask, to_prefix_length, SubnetIter};
use crate::services::lookup_service;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::io::Write;
use std::net::Ipv4Addr;

pub const SUBNET_USAGE: &str = "\
Usage: netbuddy subnet <arg> <input>
Args:
\t-display: Shows various information about a particular IP and CIDR, e.g. 192.168.4.20/19
\t-count: Show the total number of addresses in the provided network.
\t-iterate: Show the next X iterations of a particular prefix to the network.
\t-tocidr: Convert a dotted subnet mask to a prefix length, e.g. 255.255.255.192
\t-tomask: Convert a prefix length to a dotted subnet mask, e.g. 26

Examples:
\t netbuddy subnet -count 172.31.5.9/19
\t netbuddy subnet -iterate 2 192.168.0.0/24
\t netbuddy subnet -tocidr 255.255.255.192
";

pub const SHOW_USAGE: &str = "\
Usage: netbuddy show <option> <input>
Options:
\tipv4range - Show RFC 1918 IPv4 address range. \tNote: This does not take an input.
\tinterfaces - Show addresses of the local network interfaces.
\tservice - Shows port and information for a particular service e.g. SSH

Examples:
\t netbuddy show service ssh
\t netbuddy show ipv4range
";

/// Single-dash long options accepted for compatibility, e.g. `-display`.
const LEGACY_FLAGS: &[&str] = &[
    "-display", "-count", "-iterate", "-tocidr", "-tomask", "-json",
];

#[derive(Parser, Debug)]
#[command(name = "netbuddy", version)]
#[command(about = "IPv4 subnet calculator and service port lookup.")]
#[command(arg_required_else_help = true)]
pub struct CommandLine {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Subnet calculations on an address in CIDR notation
    Subnet(SubnetArgs),
    /// Reference information about networks, services and this device
    #[command(disable_help_subcommand = true)]
    Show {
        #[command(subcommand)]
        what: Option<ShowCommand>,
    },
}

#[derive(Args, Debug)]
pub struct SubnetArgs {
    /// Show the addresses within a subnet, e.g. 192.168.4.20/19
    #[arg(long, value_name = "IP/PREFIX")]
    pub display: Option<String>,
    /// Show the total number of addresses in a subnet
    #[arg(long, value_name = "IP/PREFIX")]
    pub count: Option<String>,
    /// Show the next N subnets of the same prefix length
    #[arg(
        long,
        num_args = 2,
        value_names = ["N", "IP/PREFIX"],
        allow_negative_numbers = true
    )]
    pub iterate: Option<Vec<String>>,
    /// Convert a dotted subnet mask to a prefix length
    #[arg(long, value_name = "MASK")]
    pub tocidr: Option<String>,
    /// Convert a prefix length to a dotted subnet mask
    #[arg(long, value_name = "PREFIX")]
    pub tomask: Option<u32>,
    #[arg(value_parser = ["help"], hide = true)]
    pub topic: Option<String>,
}

impl SubnetArgs {
    fn is_empty(&self) -> bool {
        self.display.is_none()
            && self.count.is_none()
            && self.iterate.is_none()
            && self.tocidr.is_none()
            && self.tomask.is_none()
    }
}

#[derive(Subcommand, Debug)]
pub enum ShowCommand {
    /// RFC 1918 private IPv4 address ranges
    Ipv4range,
    /// Port numbers and a reference link for a service, e.g. ssh
    Service { name: String },
    /// Addresses of the local network interfaces
    Interfaces,
    /// Usage of the show command
    Help,
}

/// Rewrite `-display` style options to `--display` so clap accepts them.
pub fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if LEGACY_FLAGS.contains(&arg.as_str()) {
                format!("-{arg}")
            } else {
                arg
            }
        })
        .collect()
}

/// Execute a parsed command line, writing its output to `out`.
pub fn run<W: Write>(commands: &CommandLine, settings: &Settings, out: &mut W) -> Result<()> {
    log::info!("run({:?})", commands.command);
    match &commands.command {
        Commands::Subnet(args) => subnet(args, commands.json, out)?,
        Commands::Show { what } => {
            let text = show(what.as_ref(), settings, commands.json)?;
            out.write_all(text.as_bytes())?;
        }
    }
    out.flush()?;
    Ok(())
}

fn subnet<W: Write>(args: &SubnetArgs, json: bool, out: &mut W) -> Result<()> {
    if args.topic.is_some() || args.is_empty() {
        out.write_all(SUBNET_USAGE.as_bytes())?;
        return Ok(());
    }

    // Nothing below the checks can fail except the writes themselves.
    let display = args.display.as_deref().map(parse_snapshot).transpose()?;
    let iterations = args.iterate.as_deref().map(parse_iterate).transpose()?;
    let count = args.count.as_deref().map(parse_snapshot).transpose()?;
    let tocidr = match &args.tocidr {
        Some(mask) => Some((mask.trim(), to_prefix_length(mask)?)),
        None => None,
    };
    let tomask = args.tomask.map(parse_tomask).transpose()?;

    if let Some(s) = &display {
        let text = if json {
            render_json(s)?
        } else {
            render_snapshot(s)
        };
        out.write_all(text.as_bytes())?;
    }

    if let Some(iter) = iterations {
        if json {
            write_json_seq(out, iter)?;
        } else {
            for (i, item) in iter.enumerate() {
                out.write_all(render_iteration(i + 1, &item?).as_bytes())?;
            }
        }
    }

    if let Some(s) = &count {
        let text = if json {
            render_json(&json!({
                "subnet": s.subnet,
                "total_address_count": s.total_address_count,
            }))?
        } else {
            render_count(s)
        };
        out.write_all(text.as_bytes())?;
    }

    if let Some((mask, len)) = tocidr {
        let text = if json {
            render_json(&json!({ "mask": mask, "prefix_length": len }))?
        } else {
            render_prefix_len(mask, len)
        };
        out.write_all(text.as_bytes())?;
    }

    if let Some((len, mask)) = tomask {
        let text = if json {
            render_json(&json!({ "prefix_length": len, "mask": mask }))?
        } else {
            render_mask(len, mask)
        };
        out.write_all(text.as_bytes())?;
    }

    Ok(())
}

fn parse_snapshot(input: &str) -> Result<SubnetSnapshot> {
    Ok(snapshot(Ipv4::new(input)?))
}

/// `<N> <IP/PREFIX>`, refused up front when N subnets do not fit.
fn parse_iterate(values: &[String]) -> Result<SubnetIter> {
    let (count, input) = match values {
        [count, input] => (count, input),
        _ => return Err(Error::parse(&values.join(" "), "expected <N> <IP/PREFIX>")),
    };
    let count: i64 = count
        .parse()
        .map_err(|_| Error::parse(count, "iteration count is not a number"))?;
    iterate_checked(Ipv4::new(input)?, count)
}

fn parse_tomask(len: u32) -> Result<(u8, Ipv4Addr)> {
    let len = u8::try_from(len).map_err(|_| Error::Range(len))?;
    Ok((len, to_dotted_mask(len)?))
}

fn show(what: Option<&ShowCommand>, settings: &Settings, json: bool) -> Result<String> {
    match what {
        None | Some(ShowCommand::Help) => Ok(SHOW_USAGE.to_string()),
        Some(ShowCommand::Ipv4range) => {
            let ranges = private_ranges();
            if json {
                render_json(&ranges)
            } else {
                Ok(render_private_ranges(&ranges))
            }
        }
        Some(ShowCommand::Service { name }) => {
            let info = lookup_service(name, &settings.services_file)?;
            if json {
                render_json(&info)
            } else {
                Ok(render_ports(&info))
            }
        }
        Some(ShowCommand::Interfaces) => {
            let ifaces = list_interfaces()?;
            if json {
                render_json(&ifaces)
            } else {
                Ok(render_interfaces(&ifaces))
            }
        }
    }
}
