// ABOUTME: Compact rendering of a container's port bindings.
// ABOUTME: Collapses repeated mappings and optionally shows bind addresses.

use crate::runtime::{PortBinding, Protocol};

const ARROW: char = '\u{2192}';

/// Render bindings as `8080→80,53/udp`, dropping repeated tokens.
///
/// With `verbose`, published ports include their bind address
/// (`0.0.0.0:8080→80`, `[::]:8080→80`). First occurrence wins and order is kept.
pub fn format_ports(ports: &[PortBinding], verbose: bool) -> String {
    let mut tokens: Vec<String> = Vec::with_capacity(ports.len());
    for port in ports {
        let token = port_token(port, verbose);
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(",")
}

fn port_token(port: &PortBinding, verbose: bool) -> String {
    let private = match port.protocol {
        Protocol::Tcp => port.private_port.to_string(),
        other => format!("{}/{}", port.private_port, other),
    };
    match (port.public_port, port.host_ip.as_deref()) {
        (Some(public), Some(ip)) if !ip.is_empty() => {
            if verbose {
                format!("{}{}{}", join_host_port(ip, public), ARROW, private)
            } else {
                format!("{}{}{}", public, ARROW, private)
            }
        }
        _ => private,
    }
}

fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}
