//! Reachability probing for resolved module URLs (diagnostics only).
//!
//! Resolution never depends on this; `doctor` uses it to tell an operator which embeds would fail.

use once_cell::sync::Lazy;
use std::env;
use std::net::{TcpStream, ToSocketAddrs};
use std::sync::Mutex;
use std::time::Duration;

use url::Url;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ProbeTestMode {
    Ok,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable,
    Unreachable,
    /// The URL did not parse or has no host; carries the reason.
    Invalid(String),
}

impl ProbeOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            ProbeOutcome::Reachable => "reachable",
            ProbeOutcome::Unreachable => "unreachable",
            ProbeOutcome::Invalid(reason) => reason.as_str(),
        }
    }
}

// Test-only override for probing without relying on environment variables.
static PROBE_OVERRIDE: Lazy<Mutex<Option<ProbeTestMode>>> = Lazy::new(|| Mutex::new(None));

pub fn probe_set_override_for_tests(mode: Option<ProbeTestMode>) {
    let mut guard = PROBE_OVERRIDE.lock().expect("probe override lock");
    *guard = mode;
}

fn probe_override() -> Option<ProbeTestMode> {
    if let Some(mode) = *PROBE_OVERRIDE.lock().expect("probe override lock") {
        return Some(mode);
    }
    match env::var("RESEARCH_CONSOLE_TEST_PROBE")
        .ok()?
        .to_ascii_lowercase()
        .as_str()
    {
        "ok" => Some(ProbeTestMode::Ok),
        "fail" => Some(ProbeTestMode::Fail),
        _ => None,
    }
}

fn is_host_port_reachable(host: &str, port: u16, timeout_ms: u64) -> bool {
    if let Ok(addrs) = (host, port).to_socket_addrs() {
        let timeout = Duration::from_millis(timeout_ms);
        for addr in addrs {
            if TcpStream::connect_timeout(&addr, timeout).is_ok() {
                return true;
            }
        }
    }
    false
}

/// Host and port (scheme default when absent) of an absolute URL.
pub fn url_host_port(raw: &str) -> Result<(String, u16), String> {
    let parsed = Url::parse(raw.trim()).map_err(|e| format!("invalid url: {e}"))?;
    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| "invalid url: no host".to_string())?;
    let port = parsed
        .port_or_known_default()
        .ok_or_else(|| format!("invalid url: no port for scheme {}", parsed.scheme()))?;
    // Url keeps IPv6 literals bracketed; ToSocketAddrs wants them bare.
    let host = host.trim_start_matches('[').trim_end_matches(']').to_string();
    Ok((host, port))
}

/// TCP connect probe with a short timeout.
pub fn probe_url(raw: &str, timeout_ms: u64) -> ProbeOutcome {
    let (host, port) = match url_host_port(raw) {
        Ok(hp) => hp,
        Err(reason) => return ProbeOutcome::Invalid(reason),
    };
    if let Some(mode) = probe_override() {
        return match mode {
            ProbeTestMode::Ok => ProbeOutcome::Reachable,
            ProbeTestMode::Fail => ProbeOutcome::Unreachable,
        };
    }
    tracing::debug!(%host, port, "probing module endpoint");
    if is_host_port_reachable(&host, port, timeout_ms) {
        ProbeOutcome::Reachable
    } else {
        ProbeOutcome::Unreachable
    }
}
