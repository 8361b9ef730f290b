use log::debug;
use serde::Serialize;

/// The server identity attached to every payload.
///
/// [`NotifyBuilder::new`](crate::NotifyBuilder::new) detects it once from the local host; use
/// [`NotifyBuilder::with_server`](crate::NotifyBuilder::with_server) to supply one instead, e.g.
/// from deployment configuration.
#[derive(Debug, Clone, Serialize)]
pub struct Server {
    #[serde(skip_serializing_if = "Option::is_none")]
    host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ip: Option<String>,
}

impl Server {
    /// Create an empty server identity.
    pub fn new() -> Self {
        Self {
            host: None,
            ip: None,
        }
    }

    /// Set the host name.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the IP address.
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    /// Best-effort lookup of the local host name and the default-route IP. Runs once at builder
    /// construction; `None` (both sides failed) omits the server document from every payload.
    pub(crate) fn detect() -> Option<Self> {
        let host = match hostname::get() {
            Ok(host) => Some(host.to_string_lossy().into_owned()),
            Err(err) => {
                debug!("host name lookup failed: {}", err);
                None
            }
        };
        let ip = match local_ip_address::local_ip() {
            Ok(ip) => Some(ip.to_string()),
            Err(err) => {
                debug!("local ip lookup failed: {}", err);
                None
            }
        };
        if host.is_none() && ip.is_none() {
            return None;
        }
        Some(Self { host, ip })
    }
}

impl Default for Server {
    fn default() -> Self {
        Self::new()
    }
}
