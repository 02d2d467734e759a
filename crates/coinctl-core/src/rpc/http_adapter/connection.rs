use std::fmt;
use std::time::Duration;

use reqwest::Url;

use crate::error::ValidationError;

/// Port the daemon listens on for RPC unless configured otherwise.
pub const DEFAULT_RPC_PORT: u16 = 8332;

/// Where the daemon lives and how to authenticate against it.
///
/// Immutable once built. The password is kept out of `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
    login: String,
    password: String,
}

impl Endpoint {
    pub fn new(host: &str, login: &str, password: &str) -> Self {
        Self {
            host: host.to_owned(),
            port: DEFAULT_RPC_PORT,
            login: login.to_owned(),
            password: password.to_owned(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// The `http://host:port/` URL requests are posted to.
    pub fn url(&self) -> Result<Url, ValidationError> {
        if self.host.is_empty() {
            return Err(ValidationError::InvalidEndpoint(
                "host must not be empty".to_owned(),
            ));
        }
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        let raw = format!("http://{host}:{}/", self.port);
        Url::parse(&raw).map_err(|e| {
            ValidationError::InvalidEndpoint(format!(
                "host `{}` does not form a valid URL ({e})",
                self.host
            ))
        })
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Timeouts for the HTTP client. `None` keeps reqwest's default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportConfig {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_uses_default_port() {
        let endpoint = Endpoint::new("127.0.0.1", "user", "pass");
        let url = endpoint.url().expect("should parse");
        assert_eq!(url.as_str(), "http://127.0.0.1:8332/");
    }

    #[test]
    fn url_with_custom_port() {
        let endpoint = Endpoint::new("localhost", "user", "pass").with_port(18332);
        let url = endpoint.url().expect("should parse");
        assert_eq!(url.as_str(), "http://localhost:18332/");
    }

    #[test]
    fn url_brackets_ipv6_hosts() {
        let endpoint = Endpoint::new("::1", "user", "pass");
        let url = endpoint.url().expect("should parse");
        assert_eq!(url.as_str(), "http://[::1]:8332/");
    }

    #[test]
    fn url_rejects_bad_hosts() {
        let err = Endpoint::new("", "u", "p").url().expect_err("empty host");
        assert!(err.to_string().contains("must not be empty"));

        let err = Endpoint::new("bad host", "u", "p")
            .url()
            .expect_err("space in host");
        assert!(err.to_string().contains("does not form a valid URL"));
    }

    #[test]
    fn debug_redacts_password() {
        let endpoint = Endpoint::new("127.0.0.1", "alice", "hunter2");
        let debug = format!("{endpoint:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
