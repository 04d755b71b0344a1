use std::time::Duration;

use crate::probe::PING_ROUTE;
use crate::Result;

/// An initialized client handle bound to one upstream service's base URL.
///
/// Construction is pure and infallible; the handle carries its own HTTP
/// client and the service-wide request timeout. Handles are shared read-only
/// by all consumers for the lifetime of the process; there is no teardown.
#[derive(Debug, Clone)]
pub struct ClientHandle {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ClientHandle {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.to_string(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bounded GET on the service's ping route.
    pub async fn ping(&self) -> Result<()> {
        let url = format!("{}{}", self.base_url, PING_ROUTE);
        self.http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_construction() {
        let handle = ClientHandle::new("http://data.local:59880", Duration::from_millis(2500));
        assert_eq!(handle.base_url(), "http://data.local:59880");
    }
}
