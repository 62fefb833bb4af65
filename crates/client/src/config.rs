/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API server, without a trailing slash.
    pub api_url: String,
    /// Per-request HTTP timeout in seconds.
    pub request_timeout_secs: u64,
    /// Capacity of the background history queue.
    pub sync_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".into(),
            request_timeout_secs: 10,
            sync_buffer: 32,
        }
    }
}

impl ClientConfig {
    /// Load configuration, falling back to defaults for unset or unparsable
    /// values.
    ///
    /// | Env Var                          | Default                 |
    /// |----------------------------------|-------------------------|
    /// | `SLEEPWISE_API_URL`              | `http://localhost:3000` |
    /// | `SLEEPWISE_REQUEST_TIMEOUT_SECS` | `10`                    |
    /// | `SLEEPWISE_SYNC_BUFFER`          | `32`                    |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_url = std::env::var("SLEEPWISE_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);

        let request_timeout_secs = std::env::var("SLEEPWISE_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.request_timeout_secs);

        let sync_buffer = std::env::var("SLEEPWISE_SYNC_BUFFER")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.sync_buffer);

        Self {
            api_url,
            request_timeout_secs,
            sync_buffer,
        }
    }
}
