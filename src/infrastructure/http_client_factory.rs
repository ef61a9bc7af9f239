use reqwest::Client;
use std::time::Duration;

const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates an HTTP client bounded by `timeout` per request.
    ///
    /// No retry middleware: a failed call is reported to the caller as is.
    pub fn create_client(timeout: Duration) -> reqwest::Result<Client> {
        Client::builder()
            .pool_max_idle_per_host(2)
            .timeout(timeout)
            .connect_timeout(timeout.min(MAX_CONNECT_TIMEOUT))
            .build()
    }
}
