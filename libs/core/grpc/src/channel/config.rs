use std::time::Duration;
use tonic::transport::Endpoint;

/// Outbound channel settings.
///
/// Per-call deadlines travel on each request as `grpc-timeout`; `timeout`
/// here only caps calls that carry none.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub keep_alive_interval: Option<Duration>,
    pub keep_alive_timeout: Duration,
    pub tcp_nodelay: bool,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            timeout: Duration::from_secs(30),
            keep_alive_interval: Some(Duration::from_secs(30)),
            keep_alive_timeout: Duration::from_secs(10),
            tcp_nodelay: true,
        }
    }
}

impl ChannelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn endpoint(self, endpoint: Endpoint) -> Endpoint {
        let endpoint = match self.keep_alive_interval {
            Some(interval) => endpoint
                .http2_keep_alive_interval(interval)
                .keep_alive_timeout(self.keep_alive_timeout)
                .keep_alive_while_idle(true),
            None => endpoint,
        };

        endpoint
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout)
            .tcp_nodelay(self.tcp_nodelay)
    }
}
