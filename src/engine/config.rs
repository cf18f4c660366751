/// Default timeout for page requests in seconds
pub const LINK_REQUEST_TIMEOUT_SEC: u64 = 2;

/// Configuration for one crawl run. Immutable after construction.
pub struct EngineConfig {
    pub seed_url: String,
    pub max_visits: usize,
    pub request_delay_ms: u64,
    pub deny_list: Vec<String>,
    pub allow_list: Vec<String>,
    pub request_timeout_sec: u64,
}

impl EngineConfig {
    pub fn new(seed_url: impl Into<String>) -> Self {
        Self {
            seed_url: seed_url.into(),
            max_visits: 10,
            request_delay_ms: 500,
            deny_list: Vec::new(),
            allow_list: Vec::new(),
            request_timeout_sec: LINK_REQUEST_TIMEOUT_SEC,
        }
    }

    pub fn with_max_visits(mut self, max_visits: usize) -> Self {
        self.max_visits = max_visits;
        self
    }

    pub fn with_request_delay(mut self, delay_ms: u64) -> Self {
        self.request_delay_ms = delay_ms;
        self
    }

    pub fn with_deny_list(mut self, patterns: Vec<String>) -> Self {
        self.deny_list = patterns;
        self
    }

    pub fn with_allow_list(mut self, patterns: Vec<String>) -> Self {
        self.allow_list = patterns;
        self
    }

    pub fn with_request_timeout(mut self, timeout_sec: u64) -> Self {
        self.request_timeout_sec = timeout_sec;
        self
    }
}
