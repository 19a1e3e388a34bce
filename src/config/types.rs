use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub counter: CounterConfig,
}

/// Remote API settings for the post list fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint returning a JSON collection of objects with a `name` field.
    #[serde(default = "default_posts_url")]
    pub posts_url: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
}

/// Counter behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Amount applied by the step keys (default: 3).
    #[serde(default = "default_step")]
    pub step: i64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            posts_url: default_posts_url(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            step: default_step(),
        }
    }
}

fn default_posts_url() -> String {
    "https://jsonplaceholder.typicode.com/users".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_request_timeout() -> u32 {
    30
}

fn default_step() -> i64 {
    3
}
