//! Fan-out configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Channel timeout, push payload and broadcast capacities
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsConfig {
    /// Upper bound for each channel call, in seconds
    #[serde(default = "default_channel_timeout")]
    pub channel_timeout_secs: u64,

    #[serde(default = "default_push_title")]
    pub push_title: String,

    #[serde(default = "default_push_body")]
    pub push_body: String,

    #[serde(default = "default_push_url")]
    pub push_url: String,

    /// Realtime hub buffer per session
    #[serde(default = "default_realtime_capacity")]
    pub realtime_capacity: usize,

    /// Fan-out report side channel buffer
    #[serde(default = "default_report_capacity")]
    pub report_capacity: usize,
}

impl NotificationsConfig {
    pub fn channel_timeout(&self) -> Duration {
        Duration::from_secs(self.channel_timeout_secs)
    }

    /// Validate notification configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=120).contains(&self.channel_timeout_secs) {
            return Err(ValidationError::InvalidChannelTimeout);
        }
        if self.realtime_capacity == 0 || self.report_capacity == 0 {
            return Err(ValidationError::InvalidCapacity);
        }
        Ok(())
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            channel_timeout_secs: default_channel_timeout(),
            push_title: default_push_title(),
            push_body: default_push_body(),
            push_url: default_push_url(),
            realtime_capacity: default_realtime_capacity(),
            report_capacity: default_report_capacity(),
        }
    }
}

fn default_channel_timeout() -> u64 {
    10
}

fn default_push_title() -> String {
    "Nouvelle mission".to_string()
}

fn default_push_body() -> String {
    "Une nouvelle mission vous a été attribuée.".to_string()
}

fn default_push_url() -> String {
    "/missions".to_string()
}

fn default_realtime_capacity() -> usize {
    256
}

fn default_report_capacity() -> usize {
    64
}
