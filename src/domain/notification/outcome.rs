//! Per-channel delivery outcomes of one mission fan-out.

use serde::Serialize;

use crate::domain::foundation::{MissionId, Timestamp};

/// Result of one best-effort delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChannelOutcome {
    Delivered,
    Failed { reason: String },
    TimedOut { after_ms: u64 },
}

impl ChannelOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        ChannelOutcome::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, ChannelOutcome::Delivered)
    }
}

/// One push attempt, identified by the descriptor's endpoint when it has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushAttempt {
    pub endpoint: Option<String>,
    pub outcome: ChannelOutcome,
}

/// Everything the fan-out did for one mission.
///
/// Published on the dispatcher's report channel and returned to the caller;
/// it never changes the requester's acknowledgement.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FanOutReport {
    pub mission_id: MissionId,
    pub driver_topic: String,
    pub realtime: ChannelOutcome,
    /// Sessions subscribed when the driver notice was published.
    pub realtime_recipients: usize,
    pub push: Vec<PushAttempt>,
    pub messaging: ChannelOutcome,
    pub started_at: Timestamp,
    pub completed_at: Timestamp,
}

impl FanOutReport {
    pub fn push_delivered(&self) -> usize {
        self.push.iter().filter(|a| a.outcome.is_delivered()).count()
    }

    pub fn push_failed(&self) -> usize {
        self.push.len() - self.push_delivered()
    }

    /// True when every channel reported a delivery.
    pub fn is_complete(&self) -> bool {
        self.realtime.is_delivered() && self.messaging.is_delivered() && self.push_failed() == 0
    }

    pub fn duration_ms(&self) -> u64 {
        self.completed_at.millis_since(&self.started_at)
    }
}
