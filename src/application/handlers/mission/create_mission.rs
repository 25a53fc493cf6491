//! CreateMissionHandler - persists a mission and fans out its announcement.
//!
//! Sequence for one command:
//! 1. Validate required references, apply defaults
//! 2. Insert through the repository (the only step that can fail the command)
//! 3. Publish the driver notice on `notifChauffeur_<driverId>`
//! 4. Push the fixed notification to every registered descriptor
//! 5. Send one text message to the configured recipient
//!
//! Steps 3-5 are best-effort. Each call is bounded by `channel_timeout`,
//! never retried, and its outcome lands in the `FanOutReport` that is
//! returned and published on the report channel.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::sync::broadcast;

use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::mission::{
    driver_notice, driver_topic, messaging_text, IntegerInput, Mission, MissionError, NewMission,
    DEFAULT_STATUS,
};
use crate::domain::notification::{ChannelOutcome, FanOutReport, PushAttempt, PushNotification};
use crate::ports::{
    ChannelError, MessagingClient, MissionRepository, PushDeliveryClient, RealtimePublisher,
    SubscriptionRegistry,
};

/// Command to create a mission.
///
/// Mirrors the inbound request: only the driver and carrier references are
/// required, everything else is defaulted or passed through to persistence.
/// Integer fields are not parsed here; the repository's casts decide.
#[derive(Debug, Clone, Default)]
pub struct CreateMissionCommand {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub driver_id: Option<IntegerInput>,
    pub carrier_id: Option<IntegerInput>,
    pub end_odometer: Option<IntegerInput>,
    pub start_odometer: Option<IntegerInput>,
    pub status: Option<String>,
    pub quote_id: Option<IntegerInput>,
    pub vehicle_id: Option<IntegerInput>,
}

impl CreateMissionCommand {
    /// Checks presence of the required references and applies defaults.
    pub fn validate(self) -> Result<NewMission, ValidationError> {
        let driver_id = self
            .driver_id
            .ok_or_else(|| ValidationError::missing_field("chauffeurId"))?;
        let carrier_id = self
            .carrier_id
            .ok_or_else(|| ValidationError::missing_field("transporteurId"))?;

        Ok(NewMission {
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            driver_id,
            carrier_id,
            end_odometer: self.end_odometer.unwrap_or_else(|| IntegerInput::from(0)),
            start_odometer: self.start_odometer.unwrap_or_else(|| IntegerInput::from(0)),
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            quote_id: self.quote_id,
            vehicle_id: self.vehicle_id,
        })
    }
}

/// Result of a successful creation.
#[derive(Debug, Clone)]
pub struct CreateMissionResult {
    pub mission: Mission,
    pub report: FanOutReport,
}

/// Fan-out parameters fixed at startup.
#[derive(Debug, Clone)]
pub struct FanOutSettings {
    /// Payload pushed to every registered descriptor.
    pub push_notification: PushNotification,
    /// Static recipient of the messaging API call.
    pub messaging_recipient: String,
    /// Upper bound for each individual channel call.
    pub channel_timeout: Duration,
    /// Buffer of the report side channel.
    pub report_capacity: usize,
}

impl Default for FanOutSettings {
    fn default() -> Self {
        Self {
            push_notification: PushNotification::default(),
            messaging_recipient: "21658216611".to_string(),
            channel_timeout: Duration::from_secs(10),
            report_capacity: 64,
        }
    }
}

/// Handler for creating missions and notifying every channel.
pub struct CreateMissionHandler {
    repository: Arc<dyn MissionRepository>,
    realtime: Arc<dyn RealtimePublisher>,
    subscriptions: Arc<dyn SubscriptionRegistry>,
    push: Arc<dyn PushDeliveryClient>,
    messaging: Arc<dyn MessagingClient>,
    settings: FanOutSettings,
    reports: broadcast::Sender<FanOutReport>,
}

impl CreateMissionHandler {
    pub fn new(
        repository: Arc<dyn MissionRepository>,
        realtime: Arc<dyn RealtimePublisher>,
        subscriptions: Arc<dyn SubscriptionRegistry>,
        push: Arc<dyn PushDeliveryClient>,
        messaging: Arc<dyn MessagingClient>,
        settings: FanOutSettings,
    ) -> Self {
        let (reports, _) = broadcast::channel(settings.report_capacity.max(1));
        Self {
            repository,
            realtime,
            subscriptions,
            push,
            messaging,
            settings,
            reports,
        }
    }

    /// Receive every `FanOutReport` produced from now on.
    pub fn subscribe_reports(&self) -> broadcast::Receiver<FanOutReport> {
        self.reports.subscribe()
    }

    pub async fn handle(
        &self,
        cmd: CreateMissionCommand,
    ) -> Result<CreateMissionResult, MissionError> {
        // 1. Validate
        let new_mission = cmd.validate().map_err(|e| {
            tracing::warn!(error = %e, "Rejected mission request");
            MissionError::from(e)
        })?;

        // 2. Persist; nothing is announced unless this succeeds
        let mission = self.repository.insert(&new_mission).await.map_err(|e| {
            tracing::error!(
                driver_id = %new_mission.driver_id,
                error = %e,
                "Mission creation failed"
            );
            MissionError::from(e)
        })?;

        tracing::info!(
            mission_id = %mission.id,
            driver_id = %mission.driver_id,
            "Mission created"
        );

        // 3-5. Best-effort fan-out
        let report = self.fan_out(&mission).await;

        Ok(CreateMissionResult { mission, report })
    }

    async fn fan_out(&self, mission: &Mission) -> FanOutReport {
        let started_at = Timestamp::now();
        let topic = driver_topic(mission.driver_id);

        let (realtime, realtime_recipients) = self.notify_driver(&topic, mission).await;
        let push = self.notify_subscribers(mission).await;
        let messaging = self.notify_messaging(mission).await;

        let report = FanOutReport {
            mission_id: mission.id,
            driver_topic: topic,
            realtime,
            realtime_recipients,
            push,
            messaging,
            started_at,
            completed_at: Timestamp::now(),
        };

        tracing::info!(
            mission_id = %report.mission_id,
            realtime_recipients = report.realtime_recipients,
            push_delivered = report.push_delivered(),
            push_failed = report.push_failed(),
            messaging_delivered = report.messaging.is_delivered(),
            duration_ms = report.duration_ms(),
            "Mission fan-out finished"
        );

        // No report subscribers is fine
        let _ = self.reports.send(report.clone());

        report
    }

    async fn notify_driver(&self, topic: &str, mission: &Mission) -> (ChannelOutcome, usize) {
        let payload = driver_notice(mission);

        match self.bounded(self.realtime.publish(topic, payload)).await {
            Ok(recipients) => {
                tracing::debug!(topic, recipients, "Driver notice published");
                (ChannelOutcome::Delivered, recipients)
            }
            Err(e) => {
                tracing::warn!(topic, error = %e, "Driver notice not published");
                (self.outcome_of(&e), 0)
            }
        }
    }

    async fn notify_subscribers(&self, mission: &Mission) -> Vec<PushAttempt> {
        // Later registrations are not part of this fan-out
        let snapshot = self.subscriptions.list_all().await;
        let notification = &self.settings.push_notification;

        let attempts = snapshot.iter().map(|subscription| async move {
            let endpoint = subscription.endpoint().map(str::to_string);
            let outcome = match self
                .bounded(self.push.deliver(subscription, notification))
                .await
            {
                Ok(()) => {
                    tracing::debug!(mission_id = %mission.id, endpoint = ?endpoint, "Push notification sent");
                    ChannelOutcome::Delivered
                }
                Err(e) => {
                    tracing::warn!(
                        mission_id = %mission.id,
                        endpoint = ?endpoint,
                        error = %e,
                        "Push notification failed"
                    );
                    self.outcome_of(&e)
                }
            };
            PushAttempt { endpoint, outcome }
        });

        join_all(attempts).await
    }

    async fn notify_messaging(&self, mission: &Mission) -> ChannelOutcome {
        let recipient = self.settings.messaging_recipient.as_str();
        let text = messaging_text(mission);

        match self
            .bounded(self.messaging.send_text(recipient, &text))
            .await
        {
            Ok(ack) => {
                tracing::info!(mission_id = %mission.id, response = %ack, "Messaging notification sent");
                ChannelOutcome::Delivered
            }
            Err(e) => {
                tracing::error!(mission_id = %mission.id, error = %e, "Messaging notification failed");
                self.outcome_of(&e)
            }
        }
    }

    /// Runs one channel call under the configured timeout.
    async fn bounded<T, F>(&self, call: F) -> Result<T, ChannelError>
    where
        F: Future<Output = Result<T, ChannelError>>,
    {
        match tokio::time::timeout(self.settings.channel_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ChannelError::Timeout {
                secs: self.settings.channel_timeout.as_secs(),
            }),
        }
    }

    fn outcome_of(&self, error: &ChannelError) -> ChannelOutcome {
        match error {
            ChannelError::Timeout { .. } => ChannelOutcome::TimedOut {
                after_ms: self.settings.channel_timeout.as_millis() as u64,
            },
            other => ChannelOutcome::failed(other.to_string()),
        }
    }
}
