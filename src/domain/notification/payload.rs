//! Push notification payload.

use serde::{Deserialize, Serialize};

/// Serialized as `{title, body, data: {url}}` and encrypted per endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushNotification {
    pub title: String,
    pub body: String,
    pub data: PushData,
}

/// Navigation target opened when the notification is clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushData {
    pub url: String,
}

impl PushNotification {
    pub fn new(title: impl Into<String>, body: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            data: PushData { url: url.into() },
        }
    }
}

impl Default for PushNotification {
    fn default() -> Self {
        Self::new(
            "Nouvelle mission",
            "Une nouvelle mission vous a été attribuée.",
            "/missions",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_expected_shape() {
        let json = serde_json::to_value(PushNotification::default()).unwrap();

        assert_eq!(json["title"], "Nouvelle mission");
        assert_eq!(json["body"], "Une nouvelle mission vous a été attribuée.");
        assert_eq!(json["data"]["url"], "/missions");
    }
}
