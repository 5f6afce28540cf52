use serde::{Deserialize, Serialize};

// ===== MESSAGE TYPES =====

#[derive(Serialize, Deserialize, Debug)]
pub enum UpMsg {
    TrackEvent(AnalyticsEvent),
}

#[derive(Serialize, Deserialize, Debug)]
pub enum DownMsg {
    EventAccepted,
    EventDropped { reason: String },
}

// ===== ANALYTICS =====

/// Event payload forwarded through the backend to the analytics upstream.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    /// Event name, e.g. `pageview`.
    pub name: String,
    /// Page URL the event was recorded on.
    pub url: String,
    /// Referrer URL, if the browser exposed one.
    pub referrer: Option<String>,
}

impl AnalyticsEvent {
    pub fn pageview(url: impl Into<String>, referrer: Option<String>) -> Self {
        Self {
            name: "pageview".to_owned(),
            url: url.into(),
            referrer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytics_event_serializes_with_stable_field_names() {
        let event = AnalyticsEvent::pageview("https://basalt.example/docs", None);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"name\":\"pageview\""));
        assert!(json.contains("\"url\":\"https://basalt.example/docs\""));
        assert!(json.contains("\"referrer\":null"));
    }

    #[test]
    fn up_msg_round_trips_through_json() {
        let msg = UpMsg::TrackEvent(AnalyticsEvent::pageview(
            "https://basalt.example/",
            Some("https://search.example/".to_owned()),
        ));
        let json = serde_json::to_string(&msg).unwrap();
        let UpMsg::TrackEvent(event) = serde_json::from_str(&json).unwrap();
        assert_eq!(event.name, "pageview");
        assert_eq!(event.referrer.as_deref(), Some("https://search.example/"));
    }
}
