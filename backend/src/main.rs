//! Basalt UI moon server.
//!
//! Hosts the frontend and forwards analytics events to the edge
//! forwarder. The frontend never talks to the analytics service
//! directly; every event goes through `up_msg_handler`.

use moon::*;
use shared::{AnalyticsEvent, DownMsg, UpMsg};

/// Where analytics events are forwarded. The edge service listens on
/// 8443 by default.
const EVENT_ENDPOINT_VAR: &str = "EVENT_ENDPOINT";
const DEFAULT_EVENT_ENDPOINT: &str = "http://localhost:8443/api/event";

// One client for the process; reqwest pools connections internally.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

async fn frontend() -> Frontend {
    Frontend::new().title("Basalt UI").index_by_robots(false)
}

fn event_endpoint() -> String {
    std::env::var(EVENT_ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_EVENT_ENDPOINT.to_owned())
}

async fn up_msg_handler(req: UpMsgRequest<UpMsg>) {
    let (session_id, cor_id) = (req.session_id, req.cor_id);

    match req.up_msg {
        UpMsg::TrackEvent(event) => {
            let down_msg = match forward_event(&event).await {
                Ok(()) => DownMsg::EventAccepted,
                Err(error) => {
                    eprintln!("Dropping analytics event '{}': {error}", event.name);
                    DownMsg::EventDropped {
                        reason: error.to_string(),
                    }
                }
            };
            send_down_msg(down_msg, session_id, cor_id).await;
        }
    }
}

async fn forward_event(event: &AnalyticsEvent) -> Result<(), reqwest::Error> {
    let response = HTTP_CLIENT
        .post(event_endpoint())
        .json(event)
        .send()
        .await?;
    response.error_for_status()?;
    Ok(())
}

async fn send_down_msg(msg: DownMsg, session_id: SessionId, cor_id: CorId) {
    if let Some(session) = sessions::by_session_id().wait_for(session_id).await {
        session.send_down_msg(&msg, cor_id).await;
    } else {
        // Session disconnected before the reply could be delivered.
    }
}

#[moon::main]
async fn main() -> std::io::Result<()> {
    start(frontend, up_msg_handler, |_error| {}).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_endpoint_defaults_to_local_edge_service() {
        // Serialize env access: cargo runs tests in parallel.
        unsafe { std::env::remove_var(EVENT_ENDPOINT_VAR) };
        assert_eq!(event_endpoint(), DEFAULT_EVENT_ENDPOINT);
    }

    #[test]
    fn forwarding_reuses_one_http_client() {
        let first: *const reqwest::Client = &*HTTP_CLIENT;
        let second: *const reqwest::Client = &*HTTP_CLIENT;
        assert_eq!(first, second);
    }
}
