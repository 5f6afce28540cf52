//! Event streaming Relay built on unbounded channels.
//!
//! A Relay carries events from UI components into Actors. Each relay has
//! exactly one send site; debug builds enforce this.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use std::sync::{Arc, OnceLock};

/// Type-safe event stream from a single UI source into an Actor.
///
/// Relays follow the `{source}_{event}_relay` naming pattern:
/// - `toggle_button_clicked_relay` - user pressed the menu toggle
/// - `escape_pressed_relay` - user pressed Escape
/// - `nav_link_activated_relay` - user activated a navigation link
///
/// # Examples
///
/// ```rust
/// let (toggle_button_clicked_relay, mut stream) = relay::<()>();
///
/// toggle_button_clicked_relay.send(());
///
/// while let Some(()) = stream.next().await {
///     // process the event inside an Actor loop
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Relay<T = ()>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
    #[cfg(debug_assertions)]
    emit_location: Arc<OnceLock<&'static std::panic::Location<'static>>>,
}

/// Error type for Relay operations.
#[derive(Debug, Clone)]
pub enum RelayError {
    /// The channel has been closed (receiver dropped).
    ChannelClosed,
    /// Relay send called from multiple locations (debug builds only).
    #[cfg(debug_assertions)]
    MultipleEmitters {
        previous: &'static std::panic::Location<'static>,
        current: &'static std::panic::Location<'static>,
    },
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new Relay with an associated receiver stream.
    ///
    /// Prefer the `relay()` function for the common case.
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (
            Relay {
                sender,
                #[cfg(debug_assertions)]
                emit_location: Arc::new(OnceLock::new()),
            },
            receiver,
        )
    }

    /// Check that this relay is only being sent from a single source location.
    #[cfg(debug_assertions)]
    #[track_caller]
    fn check_single_source(&self) -> Result<(), RelayError> {
        let caller = std::panic::Location::caller();
        match self.emit_location.set(caller) {
            Ok(()) => Ok(()),
            Err(previous) if previous == caller => Ok(()),
            Err(previous) => Err(RelayError::MultipleEmitters {
                previous,
                current: caller,
            }),
        }
    }

    /// Send an event through the relay.
    ///
    /// If the receiver has been dropped, the event is silently discarded.
    /// Use `try_send()` to handle send failures explicitly.
    ///
    /// In debug builds, panics if this relay has been sent from a different
    /// location in the code (single-source constraint).
    #[track_caller]
    pub fn send(&self, value: T) {
        #[cfg(debug_assertions)]
        if let Err(e) = self.check_single_source() {
            panic!("{:?}", e);
        }

        // Events without subscribers are dropped
        let _ = self.sender.unbounded_send(value);
    }

    /// Try to send an event through the relay with explicit error handling.
    ///
    /// Returns an error if the channel has been closed (receiver dropped).
    #[allow(dead_code)]
    #[track_caller]
    pub fn try_send(&self, value: T) -> Result<(), RelayError> {
        #[cfg(debug_assertions)]
        self.check_single_source()?;

        self.sender
            .unbounded_send(value)
            .map_err(|_| RelayError::ChannelClosed)
    }
}

impl<T> Default for Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a "disconnected" relay whose events are silently discarded.
    ///
    /// Useful for optional relays in structs that may not have handlers
    /// wired yet, and for tests that do not care about event handling.
    fn default() -> Self {
        let (relay, _receiver) = Self::new();
        relay
    }
}

/// Creates a new Relay with an associated receiver stream.
///
/// This is the idiomatic way to create a Relay for use with Actors,
/// following Rust's channel pattern conventions.
pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn relay_delivers_events_in_order() {
        let (relay, mut receiver) = Relay::new();

        relay.send("first".to_string());
        relay.send("second".to_string());

        assert_eq!(receiver.next().await, Some("first".to_string()));
        assert_eq!(receiver.next().await, Some("second".to_string()));
    }

    #[tokio::test]
    async fn try_send_reports_closed_channel() {
        let (relay, mut receiver) = Relay::new();

        assert!(relay.try_send("test".to_string()).is_ok());
        assert_eq!(receiver.next().await, Some("test".to_string()));

        drop(receiver);

        assert!(relay.try_send("fail".to_string()).is_err());
    }

    #[tokio::test]
    async fn unit_relay_defaults_to_no_payload() {
        let (relay, mut stream) = relay::<()>();

        relay.send(());

        assert_eq!(stream.next().await, Some(()));
    }
}
