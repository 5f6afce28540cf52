//! Single-value Actor for reactive state management.
//!
//! An Actor owns a `Mutable<T>` and processes events from Relays
//! sequentially, so all mutations happen in one place.

use std::future::Future;
use std::sync::Arc;
use zoon::{Mutable, Signal, Task, TaskHandle};

/// Single-value reactive state container.
///
/// The Actor's processor loop is the only code that mutates the state.
/// UI binds to the state through signals; event handlers that need the
/// current value synchronously can use `get_cloned`.
///
/// # Examples
///
/// ```rust
/// let (opened_relay, mut opened_stream) = relay();
///
/// let open = Actor::new(false, async move |state| {
///     while let Some(()) = opened_stream.next().await {
///         state.set_neq(true);
///     }
/// });
///
/// open.signal() // reactive view of the current state
/// ```
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    state: Mutable<T>,
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
    #[cfg(debug_assertions)]
    #[allow(dead_code)]
    creation_location: &'static std::panic::Location<'static>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new Actor with initial state and an event processing loop.
    ///
    /// The processor usually contains a loop over one or more relay
    /// streams; it ends when every stream has closed.
    #[track_caller]
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let state = Mutable::new(initial_state);

        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));

        Self {
            state,
            task_handle,
            #[cfg(debug_assertions)]
            creation_location: std::panic::Location::caller(),
        }
    }

    /// Get a reactive signal for this Actor's state.
    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.state.signal_cloned()
    }

    /// Get a reactive signal with a reference to avoid cloning.
    #[allow(dead_code)]
    pub fn signal_ref<U, F>(&self, f: F) -> impl Signal<Item = U> + use<T, U, F>
    where
        F: Fn(&T) -> U + Send + Sync + 'static,
        U: PartialEq + Send + Sync + 'static,
    {
        self.state.signal_ref(f)
    }

    /// Get the current value (for event handlers only).
    ///
    /// Prefer signal-based access; this exists for handlers that must
    /// make a synchronous decision, like `preventDefault` on a key event.
    pub fn get_cloned(&self) -> T {
        self.state.lock_ref().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataflow::relay;
    use futures::StreamExt;

    #[tokio::test]
    async fn actor_processes_events_sequentially() {
        let (increment_relay, mut increment_stream) = relay();

        let counter = Actor::new(0, async move |state| {
            while let Some(amount) = increment_stream.next().await {
                state.update_mut(|current| *current += amount);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        increment_relay.send(5);
        increment_relay.send(3);

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let final_value = counter.signal().to_stream().next().await.unwrap();
        assert_eq!(final_value, 8);
    }

    #[tokio::test]
    async fn get_cloned_reflects_processed_events() {
        let (set_relay, mut set_stream) = relay::<bool>();

        let flag = Actor::new(false, async move |state| {
            while let Some(value) = set_stream.next().await {
                state.set_neq(value);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        assert!(!flag.get_cloned());

        set_relay.send(true);
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        assert!(flag.get_cloned());
    }
}
