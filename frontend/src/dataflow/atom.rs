//! Local UI state Atom helper.
//!
//! Atom wraps Actor+Relay for simple local component state like hover
//! flags, expanded sections, and demo counters.

use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;
use zoon::Signal;

/// Internal update type for Atom operations.
#[derive(Clone, Debug)]
enum AtomUpdate<T> {
    #[allow(dead_code)]
    Set(T),
    SetNeq(T),
}

/// Convenient wrapper for local UI state using Actor+Relay internally.
///
/// Use Atom for truly local UI state; domain state belongs in its own
/// Actor with named relays.
#[derive(Clone, Debug)]
pub struct Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    actor: Actor<T>,
    setter: Relay<AtomUpdate<T>>,
}

impl<T> Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new Atom with an initial value.
    pub fn new(initial: T) -> Self
    where
        T: PartialEq,
    {
        let (setter, mut setter_stream) = relay();

        let actor = Actor::new(initial, async move |state| {
            while let Some(update) = setter_stream.next().await {
                match update {
                    AtomUpdate::Set(new_value) => state.set(new_value),
                    AtomUpdate::SetNeq(new_value) => state.set_neq(new_value),
                }
            }
        });

        Self { actor, setter }
    }

    /// Update the Atom's value.
    #[allow(dead_code)]
    pub fn set(&self, value: T) {
        self.setter.send(AtomUpdate::Set(value));
    }

    /// Update the Atom's value only if it differs from the current value.
    pub fn set_neq(&self, value: T)
    where
        T: PartialEq,
    {
        self.setter.send(AtomUpdate::SetNeq(value));
    }

    /// Get a reactive signal for this Atom's value.
    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.actor.signal()
    }

    /// Get current value (for event handlers only).
    pub fn get_cloned(&self) -> T {
        self.actor.get_cloned()
    }
}

impl Atom<bool> {
    /// Flip the boolean value.
    ///
    /// An Atom must be mutated through a single method; debug builds
    /// enforce the single send site per relay.
    pub fn toggle(&self) {
        self.setter.send(AtomUpdate::SetNeq(!self.get_cloned()));
    }
}

impl<T> Default for Atom<T>
where
    T: Clone + Send + Sync + Default + PartialEq + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use zoon::SignalExt;

    #[tokio::test]
    async fn atom_updates_through_setter() {
        let atom = Atom::new(42);

        let initial_value = atom.signal().to_stream().next().await.unwrap();
        assert_eq!(initial_value, 42);

        atom.set(100);
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let updated_value = atom.signal().to_stream().next().await.unwrap();
        assert_eq!(updated_value, 100);
    }

    #[tokio::test]
    async fn bool_atom_toggles() {
        let flag = Atom::new(false);

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        flag.toggle();
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        assert!(flag.get_cloned());
    }
}
