//! Three-way theme toggle: Light, Dark, System.
//!
//! Until the persisted preference has been read, a disabled placeholder
//! with the System icon is shown so the button does not flash the wrong
//! mode on startup. Presses flow through `theme_button_clicked_relay`
//! into an actor that owns the preference cycling.

use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;
use moonzoon_basalt_ui::*;
use zoon::*;

/// Theme controls domain: the relay the toggle button emits on and the
/// actor that reacts by advancing the preference cycle.
struct ThemeControls {
    theme_button_clicked_relay: Relay,
    #[allow(dead_code)]
    cycler: Actor<()>,
}

impl ThemeControls {
    fn new() -> Self {
        Self::with_cycle_action(cycle_theme_preference)
    }

    fn with_cycle_action(cycle: impl Fn() + Send + Sync + 'static) -> Self {
        let (theme_button_clicked_relay, mut theme_button_clicked_stream) = relay();

        let cycler = Actor::new((), async move |_state| {
            while let Some(()) = theme_button_clicked_stream.next().await {
                cycle();
            }
        });

        Self {
            theme_button_clicked_relay,
            cycler,
        }
    }
}

static THEME_CONTROLS: Lazy<ThemeControls> = Lazy::new(ThemeControls::new);

pub fn theme_toggle_button() -> impl Element {
    El::new().child_signal(
        map_ref! {
            let hydrated = theme_hydrated(),
            let preference = theme_preference() =>
            (*hydrated, *preference)
        }
        .map(|(hydrated, preference)| {
            if !hydrated {
                return button()
                    .label("System")
                    .left_icon(IconName::Monitor)
                    .variant(ButtonVariant::Outline)
                    .size(ButtonSize::Small)
                    .disabled(true)
                    .aria_label("Theme toggle loading")
                    .build()
                    .into_element();
            }

            let (icon_name, label) = match preference {
                ThemePreference::Light => (IconName::Sun, "Light"),
                ThemePreference::Dark => (IconName::Moon, "Dark"),
                ThemePreference::System => (IconName::Monitor, "System"),
            };
            button()
                .label(label)
                .left_icon(icon_name)
                .variant(ButtonVariant::Outline)
                .size(ButtonSize::Small)
                .aria_label(format!("Theme: {label}. Activate to switch."))
                .on_press(|| THEME_CONTROLS.theme_button_clicked_relay.send(()))
                .build()
                .into_element()
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn toggle_presses_cycle_through_the_actor() {
        let cycles = Arc::new(AtomicUsize::new(0));
        let controls = ThemeControls::with_cycle_action({
            let cycles = cycles.clone();
            move || {
                cycles.fetch_add(1, Ordering::SeqCst);
            }
        });
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        for _ in 0..3 {
            controls.theme_button_clicked_relay.send(());
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        assert_eq!(cycles.load(Ordering::SeqCst), 3);
    }
}
