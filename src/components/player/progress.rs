use crate::api::models::format_duration;
use dioxus::prelude::*;

/// Local playback position shown by the player, in whole seconds.
///
/// Ticks are ignored until the element reports its metadata, so a freshly
/// bound episode always starts from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    seconds: u32,
    ready: bool,
}

impl Progress {
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn metadata_loaded(&mut self) {
        self.seconds = 0;
        self.ready = true;
    }

    pub fn track(&mut self, current_time: f64) {
        if self.ready {
            self.seconds = whole_seconds(current_time);
        }
    }

    /// Optimistic update for a user seek, clamped to the episode length.
    pub fn seek(&mut self, amount: f64, duration: u32) {
        self.seconds = whole_seconds(amount).min(duration);
    }
}

fn whole_seconds(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u32
    } else {
        0
    }
}

#[component]
pub(super) fn ProgressBar(
    progress: u32,
    duration: u32,
    enabled: bool,
    on_seek: EventHandler<f64>,
) -> Element {
    rsx! {
        div { class: "player-progress",
            span { class: "player-progress__time", "{format_duration(progress)}" }
            div { class: "player-progress__slider",
                if enabled {
                    input {
                        r#type: "range",
                        min: "0",
                        max: "{duration}",
                        value: "{progress}",
                        oninput: move |e: Event<FormData>| {
                            if let Ok(amount) = e.value().parse::<f64>() {
                                on_seek.call(amount);
                            }
                        },
                    }
                } else {
                    div { class: "player-progress__empty" }
                }
            }
            span { class: "player-progress__time", "{format_duration(duration)}" }
        }
    }
}
