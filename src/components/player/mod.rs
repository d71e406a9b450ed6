use crate::components::{use_audio_binding, use_player, Icon};
use crate::config::PlayerSettings;
use dioxus::prelude::*;

mod controls;
mod progress;

pub use progress::Progress;

use controls::{NextButton, PlayPauseButton, PrevButton, RepeatButton, ShuffleButton};
use progress::ProgressBar;

#[component]
pub fn Player() -> Element {
    let player = use_player();
    let settings = use_context::<PlayerSettings>();
    let mut progress = use_signal(Progress::default);
    let audio = use_audio_binding(player, progress, settings.preload.clone());

    let state = player.state();
    let current_episode = state.current_episode().cloned();
    let duration = current_episode.as_ref().map(|e| e.duration).unwrap_or(0);

    let on_seek = move |amount: f64| {
        audio.seek(amount);
        progress.with_mut(|p| p.seek(amount, duration));
    };

    rsx! {
        aside { class: "player",
            header { class: "player__header",
                Icon { name: "headphones".to_string(), class: "w-8 h-8".to_string() }
                strong { "{settings.now_playing_label}" }
            }

            {
                match &current_episode {
                    Some(episode) => rsx! {
                        div { class: "player__episode",
                            img {
                                src: "{episode.thumbnail}",
                                alt: "{episode.title}",
                                width: "592",
                                height: "592",
                                class: "player__artwork",
                            }
                            strong { "{episode.title}" }
                            span { "{episode.members}" }
                        }
                    },
                    None => rsx! {
                        div { class: "player__empty",
                            strong { "{settings.empty_message}" }
                        }
                    },
                }
            }

            footer { class: if current_episode.is_some() { "player__footer" } else { "player__footer player__footer--empty" },
                ProgressBar {
                    progress: progress().seconds(),
                    duration,
                    enabled: current_episode.is_some(),
                    on_seek,
                }
                div { class: "player__buttons",
                    ShuffleButton {}
                    PrevButton {}
                    PlayPauseButton {}
                    NextButton {}
                    RepeatButton {}
                }
            }
        }
    }
}
