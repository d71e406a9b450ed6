use crate::components::{use_player, Icon};
use crate::state::PlayerStore;
use dioxus::prelude::*;

/// Which transport buttons accept input for a given store state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportControls {
    pub shuffle: bool,
    pub previous: bool,
    pub play_pause: bool,
    pub next: bool,
    pub repeat: bool,
}

impl TransportControls {
    pub fn from_store(store: &PlayerStore) -> Self {
        let has_episode = store.current_episode().is_some();
        Self {
            shuffle: has_episode && store.episodes().len() > 1,
            previous: store.has_previous(),
            play_pause: has_episode,
            next: store.has_next(),
            repeat: true,
        }
    }
}

fn button_class(enabled: bool, active: bool) -> &'static str {
    match (enabled, active) {
        (false, _) => "player-button player-button--disabled",
        (true, true) => "player-button player-button--active",
        (true, false) => "player-button",
    }
}

/// Shuffle button - toggle random next/previous picks
#[component]
pub(super) fn ShuffleButton() -> Element {
    let player = use_player();
    let state = player.state();
    let enabled = TransportControls::from_store(&state).shuffle;

    rsx! {
        button {
            id: "shuffle-btn",
            r#type: "button",
            disabled: !enabled,
            class: button_class(enabled, state.is_shuffling()),
            onclick: move |_| {
                if TransportControls::from_store(&player.peek_state()).shuffle {
                    player.toggle_shuffle();
                }
            },
            Icon { name: "shuffle".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

/// Previous button
#[component]
pub(super) fn PrevButton() -> Element {
    let player = use_player();
    let enabled = TransportControls::from_store(&player.state()).previous;

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            disabled: !enabled,
            class: button_class(enabled, false),
            onclick: move |_| {
                if TransportControls::from_store(&player.peek_state()).previous {
                    player.play_previous();
                }
            },
            Icon { name: "prev".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

/// Play/Pause button
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let player = use_player();
    let state = player.state();
    let enabled = TransportControls::from_store(&state).play_pause;
    let playing = state.is_playing();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            disabled: !enabled,
            class: if enabled { "player-button player-button--primary" } else { "player-button player-button--primary player-button--disabled" },
            onclick: move |_| {
                if TransportControls::from_store(&player.peek_state()).play_pause {
                    player.toggle_play();
                }
            },
            if playing {
                Icon { name: "pause".to_string(), class: "w-6 h-6".to_string() }
            } else {
                Icon { name: "play".to_string(), class: "w-6 h-6".to_string() }
            }
        }
    }
}

/// Next button
#[component]
pub(super) fn NextButton() -> Element {
    let player = use_player();
    let enabled = TransportControls::from_store(&player.state()).next;

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            disabled: !enabled,
            class: button_class(enabled, false),
            onclick: move |_| {
                if TransportControls::from_store(&player.peek_state()).next {
                    player.play_next();
                }
            },
            Icon { name: "next".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

/// Repeat button - loop the current episode
#[component]
pub(super) fn RepeatButton() -> Element {
    let player = use_player();
    let state = player.state();
    let enabled = TransportControls::from_store(&state).repeat;

    rsx! {
        button {
            id: "repeat-btn",
            r#type: "button",
            disabled: !enabled,
            class: button_class(enabled, state.is_looping()),
            onclick: move |_| {
                if TransportControls::from_store(&player.peek_state()).repeat {
                    player.toggle_loop();
                }
            },
            Icon { name: "repeat".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}
