//! Shares the session's `PlayerStore` with every component through context.

use crate::api::Episode;
use crate::config::PlayerSettings;
use crate::state::PlayerStore;
use dioxus::prelude::*;

/// Handle to the player store. Cheap to copy; all copies point at the same
/// signal.
#[derive(Clone, Copy, PartialEq)]
pub struct PlayerContext {
    store: Signal<PlayerStore>,
}

impl PlayerContext {
    pub fn new(store: Signal<PlayerStore>) -> Self {
        Self { store }
    }

    /// Snapshot that subscribes the caller to changes.
    pub fn state(&self) -> PlayerStore {
        self.store.cloned()
    }

    /// Snapshot without subscribing; for event handlers.
    pub fn peek_state(&self) -> PlayerStore {
        self.store.peek().clone()
    }

    /// Applies `change` and only notifies subscribers if something moved.
    pub fn update(&self, change: impl FnOnce(&mut PlayerStore)) {
        let mut next = self.store.peek().clone();
        change(&mut next);
        if next != *self.store.peek() {
            let mut store = self.store;
            store.set(next);
        }
    }

    pub fn play(&self, episode: Episode) {
        self.update(|store| store.play(episode));
    }

    pub fn play_list(&self, episodes: Vec<Episode>, index: usize) {
        self.update(|store| store.play_list(episodes, index));
    }

    pub fn toggle_play(&self) {
        self.update(PlayerStore::toggle_play);
    }

    pub fn toggle_loop(&self) {
        self.update(PlayerStore::toggle_loop);
    }

    pub fn toggle_shuffle(&self) {
        self.update(PlayerStore::toggle_shuffle);
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn set_playing_state(&self, playing: bool) {
        self.update(|store| store.set_playing_state(playing));
    }

    pub fn play_next(&self) {
        self.update(PlayerStore::play_next);
    }

    pub fn play_previous(&self) {
        self.update(PlayerStore::play_previous);
    }
}

/// Creates the session store and provides it to descendants.
pub fn use_player_provider(settings: &PlayerSettings) -> PlayerContext {
    let (looping, shuffling) = (settings.start_looping, settings.start_shuffling);
    let store = use_signal(move || PlayerStore::with_preferences(looping, shuffling));
    use_context_provider(|| PlayerContext::new(store))
}

pub fn use_player() -> PlayerContext {
    use_context::<PlayerContext>()
}
