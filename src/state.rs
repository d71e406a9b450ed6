//! Session-lifetime player state: the episode queue, the current index and the
//! transport flags. Everything here is plain data; binding it to an audio
//! element is the job of `components::audio_manager`.

use crate::api::Episode;
use rand::Rng;
use tracing::{debug, warn};

/// Source of randomness for shuffle picks.
pub trait IndexPicker {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Picks with the thread-local RNG (`getrandom` backs it on wasm).
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStore {
    episodes: Vec<Episode>,
    current_index: Option<usize>,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
}

impl PlayerStore {
    /// Empty store with the user's initial loop/shuffle preferences.
    pub fn with_preferences(is_looping: bool, is_shuffling: bool) -> Self {
        Self {
            is_looping,
            is_shuffling,
            ..Self::default()
        }
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.current_index.and_then(|idx| self.episodes.get(idx))
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    fn can_shuffle(&self) -> bool {
        self.is_shuffling && self.episodes.len() > 1
    }

    pub fn has_next(&self) -> bool {
        match self.current_index {
            Some(idx) => self.can_shuffle() || idx + 1 < self.episodes.len(),
            None => false,
        }
    }

    pub fn has_previous(&self) -> bool {
        match self.current_index {
            Some(idx) => self.can_shuffle() || idx > 0,
            None => false,
        }
    }

    /// Replaces the queue with a single episode and starts it.
    pub fn play(&mut self, episode: Episode) {
        debug!(episode = %episode.id, "play single episode");
        self.episodes = vec![episode];
        self.current_index = Some(0);
        self.is_playing = true;
    }

    /// Replaces the queue and starts `index`. An index outside the list leaves
    /// the store untouched.
    pub fn play_list(&mut self, episodes: Vec<Episode>, index: usize) {
        if index >= episodes.len() {
            warn!(index, len = episodes.len(), "ignoring play_list with index out of range");
            return;
        }
        debug!(index, len = episodes.len(), "play list");
        self.episodes = episodes;
        self.current_index = Some(index);
        self.is_playing = true;
    }

    pub fn toggle_play(&mut self) {
        if self.current_index.is_none() {
            return;
        }
        self.is_playing = !self.is_playing;
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    /// Resyncs `is_playing` with what the audio element reports.
    pub fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing && self.current_index.is_some();
    }

    pub fn play_next(&mut self) {
        self.play_next_with(&mut ThreadRngPicker);
    }

    pub fn play_next_with(&mut self, picker: &mut impl IndexPicker) {
        let Some(current) = self.current_index else {
            return;
        };
        if self.is_shuffling {
            self.current_index = Some(self.shuffled_index(current, picker));
        } else if self.has_next() {
            self.current_index = Some(current + 1);
        } else {
            debug!("no next episode, clearing player");
            self.clear_player_state();
        }
    }

    pub fn play_previous(&mut self) {
        self.play_previous_with(&mut ThreadRngPicker);
    }

    pub fn play_previous_with(&mut self, picker: &mut impl IndexPicker) {
        let Some(current) = self.current_index else {
            return;
        };
        if self.is_shuffling {
            self.current_index = Some(self.shuffled_index(current, picker));
        } else if current > 0 {
            self.current_index = Some(current - 1);
        }
    }

    /// End-of-track handling: keep playing the next episode if there is one,
    /// otherwise empty the player.
    pub fn finish_episode(&mut self) {
        self.finish_episode_with(&mut ThreadRngPicker);
    }

    pub fn finish_episode_with(&mut self, picker: &mut impl IndexPicker) {
        if self.has_next() {
            self.play_next_with(picker);
            self.is_playing = true;
        } else {
            self.clear_player_state();
        }
    }

    /// Loop and shuffle are preferences and survive a clear.
    pub fn clear_player_state(&mut self) {
        self.episodes.clear();
        self.current_index = None;
        self.is_playing = false;
    }

    // Uniform over every index except `current`; a single-entry queue stays put.
    fn shuffled_index(&self, current: usize, picker: &mut impl IndexPicker) -> usize {
        let len = self.episodes.len();
        if len < 2 {
            return current;
        }
        let pick = picker.pick(len - 1);
        if pick >= current {
            pick + 1
        } else {
            pick
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Replays a fixed sequence of picks.
    pub(crate) struct SeqPicker(pub Vec<usize>);

    impl IndexPicker for SeqPicker {
        fn pick(&mut self, len: usize) -> usize {
            let next = self.0.remove(0);
            assert!(next < len, "scripted pick {next} out of 0..{len}");
            next
        }
    }

    pub(crate) fn episode(id: &str, duration: u32) -> Episode {
        Episode {
            id: id.to_string(),
            title: format!("Episode {id}"),
            members: "Host, Guest".to_string(),
            thumbnail: format!("https://cdn.example.com/{id}.jpg"),
            url: format!("https://cdn.example.com/{id}.m4a"),
            duration,
            ..Episode::default()
        }
    }

    fn queue(ids: &[&str]) -> Vec<Episode> {
        ids.iter().map(|id| episode(id, 100)).collect()
    }

    #[test]
    fn starts_empty() {
        let store = PlayerStore::default();
        assert!(store.episodes().is_empty());
        assert_eq!(store.current_index(), None);
        assert!(!store.is_playing());
        assert!(!store.has_next());
        assert!(!store.has_previous());
    }

    #[test]
    fn play_list_selects_requested_episode() {
        let episodes = queue(&["a", "b", "c"]);
        for idx in 0..episodes.len() {
            let mut store = PlayerStore::default();
            store.play_list(episodes.clone(), idx);
            assert_eq!(store.current_episode(), Some(&episodes[idx]));
            assert!(store.is_playing());
        }
    }

    #[test]
    fn play_list_out_of_range_is_ignored() {
        let mut store = PlayerStore::default();
        store.play(episode("a", 10));
        store.toggle_play();
        let before = store.clone();

        store.play_list(queue(&["x", "y"]), 2);
        assert_eq!(store, before);

        store.play_list(Vec::new(), 0);
        assert_eq!(store, before);
    }

    #[test]
    fn play_resets_queue_to_single_episode() {
        let mut store = PlayerStore::default();
        store.play_list(queue(&["a", "b", "c"]), 2);
        store.play(episode("z", 30));
        assert_eq!(store.episodes().len(), 1);
        assert_eq!(store.current_index(), Some(0));
        assert_eq!(store.current_episode().map(|e| e.id.as_str()), Some("z"));
        assert!(store.is_playing());
    }

    #[test]
    fn toggle_play_twice_restores_state() {
        let mut store = PlayerStore::default();
        store.play(episode("a", 10));
        let original = store.is_playing();
        store.toggle_play();
        assert_ne!(store.is_playing(), original);
        store.toggle_play();
        assert_eq!(store.is_playing(), original);
    }

    #[test]
    fn toggle_play_without_episode_stays_paused() {
        let mut store = PlayerStore::default();
        store.toggle_play();
        assert!(!store.is_playing());
        store.set_playing_state(true);
        assert!(!store.is_playing());
    }

    #[test]
    fn clear_always_empties_player() {
        let mut store = PlayerStore::with_preferences(true, true);
        store.play_list(queue(&["a", "b"]), 1);
        store.clear_player_state();
        assert!(store.episodes().is_empty());
        assert_eq!(store.current_index(), None);
        assert!(!store.is_playing());
        assert!(store.is_looping());
        assert!(store.is_shuffling());

        store.clear_player_state();
        assert_eq!(store.current_index(), None);
    }

    #[test]
    fn next_and_previous_walk_the_queue() {
        let mut store = PlayerStore::default();
        store.play_list(queue(&["a", "b", "c"]), 0);
        assert!(!store.has_previous());
        store.play_next();
        store.play_next();
        assert_eq!(store.current_index(), Some(2));
        assert!(!store.has_next());
        store.play_previous();
        assert_eq!(store.current_index(), Some(1));
        store.play_previous();
        store.play_previous();
        assert_eq!(store.current_index(), Some(0));
    }

    #[test]
    fn next_on_last_episode_clears_player() {
        let mut store = PlayerStore::default();
        store.play_list(queue(&["a", "b"]), 1);
        assert!(!store.has_next());
        store.play_next();
        assert!(store.episodes().is_empty());
        assert_eq!(store.current_index(), None);
        assert!(!store.is_playing());
    }

    #[test]
    fn shuffle_with_single_episode_keeps_index() {
        let mut store = PlayerStore::default();
        store.play(episode("a", 100));
        store.toggle_shuffle();
        assert!(!store.has_next());
        for _ in 0..10 {
            store.play_next();
            assert_eq!(store.current_index(), Some(0));
        }
    }

    #[test]
    fn shuffle_never_repeats_current_episode() {
        let mut store = PlayerStore::default();
        store.play_list(queue(&["a", "b", "c", "d"]), 1);
        store.toggle_shuffle();
        assert!(store.has_next());
        assert!(store.has_previous());

        // picks are over the three other slots: 0 -> a, 1 -> c, 2 -> d
        let mut picker = SeqPicker(vec![0, 1, 2]);
        store.play_next_with(&mut picker);
        assert_eq!(store.current_index(), Some(0));
        store.play_next_with(&mut picker);
        assert_eq!(store.current_index(), Some(2));
        store.play_previous_with(&mut picker);
        assert_eq!(store.current_index(), Some(3));

        for _ in 0..50 {
            let before = store.current_index();
            store.play_next();
            assert_ne!(store.current_index(), before);
        }
    }

    #[test]
    fn toggle_loop_keeps_playback() {
        let mut store = PlayerStore::default();
        store.play_list(vec![episode("a", 100)], 0);
        store.toggle_loop();
        assert!(store.is_looping());
        assert!(store.is_playing());
        assert_eq!(store.current_episode().map(|e| e.id.as_str()), Some("a"));
    }

    #[test]
    fn finish_episode_advances_or_clears() {
        let mut store = PlayerStore::default();
        store.play_list(queue(&["a", "b"]), 0);
        store.set_playing_state(false);
        store.finish_episode();
        assert_eq!(store.current_index(), Some(1));
        assert!(store.is_playing());

        store.finish_episode();
        assert!(store.episodes().is_empty());
        assert!(!store.is_playing());
    }
}
