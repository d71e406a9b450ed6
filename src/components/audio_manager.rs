//! Audio Manager - binds the player store to a browser `<audio>` element.
//! One element exists per current episode; dropping its binding unsubscribes
//! every listener before the element is paused and detached.

use crate::components::{PlayerContext, Progress};
use crate::state::PlayerStore;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::error::PlaybackError;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use tracing::{debug, warn};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

/// Signals the audio element reports back to the player.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub enum AudioEvent {
    Play,
    Pause,
    LoadedMetadata,
    TimeUpdate(f64),
    Ended,
}

/// Folds one element event into the store and the local progress counter.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn apply_audio_event(store: &mut PlayerStore, progress: &mut Progress, event: AudioEvent) {
    match event {
        AudioEvent::Play => store.set_playing_state(true),
        AudioEvent::Pause => store.set_playing_state(false),
        AudioEvent::LoadedMetadata => progress.metadata_loaded(),
        AudioEvent::TimeUpdate(current_time) => progress.track(current_time),
        AudioEvent::Ended => store.finish_episode(),
    }
}

/// Counts element rebinds, so a late result from a replaced element can be
/// told apart from one issued by the element currently bound.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BindingGeneration(u64);

impl BindingGeneration {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Resyncs the store after a refused `play()`, unless the element that
/// issued it has since been replaced.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn apply_play_rejection(
    store: &mut PlayerStore,
    issued: BindingGeneration,
    bound: BindingGeneration,
) {
    if issued == bound {
        store.set_playing_state(false);
    }
}

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "podplayer-audio";

#[cfg(target_arch = "wasm32")]
fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Owns an `<audio>` element and the closures subscribed to it.
#[cfg(target_arch = "wasm32")]
pub struct AudioBinding {
    element: HtmlAudioElement,
    listeners: Vec<(&'static str, Closure<dyn FnMut()>)>,
}

#[cfg(target_arch = "wasm32")]
impl AudioBinding {
    pub fn attach(
        src: &str,
        preload: &str,
        dispatch: Rc<dyn Fn(AudioEvent)>,
    ) -> Result<Self, PlaybackError> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or(PlaybackError::NoDocument)?;
        let body = document.body().ok_or(PlaybackError::NoDocument)?;

        let element: HtmlAudioElement = document
            .create_element("audio")
            .map_err(|err| PlaybackError::CreateElement(describe(&err)))?
            .dyn_into()
            .map_err(|_| PlaybackError::CreateElement("not an audio element".to_string()))?;
        element.set_id(AUDIO_ELEMENT_ID);
        element
            .set_attribute("preload", preload)
            .map_err(|err| PlaybackError::CreateElement(describe(&err)))?;
        element.set_src(src);
        body.append_child(&element)
            .map_err(|err| PlaybackError::CreateElement(describe(&err)))?;

        let mut binding = Self {
            element,
            listeners: Vec::new(),
        };

        let on_play = dispatch.clone();
        binding.subscribe("play", move || on_play(AudioEvent::Play))?;
        let on_pause = dispatch.clone();
        binding.subscribe("pause", move || on_pause(AudioEvent::Pause))?;

        let on_metadata = dispatch.clone();
        let audio = binding.element.clone();
        binding.subscribe("loadedmetadata", move || {
            audio.set_current_time(0.0);
            on_metadata(AudioEvent::LoadedMetadata);
        })?;

        let on_tick = dispatch.clone();
        let audio = binding.element.clone();
        binding.subscribe("timeupdate", move || {
            on_tick(AudioEvent::TimeUpdate(audio.current_time()));
        })?;

        binding.subscribe("ended", move || dispatch(AudioEvent::Ended))?;

        debug!(src, "bound audio element");
        Ok(binding)
    }

    fn subscribe(
        &mut self,
        event: &'static str,
        handler: impl FnMut() + 'static,
    ) -> Result<(), PlaybackError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        self.element
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|err| PlaybackError::Subscribe {
                event,
                reason: describe(&err),
            })?;
        self.listeners.push((event, closure));
        Ok(())
    }

    pub fn is_paused(&self) -> bool {
        self.element.paused()
    }

    pub fn play(&self) -> Result<js_sys::Promise, PlaybackError> {
        self.element
            .play()
            .map_err(|err| PlaybackError::Rejected(describe(&err)))
    }

    pub fn pause(&self) {
        if let Err(err) = self.element.pause() {
            warn!(reason = %describe(&err), "pause failed");
        }
    }

    pub fn set_looping(&self, looping: bool) {
        self.element.set_loop(looping);
    }

    pub fn seek(&self, seconds: f64) {
        self.element.set_current_time(seconds.max(0.0));
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for AudioBinding {
    fn drop(&mut self) {
        // Unsubscribe first so pausing below cannot reach the store.
        for (event, closure) in self.listeners.drain(..) {
            let _ = self
                .element
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        let _ = self.element.pause();
        let _ = self.element.remove_attribute("src");
        self.element.remove();
        debug!("released audio element");
    }
}

/// What the player view needs from the bound element.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy)]
pub struct AudioHandle {
    binding: Signal<Option<AudioBinding>>,
}

#[cfg(target_arch = "wasm32")]
impl AudioHandle {
    pub fn seek(&self, seconds: f64) {
        if let Some(audio) = self.binding.peek().as_ref() {
            audio.seek(seconds);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn dispatch_audio_event(player: PlayerContext, mut progress: Signal<Progress>, event: AudioEvent) {
    let mut tracked = *progress.peek();
    player.update(|store| apply_audio_event(store, &mut tracked, event));
    if tracked != *progress.peek() {
        progress.set(tracked);
    }
}

/// Keeps an `<audio>` element in step with the player store.
#[cfg(target_arch = "wasm32")]
pub fn use_audio_binding(
    player: PlayerContext,
    mut progress: Signal<Progress>,
    preload: String,
) -> AudioHandle {
    let mut binding = use_signal(|| None::<AudioBinding>);
    let mut bound_key = use_signal(|| None::<(usize, String)>);
    let mut generation = use_signal(BindingGeneration::default);

    // Replace the element whenever the current queue entry changes
    use_effect(move || {
        let state = player.state();
        let key = state
            .current_index()
            .zip(state.current_episode().map(|e| e.id.clone()));
        if *bound_key.peek() == key {
            return;
        }
        bound_key.set(key);
        generation.with_mut(BindingGeneration::advance);
        binding.set(None);
        progress.set(Progress::default());

        let Some(episode) = state.current_episode() else {
            return;
        };
        let runtime = Runtime::current();
        let dispatch: Rc<dyn Fn(AudioEvent)> = Rc::new(move |event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            dispatch_audio_event(player, progress, event);
        });
        match AudioBinding::attach(&episode.url, &preload, dispatch) {
            Ok(audio) => binding.set(Some(audio)),
            Err(err) => {
                warn!(%err, episode = %episode.id, "could not bind audio element");
                player.set_playing_state(false);
            }
        }
    });

    // Mirror play/pause intent and loop flag onto the element
    use_effect(move || {
        let state = player.state();
        let issued = *generation.peek();
        let request = {
            let guard = binding.read();
            let Some(audio) = guard.as_ref() else {
                return;
            };
            audio.set_looping(state.is_looping());
            if state.is_playing() && audio.is_paused() {
                Some(audio.play())
            } else {
                if !state.is_playing() && !audio.is_paused() {
                    audio.pause();
                }
                None
            }
        };

        match request {
            Some(Ok(promise)) => {
                spawn(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        let err = PlaybackError::Rejected(describe(&err));
                        warn!(%err, "audio element refused to play");
                        // Dropping a binding pauses its element, which rejects
                        // any play() still pending on it.
                        player.update(|store| {
                            apply_play_rejection(store, issued, *generation.peek())
                        });
                    }
                });
            }
            Some(Err(err)) => {
                warn!(%err, "audio element refused to play");
                player.update(|store| apply_play_rejection(store, issued, issued));
            }
            None => {}
        }
    });

    AudioHandle { binding }
}

/// Without a browser there is no media element to drive.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy)]
pub struct AudioHandle;

#[cfg(not(target_arch = "wasm32"))]
impl AudioHandle {
    pub fn seek(&self, _seconds: f64) {}
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_audio_binding(
    _player: PlayerContext,
    _progress: Signal<Progress>,
    _preload: String,
) -> AudioHandle {
    AudioHandle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::episode;

    fn loaded(ids: &[&str], index: usize) -> PlayerStore {
        let mut store = PlayerStore::default();
        store.play_list(ids.iter().map(|id| episode(id, 100)).collect(), index);
        store
    }

    #[test]
    fn element_play_and_pause_resync_store() {
        let mut store = loaded(&["a"], 0);
        let mut progress = Progress::default();
        apply_audio_event(&mut store, &mut progress, AudioEvent::Pause);
        assert!(!store.is_playing());
        apply_audio_event(&mut store, &mut progress, AudioEvent::Play);
        assert!(store.is_playing());
    }

    #[test]
    fn progress_follows_ticks_after_metadata() {
        let mut store = loaded(&["a"], 0);
        let mut progress = Progress::default();
        apply_audio_event(&mut store, &mut progress, AudioEvent::TimeUpdate(8.0));
        assert_eq!(progress.seconds(), 0);
        apply_audio_event(&mut store, &mut progress, AudioEvent::LoadedMetadata);
        apply_audio_event(&mut store, &mut progress, AudioEvent::TimeUpdate(8.7));
        assert_eq!(progress.seconds(), 8);
    }

    #[test]
    fn ended_advances_when_next_exists() {
        let mut store = loaded(&["a", "b"], 0);
        let mut progress = Progress::default();
        // The element reports `pause` right before `ended`.
        apply_audio_event(&mut store, &mut progress, AudioEvent::Pause);
        apply_audio_event(&mut store, &mut progress, AudioEvent::Ended);
        assert_eq!(store.current_index(), Some(1));
        assert!(store.is_playing());
    }

    #[test]
    fn refused_play_from_replaced_element_is_ignored() {
        let mut store = loaded(&["a", "b"], 0);
        let mut generation = BindingGeneration::default();
        generation.advance();
        let issued_for_a = generation;

        store.play_next();
        generation.advance();
        apply_play_rejection(&mut store, issued_for_a, generation);
        assert_eq!(store.current_index(), Some(1));
        assert!(store.is_playing());

        apply_play_rejection(&mut store, generation, generation);
        assert!(!store.is_playing());
        assert_eq!(store.current_index(), Some(1));
    }

    #[test]
    fn ended_on_last_episode_clears_player() {
        let mut store = loaded(&["a", "b"], 1);
        let mut progress = Progress::default();
        apply_audio_event(&mut store, &mut progress, AudioEvent::Ended);
        assert!(store.episodes().is_empty());
        assert_eq!(store.current_index(), None);
        assert!(!store.is_playing());
    }
}
