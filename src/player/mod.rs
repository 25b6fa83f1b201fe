// Playback controller: single authority for what plays next.

mod audio;
mod mode;

pub use audio::{AudioBackend, AudioEvent, PlaybackError};
pub use mode::PlayMode;

use log::{debug, error};

use crate::api::models::Track;
use crate::api::stream::{OuterUrlResolver, StreamResolver};
use crate::store::{Action, PlayerStore};
use crate::toast::{LogNotifier, Notifier};
use crate::utils::{find_index, shuffled};

/// Reconciles user transport intent, natural completion events, and
/// play-mode semantics against the audio backend.
///
/// All transitions run synchronously on the caller's thread; the backend
/// reports back through [`Player::handle_event`]. While a track switch is
/// in flight (`ready == false`) further switch requests are dropped, not
/// queued: rapid "next" presses land on whatever switch was first.
pub struct Player {
    store: PlayerStore,
    current_time: f64,
    duration: f64,
    ready: bool,
    backend: Box<dyn AudioBackend>,
    resolver: Box<dyn StreamResolver>,
    notifier: Box<dyn Notifier>,
}

impl Player {
    pub fn new(
        backend: Box<dyn AudioBackend>,
        resolver: Box<dyn StreamResolver>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            store: PlayerStore::default(),
            current_time: 0.0,
            duration: 0.0,
            ready: true,
            backend,
            resolver,
            notifier,
        }
    }

    /// Controller wired to the stock resolver and log-backed toasts.
    pub fn with_backend(backend: Box<dyn AudioBackend>) -> Self {
        Self::new(backend, Box::new(OuterUrlResolver), Box::new(LogNotifier))
    }

    pub fn store(&self) -> &PlayerStore {
        &self.store
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// False only while a track switch is waiting for the backend.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn progress_percent(&self) -> f64 {
        if self.duration > 0.0 {
            self.current_time / self.duration
        } else {
            0.0
        }
    }

    /// Install a collection as both the canonical and active order, then
    /// start playback at `start_index`. This is how an album, search hit,
    /// or ranking list becomes the play queue.
    pub fn queue_tracks(&mut self, tracks: Vec<Track>, start_index: usize) {
        if tracks.is_empty() || start_index >= tracks.len() {
            return;
        }
        self.store.apply(Action::SetSequenceList(tracks.clone()));
        self.store.apply(Action::SetPlayList(tracks));
        // Re-queueing the song that is already current keeps it playing;
        // the index still has to follow the new list.
        self.store.apply(Action::SetCurrentIndex(Some(start_index)));
        self.select_track(start_index);
    }

    /// Switch playback to the active-list entry at `index`.
    ///
    /// Dropped silently when the index is out of range, when the target is
    /// already current, or while another switch is in flight.
    pub fn select_track(&mut self, index: usize) {
        let Some(target) = self.store.play_list.get(index).cloned() else {
            return;
        };
        if !self.ready {
            debug!("track switch in flight, ignoring select({index})");
            return;
        }
        if self.store.current_song.as_ref().map(|s| s.id) == Some(target.id) {
            return;
        }

        self.ready = false;
        self.current_time = 0.0;
        self.duration = target.duration_secs() as f64;
        self.store.apply(Action::SetCurrentIndex(Some(index)));
        self.store.apply(Action::SetCurrentSong(Some(target.clone())));
        self.store.apply(Action::SetPlayingState(true));

        debug!("loading track {} ({})", target.id, target.name);
        let url = self.resolver.stream_url(target.id);
        if let Err(err) = self
            .backend
            .load(&url)
            .and_then(|()| self.backend.play())
        {
            self.playback_failed(&err.to_string());
        }
    }

    /// Set the playing flag and mirror it to the backend.
    pub fn toggle_playing(&mut self, playing: bool) {
        self.store.apply(Action::SetPlayingState(playing));
        if playing {
            if let Err(err) = self.backend.play() {
                self.playback_failed(&err.to_string());
            }
        } else {
            self.backend.pause();
        }
    }

    pub fn toggle_full_screen(&mut self, full_screen: bool) {
        self.store.apply(Action::SetFullScreen(full_screen));
    }

    pub fn toggle_play_list(&mut self, show: bool) {
        self.store.apply(Action::SetShowPlayList(show));
    }

    pub fn next(&mut self) {
        self.advance(1);
    }

    pub fn previous(&mut self) {
        self.advance(-1);
    }

    fn advance(&mut self, step: isize) {
        let len = self.store.play_list.len();
        if len == 0 {
            return;
        }
        // A single-entry list loops in place regardless of mode.
        if len == 1 {
            self.restart_current();
            return;
        }
        let Some(current) = self.store.current_index else {
            return;
        };
        let next = (current as isize + step).rem_euclid(len as isize) as usize;
        if !self.store.playing {
            self.store.apply(Action::SetPlayingState(true));
        }
        self.select_track(next);
    }

    /// Replay the current track from time zero without changing the index.
    fn restart_current(&mut self) {
        self.current_time = 0.0;
        self.store.apply(Action::SetPlayingState(true));
        self.backend.seek(0.0);
        if let Err(err) = self.backend.play() {
            self.playback_failed(&err.to_string());
        }
    }

    /// Move the elapsed position to `percent` of the track (0.0 to 1.0).
    /// Scrubbing while paused resumes playback.
    pub fn seek_to_percent(&mut self, percent: f64) {
        let new_time = percent.clamp(0.0, 1.0) * self.duration;
        self.current_time = new_time;
        self.backend.seek(new_time);
        if !self.store.playing {
            self.toggle_playing(true);
        }
    }

    /// Advance the play mode one step and rebuild the active list.
    ///
    /// Entering shuffle installs a fresh permutation of the sequence list;
    /// leaving it restores the canonical order. Either way the selection
    /// follows the current song by identity, so only its position moves.
    pub fn cycle_mode(&mut self) {
        let next = self.store.mode.cycle();
        let active = match next {
            PlayMode::Sequence | PlayMode::Loop => self.store.sequence_list.clone(),
            PlayMode::Shuffle => shuffled(&self.store.sequence_list),
        };
        let index = self
            .store
            .current_song
            .as_ref()
            .and_then(|song| find_index(song, &active));
        self.store.apply(Action::SetPlayList(active));
        self.store.apply(Action::SetCurrentIndex(index));
        self.store.apply(Action::SetPlayMode(next));
        debug!("play mode -> {}", next.label());
        self.notifier.show(next.label());
    }

    /// Feed one backend callback into the state machine.
    pub fn handle_event(&mut self, event: AudioEvent) {
        match event {
            AudioEvent::TimeUpdate(secs) => self.current_time = secs,
            AudioEvent::Started => self.ready = true,
            AudioEvent::Ended => self.on_ended(),
            AudioEvent::Error(message) => self.playback_failed(&message),
        }
    }

    fn on_ended(&mut self) {
        if self.store.mode == PlayMode::Loop {
            self.restart_current();
        } else {
            self.next();
        }
    }

    /// Transient failure: tell the user, leave the selection alone, and
    /// reopen the switch guard so a new explicit action can recover.
    fn playback_failed(&mut self, message: &str) {
        error!("playback error: {message}");
        self.notifier.show("Playback failed");
        self.ready = true;
    }
}
