//! Global player state and the discrete actions that mutate it.

use crate::api::models::Track;
use crate::player::PlayMode;

/// Player state shared across the app: transport flags, the canonical and
/// active track order, and the current selection.
///
/// `play_list` is the order actually iterated by next/prev; it equals
/// `sequence_list` except in shuffle mode, where it holds a permutation of
/// the same tracks. `current_index` is `None` while nothing is selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStore {
    pub full_screen: bool,
    pub playing: bool,
    pub current_song: Option<Track>,
    pub mode: PlayMode,
    pub current_index: Option<usize>,
    pub play_list: Vec<Track>,
    pub sequence_list: Vec<Track>,
    pub show_play_list: bool,
}

/// One discrete store mutation; every write goes through [`PlayerStore::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetPlayingState(bool),
    SetFullScreen(bool),
    SetShowPlayList(bool),
    SetCurrentIndex(Option<usize>),
    SetCurrentSong(Option<Track>),
    SetPlayMode(PlayMode),
    SetPlayList(Vec<Track>),
    SetSequenceList(Vec<Track>),
}

impl PlayerStore {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetPlayingState(playing) => self.playing = playing,
            Action::SetFullScreen(full_screen) => self.full_screen = full_screen,
            Action::SetShowPlayList(show) => self.show_play_list = show,
            Action::SetCurrentIndex(index) => self.current_index = index,
            Action::SetCurrentSong(song) => self.current_song = song,
            Action::SetPlayMode(mode) => self.mode = mode,
            Action::SetPlayList(list) => self.play_list = list,
            Action::SetSequenceList(list) => self.sequence_list = list,
        }
    }

    /// The active-list entry the selection points at, if any.
    pub fn selected(&self) -> Option<&Track> {
        self.current_index.and_then(|index| self.play_list.get(index))
    }
}
