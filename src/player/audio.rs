use thiserror::Error;

/// Failure surfaced by an [`AudioBackend`] command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("failed to load stream: {0}")]
    Load(String),
    #[error("playback could not start: {0}")]
    Start(String),
}

/// The native media primitive the controller drives.
///
/// `play` only initiates playback; the backend reports the moment audio
/// actually starts with [`AudioEvent::Started`]. `pause` and `seek` never
/// fail in any backend we wrap, so they stay infallible.
pub trait AudioBackend {
    fn load(&mut self, url: &str) -> Result<(), PlaybackError>;
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
    fn seek(&mut self, position_secs: f64);
}

/// Callbacks the backend delivers to [`crate::player::Player::handle_event`].
#[derive(Debug, Clone, PartialEq)]
pub enum AudioEvent {
    /// Elapsed playback time, raw from the media element.
    TimeUpdate(f64),
    /// An initiated `play` actually began producing audio.
    Started,
    /// The current track ran to completion.
    Ended,
    /// The current resource failed to load or decode.
    Error(String),
}
