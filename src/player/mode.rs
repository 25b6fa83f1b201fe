use serde::{Deserialize, Serialize};

/// Play mode for the active queue, cycled by explicit user action only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlayMode {
    #[default]
    Sequence,
    Loop,
    Shuffle,
}

impl PlayMode {
    /// The next mode in the Sequence -> Loop -> Shuffle cycle.
    pub fn cycle(self) -> Self {
        match self {
            PlayMode::Sequence => PlayMode::Loop,
            PlayMode::Loop => PlayMode::Shuffle,
            PlayMode::Shuffle => PlayMode::Sequence,
        }
    }

    /// Short label surfaced in the mode toast.
    pub fn label(self) -> &'static str {
        match self {
            PlayMode::Sequence => "Sequential play",
            PlayMode::Loop => "Repeat one",
            PlayMode::Shuffle => "Shuffle play",
        }
    }
}
