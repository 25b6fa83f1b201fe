use serde::{Deserialize, Serialize};

/// A playable track. Identity is `id`; everything else is display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Track {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub artists: String,
    #[serde(default)]
    pub album: String,
    /// Stored length in milliseconds, as the upstream payload carries it.
    #[serde(default, alias = "dt")]
    pub duration_ms: u64,
    #[serde(default, alias = "picUrl")]
    pub pic_url: Option<String>,
}

impl Track {
    /// Whole seconds of the stored millisecond length (truncated).
    pub fn duration_secs(&self) -> u64 {
        self.duration_ms / 1000
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Singer {
    pub id: u64,
    pub name: String,
    #[serde(default, alias = "picUrl")]
    pub pic_url: Option<String>,
    #[serde(default, alias = "accountId")]
    pub account_id: Option<u64>,
}

/// One entry of the recommended-playlist grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecommendEntry {
    pub id: u64,
    pub name: String,
    #[serde(default, alias = "picUrl")]
    pub pic_url: Option<String>,
    #[serde(default, alias = "playCount")]
    pub play_count: u64,
}

/// Carousel banner shown above the recommend list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Banner {
    #[serde(alias = "imageUrl")]
    pub image_url: String,
    #[serde(default, alias = "targetId")]
    pub target_id: Option<u64>,
}

pub fn format_duration(seconds: u64) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_parses_upstream_aliases() {
        let track: Track = serde_json::from_str(
            r#"{"id": 347230, "name": "Starlight", "dt": 271666, "picUrl": "http://img/347230.jpg"}"#,
        )
        .unwrap();
        assert_eq!(track.id, 347230);
        assert_eq!(track.duration_ms, 271666);
        assert_eq!(track.pic_url.as_deref(), Some("http://img/347230.jpg"));
        assert_eq!(track.artists, "");
    }

    #[test]
    fn duration_truncates_to_whole_seconds() {
        let track = Track {
            duration_ms: 271_999,
            ..Track::default()
        };
        assert_eq!(track.duration_secs(), 271);
    }

    #[test]
    fn recommend_entry_parses_play_count() {
        let entry: RecommendEntry =
            serde_json::from_str(r#"{"id": 1, "name": "Daily Mix", "playCount": 145000}"#).unwrap();
        assert_eq!(entry.play_count, 145_000);
    }

    #[test]
    fn format_duration_pads_seconds() {
        assert_eq!(format_duration(271), "4:31");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(600), "10:00");
    }
}
