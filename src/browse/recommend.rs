use crate::api::models::{Banner, RecommendEntry};

/// State behind the recommend view: the banner carousel plus the
/// recommended-playlist grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendState {
    pub banners: Vec<Banner>,
    pub recommend_list: Vec<RecommendEntry>,
    pub enter_loading: bool,
}

impl RecommendState {
    /// First mount: both fetches are outstanding.
    pub fn enter(&mut self) {
        self.enter_loading = true;
    }

    pub fn ingest_banners(&mut self, banners: Vec<Banner>) {
        self.banners = banners;
    }

    pub fn ingest_recommend(&mut self, list: Vec<RecommendEntry>) {
        self.recommend_list = list;
        self.enter_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_clears_once_the_list_arrives() {
        let mut state = RecommendState::default();
        state.enter();
        assert!(state.enter_loading);

        state.ingest_banners(vec![Banner {
            image_url: "http://img/banner.jpg".to_string(),
            target_id: None,
        }]);
        // Banners alone do not finish the entry load.
        assert!(state.enter_loading);

        state.ingest_recommend(vec![RecommendEntry {
            id: 1,
            name: "Daily Mix".to_string(),
            pic_url: None,
            play_count: 17,
        }]);
        assert!(!state.enter_loading);
        assert_eq!(state.banners.len(), 1);
        assert_eq!(state.recommend_list.len(), 1);
    }
}
