use log::debug;

use crate::api::config::SINGERS_PAGE_SIZE;
use crate::api::models::Singer;

/// What the host should fetch after a filter or scroll transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingerFetch {
    pub category: Option<String>,
    pub alpha: Option<char>,
    pub offset: usize,
    /// Hot list when no filter is active.
    pub hot: bool,
    /// Append to the current list instead of replacing it.
    pub append: bool,
}

/// Locally-owned state behind the singers view: the category/alpha filter
/// plus paging and the three loading flags the list UI renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SingersState {
    pub singer_list: Vec<Singer>,
    pub category: Option<String>,
    pub alpha: Option<char>,
    pub page: usize,
    pub enter_loading: bool,
    pub pull_up_loading: bool,
    pub pull_down_loading: bool,
}

impl SingersState {
    /// First mount: request the hot list, but only when nothing is loaded.
    pub fn enter(&mut self) -> Option<SingerFetch> {
        if !self.singer_list.is_empty() {
            return None;
        }
        self.enter_loading = true;
        Some(self.fetch(false))
    }

    pub fn change_category(&mut self, key: Option<String>) -> SingerFetch {
        self.category = key;
        self.reset_for_filter()
    }

    pub fn change_alpha(&mut self, alpha: Option<char>) -> SingerFetch {
        self.alpha = alpha;
        self.reset_for_filter()
    }

    // Changing either filter starts over from page zero.
    fn reset_for_filter(&mut self) -> SingerFetch {
        self.page = 0;
        self.enter_loading = true;
        debug!(
            "singers filter -> category {:?}, alpha {:?}",
            self.category, self.alpha
        );
        self.fetch(false)
    }

    /// Scrolled to the bottom: fetch the next page and append it.
    pub fn pull_up(&mut self) -> SingerFetch {
        self.pull_up_loading = true;
        self.page += 1;
        self.fetch(true)
    }

    /// Pulled down at the top: refresh from page zero.
    pub fn pull_down(&mut self) -> SingerFetch {
        self.pull_down_loading = true;
        self.page = 0;
        self.fetch(false)
    }

    fn fetch(&self, append: bool) -> SingerFetch {
        SingerFetch {
            category: self.category.clone(),
            alpha: self.alpha,
            offset: self.page * SINGERS_PAGE_SIZE,
            hot: self.category.is_none() && self.alpha.is_none(),
            append,
        }
    }

    /// Apply fetched rows and drop every loading flag.
    pub fn ingest(&mut self, fetch: &SingerFetch, singers: Vec<Singer>) {
        if fetch.append {
            self.singer_list.extend(singers);
        } else {
            self.singer_list = singers;
        }
        self.enter_loading = false;
        self.pull_up_loading = false;
        self.pull_down_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn singers(range: std::ops::Range<u64>) -> Vec<Singer> {
        range
            .map(|id| Singer {
                id,
                name: format!("singer {id}"),
                ..Singer::default()
            })
            .collect()
    }

    #[test]
    fn enter_requests_the_hot_list_once() {
        let mut state = SingersState::default();
        let fetch = state.enter().expect("first mount fetches");
        assert!(fetch.hot);
        assert!(!fetch.append);
        assert!(state.enter_loading);

        state.ingest(&fetch, singers(0..10));
        assert!(!state.enter_loading);
        assert!(state.enter().is_none());
    }

    #[test]
    fn changing_a_filter_resets_paging() {
        let mut state = SingersState::default();
        let first = state.enter().unwrap();
        state.ingest(&first, singers(0..50));
        state.pull_up();
        assert_eq!(state.page, 1);

        let fetch = state.change_category(Some("96".to_string()));
        assert_eq!(state.page, 0);
        assert_eq!(fetch.offset, 0);
        assert!(!fetch.hot);
        assert!(!fetch.append);
        assert!(state.enter_loading);
    }

    #[test]
    fn pull_up_appends_the_next_page() {
        let mut state = SingersState::default();
        let first = state.change_alpha(Some('B'));
        state.ingest(&first, singers(0..50));

        let more = state.pull_up();
        assert!(state.pull_up_loading);
        assert_eq!(more.offset, SINGERS_PAGE_SIZE);
        assert!(more.append);

        state.ingest(&more, singers(50..60));
        assert_eq!(state.singer_list.len(), 60);
        assert!(!state.pull_up_loading);
    }

    #[test]
    fn pull_down_replaces_from_page_zero() {
        let mut state = SingersState::default();
        let first = state.change_category(Some("7".to_string()));
        state.ingest(&first, singers(0..50));
        state.pull_up();

        let refresh = state.pull_down();
        assert_eq!(state.page, 0);
        assert!(!refresh.append);
        assert_eq!(refresh.category.as_deref(), Some("7"));

        state.ingest(&refresh, singers(100..110));
        assert_eq!(state.singer_list.len(), 10);
        assert!(!state.pull_down_loading);
    }
}
