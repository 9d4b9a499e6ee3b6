//! Application state
//!
//! Everything the screen shows is derived from [`AppState`]. The state is
//! owned by the UI loop and only changed through [`update`](super::update).

use super::Config;
use crate::catalog::Catalog;
use crate::view::{CartSelection, CategoryFilter, DisplayWindow, Theme, ViewQuery, filter};
use shared::error::AppError;
use shared::models::Product;
use std::time::Duration;

/// Catalog load lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    /// Fetch failed; the catalog is empty
    Failed(AppError),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub(crate) catalog: Catalog,
    pub(crate) query: ViewQuery,
    /// Indices into the catalog, display order
    pub(crate) filtered: Vec<usize>,
    pub(crate) window: DisplayWindow,
    pub(crate) cart: CartSelection,
    pub(crate) theme: Theme,
    pub(crate) status: LoadStatus,
    pub(crate) load_more_delay: Duration,
}

impl AppState {
    /// Fresh state waiting for the initial catalog load
    pub fn new(page_size: usize, load_more_delay: Duration, theme: Theme) -> Self {
        Self {
            catalog: Catalog::empty(),
            query: ViewQuery::default(),
            filtered: Vec::new(),
            window: DisplayWindow::new(page_size),
            cart: CartSelection::new(),
            theme,
            status: LoadStatus::Loading,
            load_more_delay,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.page_size, config.load_more_delay(), config.theme)
    }

    /// Recompute the filtered result and restart the display window
    pub(crate) fn recompute(&mut self) {
        self.filtered = filter::select(self.catalog.products(), &self.query);
        self.window.reset(self.filtered.len());
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn window(&self) -> &DisplayWindow {
        &self.window
    }

    pub fn cart(&self) -> &CartSelection {
        &self.cart
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    pub fn load_error(&self) -> Option<&AppError> {
        match &self.status {
            LoadStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Size of the filtered result
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Every product of the filtered result, display order
    pub fn filtered(&self) -> impl Iterator<Item = &Product> + '_ {
        let products = self.catalog.products();
        self.filtered.iter().map(move |&i| &products[i])
    }

    /// The revealed prefix of the filtered result
    pub fn displayed(&self) -> impl Iterator<Item = &Product> + '_ {
        self.filtered().take(self.window.len())
    }

    /// Product at `index` of the revealed prefix
    pub fn displayed_at(&self, index: usize) -> Option<&Product> {
        if index >= self.window.len() {
            return None;
        }
        self.filtered
            .get(index)
            .map(|&i| &self.catalog.products()[i])
    }

    /// Category selector options: "all" then each category
    pub fn category_options(&self) -> Vec<CategoryFilter> {
        CategoryFilter::options(self.catalog.categories())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::catalog_of;

    #[test]
    fn test_new_state_is_loading_and_empty() {
        let state = AppState::default();
        assert!(state.is_loading());
        assert_eq!(state.filtered_len(), 0);
        assert_eq!(state.displayed().count(), 0);
        assert_eq!(state.category_options(), [CategoryFilter::All]);
    }

    #[test]
    fn test_displayed_is_prefix_of_filtered() {
        let mut state = AppState::new(6, Duration::ZERO, Theme::Light);
        state.catalog = Catalog::new(catalog_of(20));
        state.recompute();

        let filtered: Vec<i64> = state.filtered().map(|p| p.id).collect();
        let displayed: Vec<i64> = state.displayed().map(|p| p.id).collect();
        assert_eq!(filtered.len(), 20);
        assert_eq!(displayed, filtered[..6]);
        assert_eq!(state.displayed_at(5).map(|p| p.id), Some(6));
        assert!(state.displayed_at(6).is_none());
    }
}
