//! State transitions
//!
//! [`update`] is the only place [`AppState`] changes. It never blocks and
//! never spawns; work that has to happen later is returned as an [`Effect`]
//! for the runtime to carry out.

use super::state::{AppState, LoadStatus};
use crate::catalog::Catalog;
use crate::view::{CategoryFilter, SortKey};
use shared::error::AppResult;
use shared::models::ProductId;
use std::time::Duration;

/// Input to the state machine
#[derive(Debug, Clone)]
pub enum Message {
    /// Result of a catalog fetch
    CatalogLoaded(AppResult<Catalog>),
    SearchChanged(String),
    CategorySelected(CategoryFilter),
    SortSelected(SortKey),
    /// The trailing sentinel is on screen
    SentinelVisible,
    /// Artificial delay of the extension tagged `generation` is over
    ExtensionElapsed { generation: u64 },
    ToggleCart(ProductId),
    ToggleTheme,
    /// Fetch the catalog again
    Reload,
}

/// Deferred work requested by [`update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchCatalog,
    /// Post `ExtensionElapsed { generation }` after `delay`
    ScheduleExtension { generation: u64, delay: Duration },
    /// Drop any scheduled extension
    CancelExtension,
}

/// Apply `message` to `state`
pub fn update(state: &mut AppState, message: Message) -> Option<Effect> {
    match message {
        Message::CatalogLoaded(result) => {
            match result {
                Ok(catalog) => {
                    state.catalog = catalog;
                    state.status = LoadStatus::Loaded;
                }
                Err(err) => {
                    tracing::warn!(code = %err.code, "Showing empty catalog after failed load");
                    state.catalog = Catalog::empty();
                    state.status = LoadStatus::Failed(err);
                }
            }
            state.recompute();
            Some(Effect::CancelExtension)
        }

        Message::SearchChanged(search) => {
            if state.query.search == search {
                return None;
            }
            state.query.search = search;
            state.recompute();
            Some(Effect::CancelExtension)
        }

        Message::CategorySelected(category) => {
            if state.query.category == category {
                return None;
            }
            tracing::debug!(category = category.value(), "Category selected");
            state.query.category = category;
            state.recompute();
            Some(Effect::CancelExtension)
        }

        Message::SortSelected(sort) => {
            if state.query.sort == sort {
                return None;
            }
            tracing::debug!(sort = %sort, "Sort selected");
            state.query.sort = sort;
            state.recompute();
            Some(Effect::CancelExtension)
        }

        Message::SentinelVisible => {
            if state.is_loading() {
                return None;
            }
            let generation = state.window.request_more()?;
            Some(Effect::ScheduleExtension {
                generation,
                delay: state.load_more_delay,
            })
        }

        Message::ExtensionElapsed { generation } => {
            if state.window.complete(generation) {
                tracing::debug!(
                    shown = state.window.len(),
                    total = state.window.total(),
                    "Revealed next page"
                );
            } else {
                tracing::trace!(generation, "Ignoring stale extension");
            }
            None
        }

        Message::ToggleCart(id) => {
            let added = state.cart.toggle(id);
            tracing::debug!(product_id = id, added, cart = state.cart.len(), "Cart toggled");
            None
        }

        Message::ToggleTheme => {
            state.theme = state.theme.toggle();
            None
        }

        Message::Reload => {
            if state.is_loading() {
                return None;
            }
            state.status = LoadStatus::Loading;
            Some(Effect::FetchCatalog)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{catalog_of, product};
    use crate::view::{RevealPhase, Theme};
    use shared::error::{AppError, ErrorCode};

    fn loaded(products: usize) -> AppState {
        let mut state = AppState::new(6, Duration::from_millis(500), Theme::Light);
        update(&mut state, Message::CatalogLoaded(Ok(Catalog::new(catalog_of(products)))));
        state
    }

    /// Sentinel trigger followed by its completion
    fn scroll(state: &mut AppState) {
        if let Some(Effect::ScheduleExtension { generation, .. }) = update(state, Message::SentinelVisible) {
            update(state, Message::ExtensionElapsed { generation });
        }
    }

    #[test]
    fn test_catalog_loaded_shows_first_page() {
        let state = loaded(20);
        assert_eq!(state.status(), &LoadStatus::Loaded);
        assert_eq!(state.window().len(), 6);
        assert_eq!(state.category_options().len(), 5);
    }

    #[test]
    fn test_scroll_scenario_twenty_items() {
        let mut state = loaded(20);
        let mut lens = Vec::new();
        for _ in 0..3 {
            scroll(&mut state);
            lens.push(state.window().len());
        }
        assert_eq!(lens, [12, 18, 20]);

        assert_eq!(update(&mut state, Message::SentinelVisible), None);
        assert_eq!(state.window().len(), 20);
    }

    #[test]
    fn test_sentinel_schedules_configured_delay() {
        let mut state = loaded(20);
        let effect = update(&mut state, Message::SentinelVisible);
        assert_eq!(
            effect,
            Some(Effect::ScheduleExtension {
                generation: state.window().generation(),
                delay: Duration::from_millis(500),
            })
        );
        // Extending: further triggers are ignored
        assert_eq!(update(&mut state, Message::SentinelVisible), None);
    }

    #[test]
    fn test_category_narrowing_resets_window() {
        let mut state = loaded(20);
        scroll(&mut state);
        assert_eq!(state.window().len(), 12);

        // catalog_of cycles four categories: 5 electronics in 20 items
        let effect = update(
            &mut state,
            Message::CategorySelected(CategoryFilter::from_value("electronics")),
        );
        assert_eq!(effect, Some(Effect::CancelExtension));
        assert_eq!(state.filtered_len(), 5);
        assert_eq!(state.window().len(), 5);
        assert_eq!(update(&mut state, Message::SentinelVisible), None);
    }

    #[test]
    fn test_narrow_to_four_items() {
        let mut products = catalog_of(16);
        for i in 0..4 {
            products.push(product(100 + i, &format!("Vintage Lamp {}", i), "lighting", 4500, 4.0));
        }
        let mut state = AppState::new(6, Duration::ZERO, Theme::Light);
        update(&mut state, Message::CatalogLoaded(Ok(Catalog::new(products))));
        assert_eq!(state.window().len(), 6);

        update(&mut state, Message::CategorySelected(CategoryFilter::from_value("lighting")));
        assert_eq!(state.window().len(), 4);
        assert!(!state.window().has_more());
        assert_eq!(update(&mut state, Message::SentinelVisible), None);
    }

    #[test]
    fn test_stale_extension_after_filter_change_is_ignored() {
        let mut state = loaded(20);
        let Some(Effect::ScheduleExtension { generation, .. }) = update(&mut state, Message::SentinelVisible) else {
            panic!("expected an extension");
        };

        update(&mut state, Message::SortSelected(SortKey::PriceHigh));
        assert_eq!(state.window().phase(), RevealPhase::Idle);

        update(&mut state, Message::ExtensionElapsed { generation });
        assert_eq!(state.window().len(), 6);
    }

    #[test]
    fn test_same_query_does_not_reset() {
        let mut state = loaded(20);
        scroll(&mut state);
        assert_eq!(update(&mut state, Message::SearchChanged(String::new())), None);
        assert_eq!(update(&mut state, Message::SortSelected(SortKey::Default)), None);
        assert_eq!(update(&mut state, Message::CategorySelected(CategoryFilter::All)), None);
        assert_eq!(state.window().len(), 12);
    }

    #[test]
    fn test_search_resets_to_min_page() {
        let mut state = loaded(20);
        scroll(&mut state);

        // "Item 1" matches Item 1 and Item 10..=19
        update(&mut state, Message::SearchChanged("item 1".into()));
        assert_eq!(state.filtered_len(), 11);
        assert_eq!(state.window().len(), 6);
        assert!(state.filtered().all(|p| p.title.to_lowercase().contains("item 1")));
    }

    #[test]
    fn test_failed_load_leaves_empty_catalog() {
        let mut state = AppState::default();
        let err = AppError::network("dns failure");
        let effect = update(&mut state, Message::CatalogLoaded(Err(err.clone())));

        assert_eq!(effect, Some(Effect::CancelExtension));
        assert!(state.catalog().is_empty());
        assert_eq!(state.load_error(), Some(&err));
        assert_eq!(state.load_error().map(|e| e.code), Some(ErrorCode::NetworkError));
        assert_eq!(state.window().len(), 0);
        assert_eq!(update(&mut state, Message::SentinelVisible), None);
    }

    #[test]
    fn test_reload_only_when_not_loading() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Message::Reload), None);

        update(&mut state, Message::CatalogLoaded(Err(AppError::network("offline"))));
        assert_eq!(update(&mut state, Message::Reload), Some(Effect::FetchCatalog));
        assert!(state.is_loading());
        assert_eq!(update(&mut state, Message::Reload), None);
    }

    #[test]
    fn test_sentinel_ignored_while_loading() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Message::SentinelVisible), None);
    }

    #[test]
    fn test_cart_and_theme_do_not_touch_view() {
        let mut state = loaded(20);
        scroll(&mut state);

        assert_eq!(update(&mut state, Message::ToggleCart(3)), None);
        assert!(state.cart().contains(3));
        update(&mut state, Message::ToggleCart(3));
        assert!(state.cart().is_empty());

        update(&mut state, Message::ToggleTheme);
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(state.window().len(), 12);
    }
}
