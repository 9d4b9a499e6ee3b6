// storefront/tests/storefront_flow.rs
// Dispatcher flows: load, reveal pages, filter, reload

use async_trait::async_trait;
use axum::{Json, Router, routing::get};
use rust_decimal::Decimal;
use serde_json::json;
use shared::error::ErrorCode;
use shared::models::{Product, Rating};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use storefront::{
    AppState, CatalogLoader, CategoryFilter, Dispatcher, ImmediateDelay, LoadStatus, Message, SortKey, Theme,
};
use storefront_client::{CatalogSource, ClientConfig, ClientError, ClientResult};

const CATEGORIES: [&str; 4] = ["electronics", "jewelery", "men's clothing", "women's clothing"];

fn products(n: usize) -> Vec<Product> {
    (0..n)
        .map(|i| Product {
            id: i as i64 + 1,
            title: format!("Item {}", i + 1),
            price: Decimal::new(((i * 37) % 100 + 1) as i64 * 100, 2),
            description: format!("Description of item {}", i + 1),
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            image: format!("https://img.example.test/{}.jpg", i + 1),
            rating: Rating {
                rate: (i % 5) as f64 + 0.5,
                count: 10,
            },
        })
        .collect()
}

struct FixedSource(Vec<Product>);

#[async_trait]
impl CatalogSource for FixedSource {
    async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        Ok(self.0.clone())
    }
}

/// Fails the first `failures` fetches, then serves `products`
struct FlakySource {
    failures: usize,
    calls: AtomicUsize,
    products: Vec<Product>,
}

#[async_trait]
impl CatalogSource for FlakySource {
    async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        if self.calls.fetch_add(1, Ordering::SeqCst) < self.failures {
            return Err(ClientError::Status {
                status: 503,
                body: "maintenance".into(),
            });
        }
        Ok(self.products.clone())
    }
}

fn dispatcher_with(source: Arc<dyn CatalogSource>) -> Dispatcher {
    let state = AppState::new(6, Duration::from_millis(500), Theme::Light);
    Dispatcher::new(state, CatalogLoader::new(source), Arc::new(ImmediateDelay))
}

async fn loaded(n: usize) -> Dispatcher {
    let mut dispatcher = dispatcher_with(Arc::new(FixedSource(products(n))));
    dispatcher.start();
    assert!(dispatcher.next().await);
    dispatcher
}

/// Sentinel seen, wait for the delayed page
async fn reveal_next_page(dispatcher: &mut Dispatcher) {
    dispatcher.dispatch(Message::SentinelVisible);
    assert!(dispatcher.state().window().is_extending());
    assert!(dispatcher.next().await);
}

#[tokio::test]
async fn test_load_then_reveal_pages_until_exhausted() {
    let mut dispatcher = dispatcher_with(Arc::new(FixedSource(products(20))));
    assert!(dispatcher.state().is_loading());

    dispatcher.start();
    assert!(dispatcher.next().await);

    let state = dispatcher.state();
    assert_eq!(*state.status(), LoadStatus::Loaded);
    assert_eq!(state.catalog().len(), 20);
    assert_eq!(state.catalog().categories().len(), 4);
    assert_eq!(state.window().len(), 6);

    for expected in [12, 18, 20] {
        reveal_next_page(&mut dispatcher).await;
        assert_eq!(dispatcher.state().window().len(), expected);
    }

    // Everything shown: the sentinel is gone and sightings are ignored
    assert!(!dispatcher.state().window().has_more());
    dispatcher.dispatch(Message::SentinelVisible);
    assert!(!dispatcher.state().window().is_extending());
    assert_eq!(dispatcher.state().window().len(), 20);

    dispatcher.shutdown();
}

#[tokio::test]
async fn test_repeated_sentinel_sightings_reveal_one_page() {
    let mut dispatcher = loaded(20).await;

    dispatcher.dispatch(Message::SentinelVisible);
    dispatcher.dispatch(Message::SentinelVisible);
    dispatcher.dispatch(Message::SentinelVisible);
    assert!(dispatcher.next().await);

    assert_eq!(dispatcher.state().window().len(), 12);
    assert!(!dispatcher.state().window().is_extending());
}

#[tokio::test]
async fn test_filter_change_cancels_pending_extension() {
    let mut dispatcher = loaded(40).await;

    dispatcher.dispatch(Message::SentinelVisible);
    assert!(dispatcher.state().window().is_extending());

    dispatcher.dispatch(Message::CategorySelected(CategoryFilter::from_value("jewelery")));
    let state = dispatcher.state();
    assert_eq!(state.filtered_len(), 10);
    assert_eq!(state.window().len(), 6);
    assert!(!state.window().is_extending());
    assert!(state.displayed().all(|p| p.category == "jewelery"));

    // The cancelled extension never posts
    let pending = tokio::time::timeout(Duration::from_millis(50), dispatcher.next()).await;
    assert!(pending.is_err());
    assert_eq!(dispatcher.state().window().len(), 6);

    reveal_next_page(&mut dispatcher).await;
    assert_eq!(dispatcher.state().window().len(), 10);
}

#[tokio::test]
async fn test_search_and_sort_narrow_and_reorder() {
    let mut dispatcher = loaded(20).await;

    dispatcher.dispatch(Message::SearchChanged("ITEM 1".into()));
    // Item 1 and Item 10..19
    assert_eq!(dispatcher.state().filtered_len(), 11);
    assert_eq!(dispatcher.state().window().len(), 6);

    dispatcher.dispatch(Message::SortSelected(SortKey::PriceHigh));
    let prices: Vec<Decimal> = dispatcher.state().filtered().map(|p| p.price).collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));

    dispatcher.dispatch(Message::SearchChanged("no such product".into()));
    assert_eq!(dispatcher.state().filtered_len(), 0);
    assert!(dispatcher.state().window().is_empty());
    assert!(!dispatcher.state().window().has_more());
}

#[tokio::test]
async fn test_failed_load_shows_empty_catalog_and_reload_recovers() {
    let source = Arc::new(FlakySource {
        failures: 1,
        calls: AtomicUsize::new(0),
        products: products(8),
    });
    let mut dispatcher = dispatcher_with(source.clone());

    dispatcher.start();
    assert!(dispatcher.next().await);

    let state = dispatcher.state();
    let err = state.load_error().expect("load should have failed");
    assert_eq!(err.code, ErrorCode::UpstreamStatus);
    assert!(state.catalog().is_empty());
    assert!(state.window().is_empty());
    assert!(state.category_options().len() == 1);

    // Cart and theme still work on an empty catalog
    dispatcher.dispatch(Message::ToggleTheme);
    assert_eq!(dispatcher.state().theme(), Theme::Dark);

    dispatcher.dispatch(Message::Reload);
    assert!(dispatcher.state().is_loading());
    assert!(dispatcher.next().await);

    assert_eq!(*dispatcher.state().status(), LoadStatus::Loaded);
    assert_eq!(dispatcher.state().window().len(), 6);
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_cart_survives_filter_changes() {
    let mut dispatcher = loaded(20).await;

    dispatcher.dispatch(Message::ToggleCart(2));
    dispatcher.dispatch(Message::ToggleCart(5));
    dispatcher.dispatch(Message::CategorySelected(CategoryFilter::from_value("jewelery")));
    dispatcher.dispatch(Message::SearchChanged("zzz".into()));

    let cart = dispatcher.state().cart();
    assert_eq!(cart.len(), 2);
    assert!(cart.contains(2));
    assert!(cart.contains(5));

    dispatcher.dispatch(Message::ToggleCart(2));
    assert_eq!(dispatcher.state().cart().ids().collect::<Vec<_>>(), [5]);
}

#[tokio::test]
async fn test_end_to_end_over_http() {
    let body = json!([
        {
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 9,
            "title": "WD 2TB Elements Portable External Hard Drive",
            "price": 64,
            "description": "USB 3.0 and USB 2.0 compatibility.",
            "category": "electronics",
            "image": "https://fakestoreapi.com/img/61IBBVJvSDL._AC_SY879_.jpg",
            "rating": { "rate": 3.3, "count": 203 }
        }
    ]);
    let router = Router::new().route("/products", get(move || {
        let body = body.clone();
        async move { Json(body) }
    }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let client = ClientConfig::new(format!("http://{}", addr))
        .with_timeout_ms(5_000)
        .build_http_client()
        .unwrap();
    let mut dispatcher = dispatcher_with(Arc::new(client));
    dispatcher.start();
    assert!(dispatcher.next().await);

    let state = dispatcher.state();
    assert_eq!(*state.status(), LoadStatus::Loaded);
    assert_eq!(state.catalog().categories(), ["men's clothing", "electronics"]);
    assert_eq!(state.displayed_at(0).unwrap().display_price(), "$109.95");
    assert_eq!(state.displayed_at(1).unwrap().display_price(), "$64.00");
    assert!(!state.window().has_more());
}
