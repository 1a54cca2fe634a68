use axum::body::HttpBody;
use axum::routing::{get, post};
use axum::{BoxError, Router};
use tracing::info;
use crate::accounts::controller::register;
use crate::accounts::factory::create_account_service;
use crate::books::seed::load_seed;
use crate::catalog::controller::{add_review, find_book_by_isbn, find_books_by_author, find_books_by_title, find_reviews, list_books, remove_review};
use crate::catalog::factory::create_catalog_service;
use crate::core::bookstore::BookstoreResult;
use crate::core::controller::{AppState, health};
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;

// build_state loads the catalog and wires services once, so every request
// sees the same in-memory catalog and user registry
pub async fn build_state(config: Configuration) -> BookstoreResult<AppState> {
    let seed = load_seed(config.seed_path.as_deref())?;
    let publisher = create_publisher(config.store.gateway_publisher());
    let catalog = create_catalog_service(&config, &seed, publisher.clone()).await?;
    let accounts = create_account_service(&config, publisher);
    info!(branch = %config.branch_id, store = ?config.store, "bookstore state ready");
    Ok(AppState::new(config, catalog, accounts))
}

// The `-async` / `-promise` paths are kept as aliases of the plain lookups.
// Generic over the body so the same router serves hyper and lambda requests.
pub fn build_router<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    Router::new()
        .route("/", get(list_books))
        .route("/books", get(list_books))
        .route("/books-promise", get(list_books))
        .route("/register", post(register))
        .route("/isbn/:isbn", get(find_book_by_isbn))
        .route("/isbn-async/:isbn", get(find_book_by_isbn))
        .route("/isbn-promise/:isbn", get(find_book_by_isbn))
        .route("/author/:author", get(find_books_by_author))
        .route("/author-async/:author", get(find_books_by_author))
        .route("/author-promise/:author", get(find_books_by_author))
        .route("/title/:title", get(find_books_by_title))
        .route("/review/:isbn",
               get(find_reviews).put(add_review).delete(remove_review))
        .route("/health", get(health))
        .with_state(state)
}
