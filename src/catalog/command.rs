pub mod add_review_cmd;
pub mod find_books_by_author_cmd;
pub mod find_books_by_title_cmd;
pub mod get_book_cmd;
pub mod get_reviews_cmd;
pub mod list_books_cmd;
pub mod remove_review_cmd;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Arc;
    use crate::accounts::domain::AccountService;
    use crate::accounts::factory::create_account_service;
    use crate::books::seed::load_seed;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::create_catalog_service;
    use crate::core::domain::Configuration;
    use crate::gateway::logs::publisher::LogPublisher;

    pub(crate) async fn build_services() -> (Arc<dyn CatalogService>, Arc<dyn AccountService>) {
        let config = Configuration::new("test");
        let seed = load_seed(None).expect("should load seed");
        let publisher = Arc::new(LogPublisher::default());
        let catalog = create_catalog_service(&config, &seed, publisher.clone()).await.expect("should build catalog");
        let accounts = create_account_service(&config, publisher);
        (catalog, accounts)
    }
}
