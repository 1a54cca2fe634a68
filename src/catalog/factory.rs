use std::sync::Arc;
use crate::books::domain::model::BookEntity;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::bookstore::BookstoreResult;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;

pub(crate) async fn create_catalog_service(config: &Configuration, seed: &[BookEntity],
                                           publisher: Arc<dyn EventPublisher>) -> BookstoreResult<Arc<dyn CatalogService>> {
    let book_repo = factory::create_book_repository(config.store, seed).await?;
    Ok(Arc::new(CatalogServiceImpl::new(config, book_repo, publisher)))
}
