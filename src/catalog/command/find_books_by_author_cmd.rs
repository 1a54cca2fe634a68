use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookListing;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct FindBooksByAuthorCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBooksByAuthorCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct FindBooksByAuthorCommandRequest {
    pub author: String,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct FindBooksByAuthorCommandResponse {
    pub books: BookListing,
}

#[async_trait]
impl Command<FindBooksByAuthorCommandRequest, FindBooksByAuthorCommandResponse> for FindBooksByAuthorCommand {
    async fn execute(&self, req: FindBooksByAuthorCommandRequest) -> Result<FindBooksByAuthorCommandResponse, CommandError> {
        self.catalog_service.find_books_by_author(req.author.as_str()).await
            .map_err(CommandError::from).map(|books| FindBooksByAuthorCommandResponse { books })
    }
}
