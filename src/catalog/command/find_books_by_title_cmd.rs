use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookListing;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct FindBooksByTitleCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBooksByTitleCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct FindBooksByTitleCommandRequest {
    pub title: String,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct FindBooksByTitleCommandResponse {
    pub books: BookListing,
}

#[async_trait]
impl Command<FindBooksByTitleCommandRequest, FindBooksByTitleCommandResponse> for FindBooksByTitleCommand {
    async fn execute(&self, req: FindBooksByTitleCommandRequest) -> Result<FindBooksByTitleCommandResponse, CommandError> {
        self.catalog_service.find_books_by_title(req.title.as_str()).await
            .map_err(CommandError::from).map(|books| FindBooksByTitleCommandResponse { books })
    }
}
