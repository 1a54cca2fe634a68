use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::accounts::domain::AccountService;
use crate::catalog::command::get_reviews_cmd::ReviewsCommandResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveReviewCommand {
    catalog_service: Arc<dyn CatalogService>,
    account_service: Arc<dyn AccountService>,
}

impl RemoveReviewCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>, account_service: Arc<dyn AccountService>) -> Self {
        Self {
            catalog_service,
            account_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoveReviewCommandRequest {
    #[serde(skip)]
    pub isbn: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl RemoveReviewCommandRequest {
    pub fn new(isbn: &str, username: &str, password: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }
}

#[async_trait]
impl Command<RemoveReviewCommandRequest, ReviewsCommandResponse> for RemoveReviewCommand {
    async fn execute(&self, req: RemoveReviewCommandRequest) -> Result<ReviewsCommandResponse, CommandError> {
        let user = self.account_service.authenticate(
            req.username.unwrap_or_default().as_str(), req.password.unwrap_or_default().as_str()).await?;
        self.catalog_service.remove_review(req.isbn.as_str(), user.username.as_str()).await
            .map_err(CommandError::from).map(|reviews| ReviewsCommandResponse { reviews })
    }
}
