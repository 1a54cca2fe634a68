use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::accounts::domain::AccountService;
use crate::catalog::command::get_reviews_cmd::ReviewsCommandResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

// AddReviewCommand stores the caller's review after checking their credentials
pub struct AddReviewCommand {
    catalog_service: Arc<dyn CatalogService>,
    account_service: Arc<dyn AccountService>,
}

impl AddReviewCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>, account_service: Arc<dyn AccountService>) -> Self {
        Self {
            catalog_service,
            account_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AddReviewCommandRequest {
    #[serde(skip)]
    pub isbn: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub review: Option<String>,
}

impl AddReviewCommandRequest {
    pub fn new(isbn: &str, username: &str, password: &str, review: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            username: Some(username.to_string()),
            password: Some(password.to_string()),
            review: Some(review.to_string()),
        }
    }
}

#[async_trait]
impl Command<AddReviewCommandRequest, ReviewsCommandResponse> for AddReviewCommand {
    async fn execute(&self, req: AddReviewCommandRequest) -> Result<ReviewsCommandResponse, CommandError> {
        let user = self.account_service.authenticate(
            req.username.unwrap_or_default().as_str(), req.password.unwrap_or_default().as_str()).await?;
        self.catalog_service.add_review(
            req.isbn.as_str(), user.username.as_str(), req.review.unwrap_or_default().as_str()).await
            .map_err(CommandError::from).map(|reviews| ReviewsCommandResponse { reviews })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_review_cmd::{AddReviewCommand, AddReviewCommandRequest};
    use crate::catalog::command::fixtures::build_services;
    use crate::core::command::{Command, CommandError};

    #[tokio::test]
    async fn test_should_run_add_review() {
        let (catalog, accounts) = build_services().await;
        accounts.register("alice", "secret").await.expect("should register");
        let cmd = AddReviewCommand::new(catalog, accounts);
        let res = cmd.execute(AddReviewCommandRequest::new("1", "alice", "secret", "gripping"))
            .await.expect("should add review");
        assert_eq!(Some(&"gripping".to_string()), res.reviews.get("alice"));
    }

    #[tokio::test]
    async fn test_should_reject_bad_credentials() {
        let (catalog, accounts) = build_services().await;
        accounts.register("alice", "secret").await.expect("should register");
        let cmd = AddReviewCommand::new(catalog, accounts);
        let res = cmd.execute(AddReviewCommandRequest::new("1", "alice", "guess", "gripping")).await;
        assert!(matches!(res, Err(CommandError::Access { .. })));
        let res = cmd.execute(AddReviewCommandRequest { isbn: "1".to_string(), ..Default::default() }).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
