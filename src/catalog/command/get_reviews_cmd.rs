use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::domain::Reviews;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetReviewsCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetReviewsCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct GetReviewsCommandRequest {
    pub isbn: String,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ReviewsCommandResponse {
    pub reviews: Reviews,
}

#[async_trait]
impl Command<GetReviewsCommandRequest, ReviewsCommandResponse> for GetReviewsCommand {
    async fn execute(&self, req: GetReviewsCommandRequest) -> Result<ReviewsCommandResponse, CommandError> {
        self.catalog_service.find_reviews(req.isbn.as_str()).await
            .map_err(CommandError::from).map(|reviews| ReviewsCommandResponse { reviews })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::fixtures::build_services;
    use crate::catalog::command::get_reviews_cmd::{GetReviewsCommand, GetReviewsCommandRequest};
    use crate::core::command::{Command, CommandError};

    #[tokio::test]
    async fn test_should_run_get_reviews() {
        let (catalog, _) = build_services().await;
        let cmd = GetReviewsCommand::new(catalog);
        let res = cmd.execute(GetReviewsCommandRequest { isbn: "7".to_string() }).await.expect("should get reviews");
        assert_eq!("{}", serde_json::to_string(&res).expect("serialize response").as_str());
        let missing = cmd.execute(GetReviewsCommandRequest { isbn: "70".to_string() }).await;
        assert!(matches!(missing, Err(CommandError::NotFound { .. })));
    }
}
