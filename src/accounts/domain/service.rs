use std::sync::Arc;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::accounts::domain::AccountService;
use crate::core::bookstore::{BookstoreError, BookstoreResult};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;
use crate::users::domain::model::UserEntity;
use crate::users::dto::UserDto;
use crate::users::repository::UserRepository;

pub const MISSING_CREDENTIALS: &str = "Username and password are required";
pub const DUPLICATE_USERNAME: &str = "Username already exists";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub(crate) struct AccountServiceImpl {
    branch_id: String,
    user_repository: Arc<dyn UserRepository>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl AccountServiceImpl {
    pub(crate) fn new(config: &Configuration, user_repository: Arc<dyn UserRepository>,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            user_repository,
            events_publisher,
        }
    }

    async fn publish_registered(&self, dto: &UserDto) -> BookstoreResult<()> {
        let event = DomainEvent::added("users", "accounts", dto.username.as_str(), dto)?
            .with_metadata("branch", self.branch_id.as_str());
        self.events_publisher.publish(&event).await
    }
}

fn require_credentials(username: &str, password: &str) -> BookstoreResult<()> {
    if username.is_empty() || password.is_empty() {
        return Err(BookstoreError::validation(MISSING_CREDENTIALS, Some("missing_credentials".to_string())));
    }
    Ok(())
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn register(&self, username: &str, password: &str) -> BookstoreResult<UserDto> {
        require_credentials(username, password)?;
        let user = UserEntity::new(username, password);
        self.user_repository.create(&user).await.map_err(|err| match err {
            BookstoreError::DuplicateKey { .. } => BookstoreError::duplicate_key(DUPLICATE_USERNAME),
            other => other,
        })?;
        info!(username, "user registered");
        let dto = UserDto::from(&user);
        // the user is already stored, so a failed publish must not fail the registration
        if let Err(err) = self.publish_registered(&dto).await {
            warn!(username, error = %err, "failed to publish user event");
        }
        Ok(dto)
    }

    async fn authenticate(&self, username: &str, password: &str) -> BookstoreResult<UserDto> {
        require_credentials(username, password)?;
        let user = match self.user_repository.get(username).await {
            Ok(user) => user,
            Err(BookstoreError::NotFound { .. }) => {
                warn!(username, "unknown user");
                return Err(BookstoreError::access_denied(INVALID_CREDENTIALS, Some("unknown_user".to_string())));
            }
            Err(err) => return Err(err),
        };
        if user.password != password {
            warn!(username, "password mismatch");
            return Err(BookstoreError::access_denied(INVALID_CREDENTIALS, Some("bad_password".to_string())));
        }
        Ok(UserDto::from(&user))
    }
}
