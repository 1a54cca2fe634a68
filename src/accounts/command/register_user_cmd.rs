use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::accounts::domain::AccountService;
use crate::core::command::{Command, CommandError};

pub const REGISTERED: &str = "User successfully registered. Now you can login";

pub struct RegisterUserCommand {
    account_service: Arc<dyn AccountService>,
}

impl RegisterUserCommand {
    pub fn new(account_service: Arc<dyn AccountService>) -> Self {
        Self {
            account_service,
        }
    }
}

// fields are optional so that a missing one is reported as a validation error
#[derive(Debug, Default, Deserialize)]
pub struct RegisterUserCommandRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl RegisterUserCommandRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterUserCommandResponse {
    pub message: String,
}

#[async_trait]
impl Command<RegisterUserCommandRequest, RegisterUserCommandResponse> for RegisterUserCommand {
    async fn execute(&self, req: RegisterUserCommandRequest) -> Result<RegisterUserCommandResponse, CommandError> {
        let username = req.username.unwrap_or_default();
        let password = req.password.unwrap_or_default();
        self.account_service.register(username.as_str(), password.as_str()).await
            .map_err(CommandError::from)
            .map(|_| RegisterUserCommandResponse { message: REGISTERED.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::accounts::command::register_user_cmd::{REGISTERED, RegisterUserCommand, RegisterUserCommandRequest};
    use crate::accounts::factory::create_account_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::logs::publisher::LogPublisher;

    fn build_cmd() -> RegisterUserCommand {
        let svc = create_account_service(&Configuration::new("test"), Arc::new(LogPublisher::default()));
        RegisterUserCommand::new(svc)
    }

    #[tokio::test]
    async fn test_should_run_register_user() {
        let cmd = build_cmd();
        let res = cmd.execute(RegisterUserCommandRequest::new("alice", "secret")).await.expect("should register");
        assert_eq!(REGISTERED, res.message.as_str());
        let dup = cmd.execute(RegisterUserCommandRequest::new("alice", "secret")).await;
        assert!(matches!(dup, Err(CommandError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_missing_fields() {
        let cmd = build_cmd();
        let req = RegisterUserCommandRequest { username: Some("alice".to_string()), password: None };
        assert!(matches!(cmd.execute(req).await, Err(CommandError::Validation { .. })));
        assert!(matches!(cmd.execute(RegisterUserCommandRequest::default()).await, Err(CommandError::Validation { .. })));
    }
}
