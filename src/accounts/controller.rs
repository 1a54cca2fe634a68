use axum::body::Bytes;
use axum::extract::State;
use crate::accounts::command::register_user_cmd::{RegisterUserCommand, RegisterUserCommandRequest, RegisterUserCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, parse_body, PrettyJson, ServerError};

pub(crate) async fn register(
    State(state): State<AppState>,
    body: Bytes) -> Result<PrettyJson<RegisterUserCommandResponse>, ServerError> {
    let req: RegisterUserCommandRequest = parse_body(&body)?;
    let res = RegisterUserCommand::new(state.accounts.clone()).execute(req).await?;
    Ok(PrettyJson(res))
}
