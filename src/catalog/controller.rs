use axum::body::Bytes;
use axum::extract::{Path, State};
use crate::catalog::command::add_review_cmd::{AddReviewCommand, AddReviewCommandRequest};
use crate::catalog::command::find_books_by_author_cmd::{FindBooksByAuthorCommand, FindBooksByAuthorCommandRequest, FindBooksByAuthorCommandResponse};
use crate::catalog::command::find_books_by_title_cmd::{FindBooksByTitleCommand, FindBooksByTitleCommandRequest, FindBooksByTitleCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::get_reviews_cmd::{GetReviewsCommand, GetReviewsCommandRequest, ReviewsCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_review_cmd::{RemoveReviewCommand, RemoveReviewCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, parse_body, PrettyJson, ServerError};

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<PrettyJson<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog.clone())
        .execute(ListBooksCommandRequest::default()).await?;
    Ok(PrettyJson(res))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<PrettyJson<GetBookCommandResponse>, ServerError> {
    let res = GetBookCommand::new(state.catalog.clone())
        .execute(GetBookCommandRequest::new(isbn)).await?;
    Ok(PrettyJson(res))
}

pub(crate) async fn find_books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>) -> Result<PrettyJson<FindBooksByAuthorCommandResponse>, ServerError> {
    let res = FindBooksByAuthorCommand::new(state.catalog.clone())
        .execute(FindBooksByAuthorCommandRequest { author }).await?;
    Ok(PrettyJson(res))
}

pub(crate) async fn find_books_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>) -> Result<PrettyJson<FindBooksByTitleCommandResponse>, ServerError> {
    let res = FindBooksByTitleCommand::new(state.catalog.clone())
        .execute(FindBooksByTitleCommandRequest { title }).await?;
    Ok(PrettyJson(res))
}

pub(crate) async fn find_reviews(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<PrettyJson<ReviewsCommandResponse>, ServerError> {
    let res = GetReviewsCommand::new(state.catalog.clone())
        .execute(GetReviewsCommandRequest { isbn }).await?;
    Ok(PrettyJson(res))
}

pub(crate) async fn add_review(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    body: Bytes) -> Result<PrettyJson<ReviewsCommandResponse>, ServerError> {
    let mut req: AddReviewCommandRequest = parse_body(&body)?;
    req.isbn = isbn;
    let res = AddReviewCommand::new(state.catalog.clone(), state.accounts.clone()).execute(req).await?;
    Ok(PrettyJson(res))
}

pub(crate) async fn remove_review(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    body: Bytes) -> Result<PrettyJson<ReviewsCommandResponse>, ServerError> {
    let mut req: RemoveReviewCommandRequest = parse_body(&body)?;
    req.isbn = isbn;
    let res = RemoveReviewCommand::new(state.catalog.clone(), state.accounts.clone()).execute(req).await?;
    Ok(PrettyJson(res))
}
