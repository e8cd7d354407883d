use axum::{
    extract::{Path, State},
    Form,
};
use maud::{html, Markup};
use serde::Deserialize;

use crate::{error::AppError, views, AppState};

pub async fn index() -> Markup {
    views::page()
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Markup, AppError> {
    let todos = state.store().list().await?;
    Ok(views::todo_list(&todos))
}

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    content: String,
}

pub async fn create_todo(
    State(state): State<AppState>,
    Form(CreateTodo { content }): Form<CreateTodo>,
) -> Result<Markup, AppError> {
    if content.is_empty() {
        return Err(AppError::validation("content is required"));
    }
    let todo = state.store().add(content).await?;
    tracing::info!(id = todo.id, "created todo");
    Ok(views::todo_item(&todo))
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Markup, AppError> {
    let todo = state.store().toggle(id).await?;
    tracing::info!(id, completed = todo.completed, "toggled todo");
    Ok(views::todo_item(&todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Markup, AppError> {
    state.store().remove(id).await?;
    tracing::info!(id, "deleted todo");
    Ok(html! {})
}
