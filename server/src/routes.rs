//! Request handlers.
//!
//! Example handlers read only their request parameters. Todo handlers lock the
//! shared store, resolve the record (`AppError` on a missing id or blank name)
//! and answer with a fragment from [`crate::render`].

use axum::{
    extract::{Path, Query, State},
    http::{header::LOCATION, StatusCode},
    response::{Html, IntoResponse},
    Form,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::{error::AppError, render, Db};

#[derive(Debug, Deserialize)]
pub struct TextQuery {
    pub text: Option<String>,
}

/// Form body carrying a single `name` field. A missing field deserializes as
/// empty so the store's validation reports it instead of axum's rejection.
#[derive(Debug, Deserialize)]
pub struct NameForm {
    #[serde(default)]
    pub name: String,
}

/// 302 to the example index, whatever the query string.
pub async fn index() -> impl IntoResponse {
    (StatusCode::FOUND, [(LOCATION, "/examples")])
}

pub async fn examples() -> Html<String> {
    Html(render::examples_index().into_string())
}

pub async fn example(
    Path(name): Path<String>,
    Query(query): Query<TextQuery>,
) -> Result<Html<String>, AppError> {
    let page = match name.as_str() {
        "get" => render::example_get(),
        "target" => render::example_target(),
        "trigger" => render::example_trigger(),
        "swap" => render::example_swap(),
        "select" => render::example_select(query.text.as_deref()),
        _ => return Err(AppError::UnknownExample(name)),
    };
    Ok(Html(page.into_string()))
}

pub async fn date() -> Html<String> {
    let now = chrono::Utc::now().timestamp_millis();
    Html(render::date(now).into_string())
}

pub async fn bold(Query(query): Query<TextQuery>) -> Html<String> {
    Html(render::bold(query.text.as_deref()).into_string())
}

pub async fn list_item(Form(form): Form<NameForm>) -> Html<String> {
    Html(render::list_item(&form.name).into_string())
}

pub async fn list_todos(State(db): State<Db>) -> Html<String> {
    let todos = db.read().await;
    debug!(count = todos.len(), "rendering todo list");
    Html(render::todos_page(todos.list()).into_string())
}

pub async fn create_todo(
    State(db): State<Db>,
    Form(form): Form<NameForm>,
) -> Result<Html<String>, AppError> {
    let mut todos = db.write().await;
    let todo = todos.create(&form.name)?;
    info!(id = %todo.id, name = %todo.name, "created todo");
    Ok(Html(render::todo_item(todo).into_string()))
}

pub async fn rename_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Form(form): Form<NameForm>,
) -> Result<Html<String>, AppError> {
    let mut todos = db.write().await;
    let todo = todos.rename(&id, &form.name)?;
    debug!(%id, name = %todo.name, "renamed todo");
    Ok(Html(render::todo_item(todo).into_string()))
}

pub async fn complete_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    set_completed(db, id, true).await
}

pub async fn uncomplete_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    set_completed(db, id, false).await
}

async fn set_completed(db: Db, id: String, completed: bool) -> Result<Html<String>, AppError> {
    let mut todos = db.write().await;
    let todo = todos.set_completed(&id, completed)?;
    debug!(%id, completed, "updated completion");
    Ok(Html(render::todo_item(todo).into_string()))
}

pub async fn edit_modal(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let todos = db.read().await;
    let todo = todos.find(&id)?;
    Ok(Html(render::edit_modal(todo).into_string()))
}

/// Always answers 200 with an empty body so `hx-swap="delete"` removes the
/// row, even when the id was already gone.
pub async fn delete_todo(State(db): State<Db>, Path(id): Path<String>) -> StatusCode {
    match db.write().await.delete(&id) {
        Some(todo) => info!(%id, name = %todo.name, "deleted todo"),
        None => debug!(%id, "delete of absent todo ignored"),
    }
    StatusCode::OK
}
