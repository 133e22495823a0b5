//! HTTP server demonstrating htmx interaction patterns.
//!
//! # Overview
//! Serves a handful of static example pages (`hx-get`, `hx-target`,
//! `hx-trigger`, `hx-swap`, `hx-select`), the small fragment endpoints they
//! call, and a todo list whose every mutation answers with a re-rendered
//! list item that htmx swaps into place.
//!
//! # Design
//! - Markup is produced by the pure functions in [`render`]; handlers in
//!   [`routes`] only resolve state and pick what to render.
//! - The `TodoStore` is created once per router and shared through axum
//!   state behind a `tokio::sync::RwLock`, so mutations never interleave.
//! - Missing records and blank names surface as [`error::AppError`] and map to
//!   404 and 422 responses.

pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use todo_core::TodoStore;

pub use config::Config;
pub use error::AppError;

pub type Db = Arc<RwLock<TodoStore>>;

/// Router backed by a fresh store holding the seed record.
pub fn app() -> Router {
    app_with_store(Arc::new(RwLock::new(TodoStore::seeded())))
}

/// Router backed by the given store. Tests keep a clone of `db` to inspect it.
pub fn app_with_store(db: Db) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/examples", get(routes::examples))
        .route("/examples/{name}", get(routes::example))
        .route("/date", get(routes::date))
        .route("/bold", get(routes::bold))
        .route("/list-items", post(routes::list_item))
        .route("/todos", get(routes::list_todos).post(routes::create_todo))
        .route(
            "/todos/{id}",
            put(routes::rename_todo).delete(routes::delete_todo),
        )
        .route(
            "/todos/{id}/completion",
            post(routes::complete_todo).delete(routes::uncomplete_todo),
        )
        .route("/todos/{id}/edit-modal", get(routes::edit_modal))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
