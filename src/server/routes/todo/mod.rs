use crate::server::router::DaybookState;
use axum::{
    Router,
    routing::{get, patch, put},
};

pub mod handlers;

pub fn router() -> Router<DaybookState> {
    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/{id}",
            put(handlers::update_todo).delete(handlers::delete_todo),
        )
        .route("/todos/{id}/complete", patch(handlers::complete_todo))
}
