use crate::server::router::DaybookState;
use axum::{
    Router,
    routing::{delete, get},
};

pub mod handlers;

pub fn router() -> Router<DaybookState> {
    Router::new()
        .route(
            "/exercise",
            get(handlers::list_exercise).post(handlers::create_exercise),
        )
        .route(
            "/exercise/",
            get(handlers::list_exercise).post(handlers::create_exercise),
        )
        .route("/exercise/{id}", delete(handlers::delete_exercise))
}
