use crate::server::router::DaybookState;
use axum::{
    Router,
    routing::{delete, get},
};

pub mod handlers;

pub fn router() -> Router<DaybookState> {
    Router::new()
        .route(
            "/wellness",
            get(handlers::list_wellness).post(handlers::create_wellness),
        )
        .route(
            "/wellness/",
            get(handlers::list_wellness).post(handlers::create_wellness),
        )
        .route("/wellness/{id}", delete(handlers::delete_wellness))
}
