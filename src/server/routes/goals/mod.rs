use crate::server::router::DaybookState;
use axum::{
    Router,
    routing::{get, put},
};

pub mod handlers;

pub fn router() -> Router<DaybookState> {
    Router::new()
        .route("/goals", get(handlers::list_goals).post(handlers::create_goal))
        .route(
            "/goals/",
            get(handlers::list_goals).post(handlers::create_goal),
        )
        .route(
            "/goals/{id}",
            put(handlers::update_goal).delete(handlers::delete_goal),
        )
}
