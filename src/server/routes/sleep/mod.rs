use crate::server::router::DaybookState;
use axum::{
    Router,
    routing::{delete, get},
};

mod average;
pub mod handlers;

pub use average::{WINDOW_DAYS, round_hundredths, weekly_average, window_ending};

pub fn router() -> Router<DaybookState> {
    Router::new()
        .route(
            "/sleep",
            get(handlers::list_sleep).post(handlers::create_sleep),
        )
        .route(
            "/sleep/",
            get(handlers::list_sleep).post(handlers::create_sleep),
        )
        .route("/sleep/weekly_average", get(handlers::sleep_weekly_average))
        .route("/sleep/{id}", delete(handlers::delete_sleep))
}
