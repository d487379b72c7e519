pub mod actions;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(actions::welcome))
        .route("/actions/", post(actions::create))
        .route("/actions", get(actions::list_all))
        .route("/actions/filters/senders", get(actions::by_sender))
        .route("/actions/filters/dates", get(actions::by_date_range))
}
