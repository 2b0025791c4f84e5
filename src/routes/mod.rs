pub mod waitlist;

use axum::routing::post;
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new().route(
        "/api/waitlist",
        post(waitlist::submit).options(waitlist::submit_options),
    )
}
