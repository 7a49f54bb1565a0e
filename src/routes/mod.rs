pub mod dealerships;
pub mod users;

use axum::routing::{get, put};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Users
        .route("/api/v1/users", get(users::list).post(users::create))
        .route(
            "/api/v1/users/{email}",
            get(users::get_by_email)
                .put(users::update)
                .delete(users::remove),
        )
        .route("/api/v1/users/{email}/role", put(users::update_role))
        // Dealerships
        .route(
            "/api/v1/dealerships",
            get(dealerships::list).post(dealerships::create),
        )
        .route("/api/v1/dealerships/{id}", get(dealerships::get))
        .route(
            "/api/v1/dealerships/{id}/users",
            get(dealerships::list_users),
        )
}
