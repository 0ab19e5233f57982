use axum::{
    Router,
    routing::{get, post},
};

pub mod authors;
pub mod system;
pub mod withdrawals;

/// Router for the full route set.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/authors", get(authors::list_authors))
        .route("/authors/:id", get(authors::get_author))
        .route("/authors/:id/sales", get(authors::get_author_sales))
        .route(
            "/authors/:id/withdrawals",
            get(withdrawals::list_author_withdrawals),
        )
        .route("/withdrawals", post(withdrawals::create_withdrawal))
}
