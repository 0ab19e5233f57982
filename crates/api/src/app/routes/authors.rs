use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};

use royalty_core::AuthorId;
use royalty_ledger::Ledger;

use crate::app::errors;

pub async fn list_authors(
    Extension(ledger): Extension<Arc<Ledger>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(ledger.author_overviews())).into_response()
}

pub async fn get_author(
    Extension(ledger): Extension<Arc<Ledger>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let author_id: AuthorId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match ledger.author_detail(author_id) {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_author_sales(
    Extension(ledger): Extension<Arc<Ledger>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let author_id: AuthorId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match ledger.author_sales(author_id) {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
