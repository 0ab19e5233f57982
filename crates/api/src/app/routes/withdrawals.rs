use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};

use royalty_core::AuthorId;
use royalty_ledger::Ledger;

use crate::app::{dto, errors};

pub async fn create_withdrawal(
    Extension(ledger): Extension<Arc<Ledger>>,
    Json(body): Json<dto::CreateWithdrawalRequest>,
) -> axum::response::Response {
    match ledger.create_withdrawal(body.author_id, body.amount) {
        Ok(created) => (
            StatusCode::CREATED,
            Json(dto::created_withdrawal_to_json(created)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Listing deliberately skips the author existence check: unknown ids yield
/// an empty array, matching the route contract.
pub async fn list_author_withdrawals(
    Extension(ledger): Extension<Arc<Ledger>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let author_id: AuthorId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    (StatusCode::OK, Json(ledger.withdrawals_for(author_id))).into_response()
}
