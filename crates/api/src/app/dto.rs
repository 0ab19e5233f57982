use serde::Deserialize;

use royalty_core::AuthorId;
use royalty_ledger::CreatedWithdrawal;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateWithdrawalRequest {
    pub author_id: AuthorId,
    pub amount: i64,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn created_withdrawal_to_json(created: CreatedWithdrawal) -> serde_json::Value {
    serde_json::json!({
        "message": "Withdrawal created",
        "withdrawal": created.withdrawal,
        "new_balance": created.new_balance,
    })
}
