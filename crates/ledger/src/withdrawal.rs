//! Withdrawal records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use royalty_core::{AuthorId, WithdrawalId};

/// Smallest withdrawal the platform will accept (inclusive).
pub const MIN_WITHDRAWAL: i64 = 500;

/// Withdrawal request status.
///
/// Only `Pending` exists today: there is no approval/rejection/payout flow,
/// and records are never transitioned after creation. Known incompleteness
/// rather than a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    Pending,
}

/// An append-only withdrawal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: WithdrawalId,
    pub author_id: AuthorId,
    pub amount: i64,
    pub status: WithdrawalStatus,
    pub created_at: DateTime<Utc>,
}
