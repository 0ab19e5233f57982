//! `royalty-ledger` — the Ledger component.
//!
//! Owns the catalog of authors, books, and sale events, computes per-author
//! earnings and balances, and validates/records withdrawal requests. The HTTP
//! surface lives in `royalty-api`; everything here is plain domain logic.

pub mod catalog;
pub mod earnings;
pub mod store;
pub mod withdrawal;

pub use catalog::{Author, Book, Catalog, Sale};
pub use earnings::{BookEarnings, SaleView};
pub use store::{AuthorDetail, AuthorOverview, CreatedWithdrawal, Ledger};
pub use withdrawal::{MIN_WITHDRAWAL, Withdrawal, WithdrawalStatus};
