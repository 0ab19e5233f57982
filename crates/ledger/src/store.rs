//! The owned Ledger store.
//!
//! Handlers receive this behind an `Arc`; there are no module-level
//! singletons. The catalog is immutable and read lock-free, while the
//! withdrawal book sits behind a mutex so the read-validate-append path in
//! [`Ledger::create_withdrawal`] is atomic with respect to other requests.

use std::sync::Mutex;

use chrono::Utc;
use serde::Serialize;

use royalty_core::{AuthorId, DomainError, DomainResult, WithdrawalId};

use crate::catalog::Catalog;
use crate::earnings::{self, BookEarnings, SaleView};
use crate::withdrawal::{MIN_WITHDRAWAL, Withdrawal, WithdrawalStatus};

/// One row of the authors listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorOverview {
    pub id: AuthorId,
    pub name: String,
    pub total_earnings: i64,
    pub current_balance: i64,
}

/// Full author detail with per-book earnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorDetail {
    pub id: AuthorId,
    pub name: String,
    pub email: String,
    pub total_books: usize,
    pub total_earnings: i64,
    pub current_balance: i64,
    pub books: Vec<BookEarnings>,
}

/// Result of a successful withdrawal request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedWithdrawal {
    pub withdrawal: Withdrawal,
    pub new_balance: i64,
}

/// Mutable half of the store: append-only records plus the id sequence.
///
/// The sequence is explicit (not `entries.len() + 1`), so ids stay correct
/// even if entries are ever compacted or reloaded.
#[derive(Debug, Default)]
struct WithdrawalBook {
    entries: Vec<Withdrawal>,
    last_id: u64,
}

impl WithdrawalBook {
    fn withdrawn_by(&self, author_id: AuthorId) -> i64 {
        self.entries
            .iter()
            .filter(|w| w.author_id == author_id)
            .map(|w| w.amount)
            .sum()
    }
}

/// The Ledger component: catalog plus withdrawal book.
#[derive(Debug)]
pub struct Ledger {
    catalog: Catalog,
    book: Mutex<WithdrawalBook>,
}

impl Ledger {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            book: Mutex::new(WithdrawalBook::default()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Sum of `qty * royalty` over every sale of every book the author owns.
    pub fn total_earnings(&self, author_id: AuthorId) -> i64 {
        earnings::total_earnings(&self.catalog, author_id)
    }

    /// Sum of all withdrawal amounts recorded for the author.
    pub fn total_withdrawn(&self, author_id: AuthorId) -> i64 {
        self.book.lock().unwrap().withdrawn_by(author_id)
    }

    /// Earnings minus withdrawn. Never negative: withdrawals are validated
    /// against the balance under the same lock that appends them.
    pub fn current_balance(&self, author_id: AuthorId) -> i64 {
        self.total_earnings(author_id) - self.total_withdrawn(author_id)
    }

    /// Overview rows for every author, in catalog insertion order.
    pub fn author_overviews(&self) -> Vec<AuthorOverview> {
        self.catalog
            .authors()
            .iter()
            .map(|a| {
                let total_earnings = self.total_earnings(a.id);
                AuthorOverview {
                    id: a.id,
                    name: a.name.clone(),
                    total_earnings,
                    current_balance: total_earnings - self.total_withdrawn(a.id),
                }
            })
            .collect()
    }

    /// Detail view for one author, or `NotFound` for an unknown id.
    pub fn author_detail(&self, author_id: AuthorId) -> DomainResult<AuthorDetail> {
        let author = self.catalog.author(author_id).ok_or(DomainError::NotFound)?;

        let books = earnings::book_earnings(&self.catalog, author_id);
        let total_earnings: i64 = books.iter().map(|b| b.total_royalty).sum();

        Ok(AuthorDetail {
            id: author.id,
            name: author.name.clone(),
            email: author.email.clone(),
            total_books: books.len(),
            total_earnings,
            current_balance: total_earnings - self.total_withdrawn(author_id),
            books,
        })
    }

    /// Sales listing for one author, date-descending. `NotFound` when the
    /// author owns zero books (conflated with unknown ids; see DESIGN.md).
    pub fn author_sales(&self, author_id: AuthorId) -> DomainResult<Vec<SaleView>> {
        earnings::author_sales(&self.catalog, author_id)
    }

    /// Validate and record a withdrawal request.
    ///
    /// Validation order is fixed: author existence, then the 500 minimum,
    /// then the balance check. Balance read and append happen under one lock.
    pub fn create_withdrawal(
        &self,
        author_id: AuthorId,
        amount: i64,
    ) -> DomainResult<CreatedWithdrawal> {
        if self.catalog.author(author_id).is_none() {
            return Err(DomainError::not_found());
        }

        if amount < MIN_WITHDRAWAL {
            return Err(DomainError::validation("Minimum withdrawal is 500"));
        }

        let total_earnings = self.total_earnings(author_id);

        let mut book = self.book.lock().unwrap();
        let balance = total_earnings - book.withdrawn_by(author_id);
        if amount > balance {
            return Err(DomainError::validation("Amount exceeds current balance"));
        }

        book.last_id += 1;
        let withdrawal = Withdrawal {
            id: WithdrawalId::new(book.last_id),
            author_id,
            amount,
            status: WithdrawalStatus::Pending,
            created_at: Utc::now(),
        };
        book.entries.push(withdrawal.clone());
        drop(book);

        tracing::info!(
            author_id = %author_id,
            withdrawal_id = %withdrawal.id,
            amount,
            new_balance = balance - amount,
            "withdrawal created"
        );

        Ok(CreatedWithdrawal {
            withdrawal,
            new_balance: balance - amount,
        })
    }

    /// Withdrawals for one author, `created_at` descending, stable on ties.
    /// Does not validate author existence: unknown ids yield an empty list.
    pub fn withdrawals_for(&self, author_id: AuthorId) -> Vec<Withdrawal> {
        let book = self.book.lock().unwrap();
        let mut result: Vec<Withdrawal> = book
            .entries
            .iter()
            .filter(|w| w.author_id == author_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seeded_ledger() -> Ledger {
        Ledger::new(Catalog::seed())
    }

    const RAHUL: AuthorId = AuthorId::new(2);

    #[test]
    fn balance_is_earnings_minus_withdrawn() {
        let ledger = seeded_ledger();
        for overview in ledger.author_overviews() {
            assert_eq!(
                ledger.current_balance(overview.id),
                ledger.total_earnings(overview.id) - ledger.total_withdrawn(overview.id)
            );
        }
    }

    #[test]
    fn unknown_author_is_rejected_regardless_of_amount() {
        let ledger = seeded_ledger();
        let err = ledger.create_withdrawal(AuthorId::new(99), 100_000).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
        let err = ledger.create_withdrawal(AuthorId::new(99), 1).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn amounts_below_minimum_are_rejected() {
        let ledger = seeded_ledger();
        let err = ledger.create_withdrawal(RAHUL, 499).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert_eq!(msg, "Minimum withdrawal is 500"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn minimum_boundary_is_inclusive() {
        let ledger = seeded_ledger();
        let created = ledger.create_withdrawal(RAHUL, 500).unwrap();
        assert_eq!(created.withdrawal.amount, 500);
        assert_eq!(created.new_balance, 9475);
    }

    #[test]
    fn withdrawal_beyond_balance_is_rejected() {
        let ledger = seeded_ledger();
        ledger.create_withdrawal(RAHUL, 500).unwrap();

        // Remaining balance is 9475, so 9600 must fail.
        let err = ledger.create_withdrawal(RAHUL, 9600).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert_eq!(msg, "Amount exceeds current balance"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn exact_balance_can_be_withdrawn() {
        let ledger = seeded_ledger();
        let balance = ledger.current_balance(RAHUL);
        let created = ledger.create_withdrawal(RAHUL, balance).unwrap();
        assert_eq!(created.new_balance, 0);
        assert_eq!(ledger.current_balance(RAHUL), 0);
    }

    #[test]
    fn ids_are_one_based_and_strictly_increasing() {
        let ledger = seeded_ledger();
        let first = ledger.create_withdrawal(RAHUL, 500).unwrap();
        let second = ledger.create_withdrawal(AuthorId::new(1), 600).unwrap();
        let third = ledger.create_withdrawal(RAHUL, 700).unwrap();

        assert_eq!(first.withdrawal.id.get(), 1);
        assert_eq!(second.withdrawal.id.get(), 2);
        assert_eq!(third.withdrawal.id.get(), 3);
    }

    #[test]
    fn status_is_pending_after_creation() {
        let ledger = seeded_ledger();
        let created = ledger.create_withdrawal(RAHUL, 500).unwrap();
        assert_eq!(created.withdrawal.status, WithdrawalStatus::Pending);
    }

    #[test]
    fn listing_filters_by_author_and_sorts_created_at_descending() {
        let ledger = seeded_ledger();
        ledger.create_withdrawal(RAHUL, 500).unwrap();
        ledger.create_withdrawal(AuthorId::new(1), 600).unwrap();
        ledger.create_withdrawal(RAHUL, 700).unwrap();

        let listed = ledger.withdrawals_for(RAHUL);
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|w| w.author_id == RAHUL));
        assert!(listed[0].created_at >= listed[1].created_at);
        // Descending and stable: the later insert comes first (or ties keep
        // append order, in which case ids still identify both records).
        let ids: Vec<u64> = listed.iter().map(|w| w.id.get()).collect();
        assert!(ids.contains(&1) && ids.contains(&3));
    }

    #[test]
    fn unknown_author_listing_is_empty() {
        let ledger = seeded_ledger();
        assert!(ledger.withdrawals_for(AuthorId::new(99)).is_empty());
    }

    #[test]
    fn concurrent_withdrawals_cannot_overdraw() {
        use std::sync::Arc;

        let ledger = Arc::new(seeded_ledger());
        let balance = ledger.current_balance(RAHUL);

        // Many threads racing to withdraw chunks; accepted total must never
        // exceed the starting balance.
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let ledger = ledger.clone();
                std::thread::spawn(move || ledger.create_withdrawal(RAHUL, 1000).is_ok())
            })
            .collect();
        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|accepted| *accepted)
            .count() as i64;

        assert_eq!(ledger.total_withdrawn(RAHUL), accepted * 1000);
        assert!(accepted * 1000 <= balance);
        assert!(ledger.current_balance(RAHUL) >= 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: after any sequence of attempted withdrawals, the balance
        /// equals earnings minus the sum of accepted amounts and is never
        /// negative.
        #[test]
        fn accepted_withdrawals_preserve_balance_identity(
            amounts in prop::collection::vec(1i64..4_000i64, 1..20)
        ) {
            let ledger = seeded_ledger();
            let earnings = ledger.total_earnings(RAHUL);

            let mut accepted_total = 0i64;
            for amount in amounts {
                if ledger.create_withdrawal(RAHUL, amount).is_ok() {
                    accepted_total += amount;
                }
            }

            prop_assert_eq!(ledger.total_withdrawn(RAHUL), accepted_total);
            prop_assert_eq!(ledger.current_balance(RAHUL), earnings - accepted_total);
            prop_assert!(ledger.current_balance(RAHUL) >= 0);
        }
    }
}
