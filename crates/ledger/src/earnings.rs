//! Earnings calculator: summation over the catalog.
//!
//! Unknown author ids simply yield zero here; existence checks are the
//! caller's job (the store does them where the contract requires a 404).

use serde::Serialize;

use royalty_core::{AuthorId, BookId, DomainError, DomainResult};

use crate::catalog::Catalog;

/// Per-book earnings summary for an author detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookEarnings {
    pub id: BookId,
    pub title: String,
    pub royalty_per_sale: i64,
    pub total_sold: i64,
    pub total_royalty: i64,
}

/// One sale of one of an author's books, as surfaced by the sales listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleView {
    pub book_title: String,
    pub quantity: i64,
    pub royalty_earned: i64,
    pub sale_date: String,
}

/// Total earnings for an author: sum of `qty * royalty` across all sales of
/// all their books. Zero when the author owns no books or has no sales.
pub fn total_earnings(catalog: &Catalog, author_id: AuthorId) -> i64 {
    catalog
        .books_by_author(author_id)
        .map(|book| {
            catalog
                .sales_for_book(book.id)
                .map(|s| s.qty * book.royalty)
                .sum::<i64>()
        })
        .sum()
}

/// Per-book summaries for an author, in catalog order.
pub fn book_earnings(catalog: &Catalog, author_id: AuthorId) -> Vec<BookEarnings> {
    catalog
        .books_by_author(author_id)
        .map(|book| {
            let mut total_sold = 0;
            let mut total_royalty = 0;
            for sale in catalog.sales_for_book(book.id) {
                total_sold += sale.qty;
                total_royalty += sale.qty * book.royalty;
            }
            BookEarnings {
                id: book.id,
                title: book.title.clone(),
                royalty_per_sale: book.royalty,
                total_sold,
                total_royalty,
            }
        })
        .collect()
}

/// Every sale against any of the author's books, sorted by date descending.
///
/// The sort is stable, so equal dates keep catalog insertion order. Fails
/// with `NotFound` when the author owns zero books; an existing author
/// without books is indistinguishable from an unknown id (kept as-is, see
/// DESIGN.md).
pub fn author_sales(catalog: &Catalog, author_id: AuthorId) -> DomainResult<Vec<SaleView>> {
    let books: Vec<_> = catalog.books_by_author(author_id).collect();
    if books.is_empty() {
        return Err(DomainError::not_found());
    }

    let mut views: Vec<SaleView> = Vec::new();
    for sale in catalog.sales() {
        for book in &books {
            if sale.book_id == book.id {
                views.push(SaleView {
                    book_title: book.title.clone(),
                    quantity: sale.qty,
                    royalty_earned: sale.qty * book.royalty,
                    sale_date: sale.date.clone(),
                });
            }
        }
    }

    views.sort_by(|a, b| b.sale_date.cmp(&a.sale_date));
    Ok(views)
}
