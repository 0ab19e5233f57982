//! Catalog of authors, books, and sale events.
//!
//! The catalog is fixed at process start and never mutated afterward; only
//! withdrawals (see `store`) have write traffic.

use serde::{Deserialize, Serialize};

use royalty_core::{AuthorId, BookId, DomainError, DomainResult};

/// An author on the platform, with payout details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub email: String,
    pub bank_account: String,
    pub ifsc: String,
}

/// A published book. `royalty` is the currency amount earned per unit sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author_id: AuthorId,
    pub royalty: i64,
}

/// A sale event. Duplicate (book, date) pairs are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub book_id: BookId,
    pub qty: i64,
    /// ISO calendar date (`YYYY-MM-DD`); lexicographic order is chronological.
    pub date: String,
}

/// Immutable catalog with validated referential integrity.
#[derive(Debug, Clone)]
pub struct Catalog {
    authors: Vec<Author>,
    books: Vec<Book>,
    sales: Vec<Sale>,
}

impl Catalog {
    /// Build a catalog, checking that every book references an existing
    /// author, every sale references an existing book, ids are unique, and
    /// quantities/royalties are non-negative.
    pub fn new(authors: Vec<Author>, books: Vec<Book>, sales: Vec<Sale>) -> DomainResult<Self> {
        for (i, author) in authors.iter().enumerate() {
            if authors[..i].iter().any(|a| a.id == author.id) {
                return Err(DomainError::invariant(format!(
                    "duplicate author id {}",
                    author.id
                )));
            }
        }

        for (i, book) in books.iter().enumerate() {
            if books[..i].iter().any(|b| b.id == book.id) {
                return Err(DomainError::invariant(format!("duplicate book id {}", book.id)));
            }
            if !authors.iter().any(|a| a.id == book.author_id) {
                return Err(DomainError::invariant(format!(
                    "book {} references unknown author {}",
                    book.id, book.author_id
                )));
            }
            if book.royalty < 0 {
                return Err(DomainError::validation(format!(
                    "book {} has negative royalty",
                    book.id
                )));
            }
        }

        for sale in &sales {
            if !books.iter().any(|b| b.id == sale.book_id) {
                return Err(DomainError::invariant(format!(
                    "sale references unknown book {}",
                    sale.book_id
                )));
            }
            if sale.qty < 0 {
                return Err(DomainError::validation(format!(
                    "sale for book {} has negative quantity",
                    sale.book_id
                )));
            }
        }

        Ok(Self {
            authors,
            books,
            sales,
        })
    }

    /// Fixed seed data the process starts with.
    pub fn seed() -> Self {
        let authors = vec![
            author(1, "Priya Sharma", "priya@email.com", "1234567890", "HDFC0001234"),
            author(2, "Rahul Verma", "rahul@email.com", "0987654321", "ICIC0005678"),
            author(3, "Anita Desai", "anita@email.com", "5678901234", "SBIN0009012"),
        ];

        let books = vec![
            book(1, "The Silent River", 1, 45),
            book(2, "Midnight in Mumbai", 1, 60),
            book(3, "Code & Coffee", 2, 75),
            book(4, "Startup Diaries", 2, 50),
            book(5, "Poetry of Pain", 2, 30),
            book(6, "Garden of Words", 3, 40),
        ];

        let sales = vec![
            sale(1, 25, "2025-01-05"),
            sale(1, 40, "2025-01-12"),
            sale(2, 15, "2025-01-08"),
            sale(3, 60, "2025-01-03"),
            sale(3, 45, "2025-01-15"),
            sale(4, 30, "2025-01-10"),
            sale(5, 20, "2025-01-18"),
            sale(6, 10, "2025-01-20"),
        ];

        Self::new(authors, books, sales).expect("seed catalog is internally consistent")
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn books_by_author(&self, author_id: AuthorId) -> impl Iterator<Item = &Book> {
        self.books.iter().filter(move |b| b.author_id == author_id)
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn sales_for_book(&self, book_id: BookId) -> impl Iterator<Item = &Sale> {
        self.sales.iter().filter(move |s| s.book_id == book_id)
    }
}

fn author(id: u64, name: &str, email: &str, bank_account: &str, ifsc: &str) -> Author {
    Author {
        id: AuthorId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        bank_account: bank_account.to_string(),
        ifsc: ifsc.to_string(),
    }
}

fn book(id: u64, title: &str, author_id: u64, royalty: i64) -> Book {
    Book {
        id: BookId::new(id),
        title: title.to_string(),
        author_id: AuthorId::new(author_id),
        royalty,
    }
}

fn sale(book_id: u64, qty: i64, date: &str) -> Sale {
    Sale {
        book_id: BookId::new(book_id),
        qty,
        date: date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_is_consistent() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.authors().len(), 3);
        assert_eq!(catalog.books().len(), 6);
        assert_eq!(catalog.sales().len(), 8);
    }

    #[test]
    fn rejects_book_with_unknown_author() {
        let err = Catalog::new(
            vec![author(1, "A", "a@x", "1", "B1")],
            vec![book(1, "T", 99, 10)],
            vec![],
        )
        .unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("unknown author") => {}
            other => panic!("expected invariant violation, got {other:?}"),
        }
    }

    #[test]
    fn rejects_sale_with_unknown_book() {
        let err = Catalog::new(
            vec![author(1, "A", "a@x", "1", "B1")],
            vec![book(1, "T", 1, 10)],
            vec![sale(42, 1, "2025-01-01")],
        )
        .unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("unknown book") => {}
            other => panic!("expected invariant violation, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_author_ids() {
        let err = Catalog::new(
            vec![author(1, "A", "a@x", "1", "B1"), author(1, "B", "b@x", "2", "B2")],
            vec![],
            vec![],
        )
        .unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("duplicate author id") => {}
            other => panic!("expected invariant violation, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_sale_quantity() {
        let err = Catalog::new(
            vec![author(1, "A", "a@x", "1", "B1")],
            vec![book(1, "T", 1, 10)],
            vec![sale(1, -1, "2025-01-01")],
        )
        .unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("negative quantity") => {}
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
