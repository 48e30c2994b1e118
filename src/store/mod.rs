//! In-memory catalog store.
//!
//! The catalog is built once at startup and never mutated afterwards;
//! resolvers read it through an `Arc` shared in the GraphQL context.
//! All lookups are linear scans, which is fine at demo-catalog scale.

pub mod seed;

pub use seed::{SeedConfig, seed_catalog};

/// A generated author record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub bio: String,
}

/// A generated publisher record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherRecord {
    pub id: i32,
    pub name: String,
}

/// A generated book record.
///
/// `author_ids` is deduplicated at generation time but is not guaranteed
/// to reference existing authors; lookups must tolerate dangling ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub id: i32,
    pub title: String,
    pub isbn: i32,
    pub author_ids: Vec<i32>,
    pub publisher_id: i32,
}

/// Immutable in-memory collections of authors, publishers, and books.
///
/// Collections are stored in generation order (ascending id) and every
/// read method preserves that order.
#[derive(Debug, Default)]
pub struct Catalog {
    authors: Vec<AuthorRecord>,
    publishers: Vec<PublisherRecord>,
    books: Vec<BookRecord>,
}

impl Catalog {
    pub fn new(
        authors: Vec<AuthorRecord>,
        publishers: Vec<PublisherRecord>,
        books: Vec<BookRecord>,
    ) -> Self {
        Self {
            authors,
            publishers,
            books,
        }
    }

    pub fn authors(&self) -> &[AuthorRecord] {
        &self.authors
    }

    pub fn publishers(&self) -> &[PublisherRecord] {
        &self.publishers
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn author_by_id(&self, id: i32) -> Option<&AuthorRecord> {
        self.authors.iter().find(|a| a.id == id)
    }

    pub fn publisher_by_id(&self, id: i32) -> Option<&PublisherRecord> {
        self.publishers.iter().find(|p| p.id == id)
    }

    /// Books crediting the given author, in catalog order.
    pub fn books_by_author(&self, author_id: i32) -> Vec<&BookRecord> {
        self.books
            .iter()
            .filter(|b| b.author_ids.contains(&author_id))
            .collect()
    }

    /// Books released by the given publisher, in catalog order.
    pub fn books_by_publisher(&self, publisher_id: i32) -> Vec<&BookRecord> {
        self.books
            .iter()
            .filter(|b| b.publisher_id == publisher_id)
            .collect()
    }

    /// Authors for the given id list, preserving the list's order.
    ///
    /// Ids with no matching author are silently dropped.
    pub fn authors_by_ids(&self, ids: &[i32]) -> Vec<&AuthorRecord> {
        ids.iter().filter_map(|id| self.author_by_id(*id)).collect()
    }

    /// True when every collection holds at least one record.
    pub fn is_populated(&self) -> bool {
        !self.authors.is_empty() && !self.publishers.is_empty() && !self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(id: i32) -> AuthorRecord {
        AuthorRecord {
            id,
            name: format!("author {id}"),
            email: format!("author{id}@example.com"),
            bio: String::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![author(1), author(2), author(3)],
            vec![PublisherRecord {
                id: 1,
                name: "house".into(),
            }],
            vec![
                BookRecord {
                    id: 1,
                    title: "first".into(),
                    isbn: 100_001,
                    author_ids: vec![1, 2],
                    publisher_id: 1,
                },
                BookRecord {
                    id: 2,
                    title: "second".into(),
                    isbn: 100_002,
                    author_ids: vec![3],
                    publisher_id: 1,
                },
            ],
        )
    }

    #[test]
    fn books_by_author_matches_credited_books_only() {
        let catalog = catalog();
        let books: Vec<i32> = catalog.books_by_author(1).iter().map(|b| b.id).collect();
        assert_eq!(books, vec![1]);
        assert!(catalog.books_by_author(42).is_empty());
    }

    #[test]
    fn books_by_publisher_preserves_catalog_order() {
        let catalog = catalog();
        let books: Vec<i32> = catalog.books_by_publisher(1).iter().map(|b| b.id).collect();
        assert_eq!(books, vec![1, 2]);
    }

    #[test]
    fn authors_by_ids_drops_dangling_ids_and_keeps_order() {
        let catalog = catalog();
        let authors: Vec<i32> = catalog
            .authors_by_ids(&[2, 99, 1])
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(authors, vec![2, 1]);
    }

    #[test]
    fn lookups_return_none_for_unknown_ids() {
        let catalog = catalog();
        assert!(catalog.author_by_id(99).is_none());
        assert!(catalog.publisher_by_id(99).is_none());
    }
}
