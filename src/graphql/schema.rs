//! GraphQL schema definition
//!
//! This is the single API surface for the Bookshelf backend. The catalog
//! never changes after startup, so the mutation and subscription roots
//! are empty.

use std::sync::Arc;

use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

use crate::store::Catalog;

use super::queries::{AuthorQueries, BookQueries, PublisherQueries};

/// The GraphQL schema type
pub type BookshelfSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Root query type combining the per-entity query modules
#[derive(MergedObject, Default)]
pub struct QueryRoot(AuthorQueries, PublisherQueries, BookQueries);

/// Build the GraphQL schema with the catalog attached to the context
pub fn build_schema(catalog: Arc<Catalog>) -> BookshelfSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(catalog)
        .finish()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::store::{AuthorRecord, BookRecord, PublisherRecord, SeedConfig, seed_catalog};

    use super::*;

    fn author(id: i32, name: &str) -> AuthorRecord {
        AuthorRecord {
            id,
            name: name.to_string(),
            email: format!("{name}@example.com"),
            bio: format!("{name} bio"),
        }
    }

    fn book(id: i32, title: &str, author_ids: &[i32], publisher_id: i32) -> BookRecord {
        BookRecord {
            id,
            title: title.to_string(),
            isbn: 100_000 + id,
            author_ids: author_ids.to_vec(),
            publisher_id,
        }
    }

    /// Three authors, one publisher, two books.
    fn fixture_schema() -> BookshelfSchema {
        let catalog = Catalog::new(
            vec![author(1, "ada"), author(2, "brin"), author(3, "cole")],
            vec![PublisherRecord {
                id: 1,
                name: "north house".to_string(),
            }],
            vec![
                book(1, "book a", &[1, 2], 1),
                book(2, "book b", &[3], 1),
            ],
        );
        build_schema(Arc::new(catalog))
    }

    async fn execute(schema: &BookshelfSchema, query: &str) -> serde_json::Value {
        let response = schema.execute(query).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        response.data.into_json().expect("response data is json")
    }

    #[tokio::test]
    async fn root_listings_return_whole_catalog_under_default_page_size() {
        let schema = fixture_schema();
        let data = execute(&schema, "{ authors { id } publishers { id } books { id } }").await;
        assert_eq!(
            data,
            json!({
                "authors": [{"id": 1}, {"id": 2}, {"id": 3}],
                "publishers": [{"id": 1}],
                "books": [{"id": 1}, {"id": 2}],
            })
        );
    }

    #[tokio::test]
    async fn author_books_returns_only_credited_books() {
        let schema = fixture_schema();
        let data = execute(
            &schema,
            "{ authors(page: 1, quantity: 1) { id books(page: 1, quantity: 10) { id } } }",
        )
        .await;
        assert_eq!(
            data,
            json!({"authors": [{"id": 1, "books": [{"id": 1}]}]})
        );
    }

    #[tokio::test]
    async fn publisher_books_page_through_in_catalog_order() {
        let schema = fixture_schema();
        let data = execute(
            &schema,
            "{ publishers { \
                first: books(page: 1, quantity: 1) { id } \
                second: books(page: 2, quantity: 1) { id } \
                third: books(page: 3, quantity: 1) { id } } }",
        )
        .await;
        assert_eq!(
            data,
            json!({
                "publishers": [{
                    "first": [{"id": 1}],
                    "second": [{"id": 2}],
                    "third": [],
                }],
            })
        );
    }

    #[tokio::test]
    async fn book_authors_follow_stored_id_order() {
        let schema = fixture_schema();
        let data = execute(
            &schema,
            "{ books(page: 1, quantity: 1) { authors { id name } } }",
        )
        .await;
        assert_eq!(
            data,
            json!({
                "books": [{
                    "authors": [
                        {"id": 1, "name": "ada"},
                        {"id": 2, "name": "brin"},
                    ],
                }],
            })
        );
    }

    #[tokio::test]
    async fn book_exposes_raw_record_fields_and_publisher() {
        let schema = fixture_schema();
        let data = execute(
            &schema,
            "{ books(page: 2, quantity: 1) { id title isbn author_ids publisher_id publisher { name } } }",
        )
        .await;
        assert_eq!(
            data,
            json!({
                "books": [{
                    "id": 2,
                    "title": "book b",
                    "isbn": 100_002,
                    "author_ids": [3],
                    "publisher_id": 1,
                    "publisher": {"name": "north house"},
                }],
            })
        );
    }

    #[tokio::test]
    async fn dangling_references_degrade_to_empty_results() {
        let catalog = Catalog::new(
            vec![author(1, "ada")],
            vec![PublisherRecord {
                id: 1,
                name: "north house".to_string(),
            }],
            vec![book(1, "orphaned", &[1, 99], 7)],
        );
        let schema = build_schema(Arc::new(catalog));

        let data = execute(
            &schema,
            "{ books { authors { id } publisher { id } } }",
        )
        .await;
        assert_eq!(
            data,
            json!({"books": [{"authors": [{"id": 1}], "publisher": null}]})
        );
    }

    #[tokio::test]
    async fn page_far_past_the_end_is_empty_not_an_error() {
        let schema = fixture_schema();
        let data = execute(&schema, "{ books(page: 100, quantity: 10) { id } }").await;
        assert_eq!(data, json!({"books": []}));
    }

    #[tokio::test]
    async fn repeated_queries_return_identical_results() {
        let schema = fixture_schema();
        let query = "{ authors { id name email bio books { id } } }";
        let first = execute(&schema, query).await;
        let second = execute(&schema, query).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn seeded_catalog_lists_default_page_of_ten() {
        let catalog = seed_catalog(&SeedConfig {
            authors: 5,
            publishers: 2,
            books: 12,
            rng_seed: Some(42),
        });
        let schema = build_schema(Arc::new(catalog));

        let data = execute(&schema, "{ books { id } }").await;
        let ids: Vec<i64> = data["books"]
            .as_array()
            .expect("books array")
            .iter()
            .map(|b| b["id"].as_i64().expect("book id"))
            .collect();
        assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
    }
}
