//! GraphQL type definitions
//!
//! These types mirror the catalog records but are decorated with
//! async-graphql attributes. Relationship fields live in the
//! `ComplexObject` impls and read the shared catalog from the context.
//! The `author_ids`/`publisher_id` fields keep their snake_case wire
//! names to match the raw record shape they expose.

use std::sync::Arc;

use async_graphql::{ComplexObject, Context, Result, SimpleObject};

use crate::store::Catalog;

use super::helpers::{
    author_record_to_graphql, book_record_to_graphql, publisher_record_to_graphql,
};
use super::pagination::{PageArgs, paginate};

/// An author of one or more books
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub bio: String,
}

#[ComplexObject]
impl Author {
    /// Books crediting this author, in catalog order
    async fn books(
        &self,
        ctx: &Context<'_>,
        page: Option<i32>,
        quantity: Option<i32>,
    ) -> Result<Vec<Book>> {
        let catalog = ctx.data_unchecked::<Arc<Catalog>>();
        let args = PageArgs::resolve(page, quantity);

        let records = catalog.books_by_author(self.id);
        Ok(paginate(&records, args)
            .into_iter()
            .map(book_record_to_graphql)
            .collect())
    }
}

/// A publishing house
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Publisher {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Publisher {
    /// Books released by this publisher, in catalog order
    async fn books(
        &self,
        ctx: &Context<'_>,
        page: Option<i32>,
        quantity: Option<i32>,
    ) -> Result<Vec<Book>> {
        let catalog = ctx.data_unchecked::<Arc<Catalog>>();
        let args = PageArgs::resolve(page, quantity);

        let records = catalog.books_by_publisher(self.id);
        Ok(paginate(&records, args)
            .into_iter()
            .map(book_record_to_graphql)
            .collect())
    }
}

/// A book in the catalog
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub isbn: i32,
    /// Raw author ids as stored on the record; may contain dangling ids
    #[graphql(name = "author_ids")]
    pub author_ids: Vec<i32>,
    /// Raw publisher id as stored on the record
    #[graphql(name = "publisher_id")]
    pub publisher_id: i32,
}

#[ComplexObject]
impl Book {
    /// Credited authors in stored id order; dangling ids are skipped
    async fn authors(
        &self,
        ctx: &Context<'_>,
        page: Option<i32>,
        quantity: Option<i32>,
    ) -> Result<Vec<Author>> {
        let catalog = ctx.data_unchecked::<Arc<Catalog>>();
        let args = PageArgs::resolve(page, quantity);

        let records = catalog.authors_by_ids(&self.author_ids);
        Ok(paginate(&records, args)
            .into_iter()
            .map(author_record_to_graphql)
            .collect())
    }

    /// Publisher of this book, or null for a dangling publisher id
    async fn publisher(&self, ctx: &Context<'_>) -> Result<Option<Publisher>> {
        let catalog = ctx.data_unchecked::<Arc<Catalog>>();
        Ok(catalog
            .publisher_by_id(self.publisher_id)
            .map(publisher_record_to_graphql))
    }
}
