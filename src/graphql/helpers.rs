// Helper functions shared across GraphQL query modules.

use crate::graphql::types::{Author, Book, Publisher};
use crate::store::{AuthorRecord, BookRecord, PublisherRecord};

/// Convert an AuthorRecord from the catalog to a GraphQL Author type
pub(crate) fn author_record_to_graphql(r: &AuthorRecord) -> Author {
    Author {
        id: r.id,
        name: r.name.clone(),
        email: r.email.clone(),
        bio: r.bio.clone(),
    }
}

/// Convert a PublisherRecord from the catalog to a GraphQL Publisher type
pub(crate) fn publisher_record_to_graphql(r: &PublisherRecord) -> Publisher {
    Publisher {
        id: r.id,
        name: r.name.clone(),
    }
}

/// Convert a BookRecord from the catalog to a GraphQL Book type
pub(crate) fn book_record_to_graphql(r: &BookRecord) -> Book {
    Book {
        id: r.id,
        title: r.title.clone(),
        isbn: r.isbn,
        author_ids: r.author_ids.clone(),
        publisher_id: r.publisher_id,
    }
}
