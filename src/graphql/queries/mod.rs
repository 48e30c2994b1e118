pub mod authors;
pub mod books;
pub mod publishers;

pub use authors::AuthorQueries;
pub use books::BookQueries;
pub use publishers::PublisherQueries;

pub(crate) mod prelude {
    pub(crate) use std::sync::Arc;

    pub(crate) use async_graphql::{Context, Object, Result};

    pub(crate) use crate::graphql::helpers::*;
    pub(crate) use crate::graphql::pagination::{PageArgs, paginate};
    pub(crate) use crate::graphql::types::*;
    pub(crate) use crate::store::Catalog;
}
