use super::prelude::*;

#[derive(Default)]
pub struct BookQueries;

#[Object]
impl BookQueries {
    /// List books in catalog order
    async fn books(
        &self,
        ctx: &Context<'_>,
        page: Option<i32>,
        quantity: Option<i32>,
    ) -> Result<Vec<Book>> {
        let catalog = ctx.data_unchecked::<Arc<Catalog>>();
        let args = PageArgs::resolve(page, quantity);

        Ok(paginate(catalog.books(), args)
            .iter()
            .map(book_record_to_graphql)
            .collect())
    }
}
