use super::prelude::*;

#[derive(Default)]
pub struct AuthorQueries;

#[Object]
impl AuthorQueries {
    /// List authors in catalog order
    async fn authors(
        &self,
        ctx: &Context<'_>,
        page: Option<i32>,
        quantity: Option<i32>,
    ) -> Result<Vec<Author>> {
        let catalog = ctx.data_unchecked::<Arc<Catalog>>();
        let args = PageArgs::resolve(page, quantity);

        Ok(paginate(catalog.authors(), args)
            .iter()
            .map(author_record_to_graphql)
            .collect())
    }
}
