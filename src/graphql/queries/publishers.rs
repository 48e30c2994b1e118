use super::prelude::*;

#[derive(Default)]
pub struct PublisherQueries;

#[Object]
impl PublisherQueries {
    /// List publishers in catalog order
    async fn publishers(
        &self,
        ctx: &Context<'_>,
        page: Option<i32>,
        quantity: Option<i32>,
    ) -> Result<Vec<Publisher>> {
        let catalog = ctx.data_unchecked::<Arc<Catalog>>();
        let args = PageArgs::resolve(page, quantity);

        Ok(paginate(catalog.publishers(), args)
            .iter()
            .map(publisher_record_to_graphql)
            .collect())
    }
}
