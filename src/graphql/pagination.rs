//! Page-number pagination for list queries.
//!
//! Every list field takes the same optional `page`/`quantity` arguments.
//! Defaults are applied once here, at the argument boundary, so resolvers
//! never carry their own fallback values.

/// Page used when the `page` argument is omitted.
pub const DEFAULT_PAGE: i32 = 1;

/// Page size used when the `quantity` argument is omitted.
pub const DEFAULT_QUANTITY: i32 = 10;

/// Resolved pagination arguments for a list field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageArgs {
    /// 1-indexed page number.
    pub page: i32,
    /// Number of items per page.
    pub quantity: i32,
}

impl PageArgs {
    /// Apply the documented defaults to optional field arguments.
    pub fn resolve(page: Option<i32>, quantity: Option<i32>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            quantity: quantity.unwrap_or(DEFAULT_QUANTITY),
        }
    }
}

/// Return the window of `items` selected by `args`, preserving order.
///
/// A window starting past the end of `items` is empty. `quantity <= 0`
/// and `page < 1` also yield an empty window rather than an error.
pub fn paginate<T: Clone>(items: &[T], args: PageArgs) -> Vec<T> {
    if args.page < 1 || args.quantity < 1 {
        return Vec::new();
    }

    let start = (args.page as i64 - 1) * args.quantity as i64;
    if start >= items.len() as i64 {
        return Vec::new();
    }

    let start = start as usize;
    let end = start.saturating_add(args.quantity as usize).min(items.len());
    items[start..end].to_vec()
}
