//! Category query sent to the catalog endpoint.

use serde::Serialize;

/// Largest `Int` GraphQL accepts. Used as the page size so a single request
/// covers the whole category.
pub const GQL_MAX_INT: i64 = 2_147_483_647;

/// GraphQL document fetching every product of a category in one store.
pub const CATEGORY_QUERY: &str = "\
query Category($storeId: Int!, $slug: String!, $inStock: Boolean, $from: Int!, $size: Int!) {
    category(storeId: $storeId, slug: $slug, inStock: $inStock) {
        products(from: $from, size: $size) {
            id
            name
            url
            stocks {
                prices {
                    price
                    old_price
                }
            }
            manufacturer {
                name
            }
        }
    }
}";

/// POST body for the catalog endpoint: the query document plus its
/// variables. Serialized as-is into the request body.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryQuery {
    pub query: String,
    pub variables: QueryVariables,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryVariables {
    #[serde(rename = "storeId")]
    pub store_id: i64,
    pub slug: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
    pub from: i64,
    pub size: i64,
}

impl CategoryQuery {
    /// Builds the category query for one store. `from` is always 0 — there
    /// is no pagination, only one oversized page.
    #[must_use]
    pub fn for_store(store_id: i64, slug: &str, in_stock: bool, size: i64) -> Self {
        Self {
            query: CATEGORY_QUERY.to_owned(),
            variables: QueryVariables {
                store_id,
                slug: slug.to_owned(),
                in_stock,
                from: 0,
                size,
            },
        }
    }
}
