//! Normalization from raw catalog products to [`metrocollect_core::ProductRecord`].

use metrocollect_core::ProductRecord;

use crate::types::RawProduct;

/// Normalizes one raw catalog product.
///
/// Pricing reads `stocks[0]` only; further stock records are ignored.
/// `old_price` is set only while a promotion is active, so:
/// - `old_price == None` → `regular_price = price`, no promotional price;
/// - `old_price == Some` → it is the standing price, and the current lower
///   `price` is the promotional one.
///
/// The product URL is the storefront origin concatenated with the relative
/// path exactly as received — no slash normalization.
#[must_use]
pub fn normalize_product(product: RawProduct, site_origin: &str) -> ProductRecord {
    let (regular_price, promotional_price) = match product.stocks.first() {
        Some(stock) => match stock.prices.old_price {
            None => (stock.prices.price, None),
            Some(old_price) => (Some(old_price), stock.prices.price),
        },
        // No stock record at all; keep the product with both prices unset.
        None => (None, None),
    };

    ProductRecord {
        id: product.id.into_string(),
        name: product.name,
        url: format!("{site_origin}{}", product.url),
        regular_price,
        promotional_price,
        brand: product.manufacturer.name,
    }
}
