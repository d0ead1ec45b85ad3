//! Decoding of the product listing body.

use shelf_core::Product;

use crate::error::CatalogResult;

/// Decodes a listing body into products, in the order the endpoint sent them.
///
/// The whole body must be a JSON array of products; a single bad record
/// fails the listing.
pub fn decode_products(body: &str) -> CatalogResult<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(body)?;
    Ok(products)
}
