//! The built-in Shopify field mapping.
//!
//! Shopify product records index variant data as parallel arrays:
//! `variant_ids`, `variant_prices`, and `variant_image_ids` line up by
//! index, while `image_ids` and `image_urls` describe the product's
//! image catalog. The derivations here join those arrays so the
//! results UI gets per-variant images and prices that line up with
//! each other.

use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::fields::{FieldDictionary, FieldSource};

static SHOPIFY_FIELDS: Lazy<FieldDictionary> = Lazy::new(|| {
    let mut fields = FieldDictionary::new();
    fields.insert("url", FieldSource::Template("/products/${handle}".into()));
    fields.insert("subtitle", FieldSource::Field("vendor".into()));
    fields.insert("description", FieldSource::Field("body_html".into()));
    fields.insert("quantity", FieldSource::Field("inventory_quantity".into()));
    fields.insert("image", FieldSource::Derived(derive_image));
    fields.insert("price", FieldSource::Derived(derive_price));
    fields.insert("originalPrice", FieldSource::Derived(derive_original_price));
    fields
});

/// The standard display-key mapping for Shopify product records.
pub fn shopify_field_mapping() -> FieldDictionary {
    SHOPIFY_FIELDS.clone()
}

/// Image URLs resolved per variant index.
///
/// Built once per record and shared by the image and price projections
/// so they agree on which variants have an image.
struct VariantImages {
    urls: Vec<Option<String>>,
    has_associations: bool,
}

impl VariantImages {
    /// True when the record carries no usable variant/image joins: no
    /// `variant_image_ids` array at all, or none of its entries lead
    /// to a catalog image.
    fn is_unresolved(&self) -> bool {
        !self.has_associations || self.urls.iter().all(Option::is_none)
    }
}

/// Follows `variant_image_ids[i]` into `image_ids` and picks the URL
/// at the matched position. Ids compare as raw JSON values, so string
/// and numeric id schemes both work as long as the record is
/// consistent.
fn resolve_variant_images(record: &Value) -> VariantImages {
    let variant_count = record
        .get("variant_ids")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    let image_ids = record.get("image_ids").and_then(Value::as_array);
    let image_urls = record.get("image_urls").and_then(Value::as_array);
    let associations = record.get("variant_image_ids").and_then(Value::as_array);

    let urls = (0..variant_count)
        .map(|index| {
            let image_id = associations?.get(index)?;
            let position = image_ids?.iter().position(|id| id == image_id)?;
            image_urls?.get(position)?.as_str().map(str::to_string)
        })
        .collect();
    VariantImages {
        urls,
        has_associations: associations.is_some(),
    }
}

/// Image list for the results UI.
///
/// Without variant/image joins this falls back to the first two
/// catalog images (the second backs the hover state). With joins it
/// prepends an empty-list placeholder so variant positions stay
/// one-based, then lists each resolved variant image.
pub fn derive_image(record: &Value) -> Value {
    let images = match record.get("image_urls").and_then(Value::as_array) {
        Some(images) if !images.is_empty() => images,
        _ => return json!([]),
    };
    let resolved = resolve_variant_images(record);
    if resolved.is_unresolved() {
        return Value::Array(images.iter().take(2).cloned().collect());
    }
    let mut items = vec![json!([])];
    items.extend(
        resolved
            .urls
            .iter()
            .flatten()
            .map(|url| Value::String(url.clone())),
    );
    Value::Array(items)
}

/// Selling prices aligned with [`derive_image`]'s output.
pub fn derive_price(record: &Value) -> Value {
    price_projection(record, "variant_prices")
}

/// Compare-at prices aligned with [`derive_image`]'s output.
pub fn derive_original_price(record: &Value) -> Value {
    price_projection(record, "variant_compare_at_prices")
}

/// Without variant/image joins the raw price list passes through
/// untouched. With joins, prices keep the same one-based placeholder
/// and only the indices that resolved an image survive, so price N
/// always describes image N.
fn price_projection(record: &Value, field: &str) -> Value {
    let prices: &[Value] = record
        .get(field)
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice);
    let resolved = resolve_variant_images(record);
    if resolved.is_unresolved() {
        return Value::Array(prices.to_vec());
    }
    let mut items = vec![json!([])];
    items.extend(prices.iter().enumerate().filter_map(|(index, price)| {
        let has_image = matches!(resolved.urls.get(index), Some(Some(_)));
        (has_image && is_truthy(price)).then(|| price.clone())
    }));
    Value::Array(items)
}

/// JavaScript-style truthiness, used to drop blank price slots.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
