use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::ValidationError;

/// Product entity - a line in the inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier, never reused
    #[schema(example = 3)]
    pub id: u64,
    /// Display name, never blank
    #[schema(example = "Widget")]
    pub name: String,
    /// Units in stock
    #[serde(serialize_with = "serialize_number")]
    #[schema(example = 10)]
    pub quantity: f64,
    /// Unit price
    #[serde(serialize_with = "serialize_number")]
    #[schema(example = 19.99)]
    pub price: f64,
}

/// Validated body for create and update.
///
/// Update replaces all three fields, so the same shape serves both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    pub name: String,
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    #[validate(range(min = 0.0))]
    pub price: f64,
}

/// Confirmation returned by delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeletedProduct {
    #[schema(example = "product removed successfully")]
    pub message: String,
    pub product: Product,
}

impl Product {
    pub fn new(id: u64, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            quantity: input.quantity,
            price: input.price,
        }
    }

    /// Overwrite every mutable field; the id is kept.
    pub fn replace_with(&mut self, input: ProductInput) {
        self.name = input.name;
        self.quantity = input.quantity;
        self.price = input.price;
    }
}

impl ProductInput {
    /// Parse and validate an untyped JSON body.
    ///
    /// Presence is checked before type and range: `name` must be a string
    /// that is not blank, and both `quantity` and `price` keys must exist
    /// (an explicit `null` counts as present). Only then must the two numbers
    /// be JSON numbers, strings like `"10"` are not coerced, and be >= 0.
    ///
    /// The name is stored as sent; trimming only decides whether it is blank.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let name = match body.get("name") {
            Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
            _ => return Err(ValidationError::MissingFields),
        };

        let (Some(quantity), Some(price)) = (body.get("quantity"), body.get("price")) else {
            return Err(ValidationError::MissingFields);
        };

        let (Some(quantity), Some(price)) = (quantity.as_f64(), price.as_f64()) else {
            return Err(ValidationError::InvalidNumbers);
        };

        let input = Self {
            name,
            quantity,
            price,
        };

        // Only the numeric ranges are left for the derive to check
        input
            .validate()
            .map_err(|_| ValidationError::InvalidNumbers)?;

        Ok(input)
    }
}

/// Write whole numbers without a fractional part (`10`, not `10.0`), so
/// clients get back the number they sent. Values beyond 2^53 keep the float
/// form since they are no longer exact integers.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Read a path segment as a product id the way a lenient `parseInt` would.
///
/// Leading whitespace and a sign are skipped, then the leading run of ASCII
/// digits is taken and anything after it ignored (`"12abc"` is 12). Returns
/// `None` when there are no digits, the value overflows, or it is negative:
/// none of those can name a stored product.
pub fn parse_product_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let value: u64 = unsigned[..end].parse().ok()?;

    if negative && value != 0 {
        return None;
    }
    Some(value)
}
