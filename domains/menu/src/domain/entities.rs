//! Menu entities

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// A dish on the menu
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    pub recipe: String,
    pub image: Option<String>,
    pub category: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Payload for adding a dish
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMenuItem {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(length(max = 4000))]
    #[serde(default)]
    pub recipe: String,

    #[validate(url)]
    pub image: Option<String>,

    #[validate(length(min = 1, max = 60))]
    pub category: String,

    #[validate(custom(function = "valid_price"))]
    pub price: Decimal,
}

/// A dish saved by one user
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Favorite {
    pub id: Uuid,
    pub menu_item_id: Uuid,
    pub email: String,
    pub name: String,
    pub image: Option<String>,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Payload for saving a favorite; the owner comes from the caller's token
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewFavorite {
    pub menu_item_id: Uuid,

    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(url)]
    pub image: Option<String>,

    #[validate(custom(function = "valid_price"))]
    pub price: Decimal,
}

/// Largest price a `NUMERIC(10, 2)` column holds
const MAX_PRICE: Decimal = Decimal::from_parts(0x540B_E3FF, 2, 0, false, 2); // 99_999_999.99

/// Prices must fit the stored `NUMERIC(10, 2)` exactly.
fn valid_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::new("negative_price"));
    }
    if price.normalize().scale() > 2 {
        return Err(ValidationError::new("price_precision"));
    }
    if *price > MAX_PRICE {
        return Err(ValidationError::new("price_too_large"));
    }
    Ok(())
}
