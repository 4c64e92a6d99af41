use std::fmt;

use rust_decimal::Decimal;

use crate::category::models::Category;
use crate::category::models::CategoryId;
use crate::product::errors::DescriptionError;
use crate::product::errors::PriceError;
use crate::product::errors::ProductIdError;
use crate::product::errors::ProductNameError;
use crate::product::errors::QuantityError;

/// Persisted product. The category is held by reference only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: Price,
    pub quantity: Quantity,
    pub description: Description,
    pub category_id: CategoryId,
}

impl Product {
    /// Overwrite every mutable field, keeping the id.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.price = fields.price;
        self.quantity = fields.quantity;
        self.description = fields.description;
        self.category_id = fields.category_id;
    }
}

/// Every mutable product field: the payload of both create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub name: ProductName,
    pub price: Price,
    pub quantity: Quantity,
    pub description: Description,
    pub category_id: CategoryId,
}

impl ProductFields {
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            description: self.description,
            category_id: self.category_id,
        }
    }
}

/// Product together with its resolved category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub id: ProductId,
    pub name: ProductName,
    pub price: Price,
    pub quantity: Quantity,
    pub description: Description,
    pub category: Category,
}

impl ProductView {
    pub fn new(product: Product, category: Category) -> Self {
        debug_assert_eq!(product.category_id, category.id);

        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            quantity: product.quantity,
            description: product.description,
            category,
        }
    }
}

/// Store-assigned product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub i64);

impl ProductId {
    /// # Errors
    /// * `InvalidFormat` - String is not a decimal integer
    pub fn from_string(s: &str) -> Result<Self, ProductIdError> {
        s.parse::<i64>()
            .map(ProductId)
            .map_err(|e| ProductIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Product name, non-blank and at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    const MAX_LENGTH: usize = 255;

    pub fn new(name: String) -> Result<Self, ProductNameError> {
        if name.trim().is_empty() {
            return Err(ProductNameError::Empty);
        }

        let length = name.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ProductNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-negative unit price with at most two decimals and seventeen integer
/// digits, so every accepted value is stored exactly. Defaults to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Price(Decimal);

impl Price {
    const MAX_SCALE: u32 = 2;
    const INTEGER_DIGITS: u32 = 17;

    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative(amount.to_string()));
        }

        // trailing zeros do not count: 9.990 is 9.99
        let scale = amount.normalize().scale();
        if scale > Self::MAX_SCALE {
            return Err(PriceError::TooManyDecimals {
                max: Self::MAX_SCALE,
                actual: scale,
            });
        }

        let max = Decimal::from(10_i64.pow(Self::INTEGER_DIGITS));
        if amount >= max {
            return Err(PriceError::TooLarge {
                max: max.to_string(),
                actual: amount.to_string(),
            });
        }

        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

/// Non-negative stock count. Defaults to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Quantity(i32);

impl Quantity {
    pub fn new(quantity: i32) -> Result<Self, QuantityError> {
        if quantity < 0 {
            return Err(QuantityError::Negative(quantity));
        }

        Ok(Self(quantity))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Free-text description, at most 500 characters. Defaults to empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Description(String);

impl Description {
    const MAX_LENGTH: usize = 500;

    pub fn new(description: String) -> Result<Self, DescriptionError> {
        let length = description.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(DescriptionError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(description))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
