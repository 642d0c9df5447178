use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{CatalogError, CatalogResult, ValueObject};

/// Price of a product: a non-negative decimal amount plus a currency designator
/// (a symbol such as `$` or an ISO code such as `EUR`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PriceParts")]
pub struct Price {
    amount: Decimal,
    currency: String,
}

#[derive(Deserialize)]
struct PriceParts {
    amount: Decimal,
    currency: String,
}

impl Price {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> CatalogResult<Self> {
        let currency = currency.into();
        if amount < Decimal::ZERO {
            return Err(CatalogError::validation(format!(
                "price amount must not be negative (got {amount})"
            )));
        }
        if currency.trim().is_empty() {
            return Err(CatalogError::validation("currency designator cannot be empty"));
        }
        Ok(Self { amount, currency })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl TryFrom<PriceParts> for Price {
    type Error = CatalogError;

    fn try_from(parts: PriceParts) -> Result<Self, Self::Error> {
        Price::new(parts.amount, parts.currency)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.currency, self.amount)
    }
}

impl ValueObject for Price {}
