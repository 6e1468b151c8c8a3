use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use crate::error::{DomainError, DomainResult};

/// Opaque identifier owned by the remote backend. Customers and products may be
/// keyed by text (UUIDs, slugs) or by integer primary keys; the value is passed
/// through in whichever shape it arrived.
#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Customer or product identifier, either a string or an integer",
    example = json!("c1")
))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl Identifier {
    /// Empty text and the number zero count as a missing identifier.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Identifier::Number(value) => *value == 0,
            Identifier::Text(value) => value.is_empty(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(value) => write!(f, "{value}"),
            Identifier::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Text(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::Text(value)
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Number(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    pub fn try_new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::InvalidArgument {
                message: format!("quantity must be greater than 0, got {value}"),
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchase request whose inputs have all been checked. The only way to get
/// one is [`PurchaseOrder::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOrder {
    customer_id: Identifier,
    product_id: Identifier,
    quantity: Quantity,
}

impl PurchaseOrder {
    pub fn try_new(
        customer_id: Option<Identifier>,
        product_id: Option<Identifier>,
        quantity: i64,
    ) -> DomainResult<Self> {
        let customer_id = require_identifier("customer_id", customer_id)?;
        let product_id = require_identifier("product_id", product_id)?;
        let quantity = Quantity::try_new(quantity)?;

        Ok(Self {
            customer_id,
            product_id,
            quantity,
        })
    }

    #[must_use]
    pub fn customer_id(&self) -> &Identifier {
        &self.customer_id
    }

    #[must_use]
    pub fn product_id(&self) -> &Identifier {
        &self.product_id
    }

    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
}

fn require_identifier(field: &str, value: Option<Identifier>) -> DomainResult<Identifier> {
    match value {
        Some(id) if !id.is_blank() => Ok(id),
        _ => Err(DomainError::InvalidArgument {
            message: format!("{field} is required"),
        }),
    }
}
