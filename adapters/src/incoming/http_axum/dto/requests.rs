use domain::purchase::Identifier;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use credit_purchase_application::purchase::commands::PurchaseOnCreditCommand;

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Request to buy a product on the customer's credit line. Identifiers may be strings or integers; quantity must be positive.",
    example = json!({
        "customer_id": "c1",
        "product_id": "p1",
        "quantity": 2
    })
))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    #[serde(default, deserialize_with = "falsy_as_absent")]
    pub customer_id: Option<Identifier>,
    #[serde(default, deserialize_with = "falsy_as_absent")]
    pub product_id: Option<Identifier>,
    #[cfg_attr(feature = "docs", schema(example = 2, minimum = 1))]
    pub quantity: i64,
}

/// `null` and `false` mean "not provided"; the use case reports them as missing.
fn falsy_as_absent<'de, D>(deserializer: D) -> Result<Option<Identifier>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(None),
        value => Identifier::deserialize(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl From<PurchaseRequest> for PurchaseOnCreditCommand {
    fn from(request: PurchaseRequest) -> Self {
        PurchaseOnCreditCommand {
            customer_id: request.customer_id,
            product_id: request.product_id,
            quantity: request.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_false_identifiers_are_absent() {
        let request: PurchaseRequest = serde_json::from_value(json!({
            "customer_id": false,
            "product_id": null,
            "quantity": 1
        }))
        .unwrap();

        assert_eq!(request.customer_id, None);
        assert_eq!(request.product_id, None);
    }

    #[test]
    fn text_and_numeric_identifiers_are_kept() {
        let request: PurchaseRequest = serde_json::from_value(json!({
            "customer_id": "c1",
            "product_id": 0,
            "quantity": 1
        }))
        .unwrap();

        assert_eq!(request.customer_id, Some(Identifier::Text("c1".to_string())));
        assert_eq!(request.product_id, Some(Identifier::Number(0)));
    }

    #[test]
    fn true_is_not_an_identifier() {
        let result = serde_json::from_value::<PurchaseRequest>(json!({
            "customer_id": true,
            "product_id": "p1",
            "quantity": 1
        }));

        assert!(result.is_err());
    }
}
