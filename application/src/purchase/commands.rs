use serde_json::{Value, json};

use domain::purchase::{Identifier, PurchaseOrder};

pub const PURCHASE_ON_CREDIT_PROCEDURE: &str = "purchase_on_credit";

/// Unvalidated input for a credit purchase. Identifiers are optional so that
/// callers can hand over whatever they received; the service decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOnCreditCommand {
    pub customer_id: Option<Identifier>,
    pub product_id: Option<Identifier>,
    pub quantity: i64,
}

impl PurchaseOnCreditCommand {
    pub fn new(
        customer_id: impl Into<Identifier>,
        product_id: impl Into<Identifier>,
        quantity: i64,
    ) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
            product_id: Some(product_id.into()),
            quantity,
        }
    }
}

pub fn purchase_on_credit_params(order: &PurchaseOrder) -> Value {
    json!({
        "p_customer_id": order.customer_id(),
        "p_product_id": order.product_id(),
        "p_quantity": order.quantity().get(),
    })
}
