use serde_json::Value;

use crate::error::AppResult;
use crate::purchase::commands::PurchaseOnCreditCommand;

#[async_trait::async_trait]
pub trait PurchaseUseCase: Send + Sync {
    /// Buys `quantity` units of a product on the customer's credit line.
    ///
    /// Returns the backend's payload as-is. Fails with `InvalidArgument` before
    /// any network activity when the command is incomplete, and with
    /// `RemoteOperationFailed` when the backend rejects the purchase.
    async fn purchase_on_credit(&self, command: PurchaseOnCreditCommand) -> AppResult<Value>;
}
