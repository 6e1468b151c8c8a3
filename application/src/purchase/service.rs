use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::AppResult,
    ports::{incoming::purchase::PurchaseUseCase, outgoing::remote_procedure::DynRemoteProcedurePort},
    purchase::commands::{
        PURCHASE_ON_CREDIT_PROCEDURE, PurchaseOnCreditCommand, purchase_on_credit_params,
    },
};
use domain::purchase::PurchaseOrder;

pub struct PurchaseService {
    remote: DynRemoteProcedurePort,
}

impl PurchaseService {
    pub fn new(remote: DynRemoteProcedurePort) -> Self {
        Self { remote }
    }
}

#[async_trait::async_trait]
impl PurchaseUseCase for PurchaseService {
    #[instrument(skip(self))]
    async fn purchase_on_credit(&self, command: PurchaseOnCreditCommand) -> AppResult<Value> {
        let order = PurchaseOrder::try_new(command.customer_id, command.product_id, command.quantity)
            .inspect_err(|e| debug!("Rejected purchase before remote call: {}", e))?;

        let params = purchase_on_credit_params(&order);

        let payload = self
            .remote
            .call(PURCHASE_ON_CREDIT_PROCEDURE, params)
            .await
            .inspect_err(|e| {
                warn!(
                    customer_id = %order.customer_id(),
                    product_id = %order.product_id(),
                    error = %e,
                    "Remote purchase failed"
                );
            })?;

        info!(
            customer_id = %order.customer_id(),
            product_id = %order.product_id(),
            quantity = %order.quantity(),
            "Purchase on credit completed"
        );

        Ok(payload)
    }
}

pub type DynPurchaseUseCase = Arc<dyn PurchaseUseCase>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::ports::outgoing::remote_procedure::RemoteProcedurePort;
    use domain::purchase::Identifier;
    use serde_json::json;
    use std::sync::Mutex;

    struct RecordingRemote {
        calls: Mutex<Vec<(String, Value)>>,
        response: AppResult<Value>,
    }

    impl RecordingRemote {
        fn returning(response: AppResult<Value>) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                response,
            })
        }

        fn calls(&self) -> Vec<(String, Value)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl RemoteProcedurePort for RecordingRemote {
        async fn call(&self, procedure: &str, params: Value) -> AppResult<Value> {
            self.calls
                .lock()
                .unwrap()
                .push((procedure.to_string(), params));
            self.response.clone()
        }
    }

    fn service(remote: &Arc<RecordingRemote>) -> PurchaseService {
        let port: DynRemoteProcedurePort = Arc::clone(remote) as DynRemoteProcedurePort;
        PurchaseService::new(port)
    }

    fn command(
        customer_id: Option<Identifier>,
        product_id: Option<Identifier>,
        quantity: i64,
    ) -> PurchaseOnCreditCommand {
        PurchaseOnCreditCommand {
            customer_id,
            product_id,
            quantity,
        }
    }

    #[tokio::test]
    async fn valid_purchase_calls_remote_once_with_named_params() {
        let remote = RecordingRemote::returning(Ok(json!({"orderId": 42})));
        let service = service(&remote);

        let result = service
            .purchase_on_credit(PurchaseOnCreditCommand::new("c1", "p1", 2))
            .await;

        assert_eq!(result, Ok(json!({"orderId": 42})));
        assert_eq!(
            remote.calls(),
            vec![(
                "purchase_on_credit".to_string(),
                json!({"p_customer_id": "c1", "p_product_id": "p1", "p_quantity": 2})
            )]
        );
    }

    #[tokio::test]
    async fn payload_is_returned_unmodified() {
        let payload = json!({"orderId": 42, "lines": [{"sku": "p1", "qty": 2}], "balance": null});
        let remote = RecordingRemote::returning(Ok(payload.clone()));

        let result = service(&remote)
            .purchase_on_credit(PurchaseOnCreditCommand::new("c1", "p1", 2))
            .await;

        assert_eq!(result, Ok(payload));
    }

    #[tokio::test]
    async fn missing_customer_fails_without_remote_call() {
        let remote = RecordingRemote::returning(Ok(Value::Null));
        let service = service(&remote);

        for cmd in [
            command(None, Some("p1".into()), 2),
            command(Some("".into()), Some("p1".into()), 2),
            command(Some(0_i64.into()), Some("p1".into()), 2),
            command(None, None, -5),
        ] {
            let result = service.purchase_on_credit(cmd).await;
            assert!(matches!(result, Err(AppError::InvalidArgument { .. })));
        }

        assert!(remote.calls().is_empty());
    }

    #[tokio::test]
    async fn missing_product_fails_without_remote_call() {
        let remote = RecordingRemote::returning(Ok(Value::Null));
        let service = service(&remote);

        for cmd in [
            command(Some("c1".into()), None, 2),
            command(Some("c1".into()), Some("".into()), 2),
        ] {
            let result = service.purchase_on_credit(cmd).await;
            assert!(matches!(result, Err(AppError::InvalidArgument { .. })));
        }

        assert!(remote.calls().is_empty());
    }

    #[tokio::test]
    async fn non_positive_quantity_fails_without_remote_call() {
        let remote = RecordingRemote::returning(Ok(Value::Null));
        let service = service(&remote);

        for quantity in [0, -1, i64::MIN] {
            let result = service
                .purchase_on_credit(PurchaseOnCreditCommand::new("c1", "p1", quantity))
                .await;
            assert!(matches!(result, Err(AppError::InvalidArgument { .. })));
        }

        assert!(remote.calls().is_empty());
    }

    #[tokio::test]
    async fn remote_error_message_is_passed_through_verbatim() {
        let remote = RecordingRemote::returning(Err(AppError::RemoteOperationFailed {
            message: "insufficient credit".to_string(),
        }));

        let error = service(&remote)
            .purchase_on_credit(PurchaseOnCreditCommand::new("c1", "p1", 2))
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "insufficient credit");
        assert!(matches!(error, AppError::RemoteOperationFailed { .. }));
        assert_eq!(remote.calls().len(), 1);
    }

    #[tokio::test]
    async fn numeric_identifiers_are_sent_as_numbers() {
        let remote = RecordingRemote::returning(Ok(Value::Null));

        service(&remote)
            .purchase_on_credit(PurchaseOnCreditCommand::new(10_i64, 20_i64, 1))
            .await
            .unwrap();

        let calls = remote.calls();
        assert_eq!(
            calls.first().map(|(_, params)| params.clone()),
            Some(json!({"p_customer_id": 10, "p_product_id": 20, "p_quantity": 1}))
        );
    }
}
