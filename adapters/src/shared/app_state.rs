use std::sync::Arc;

use credit_purchase_application::{
    infrastructure_config::Config, ports::incoming::purchase::PurchaseUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub purchase_use_case: Arc<dyn PurchaseUseCase>,
}

impl AppState {
    pub fn new(config: Arc<Config>, purchase_use_case: Arc<dyn PurchaseUseCase>) -> Self {
        Self {
            config,
            purchase_use_case,
        }
    }
}
