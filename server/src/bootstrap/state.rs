use std::sync::Arc;

use credit_purchase_adapters::{
    outgoing::postgrest_reqwest::rpc_client::PostgrestRpcAdapter,
    shared::app_state::AppState as AdaptersAppState,
};
use credit_purchase_application::{
    error::AppError,
    infrastructure_config::Config,
    ports::{incoming::purchase::PurchaseUseCase, outgoing::remote_procedure::DynRemoteProcedurePort},
    purchase::service::PurchaseService,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub purchase_service: Arc<dyn PurchaseUseCase>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let remote = Self::create_remote_procedure_client(&config)?;
        let purchase_service: Arc<dyn PurchaseUseCase> = Arc::new(PurchaseService::new(remote));

        Ok(Self {
            config,
            purchase_service,
        })
    }

    fn create_remote_procedure_client(config: &Config) -> Result<DynRemoteProcedurePort, AppError> {
        let adapter = PostgrestRpcAdapter::new(&config.backend)?;
        Ok(Arc::new(adapter))
    }

    pub fn to_adapters_state(&self) -> AdaptersAppState {
        AdaptersAppState::new(
            Arc::clone(&self.config),
            Arc::clone(&self.purchase_service),
        )
    }
}
