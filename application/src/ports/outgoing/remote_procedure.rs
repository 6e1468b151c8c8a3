use serde_json::Value;
use std::sync::Arc;

use crate::error::AppResult;

/// A named procedure hosted by the backend platform, called with named
/// parameters. Every failure, transport or remote, surfaces as
/// `AppError::RemoteOperationFailed`.
#[async_trait::async_trait]
pub trait RemoteProcedurePort: Send + Sync {
    async fn call(&self, procedure: &str, params: Value) -> AppResult<Value>;
}

pub type DynRemoteProcedurePort = Arc<dyn RemoteProcedurePort>;
