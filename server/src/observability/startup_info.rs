use credit_purchase_application::infrastructure_config::{BackendConfig, Config};
use tracing::info;

pub fn print_api_info(config: &Config) {
    print_api_endpoints(config);
    print_backend_configuration(&config.backend);
}

fn print_api_endpoints(config: &Config) {
    let base_url = format!("http://{}", config.server_address());
    info!("📋 API:");
    info!("  🛒 Purchase on credit: POST {}/purchases", base_url);
    info!("  ❤️  Health: GET {}/health", base_url);
    if cfg!(feature = "docs") {
        info!("  📖 Swagger UI: {}/docs", base_url);
        info!("  📄 OpenAPI JSON: {}/api-docs/openapi.json", base_url);
    }
}

fn print_backend_configuration(backend: &BackendConfig) {
    info!("⚙️  Backend:");
    info!("  🔗 RPC base: {}/rest/v1/rpc", backend.redacted_url().trim_end_matches('/'));
    info!("  🗂️  Schema: {}", backend.schema);
    info!("  ⏱️  Request timeout: {}s", backend.request_timeout_secs);
}
