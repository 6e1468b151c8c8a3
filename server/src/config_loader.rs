use credit_purchase_application::error::{AppError, AppResult};
use credit_purchase_application::infrastructure_config::Config;
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use std::fs;
use std::path::Path;
use tracing::info;

const ENV_PREFIX: &str = "CREDIT_PURCHASE_";

// Conventional variable names used by the hosted platform's own tooling.
const PUBLIC_PLATFORM_PREFIX: &str = "NEXT_PUBLIC_SUPABASE_";
const PLATFORM_PREFIX: &str = "SUPABASE_";

pub fn load_config() -> AppResult<Config> {
    generate_env_template_if_missing()?;

    let config: Config = build_figment()
        .extract()
        .map_err(|e| AppError::ConfigError {
            message: format!("Failed to load configuration: {e}"),
        })?;

    config.validate()?;
    Ok(config)
}

/// Later sources win: defaults, `config.toml`, `config.json`, platform
/// variables, then `CREDIT_PURCHASE_*` variables.
fn build_figment() -> Figment {
    let default_config = Config::default();
    let mut figment = Figment::from(Serialized::defaults(default_config));

    if Path::new("config.toml").exists() {
        figment = figment.merge(Toml::file("config.toml"));
    }

    if Path::new("config.json").exists() {
        figment = figment.merge(Json::file("config.json"));
    }

    figment
        .merge(platform_env(PUBLIC_PLATFORM_PREFIX))
        .merge(platform_env(PLATFORM_PREFIX))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

fn platform_env(prefix: &str) -> Env {
    Env::prefixed(prefix)
        .only(&["url", "anon_key"])
        .map(|key| format!("backend.{}", key.as_str()).into())
}

fn generate_env_template_if_missing() -> AppResult<()> {
    let env_file = ".env";
    let template_file = ".env.example";

    if Path::new(env_file).exists() {
        return Ok(());
    }

    if !Path::new(template_file).exists() {
        return Ok(());
    }

    fs::copy(template_file, env_file).map_err(|e| AppError::ConfigError {
        message: format!("Failed to generate .env file from template: {e}"),
    })?;

    info!("Generated .env from template. Please configure your backend URL and key!");
    info!("IMPORTANT: .env contains the backend access key and is gitignored.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use credit_purchase_application::infrastructure_config::LogFormat;
    use figment::Jail;

    #[test]
    fn platform_variables_locate_the_backend() {
        Jail::expect_with(|jail| {
            jail.set_env("SUPABASE_URL", "https://project.supabase.co");
            jail.set_env("SUPABASE_ANON_KEY", "anon-key");

            let config = load_config().map_err(|e| e.to_string())?;

            assert_eq!(config.backend.url, "https://project.supabase.co");
            assert_eq!(config.backend.anon_key(), "anon-key");
            assert_eq!(config.backend.schema, "public");
            Ok(())
        });
    }

    #[test]
    fn public_frontend_variables_are_accepted() {
        Jail::expect_with(|jail| {
            jail.set_env("NEXT_PUBLIC_SUPABASE_URL", "https://front.supabase.co");
            jail.set_env("NEXT_PUBLIC_SUPABASE_ANON_KEY", "front-key");

            let config = load_config().map_err(|e| e.to_string())?;

            assert_eq!(config.backend.url, "https://front.supabase.co");
            assert_eq!(config.backend.anon_key(), "front-key");
            Ok(())
        });
    }

    #[test]
    fn prefixed_variables_override_platform_ones() {
        Jail::expect_with(|jail| {
            jail.set_env("SUPABASE_URL", "https://project.supabase.co");
            jail.set_env("SUPABASE_ANON_KEY", "anon-key");
            jail.set_env("CREDIT_PURCHASE_BACKEND__URL", "https://override.example.com");
            jail.set_env("CREDIT_PURCHASE_BACKEND__SCHEMA", "billing");

            let config = load_config().map_err(|e| e.to_string())?;

            assert_eq!(config.backend.url, "https://override.example.com");
            assert_eq!(config.backend.schema, "billing");
            assert_eq!(config.backend.anon_key(), "anon-key");
            Ok(())
        });
    }

    #[test]
    fn toml_file_is_merged_over_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [backend]
                url = "https://file.supabase.co"
                anon_key = "file-key"
                request_timeout_secs = 5

                [logging]
                level = "debug"
                format = "json"
                include_location = true
                "#,
            )?;

            let config = load_config().map_err(|e| e.to_string())?;

            assert_eq!(config.backend.url, "https://file.supabase.co");
            assert_eq!(config.backend.request_timeout_secs, 5);
            assert!(matches!(config.logging.format, LogFormat::Json));
            assert_eq!(config.server.port, 3000);
            Ok(())
        });
    }

    #[test]
    fn missing_access_key_is_a_config_error() {
        Jail::expect_with(|jail| {
            jail.set_env("SUPABASE_URL", "https://project.supabase.co");

            let result = load_config();

            assert!(matches!(result, Err(AppError::ConfigError { .. })));
            Ok(())
        });
    }

    #[test]
    fn env_file_is_generated_from_template() {
        Jail::expect_with(|jail| {
            jail.create_file(".env.example", "SUPABASE_URL=\n")?;
            jail.set_env("SUPABASE_URL", "https://project.supabase.co");
            jail.set_env("SUPABASE_ANON_KEY", "anon-key");

            load_config().map_err(|e| e.to_string())?;

            assert!(Path::new(".env").exists());
            Ok(())
        });
    }
}
