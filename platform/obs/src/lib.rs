use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use once_cell::sync::OnceCell;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{self as sdk, Resource};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: OnceCell<()> = OnceCell::new();

/// Configuration for tracing initialization.
#[derive(Clone, Debug)]
pub struct ObsConfig {
    pub service_name: &'static str,
    pub env_filter: Option<String>,
    /// Plain-text copy of every event, appended to this file.
    pub log_file: Option<PathBuf>,
    pub otlp_endpoint: Option<String>,
}

impl Default for ObsConfig {
    fn default() -> Self {
        Self {
            service_name: "smartinstall",
            env_filter: None,
            log_file: None,
            otlp_endpoint: None,
        }
    }
}

/// `RUST_LOG`, else the configured directive, else `info`.
fn resolve_filter(rust_log: Option<String>, configured: Option<String>) -> String {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .or(configured)
        .unwrap_or_else(|| "info".to_string())
}

/// Install tracing subscribers with an optional log file and OTLP exporter.
pub fn init_tracing(config: ObsConfig) -> Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_new(resolve_filter(
        std::env::var("RUST_LOG").ok(),
        config.env_filter,
    ))?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let file_layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
        }
        None => None,
    };

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(file_layer);

    let otlp_endpoint = config
        .otlp_endpoint
        .or_else(|| std::env::var("OTLP_ENDPOINT").ok());

    if let Some(endpoint) = otlp_endpoint {
        let exporter = SpanExporter::builder()
            .with_http()
            .with_protocol(Protocol::HttpBinary)
            .with_endpoint(endpoint)
            .build()?;

        let resource = Resource::builder()
            .with_service_name(config.service_name)
            .build();

        let provider = sdk::trace::SdkTracerProvider::builder()
            .with_resource(resource)
            .with_batch_exporter(exporter)
            .build();
        let tracer = provider.tracer(config.service_name);

        registry
            .with(tracing_opentelemetry::layer().with_tracer(tracer))
            .try_init()?;
    } else {
        registry.try_init()?;
    }

    INIT.set(())
        .map_err(|_| anyhow!("tracing already initialized"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins_over_configured_directive() {
        assert_eq!(
            resolve_filter(Some("smartinstall::audit=debug".into()), Some("warn".into())),
            "smartinstall::audit=debug"
        );
        assert_eq!(resolve_filter(Some("trace".into()), None), "trace");
    }

    #[test]
    fn configured_directive_then_info() {
        assert_eq!(resolve_filter(None, Some("debug".into())), "debug");
        assert_eq!(resolve_filter(Some("  ".into()), Some("debug".into())), "debug");
        assert_eq!(resolve_filter(None, None), "info");
    }

    #[test]
    fn init_writes_to_log_file_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("smartinstall.log");
        let config = ObsConfig {
            env_filter: Some("info".into()),
            log_file: Some(log_file.clone()),
            ..ObsConfig::default()
        };
        init_tracing(config.clone()).unwrap();
        init_tracing(config).unwrap();

        // Error level passes any filter an operator is likely to set.
        tracing::error!("obs smoke event");
        let contents = std::fs::read_to_string(&log_file).unwrap();
        assert!(contents.contains("obs smoke event"));
    }
}
