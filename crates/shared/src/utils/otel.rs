use anyhow::{Context, Result};
use opentelemetry_otlp::{LogExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, logs::SdkLoggerProvider};

/// OTLP log export, enabled only when a collector endpoint is configured.
pub struct Telemetry {
    service_name: String,
    logger_provider: Option<SdkLoggerProvider>,
}

impl Telemetry {
    pub fn new(service_name: impl Into<String>, otel_endpoint: Option<&str>) -> Result<Self> {
        let service_name = service_name.into();

        let logger_provider = match otel_endpoint {
            Some(endpoint) => {
                let exporter = LogExporter::builder()
                    .with_tonic()
                    .with_endpoint(endpoint.to_string())
                    .build()
                    .context("Failed to create OTLP log exporter")?;

                let resource = Resource::builder()
                    .with_service_name(service_name.clone())
                    .build();

                Some(
                    SdkLoggerProvider::builder()
                        .with_resource(resource)
                        .with_batch_exporter(exporter)
                        .build(),
                )
            }
            None => None,
        };

        Ok(Self {
            service_name,
            logger_provider,
        })
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn logger_provider(&self) -> Option<&SdkLoggerProvider> {
        self.logger_provider.as_ref()
    }

    pub fn shutdown(self) -> Result<()> {
        if let Some(provider) = self.logger_provider {
            provider
                .shutdown()
                .map_err(|e| anyhow::anyhow!("Failed to shutdown logger provider: {e}"))?;
        }

        Ok(())
    }
}
