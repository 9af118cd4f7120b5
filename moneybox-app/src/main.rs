//! # Moneybox Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the account repository and the alert worker
//! - Create the moneybox service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moneybox_hex::{MoneyboxService, inbound::HttpServer};
use moneybox_repo::{NotificationWorker, QueuedNotifier, build_repo};

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Endpoint comes from OTEL_EXPORTER_OTLP_ENDPOINT
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("moneybox-service"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = config::Config::from_env()?;

    // OpenTelemetry export is opt-in
    let otel = match config.otlp_endpoint {
        Some(_) => Some(init_tracer()?),
        None => None,
    };
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,moneybox_app=debug,moneybox_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    tracing::info!("Starting moneybox server on port {}", config.port);
    tracing::info!("Pay in limit: {}", config.pay_in_limit);

    let repo = build_repo(config.pay_in_limit, config.seed_file.as_deref()).await?;

    // The worker stops once the service, and with it the notifier, is dropped
    let (notifier, alerts) = QueuedNotifier::channel();
    let worker = NotificationWorker::new(alerts, config.webhook_target())?;
    let worker = tokio::spawn(worker.run());

    let service = MoneyboxService::new(repo, notifier);

    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    worker.await?;

    // Ensure traces are flushed before exit
    if let Some((_, provider)) = otel {
        let _ = provider.shutdown();
    }
    Ok(())
}
