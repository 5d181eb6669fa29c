use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryEstimateRepository, InMemoryQuoteDelivery};
use crate::routes::with_estimate_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use paintshop::config::AppConfig;
use paintshop::error::AppError;
use paintshop::telemetry;
use paintshop::workflows::estimating::{
    CatalogImporter, EstimateService, FixedCatalog, SurfaceCatalog,
};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = match &config.estimating.catalog_csv {
        Some(path) => {
            let catalog = CatalogImporter::from_path(path)?;
            info!(path = %path.display(), entries = catalog.entry_count(), "catalog overlay loaded");
            catalog
        }
        None => SurfaceCatalog::standard(),
    };

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryEstimateRepository::default());
    let delivery = Arc::new(InMemoryQuoteDelivery::default());
    let estimate_service = Arc::new(EstimateService::new(
        repository,
        delivery,
        Arc::new(FixedCatalog::new(catalog)),
    ));

    let app = with_estimate_routes(estimate_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "estimating back office ready");

    axum::serve(listener, app).await?;
    Ok(())
}
