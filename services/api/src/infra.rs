use metrics_exporter_prometheus::PrometheusHandle;
use paintshop::workflows::estimating::{
    ApplicationMethod, DeliveryError, EstimateId, EstimateRecord, EstimateRepository,
    EstimateStatus, MaterialCosts, QuoteDelivery, QuotePayload, RateProfile, RepositoryError,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryEstimateRepository {
    records: Arc<Mutex<HashMap<EstimateId, EstimateRecord>>>,
}

impl EstimateRepository for InMemoryEstimateRepository {
    fn insert(&self, record: EstimateRecord) -> Result<EstimateRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: EstimateRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &EstimateId) -> Result<Option<EstimateRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn drafts(&self, limit: usize) -> Result<Vec<EstimateRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.status == EstimateStatus::Draft)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryQuoteDelivery {
    events: Arc<Mutex<Vec<QuotePayload>>>,
}

impl QuoteDelivery for InMemoryQuoteDelivery {
    fn deliver(&self, quote: QuotePayload) -> Result<(), DeliveryError> {
        let mut guard = self.events.lock().expect("delivery mutex poisoned");
        guard.push(quote);
        Ok(())
    }
}

impl InMemoryQuoteDelivery {
    pub(crate) fn events(&self) -> Vec<QuotePayload> {
        self.events.lock().expect("delivery mutex poisoned").clone()
    }
}

/// Default pricing profile for the bundled demo shop.
pub(crate) fn shop_rate_profile() -> RateProfile {
    RateProfile {
        currency: "USD".to_string(),
        tax_rate: 6.0,
        overhead_pct: 10.0,
        markup_pct: 15.0,
        crew_hourly_cost: 32.0,
        billable_rate: 55.0,
        default_method: ApplicationMethod::Roll,
        default_coats: 2,
        primer_on: false,
        waste_paint_pct: 10.0,
        waste_tape_pct: 10.0,
        waste_poly_pct: 5.0,
        setup_minutes_per_area: 20.0,
        travel_minutes: 45.0,
        cleanup_buffer_pct: 5.0,
        material_costs: MaterialCosts {
            finish_per_gallon: 42.0,
            primer_per_gallon: 28.0,
            tape_per_roll: 6.5,
            plastic_per_roll: 14.0,
            caulk_per_tube: 4.5,
            sundries_kit: 18.0,
        },
    }
}
