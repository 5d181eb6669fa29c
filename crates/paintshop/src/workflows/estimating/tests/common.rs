use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::workflows::estimating::catalog::{CatalogEntry, FixedCatalog, SurfaceCatalog};
use crate::workflows::estimating::domain::{
    ApplicationMethod, Area, EstimateId, MeasurementUnit, PrepHours, PrepItem, PrepType, Surface,
    SurfaceType,
};
use crate::workflows::estimating::profile::{MaterialCosts, RateProfile};
use crate::workflows::estimating::repository::{
    DeliveryError, EstimateRecord, EstimateRepository, QuoteDelivery, QuotePayload,
    RepositoryError,
};
use crate::workflows::estimating::service::{EstimateService, EstimateSubmission};

/// Reference-shop profile: roll, two coats, no primer, no waste, every
/// percentage zeroed except a 13% tax.
pub(super) fn test_profile() -> RateProfile {
    RateProfile {
        currency: "USD".to_string(),
        tax_rate: 13.0,
        overhead_pct: 0.0,
        markup_pct: 0.0,
        crew_hourly_cost: 30.0,
        billable_rate: 50.0,
        default_method: ApplicationMethod::Roll,
        default_coats: 2,
        primer_on: false,
        waste_paint_pct: 0.0,
        waste_tape_pct: 0.0,
        waste_poly_pct: 0.0,
        setup_minutes_per_area: 0.0,
        travel_minutes: 0.0,
        cleanup_buffer_pct: 0.0,
        material_costs: MaterialCosts {
            finish_per_gallon: 42.0,
            primer_per_gallon: 30.0,
            tape_per_roll: 5.0,
            plastic_per_roll: 12.0,
            caulk_per_tube: 4.0,
            sundries_kit: 0.0,
        },
    }
}

/// Sparse roll-only catalog so unknown-method lookups can be exercised.
pub(super) fn fixture_catalog() -> SurfaceCatalog {
    let mut catalog = SurfaceCatalog::empty();
    catalog.set_entry(
        SurfaceType::Walls,
        ApplicationMethod::Roll,
        CatalogEntry {
            production_rate: 200.0,
            coverage_rate: 350.0,
            primer_coverage: 300.0,
        },
    );
    catalog.set_entry(
        SurfaceType::Ceiling,
        ApplicationMethod::Roll,
        CatalogEntry {
            production_rate: 150.0,
            coverage_rate: 350.0,
            primer_coverage: 300.0,
        },
    );
    catalog.set_entry(
        SurfaceType::Trim,
        ApplicationMethod::Roll,
        CatalogEntry {
            production_rate: 60.0,
            coverage_rate: 600.0,
            primer_coverage: 550.0,
        },
    );
    catalog.set_entry(
        SurfaceType::Door,
        ApplicationMethod::Roll,
        CatalogEntry {
            production_rate: 1.25,
            coverage_rate: 22.0,
            primer_coverage: 20.0,
        },
    );
    catalog
}

pub(super) fn walls_surface(label: &str) -> Surface {
    Surface {
        label: label.to_string(),
        surface_type: SurfaceType::Walls,
        measurement: None,
        unit: MeasurementUnit::Sqft,
        method: None,
        coats: None,
        primer: None,
        production_rate: None,
        coverage_rate: None,
        door_sides: None,
        profile_grade: None,
        opening_sqft: None,
    }
}

/// The reference room: 10ft x 10ft x 8ft, walls only.
pub(super) fn single_room_area() -> Area {
    Area {
        name: "bedroom".to_string(),
        length_ft: Some(10.0),
        width_ft: Some(10.0),
        height_ft: Some(8.0),
        wall_sqft: None,
        ceiling_sqft: None,
        notes: None,
        surfaces: vec![walls_surface("walls")],
        prep_items: Vec::new(),
    }
}

pub(super) fn taping_item(quantity: f64, rate: f64) -> PrepItem {
    PrepItem {
        label: "tape baseboards".to_string(),
        prep_type: PrepType::Taping,
        quantity,
        unit: MeasurementUnit::Lf,
        rate,
        hours: PrepHours::Computed,
    }
}

pub(super) fn submission() -> EstimateSubmission {
    EstimateSubmission {
        profile: test_profile(),
        areas: vec![single_room_area()],
        crew_size: Some(1),
    }
}

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn build_service() -> (
    EstimateService<MemoryRepository, MemoryDelivery, FixedCatalog>,
    Arc<MemoryRepository>,
    Arc<MemoryDelivery>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let delivery = Arc::new(MemoryDelivery::default());
    let catalog = Arc::new(FixedCatalog::new(fixture_catalog()));
    let service = EstimateService::new(repository.clone(), delivery.clone(), catalog);
    (service, repository, delivery)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<EstimateId, EstimateRecord>>>,
}

impl EstimateRepository for MemoryRepository {
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
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &EstimateId) -> Result<Option<EstimateRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn drafts(&self, _limit: usize) -> Result<Vec<EstimateRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryDelivery {
    events: Arc<Mutex<Vec<QuotePayload>>>,
}

impl MemoryDelivery {
    pub(super) fn events(&self) -> Vec<QuotePayload> {
        self.events.lock().expect("delivery mutex poisoned").clone()
    }
}

impl QuoteDelivery for MemoryDelivery {
    fn deliver(&self, quote: QuotePayload) -> Result<(), DeliveryError> {
        self.events
            .lock()
            .expect("delivery mutex poisoned")
            .push(quote);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl EstimateRepository for UnavailableRepository {
    fn insert(&self, _record: EstimateRecord) -> Result<EstimateRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: EstimateRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &EstimateId) -> Result<Option<EstimateRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn drafts(&self, _limit: usize) -> Result<Vec<EstimateRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
