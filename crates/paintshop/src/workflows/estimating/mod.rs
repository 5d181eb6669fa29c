//! Cost-estimation engine for painting jobs.
//!
//! The engine turns room/surface measurements and shop-configured rates into
//! a priced estimate. It is a pure, synchronous computation: the quantity and
//! prep calculators convert each surface and prep item into labor hours and
//! material volumes, and the aggregator folds them into the final totals.
//! Persistence, quote delivery, and catalog configuration are trait seams
//! injected into [`EstimateService`]; the engine itself performs no I/O.

pub mod aggregate;
pub mod catalog;
pub mod domain;
pub mod prep;
pub mod profile;
pub mod quantity;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use aggregate::{compute, EstimateTotals, WORKDAY_HOURS};
pub use catalog::{
    CatalogEntry, CatalogImportError, CatalogImporter, CatalogSource, FixedCatalog, SurfaceCatalog,
};
pub use domain::{
    ApplicationMethod, Area, ComputeError, EstimateId, EstimateStatus, MeasurementUnit, PrepHours,
    PrepItem, PrepType, ProfileGrade, Surface, SurfaceType,
};
pub use prep::{prep_takeoff, PrepTakeoff};
pub use profile::{MaterialCosts, RateProfile, RateProfileError, RateProfileSnapshot};
pub use quantity::{surface_takeoff, SurfaceTakeoff};
pub use repository::{
    DeliveryError, EstimateQuoteView, EstimateRecord, EstimateRepository, QuoteDelivery,
    QuotePayload, RepositoryError,
};
pub use router::estimate_router;
pub use service::{EstimateRevision, EstimateService, EstimateServiceError, EstimateSubmission};
