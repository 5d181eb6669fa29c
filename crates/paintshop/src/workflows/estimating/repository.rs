use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::EstimateTotals;
use super::domain::{Area, EstimateId, EstimateStatus};
use super::profile::RateProfileSnapshot;

/// Persisted estimate: the snapshotted profile, the measured inputs, and the
/// computed totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRecord {
    pub id: EstimateId,
    pub profile: RateProfileSnapshot,
    pub areas: Vec<Area>,
    pub crew_size: u32,
    pub status: EstimateStatus,
    pub totals: EstimateTotals,
    pub created_on: NaiveDate,
    pub sent_on: Option<NaiveDate>,
}

impl EstimateRecord {
    /// Client-facing summary for API responses. The internal labor cost
    /// basis stays out of this view.
    pub fn quote_view(&self) -> EstimateQuoteView {
        EstimateQuoteView {
            estimate_id: self.id.clone(),
            status: self.status.label(),
            currency: self.profile.profile().currency.clone(),
            labor_hours_total: self.totals.labor_hours_total,
            labor_cost: self.totals.labor_cost,
            material_cost: self.totals.material_cost,
            total_cost: self.totals.total_cost,
            estimated_duration_days: self.totals.estimated_duration_days,
        }
    }

    /// Payload handed to the delivery collaborator when the quote goes out.
    /// Totals are read, never recomputed, on the way to the client.
    pub fn quote_payload(&self, issued_on: NaiveDate) -> QuotePayload {
        QuotePayload {
            estimate_id: self.id.clone(),
            currency: self.profile.profile().currency.clone(),
            labor_cost: self.totals.labor_cost,
            material_cost: self.totals.material_cost,
            total_cost: self.totals.total_cost,
            estimated_duration_days: self.totals.estimated_duration_days,
            issued_on,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
/// Reads must return a consistent snapshot of the record's nested entities.
pub trait EstimateRepository: Send + Sync {
    fn insert(&self, record: EstimateRecord) -> Result<EstimateRecord, RepositoryError>;
    fn update(&self, record: EstimateRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &EstimateId) -> Result<Option<EstimateRecord>, RepositoryError>;
    fn drafts(&self, limit: usize) -> Result<Vec<EstimateRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Presentation/delivery collaborator (quote PDF, e-mail). Consumes computed
/// fields only and never re-derives a price.
pub trait QuoteDelivery: Send + Sync {
    fn deliver(&self, quote: QuotePayload) -> Result<(), DeliveryError>;
}

/// Quote payload so routes and tests can assert the delivery boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotePayload {
    pub estimate_id: EstimateId,
    pub currency: String,
    pub labor_cost: f64,
    pub material_cost: f64,
    pub total_cost: f64,
    pub estimated_duration_days: u32,
    pub issued_on: NaiveDate,
}

/// Quote dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("quote delivery transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of an estimate's exposed state.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateQuoteView {
    pub estimate_id: EstimateId,
    pub status: &'static str,
    pub currency: String,
    pub labor_hours_total: f64,
    pub labor_cost: f64,
    pub material_cost: f64,
    pub total_cost: f64,
    pub estimated_duration_days: u32,
}
