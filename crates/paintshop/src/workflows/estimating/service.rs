use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::aggregate;
use super::catalog::CatalogSource;
use super::domain::{Area, ComputeError, EstimateId, EstimateStatus};
use super::profile::{RateProfile, RateProfileError, RateProfileSnapshot};
use super::repository::{
    DeliveryError, EstimateRecord, EstimateRepository, QuoteDelivery, RepositoryError,
};

/// Inbound request to price a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateSubmission {
    pub profile: RateProfile,
    pub areas: Vec<Area>,
    #[serde(default)]
    pub crew_size: Option<u32>,
}

/// Replacement inputs for a draft revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRevision {
    pub areas: Vec<Area>,
    #[serde(default)]
    pub crew_size: Option<u32>,
}

/// Service composing the profile snapshot guard, the estimating engine, and
/// the persistence, delivery, and catalog collaborators. The catalog is
/// pulled fresh from its source at the top of every computation and never
/// cached across calls.
pub struct EstimateService<R, D, C> {
    repository: Arc<R>,
    delivery: Arc<D>,
    catalog: Arc<C>,
}

static ESTIMATE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_estimate_id() -> EstimateId {
    let id = ESTIMATE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    EstimateId(format!("est-{id:06}"))
}

impl<R, D, C> EstimateService<R, D, C>
where
    R: EstimateRepository + 'static,
    D: QuoteDelivery + 'static,
    C: CatalogSource + 'static,
{
    pub fn new(repository: Arc<R>, delivery: Arc<D>, catalog: Arc<C>) -> Self {
        Self {
            repository,
            delivery,
            catalog,
        }
    }

    /// Snapshot the profile, price the job, and persist the draft.
    pub fn create(
        &self,
        submission: EstimateSubmission,
        today: NaiveDate,
    ) -> Result<EstimateRecord, EstimateServiceError> {
        let snapshot = RateProfileSnapshot::capture(&submission.profile)?;
        let crew_size = submission.crew_size.unwrap_or(1).max(1);
        let catalog = self.catalog.current();
        let totals = aggregate::compute(snapshot.profile(), &submission.areas, &catalog, crew_size)?;

        let record = EstimateRecord {
            id: next_estimate_id(),
            profile: snapshot,
            areas: submission.areas,
            crew_size,
            status: EstimateStatus::Draft,
            totals,
            created_on: today,
            sent_on: None,
        };

        let stored = self.repository.insert(record)?;
        info!(estimate = %stored.id.0, total = stored.totals.total_cost, "estimate drafted");
        Ok(stored)
    }

    pub fn get(&self, id: &EstimateId) -> Result<EstimateRecord, EstimateServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Replace a draft's inputs and reprice against the current catalog.
    pub fn revise(
        &self,
        id: &EstimateId,
        revision: EstimateRevision,
    ) -> Result<EstimateRecord, EstimateServiceError> {
        let mut record = self.editable(id)?;
        record.areas = revision.areas;
        if let Some(crew) = revision.crew_size {
            record.crew_size = crew.max(1);
        }
        self.reprice_and_store(record)
    }

    /// Re-run the engine over unchanged inputs, e.g. after a catalog reload.
    pub fn recompute(&self, id: &EstimateId) -> Result<EstimateRecord, EstimateServiceError> {
        let record = self.editable(id)?;
        self.reprice_and_store(record)
    }

    /// Deliver the quote and lock the estimate against recomputation.
    pub fn send(
        &self,
        id: &EstimateId,
        today: NaiveDate,
    ) -> Result<EstimateRecord, EstimateServiceError> {
        let mut record = self.editable(id)?;
        record.status = EstimateStatus::Sent;
        record.sent_on = Some(today);

        self.delivery.deliver(record.quote_payload(today))?;
        self.repository.update(record.clone())?;
        info!(estimate = %record.id.0, total = record.totals.total_cost, "quote sent");
        Ok(record)
    }

    /// Deep-copy an estimate under a fresh id. Totals are recomputed, never
    /// copied, so a duplicate always reflects the current engine and catalog.
    pub fn duplicate(
        &self,
        id: &EstimateId,
        today: NaiveDate,
    ) -> Result<EstimateRecord, EstimateServiceError> {
        let source = self.get(id)?;
        let catalog = self.catalog.current();
        let totals = aggregate::compute(
            source.profile.profile(),
            &source.areas,
            &catalog,
            source.crew_size,
        )?;

        let record = EstimateRecord {
            id: next_estimate_id(),
            profile: source.profile.clone(),
            areas: source.areas.clone(),
            crew_size: source.crew_size,
            status: EstimateStatus::Draft,
            totals,
            created_on: today,
            sent_on: None,
        };

        let stored = self.repository.insert(record)?;
        info!(source = %id.0, duplicate = %stored.id.0, "estimate duplicated");
        Ok(stored)
    }

    fn editable(&self, id: &EstimateId) -> Result<EstimateRecord, EstimateServiceError> {
        let record = self.get(id)?;
        if !record.status.is_editable() {
            return Err(EstimateServiceError::NotEditable {
                id: record.id.clone(),
                status: record.status,
            });
        }
        Ok(record)
    }

    fn reprice_and_store(
        &self,
        mut record: EstimateRecord,
    ) -> Result<EstimateRecord, EstimateServiceError> {
        let catalog = self.catalog.current();
        record.totals =
            aggregate::compute(record.profile.profile(), &record.areas, &catalog, record.crew_size)?;
        self.repository.update(record.clone())?;
        Ok(record)
    }
}

/// Error raised by the estimate service.
#[derive(Debug, thiserror::Error)]
pub enum EstimateServiceError {
    #[error(transparent)]
    Profile(#[from] RateProfileError),
    #[error(transparent)]
    Compute(#[from] ComputeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
    #[error("estimate {} is {}; only drafts can change", .id.0, .status.label())]
    NotEditable {
        id: EstimateId,
        status: EstimateStatus,
    },
}
