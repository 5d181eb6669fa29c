use serde::{Deserialize, Serialize};

use super::domain::ApplicationMethod;

/// Per-unit material prices configured by the shop. Consumption quantities
/// come out of the engine; these turn them into dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCosts {
    pub finish_per_gallon: f64,
    pub primer_per_gallon: f64,
    pub tape_per_roll: f64,
    pub plastic_per_roll: f64,
    pub caulk_per_tube: f64,
    /// Flat miscellaneous-consumables charge, applied once per painted area.
    pub sundries_kit: f64,
}

/// Shop-wide pricing and time-overhead defaults. Every percentage field is a
/// plain percent where 0 means "no adjustment" and 100 means "double"; the
/// engine applies them uniformly as `1 + pct/100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateProfile {
    /// ISO-style code, informational only; no conversion is ever performed.
    pub currency: String,
    pub tax_rate: f64,
    pub overhead_pct: f64,
    pub markup_pct: f64,
    /// Cost attributed per labor-hour (internal basis).
    pub crew_hourly_cost: f64,
    /// Rate charged to the client per labor-hour.
    pub billable_rate: f64,
    pub default_method: ApplicationMethod,
    pub default_coats: u32,
    pub primer_on: bool,
    pub waste_paint_pct: f64,
    pub waste_tape_pct: f64,
    pub waste_poly_pct: f64,
    pub setup_minutes_per_area: f64,
    pub travel_minutes: f64,
    pub cleanup_buffer_pct: f64,
    pub material_costs: MaterialCosts,
}

impl RateProfile {
    /// Reject any field outside its valid domain before a computation can
    /// run. A bad profile must never silently produce a wrong total.
    pub fn validate(&self) -> Result<(), RateProfileError> {
        let percentages = [
            ("tax_rate", self.tax_rate),
            ("overhead_pct", self.overhead_pct),
            ("markup_pct", self.markup_pct),
            ("waste_paint_pct", self.waste_paint_pct),
            ("waste_tape_pct", self.waste_tape_pct),
            ("waste_poly_pct", self.waste_poly_pct),
            ("cleanup_buffer_pct", self.cleanup_buffer_pct),
        ];
        for (field, value) in percentages {
            if !value.is_finite() || value < 0.0 {
                return Err(RateProfileError::NegativePercentage { field, value });
            }
        }

        let rates = [
            ("crew_hourly_cost", self.crew_hourly_cost),
            ("billable_rate", self.billable_rate),
            ("setup_minutes_per_area", self.setup_minutes_per_area),
            ("travel_minutes", self.travel_minutes),
            ("finish_per_gallon", self.material_costs.finish_per_gallon),
            ("primer_per_gallon", self.material_costs.primer_per_gallon),
            ("tape_per_roll", self.material_costs.tape_per_roll),
            ("plastic_per_roll", self.material_costs.plastic_per_roll),
            ("caulk_per_tube", self.material_costs.caulk_per_tube),
            ("sundries_kit", self.material_costs.sundries_kit),
        ];
        for (field, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(RateProfileError::NegativeRate { field, value });
            }
        }

        if self.default_coats == 0 {
            return Err(RateProfileError::ZeroDefaultCoats);
        }

        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(RateProfileError::MalformedCurrency(self.currency.clone()));
        }

        Ok(())
    }
}

/// Validation failures raised at snapshot time, before any computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RateProfileError {
    #[error("{field} must be a non-negative percentage (found {value})")]
    NegativePercentage { field: &'static str, value: f64 },
    #[error("{field} must be a non-negative amount (found {value})")]
    NegativeRate { field: &'static str, value: f64 },
    #[error("default_coats must be at least 1")]
    ZeroDefaultCoats,
    #[error("currency must be a three-letter code (found '{0}')")]
    MalformedCurrency(String),
}

/// Immutable, validated copy of the shop defaults taken when an estimate is
/// created or duplicated. Later edits to the shop-wide profile never reach an
/// existing snapshot, and deserialization revalidates, so a stored snapshot
/// can never be invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RateProfile", into = "RateProfile")]
pub struct RateProfileSnapshot {
    profile: RateProfile,
}

impl RateProfileSnapshot {
    pub fn capture(profile: &RateProfile) -> Result<Self, RateProfileError> {
        profile.validate()?;
        Ok(Self {
            profile: profile.clone(),
        })
    }

    pub fn profile(&self) -> &RateProfile {
        &self.profile
    }
}

impl TryFrom<RateProfile> for RateProfileSnapshot {
    type Error = RateProfileError;

    fn try_from(profile: RateProfile) -> Result<Self, Self::Error> {
        profile.validate()?;
        Ok(Self { profile })
    }
}

impl From<RateProfileSnapshot> for RateProfile {
    fn from(snapshot: RateProfileSnapshot) -> Self {
        snapshot.profile
    }
}
