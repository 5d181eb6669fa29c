use serde::Serialize;

use super::catalog::SurfaceCatalog;
use super::domain::{Area, ComputeError, PrepHours, PrepItem, PrepType};
use super::profile::RateProfile;

/// Per-item output of the prep-work calculator: labor hours, direct material
/// cost for cost-based items, and consumable volumes the aggregator prices.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PrepTakeoff {
    pub hours: f64,
    pub direct_cost: f64,
    pub tape_rolls: f64,
    pub plastic_rolls: f64,
    pub caulk_tubes: f64,
}

/// Convert one prep item into hours, cost, and consumable volumes. A manual
/// hours override replaces labor only; consumption still follows the
/// recorded quantity.
pub fn prep_takeoff(
    area: &Area,
    item: &PrepItem,
    profile: &RateProfile,
    catalog: &SurfaceCatalog,
) -> Result<PrepTakeoff, ComputeError> {
    let invalid = |detail: String| ComputeError::InvalidPrepItem {
        area: area.name.clone(),
        item: item.label.clone(),
        detail,
    };

    if !item.quantity.is_finite() || item.quantity < 0.0 {
        return Err(invalid(format!(
            "quantity must not be negative (found {})",
            item.quantity
        )));
    }
    if !item.rate.is_finite() || item.rate < 0.0 {
        return Err(invalid(format!(
            "rate must not be negative (found {})",
            item.rate
        )));
    }

    let (hours, direct_cost) = match item.hours {
        PrepHours::Overridden(hours) => {
            if !hours.is_finite() || hours < 0.0 {
                return Err(invalid(format!(
                    "manual hours must not be negative (found {hours})"
                )));
            }
            (hours, 0.0)
        }
        PrepHours::Computed if item.prep_type.is_cost_based() => (0.0, item.quantity * item.rate),
        PrepHours::Computed => (item.quantity * item.rate, 0.0),
    };

    let mut takeoff = PrepTakeoff {
        hours,
        direct_cost,
        ..PrepTakeoff::default()
    };

    match item.prep_type {
        PrepType::Masking => {
            takeoff.plastic_rolls = item.quantity * (1.0 + profile.waste_poly_pct / 100.0)
                / catalog.plastic_sqft_per_roll;
        }
        PrepType::Taping => {
            takeoff.tape_rolls =
                item.quantity * (1.0 + profile.waste_tape_pct / 100.0) / catalog.tape_lf_per_roll;
        }
        PrepType::Caulking => {
            takeoff.caulk_tubes = item.quantity / catalog.caulk_lf_per_tube;
        }
        PrepType::FloorProtection
        | PrepType::PatchingMinor
        | PrepType::PatchingMajor
        | PrepType::SpotPriming => {}
    }

    Ok(takeoff)
}
