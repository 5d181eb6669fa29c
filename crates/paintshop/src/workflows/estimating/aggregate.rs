use serde::{Deserialize, Serialize};

use super::catalog::SurfaceCatalog;
use super::domain::{Area, ComputeError};
use super::prep::prep_takeoff;
use super::profile::RateProfile;
use super::quantity::surface_takeoff;

/// Hours one crew member works per scheduled day. Advisory scheduling input
/// only; never part of cost math.
pub const WORKDAY_HOURS: f64 = 8.0;

/// Computed output fields stored on an estimate. Money is rounded to cents
/// here and nowhere earlier; every intermediate keeps full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateTotals {
    pub labor_hours_total: f64,
    /// Client-facing labor line, priced at the billable rate.
    pub labor_cost: f64,
    /// Cost-basis labor figure retained for margin analysis; never quoted.
    pub internal_labor_cost: f64,
    pub material_cost: f64,
    pub total_cost: f64,
    pub estimated_duration_days: u32,
}

/// Price a whole estimate: run the calculators over every surface and prep
/// item, add fixed overheads, then walk the overhead/markup/tax chain. Fails
/// fast: one bad surface or prep item aborts the call so a partial sum can
/// never be mistaken for a price.
pub fn compute(
    profile: &RateProfile,
    areas: &[Area],
    catalog: &SurfaceCatalog,
    crew_size: u32,
) -> Result<EstimateTotals, ComputeError> {
    let mut raw_hours = 0.0_f64;
    let mut finish_gallons = 0.0_f64;
    let mut primer_gallons = 0.0_f64;
    let mut tape_rolls = 0.0_f64;
    let mut plastic_rolls = 0.0_f64;
    let mut caulk_tubes = 0.0_f64;
    let mut prep_direct = 0.0_f64;
    let mut sundries_kits = 0_u32;

    for area in areas {
        for surface in &area.surfaces {
            let takeoff = surface_takeoff(area, surface, profile, catalog)?;
            raw_hours += takeoff.labor_hours;
            finish_gallons += takeoff.finish_gallons;
            primer_gallons += takeoff.primer_gallons;
        }
        for item in &area.prep_items {
            let takeoff = prep_takeoff(area, item, profile, catalog)?;
            raw_hours += takeoff.hours;
            prep_direct += takeoff.direct_cost;
            tape_rolls += takeoff.tape_rolls;
            plastic_rolls += takeoff.plastic_rolls;
            caulk_tubes += takeoff.caulk_tubes;
        }
        if !area.surfaces.is_empty() {
            sundries_kits += 1;
        }
    }

    let setup_hours = profile.setup_minutes_per_area / 60.0 * areas.len() as f64;
    let travel_hours = profile.travel_minutes / 60.0;
    let labor_hours_total =
        (raw_hours + setup_hours + travel_hours) * (1.0 + profile.cleanup_buffer_pct / 100.0);

    let billable_labor = labor_hours_total * profile.billable_rate;
    let internal_labor = labor_hours_total * profile.crew_hourly_cost;

    let costs = &profile.material_costs;
    let material_cost = finish_gallons * costs.finish_per_gallon
        + primer_gallons * costs.primer_per_gallon
        + tape_rolls * costs.tape_per_roll
        + plastic_rolls * costs.plastic_per_roll
        + caulk_tubes * costs.caulk_per_tube
        + prep_direct
        + f64::from(sundries_kits) * costs.sundries_kit;

    let subtotal = billable_labor + material_cost;
    let with_overhead = subtotal * (1.0 + profile.overhead_pct / 100.0);
    let pre_tax_total = with_overhead * (1.0 + profile.markup_pct / 100.0);
    let total = pre_tax_total * (1.0 + profile.tax_rate / 100.0);

    let crew = f64::from(crew_size.max(1));
    let estimated_duration_days = (labor_hours_total / (crew * WORKDAY_HOURS)).ceil() as u32;

    Ok(EstimateTotals {
        labor_hours_total,
        labor_cost: round_money(billable_labor),
        internal_labor_cost: round_money(internal_labor),
        material_cost: round_money(material_cost),
        total_cost: round_money(total),
        estimated_duration_days,
    })
}

/// Cents rounding, applied only to the final output fields.
fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
