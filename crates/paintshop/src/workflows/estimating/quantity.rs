use serde::Serialize;

use super::catalog::SurfaceCatalog;
use super::domain::{Area, ComputeError, MeasurementUnit, Surface, SurfaceType};
use super::profile::RateProfile;

/// A surface with every default and override collapsed: surface value first,
/// then the profile default, then the catalog constant. Resolved once so the
/// arithmetic below never re-consults the cascade.
#[derive(Debug, Clone, Copy)]
struct EffectiveSurface {
    net_quantity: f64,
    coats: u32,
    primer: bool,
    production_rate: f64,
    coverage_rate: f64,
    primer_coverage: f64,
    labor_factor: f64,
}

/// Per-surface output of the quantity calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceTakeoff {
    pub net_quantity: f64,
    pub finish_gallons: f64,
    pub primer_gallons: f64,
    pub labor_hours: f64,
}

/// Convert one surface into paint volume and labor hours. Pure function of
/// its inputs; a failure here aborts the whole estimate.
pub fn surface_takeoff(
    area: &Area,
    surface: &Surface,
    profile: &RateProfile,
    catalog: &SurfaceCatalog,
) -> Result<SurfaceTakeoff, ComputeError> {
    let effective = resolve(area, surface, profile, catalog)?;
    let waste = 1.0 + profile.waste_paint_pct / 100.0;

    let finish_gallons =
        effective.net_quantity * effective.coats as f64 * waste / effective.coverage_rate;

    // Primer is always exactly one coat, at its own coverage rate.
    let primer_gallons = if effective.primer {
        effective.net_quantity * waste / effective.primer_coverage
    } else {
        0.0
    };

    let passes = effective.coats as f64 + if effective.primer { 1.0 } else { 0.0 };
    let labor_hours =
        effective.net_quantity / effective.production_rate * passes * effective.labor_factor;

    Ok(SurfaceTakeoff {
        net_quantity: effective.net_quantity,
        finish_gallons,
        primer_gallons,
        labor_hours,
    })
}

fn resolve(
    area: &Area,
    surface: &Surface,
    profile: &RateProfile,
    catalog: &SurfaceCatalog,
) -> Result<EffectiveSurface, ComputeError> {
    let invalid = |detail: String| ComputeError::InvalidSurface {
        area: area.name.clone(),
        surface: surface.label.clone(),
        detail,
    };

    let measurement = surface.measurement.or_else(|| {
        match (surface.surface_type, surface.unit) {
            (SurfaceType::Walls, MeasurementUnit::Sqft) => area.resolved_wall_sqft(),
            (SurfaceType::Ceiling, MeasurementUnit::Sqft) => area.resolved_ceiling_sqft(),
            _ => None,
        }
    });
    let measurement = measurement
        .ok_or_else(|| invalid("no measurement and no area dimensions to derive one".to_string()))?;
    if !measurement.is_finite() || measurement <= 0.0 {
        return Err(invalid(format!(
            "measurement must be positive (found {measurement})"
        )));
    }

    // Opening deduction applies to wall square footage only.
    let net_quantity = if surface.surface_type == SurfaceType::Walls
        && surface.unit == MeasurementUnit::Sqft
    {
        let opening = surface.opening_sqft.unwrap_or(0.0);
        if !opening.is_finite() || opening < 0.0 {
            return Err(invalid("opening_sqft must not be negative".to_string()));
        }
        (measurement - opening).max(0.0)
    } else {
        measurement
    };

    let method = surface.method.unwrap_or(profile.default_method);
    let coats = surface.coats.unwrap_or(profile.default_coats);
    if coats == 0 {
        return Err(invalid("coats must be at least 1".to_string()));
    }
    let primer = surface.primer.unwrap_or(profile.primer_on);

    let entry = catalog.entry(surface.surface_type, method);
    let missing_rate = || ComputeError::MissingRate {
        surface_type: surface.surface_type,
        method,
    };
    let production_rate = surface
        .production_rate
        .or(entry.map(|e| e.production_rate))
        .ok_or_else(missing_rate)?;
    let coverage_rate = surface
        .coverage_rate
        .or(entry.map(|e| e.coverage_rate))
        .ok_or_else(missing_rate)?;
    let primer_coverage = entry.map(|e| e.primer_coverage).unwrap_or(coverage_rate);

    if production_rate <= 0.0 || coverage_rate <= 0.0 || primer_coverage <= 0.0 {
        return Err(invalid("production and coverage rates must be positive".to_string()));
    }

    let mut labor_factor = surface
        .profile_grade
        .map(|grade| catalog.profile_factor(grade))
        .unwrap_or(1.0);
    if surface.surface_type == SurfaceType::Door {
        match surface.door_sides.unwrap_or(1) {
            1 => {}
            2 => labor_factor *= catalog.two_sided_door_factor,
            other => {
                return Err(invalid(format!("door_sides must be 1 or 2 (found {other})")));
            }
        }
    }

    Ok(EffectiveSurface {
        net_quantity,
        coats,
        primer,
        production_rate,
        coverage_rate,
        primer_coverage,
        labor_factor,
    })
}
