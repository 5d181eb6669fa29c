use serde::{Deserialize, Serialize};

/// Identifier wrapper for persisted estimates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EstimateId(pub String);

/// Paintable element categories the shop prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceType {
    Walls,
    Ceiling,
    Trim,
    Door,
    Other,
}

impl SurfaceType {
    pub const fn label(self) -> &'static str {
        match self {
            SurfaceType::Walls => "walls",
            SurfaceType::Ceiling => "ceiling",
            SurfaceType::Trim => "trim",
            SurfaceType::Door => "door",
            SurfaceType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationMethod {
    Roll,
    Spray,
}

impl ApplicationMethod {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationMethod::Roll => "roll",
            ApplicationMethod::Spray => "spray",
        }
    }
}

/// Unit a surface or prep item is measured in. Square feet for flats, linear
/// feet for trim runs, a count for doors and piecework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementUnit {
    Sqft,
    Lf,
    Count,
}

impl MeasurementUnit {
    pub const fn label(self) -> &'static str {
        match self {
            MeasurementUnit::Sqft => "sqft",
            MeasurementUnit::Lf => "lf",
            MeasurementUnit::Count => "count",
        }
    }
}

/// Complexity tier for trim and door profiles. The labor multiplier behind
/// each tier is catalog data, not a property of the tier itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileGrade {
    Standard,
    Detailed,
    Ornate,
}

impl ProfileGrade {
    pub const fn label(self) -> &'static str {
        match self {
            ProfileGrade::Standard => "standard",
            ProfileGrade::Detailed => "detailed",
            ProfileGrade::Ornate => "ornate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrepType {
    Masking,
    Taping,
    FloorProtection,
    PatchingMinor,
    PatchingMajor,
    Caulking,
    SpotPriming,
}

impl PrepType {
    pub const fn label(self) -> &'static str {
        match self {
            PrepType::Masking => "masking",
            PrepType::Taping => "taping",
            PrepType::FloorProtection => "floor_protection",
            PrepType::PatchingMinor => "patching_minor",
            PrepType::PatchingMajor => "patching_major",
            PrepType::Caulking => "caulking",
            PrepType::SpotPriming => "spot_priming",
        }
    }

    /// Floor protection is priced per unit of material; every other prep type
    /// converts its rate into labor hours.
    pub const fn is_cost_based(self) -> bool {
        matches!(self, PrepType::FloorProtection)
    }
}

/// Lifecycle of an estimate. Only drafts accept input changes or
/// recomputation; the terminal states are set by the surrounding business
/// process, never by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateStatus {
    Draft,
    Sent,
    Approved,
    Expired,
    Lost,
}

impl EstimateStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EstimateStatus::Draft => "draft",
            EstimateStatus::Sent => "sent",
            EstimateStatus::Approved => "approved",
            EstimateStatus::Expired => "expired",
            EstimateStatus::Lost => "lost",
        }
    }

    pub const fn is_editable(self) -> bool {
        matches!(self, EstimateStatus::Draft)
    }
}

/// Manual-override escape hatch for prep labor. `Computed` lets the engine
/// derive hours from quantity and rate; `Overridden` pins them for
/// non-standard work. Serialized as an optional number so payloads stay flat.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum PrepHours {
    #[default]
    Computed,
    Overridden(f64),
}

impl From<Option<f64>> for PrepHours {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(hours) => PrepHours::Overridden(hours),
            None => PrepHours::Computed,
        }
    }
}

impl From<PrepHours> for Option<f64> {
    fn from(value: PrepHours) -> Self {
        match value {
            PrepHours::Computed => None,
            PrepHours::Overridden(hours) => Some(hours),
        }
    }
}

/// A room or zone being painted. Dimensions are a convenience input; explicit
/// square footage, when present, is the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub name: String,
    #[serde(default)]
    pub length_ft: Option<f64>,
    #[serde(default)]
    pub width_ft: Option<f64>,
    #[serde(default)]
    pub height_ft: Option<f64>,
    #[serde(default)]
    pub wall_sqft: Option<f64>,
    #[serde(default)]
    pub ceiling_sqft: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub surfaces: Vec<Surface>,
    #[serde(default)]
    pub prep_items: Vec<PrepItem>,
}

impl Area {
    /// Wall square footage: explicit override first, then perimeter x height.
    pub fn resolved_wall_sqft(&self) -> Option<f64> {
        if self.wall_sqft.is_some() {
            return self.wall_sqft;
        }
        match (self.length_ft, self.width_ft, self.height_ft) {
            (Some(length), Some(width), Some(height)) => Some(2.0 * (length + width) * height),
            _ => None,
        }
    }

    /// Ceiling square footage: explicit override first, then length x width.
    pub fn resolved_ceiling_sqft(&self) -> Option<f64> {
        if self.ceiling_sqft.is_some() {
            return self.ceiling_sqft;
        }
        match (self.length_ft, self.width_ft) {
            (Some(length), Some(width)) => Some(length * width),
            _ => None,
        }
    }
}

/// One paintable element within an area. Unset method/coats/primer cascade to
/// the rate profile's defaults; unset rates fall back to the surface catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub label: String,
    pub surface_type: SurfaceType,
    /// Measured quantity in `unit`. Wall and ceiling surfaces measured in
    /// sqft may leave this unset and take the area-derived figure.
    #[serde(default)]
    pub measurement: Option<f64>,
    pub unit: MeasurementUnit,
    #[serde(default)]
    pub method: Option<ApplicationMethod>,
    #[serde(default)]
    pub coats: Option<u32>,
    #[serde(default)]
    pub primer: Option<bool>,
    /// Catalog overrides for this surface only.
    #[serde(default)]
    pub production_rate: Option<f64>,
    #[serde(default)]
    pub coverage_rate: Option<f64>,
    /// Doors only: 1 or 2 painted faces.
    #[serde(default)]
    pub door_sides: Option<u8>,
    #[serde(default)]
    pub profile_grade: Option<ProfileGrade>,
    /// Walls only: square footage of openings deducted from the measurement.
    #[serde(default)]
    pub opening_sqft: Option<f64>,
}

/// Non-painting preparatory work scoped to an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepItem {
    pub label: String,
    pub prep_type: PrepType,
    pub quantity: f64,
    pub unit: MeasurementUnit,
    /// Hours per unit, or dollars per unit for cost-based prep types.
    pub rate: f64,
    #[serde(default)]
    pub hours: PrepHours,
}

/// Fatal computation failures. Any one of these aborts the whole estimate;
/// the engine never returns partial totals.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComputeError {
    #[error("surface '{surface}' in area '{area}': {detail}")]
    InvalidSurface {
        area: String,
        surface: String,
        detail: String,
    },
    #[error("no catalog entry or override for {} applied by {}", .surface_type.label(), .method.label())]
    MissingRate {
        surface_type: SurfaceType,
        method: ApplicationMethod,
    },
    #[error("prep item '{item}' in area '{area}': {detail}")]
    InvalidPrepItem {
        area: String,
        item: String,
        detail: String,
    },
}
