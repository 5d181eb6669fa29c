mod import;

pub use import::{CatalogImportError, CatalogImporter};

use std::collections::BTreeMap;

use super::domain::{ApplicationMethod, ProfileGrade, SurfaceType};

/// Production and coverage figures for one (surface, method) pairing. Units
/// follow the surface's measurement: square feet for walls and ceilings,
/// linear feet for trim, door count for doors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    /// Quantity processed per labor-hour.
    pub production_rate: f64,
    /// Quantity covered per gallon of finish paint.
    pub coverage_rate: f64,
    /// Quantity covered per gallon of primer.
    pub primer_coverage: f64,
}

/// Read-only reference data for a computation: production/coverage entries
/// plus the shop constants the calculators lean on.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceCatalog {
    entries: BTreeMap<(SurfaceType, ApplicationMethod), CatalogEntry>,
    /// Labor factor for painting both faces of a door. Shared setup makes a
    /// two-sided door cheaper than two one-sided doors.
    pub two_sided_door_factor: f64,
    pub detailed_profile_factor: f64,
    pub ornate_profile_factor: f64,
    pub tape_lf_per_roll: f64,
    pub plastic_sqft_per_roll: f64,
    pub caulk_lf_per_tube: f64,
}

impl SurfaceCatalog {
    /// Reference rates for a typical residential repaint crew. These are
    /// shop-configurable data, not a pricing standard; shops overlay their
    /// own figures via [`CatalogImporter`].
    pub fn standard() -> Self {
        let mut catalog = Self::empty();
        let entries = [
            (SurfaceType::Walls, ApplicationMethod::Roll, 180.0, 350.0, 300.0),
            (SurfaceType::Walls, ApplicationMethod::Spray, 400.0, 325.0, 280.0),
            (SurfaceType::Ceiling, ApplicationMethod::Roll, 140.0, 350.0, 300.0),
            (SurfaceType::Ceiling, ApplicationMethod::Spray, 380.0, 325.0, 280.0),
            (SurfaceType::Trim, ApplicationMethod::Roll, 55.0, 600.0, 550.0),
            (SurfaceType::Trim, ApplicationMethod::Spray, 130.0, 550.0, 500.0),
            (SurfaceType::Door, ApplicationMethod::Roll, 1.2, 22.0, 20.0),
            (SurfaceType::Door, ApplicationMethod::Spray, 2.4, 20.0, 18.0),
            (SurfaceType::Other, ApplicationMethod::Roll, 120.0, 325.0, 280.0),
            (SurfaceType::Other, ApplicationMethod::Spray, 260.0, 300.0, 260.0),
        ];
        for (surface_type, method, production_rate, coverage_rate, primer_coverage) in entries {
            catalog.set_entry(
                surface_type,
                method,
                CatalogEntry {
                    production_rate,
                    coverage_rate,
                    primer_coverage,
                },
            );
        }
        catalog
    }

    /// A catalog with the shop constants but no rate entries. Useful for
    /// fixture-driven tests and fully bespoke shops.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
            two_sided_door_factor: 1.6,
            detailed_profile_factor: 1.25,
            ornate_profile_factor: 1.5,
            tape_lf_per_roll: 180.0,
            plastic_sqft_per_roll: 400.0,
            caulk_lf_per_tube: 50.0,
        }
    }

    pub fn entry(
        &self,
        surface_type: SurfaceType,
        method: ApplicationMethod,
    ) -> Option<CatalogEntry> {
        self.entries.get(&(surface_type, method)).copied()
    }

    pub fn set_entry(
        &mut self,
        surface_type: SurfaceType,
        method: ApplicationMethod,
        entry: CatalogEntry,
    ) {
        self.entries.insert((surface_type, method), entry);
    }

    pub fn profile_factor(&self, grade: ProfileGrade) -> f64 {
        match grade {
            ProfileGrade::Standard => 1.0,
            ProfileGrade::Detailed => self.detailed_profile_factor,
            ProfileGrade::Ornate => self.ornate_profile_factor,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Catalog configuration collaborator. Implementors hand the engine a
/// read-only snapshot per computation; freshness (hot reloads between
/// computations) is their responsibility, never the engine's.
pub trait CatalogSource: Send + Sync {
    fn current(&self) -> SurfaceCatalog;
}

/// A catalog fixed at construction time, cloned out on every call.
#[derive(Debug, Clone)]
pub struct FixedCatalog {
    catalog: SurfaceCatalog,
}

impl FixedCatalog {
    pub fn new(catalog: SurfaceCatalog) -> Self {
        Self { catalog }
    }
}

impl Default for FixedCatalog {
    fn default() -> Self {
        Self::new(SurfaceCatalog::standard())
    }
}

impl CatalogSource for FixedCatalog {
    fn current(&self) -> SurfaceCatalog {
        self.catalog.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_covers_every_surface_method_pairing() {
        let catalog = SurfaceCatalog::standard();
        let surface_types = [
            SurfaceType::Walls,
            SurfaceType::Ceiling,
            SurfaceType::Trim,
            SurfaceType::Door,
            SurfaceType::Other,
        ];
        for surface_type in surface_types {
            for method in [ApplicationMethod::Roll, ApplicationMethod::Spray] {
                assert!(
                    catalog.entry(surface_type, method).is_some(),
                    "missing entry for {} {}",
                    surface_type.label(),
                    method.label()
                );
            }
        }
        assert_eq!(catalog.entry_count(), 10);
    }

    #[test]
    fn empty_catalog_has_constants_but_no_entries() {
        let catalog = SurfaceCatalog::empty();
        assert_eq!(catalog.entry_count(), 0);
        assert!(catalog
            .entry(SurfaceType::Walls, ApplicationMethod::Roll)
            .is_none());
        assert!(catalog.two_sided_door_factor > 1.0);
    }

    #[test]
    fn set_entry_overlays_an_existing_pairing() {
        let mut catalog = SurfaceCatalog::standard();
        catalog.set_entry(
            SurfaceType::Walls,
            ApplicationMethod::Roll,
            CatalogEntry {
                production_rate: 220.0,
                coverage_rate: 375.0,
                primer_coverage: 320.0,
            },
        );
        let entry = catalog
            .entry(SurfaceType::Walls, ApplicationMethod::Roll)
            .expect("entry present");
        assert_eq!(entry.production_rate, 220.0);
        assert_eq!(catalog.entry_count(), 10);
    }

    #[test]
    fn profile_factors_scale_by_grade() {
        let catalog = SurfaceCatalog::standard();
        assert_eq!(catalog.profile_factor(ProfileGrade::Standard), 1.0);
        assert!(catalog.profile_factor(ProfileGrade::Detailed) > 1.0);
        assert!(
            catalog.profile_factor(ProfileGrade::Ornate)
                > catalog.profile_factor(ProfileGrade::Detailed)
        );
    }
}
