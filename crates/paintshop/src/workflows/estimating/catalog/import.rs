use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::{CatalogEntry, SurfaceCatalog};
use crate::workflows::estimating::domain::{ApplicationMethod, SurfaceType};

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read catalog file: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads shop-tuned production and coverage rates from a CSV export with
/// `surface_type,method,production_rate,coverage_rate,primer_coverage`
/// columns, overlaying them onto the standard catalog.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<SurfaceCatalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<SurfaceCatalog, CatalogImportError> {
        let mut catalog = SurfaceCatalog::standard();
        Self::overlay(&mut catalog, reader)?;
        Ok(catalog)
    }

    /// Apply rows to an existing catalog. Rows naming unknown surface types
    /// or methods are skipped; unparsable numbers are an error.
    pub fn overlay<R: Read>(
        catalog: &mut SurfaceCatalog,
        reader: R,
    ) -> Result<(), CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        for record in csv_reader.deserialize::<CatalogRow>() {
            let row = record?;
            let surface_type = match parse_surface_type(&row.surface_type) {
                Some(surface_type) => surface_type,
                None => continue,
            };
            let method = match parse_method(&row.method) {
                Some(method) => method,
                None => continue,
            };

            catalog.set_entry(
                surface_type,
                method,
                CatalogEntry {
                    production_rate: row.production_rate,
                    coverage_rate: row.coverage_rate,
                    primer_coverage: row.primer_coverage.unwrap_or(row.coverage_rate),
                },
            );
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    surface_type: String,
    method: String,
    production_rate: f64,
    coverage_rate: f64,
    #[serde(default)]
    primer_coverage: Option<f64>,
}

fn parse_surface_type(value: &str) -> Option<SurfaceType> {
    match value.trim().to_ascii_lowercase().as_str() {
        "walls" | "wall" => Some(SurfaceType::Walls),
        "ceiling" | "ceilings" => Some(SurfaceType::Ceiling),
        "trim" => Some(SurfaceType::Trim),
        "door" | "doors" => Some(SurfaceType::Door),
        "other" => Some(SurfaceType::Other),
        _ => None,
    }
}

fn parse_method(value: &str) -> Option<ApplicationMethod> {
    match value.trim().to_ascii_lowercase().as_str() {
        "roll" | "roller" => Some(ApplicationMethod::Roll),
        "spray" | "sprayer" => Some(ApplicationMethod::Spray),
        _ => None,
    }
}
