use crate::infra::{shop_rate_profile, InMemoryEstimateRepository, InMemoryQuoteDelivery};
use chrono::Local;
use clap::Args;
use paintshop::error::AppError;
use paintshop::workflows::estimating::{
    compute, Area, CatalogImporter, EstimateService, EstimateServiceError, EstimateSubmission,
    EstimateTotals, FixedCatalog, MeasurementUnit, PrepHours, PrepItem, PrepType, ProfileGrade,
    Surface, SurfaceCatalog, SurfaceType,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct QuoteArgs {
    /// Crew size assumed for the duration forecast
    #[arg(long)]
    pub(crate) crew_size: Option<u32>,
    /// Optional catalog CSV overlay with shop-tuned rates
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Crew size assumed for the duration forecast
    #[arg(long)]
    pub(crate) crew_size: Option<u32>,
    /// Optional catalog CSV overlay with shop-tuned rates
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog_csv.as_ref())?;
    let profile = shop_rate_profile();
    let crew_size = args.crew_size.unwrap_or(2).max(1);
    let areas = sample_areas();

    let totals = compute(&profile, &areas, &catalog, crew_size)
        .map_err(EstimateServiceError::from)?;

    println!(
        "Sample job quote ({} areas, crew of {crew_size})",
        areas.len()
    );
    render_totals(&totals, &profile.currency);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog_csv.as_ref())?;
    let repository = Arc::new(InMemoryEstimateRepository::default());
    let delivery = Arc::new(InMemoryQuoteDelivery::default());
    let service = EstimateService::new(
        repository,
        delivery.clone(),
        Arc::new(FixedCatalog::new(catalog)),
    );
    let today = Local::now().date_naive();
    let profile = shop_rate_profile();
    let currency = profile.currency.clone();

    println!("Estimating workflow demo");

    let submission = EstimateSubmission {
        profile,
        areas: sample_areas(),
        crew_size: args.crew_size,
    };
    let draft = service.create(submission, today)?;
    println!(
        "\nDrafted estimate {} covering {} areas",
        draft.id.0,
        draft.areas.len()
    );
    render_totals(&draft.totals, &currency);
    println!(
        "  internal labor basis: {:.2} {currency} (margin analysis only)",
        draft.totals.internal_labor_cost
    );

    let sent = service.send(&draft.id, today)?;
    if let Some(date) = sent.sent_on {
        println!("\nQuote for {} sent to the client on {date}", sent.id.0);
    }

    let copy = service.duplicate(&sent.id, today)?;
    println!(
        "Duplicated {} as {} for follow-up work; totals recomputed, status reset to {}",
        sent.id.0,
        copy.id.0,
        copy.status.label()
    );

    println!("\nDelivery log:");
    for event in delivery.events() {
        println!(
            "  {} -> {:.2} {} (issued {})",
            event.estimate_id.0, event.total_cost, event.currency, event.issued_on
        );
    }

    Ok(())
}

fn load_catalog(path: Option<&PathBuf>) -> Result<SurfaceCatalog, AppError> {
    match path {
        Some(path) => Ok(CatalogImporter::from_path(path)?),
        None => Ok(SurfaceCatalog::standard()),
    }
}

fn render_totals(totals: &EstimateTotals, currency: &str) {
    println!(
        "  labor hours incl. setup, travel, cleanup: {:.2}",
        totals.labor_hours_total
    );
    println!("  labor: {:.2} {currency}", totals.labor_cost);
    println!("  materials: {:.2} {currency}", totals.material_cost);
    println!(
        "  total after overhead, markup, and tax: {:.2} {currency}",
        totals.total_cost
    );
    println!(
        "  estimated duration: {} day(s)",
        totals.estimated_duration_days
    );
}

fn sample_areas() -> Vec<Area> {
    vec![
        Area {
            name: "living room".to_string(),
            length_ft: Some(18.0),
            width_ft: Some(14.0),
            height_ft: Some(9.0),
            wall_sqft: None,
            ceiling_sqft: None,
            notes: Some("two window walls".to_string()),
            surfaces: vec![
                Surface {
                    label: "walls".to_string(),
                    surface_type: SurfaceType::Walls,
                    measurement: None,
                    unit: MeasurementUnit::Sqft,
                    method: None,
                    coats: None,
                    primer: None,
                    production_rate: None,
                    coverage_rate: None,
                    door_sides: None,
                    profile_grade: None,
                    opening_sqft: Some(64.0),
                },
                Surface {
                    label: "ceiling".to_string(),
                    surface_type: SurfaceType::Ceiling,
                    measurement: None,
                    unit: MeasurementUnit::Sqft,
                    method: None,
                    coats: Some(1),
                    primer: None,
                    production_rate: None,
                    coverage_rate: None,
                    door_sides: None,
                    profile_grade: None,
                    opening_sqft: None,
                },
                Surface {
                    label: "crown and base trim".to_string(),
                    surface_type: SurfaceType::Trim,
                    measurement: Some(110.0),
                    unit: MeasurementUnit::Lf,
                    method: None,
                    coats: None,
                    primer: Some(true),
                    production_rate: None,
                    coverage_rate: None,
                    door_sides: None,
                    profile_grade: Some(ProfileGrade::Ornate),
                    opening_sqft: None,
                },
            ],
            prep_items: vec![
                PrepItem {
                    label: "tape casings".to_string(),
                    prep_type: PrepType::Taping,
                    quantity: 120.0,
                    unit: MeasurementUnit::Lf,
                    rate: 0.02,
                    hours: PrepHours::Computed,
                },
                PrepItem {
                    label: "protect hardwood".to_string(),
                    prep_type: PrepType::FloorProtection,
                    quantity: 250.0,
                    unit: MeasurementUnit::Sqft,
                    rate: 0.25,
                    hours: PrepHours::Computed,
                },
            ],
        },
        Area {
            name: "hallway".to_string(),
            length_ft: None,
            width_ft: None,
            height_ft: None,
            wall_sqft: Some(220.0),
            ceiling_sqft: None,
            notes: None,
            surfaces: vec![
                Surface {
                    label: "walls".to_string(),
                    surface_type: SurfaceType::Walls,
                    measurement: None,
                    unit: MeasurementUnit::Sqft,
                    method: None,
                    coats: None,
                    primer: None,
                    production_rate: None,
                    coverage_rate: None,
                    door_sides: None,
                    profile_grade: None,
                    opening_sqft: None,
                },
                Surface {
                    label: "doors".to_string(),
                    surface_type: SurfaceType::Door,
                    measurement: Some(3.0),
                    unit: MeasurementUnit::Count,
                    method: None,
                    coats: Some(1),
                    primer: None,
                    production_rate: None,
                    coverage_rate: None,
                    door_sides: Some(2),
                    profile_grade: Some(ProfileGrade::Detailed),
                    opening_sqft: None,
                },
            ],
            prep_items: vec![PrepItem {
                label: "patch scuffed corners".to_string(),
                prep_type: PrepType::PatchingMinor,
                quantity: 6.0,
                unit: MeasurementUnit::Count,
                rate: 0.25,
                hours: PrepHours::Overridden(2.5),
            }],
        },
    ]
}
