use super::common::*;
use crate::workflows::estimating::aggregate::compute;
use crate::workflows::estimating::domain::ComputeError;

#[test]
fn single_room_scenario_prices_out_exactly() {
    let totals = compute(&test_profile(), &[single_room_area()], &fixture_catalog(), 1)
        .expect("compute succeeds");

    // 320 sqft, two coats at 200 sqft/hour -> 3.2 hours billed at $50.
    assert_close(totals.labor_hours_total, 3.2);
    assert_eq!(totals.labor_cost, 160.0);
    assert_eq!(totals.internal_labor_cost, 96.0);
    // 640 sqft of coverage at 350 sqft/gal and $42/gal.
    assert_eq!(totals.material_cost, 76.8);
    // 13% tax on the 236.80 subtotal; no overhead or markup.
    assert_eq!(totals.total_cost, 267.58);
    assert_eq!(totals.estimated_duration_days, 1);
}

#[test]
fn zeroed_percentages_are_no_ops() {
    let mut profile = test_profile();
    profile.tax_rate = 0.0;

    let totals = compute(&profile, &[single_room_area()], &fixture_catalog(), 1)
        .expect("compute succeeds");

    // With every percentage zeroed the total is exactly labor + material.
    assert_eq!(totals.total_cost, 236.8);
}

#[test]
fn overhead_markup_and_tax_compound_in_order() {
    let mut profile = test_profile();
    profile.overhead_pct = 10.0;
    profile.markup_pct = 20.0;
    profile.tax_rate = 5.0;

    let totals = compute(&profile, &[single_room_area()], &fixture_catalog(), 1)
        .expect("compute succeeds");

    // 236.80 * 1.10 * 1.20 * 1.05 = 328.2048, rounded at the edge.
    assert_eq!(totals.total_cost, 328.2);
}

#[test]
fn fixed_overheads_and_cleanup_buffer_extend_hours() {
    let mut profile = test_profile();
    profile.setup_minutes_per_area = 30.0;
    profile.travel_minutes = 60.0;
    profile.cleanup_buffer_pct = 10.0;

    let mut second_room = single_room_area();
    second_room.name = "office".to_string();
    let areas = [single_room_area(), second_room];

    let totals = compute(&profile, &areas, &fixture_catalog(), 1).expect("compute succeeds");

    // 6.4 painting hours + 2 x 0.5h setup + 1h travel, then +10% cleanup.
    assert_close(totals.labor_hours_total, 9.24);
    assert_eq!(totals.labor_cost, 462.0);
    assert_eq!(totals.estimated_duration_days, 2);
}

#[test]
fn sundries_kit_is_charged_once_per_painted_area() {
    let mut profile = test_profile();
    profile.material_costs.sundries_kit = 25.0;

    let mut prep_only = single_room_area();
    prep_only.name = "hallway".to_string();
    prep_only.surfaces.clear();
    prep_only.prep_items.push(taping_item(90.0, 0.02));
    let areas = [single_room_area(), prep_only];

    let totals = compute(&profile, &areas, &fixture_catalog(), 1).expect("compute succeeds");

    // One kit for the painted bedroom; the prep-only hallway takes none.
    // Paint 76.80 + half a tape roll at $5 + one $25 kit.
    assert_eq!(totals.material_cost, 104.3);
}

#[test]
fn duration_scales_with_crew_size() {
    let mut profile = test_profile();
    profile.setup_minutes_per_area = 30.0;
    profile.travel_minutes = 60.0;
    profile.cleanup_buffer_pct = 10.0;

    let mut second_room = single_room_area();
    second_room.name = "office".to_string();
    let areas = [single_room_area(), second_room];

    let solo = compute(&profile, &areas, &fixture_catalog(), 1).expect("compute succeeds");
    let crew = compute(&profile, &areas, &fixture_catalog(), 4).expect("compute succeeds");

    assert_eq!(solo.estimated_duration_days, 2);
    assert_eq!(crew.estimated_duration_days, 1);
    // Crew size is advisory scheduling input, never cost math.
    assert_eq!(solo.total_cost, crew.total_cost);
}

#[test]
fn recomputation_is_bit_identical() {
    let profile = test_profile();
    let areas = [single_room_area()];
    let catalog = fixture_catalog();

    let first = compute(&profile, &areas, &catalog, 1).expect("compute succeeds");
    let second = compute(&profile, &areas, &catalog, 1).expect("compute succeeds");

    assert_eq!(
        first.labor_hours_total.to_bits(),
        second.labor_hours_total.to_bits()
    );
    assert_eq!(first.total_cost.to_bits(), second.total_cost.to_bits());
    assert_eq!(first.material_cost.to_bits(), second.material_cost.to_bits());
}

#[test]
fn one_bad_surface_fails_the_whole_estimate() {
    let mut broken_room = single_room_area();
    broken_room.name = "sunroom".to_string();
    broken_room.surfaces[0].measurement = Some(0.0);
    let areas = [single_room_area(), broken_room];

    let error = compute(&test_profile(), &areas, &fixture_catalog(), 1)
        .expect_err("expected invalid surface");

    match error {
        ComputeError::InvalidSurface { area, .. } => assert_eq!(area, "sunroom"),
        other => panic!("expected invalid surface, got {other:?}"),
    }
}

#[test]
fn growing_a_measurement_never_lowers_the_total() {
    let profile = test_profile();
    let catalog = fixture_catalog();

    let mut smaller = single_room_area();
    smaller.surfaces[0].measurement = Some(320.0);
    let mut larger = single_room_area();
    larger.surfaces[0].measurement = Some(400.0);

    let small = compute(&profile, &[smaller], &catalog, 1).expect("compute succeeds");
    let large = compute(&profile, &[larger], &catalog, 1).expect("compute succeeds");

    assert!(large.total_cost >= small.total_cost);
}
