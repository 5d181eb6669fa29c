use std::sync::Arc;

use super::common::*;
use crate::workflows::estimating::catalog::FixedCatalog;
use crate::workflows::estimating::domain::EstimateStatus;
use crate::workflows::estimating::profile::RateProfileError;
use crate::workflows::estimating::repository::{EstimateRepository, RepositoryError};
use crate::workflows::estimating::service::{
    EstimateRevision, EstimateService, EstimateServiceError,
};

#[test]
fn create_persists_a_priced_draft() {
    let (service, repository, _) = build_service();

    let record = service.create(submission(), today()).expect("create succeeds");

    assert!(record.id.0.starts_with("est-"));
    assert_eq!(record.status, EstimateStatus::Draft);
    assert_eq!(record.created_on, today());
    assert_eq!(record.totals.total_cost, 267.58);

    let stored = repository
        .fetch(&record.id)
        .expect("repo fetch")
        .expect("record present");
    assert_eq!(stored, record);
}

#[test]
fn send_delivers_the_quote_and_locks_the_estimate() {
    let (service, _, delivery) = build_service();
    let record = service.create(submission(), today()).expect("create succeeds");

    let sent = service.send(&record.id, today()).expect("send succeeds");

    assert_eq!(sent.status, EstimateStatus::Sent);
    assert_eq!(sent.sent_on, Some(today()));

    let events = delivery.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].estimate_id, record.id);
    assert_eq!(events[0].total_cost, record.totals.total_cost);

    match service.recompute(&record.id) {
        Err(EstimateServiceError::NotEditable { status, .. }) => {
            assert_eq!(status, EstimateStatus::Sent);
        }
        other => panic!("expected not-editable error, got {other:?}"),
    }
}

#[test]
fn duplicate_resets_status_and_recomputes_totals() {
    let (service, _, _) = build_service();
    let original = service.create(submission(), today()).expect("create succeeds");
    service.send(&original.id, today()).expect("send succeeds");

    let copy = service.duplicate(&original.id, today()).expect("duplicate succeeds");

    assert_ne!(copy.id, original.id);
    assert_eq!(copy.status, EstimateStatus::Draft);
    assert!(copy.sent_on.is_none());
    // Same snapshot, same catalog: the recomputed copy prices identically.
    assert_eq!(copy.totals.total_cost, original.totals.total_cost);
    assert_eq!(copy.areas, original.areas);
}

#[test]
fn revise_replaces_inputs_and_reprices() {
    let (service, repository, _) = build_service();
    let record = service.create(submission(), today()).expect("create succeeds");

    let mut second_room = single_room_area();
    second_room.name = "office".to_string();
    let revision = EstimateRevision {
        areas: vec![single_room_area(), second_room],
        crew_size: Some(3),
    };

    let revised = service.revise(&record.id, revision).expect("revise succeeds");

    assert!(revised.totals.total_cost > record.totals.total_cost);
    assert_eq!(revised.crew_size, 3);

    let stored = repository
        .fetch(&record.id)
        .expect("repo fetch")
        .expect("record present");
    assert_eq!(stored.totals, revised.totals);
}

#[test]
fn failed_revision_leaves_stored_totals_untouched() {
    let (service, repository, _) = build_service();
    let record = service.create(submission(), today()).expect("create succeeds");

    let mut broken = single_room_area();
    broken.surfaces[0].measurement = Some(-10.0);
    let error = service
        .revise(
            &record.id,
            EstimateRevision {
                areas: vec![broken],
                crew_size: None,
            },
        )
        .expect_err("expected compute error");
    assert!(matches!(error, EstimateServiceError::Compute(_)));

    let stored = repository
        .fetch(&record.id)
        .expect("repo fetch")
        .expect("record present");
    assert_eq!(stored.totals, record.totals);
    assert_eq!(stored.areas, record.areas);
}

#[test]
fn invalid_profile_is_rejected_before_any_computation() {
    let (service, _, _) = build_service();
    let mut bad = submission();
    bad.profile.tax_rate = -5.0;

    match service.create(bad, today()) {
        Err(EstimateServiceError::Profile(RateProfileError::NegativePercentage {
            field, ..
        })) => assert_eq!(field, "tax_rate"),
        other => panic!("expected profile error, got {other:?}"),
    }
}

#[test]
fn repository_outages_surface_as_service_errors() {
    let repository = Arc::new(UnavailableRepository);
    let delivery = Arc::new(MemoryDelivery::default());
    let catalog = Arc::new(FixedCatalog::new(fixture_catalog()));
    let service = EstimateService::new(repository, delivery, catalog);

    match service.create(submission(), today()) {
        Err(EstimateServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected repository error, got {other:?}"),
    }
}
