use jobradar::models::listing::Category;
use jobradar::sources::jooble::parse_response;

const FIXTURE: &str = include_str!("fixtures/jooble.json");

#[test]
fn fixture_parses_and_drops_untitled_records() {
    let listings = parse_response(FIXTURE).expect("jooble parse ok");
    assert_eq!(listings.len(), 2);

    let coordinator = &listings[0];
    assert_eq!(coordinator.external_id, "jooble-5551234567890");
    assert_eq!(coordinator.title, "Programme Coordinator");
    assert_eq!(coordinator.company, "UNICEF");
    assert_eq!(coordinator.location, "Geneva");
    assert_eq!(coordinator.source, "jooble");
    assert_eq!(coordinator.category, Category::Un);
    assert!(!coordinator.remote);
    // empty salary string folds to None
    assert_eq!(coordinator.salary, None);
}

#[test]
fn timestamps_with_and_without_fractions_parse_as_utc() {
    let listings = parse_response(FIXTURE).unwrap();
    assert_eq!(
        listings[0].posted_at.to_rfc3339(),
        "2026-08-01T00:00:00+00:00"
    );
    assert_eq!(
        listings[1].posted_at.to_rfc3339(),
        "2026-07-15T09:30:00+00:00"
    );
}

#[test]
fn remote_is_inferred_from_location() {
    let listings = parse_response(FIXTURE).unwrap();
    let field_officer = &listings[1];
    assert_eq!(field_officer.location, "Remote, Kenya");
    assert!(field_officer.remote);
    assert_eq!(field_officer.salary.as_deref(), Some("$40k"));
    assert_eq!(field_officer.category, Category::Ngo);
}

#[test]
fn garbage_payload_is_an_error() {
    assert!(parse_response("not json").is_err());
}

#[test]
fn missing_jobs_key_is_an_empty_batch() {
    let listings = parse_response(r#"{"totalCount": 0}"#).expect("empty parse ok");
    assert!(listings.is_empty());
}
