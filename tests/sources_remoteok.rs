use chrono::DateTime;
use jobradar::models::listing::Category;
use jobradar::sources::remoteok::parse_response;

const FIXTURE: &str = include_str!("fixtures/remoteok.json");

#[test]
fn fixture_parses_skipping_legal_notice_and_idless_records() {
    let listings = parse_response(FIXTURE).expect("remoteok parse ok");
    assert_eq!(listings.len(), 2);

    let rust = &listings[0];
    assert_eq!(rust.external_id, "remoteok-123456");
    assert_eq!(rust.title, "Rust Engineer");
    assert_eq!(rust.company, "Ferrous Systems");
    assert_eq!(rust.location, "Worldwide");
    assert_eq!(rust.url, "https://remoteok.com/remote-jobs/123456");
    assert_eq!(rust.salary.as_deref(), Some("$70000 - $110000"));
    assert_eq!(rust.source, "remoteok");
    // epoch takes precedence over the date string
    assert_eq!(
        rust.posted_at,
        DateTime::from_timestamp(1_785_398_400, 0).unwrap()
    );
}

#[test]
fn everything_on_the_board_is_remote() {
    let listings = parse_response(FIXTURE).unwrap();
    assert!(listings.iter().all(|l| l.remote));
}

#[test]
fn string_ids_and_missing_fields_normalize() {
    let listings = parse_response(FIXTURE).unwrap();
    let officer = &listings[1];
    assert_eq!(officer.external_id, "remoteok-123457");
    // no location in the record -> the board's global default
    assert_eq!(officer.location, "Remote");
    assert_eq!(officer.salary, None);
    // "humanitarian" in the description flags the NGO category
    assert_eq!(officer.category, Category::Ngo);
    // no epoch -> falls back to the RFC 3339 date
    assert_eq!(
        officer.posted_at.to_rfc3339(),
        "2026-08-02T12:00:00+00:00"
    );
}

#[test]
fn garbage_payload_is_an_error() {
    assert!(parse_response("{}").is_err());
    assert!(parse_response("not json").is_err());
}
