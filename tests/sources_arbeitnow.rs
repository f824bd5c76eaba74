use chrono::DateTime;
use jobradar::models::listing::Category;
use jobradar::sources::arbeitnow::parse_response;

const FIXTURE: &str = include_str!("fixtures/arbeitnow.json");

#[test]
fn fixture_parses_and_drops_bad_records() {
    let listings = parse_response(FIXTURE).expect("arbeitnow parse ok");
    // One good record; the titleless and slugless ones are dropped.
    assert_eq!(listings.len(), 1);

    let job = &listings[0];
    assert_eq!(
        job.external_id,
        "arbeitnow-backend-engineer-python-berlin-284789"
    );
    assert_eq!(job.title, "Backend Engineer (Python)");
    assert_eq!(job.company, "Helios Health");
    assert_eq!(job.location, "Berlin");
    assert_eq!(job.source, "arbeitnow");
    assert!(job.remote);
    assert_eq!(job.tags, vec!["Software Development", "Backend"]);
    assert_eq!(job.salary, None);
    assert_eq!(job.category, Category::International);
    assert_eq!(
        job.posted_at,
        DateTime::from_timestamp(1_753_862_400, 0).unwrap()
    );
}

#[test]
fn garbage_payload_is_an_error() {
    assert!(parse_response("not json").is_err());
    assert!(parse_response("[]").is_err());
}

#[test]
fn empty_data_is_ok() {
    let listings = parse_response(r#"{"data": []}"#).expect("empty parse ok");
    assert!(listings.is_empty());
}
