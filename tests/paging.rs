use jobradar::models::listing::{
    DEFAULT_LIMIT, ListingPage, MAX_LIMIT, clamp_limit, clamp_page, total_pages,
};

#[test]
fn page_defaults_to_one_and_never_goes_below() {
    assert_eq!(clamp_page(None), 1);
    assert_eq!(clamp_page(Some(0)), 1);
    assert_eq!(clamp_page(Some(-3)), 1);
    assert_eq!(clamp_page(Some(7)), 7);
}

#[test]
fn limit_defaults_and_caps() {
    assert_eq!(clamp_limit(None), DEFAULT_LIMIT);
    assert_eq!(clamp_limit(Some(0)), 1);
    assert_eq!(clamp_limit(Some(10)), 10);
    assert_eq!(clamp_limit(Some(10_000)), MAX_LIMIT);
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0, 30), 0);
    assert_eq!(total_pages(1, 30), 1);
    assert_eq!(total_pages(30, 30), 1);
    assert_eq!(total_pages(31, 30), 2);
    assert_eq!(total_pages(3, 2), 2);
}

#[test]
fn first_page_of_three_rows_at_limit_two_has_more() {
    let page = ListingPage::new(Vec::new(), 3, 1, 2);
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert!(page.has_more);
}

#[test]
fn last_page_has_no_more() {
    let page = ListingPage::new(Vec::new(), 3, 2, 2);
    assert!(!page.has_more);
}

#[test]
fn page_past_the_end_reports_no_more_and_keeps_total() {
    let page = ListingPage::new(Vec::new(), 3, 9, 2);
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert!(!page.has_more);
    assert!(page.jobs.is_empty());
}

#[test]
fn empty_store_yields_zero_pages() {
    let page = ListingPage::new(Vec::new(), 0, 1, 30);
    assert_eq!(page.total_pages, 0);
    assert!(!page.has_more);
}

#[test]
fn envelope_serializes_camel_case() {
    let page = ListingPage::new(Vec::new(), 3, 1, 2);
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["page"], 1);
    assert_eq!(json["totalPages"], 2);
    assert_eq!(json["hasMore"], true);
    assert!(json["jobs"].as_array().unwrap().is_empty());
}
