use jobradar::links::is_application_url;

#[test]
fn bare_domain_roots_are_rejected() {
    assert!(!is_application_url("https://acme.com"));
    assert!(!is_application_url("https://acme.com/"));
    assert!(!is_application_url("http://acme.com"));
}

#[test]
fn non_http_schemes_are_rejected() {
    assert!(!is_application_url("ftp://acme.com/jobs/1"));
    assert!(!is_application_url("acme.com/jobs/1"));
    assert!(!is_application_url(""));
}

#[test]
fn generic_site_pages_are_rejected() {
    assert!(!is_application_url("https://acme.com/about"));
    assert!(!is_application_url("https://acme.com/contact"));
    assert!(!is_application_url("https://acme.com/blog"));
}

#[test]
fn listing_indexes_are_rejected() {
    assert!(!is_application_url("https://acme.com/careers"));
    assert!(!is_application_url("https://acme.com/jobs/"));
    assert!(!is_application_url("https://acme.com/company/careers"));
}

#[test]
fn single_posting_pages_pass() {
    assert!(is_application_url(
        "https://acme.com/careers/senior-backend-engineer"
    ));
    assert!(is_application_url("https://acme.com/jobs/4567"));
    assert!(is_application_url(
        "https://boards.greenhouse.io/acme/jobs/4567"
    ));
    assert!(is_application_url("https://apply.workable.com/acme-j-1"));
}

#[test]
fn query_strings_do_not_change_the_verdict() {
    assert!(is_application_url(
        "https://acme.com/jobs/4567?utm_source=aggregator"
    ));
    assert!(!is_application_url("https://acme.com/careers?page=2"));
}
