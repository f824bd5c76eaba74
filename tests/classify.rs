use jobradar::models::listing::Category;
use jobradar::sources::classify::classify;

#[test]
fn un_agencies_match_on_company() {
    assert_eq!(classify("UNICEF", "Programme Officer", ""), Category::Un);
    assert_eq!(
        classify("United Nations Development Programme", "Analyst", ""),
        Category::Un
    );
    assert_eq!(
        classify("World Food Programme", "Logistics Lead", ""),
        Category::Un
    );
}

#[test]
fn ngo_signals_match_anywhere() {
    assert_eq!(
        classify("Mercy Corps", "Field Officer", ""),
        Category::Ngo
    );
    assert_eq!(
        classify("Relief International", "Officer", "humanitarian field programs"),
        Category::Ngo
    );
    assert_eq!(
        classify("Local Org", "Driver", "registered NGO in Nairobi"),
        Category::Ngo
    );
}

#[test]
fn short_tokens_only_match_whole_words() {
    // "mango" and "lingo" contain "ngo" but are not NGO signals.
    assert_eq!(
        classify("Mango Retail", "Store Manager", "fashion lingo welcome"),
        Category::International
    );
}

#[test]
fn everything_else_is_international() {
    assert_eq!(
        classify("Ferrous Systems", "Rust Engineer", "compiler tooling"),
        Category::International
    );
    assert_eq!(classify("", "", ""), Category::International);
}

#[test]
fn category_parses_lowercase_wire_values() {
    assert_eq!(
        serde_json::from_str::<Category>("\"un\"").unwrap(),
        Category::Un
    );
    assert_eq!(
        serde_json::from_str::<Category>("\"ngo\"").unwrap(),
        Category::Ngo
    );
    assert_eq!(
        serde_json::from_str::<Category>("\"international\"").unwrap(),
        Category::International
    );
    assert!(serde_json::from_str::<Category>("\"charity\"").is_err());
    assert_eq!(Category::default(), Category::International);
}
