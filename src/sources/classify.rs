//! Keyword classifier assigning a Category to aggregated postings.
//! Best effort: anything not recognizably UN or NGO falls back to
//! the international default.

use crate::models::listing::Category;

/// Organization names that mark a posting as UN-system.
const UN_ORGS: &[&str] = &[
    "united nations",
    "unicef",
    "unhcr",
    "undp",
    "unesco",
    "unops",
    "unfpa",
    "unaids",
    "un women",
    "world food programme",
    "world health organization",
    "international labour organization",
    "international organization for migration",
];

/// Phrases that mark a posting as NGO work.
const NGO_SIGNALS: &[&str] = &[
    "nonprofit",
    "non-profit",
    "charity",
    "humanitarian",
    "red cross",
    "red crescent",
    "save the children",
    "oxfam",
    "care international",
    "mercy corps",
    "doctors without borders",
    "amnesty international",
    "world vision",
];

/// Short tokens that must match as whole words to avoid substring
/// false positives ("mango" is not an NGO).
const NGO_WORDS: &[&str] = &["ngo", "ingo"];

pub fn classify(company: &str, title: &str, description: &str) -> Category {
    let company = company.to_lowercase();
    if UN_ORGS.iter().any(|org| company.contains(org)) {
        return Category::Un;
    }

    let haystack = format!(
        "{company} {} {}",
        title.to_lowercase(),
        description.to_lowercase()
    );
    if NGO_SIGNALS.iter().any(|sig| haystack.contains(sig))
        || NGO_WORDS.iter().any(|w| contains_word(&haystack, w))
    {
        return Category::Ngo;
    }

    Category::International
}

fn contains_word(haystack: &str, word: &str) -> bool {
    haystack
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| token == word)
}
