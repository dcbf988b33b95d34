//! Candidate web addresses for campus lookups. Pure string construction:
//! nothing here validates that a generated address is reachable.

/// Real events pages for a short list of known institutions. Keys are matched
/// by case-insensitive substring containment against the whole message and
/// take priority over generated candidates.
pub const KNOWN_EVENT_PAGES: &[(&str, &str)] = &[
    ("howard", "https://howard.edu/events"),
    ("stanford", "https://events.stanford.edu"),
    ("mit", "https://calendar.mit.edu"),
    ("harvard", "https://news.harvard.edu/gazette/harvard-events/"),
    ("berkeley", "https://events.berkeley.edu"),
    ("maryland", "https://calendar.umd.edu"),
];

/// Looks the message up in the known-institution map. Returns the mapped
/// URL(s) for the first matching key, or `None` when no key is contained in
/// the message. Keys match whole words so "mit" does not fire on "submit".
pub fn known_event_urls(message: &str) -> Option<Vec<String>> {
    let lowered = message.to_lowercase();
    KNOWN_EVENT_PAGES
        .iter()
        .find(|(key, _)| {
            lowered
                .split(|c: char| !c.is_alphanumeric())
                .any(|word| word == *key)
        })
        .map(|(_, url)| vec![url.to_string()])
}

/// Lower-cases the institution name, drops the generic words
/// university/college/institute/of/the, and removes all remaining spaces.
/// "Howard University" -> "howard", "University of Maryland" -> "maryland".
pub fn normalize_institution(name: &str) -> String {
    let token: String = name
        .to_lowercase()
        .split_whitespace()
        .filter(|word| {
            !matches!(
                word.trim_matches(|c: char| !c.is_alphanumeric()),
                "university" | "college" | "institute" | "of" | "the"
            )
        })
        .collect();
    if token.is_empty() {
        name.to_lowercase().split_whitespace().collect()
    } else {
        token
    }
}

/// Ordered event-page candidates for an institution that is not in the known
/// map. Order is significant: downstream consumers only take a prefix.
pub fn generate_event_urls(university: &str) -> Vec<String> {
    let token = normalize_institution(university);
    vec![
        format!("https://www.{token}.edu/events"),
        format!("https://events.{token}.edu"),
        format!("https://calendar.{token}.edu"),
        format!("https://www.{token}.edu/calendar"),
        format!("https://www.{token}.edu/student-life/events"),
        format!("https://www.{token}.ac.uk/events"),
        format!("https://www.{token}.edu.au/events"),
    ]
}

/// Ordered faculty-lookup candidates. Branches on which optional arguments
/// are present: a named professor wins over a department, which wins over the
/// generic directory templates.
pub fn generate_professor_urls(
    university: &str,
    professor: Option<&str>,
    department: Option<&str>,
) -> Vec<String> {
    let token = normalize_institution(university);
    if let Some(name) = professor {
        let query = encode_query(name);
        let slug = slugify(name);
        vec![
            format!("https://www.{token}.edu/search?q={query}"),
            format!("https://www.{token}.edu/directory?search={query}"),
            format!("https://www.{token}.edu/faculty/{slug}"),
            format!("https://www.{token}.edu/people/{slug}"),
        ]
    } else if let Some(name) = department {
        let slug = slugify(name);
        vec![
            format!("https://www.{token}.edu/{slug}/faculty"),
            format!("https://{slug}.{token}.edu/people"),
            format!("https://www.{token}.edu/departments/{slug}/faculty"),
            format!("https://www.{token}.edu/academics/{slug}"),
        ]
    } else {
        vec![
            format!("https://www.{token}.edu/faculty"),
            format!("https://www.{token}.edu/directory"),
            format!("https://www.{token}.edu/people"),
            format!("https://www.{token}.edu/academics/faculty"),
        ]
    }
}

fn encode_query(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("%20")
}

fn slugify(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
