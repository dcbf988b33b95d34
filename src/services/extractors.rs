//! Heuristic entity extraction over free-text chat messages.
//!
//! Each extractor walks a fixed, ordered list of declarative rules. The first
//! rule whose capture survives cleanup (trimmed, longer than 2 characters,
//! not a stop word) wins, and the rule name is kept alongside the value so
//! behaviour stays auditable per rule. Extractors never fail; no match is an
//! explicit `None`.

use once_cell::sync::Lazy;
use regex::Regex;

/// A captured entity plus the name of the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub rule: &'static str,
    pub value: String,
}

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "from", "your", "their", "about", "have", "what",
    "when", "where", "there", "here", "some", "any", "all", "you", "are", "can", "who", "how",
    "does", "contact", "email", "call", "find", "reach", "please", "tell", "show",
];

static UNIVERSITY_RULES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        (
            "keyword-of",
            Regex::new(r"((?:University|College|Institute)\s+of\s+[A-Z][\w.'-]*(?:\s+[A-Z][\w.'-]*){0,2})")
                .expect("valid regex"),
        ),
        (
            "name-keyword",
            Regex::new(r"((?:[A-Z][\w.'&-]*\s+){1,4}(?:University|College|Institute))\b")
                .expect("valid regex"),
        ),
        (
            "at-institution",
            Regex::new(r"(?i)\b(?:at|from)\s+((?:[a-z][\w'-]*\s+){1,4}(?:university|college|institute))\b")
                .expect("valid regex"),
        ),
    ]
});

static PROFESSOR_RULES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        (
            "title-name",
            Regex::new(r"(?:Professor|Prof\.?|Dr\.?)\s+([A-Z][\w-]+(?:\s+[A-Z][\w-]+){0,2})")
                .expect("valid regex"),
        ),
        (
            "possessive",
            Regex::new(r"([A-Z][\w-]+(?:\s+[A-Z][\w-]+)?)'s\s+(?i:office|class|lecture|course)")
                .expect("valid regex"),
        ),
        (
            "lowercase-title",
            Regex::new(r"(?i)\b(?:professor|prof|dr)\.?\s+([a-z][\w'-]+(?:\s+[a-z][\w'-]+)?)")
                .expect("valid regex"),
        ),
    ]
});

static DEPARTMENT_RULES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        (
            "keyword-of",
            Regex::new(r"(?i)\b(?:department|dept\.?|school)\s+of\s+([A-Za-z&][A-Za-z& ]{1,40}?)(?:\s+(?:at|in|for|on)\b|[.,;:?!]|$)")
                .expect("valid regex"),
        ),
        (
            "name-keyword",
            Regex::new(r"(?i)\b((?:[A-Za-z&]+\s+){0,3}[A-Za-z&]+)\s+(?:department|dept)\b")
                .expect("valid regex"),
        ),
        (
            "known-subject",
            Regex::new(r"(?i)\b(computer science|electrical engineering|mechanical engineering|mathematics|biology|chemistry|physics|psychology|economics|history|philosophy|sociology|english)\b")
                .expect("valid regex"),
        ),
    ]
});

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"https?://[^\s<>"')\]]+"#).expect("valid regex"));

pub fn extract_university(text: &str) -> Option<RuleMatch> {
    first_accepted(&UNIVERSITY_RULES, text)
}

pub fn extract_professor(text: &str) -> Option<RuleMatch> {
    first_accepted(&PROFESSOR_RULES, text)
}

pub fn extract_department(text: &str) -> Option<RuleMatch> {
    first_accepted(&DEPARTMENT_RULES, text)
}

/// Every `http(s)://` token in order of appearance. Trailing sentence
/// punctuation is trimmed; duplicates are kept.
pub fn extract_urls(text: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .trim_end_matches(['.', ',', ';', ':', '!', '?'])
                .to_string()
        })
        .filter(|url| !url.is_empty())
        .collect()
}

fn first_accepted(rules: &[(&'static str, Regex)], text: &str) -> Option<RuleMatch> {
    for (name, regex) in rules {
        if let Some(caps) = regex.captures(text) {
            if let Some(value) = cleanup(caps.get(1).map_or("", |m| m.as_str())) {
                return Some(RuleMatch { rule: name, value });
            }
        }
    }
    None
}

/// Trim, drop leading stop words, then apply the acceptance filter: longer
/// than 2 characters and not itself a stop word.
fn cleanup(raw: &str) -> Option<String> {
    let tokens: Vec<&str> = raw
        .split_whitespace()
        .skip_while(|token| STOP_WORDS.contains(&token.to_lowercase().as_str()))
        .collect();
    let value = tokens.join(" ");
    let lowered = value.to_lowercase();
    if value.len() > 2 && !STOP_WORDS.contains(&lowered.as_str()) {
        Some(value)
    } else {
        None
    }
}
