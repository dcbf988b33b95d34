//! The context-enrichment pipeline behind the chat endpoint: decide which web
//! addresses are worth a look for this utterance, fetch them concurrently,
//! and assemble the bounded prompt sent to the model.

use std::sync::Arc;

use futures::future::join_all;

use crate::{
    constants::{
        limits::{CANDIDATES_PER_CATEGORY, HISTORY_WINDOW, MAX_FETCHED_URLS, PROMPT_CHAR_BUDGET},
        prompts::ASSISTANT_PREAMBLE,
    },
    models::domain::{ChatMessage, Deadline, Event, TutoringSession},
    services::{
        extractors::{extract_department, extract_professor, extract_university, extract_urls},
        model_service::PromptMessage,
        page_fetcher::{truncate_chars, FetchFailure, FetchOutcome, FetchResult, PageFetcher},
        url_candidates::{generate_event_urls, generate_professor_urls, known_event_urls},
    },
};

const EVENT_KEYWORDS: &[&str] = &[
    "event",
    "events",
    "happening",
    "activities",
    "calendar",
    "concert",
    "festival",
    "fair",
    "workshop",
];

const PROFESSOR_KEYWORDS: &[&str] = &[
    "professor",
    "prof",
    "faculty",
    "staff",
    "office hours",
    "instructor",
    "lecturer",
    "contact",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlOrigin {
    /// Spelled out verbatim in the message.
    Literal,
    /// From the static known-institution map.
    Known,
    /// Substituted into a domain template.
    Generated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateUrl {
    pub url: String,
    pub origin: UrlOrigin,
}

/// Candidate selection is pure; ordering is contractual. Literal URLs come
/// first, then the event path (known map before generated templates), then
/// the professor path. Callers cap how much of the prefix they consume.
pub fn select_candidate_urls(message: &str) -> Vec<CandidateUrl> {
    let mut candidates: Vec<CandidateUrl> = extract_urls(message)
        .into_iter()
        .map(|url| CandidateUrl {
            url,
            origin: UrlOrigin::Literal,
        })
        .collect();

    let lowered = message.to_lowercase();

    if EVENT_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        if let Some(urls) = known_event_urls(message) {
            candidates.extend(urls.into_iter().map(|url| CandidateUrl {
                url,
                origin: UrlOrigin::Known,
            }));
        } else if let Some(university) = extract_university(message) {
            candidates.extend(
                generate_event_urls(&university.value)
                    .into_iter()
                    .take(CANDIDATES_PER_CATEGORY)
                    .map(|url| CandidateUrl {
                        url,
                        origin: UrlOrigin::Generated,
                    }),
            );
        }
    }

    if PROFESSOR_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        if let Some(university) = extract_university(message) {
            let professor = extract_professor(message);
            let department = extract_department(message);
            candidates.extend(
                generate_professor_urls(
                    &university.value,
                    professor.as_ref().map(|m| m.value.as_str()),
                    department.as_ref().map(|m| m.value.as_str()),
                )
                .into_iter()
                .take(CANDIDATES_PER_CATEGORY)
                .map(|url| CandidateUrl {
                    url,
                    origin: UrlOrigin::Generated,
                }),
            );
        }
    }

    candidates
}

pub struct ContextService {
    fetcher: Arc<dyn PageFetcher>,
}

impl ContextService {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetches the first [`MAX_FETCHED_URLS`] candidates concurrently. Each
    /// fetch is failure-isolated; a slow or dead URL only affects its own
    /// slot.
    pub async fn enrich(&self, message: &str) -> Vec<FetchResult> {
        let selected: Vec<CandidateUrl> = select_candidate_urls(message)
            .into_iter()
            .take(MAX_FETCHED_URLS)
            .collect();

        if selected.is_empty() {
            return Vec::new();
        }
        log::debug!(
            "fetching {} candidate page(s): {:?}",
            selected.len(),
            selected.iter().map(|c| c.url.as_str()).collect::<Vec<_>>()
        );

        let outcomes = join_all(selected.iter().map(|c| self.fetcher.fetch(&c.url))).await;

        selected
            .into_iter()
            .zip(outcomes)
            .map(|(candidate, outcome)| FetchResult {
                url: candidate.url,
                outcome,
            })
            .collect()
    }

    /// Fixed preamble, then the campus records as bullet lists, then one
    /// labeled block per fetched page. Soft-capped at the prompt budget.
    pub fn build_system_prompt(
        &self,
        events: &[Event],
        deadlines: &[Deadline],
        tutoring: &[TutoringSession],
        fetches: &[FetchResult],
    ) -> String {
        let mut prompt = String::from(ASSISTANT_PREAMBLE);

        prompt.push_str("\n\nUPCOMING EVENTS:\n");
        for event in events {
            prompt.push_str(&format!(
                "- {} on {} at {} in {} ({})\n",
                event.title, event.date, event.time, event.location, event.category
            ));
        }

        prompt.push_str("\nDEADLINES:\n");
        for deadline in deadlines {
            match &deadline.course {
                Some(course) => prompt.push_str(&format!(
                    "- {} due {} for {}\n",
                    deadline.title, deadline.due_date, course
                )),
                None => prompt.push_str(&format!(
                    "- {} due {}\n",
                    deadline.title, deadline.due_date
                )),
            }
        }

        prompt.push_str("\nTUTORING SESSIONS:\n");
        for session in tutoring {
            prompt.push_str(&format!(
                "- {} with {} at {} in {} ({})\n",
                session.subject, session.tutor, session.time, session.location,
                session.availability
            ));
        }

        for fetch in fetches {
            prompt.push_str(&format!(
                "\nWEB PAGE CONTENT FROM {}:\n{}\n",
                fetch.url,
                render_outcome(&fetch.outcome)
            ));
        }

        truncate_chars(&prompt, PROMPT_CHAR_BUDGET)
    }

    /// The full sequence handed to the model: system prompt, up to the last
    /// [`HISTORY_WINDOW`] prior messages (excluding the record just written
    /// for this turn), then the new utterance.
    pub fn build_messages(
        &self,
        system_prompt: String,
        history: &[ChatMessage],
        current_user_message: &ChatMessage,
    ) -> Vec<PromptMessage> {
        let mut messages = vec![PromptMessage::system(system_prompt)];

        let start = history.len().saturating_sub(HISTORY_WINDOW);
        for entry in &history[start..] {
            if entry.id == current_user_message.id {
                continue;
            }
            if entry.is_ai {
                messages.push(PromptMessage::assistant(entry.message.clone()));
            } else {
                messages.push(PromptMessage::user(entry.message.clone()));
            }
        }

        messages.push(PromptMessage::user(current_user_message.message.clone()));
        messages
    }
}

/// Failures become short bracketed placeholders so the model still sees that
/// a lookup was attempted.
fn render_outcome(outcome: &FetchOutcome) -> String {
    match outcome {
        FetchOutcome::Content(text) => text.clone(),
        FetchOutcome::Failed(FetchFailure::Timeout) => {
            "[Unable to fetch page: request timed out]".to_string()
        }
        FetchOutcome::Failed(FetchFailure::Network(reason)) => {
            format!("[Unable to fetch page: {reason}]")
        }
        FetchOutcome::Failed(FetchFailure::Status(code)) => {
            format!("[Unable to fetch page: HTTP {code}]")
        }
        FetchOutcome::Failed(FetchFailure::NoReadableContent) => {
            "[No readable content found on page]".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::model_service::PromptRole;
    use crate::test_utils::{
        fixtures::{sample_deadlines, sample_events, sample_tutoring},
        StaticPageFetcher,
    };

    fn service_with(fetcher: StaticPageFetcher) -> (ContextService, Arc<StaticPageFetcher>) {
        let fetcher = Arc::new(fetcher);
        (ContextService::new(fetcher.clone()), fetcher)
    }

    #[test]
    fn test_no_detectable_entities_selects_nothing() {
        assert!(select_candidate_urls("What tutoring is available?").is_empty());
        assert!(select_candidate_urls("When is my math homework due?").is_empty());
    }

    #[test]
    fn test_literal_urls_lead_the_candidate_list() {
        let candidates = select_candidate_urls(
            "any events at Acme University? see https://acme.example/fall-fest first",
        );

        assert_eq!(candidates[0].url, "https://acme.example/fall-fest");
        assert_eq!(candidates[0].origin, UrlOrigin::Literal);
        assert!(candidates.len() > 1);
        assert!(candidates[1..]
            .iter()
            .all(|c| c.origin == UrlOrigin::Generated));
    }

    #[test]
    fn test_known_institution_short_circuits_generation() {
        let candidates =
            select_candidate_urls("What events are happening at Howard University?");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].url, "https://howard.edu/events");
        assert_eq!(candidates[0].origin, UrlOrigin::Known);
    }

    #[test]
    fn test_event_generation_is_capped_per_category() {
        let candidates = select_candidate_urls("what events are on at Acme University?");

        assert_eq!(candidates.len(), CANDIDATES_PER_CATEGORY);
        assert_eq!(candidates[0].url, "https://www.acme.edu/events");
    }

    #[test]
    fn test_both_intents_can_fire_together() {
        let candidates = select_candidate_urls(
            "are there faculty events with Professor Lee at Acme University?",
        );

        // Event path and professor path each contribute their capped list.
        assert_eq!(candidates.len(), 2 * CANDIDATES_PER_CATEGORY);
    }

    #[tokio::test]
    async fn test_enrich_caps_fetches_globally() {
        let (service, fetcher) = service_with(StaticPageFetcher::always("page text"));

        let results = service
            .enrich(
                "events with Professor Lee at Acme University, also see \
                 https://a.example/1 and https://b.example/2",
            )
            .await;

        assert_eq!(results.len(), MAX_FETCHED_URLS);
        assert_eq!(fetcher.fetched().len(), MAX_FETCHED_URLS);
        // Literal URLs were prioritized ahead of generated candidates.
        assert_eq!(results[0].url, "https://a.example/1");
        assert_eq!(results[1].url, "https://b.example/2");
    }

    #[tokio::test]
    async fn test_enrich_without_candidates_fetches_nothing() {
        let (service, fetcher) = service_with(StaticPageFetcher::always("page text"));

        let results = service.enrich("What tutoring is available?").await;

        assert!(results.is_empty());
        assert!(fetcher.fetched().is_empty());
    }

    #[test]
    fn test_prompt_contains_campus_bullets_and_no_web_blocks_without_fetches() {
        let (service, _) = service_with(StaticPageFetcher::always(""));

        let prompt = service.build_system_prompt(
            &sample_events(),
            &sample_deadlines(),
            &sample_tutoring(),
            &[],
        );

        assert!(prompt.starts_with(ASSISTANT_PREAMBLE));
        assert!(prompt
            .contains("- Calculus I & II with Dr. Sarah Johnson at Today, 2:00 PM - 4:00 PM"));
        assert!(prompt.contains("- Career Fair 2026 on Nov 5, 2026"));
        assert!(prompt.contains("due Oct 28, 2026 11:59 PM for CS 401: Senior Capstone"));
        assert!(!prompt.contains("WEB PAGE CONTENT FROM"));
    }

    #[test]
    fn test_prompt_labels_fetched_blocks_and_renders_placeholders() {
        let (service, _) = service_with(StaticPageFetcher::always(""));

        let fetches = vec![
            FetchResult {
                url: "https://howard.edu/events".to_string(),
                outcome: FetchOutcome::Content("Homecoming schedule".to_string()),
            },
            FetchResult {
                url: "https://dead.example/".to_string(),
                outcome: FetchOutcome::Failed(FetchFailure::Status(404)),
            },
            FetchResult {
                url: "https://slow.example/".to_string(),
                outcome: FetchOutcome::Failed(FetchFailure::Timeout),
            },
        ];

        let prompt = service.build_system_prompt(&[], &[], &[], &fetches);

        assert!(prompt
            .contains("WEB PAGE CONTENT FROM https://howard.edu/events:\nHomecoming schedule"));
        assert!(prompt.contains("WEB PAGE CONTENT FROM https://dead.example/:\n["));
        assert!(prompt.contains("[Unable to fetch page: HTTP 404]"));
        assert!(prompt.contains("[Unable to fetch page: request timed out]"));
    }

    #[test]
    fn test_prompt_is_soft_capped() {
        let (service, _) = service_with(StaticPageFetcher::always(""));

        let fetches: Vec<FetchResult> = (0..MAX_FETCHED_URLS)
            .map(|i| FetchResult {
                url: format!("https://big.example/{i}"),
                outcome: FetchOutcome::Content("x".repeat(20_000)),
            })
            .collect();

        let prompt = service.build_system_prompt(&[], &[], &[], &fetches);
        assert!(prompt.chars().count() <= PROMPT_CHAR_BUDGET);
    }

    #[test]
    fn test_message_sequence_windows_history_and_maps_roles() {
        let (service, _) = service_with(StaticPageFetcher::always(""));

        let mut history: Vec<ChatMessage> = (0..15)
            .map(|i| {
                if i % 2 == 0 {
                    ChatMessage::user(format!("question {i}"))
                } else {
                    ChatMessage::assistant(format!("answer {i}"))
                }
            })
            .collect();
        let current = ChatMessage::user("latest question");
        history.push(current.clone());

        let messages = service.build_messages("system".to_string(), &history, &current);

        // System + (10-window minus the excluded current record) + the new
        // utterance.
        assert_eq!(messages.len(), 1 + (HISTORY_WINDOW - 1) + 1);
        assert_eq!(messages[0].role, PromptRole::System);
        assert_eq!(messages.last().unwrap().content, "latest question");
        assert_eq!(messages.last().unwrap().role, PromptRole::User);
        assert!(messages[1..messages.len() - 1]
            .iter()
            .all(|m| m.role == PromptRole::User || m.role == PromptRole::Assistant));
        // The just-created user record is not replayed as history.
        assert_eq!(
            messages
                .iter()
                .filter(|m| m.content == "latest question")
                .count(),
            1
        );
    }
}
