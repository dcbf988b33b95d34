use std::sync::Mutex;

use async_trait::async_trait;

use crate::services::page_fetcher::{FetchOutcome, PageFetcher};

/// A fetcher that resolves every URL to the same outcome and records which
/// URLs were requested, in order.
pub struct StaticPageFetcher {
    outcome: FetchOutcome,
    requested: Mutex<Vec<String>>,
}

impl StaticPageFetcher {
    pub fn always(text: &str) -> Self {
        Self::with_outcome(FetchOutcome::Content(text.to_string()))
    }

    pub fn with_outcome(outcome: FetchOutcome) -> Self {
        Self {
            outcome,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn fetched(&self) -> Vec<String> {
        self.requested.lock().expect("fetch log lock").clone()
    }
}

#[async_trait]
impl PageFetcher for StaticPageFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        self.requested
            .lock()
            .expect("fetch log lock")
            .push(url.to_string());
        self.outcome.clone()
    }
}

pub mod fixtures {
    use crate::models::domain::{Deadline, Event, TutoringSession};

    pub fn sample_events() -> Vec<Event> {
        vec![
            Event::new(
                "AI Workshop: Building Campus Apps",
                "Oct 30, 2026",
                "2:00 PM - 4:00 PM",
                "Engineering Building, Room 205",
                "Academic",
                None,
            ),
            Event::new(
                "Career Fair 2026",
                "Nov 5, 2026",
                "10:00 AM - 4:00 PM",
                "Student Center, Main Hall",
                "Career",
                None,
            ),
        ]
    }

    pub fn sample_deadlines() -> Vec<Deadline> {
        vec![
            Deadline::new(
                "Project Proposal Submission",
                "Oct 28, 2026 11:59 PM",
                Some("CS 401: Senior Capstone"),
                "today",
                None,
            ),
            Deadline::new("Midterm Exam", "Nov 2, 2026 2:00 PM", None, "thisWeek", None),
        ]
    }

    pub fn sample_tutoring() -> Vec<TutoringSession> {
        vec![TutoringSession::new(
            "Dr. Sarah Johnson",
            "Calculus I & II",
            "Today, 2:00 PM - 4:00 PM",
            "Building A, Room 305",
            "Available",
        )]
    }
}
