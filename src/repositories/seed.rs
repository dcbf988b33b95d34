use crate::{
    errors::AppResult,
    models::domain::{Deadline, Event, TutoringSession},
    repositories::{DeadlineRepository, EventRepository, TutoringSessionRepository},
};

/// Inserts the demo campus records served by the list endpoints. Called once
/// at startup; the in-memory store starts empty otherwise.
pub async fn seed_demo_data(
    events: &dyn EventRepository,
    deadlines: &dyn DeadlineRepository,
    tutoring: &dyn TutoringSessionRepository,
) -> AppResult<()> {
    let demo_events = [
        Event::new(
            "AI Workshop: Building Campus Apps",
            "Oct 30, 2026",
            "2:00 PM - 4:00 PM",
            "Engineering Building, Room 205",
            "Academic",
            Some("Learn how to build AI-powered applications for campus use."),
        ),
        Event::new(
            "Career Fair 2026",
            "Nov 5, 2026",
            "10:00 AM - 4:00 PM",
            "Student Center, Main Hall",
            "Career",
            Some("Meet with top employers and explore internship opportunities."),
        ),
        Event::new(
            "Fall Concert Series",
            "Nov 8, 2026",
            "7:00 PM - 9:00 PM",
            "Performing Arts Center",
            "Arts",
            None,
        ),
    ];

    let demo_deadlines = [
        Deadline::new(
            "Project Proposal Submission",
            "Oct 28, 2026 11:59 PM",
            Some("CS 401: Senior Capstone"),
            "today",
            Some("Submit your final project proposal."),
        ),
        Deadline::new(
            "Midterm Exam",
            "Nov 2, 2026 2:00 PM",
            Some("MATH 301: Linear Algebra"),
            "thisWeek",
            None,
        ),
    ];

    let demo_tutoring = [
        TutoringSession::new(
            "Dr. Sarah Johnson",
            "Calculus I & II",
            "Today, 2:00 PM - 4:00 PM",
            "Building A, Room 305",
            "Available",
        ),
        TutoringSession::new(
            "Prof. Michael Chen",
            "Computer Science",
            "Tomorrow, 3:00 PM - 5:00 PM",
            "CS Lab, Room 120",
            "Limited",
        ),
    ];

    for event in demo_events {
        events.create(event).await?;
    }
    for deadline in demo_deadlines {
        deadlines.create(deadline).await?;
    }
    for session in demo_tutoring {
        tutoring.create(session).await?;
    }

    Ok(())
}
