use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutoringSession {
    pub id: String,
    pub tutor: String,
    pub subject: String,
    pub time: String,
    pub location: String,
    pub availability: String,
}

impl TutoringSession {
    pub fn new(tutor: &str, subject: &str, time: &str, location: &str, availability: &str) -> Self {
        TutoringSession {
            id: Uuid::new_v4().to_string(),
            tutor: tutor.to_string(),
            subject: subject.to_string(),
            time: time.to_string(),
            location: location.to_string(),
            availability: availability.to_string(),
        }
    }
}
