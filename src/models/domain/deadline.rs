use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deadline {
    pub id: String,
    pub title: String,
    pub due_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    pub urgency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Deadline {
    pub fn new(
        title: &str,
        due_date: &str,
        course: Option<&str>,
        urgency: &str,
        description: Option<&str>,
    ) -> Self {
        Deadline {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            due_date: due_date.to_string(),
            course: course.map(str::to_string),
            urgency: urgency.to_string(),
            description: description.map(str::to_string),
        }
    }
}
