use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Event {
    pub fn new(
        title: &str,
        date: &str,
        time: &str,
        location: &str,
        category: &str,
        description: Option<&str>,
    ) -> Self {
        Event {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            location: location.to_string(),
            category: category.to_string(),
            description: description.map(str::to_string),
        }
    }
}
