use serde::{Deserialize, Serialize};

/// Task domain model - a to-do item completed with a photo as proof
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Task {
    pub id: String,
    pub title: String,

    /// Transitions false -> true only; there is no un-complete operation
    pub completed: bool,

    /// Null until the task is completed, then the photo reference supplied at completion
    pub photo_url: Option<String>,

    pub created_at: String,

    /// Present only once the task is completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl Task {
    /// Canonical new task: fresh id, open state, creation timestamp
    pub fn new(title: impl Into<String>) -> Self {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
            photo_url: None,
            created_at: chrono::Utc::now().to_rfc3339(),
            completed_at: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskPayload {
    pub title: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompleteTaskPayload {
    pub photo_url: Option<String>,
}
