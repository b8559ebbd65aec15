use serde::{Deserialize, Serialize};

pub type TaskID = i64;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Claimed,
    Completed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Claimed => "claimed",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn from_str(value: &str) -> Option<TaskStatus> {
        match value {
            "pending" => Some(TaskStatus::Pending),
            "claimed" => Some(TaskStatus::Claimed),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

/// A help request created by an elder. Category and coordinates are optional
/// because assistant-created tasks can arrive with fields the model could
/// not extract; the matcher treats such tasks as unmatchable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub title: String,
    pub body: String,
    pub date: String,
    pub category: Option<String>,
    pub status: TaskStatus,
    #[serde(rename = "elderID")]
    pub elder_id: String,
    #[serde(rename = "volunteerID")]
    pub volunteer_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Task {
    /// Older records store an empty string instead of null for the missing
    /// volunteer, so both count as unclaimed.
    pub fn is_unclaimed(&self) -> bool {
        match &self.volunteer_id {
            Some(volunteer_id) => volunteer_id.is_empty(),
            None => true,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct AddTaskRequest {
    pub title: String,
    pub body: String,
    pub date: String,
    pub category: Option<String>,
    #[serde(rename = "elderID")]
    pub elder_id: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl AddTaskRequest {
    /// New tasks always start out pending and unclaimed.
    pub fn into_task(self) -> Task {
        Task {
            title: self.title,
            body: self.body,
            date: self.date,
            category: self.category,
            status: TaskStatus::Pending,
            elder_id: self.elder_id,
            volunteer_id: None,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct AddTaskResult {
    pub id: TaskID,
    pub message: String,
}

/// Partial update; only the present fields are written. Claiming a task is
/// a PATCH setting `volunteerID` and `status`.
#[derive(Deserialize, Debug, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub status: Option<TaskStatus>,
    #[serde(rename = "volunteerID")]
    pub volunteer_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings_round_trip() {
        for status in [TaskStatus::Pending, TaskStatus::Claimed, TaskStatus::Completed] {
            assert_eq!(TaskStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::from_str("archived"), None);
    }

    #[test]
    fn unclaimed_covers_null_and_empty_volunteer() {
        let mut task = AddTaskRequest {
            title: "Water the plants".to_string(),
            body: String::new(),
            date: "2025-11-01".to_string(),
            category: Some("Gardening".to_string()),
            elder_id: "E001".to_string(),
            latitude: None,
            longitude: None,
        }
        .into_task();

        assert!(task.is_unclaimed());
        task.volunteer_id = Some(String::new());
        assert!(task.is_unclaimed());
        task.volunteer_id = Some("helper@example.com".to_string());
        assert!(!task.is_unclaimed());
    }

    #[test]
    fn new_tasks_start_pending() {
        let task = AddTaskRequest {
            title: "Water the plants".to_string(),
            body: String::new(),
            date: "2025-11-01".to_string(),
            category: None,
            elder_id: "E001".to_string(),
            latitude: None,
            longitude: None,
        }
        .into_task();

        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.volunteer_id, None);
    }
}
