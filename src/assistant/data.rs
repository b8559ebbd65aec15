use serde::{Deserialize, Serialize};

use crate::tasks::data::{Task, TaskID, TaskStatus};

#[derive(Deserialize, Debug)]
pub struct ChatRequest {
    pub transcript: String,
    #[serde(rename = "elderID", default)]
    pub elder_id: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// The fields the model manages to pull out of a transcript. Everything is
/// optional; the model is told to leave unmentioned fields empty or null.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ExtractedTaskFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "elderID", default)]
    pub elder_id: Option<String>,
    #[serde(rename = "volunteerID", default)]
    pub volunteer_id: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl ExtractedTaskFields {
    /// The transcript often omits who and where; the request carries those.
    pub fn fill_missing(&mut self, request: &ChatRequest) {
        if self.elder_id.as_deref().unwrap_or("").is_empty() {
            self.elder_id = Some(request.elder_id.clone());
        }
        if self.latitude.is_none() {
            self.latitude = request.latitude;
        }
        if self.longitude.is_none() {
            self.longitude = request.longitude;
        }
    }

    pub fn to_task(&self) -> Task {
        Task {
            title: self.title.clone().unwrap_or_default(),
            body: self.body.clone().unwrap_or_default(),
            date: self.date.clone().unwrap_or_default(),
            category: self.category.clone().filter(|c| !c.is_empty()),
            status: TaskStatus::Pending,
            elder_id: self.elder_id.clone().unwrap_or_default(),
            volunteer_id: self.volunteer_id.clone().filter(|v| !v.is_empty()),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ChatCreateResult {
    pub id: TaskID,
    pub message: String,
    pub fields: ExtractedTaskFields,
}

// Wire shapes for the Gemini generateContent call.

#[derive(Serialize, Debug)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Part {
    pub text: String,
}

#[derive(Deserialize, Debug)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
pub struct Candidate {
    pub content: Content,
}
