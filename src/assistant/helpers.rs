use chrono::Utc;

use std::env;

use crate::internal_error::{InternalError, InternalResult};

use super::data::*;

const GEMINI_MODEL: &str = "gemini-2.5-flash";
const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub fn extraction_prompt(transcript: &str) -> String {
    format!(
        "You are an assistant that extracts task details from user instructions. \
         Given the following text, extract the following fields as JSON: \
         title, status, body, date (in JavaScript date string format), category, \
         elderID, latitude, longitude, volunteerID. \
         If a field is not mentioned, use an empty string or null. \
         If the user references today or tomorrow, the date is \"{}\". \
         Remember to put the right time based on the user's request. \
         User said: \"{}\"",
        Utc::now(),
        transcript
    )
}

/// Sends the transcript to Gemini and parses the reply into task fields.
/// Needs `GEMINI_API_KEY` in the environment.
pub async fn extract_task_fields(transcript: &str) -> InternalResult<ExtractedTaskFields> {
    let api_key = env::var("GEMINI_API_KEY")?;

    let request = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: extraction_prompt(transcript),
            }],
        }],
    };

    let response = reqwest::Client::new()
        .post(format!(
            "{}/{}:generateContent",
            GEMINI_ENDPOINT, GEMINI_MODEL
        ))
        .header("x-goog-api-key", &api_key)
        .json(&request)
        .send()
        .await?
        .error_for_status()?
        .json::<GenerateContentResponse>()
        .await?;

    let text = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.parts.first())
        .map(|part| part.text.as_str())
        .ok_or_else(|| InternalError::from("Gemini returned no candidates"))?;

    parse_task_fields(text)
}

/// The model tends to wrap its JSON in prose or a code fence, so take the
/// outermost brace pair instead of parsing the whole reply.
pub fn parse_task_fields(text: &str) -> InternalResult<ExtractedTaskFields> {
    let start = text
        .find('{')
        .ok_or_else(|| InternalError::from("no JSON object in model reply"))?;
    let end = text
        .rfind('}')
        .filter(|end| *end > start)
        .ok_or_else(|| InternalError::from("no JSON object in model reply"))?;

    Ok(serde_json::from_str(&text[start..=end])?)
}
