use rocket::serde::json::Json;
use rocket::{post, State};

use crate::data::DBConnection;
use crate::internal_error::{InternalError, InternalResult};
use crate::tasks::helpers::add_task_to_db;

use super::data::*;
use super::helpers::*;

/// Turns a free-form speech transcript into a stored task. The model does
/// the field extraction; the request backfills the elder's identity and
/// location when the transcript leaves them out.
#[post("/chat", format = "json", data = "<chat_request>")]
pub async fn chat_create_task(
    chat_request: Json<ChatRequest>,
    db_connection: &State<DBConnection>,
) -> InternalResult<Json<ChatCreateResult>> {
    let chat_request = chat_request.into_inner();

    if chat_request.transcript.trim().is_empty() {
        return Err(InternalError::from("No transcript provided"));
    }

    let mut fields = extract_task_fields(&chat_request.transcript).await?;
    fields.fill_missing(&chat_request);

    let task = fields.to_task();
    let message = format!("Task \"{}\" created!", task.title);

    let id = {
        let db_connection = db_connection.lock()?;
        add_task_to_db(task, &db_connection)?
    };

    Ok(Json(ChatCreateResult {
        id,
        message,
        fields,
    }))
}
