use rocket::serde::json::Json;
use rocket::{delete, get, patch, post, State};

use crate::data::{DBConnection, MessageResponse};
use crate::internal_error::InternalResult;
use crate::matching::matcher::find_best_tasks;
use crate::users::data::Role;
use crate::users::helpers::get_user_from_db;

use super::data::*;
use super::helpers::*;

/// The board an individual user sees. Elders get their own tasks back;
/// volunteers get the unclaimed tasks that match their profile. Unknown
/// users get a 404.
#[get("/tasks/<email>")]
pub fn get_tasks(
    email: &str,
    db_connection: &State<DBConnection>,
) -> InternalResult<Option<Json<Vec<(TaskID, Task)>>>> {
    let db_connection = db_connection.lock()?;

    let user = match get_user_from_db(email, &db_connection)? {
        Some(user) => user,
        None => return Ok(None),
    };

    let tasks = match user.role {
        Role::Volunteer => {
            let volunteer = user.volunteer_profile()?;
            let tasks = get_all_tasks_from_db(&db_connection)?;
            find_best_tasks(tasks, &volunteer, Task::is_unclaimed)
        }
        _ => get_tasks_for_elder(email, &db_connection)?,
    };

    Ok(Some(Json(tasks)))
}

#[post("/tasks", format = "json", data = "<add_task_request>")]
pub fn add_task(
    add_task_request: Json<AddTaskRequest>,
    db_connection: &State<DBConnection>,
) -> InternalResult<Json<AddTaskResult>> {
    let db_connection = db_connection.lock()?;

    let id = add_task_to_db(add_task_request.into_inner().into_task(), &db_connection)?;

    Ok(Json(AddTaskResult {
        id,
        message: "Task added successfully!".to_string(),
    }))
}

#[patch("/tasks/<task_id>", format = "json", data = "<task_update>")]
pub fn update_task(
    task_id: TaskID,
    task_update: Json<TaskUpdate>,
    db_connection: &State<DBConnection>,
) -> InternalResult<Json<MessageResponse>> {
    let db_connection = db_connection.lock()?;

    update_task_in_db(task_id, &task_update, &db_connection)?;

    Ok(Json(MessageResponse::new("Task updated successfully!")))
}

#[delete("/tasks/<task_id>")]
pub fn delete_task(
    task_id: TaskID,
    db_connection: &State<DBConnection>,
) -> InternalResult<Json<MessageResponse>> {
    let db_connection = db_connection.lock()?;

    delete_task_from_db(task_id, &db_connection)?;

    Ok(Json(MessageResponse::new("Task deleted successfully!")))
}
