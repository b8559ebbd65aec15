use rocket::serde::json::Json;
use rocket::{delete, get, patch, post, State};

use crate::data::{DBConnection, MessageResponse};
use crate::internal_error::InternalResult;

use super::data::*;
use super::helpers::*;

#[post("/users", format = "json", data = "<user>")]
pub fn add_user(
    user: Json<UserRecord>,
    db_connection: &State<DBConnection>,
) -> InternalResult<Json<AddUserResult>> {
    let db_connection = db_connection.lock()?;

    let user = user.into_inner();
    add_user_to_db(&user, &db_connection)?;

    Ok(Json(AddUserResult {
        email: user.email,
        message: "User added successfully!".to_string(),
    }))
}

#[get("/users/<email>")]
pub fn get_user(
    email: &str,
    db_connection: &State<DBConnection>,
) -> InternalResult<Option<Json<UserRecord>>> {
    let db_connection = db_connection.lock()?;

    Ok(get_user_from_db(email, &db_connection)?.map(Json))
}

#[patch("/users/<email>", format = "json", data = "<update>")]
pub fn update_user(
    email: &str,
    update: Json<UpdateUserRequest>,
    db_connection: &State<DBConnection>,
) -> InternalResult<Json<MessageResponse>> {
    let db_connection = db_connection.lock()?;

    update_user_in_db(email, &update, &db_connection)?;

    Ok(Json(MessageResponse::new("User updated successfully!")))
}

#[delete("/users/<email>")]
pub fn delete_user(
    email: &str,
    db_connection: &State<DBConnection>,
) -> InternalResult<Json<MessageResponse>> {
    let db_connection = db_connection.lock()?;

    delete_user_from_db(email, &db_connection)?;

    Ok(Json(MessageResponse::new("User deleted successfully!")))
}
