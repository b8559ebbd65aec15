use rusqlite::Connection;

use std::error::Error;
use std::sync::{Arc, Mutex};

mod assistant;
mod data;
mod internal_error;
mod matching;
mod tasks;
mod users;

#[macro_use]
extern crate rocket;

use rocket::serde::json::Json;

use data::MessageResponse;

#[get("/")]
fn home() -> Json<MessageResponse> {
    Json(MessageResponse::new("carelink backend is running"))
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let connection = Connection::open("carelink.db")?;
    data::create_tables(&connection)?;

    let connection = Arc::new(Mutex::new(connection));

    rocket::build()
        .manage(connection.clone())
        .mount(
            "/",
            routes![
                home,
                tasks::endpoints::get_tasks,
                tasks::endpoints::add_task,
                tasks::endpoints::update_task,
                tasks::endpoints::delete_task,
                users::endpoints::add_user,
                users::endpoints::get_user,
                users::endpoints::update_user,
                users::endpoints::delete_user,
                assistant::endpoints::chat_create_task,
            ],
        )
        .launch()
        .await?;

    Ok(())
}
