use rusqlite::{params, Connection};
use serde::Serialize;

use std::sync::{Arc, Mutex};

pub type DBConnection = Arc<Mutex<Connection>>;

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> MessageResponse {
        MessageResponse {
            message: message.into(),
        }
    }
}

pub fn create_tables(connection: &Connection) -> rusqlite::Result<()> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS tasks (title TEXT NOT NULL, body TEXT NOT NULL, date TEXT NOT NULL, category TEXT, status TEXT NOT NULL, elder_id TEXT NOT NULL, volunteer_id TEXT, latitude REAL, longitude REAL)",
        params![],
    )?;
    connection.execute(
        "CREATE TABLE IF NOT EXISTS users (email TEXT PRIMARY KEY, first_name TEXT NOT NULL, last_name TEXT NOT NULL, role TEXT NOT NULL, latitude REAL, longitude REAL, distance REAL)",
        params![],
    )?;
    connection.execute(
        "CREATE TABLE IF NOT EXISTS user_skills (email TEXT NOT NULL, skill TEXT NOT NULL)",
        params![],
    )?;

    Ok(())
}
