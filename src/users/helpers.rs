use rusqlite::{params, Connection};

use crate::internal_error::InternalResult;

use super::data::*;

pub fn get_user_from_db(
    email: &str,
    db_connection: &Connection,
) -> InternalResult<Option<UserRecord>> {
    let mut user_statement = db_connection.prepare(
        "SELECT email, first_name, last_name, role, latitude, longitude, distance FROM users WHERE email = (?1)",
    )?;

    let mut rows = user_statement.query(params![email])?;
    let row = match rows.next()? {
        Some(row) => row,
        None => return Ok(None),
    };

    let role: String = row.get(3)?;
    let mut user = UserRecord {
        email: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        // Records written before roles existed default to elder.
        role: Role::from_str(&role).unwrap_or(Role::Elder),
        latitude: row.get(4)?,
        longitude: row.get(5)?,
        distance: row.get(6)?,
        skills: vec![],
    };

    let mut skills_statement =
        db_connection.prepare("SELECT skill FROM user_skills WHERE email = (?1) ORDER BY rowid")?;
    let skill_rows = skills_statement.query_map(params![email], |row| row.get(0))?;

    for skill_result in skill_rows {
        user.skills.push(skill_result?);
    }

    Ok(Some(user))
}

pub fn add_user_to_db(user: &UserRecord, db_connection: &Connection) -> InternalResult<()> {
    db_connection.execute(
        "INSERT INTO users VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            user.email,
            user.first_name,
            user.last_name,
            user.role.as_str(),
            user.latitude,
            user.longitude,
            user.distance,
        ],
    )?;

    for skill in &user.skills {
        db_connection.execute(
            "INSERT INTO user_skills VALUES (?1, ?2)",
            params![user.email, skill],
        )?;
    }

    Ok(())
}

pub fn update_user_in_db(
    email: &str,
    update: &UpdateUserRequest,
    db_connection: &Connection,
) -> InternalResult<()> {
    if let Some(first_name) = &update.first_name {
        db_connection.execute(
            "UPDATE users SET first_name = (?1) WHERE email = (?2)",
            params![first_name, email],
        )?;
    }
    if let Some(last_name) = &update.last_name {
        db_connection.execute(
            "UPDATE users SET last_name = (?1) WHERE email = (?2)",
            params![last_name, email],
        )?;
    }
    if let Some(latitude) = update.latitude {
        db_connection.execute(
            "UPDATE users SET latitude = (?1) WHERE email = (?2)",
            params![latitude, email],
        )?;
    }
    if let Some(longitude) = update.longitude {
        db_connection.execute(
            "UPDATE users SET longitude = (?1) WHERE email = (?2)",
            params![longitude, email],
        )?;
    }

    Ok(())
}

pub fn delete_user_from_db(email: &str, db_connection: &Connection) -> InternalResult<()> {
    db_connection.execute("DELETE FROM user_skills WHERE email = (?1)", params![email])?;
    db_connection.execute("DELETE FROM users WHERE email = (?1)", params![email])?;

    Ok(())
}
