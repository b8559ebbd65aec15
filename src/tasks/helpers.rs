use rusqlite::{params, Connection, Row};

use crate::internal_error::InternalResult;

use super::data::*;

const TASK_COLUMNS: &str =
    "rowid, title, body, date, category, status, elder_id, volunteer_id, latitude, longitude";

fn task_from_row(row: &Row) -> rusqlite::Result<(TaskID, Task)> {
    let status: String = row.get(5)?;

    Ok((
        row.get(0)?,
        Task {
            title: row.get(1)?,
            body: row.get(2)?,
            date: row.get(3)?,
            category: row.get(4)?,
            status: TaskStatus::from_str(&status).unwrap_or(TaskStatus::Pending),
            elder_id: row.get(6)?,
            volunteer_id: row.get(7)?,
            latitude: row.get(8)?,
            longitude: row.get(9)?,
        },
    ))
}

/// All tasks in insertion order. The matcher's stable-filter guarantee is
/// relative to this order.
pub fn get_all_tasks_from_db(db_connection: &Connection) -> InternalResult<Vec<(TaskID, Task)>> {
    let mut statement = db_connection.prepare(&format!(
        "SELECT {} FROM tasks ORDER BY rowid",
        TASK_COLUMNS
    ))?;

    let rows = statement.query_map([], task_from_row)?;

    let mut tasks = vec![];
    for row_result in rows {
        tasks.push(row_result?);
    }

    Ok(tasks)
}

pub fn get_tasks_for_elder(
    elder_id: &str,
    db_connection: &Connection,
) -> InternalResult<Vec<(TaskID, Task)>> {
    let mut statement = db_connection.prepare(&format!(
        "SELECT {} FROM tasks WHERE elder_id = (?1) ORDER BY rowid",
        TASK_COLUMNS
    ))?;

    let rows = statement.query_map(params![elder_id], task_from_row)?;

    let mut tasks = vec![];
    for row_result in rows {
        tasks.push(row_result?);
    }

    Ok(tasks)
}

pub fn add_task_to_db(task: Task, db_connection: &Connection) -> InternalResult<TaskID> {
    db_connection.execute(
        "INSERT INTO tasks VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            task.title,
            task.body,
            task.date,
            task.category,
            task.status.as_str(),
            task.elder_id,
            task.volunteer_id,
            task.latitude,
            task.longitude,
        ],
    )?;

    Ok(db_connection.last_insert_rowid())
}

pub fn update_task_in_db(
    task_id: TaskID,
    update: &TaskUpdate,
    db_connection: &Connection,
) -> InternalResult<()> {
    if let Some(title) = &update.title {
        db_connection.execute(
            "UPDATE tasks SET title = (?1) WHERE rowid = (?2)",
            params![title, task_id],
        )?;
    }
    if let Some(body) = &update.body {
        db_connection.execute(
            "UPDATE tasks SET body = (?1) WHERE rowid = (?2)",
            params![body, task_id],
        )?;
    }
    if let Some(date) = &update.date {
        db_connection.execute(
            "UPDATE tasks SET date = (?1) WHERE rowid = (?2)",
            params![date, task_id],
        )?;
    }
    if let Some(category) = &update.category {
        db_connection.execute(
            "UPDATE tasks SET category = (?1) WHERE rowid = (?2)",
            params![category, task_id],
        )?;
    }
    if let Some(status) = update.status {
        db_connection.execute(
            "UPDATE tasks SET status = (?1) WHERE rowid = (?2)",
            params![status.as_str(), task_id],
        )?;
    }
    if let Some(volunteer_id) = &update.volunteer_id {
        db_connection.execute(
            "UPDATE tasks SET volunteer_id = (?1) WHERE rowid = (?2)",
            params![volunteer_id, task_id],
        )?;
    }

    Ok(())
}

pub fn delete_task_from_db(task_id: TaskID, db_connection: &Connection) -> InternalResult<()> {
    db_connection.execute("DELETE FROM tasks WHERE rowid = (?1)", params![task_id])?;

    Ok(())
}
