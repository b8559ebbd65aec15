use log::warn;

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use super::distance::{distance_km, Coordinates, InvalidCoordinate};
use crate::tasks::data::{Task, TaskID};

/// Request-level matching failures. A volunteer profile that cannot be
/// matched against produces no meaningful partial result, so these abort
/// the whole call rather than filtering tasks out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchError {
    InvalidCoordinate(InvalidCoordinate),
    MissingProfileField(&'static str),
}

impl Error for MatchError {}
impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchError::InvalidCoordinate(e) => write!(f, "volunteer profile has an {}", e),
            MatchError::MissingProfileField(field) => {
                write!(f, "volunteer profile is missing the \"{}\" field", field)
            }
        }
    }
}

impl From<InvalidCoordinate> for MatchError {
    fn from(e: InvalidCoordinate) -> MatchError {
        MatchError::InvalidCoordinate(e)
    }
}

/// The matcher's validated view of a volunteer: a location, a travel radius
/// in kilometers, and the set of task categories the volunteer takes on.
/// Built from a stored user record by `UserRecord::volunteer_profile`.
#[derive(Debug, Clone, PartialEq)]
pub struct VolunteerProfile {
    pub location: Coordinates,
    pub max_distance_km: f64,
    pub skills: HashSet<String>,
}

/// Filters `tasks` down to the ones `volunteer` is eligible to take: within
/// the volunteer's travel radius and in a category the volunteer covers.
///
/// The output preserves the input order; no re-sorting by distance or
/// anything else. `accept` is the caller's business-rule predicate (e.g.
/// only unclaimed tasks); tasks it rejects are dropped before any distance
/// or skill check.
///
/// Tasks with a missing category, missing coordinates, or coordinates out
/// of range are data-quality failures: they are excluded from the result
/// and logged, never matched and never fatal.
pub fn find_best_tasks<F>(
    tasks: Vec<(TaskID, Task)>,
    volunteer: &VolunteerProfile,
    accept: F,
) -> Vec<(TaskID, Task)>
where
    F: Fn(&Task) -> bool,
{
    let mut best_tasks = vec![];

    for (task_id, task) in tasks {
        if !accept(&task) {
            continue;
        }

        let location = match task_location(task_id, &task) {
            Some(location) => location,
            None => continue,
        };

        let category = match &task.category {
            Some(category) if !category.is_empty() => category,
            _ => {
                warn!("task {} has no category, excluded from matching", task_id);
                continue;
            }
        };

        if distance_km(volunteer.location, location) > volunteer.max_distance_km {
            continue;
        }

        if !volunteer.skills.contains(category.as_str()) {
            continue;
        }

        best_tasks.push((task_id, task));
    }

    best_tasks
}

fn task_location(task_id: TaskID, task: &Task) -> Option<Coordinates> {
    let (latitude, longitude) = match (task.latitude, task.longitude) {
        (Some(latitude), Some(longitude)) => (latitude, longitude),
        _ => {
            warn!(
                "task {} has no coordinates, excluded from matching",
                task_id
            );
            return None;
        }
    };

    match Coordinates::new(latitude, longitude) {
        Ok(location) => Some(location),
        Err(e) => {
            warn!("task {} has an {}, excluded from matching", task_id, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::data::TaskStatus;

    fn task(title: &str, category: &str, latitude: f64, longitude: f64) -> Task {
        Task {
            title: title.to_string(),
            body: String::new(),
            date: "2025-11-01".to_string(),
            category: Some(category.to_string()),
            status: TaskStatus::Pending,
            elder_id: "E001".to_string(),
            volunteer_id: None,
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    fn with_ids(tasks: Vec<Task>) -> Vec<(TaskID, Task)> {
        tasks
            .into_iter()
            .enumerate()
            .map(|(i, task)| (i as TaskID + 1, task))
            .collect()
    }

    // The sample help-request board: four Austin-area tasks, one Houston
    // task, one Gainesville task.
    fn sample_tasks() -> Vec<(TaskID, Task)> {
        with_ids(vec![
            task(
                "Weekly grocery delivery for Mrs. Patel",
                "Groceries",
                30.2672,
                -97.7431,
            ),
            task("Fix broken television", "Electronics", 29.7604, -95.3698),
            task(
                "Drive Mrs. Thompson to Sunday Mass",
                "Driving",
                30.3072,
                -97.7559,
            ),
            task(
                "Grocery run for diabetic supplies",
                "Groceries",
                29.6516,
                -82.3248,
            ),
            task(
                "Weekly grocery restock for Mr. Gonzalez",
                "Groceries",
                30.2672,
                -97.7431,
            ),
            task(
                "Bake cookies for senior luncheon",
                "Cooking",
                29.7604,
                -95.3698,
            ),
        ])
    }

    fn austin_volunteer() -> VolunteerProfile {
        VolunteerProfile {
            location: Coordinates::new(30.2672, -97.7431).unwrap(),
            max_distance_km: 50.0,
            skills: ["Groceries", "Driving"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    fn titles(matched: &[(TaskID, Task)]) -> Vec<&str> {
        matched.iter().map(|(_, task)| task.title.as_str()).collect()
    }

    #[test]
    fn matches_nearby_tasks_with_covered_skills() {
        let matched = find_best_tasks(sample_tasks(), &austin_volunteer(), |_| true);

        assert_eq!(
            titles(&matched),
            vec![
                "Weekly grocery delivery for Mrs. Patel",
                "Drive Mrs. Thompson to Sunday Mass",
                "Weekly grocery restock for Mr. Gonzalez",
            ]
        );
    }

    #[test]
    fn excludes_tasks_outside_the_travel_radius_even_with_matching_skill() {
        let matched = find_best_tasks(sample_tasks(), &austin_volunteer(), |_| true);

        assert!(!titles(&matched).contains(&"Grocery run for diabetic supplies"));
    }

    #[test]
    fn excludes_nearby_tasks_without_a_matching_skill() {
        let mut volunteer = austin_volunteer();
        volunteer.max_distance_km = 1000.0;

        let matched = find_best_tasks(sample_tasks(), &volunteer, |_| true);

        assert!(!titles(&matched).contains(&"Fix broken television"));
        assert!(!titles(&matched).contains(&"Bake cookies for senior luncheon"));
    }

    #[test]
    fn every_match_is_within_radius_and_skill_set() {
        let volunteer = austin_volunteer();
        let matched = find_best_tasks(sample_tasks(), &volunteer, |_| true);

        assert!(!matched.is_empty());
        for (_, task) in &matched {
            let location =
                Coordinates::new(task.latitude.unwrap(), task.longitude.unwrap()).unwrap();
            assert!(distance_km(volunteer.location, location) <= volunteer.max_distance_km);
            assert!(volunteer.skills.contains(task.category.as_deref().unwrap()));
        }
    }

    #[test]
    fn output_preserves_input_order() {
        let matched = find_best_tasks(sample_tasks(), &austin_volunteer(), |_| true);

        let ids: Vec<TaskID> = matched.iter().map(|(id, _)| *id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn empty_task_list_matches_nothing() {
        let matched = find_best_tasks(vec![], &austin_volunteer(), |_| true);
        assert!(matched.is_empty());
    }

    #[test]
    fn empty_skill_set_matches_nothing() {
        let mut volunteer = austin_volunteer();
        volunteer.skills.clear();

        let matched = find_best_tasks(sample_tasks(), &volunteer, |_| true);
        assert!(matched.is_empty());
    }

    #[test]
    fn zero_radius_matches_only_identical_coordinates() {
        let mut volunteer = austin_volunteer();
        volunteer.max_distance_km = 0.0;

        let matched = find_best_tasks(sample_tasks(), &volunteer, |_| true);

        assert_eq!(
            titles(&matched),
            vec![
                "Weekly grocery delivery for Mrs. Patel",
                "Weekly grocery restock for Mr. Gonzalez",
            ]
        );
    }

    #[test]
    fn tasks_missing_category_or_coordinates_are_skipped() {
        let mut no_category = task("No category", "unused", 30.2672, -97.7431);
        no_category.category = None;
        let mut empty_category = task("Empty category", "unused", 30.2672, -97.7431);
        empty_category.category = Some(String::new());
        let mut no_coordinates = task("No coordinates", "Groceries", 0.0, 0.0);
        no_coordinates.latitude = None;
        no_coordinates.longitude = None;
        let bad_coordinates = task("Bad coordinates", "Groceries", 95.0, -97.7431);

        let tasks = with_ids(vec![
            no_category,
            empty_category,
            no_coordinates,
            bad_coordinates,
            task("Good task", "Groceries", 30.2672, -97.7431),
        ]);
        let matched = find_best_tasks(tasks, &austin_volunteer(), |_| true);

        assert_eq!(titles(&matched), vec!["Good task"]);
    }

    #[test]
    fn caller_predicate_can_exclude_claimed_tasks() {
        let mut claimed = task("Claimed task", "Groceries", 30.2672, -97.7431);
        claimed.volunteer_id = Some("helper@example.com".to_string());

        let tasks = with_ids(vec![
            claimed,
            task("Open task", "Groceries", 30.2672, -97.7431),
        ]);
        let matched = find_best_tasks(tasks, &austin_volunteer(), Task::is_unclaimed);

        assert_eq!(titles(&matched), vec!["Open task"]);
    }

    #[test]
    fn matching_is_idempotent() {
        let volunteer = austin_volunteer();

        let first = find_best_tasks(sample_tasks(), &volunteer, |_| true);
        let second = find_best_tasks(sample_tasks(), &volunteer, |_| true);
        assert_eq!(first, second);
    }
}
