use serde::{Deserialize, Serialize};

use crate::matching::distance::Coordinates;
use crate::matching::matcher::{MatchError, VolunteerProfile};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Elder,
    Volunteer,
    Caregiver,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Elder => "elder",
            Role::Volunteer => "volunteer",
            Role::Caregiver => "caregiver",
        }
    }

    pub fn from_str(value: &str) -> Option<Role> {
        match value {
            "elder" => Some(Role::Elder),
            "volunteer" => Some(Role::Volunteer),
            "caregiver" => Some(Role::Caregiver),
            _ => None,
        }
    }
}

/// A stored user document. The profile fields are optional because accounts
/// are created in stages; a volunteer record is only matchable once
/// location and travel radius are filled in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub role: Role,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Travel radius in kilometers, the distance calculator's unit.
    pub distance: Option<f64>,
    pub skills: Vec<String>,
}

impl UserRecord {
    /// Validates the record into the matcher's input contract. Any missing
    /// profile field is fatal for the whole matching request.
    pub fn volunteer_profile(&self) -> Result<VolunteerProfile, MatchError> {
        let latitude = self
            .latitude
            .ok_or(MatchError::MissingProfileField("latitude"))?;
        let longitude = self
            .longitude
            .ok_or(MatchError::MissingProfileField("longitude"))?;
        let max_distance_km = self
            .distance
            .ok_or(MatchError::MissingProfileField("distance"))?;

        let location = Coordinates::new(latitude, longitude)?;

        Ok(VolunteerProfile {
            location,
            max_distance_km,
            skills: self.skills.iter().cloned().collect(),
        })
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct UpdateUserRequest {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Serialize, Debug)]
pub struct AddUserResult {
    pub email: String,
    pub message: String,
}
