use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};

use std::error::Error;
use std::fmt;
use std::io::{self, Cursor};
use std::sync::PoisonError;

use crate::matching::matcher::MatchError;

#[derive(Debug)]
pub struct InternalError {
    what: String,
}

impl Error for InternalError {}
impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Generic internal error: {}", self.what)
    }
}

impl<'r> Responder<'r, 'static> for InternalError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        log::error!("request failed: {}", self.what);
        let body = self.what;
        Response::build()
            .status(Status::InternalServerError)
            .header(ContentType::Plain)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

impl<T> From<PoisonError<T>> for InternalError {
    fn from(e: PoisonError<T>) -> InternalError {
        InternalError {
            what: e.to_string(),
        }
    }
}

impl From<rusqlite::Error> for InternalError {
    fn from(e: rusqlite::Error) -> InternalError {
        InternalError {
            what: e.to_string(),
        }
    }
}

impl From<io::Error> for InternalError {
    fn from(e: io::Error) -> InternalError {
        InternalError {
            what: e.to_string(),
        }
    }
}

impl From<reqwest::Error> for InternalError {
    fn from(e: reqwest::Error) -> InternalError {
        InternalError {
            what: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for InternalError {
    fn from(e: serde_json::Error) -> InternalError {
        InternalError {
            what: e.to_string(),
        }
    }
}

impl From<std::env::VarError> for InternalError {
    fn from(e: std::env::VarError) -> InternalError {
        InternalError {
            what: format!("GEMINI_API_KEY is not set: {}", e),
        }
    }
}

impl From<MatchError> for InternalError {
    fn from(e: MatchError) -> InternalError {
        InternalError {
            what: e.to_string(),
        }
    }
}

impl From<&str> for InternalError {
    fn from(s: &str) -> InternalError {
        InternalError {
            what: s.to_string(),
        }
    }
}

pub type InternalResult<T> = Result<T, InternalError>;
