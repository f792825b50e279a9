use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::serde::Serialize;
use rocket::Request;

#[derive(Debug)]
pub enum RequestError {
    MissingFields,
    NotConnected,
    Database(sqlx::Error),
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Database(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields => write!(f, "missing required fields"),
            Self::NotConnected => write!(f, "no database connection"),
            Self::Database(err) => write!(f, "database error: {}", err),
        }
    }
}

impl From<sqlx::Error> for RequestError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
struct ErrorBody {
    error: String,
}

/// Turns an error into a JSON response. Store failures are logged
/// server-side; the client only ever sees a generic message.
impl<'r> Responder<'r, 'static> for RequestError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let (status, message) = match &self {
            RequestError::MissingFields => (Status::BadRequest, "Missing required fields"),
            RequestError::NotConnected | RequestError::Database(_) => {
                log::error!("{}", self);
                (Status::InternalServerError, "Server error")
            }
        };

        let mut response = Json(ErrorBody {
            error: message.to_owned(),
        })
        .respond_to(request)?;
        response.set_status(status);
        Ok(response)
    }
}

pub type RequestResult<T> = std::result::Result<T, RequestError>;
