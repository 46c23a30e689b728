use rocket::figment::Figment;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, routes, Build, Rocket, State};
use serde::Serialize;

use crate::analysis::ProfilePipeline;
use crate::config::ServerConfig;
use crate::error::Error;
use crate::models::DeveloperSummary;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
}

type ApiResult<T> = std::result::Result<Json<T>, (Status, Json<ErrorBody>)>;

fn failure(err: &Error) -> (Status, Json<ErrorBody>) {
    let (status, message) = match err {
        Error::MissingParameter(_) => (Status::BadRequest, "Username is required"),
        Error::InvalidUsername(_) => (Status::BadRequest, "Invalid username"),
        _ => (Status::InternalServerError, "Failed to fetch GitHub data"),
    };

    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

#[get("/github-profile?<username>")]
async fn github_profile(
    username: Option<&str>,
    pipeline: &State<ProfilePipeline>,
) -> ApiResult<DeveloperSummary> {
    match pipeline.summarize(username.unwrap_or_default()).await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) if e.is_client_error() => Err(failure(&e)),
        Err(e) => {
            tracing::error!("Error fetching GitHub data: {}", e);
            Err(failure(&e))
        }
    }
}

#[get("/health")]
fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

pub fn figment(config: &ServerConfig) -> Figment {
    rocket::Config::figment()
        .merge(("address", config.address.as_str()))
        .merge(("port", config.port))
}

pub fn build(pipeline: ProfilePipeline, figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .manage(pipeline)
        .mount("/api", routes![github_profile, health])
}
