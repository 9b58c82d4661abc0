use actix_web::web;
use drive_time::contracts::calculate::{Destinations, DriveTimeResult, StartLocation};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::app_container::Application;
use crate::errors::ApiError;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CalculateRequest {
    start_location: Option<String>,
    destinations: Option<Vec<String>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DriveTimeEntry {
    address: String,
    drive_duration_minutes: Option<f64>,
    drive_distance_miles: Option<f64>,
}

impl From<DriveTimeResult> for DriveTimeEntry {
    fn from(value: DriveTimeResult) -> Self {
        Self {
            address: value.address,
            drive_duration_minutes: value.drive_duration_minutes,
            drive_distance_miles: value.drive_distance_miles,
        }
    }
}

fn validated_input(request: CalculateRequest) -> Result<(StartLocation, Destinations), ApiError> {
    let origin = request
        .start_location
        .unwrap_or_default()
        .try_into()
        .map_err(|_| ApiError::ValidationError("startLocation cannot be empty".to_string()))?;
    let destinations = request
        .destinations
        .unwrap_or_default()
        .try_into()
        .map_err(ApiError::ValidationError)?;
    Ok((origin, destinations))
}

#[tracing::instrument(err, skip(app), level = "info")]
async fn calculate_drive_times(
    data: web::Json<CalculateRequest>,
    app: web::Data<Application>,
) -> Result<web::Json<Vec<DriveTimeEntry>>, ApiError> {
    let (origin, destinations) = validated_input(data.into_inner())?;
    let results = app
        .drive_time
        .calculate(origin, destinations)
        .await
        .map_err(ApiError::InternalServerError)?;
    Ok(web::Json(results.into_iter().map_into().collect_vec()))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/calculate")
            .service(web::resource("").route(web::post().to(calculate_drive_times))),
    );
}
