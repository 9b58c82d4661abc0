use shared_kernel::non_empty_string;

use crate::config::{RouteMatrixConfig, SETTINGS_CONFIG};

non_empty_string!(StartLocation);

/// Ordered list of destination addresses. Never empty; entries are passed to
/// the provider verbatim, duplicates included, one result per entry.
#[derive(Clone, Debug)]
pub struct Destinations(Vec<String>);

impl Destinations {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for Destinations {
    type Error = String;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err("destinations must contain at least one entry".to_string());
        }
        Ok(Destinations(value))
    }
}

/// Drive time and distance from the start location to one destination.
/// `None` fields mean the provider could not route the pair.
#[derive(Clone, Debug, PartialEq)]
pub struct DriveTimeResult {
    pub address: String,
    pub drive_duration_minutes: Option<f64>,
    pub drive_distance_miles: Option<f64>,
}

#[derive(Clone)]
pub struct DriveTimeCalculator {
    config: RouteMatrixConfig,
}

impl Default for DriveTimeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl DriveTimeCalculator {
    pub fn new() -> Self {
        Self::with_matrix_config(SETTINGS_CONFIG.matrix.clone())
    }

    pub fn with_matrix_config(config: RouteMatrixConfig) -> Self {
        DriveTimeCalculator { config }
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    pub async fn calculate(
        &self,
        origin: StartLocation,
        destinations: Destinations,
    ) -> anyhow::Result<Vec<DriveTimeResult>> {
        let url = matrix::generate_url(&self.config, &origin, &destinations)?;
        let response = matrix::get_matrix_from_api(url).await?;
        matrix::map_matrix_elements(response, &destinations)
    }
}

pub(crate) mod matrix {
    use anyhow::{bail, Context};
    use secrecy::ExposeSecret;
    use serde::Deserialize;
    use shared_kernel::http_client::HttpClient;
    use url::Url;

    use crate::config::RouteMatrixConfig;

    use super::{Destinations, DriveTimeResult, StartLocation};

    const SECONDS_PER_MINUTE: f64 = 60.0;
    const METERS_PER_MILE: f64 = 1609.34;

    #[derive(Deserialize, Debug, Clone)]
    pub enum StatusCode {
        OK,
        #[serde(rename = "INVALID_REQUEST")]
        InvalidRequest,
        #[serde(rename = "MAX_ELEMENTS_EXCEEDED")]
        MaxElementsExceeded,
        #[serde(rename = "OVER_DAILY_LIMIT")]
        OverDailyLimit,
        #[serde(rename = "OVER_QUERY_LIMIT")]
        OverQueryLimit,
        #[serde(rename = "REQUEST_DENIED")]
        RequestDenied,
        #[serde(rename = "UNKNOWN_ERROR")]
        UnknownError,
    }

    impl StatusCode {
        pub fn is_success(&self) -> bool {
            matches!(self, StatusCode::OK)
        }
    }

    #[derive(Deserialize, Debug, Clone)]
    pub enum ElementStatus {
        OK,
        #[serde(rename = "NOT_FOUND")]
        NotFound,
        #[serde(rename = "ZERO_RESULTS")]
        ZeroResults,
        #[serde(rename = "MAX_ROUTE_LENGTH_EXCEEDED")]
        MaxRouteLengthExceeded,
    }

    impl ElementStatus {
        pub fn has_route(&self) -> bool {
            matches!(self, ElementStatus::OK)
        }
    }

    /// `value` is meters for distances and seconds for durations.
    #[derive(Deserialize, Debug)]
    pub struct TravelMeasure {
        pub value: f64,
    }

    #[derive(Deserialize, Debug)]
    pub struct MatrixElement {
        pub status: ElementStatus,
        pub duration: Option<TravelMeasure>,
        pub distance: Option<TravelMeasure>,
    }

    #[derive(Deserialize, Debug)]
    pub struct MatrixRow {
        pub elements: Vec<MatrixElement>,
    }

    #[derive(Deserialize, Debug)]
    pub struct DistanceMatrixResponse {
        pub status: StatusCode,
        pub rows: Vec<MatrixRow>,
    }

    pub(super) fn generate_url(
        config: &RouteMatrixConfig,
        origin: &StartLocation,
        destinations: &Destinations,
    ) -> anyhow::Result<Url> {
        let matrix_path = "/distancematrix/json";
        let host = &config.host;
        let dests = destinations.as_slice().join("|");
        Url::parse_with_params(
            &format!("{}{}", host, matrix_path),
            &[
                ("origins", origin.as_ref()),
                ("destinations", dests.as_str()),
                ("units", "imperial"),
                ("key", config.api_key.expose_secret().as_str()),
            ],
        )
        .context("Failed to parse distance matrix URL")
    }

    pub(super) async fn get_matrix_from_api(url: Url) -> anyhow::Result<DistanceMatrixResponse> {
        let raw_response = HttpClient::get_json::<serde_json::Value>(url).await?;

        let response: DistanceMatrixResponse = serde_json::from_value(raw_response.clone())
            .with_context(|| format!("Invalid response {raw_response:?}"))?;

        if !response.status.is_success() {
            bail!("Failed to get valid response {raw_response:?}");
        }
        Ok(response)
    }

    pub(super) fn map_matrix_elements(
        response: DistanceMatrixResponse,
        destinations: &Destinations,
    ) -> anyhow::Result<Vec<DriveTimeResult>> {
        // Single origin, so everything lives in the first row.
        let row = response
            .rows
            .into_iter()
            .next()
            .context("Response carries no rows for the origin")?;

        if row.elements.len() != destinations.len() {
            bail!(
                "Expected {} matrix elements, got {}",
                destinations.len(),
                row.elements.len()
            );
        }

        destinations
            .as_slice()
            .iter()
            .zip(row.elements)
            .map(|(address, element)| element_result(address, element))
            .collect()
    }

    fn element_result(address: &str, element: MatrixElement) -> anyhow::Result<DriveTimeResult> {
        if !element.status.has_route() {
            return Ok(DriveTimeResult {
                address: address.to_owned(),
                drive_duration_minutes: None,
                drive_distance_miles: None,
            });
        }

        let duration = element
            .duration
            .with_context(|| format!("Routed element for {address} lacks a duration"))?;
        let distance = element
            .distance
            .with_context(|| format!("Routed element for {address} lacks a distance"))?;

        Ok(DriveTimeResult {
            address: address.to_owned(),
            drive_duration_minutes: Some(duration.value / SECONDS_PER_MINUTE),
            drive_distance_miles: Some(distance.value / METERS_PER_MILE),
        })
    }
}
