//! JSearch (RapidAPI) job-listing client used for resume-analysis recommendations.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum JobsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Jobs API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Job search is not configured (JSEARCH_API_KEY missing)")]
    NotConfigured,
}

/// One posting as returned by the JSearch `search` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobPosting {
    pub job_title: Option<String>,
    pub employer_name: Option<String>,
    pub job_city: Option<String>,
    pub job_state: Option<String>,
    pub job_description: Option<String>,
    pub job_apply_link: Option<String>,
    pub job_min_salary: Option<f64>,
    pub job_median_salary: Option<f64>,
    pub job_max_salary: Option<f64>,
    pub job_posting_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JobSearchResponse {
    #[serde(default)]
    pub data: Vec<JobPosting>,
}

#[derive(Clone)]
pub struct JobsClient {
    client: Client,
    api_key: Option<String>,
    api_host: String,
    base_url: String,
}

impl JobsClient {
    pub fn new(
        api_key: Option<String>,
        api_host: String,
        base_url: &str,
    ) -> Result<Self, JobsError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            api_key,
            api_host,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Searches postings for `job_title` in `location` (first page only).
    pub async fn search(
        &self,
        job_title: &str,
        location: &str,
    ) -> Result<JobSearchResponse, JobsError> {
        let api_key = self.api_key.as_deref().ok_or(JobsError::NotConfigured)?;
        info!("Fetching job recommendations for job title: {job_title}");

        let query = format!("{job_title} in {location}");
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("query", query.as_str()), ("page", "1"), ("num_pages", "1")])
            .header("x-rapidapi-key", api_key)
            .header("x-rapidapi-host", &self.api_host)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Jobs API error: {status} - {message}");
            return Err(JobsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // A `null` body is treated as no results.
        let body: Option<JobSearchResponse> = response.json().await?;
        Ok(body.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, key: Option<&str>) -> JobsClient {
        JobsClient::new(
            key.map(str::to_string),
            "jsearch.p.rapidapi.com".to_string(),
            &server.uri(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_sends_query_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("query", "rust in united states"))
            .and(query_param("page", "1"))
            .and(query_param("num_pages", "1"))
            .and(header("x-rapidapi-key", "rapid-key"))
            .and(header("x-rapidapi-host", "jsearch.p.rapidapi.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "OK",
                "data": [
                    {"job_title": "Rust Engineer", "employer_name": "Acme", "job_city": "Austin",
                     "job_state": "TX", "job_min_salary": 120000.0}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server, Some("rapid-key"))
            .search("rust", "united states")
            .await
            .unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].job_title.as_deref(), Some("Rust Engineer"));
        assert_eq!(response.data[0].job_min_salary, Some(120000.0));
        assert!(response.data[0].job_max_salary.is_none());
    }

    #[tokio::test]
    async fn test_missing_key_is_not_configured() {
        let server = MockServer::start().await;
        let err = client(&server, None)
            .search("rust", "united states")
            .await
            .unwrap_err();
        assert!(matches!(err, JobsError::NotConfigured));
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("not subscribed"))
            .mount(&server)
            .await;

        let err = client(&server, Some("k"))
            .search("rust", "united states")
            .await
            .unwrap_err();
        assert!(matches!(err, JobsError::Api { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_null_body_means_no_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let response = client(&server, Some("k")).search("go", "india").await.unwrap();
        assert!(response.data.is_empty());
    }
}
