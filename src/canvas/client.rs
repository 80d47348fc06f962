// SPDX-License-Identifier: MPL-2.0
//! Typed client for the REST endpoints the submission details screen needs.
//!
//! The screen talks to the network through [`SubmissionDetailsService`], a
//! trait object seam, so tests can substitute canned responses without any
//! HTTP machinery. [`CanvasClient`] is the production implementation.

use crate::canvas::links;
use crate::canvas::models::{Assignment, Course, Submission};
use crate::error::{Error, LoadFailure};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Outcome of one endpoint fetch.
pub type DataResult<T> = Result<T, LoadFailure>;

/// Boxed future used across the service seam so the app can hold the
/// implementation behind a trait object.
pub type ServiceFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// URL fragment identifying the hosted media integration among a course's
/// external tools.
const MEDIA_TOOL_MARKER: &str = "instructuremedia.com";

/// The data operations the submission details screen depends on.
pub trait SubmissionDetailsService: Send + Sync {
    fn course(&self, course_id: i64) -> ServiceFuture<DataResult<Course>>;

    fn assignment(
        &self,
        course_id: i64,
        assignment_id: i64,
    ) -> ServiceFuture<DataResult<Assignment>>;

    /// The caller's own submission, with history, rubric assessment, and
    /// comments included.
    fn submission(
        &self,
        course_id: i64,
        assignment_id: i64,
    ) -> ServiceFuture<DataResult<Submission>>;

    /// Whether the course has the hosted media integration installed.
    /// Probe failures count as "not installed".
    fn arc_enabled(&self, course_id: i64) -> ServiceFuture<bool>;

    /// Raw bytes of an authenticated download, used for image previews.
    fn fetch_bytes(&self, url: String) -> ServiceFuture<DataResult<Vec<u8>>>;
}

/// Everything one load round-trip produces. Each half can fail on its own;
/// the update loop decides what a partial result means.
#[derive(Debug, Clone)]
pub struct LoadedDetails {
    pub course: DataResult<Course>,
    pub assignment: DataResult<Assignment>,
    pub submission: DataResult<Submission>,
    pub arc_enabled: bool,
}

/// Fetches the course, the assignment, the submission, and the media
/// integration flag concurrently.
pub async fn load_details(
    service: Arc<dyn SubmissionDetailsService>,
    course_id: i64,
    assignment_id: i64,
) -> LoadedDetails {
    let (course, assignment, submission, arc_enabled) = tokio::join!(
        service.course(course_id),
        service.assignment(course_id, assignment_id),
        service.submission(course_id, assignment_id),
        service.arc_enabled(course_id),
    );
    LoadedDetails {
        course,
        assignment,
        submission,
        arc_enabled,
    }
}

/// REST client bound to one domain and access token.
#[derive(Clone)]
pub struct CanvasClient {
    http: reqwest::Client,
    base: Url,
    token: String,
}

impl CanvasClient {
    pub fn new(domain: &str, token: &str) -> crate::error::Result<Self> {
        let base = links::parse_base(domain)
            .ok_or_else(|| Error::Config(format!("invalid domain: {domain:?}")))?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;
        Ok(Self {
            http,
            base,
            token: token.to_string(),
        })
    }

    /// The normalized base domain, without a trailing slash.
    pub fn domain(&self) -> String {
        self.base.as_str().trim_end_matches('/').to_string()
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> DataResult<T> {
        let url = self
            .base
            .join(path)
            .map_err(|e| LoadFailure::Parse(e.to_string()))?;
        debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, path, "request failed");
            return Err(LoadFailure::from_status(status.as_u16()));
        }
        Ok(response.json::<T>().await?)
    }
}

/// Course listing entry for an installed external tool. Only the launch URL
/// matters here.
#[derive(Deserialize)]
struct ToolListing {
    #[serde(default)]
    url: Option<String>,
}

impl SubmissionDetailsService for CanvasClient {
    fn course(&self, course_id: i64) -> ServiceFuture<DataResult<Course>> {
        let client = self.clone();
        Box::pin(async move {
            client
                .get_json(&format!("api/v1/courses/{course_id}"), &[])
                .await
        })
    }

    fn assignment(
        &self,
        course_id: i64,
        assignment_id: i64,
    ) -> ServiceFuture<DataResult<Assignment>> {
        let client = self.clone();
        Box::pin(async move {
            client
                .get_json(
                    &format!("api/v1/courses/{course_id}/assignments/{assignment_id}"),
                    &[],
                )
                .await
        })
    }

    fn submission(
        &self,
        course_id: i64,
        assignment_id: i64,
    ) -> ServiceFuture<DataResult<Submission>> {
        let client = self.clone();
        Box::pin(async move {
            client
                .get_json(
                    &format!(
                        "api/v1/courses/{course_id}/assignments/{assignment_id}/submissions/self"
                    ),
                    &[
                        ("include[]", "submission_history"),
                        ("include[]", "rubric_assessment"),
                        ("include[]", "submission_comments"),
                    ],
                )
                .await
        })
    }

    fn arc_enabled(&self, course_id: i64) -> ServiceFuture<bool> {
        let client = self.clone();
        Box::pin(async move {
            let listing = client
                .get_json::<Vec<ToolListing>>(
                    &format!("api/v1/courses/{course_id}/external_tools"),
                    &[],
                )
                .await;
            match listing {
                Ok(tools) => tools.iter().any(|tool| {
                    tool.url
                        .as_deref()
                        .is_some_and(|url| url.contains(MEDIA_TOOL_MARKER))
                }),
                Err(failure) => {
                    warn!(%failure, "external tool probe failed, treating media integration as disabled");
                    false
                }
            }
        })
    }

    fn fetch_bytes(&self, url: String) -> ServiceFuture<DataResult<Vec<u8>>> {
        let client = self.clone();
        Box::pin(async move {
            let parsed = Url::parse(&url).map_err(|e| LoadFailure::Parse(e.to_string()))?;
            let response = client
                .http
                .get(parsed)
                .bearer_auth(&client.token)
                .send()
                .await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadFailure::from_status(status.as_u16()));
            }
            Ok(response.bytes().await?.to_vec())
        })
    }
}
