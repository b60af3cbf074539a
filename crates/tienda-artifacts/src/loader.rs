use std::fmt;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::model::ArtifactBundle;

/// The five artifact files published by the analysis pipeline, in load order.
pub const ARTIFACT_FILES: [&str; 5] = [
    "summary.json",
    "regression.json",
    "anova.json",
    "pca.json",
    "clusters.json",
];

/// Why a load attempt failed.
///
/// Transport failures are deliberately generic: the dashboard reports a
/// single loading error without singling out the failing resource. Parse
/// failures carry the decoder's message verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// One or more of the five fetches did not succeed at the protocol
    /// level.
    Transport,
    /// A successfully transported resource could not be decoded.
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Transport => f.write_str("failed to load one or more data files"),
            LoadError::Parse(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for LoadError {}

/// Caller-observable load lifecycle.
///
/// Starts at `Loading` and moves to exactly one of `Ready` or `Error` via
/// [`LoadState::settle`]. There is no path back: retrying means a new run.
#[derive(Debug)]
pub enum LoadState {
    /// Requests are in flight; no artifact is visible yet.
    Loading,
    /// All five artifacts decoded successfully.
    Ready(ArtifactBundle),
    /// The load failed; holds the user-facing message.
    Error(String),
}

impl LoadState {
    /// Applies the load outcome, transitioning `Loading` to `Ready` or
    /// `Error`.
    ///
    /// # Panics
    ///
    /// Panics if the state has already settled; a load resolves exactly
    /// once.
    pub fn settle(&mut self, result: Result<ArtifactBundle, LoadError>) {
        assert!(matches!(self, LoadState::Loading), "load already settled");
        *self = match result {
            Ok(bundle) => LoadState::Ready(bundle),
            Err(err) => LoadState::Error(err.to_string()),
        };
    }
}

/// Retrieves the raw bytes of one artifact file.
///
/// The trait seam lets tests drive [`load`] without a network.
pub trait ArtifactSource {
    #[expect(async_fn_in_trait)]
    async fn fetch(&self, file: &str) -> Result<Vec<u8>, LoadError>;
}

/// HTTP-backed artifact source serving `{base_url}/{file}`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }
}

impl ArtifactSource for HttpSource {
    async fn fetch(&self, file: &str) -> Result<Vec<u8>, LoadError> {
        let url = format!("{}/{file}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| LoadError::Transport)?;
        if !response.status().is_success() {
            return Err(LoadError::Transport);
        }
        let body = response.bytes().await.map_err(|_| LoadError::Transport)?;
        Ok(body.to_vec())
    }
}

/// Loads all five artifacts from `source`, all-or-nothing.
///
/// The five fetches are dispatched concurrently and joined; the first
/// transport failure short-circuits the whole operation. Decoding starts
/// only after every body has arrived, so a transport failure is always
/// reported ahead of any parse failure.
pub async fn load<S>(source: &S) -> Result<ArtifactBundle, LoadError>
where
    S: ArtifactSource,
{
    let (summary, regression, anova, pca, clusters) = tokio::try_join!(
        source.fetch(ARTIFACT_FILES[0]),
        source.fetch(ARTIFACT_FILES[1]),
        source.fetch(ARTIFACT_FILES[2]),
        source.fetch(ARTIFACT_FILES[3]),
        source.fetch(ARTIFACT_FILES[4]),
    )?;

    Ok(ArtifactBundle {
        summary: decode(&summary)?,
        regression: decode(&regression)?,
        anova: decode(&anova)?,
        pca: decode(&pca)?,
        clusters: decode(&clusters)?,
    })
}

fn decode<T>(bytes: &[u8]) -> Result<T, LoadError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(bytes).map_err(|err| LoadError::Parse(err.to_string()))
}
