use crate::error::ApiError;
use crate::models::{Movie, MovieDetail, MovieListResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::env;

const TMDB_BASE: &str = "https://api.themoviedb.org/3";

/// The four read-only queries the catalog issues. Each call maps to
/// exactly one outbound GET; there are no retries and no caching.
#[async_trait]
pub trait TmdbApi: Send + Sync {
    async fn fetch_popular(&self) -> Result<Vec<Movie>, ApiError>;
    async fn fetch_trending(&self) -> Result<Vec<Movie>, ApiError>;
    async fn fetch_detail(&self, id: i32) -> Result<MovieDetail, ApiError>;
    async fn search(&self, query: &str) -> Result<Vec<Movie>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base: TMDB_BASE.to_string(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let api_key = env::var("TMDB_API_KEY").context("TMDB_API_KEY not set")?;
        Ok(Self::new(api_key))
    }

    /// Points the client at a different host (mock server in tests).
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let res = self.client.get(url).send().await?.error_for_status()?;
        let text = res.text().await?;
        let parsed = serde_json::from_str(&text)?;
        Ok(parsed)
    }
}

#[async_trait]
impl TmdbApi for TmdbClient {
    async fn fetch_popular(&self) -> Result<Vec<Movie>, ApiError> {
        let url = format!(
            "{}/movie/popular?api_key={}&language=en-US&page=1",
            self.base, self.api_key
        );
        let data: MovieListResponse = self.get_json(&url).await?;
        Ok(data.results)
    }

    async fn fetch_trending(&self) -> Result<Vec<Movie>, ApiError> {
        let url = format!("{}/trending/movie/day?api_key={}", self.base, self.api_key);
        let data: MovieListResponse = self.get_json(&url).await?;
        Ok(data.results)
    }

    async fn fetch_detail(&self, id: i32) -> Result<MovieDetail, ApiError> {
        let url = format!(
            "{}/movie/{id}?api_key={}&language=en-US",
            self.base, self.api_key
        );
        self.get_json(&url).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Movie>, ApiError> {
        let url = format!(
            "{}/search/movie?api_key={}&language=en-US&query={}",
            self.base,
            self.api_key,
            urlencoding::encode(query)
        );
        let data: MovieListResponse = self.get_json(&url).await?;
        Ok(data.results)
    }
}
