use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::error::Result;
use crate::models::Article;

const BASE_URL: &str = "https://newsapi.org/v2";

/// One outbound request. Constructed by the app, executed by the client;
/// never carries the API key so it is safe to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Search { query: String },
    TopHeadlines { country: String },
}

#[derive(Clone)]
pub struct NewsClient {
    client: Client,
    api_key: String,
    language: String,
}

impl NewsClient {
    pub fn new(api_key: String, language: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("newsdeck/0.1.0")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            language,
        }
    }

    /// Build the full request URL, key included.
    pub fn request_url(&self, request: &FetchRequest) -> Result<Url> {
        match request {
            FetchRequest::Search { query } => {
                let mut url = Url::parse(&format!("{BASE_URL}/everything"))?;
                url.query_pairs_mut()
                    .append_pair("q", query)
                    .append_pair("language", &self.language)
                    .append_pair("sortBy", "publishedAt")
                    .append_pair("apiKey", &self.api_key);
                Ok(url)
            }
            FetchRequest::TopHeadlines { country } => {
                let mut url = Url::parse(&format!("{BASE_URL}/top-headlines"))?;
                url.query_pairs_mut()
                    .append_pair("country", country)
                    .append_pair("apiKey", &self.api_key);
                Ok(url)
            }
        }
    }

    /// Issue one request and return the article list. Non-success status,
    /// transport failure, and malformed bodies all collapse into a single
    /// fetch error.
    pub async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Article>> {
        tracing::debug!("fetching {:?}", request);

        let url = self.request_url(request)?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(
                anyhow::anyhow!("news request failed: HTTP {}", response.status()).into(),
            );
        }

        let body: NewsResponse = response.json().await?;
        tracing::debug!("fetched {} articles", body.articles.len());
        Ok(body.articles)
    }
}

/// Envelope of both NewsAPI endpoints. Only `articles` is consumed.
#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<Article>,
}
