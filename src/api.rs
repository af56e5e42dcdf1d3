// API client module: a small blocking HTTP client that talks to the
// marketplace backend. It is intentionally small and synchronous to keep
// the flow easy to follow.

use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Simple API client that holds a reqwest blocking client and the base
/// URL of the marketplace backend.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// A listed item as the backend returns it from `/items` and `/search`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Item {
    pub name: String,
    pub category: String,
    pub image_filename: String,
}

/// Response envelope for the item collection endpoints. The backend
/// serializes an empty collection as `null`, so the field stays optional.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ItemPage {
    pub items: Option<Vec<Item>>,
}

impl ItemPage {
    pub fn into_items(self) -> Vec<Item> {
        self.items.unwrap_or_default()
    }
}

impl ApiClient {
    /// Create an ApiClient configured from the environment variable
    /// `API_URL` or fallback to `http://127.0.0.1:9000`.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("API_URL").unwrap_or_else(|_| "http://127.0.0.1:9000".into());
        Self::with_base_url(base_url)
    }

    /// Create an ApiClient against an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a new listing by POSTing multipart form data to `/items`.
    /// The body carries exactly three named parts: `name`, `category`
    /// (may be empty) and the `image` file. Returns the parsed response
    /// body; the backend answers with a small JSON envelope whose shape
    /// we do not otherwise rely on.
    pub fn add_item(&self, name: &str, category: &str, image: &Path) -> Result<serde_json::Value> {
        let url = format!("{}/items", &self.base_url);
        tracing::debug!("submitting listing to {}", url);

        let bytes = std::fs::read(image).context("Failed to read image file")?;
        let file_name = image
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("image.jpg")
            .to_string();
        let mime = mime_for_path(image);

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)
            .context("Invalid image mime type")?;
        let form = multipart::Form::new()
            .text("name", name.to_string())
            .text("category", category.to_string())
            .part("image", part);

        let res = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .context("Failed to send listing request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Listing failed: {} - {}", status, txt);
        }
        let body: serde_json::Value = res.json().context("Parsing listing response json")?;
        Ok(body)
    }

    /// Fetch every listed item from `/items`.
    pub fn get_items(&self) -> Result<Vec<Item>> {
        let url = format!("{}/items", &self.base_url);
        let res = self
            .client
            .get(&url)
            .send()
            .context("Failed to send items request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Fetching items failed: {} - {}", status, txt);
        }
        let page: ItemPage = res.json().context("Parsing items response json")?;
        Ok(page.into_items())
    }

    /// Search items by name substring via `/search?keyword=...`.
    pub fn search(&self, keyword: &str) -> Result<Vec<Item>> {
        let url = format!("{}/search", &self.base_url);
        let res = self
            .client
            .get(&url)
            .query(&[("keyword", keyword)])
            .send()
            .context("Failed to send search request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Search failed: {} - {}", status, txt);
        }
        let page: ItemPage = res.json().context("Parsing search response json")?;
        Ok(page.into_items())
    }

    /// Download a stored item image from `/image/<filename>`. The backend
    /// falls back to a default picture for unknown names, so this only
    /// fails on transport or status errors.
    pub fn fetch_image(&self, filename: &str) -> Result<Vec<u8>> {
        let url = format!("{}/image/{}", &self.base_url, filename);
        let res = self
            .client
            .get(&url)
            .send()
            .context("Failed to send image request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Fetching image failed: {} - {}", status, txt);
        }
        let bytes = res.bytes().context("Reading image response body")?;
        Ok(bytes.to_vec())
    }
}

/// Map a file extension to the mime type sent with the image part.
/// Unknown extensions fall back to `image/jpeg`.
pub fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "image/jpeg",
    }
}
