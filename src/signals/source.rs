//! Signal kinds and sources

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::errors::{SignalError, SignalResult};

/// The four secondary signals, in join order.
///
/// Wire keys are the provider names the dashboard reads: `horoscope`,
/// `dream`, `google`, `tiktok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Horoscope,
    Dream,
    #[serde(rename = "google", alias = "search")]
    Search,
    #[serde(rename = "tiktok", alias = "video")]
    Video,
}

impl SignalKind {
    pub const ALL: [SignalKind; 4] = [
        SignalKind::Horoscope,
        SignalKind::Dream,
        SignalKind::Search,
        SignalKind::Video,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Horoscope => "horoscope",
            SignalKind::Dream => "dream",
            SignalKind::Search => "google",
            SignalKind::Video => "tiktok",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Boxed fetch future
pub type SignalFuture<'a> = Pin<Box<dyn Future<Output = SignalResult<String>> + Send + 'a>>;

/// A secondary content provider.
///
/// The response body is opaque text; the gatherer reduces it to an excerpt.
pub trait SignalSource: Send + Sync {
    /// Which signal this source supplies
    fn kind(&self) -> SignalKind;

    /// Fetch the raw body
    fn fetch(&self) -> SignalFuture<'_>;
}

/// Plain `GET` against a configured URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    kind: SignalKind,
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source with its own client.
    ///
    /// `timeout` bounds the whole request inside the client as well; the
    /// gatherer applies its own timeout on top.
    pub fn new(kind: SignalKind, url: impl Into<String>, timeout: Duration) -> SignalResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SignalError::Client(e.to_string()))?;

        Ok(Self::with_client(kind, url, client))
    }

    /// Create a source sharing an existing client
    pub fn with_client(kind: SignalKind, url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            kind,
            url: url.into(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SignalSource for HttpSource {
    fn kind(&self) -> SignalKind {
        self.kind
    }

    fn fetch(&self) -> SignalFuture<'_> {
        Box::pin(async move {
            let response = self.client.get(&self.url).send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(SignalError::Status(status.as_u16()));
            }

            Ok(response.text().await?)
        })
    }
}
