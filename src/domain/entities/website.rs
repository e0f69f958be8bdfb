//! Website record and the per-request collection built from upstream payloads.

use serde::{Deserialize, Serialize};

/// Metadata about a single website as reported by an upstream source.
///
/// Records are only ever created by decoding a source payload and are never
/// edited afterwards. Every field is required when decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Website {
    pub url: String,
    pub views: i64,
    #[serde(rename = "relevanceScore")]
    pub relevance_score: f32,
}

impl Website {
    /// Creates a new Website instance.
    pub fn new(url: impl Into<String>, views: i64, relevance_score: f32) -> Self {
        Self {
            url: url.into(),
            views,
            relevance_score,
        }
    }
}

/// Wire shape every upstream source must return.
///
/// `data` is required and must be an array; `null` is rejected. Any
/// additional fields (such as an upstream `count`) are ignored.
#[derive(Debug, Deserialize)]
struct SourcePayload {
    data: Vec<Website>,
}

/// An ordered sequence of websites.
///
/// Order is insignificant until the collection has been sorted with
/// [`crate::domain::ranking::sort_websites`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebsiteCollection {
    websites: Vec<Website>,
}

impl WebsiteCollection {
    pub fn new(websites: Vec<Website>) -> Self {
        Self { websites }
    }

    /// Decodes one upstream payload (`{"data": [...]}`) into a collection.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if the payload is not a
    /// JSON object with a `data` array of websites.
    pub fn from_json(payload: &[u8]) -> Result<Self, serde_json::Error> {
        let payload: SourcePayload = serde_json::from_slice(payload)?;
        Ok(Self::new(payload.data))
    }

    /// Appends every website from `other`, preserving its order.
    pub fn extend(&mut self, other: WebsiteCollection) {
        self.websites.extend(other.websites);
    }

    pub fn len(&self) -> usize {
        self.websites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.websites.is_empty()
    }

    pub fn as_slice(&self) -> &[Website] {
        &self.websites
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Website] {
        &mut self.websites
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.websites.truncate(len);
    }

    pub fn into_vec(self) -> Vec<Website> {
        self.websites
    }
}
