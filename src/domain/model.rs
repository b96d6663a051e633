use crate::utils::error::{ArtifactError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A storefront product as it appears in `produtos.json`.
///
/// Field order here is the key order of the serialized record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "imagem")]
    pub image: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "tamanhos")]
    pub sizes: Vec<String>,
    #[serde(rename = "cores")]
    pub colors: Vec<String>,
}

/// What gets written to an artifact file.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Written byte-for-byte.
    Text(&'static str),
    /// Serialized as 2-space indented JSON, keys in insertion order.
    Json(serde_json::Value),
}

impl Payload {
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Payload::Json(serde_json::to_value(value)?))
    }

    /// Number of top-level elements for JSON sequences and mappings.
    pub fn element_count(&self) -> Option<usize> {
        match self {
            Payload::Json(serde_json::Value::Array(items)) => Some(items.len()),
            Payload::Json(serde_json::Value::Object(map)) => Some(map.len()),
            _ => None,
        }
    }

    pub fn format_name(&self) -> &'static str {
        match self {
            Payload::Text(_) => "text",
            Payload::Json(_) => "json",
        }
    }
}

/// Lines printed to stdout once an artifact has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub success: &'static str,
    /// Printed as `"<label>: <count>"` after the success line.
    pub total_label: Option<&'static str>,
}

impl Announcement {
    pub fn new(success: &'static str) -> Self {
        Self {
            success,
            total_label: None,
        }
    }

    pub fn with_total(mut self, label: &'static str) -> Self {
        self.total_label = Some(label);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub file_name: &'static str,
    pub payload: Payload,
    pub announcement: Announcement,
}

impl Artifact {
    /// Serialize the payload into the exact bytes that land on disk.
    pub fn render(&self) -> Result<Vec<u8>> {
        match &self.payload {
            Payload::Text(content) => Ok(content.as_bytes().to_vec()),
            Payload::Json(value) => Ok(serde_json::to_vec_pretty(value)?),
        }
    }

    pub fn text(file_name: &'static str, content: &'static str, success: &'static str) -> Self {
        Self {
            file_name,
            payload: Payload::Text(content),
            announcement: Announcement::new(success),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleKind {
    Catalog,
    Infra,
    Docs,
    Social,
}

impl BundleKind {
    pub const ALL: [BundleKind; 4] = [
        BundleKind::Catalog,
        BundleKind::Infra,
        BundleKind::Docs,
        BundleKind::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BundleKind::Catalog => "catalog",
            BundleKind::Infra => "infra",
            BundleKind::Docs => "docs",
            BundleKind::Social => "social",
        }
    }
}

impl fmt::Display for BundleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BundleKind {
    type Err = ArtifactError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        BundleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| ArtifactError::UnknownBundle {
                name: s.to_string(),
            })
    }
}

/// The artifacts one generator run produces, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    pub kind: BundleKind,
    pub artifacts: Vec<Artifact>,
}
