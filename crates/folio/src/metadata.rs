//! Static document metadata for the page `<head>`.

use serde::{Deserialize, Serialize};

/// Title, description, authors and keywords of the editor page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub authors: Vec<String>,
    pub keywords: Vec<String>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: "PDF Editor".to_string(),
            description: "Edit, annotate and organize PDF documents directly in your browser"
                .to_string(),
            authors: vec!["Folio".to_string()],
            keywords: ["pdf", "editor", "annotate", "highlight", "documents"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}
