use crate::reconcile::Keyed;
use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// Host and path classes are ASCII-only; `\d`/`\w` would admit Unicode.
const URL_PATTERN: &str = r"^(https?://)?([0-9a-z.-]+)\.([a-z.]{2,6})([/A-Za-z0-9_ .-]*)*/?$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub title: String,
    #[serde(alias = "target")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Link {
    pub fn new(id: impl Into<String>, fields: LinkFields) -> Self {
        Self {
            id: id.into(),
            title: fields.title,
            url: fields.url,
            description: fields.description,
        }
    }

    /// Target as handed to the browser: bare hosts get `https://`, anchors
    /// and explicit schemes are left alone.
    pub fn launch_url(&self) -> String {
        if self.url.starts_with("http") || self.url.starts_with('#') {
            self.url.clone()
        } else {
            format!("https://{}", self.url)
        }
    }

    /// Form contents for editing this link.
    pub fn draft(&self) -> LinkDraft {
        LinkDraft {
            title: self.title.clone(),
            url: self.url.clone(),
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

impl Keyed for Link {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Validated, trimmed link contents without an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFields {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
}

/// Raw add/edit form input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, thiserror::Error)]
#[error("invalid link: {}", describe(.title, .url))]
pub struct LinkFormErrors {
    pub title: Option<String>,
    pub url: Option<String>,
}

fn describe(title: &Option<String>, url: &Option<String>) -> String {
    [title.as_deref(), url.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("; ")
}

impl LinkFormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none()
    }
}

impl LinkDraft {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<LinkFields, LinkFormErrors> {
        let title = self.title.trim();
        let url = self.url.trim();
        let mut errors = LinkFormErrors::default();

        if title.is_empty() {
            errors.title = Some("Title is required".to_string());
        }

        if url.is_empty() {
            errors.url = Some("URL is required".to_string());
        } else if !is_valid_url(url) {
            errors.url = Some("Please enter a valid URL".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let description = self.description.trim();
        Ok(LinkFields {
            title: title.to_string(),
            url: url.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

fn url_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| match Regex::new(URL_PATTERN) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                warn!("URL pattern failed to compile, rejecting all URLs: {err}");
                None
            }
        })
        .as_ref()
}

/// Rejects everything if the pattern failed to compile.
pub fn is_valid_url(url: &str) -> bool {
    let Some(pattern) = url_pattern() else {
        return false;
    };
    if url.starts_with("http") {
        pattern.is_match(url)
    } else {
        pattern.is_match(&format!("https://{url}"))
    }
}

struct CatalogEntry {
    id: &'static str,
    title: &'static str,
    url: &'static str,
    description: &'static str,
}

const COMPANY_CATALOG: [CatalogEntry; 9] = [
    CatalogEntry {
        id: "travel",
        title: "Travel",
        url: "#travel",
        description: "Book business trips and manage travel requests",
    },
    CatalogEntry {
        id: "expenses",
        title: "Expenses",
        url: "#expenses",
        description: "Submit and track expense reports",
    },
    CatalogEntry {
        id: "calendar",
        title: "Holiday Calendar",
        url: "#calendar",
        description: "View company holidays and team calendars",
    },
    CatalogEntry {
        id: "self-service",
        title: "Self-Service Apps",
        url: "#self-service",
        description: "Access HR self-service applications",
    },
    CatalogEntry {
        id: "procurement",
        title: "Procurement",
        url: "#procurement",
        description: "Order supplies and equipment",
    },
    CatalogEntry {
        id: "wifi",
        title: "Wifi",
        url: "#wifi",
        description: "Network access and wifi passwords",
    },
    CatalogEntry {
        id: "email",
        title: "Email",
        url: "#email",
        description: "Access corporate email system",
    },
    CatalogEntry {
        id: "ai-chat",
        title: "AI Chat",
        url: "#ai-chat",
        description: "Company AI assistant and chatbot",
    },
    CatalogEntry {
        id: "onedrive",
        title: "OneDrive",
        url: "#onedrive",
        description: "Access cloud storage and shared files",
    },
];

/// The organization's fixed shortcuts in catalog order.
pub fn company_catalog() -> Vec<Link> {
    COMPANY_CATALOG
        .iter()
        .map(|entry| Link {
            id: entry.id.to_string(),
            title: entry.title.to_string(),
            url: entry.url.to_string(),
            description: Some(entry.description.to_string()),
        })
        .collect()
}

pub fn link_count_label(count: usize) -> String {
    if count == 1 {
        "1 link".to_string()
    } else {
        format!("{count} links")
    }
}
