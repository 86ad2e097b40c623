//! Email template entity and the drafts rendered from it

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A reusable email with named `{placeholder}` substitution points
///
/// The set of placeholders is closed: only the declared names are
/// substituted, in both the subject line and the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTemplate {
    /// Catalog key, e.g. `meeting_followup`
    pub name: String,
    /// Subject line (may contain placeholders)
    pub subject: String,
    /// Body text
    pub content: String,
    /// Placeholder names the template expects, in declaration order
    pub placeholders: Vec<String>,
}

impl EmailTemplate {
    /// Create a template
    #[must_use]
    pub fn new<I, S>(
        name: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
        placeholders: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            subject: subject.into(),
            content: content.into(),
            placeholders: placeholders.into_iter().map(Into::into).collect(),
        }
    }

    /// Marker text for a placeholder name (`recipient_name` -> `{recipient_name}`)
    #[must_use]
    pub fn marker(placeholder: &str) -> String {
        format!("{{{placeholder}}}")
    }

    /// Declared placeholders that `values` does not supply, in declaration order
    #[must_use]
    pub fn missing_placeholders<'a>(&'a self, values: &HashMap<String, String>) -> Vec<&'a str> {
        self.placeholders
            .iter()
            .map(String::as_str)
            .filter(|name| !values.contains_key(*name))
            .collect()
    }
}

/// A filled-in template ready for the caller to send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    /// Template the draft was rendered from
    pub template: String,
    pub subject: String,
    pub body: String,
}

impl std::fmt::Display for EmailDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subject: {}\n\n{}", self.subject, self.body)
    }
}
