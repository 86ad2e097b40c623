//! Email template catalog and placeholder substitution
//!
//! Substitution is a single pass over the template text: every declared
//! `{name}` marker is replaced by its value, and the inserted values are never
//! scanned again.

use std::collections::{BTreeMap, HashMap};

use aho_corasick::{AhoCorasick, MatchKind};
use domain::{DomainError, EmailDraft, EmailTemplate};

use crate::error::ApplicationError;

/// Catalog key of the meeting follow-up template
pub const MEETING_FOLLOWUP: &str = "meeting_followup";

/// Catalog key of the project update template
pub const PROJECT_UPDATE: &str = "project_update";

const MEETING_FOLLOWUP_BODY: &str = "Hi {recipient_name},

Thank you for the productive meeting {meeting_time}. It was great to discuss {topics_discussed}. I appreciate your insights and suggestions.

As we agreed, I will {action_items}, and I look forward to {next_steps}.

Please let me know if you have any questions or need further information.

Best regards,
{sender_name}";

const PROJECT_UPDATE_BODY: &str = "Dear {recipient_name},

I hope this email finds you well. I wanted to provide an update on {project_name}.

Current Status:
{project_status}

Key Achievements:
{achievements}

Next Steps:
{next_steps}

Timeline:
{timeline}

Please let me know if you need any clarification or have questions.

Best regards,
{sender_name}";

/// Read-only catalog of email templates, keyed by name
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, EmailTemplate>,
}

impl TemplateRegistry {
    /// Registry holding the built-in catalog
    #[must_use]
    pub fn with_default_catalog() -> Self {
        Self::from_templates(default_catalog())
    }

    /// Registry holding exactly the given templates
    ///
    /// A later template replaces an earlier one with the same name.
    #[must_use]
    pub fn from_templates(templates: impl IntoIterator<Item = EmailTemplate>) -> Self {
        Self {
            templates: templates
                .into_iter()
                .map(|t| (t.name.clone(), t))
                .collect(),
        }
    }

    /// Snapshot of the whole catalog
    #[must_use]
    pub fn templates(&self) -> BTreeMap<String, EmailTemplate> {
        self.templates.clone()
    }

    /// Look up a template by name
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotFound`] for an unknown name.
    pub fn get(&self, name: &str) -> Result<&EmailTemplate, ApplicationError> {
        self.templates
            .get(name)
            .ok_or_else(|| DomainError::not_found("EmailTemplate", name).into())
    }

    /// Template names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Number of templates in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}

/// Fill in the template body
///
/// # Errors
///
/// Returns [`DomainError::MissingPlaceholder`] naming the first declared
/// placeholder (in declaration order) that `values` does not supply.
pub fn render_template(
    template: &EmailTemplate,
    values: &HashMap<String, String>,
) -> Result<String, ApplicationError> {
    substitute(template, &template.content, values)
}

/// Fill in both subject line and body
///
/// # Errors
///
/// Same as [`render_template`].
pub fn render_draft(
    template: &EmailTemplate,
    values: &HashMap<String, String>,
) -> Result<EmailDraft, ApplicationError> {
    Ok(EmailDraft {
        template: template.name.clone(),
        subject: substitute(template, &template.subject, values)?,
        body: substitute(template, &template.content, values)?,
    })
}

fn substitute(
    template: &EmailTemplate,
    text: &str,
    values: &HashMap<String, String>,
) -> Result<String, ApplicationError> {
    let mut markers = Vec::with_capacity(template.placeholders.len());
    let mut replacements = Vec::with_capacity(template.placeholders.len());
    for name in &template.placeholders {
        let value = values
            .get(name)
            .ok_or_else(|| DomainError::missing_placeholder(&template.name, name))?;
        markers.push(EmailTemplate::marker(name));
        replacements.push(value.as_str());
    }
    if markers.is_empty() {
        return Ok(text.to_string());
    }

    let matcher = AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostFirst)
        .build(&markers)
        .map_err(|e| ApplicationError::Internal(format!("placeholder matcher: {e}")))?;
    Ok(matcher.replace_all(text, &replacements))
}

fn default_catalog() -> Vec<EmailTemplate> {
    vec![
        EmailTemplate::new(
            MEETING_FOLLOWUP,
            "Follow-up on Our {meeting_type} Meeting",
            MEETING_FOLLOWUP_BODY,
            [
                "meeting_type",
                "recipient_name",
                "meeting_time",
                "topics_discussed",
                "action_items",
                "next_steps",
                "sender_name",
            ],
        ),
        EmailTemplate::new(
            PROJECT_UPDATE,
            "Project Update: {project_name}",
            PROJECT_UPDATE_BODY,
            [
                "project_name",
                "recipient_name",
                "project_status",
                "achievements",
                "next_steps",
                "timeline",
                "sender_name",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meeting_values() -> HashMap<String, String> {
        [
            ("meeting_type", "Project Planning"),
            ("recipient_name", "Sarah Smith"),
            ("meeting_time", "today"),
            ("topics_discussed", "the Q1 marketing strategy"),
            ("action_items", "prepare the revised budget proposal"),
            ("next_steps", "our follow-up meeting next week"),
            ("sender_name", "John Doe"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn default_catalog_has_both_templates() {
        let registry = TemplateRegistry::with_default_catalog();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec![MEETING_FOLLOWUP, PROJECT_UPDATE]
        );
        assert!(registry.get(PROJECT_UPDATE).is_ok());
    }

    #[test]
    fn declared_placeholders_cover_template_text() {
        for template in TemplateRegistry::with_default_catalog().templates().values() {
            for text in [&template.subject, &template.content] {
                let mut rest = text.as_str();
                while let Some(open) = rest.find('{') {
                    let close = rest[open..].find('}').unwrap() + open;
                    let name = &rest[open + 1..close];
                    assert!(template.placeholders.iter().any(|p| p == name), "{name}");
                    rest = &rest[close + 1..];
                }
            }
        }
    }

    #[test]
    fn unknown_template_is_not_found() {
        let registry = TemplateRegistry::with_default_catalog();
        assert!(registry.get("birthday").unwrap_err().is_not_found());
    }

    #[test]
    fn renders_meeting_followup_completely() {
        let registry = TemplateRegistry::with_default_catalog();
        let body = render_template(
            registry.get(MEETING_FOLLOWUP).unwrap(),
            &meeting_values(),
        )
        .unwrap();

        assert!(body.starts_with("Hi Sarah Smith,"));
        assert!(body.ends_with("John Doe"));
        assert!(!body.contains('{'));
        assert!(!body.contains('}'));
    }

    #[test]
    fn missing_value_is_reported() {
        let registry = TemplateRegistry::with_default_catalog();
        let mut values = meeting_values();
        values.remove("sender_name");

        let err = render_template(registry.get(MEETING_FOLLOWUP).unwrap(), &values).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::MissingPlaceholder { ref placeholder, .. })
                if placeholder == "sender_name"
        ));
    }

    #[test]
    fn extra_values_are_ignored() {
        let registry = TemplateRegistry::with_default_catalog();
        let mut values = meeting_values();
        values.insert("budget".to_string(), "unused".to_string());

        let body = render_template(registry.get(MEETING_FOLLOWUP).unwrap(), &values).unwrap();
        assert!(!body.contains("unused"));
    }

    #[test]
    fn substitution_does_not_recurse() {
        let template = EmailTemplate::new("t", "{a}", "{a} and {b}", ["a", "b"]);
        let values = HashMap::from([
            ("a".to_string(), "{b}".to_string()),
            ("b".to_string(), "B".to_string()),
        ]);
        assert_eq!(render_template(&template, &values).unwrap(), "{b} and B");
    }

    #[test]
    fn undeclared_markers_are_left_alone() {
        let template = EmailTemplate::new("t", "s", "{a} {other}", ["a"]);
        let values = HashMap::from([("a".to_string(), "A".to_string())]);
        assert_eq!(render_template(&template, &values).unwrap(), "A {other}");
    }

    #[test]
    fn template_without_placeholders_is_returned_verbatim() {
        let template = EmailTemplate::new("t", "Hello", "Plain text", Vec::<String>::new());
        assert_eq!(render_template(&template, &HashMap::new()).unwrap(), "Plain text");
    }

    #[test]
    fn draft_fills_subject_and_body() {
        let registry = TemplateRegistry::with_default_catalog();
        let draft = render_draft(
            registry.get(MEETING_FOLLOWUP).unwrap(),
            &meeting_values(),
        )
        .unwrap();

        assert_eq!(draft.template, MEETING_FOLLOWUP);
        assert_eq!(draft.subject, "Follow-up on Our Project Planning Meeting");
        assert!(draft.body.contains("the Q1 marketing strategy"));
    }
}
