//! Email template operations: catalog lookup and draft rendering

use std::collections::{BTreeMap, HashMap};

use domain::{EmailDraft, EmailTemplate};
use tracing::{debug, instrument};

use super::AgentService;
use crate::error::ApplicationError;
use crate::stores::{render_draft, render_template};

impl AgentService {
    /// Snapshot of the template catalog, keyed by name
    pub fn get_email_templates(&self) -> BTreeMap<String, EmailTemplate> {
        self.templates.templates()
    }

    /// Look up one template by name
    pub fn template(&self, name: &str) -> Result<&EmailTemplate, ApplicationError> {
        self.templates.get(name)
    }

    /// Fill in the body of `template` with `values`
    ///
    /// Fails with `MissingPlaceholder` if a declared placeholder has no value;
    /// unused values are ignored.
    pub fn render_template(
        &self,
        template: &EmailTemplate,
        values: &HashMap<String, String>,
    ) -> Result<String, ApplicationError> {
        render_template(template, values)
    }

    /// Render subject and body of the named template
    #[instrument(skip(self, values), fields(owner = %self.owner_name))]
    pub fn draft_email(
        &self,
        template_name: &str,
        values: &HashMap<String, String>,
    ) -> Result<EmailDraft, ApplicationError> {
        let draft = render_draft(self.templates.get(template_name)?, values)?;
        debug!(subject = %draft.subject, "Email draft rendered");
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::PROJECT_UPDATE;

    fn project_values() -> HashMap<String, String> {
        [
            ("project_name", "Apollo"),
            ("recipient_name", "Sarah Smith"),
            ("project_status", "On track"),
            ("achievements", "Beta shipped"),
            ("next_steps", "Public launch"),
            ("timeline", "Q2"),
            ("sender_name", "John Doe"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn snapshot_is_detached_from_catalog() {
        let agent = AgentService::new("John Doe");
        let mut snapshot = agent.get_email_templates();
        snapshot.clear();
        assert_eq!(agent.get_email_templates().len(), 2);
    }

    #[test]
    fn draft_project_update() {
        let agent = AgentService::new("John Doe");
        let draft = agent.draft_email(PROJECT_UPDATE, &project_values()).unwrap();

        assert_eq!(draft.subject, "Project Update: Apollo");
        assert!(draft.body.contains("Current Status:\nOn track"));
        assert!(!draft.body.contains('{'));
    }

    #[test]
    fn draft_unknown_template_is_not_found() {
        let agent = AgentService::new("John Doe");
        assert!(agent
            .draft_email("birthday", &project_values())
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn render_via_facade() {
        let agent = AgentService::new("John Doe");
        let template = agent.template(PROJECT_UPDATE).unwrap();
        let body = agent.render_template(template, &project_values()).unwrap();
        assert!(body.starts_with("Dear Sarah Smith,"));
    }
}
