use std::sync::Arc;

use tracing::debug;
use waymark_core::AppResult;
use waymark_domain::{
    ActivityEntry, DatabaseTransferPayload, IssueRelatedPayload, Link, LinkFamily,
};

use crate::activity_link_ports::IssueIdResolver;

/// Application service deriving navigation links for activity log entries.
#[derive(Clone)]
pub struct ActivityLinkService {
    issue_id_resolver: Arc<dyn IssueIdResolver>,
}

impl ActivityLinkService {
    /// Creates a new link service from an issue identifier resolver.
    #[must_use]
    pub fn new(issue_id_resolver: Arc<dyn IssueIdResolver>) -> Self {
        Self { issue_id_resolver }
    }

    /// Derives the link shown next to one activity entry.
    ///
    /// Returns `Ok(None)` when the entry has no link. A payload that does not
    /// match its action kind is returned as [`waymark_core::AppError::MalformedPayload`].
    pub fn resolve_link(&self, entry: &ActivityEntry) -> AppResult<Option<Link>> {
        match entry.action().link_family() {
            LinkFamily::RepositoryPush => {
                debug!(
                    action = entry.action().as_str(),
                    resource = entry.resource(),
                    "repository push links are deferred"
                );
                Ok(None)
            }
            LinkFamily::DatabaseTransfer => {
                let payload = entry.decode_payload::<DatabaseTransferPayload>()?;
                Ok(Some(Link::internal(
                    payload.database_name(),
                    format!("/db/{}", payload.database_id()),
                )))
            }
            LinkFamily::Issue => {
                let payload = entry.decode_payload::<IssueRelatedPayload>()?;
                let issue_id = self.issue_id_resolver.resolve_issue_id(entry.resource());
                if issue_id.is_placeholder() {
                    debug!(
                        action = entry.action().as_str(),
                        resource = entry.resource(),
                        issue_id = %issue_id,
                        "activity issue did not resolve"
                    );
                    return Ok(None);
                }

                Ok(Some(Link::internal(
                    payload.issue_name(),
                    format!("/{}/issues/{issue_id}", entry.resource()),
                )))
            }
            LinkFamily::None => {
                debug!(
                    action = entry.action().as_str(),
                    resource = entry.resource(),
                    "activity action has no link"
                );
                Ok(None)
            }
        }
    }

    /// Derives links for a batch of entries, each independently.
    #[must_use]
    pub fn resolve_links(&self, entries: &[ActivityEntry]) -> Vec<AppResult<Option<Link>>> {
        entries
            .iter()
            .map(|entry| self.resolve_link(entry))
            .collect()
    }
}
