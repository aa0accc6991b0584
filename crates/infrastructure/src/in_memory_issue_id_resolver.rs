use std::collections::HashMap;

use tracing::debug;
use waymark_application::IssueIdResolver;
use waymark_core::{AppError, AppResult, IssueId};

/// In-memory issue identifier resolver backed by a fixed resource map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueIdResolver {
    issue_ids: HashMap<String, IssueId>,
}

impl InMemoryIssueIdResolver {
    /// Creates an empty resolver. Every resource resolves to [`IssueId::UNKNOWN`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            issue_ids: HashMap::new(),
        }
    }

    /// Adds or replaces the identifier for one resource.
    #[must_use]
    pub fn with_issue(mut self, resource: impl Into<String>, issue_id: IssueId) -> Self {
        self.issue_ids.insert(resource.into(), issue_id);
        self
    }

    /// Loads a resolver from a JSON object mapping resource names to integer ids.
    pub fn from_json(document: &str) -> AppResult<Self> {
        let raw: HashMap<String, i64> = serde_json::from_str(document).map_err(|error| {
            AppError::Validation(format!("invalid issue id map: {error}"))
        })?;
        debug!(entries = raw.len(), "loaded issue id map");

        Ok(Self {
            issue_ids: raw
                .into_iter()
                .map(|(resource, issue_id)| (resource, IssueId::new(issue_id)))
                .collect(),
        })
    }

    /// Returns the number of mapped resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issue_ids.len()
    }

    /// Returns whether no resources are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issue_ids.is_empty()
    }
}

impl IssueIdResolver for InMemoryIssueIdResolver {
    fn resolve_issue_id(&self, resource: &str) -> IssueId {
        self.issue_ids
            .get(resource)
            .copied()
            .unwrap_or(IssueId::UNKNOWN)
    }
}
