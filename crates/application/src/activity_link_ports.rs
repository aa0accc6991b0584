use waymark_core::IssueId;

/// Port mapping a resource name to the numeric issue identifier it refers to.
///
/// Implementations are pure lookups. A resource that does not name a live
/// issue resolves to [`IssueId::UNKNOWN`] or [`IssueId::EMPTY`].
pub trait IssueIdResolver: Send + Sync {
    /// Resolves the issue identifier for one resource name.
    fn resolve_issue_id(&self, resource: &str) -> IssueId;
}
