use waymark_application::IssueIdResolver;
use waymark_core::IssueId;

const PROJECT_PREFIX: &str = "projects";
const ISSUE_PREFIX: &str = "issues";

/// Resolves issue identifiers from `projects/{project}/issues/{issue}` names.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceNameIssueIdResolver;

impl ResourceNameIssueIdResolver {
    /// Creates a resource name resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl IssueIdResolver for ResourceNameIssueIdResolver {
    fn resolve_issue_id(&self, resource: &str) -> IssueId {
        let segments: Vec<&str> = resource.split('/').collect();
        let [project_prefix, project, issue_prefix, issue] = segments.as_slice() else {
            return IssueId::UNKNOWN;
        };

        if *project_prefix != PROJECT_PREFIX || *issue_prefix != ISSUE_PREFIX || project.is_empty()
        {
            return IssueId::UNKNOWN;
        }

        issue
            .parse::<i64>()
            .map(IssueId::new)
            .unwrap_or(IssueId::UNKNOWN)
    }
}
