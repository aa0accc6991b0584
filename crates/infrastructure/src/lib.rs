//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_issue_id_resolver;
mod resource_name_issue_id_resolver;

pub use in_memory_issue_id_resolver::InMemoryIssueIdResolver;
pub use resource_name_issue_id_resolver::ResourceNameIssueIdResolver;
