//! Waymark batch link resolver.

#![forbid(unsafe_code)]

mod batch;
mod dto;
mod resolver_config;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;
use waymark_application::{ActivityLinkService, IssueIdResolver};
use waymark_core::{AppError, AppResult};
use waymark_infrastructure::{InMemoryIssueIdResolver, ResourceNameIssueIdResolver};

use crate::resolver_config::{InputSource, ResolverConfig};

fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ResolverConfig::load()?;
    let service = build_link_service(&config)?;

    let reader: Box<dyn BufRead> = match &config.input {
        InputSource::Stdin => Box::new(io::stdin().lock()),
        InputSource::File(path) => {
            let file = File::open(path).map_err(|error| {
                AppError::Io(format!("failed to open '{}': {error}", path.display()))
            })?;
            Box::new(BufReader::new(file))
        }
    };

    let summary = batch::resolve_stream(&service, reader, io::stdout().lock(), config.on_malformed)?;

    info!(
        entries = summary.entries,
        linked = summary.linked,
        skipped = summary.skipped,
        "activity links resolved"
    );

    Ok(())
}

fn build_link_service(config: &ResolverConfig) -> AppResult<ActivityLinkService> {
    let issue_id_resolver: Arc<dyn IssueIdResolver> = match &config.issue_id_map {
        Some(path) => {
            let document = fs::read_to_string(path).map_err(|error| {
                AppError::Io(format!("failed to read '{}': {error}", path.display()))
            })?;
            let resolver = InMemoryIssueIdResolver::from_json(document.as_str())?;
            info!(path = %path.display(), entries = resolver.len(), "using issue id map");
            Arc::new(resolver)
        }
        None => Arc::new(ResourceNameIssueIdResolver::new()),
    };

    Ok(ActivityLinkService::new(issue_id_resolver))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;
    use waymark_domain::{ActivityAction, ActivityEntry, Link};

    use super::build_link_service;
    use crate::resolver_config::{InputSource, MalformedPolicy, ResolverConfig};

    fn config(issue_id_map: Option<PathBuf>) -> ResolverConfig {
        ResolverConfig {
            input: InputSource::Stdin,
            on_malformed: MalformedPolicy::Fail,
            issue_id_map,
        }
    }

    fn issue_entry(resource: &str) -> ActivityEntry {
        ActivityEntry::new(
            ActivityAction::IssueCreate,
            r#"{"issueName":"Fix login bug"}"#,
            resource,
        )
    }

    #[test]
    fn issue_id_map_file_selects_map_lookup() {
        let file = NamedTempFile::new();
        assert!(file.is_ok());
        let Ok(mut file) = file else {
            return;
        };
        assert!(file.write_all(br#"{"projects/proj1":101}"#).is_ok());

        let service = build_link_service(&config(Some(file.path().to_path_buf())));
        assert!(service.is_ok());
        let Ok(service) = service else {
            return;
        };

        assert_eq!(
            service.resolve_link(&issue_entry("projects/proj1")).ok().flatten(),
            Some(Link::internal("Fix login bug", "/projects/proj1/issues/101"))
        );
        assert!(matches!(
            service.resolve_link(&issue_entry("projects/proj1/issues/7")),
            Ok(None)
        ));
    }

    #[test]
    fn without_map_resource_names_are_parsed() {
        let service = build_link_service(&config(None));
        assert!(service.is_ok());
        let Ok(service) = service else {
            return;
        };

        assert_eq!(
            service
                .resolve_link(&issue_entry("projects/proj1/issues/7"))
                .ok()
                .flatten(),
            Some(Link::internal(
                "Fix login bug",
                "/projects/proj1/issues/7/issues/7"
            ))
        );
        assert!(matches!(
            service.resolve_link(&issue_entry("projects/proj1")),
            Ok(None)
        ));
    }

    #[test]
    fn missing_map_file_is_an_error() {
        let service = build_link_service(&config(Some(PathBuf::from(
            "/nonexistent/waymark-issue-ids.json",
        ))));
        assert!(service.is_err());
    }
}
