use std::io::{BufRead, Write};

use tracing::warn;
use waymark_application::ActivityLinkService;
use waymark_core::{AppError, AppResult};
use waymark_domain::ActivityEntry;

use crate::dto::{ActivityLinkLine, ActivityLinkResponse};
use crate::resolver_config::MalformedPolicy;

/// Counters reported after a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub entries: usize,
    pub linked: usize,
    pub skipped: usize,
}

/// Reads JSON-lines activity entries and writes one link line per entry.
pub fn resolve_stream<R: BufRead, W: Write>(
    service: &ActivityLinkService,
    reader: R,
    mut writer: W,
    policy: MalformedPolicy,
) -> AppResult<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|error| {
            AppError::Io(format!("failed to read line {line_number}: {error}"))
        })?;
        if line.trim().is_empty() {
            continue;
        }
        summary.entries += 1;

        let resolved = serde_json::from_str::<ActivityEntry>(line.as_str())
            .map_err(|error| {
                AppError::Validation(format!("line {line_number}: invalid activity entry: {error}"))
            })
            .and_then(|entry| service.resolve_link(&entry));

        let link = match resolved {
            Ok(link) => link,
            Err(error) => match policy {
                MalformedPolicy::Fail => {
                    warn!(line = line_number, error = %error, "aborting on malformed activity entry");
                    return Err(error);
                }
                MalformedPolicy::Skip => {
                    warn!(line = line_number, error = %error, "skipping malformed activity entry");
                    summary.skipped += 1;
                    None
                }
            },
        };

        if link.is_some() {
            summary.linked += 1;
        }

        let output = ActivityLinkLine {
            line: line_number,
            link: link.map(ActivityLinkResponse::from),
        };
        serde_json::to_writer(&mut writer, &output)
            .map_err(|error| AppError::Io(format!("failed to write line {line_number}: {error}")))?;
        writer
            .write_all(b"\n")
            .map_err(|error| AppError::Io(format!("failed to write line {line_number}: {error}")))?;
    }

    writer
        .flush()
        .map_err(|error| AppError::Io(format!("failed to flush output: {error}")))?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use waymark_core::IssueId;
    use waymark_infrastructure::InMemoryIssueIdResolver;

    use super::{BatchSummary, resolve_stream};
    use crate::resolver_config::MalformedPolicy;
    use waymark_application::ActivityLinkService;

    const INPUT: &str = concat!(
        r#"{"action":"ACTION_PROJECT_DATABASE_TRANSFER","payload":"{\"databaseName\":\"orders_db\",\"databaseId\":\"42\"}","resource":"projects/proj1"}"#,
        "\n\n",
        r#"{"action":"ACTION_ISSUE_CREATE","payload":"not json","resource":"projects/proj1"}"#,
        "\n",
        r#"{"action":"ACTION_ISSUE_CREATE","payload":"{\"issueName\":\"Fix login bug\"}","resource":"projects/proj1"}"#,
        "\n",
    );

    fn service() -> ActivityLinkService {
        ActivityLinkService::new(Arc::new(
            InMemoryIssueIdResolver::new().with_issue("projects/proj1", IssueId::new(101)),
        ))
    }

    #[test]
    fn skip_policy_writes_null_for_malformed_entries() {
        let mut output = Vec::new();
        let summary = resolve_stream(
            &service(),
            INPUT.as_bytes(),
            &mut output,
            MalformedPolicy::Skip,
        );

        assert_eq!(
            summary.ok(),
            Some(BatchSummary {
                entries: 3,
                linked: 2,
                skipped: 1,
            })
        );

        let written = String::from_utf8(output).unwrap_or_default();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"line":1,"link":{"title":"orders_db","path":"/db/42","external":false}}"#,
                r#"{"line":3,"link":null}"#,
                r#"{"line":4,"link":{"title":"Fix login bug","path":"/projects/proj1/issues/101","external":false}}"#,
            ]
        );
    }

    #[test]
    fn fail_policy_stops_at_first_malformed_entry() {
        let mut output = Vec::new();
        let summary = resolve_stream(
            &service(),
            INPUT.as_bytes(),
            &mut output,
            MalformedPolicy::Fail,
        );

        assert!(summary.is_err());
        assert_eq!(String::from_utf8(output).unwrap_or_default().lines().count(), 1);
    }

    #[test]
    fn omitted_default_fields_resolve_without_error() {
        let input = concat!(
            r#"{"action":"ACTION_PROJECT_REPOSITORY_PUSH","resource":"projects/p1"}"#,
            "\n",
            r#"{"action":"ACTION_MEMBER_CREATE","payload":"{}"}"#,
            "\n",
            r#"{"payload":"{}","resource":"projects/p1"}"#,
            "\n",
        );
        let mut output = Vec::new();
        let summary = resolve_stream(
            &service(),
            input.as_bytes(),
            &mut output,
            MalformedPolicy::Fail,
        );

        assert_eq!(
            summary.ok(),
            Some(BatchSummary {
                entries: 3,
                linked: 0,
                skipped: 0,
            })
        );
        let written = String::from_utf8(output).unwrap_or_default();
        assert_eq!(
            written.lines().collect::<Vec<_>>(),
            vec![
                r#"{"line":1,"link":null}"#,
                r#"{"line":2,"link":null}"#,
                r#"{"line":3,"link":null}"#,
            ]
        );
    }

    #[test]
    fn invalid_entry_json_follows_policy() {
        let mut output = Vec::new();
        let summary = resolve_stream(
            &service(),
            "{\"action\":".as_bytes(),
            &mut output,
            MalformedPolicy::Skip,
        );

        assert_eq!(summary.ok().map(|summary| summary.skipped), Some(1));
    }
}
