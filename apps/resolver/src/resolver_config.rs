use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use waymark_core::AppError;

/// Where activity entries are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// What to do with an entry whose payload does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedPolicy {
    Fail,
    Skip,
}

impl FromStr for MalformedPolicy {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "fail" => Ok(Self::Fail),
            "skip" => Ok(Self::Skip),
            other => Err(AppError::Validation(format!(
                "WAYMARK_ON_MALFORMED must be either 'fail' or 'skip', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub input: InputSource,
    pub on_malformed: MalformedPolicy,
    pub issue_id_map: Option<PathBuf>,
}

impl ResolverConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let input = match lookup("WAYMARK_INPUT")
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
        {
            None => InputSource::Stdin,
            Some(value) if value == "-" => InputSource::Stdin,
            Some(value) => InputSource::File(PathBuf::from(value)),
        };

        let on_malformed = lookup("WAYMARK_ON_MALFORMED")
            .map(|value| value.trim().to_ascii_lowercase())
            .filter(|value| !value.is_empty())
            .map(|value| MalformedPolicy::from_str(value.as_str()))
            .transpose()?
            .unwrap_or(MalformedPolicy::Fail);

        let issue_id_map = lookup("WAYMARK_ISSUE_IDS")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            input,
            on_malformed,
            issue_id_map,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::{InputSource, MalformedPolicy, ResolverConfig};

    fn config_from(values: &[(&str, &str)]) -> Result<ResolverConfig, waymark_core::AppError> {
        let values: HashMap<String, String> = values
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        ResolverConfig::from_lookup(|name| values.get(name).cloned())
    }

    #[test]
    fn defaults_to_stdin_and_fail() {
        let config = config_from(&[]);
        assert_eq!(
            config.ok(),
            Some(ResolverConfig {
                input: InputSource::Stdin,
                on_malformed: MalformedPolicy::Fail,
                issue_id_map: None,
            })
        );
    }

    #[test]
    fn reads_file_input_and_skip_policy() {
        let config = config_from(&[
            ("WAYMARK_INPUT", "activity.jsonl"),
            ("WAYMARK_ON_MALFORMED", "SKIP"),
            ("WAYMARK_ISSUE_IDS", "issues.json"),
        ]);
        assert_eq!(
            config.ok(),
            Some(ResolverConfig {
                input: InputSource::File(PathBuf::from("activity.jsonl")),
                on_malformed: MalformedPolicy::Skip,
                issue_id_map: Some(PathBuf::from("issues.json")),
            })
        );
    }

    #[test]
    fn dash_input_means_stdin() {
        let config = config_from(&[("WAYMARK_INPUT", "-")]);
        assert_eq!(config.ok().map(|config| config.input), Some(InputSource::Stdin));
    }

    #[test]
    fn rejects_unknown_policy() {
        let config = config_from(&[("WAYMARK_ON_MALFORMED", "ignore")]);
        assert!(config.is_err());
    }
}
