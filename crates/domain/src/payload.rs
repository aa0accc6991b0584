use serde::{Deserialize, Deserializer, Serialize};

/// Payload recorded for database transfer activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseTransferPayload {
    database_name: String,
    #[serde(deserialize_with = "deserialize_database_id")]
    database_id: String,
}

impl DatabaseTransferPayload {
    /// Creates a database transfer payload.
    #[must_use]
    pub fn new(database_name: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            database_id: database_id.into(),
        }
    }

    /// Returns the transferred database's display name.
    #[must_use]
    pub fn database_name(&self) -> &str {
        self.database_name.as_str()
    }

    /// Returns the transferred database's identifier.
    #[must_use]
    pub fn database_id(&self) -> &str {
        self.database_id.as_str()
    }
}

/// Payload shared by issue creation and issue/pipeline status updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRelatedPayload {
    issue_name: String,
}

impl IssueRelatedPayload {
    /// Creates an issue payload.
    #[must_use]
    pub fn new(issue_name: impl Into<String>) -> Self {
        Self {
            issue_name: issue_name.into(),
        }
    }

    /// Returns the issue's display name.
    #[must_use]
    pub fn issue_name(&self) -> &str {
        self.issue_name.as_str()
    }
}

// Producers write the database id either as a JSON string or a JSON integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum DatabaseIdValue {
    Text(String),
    Integer(i64),
}

fn deserialize_database_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match DatabaseIdValue::deserialize(deserializer)? {
        DatabaseIdValue::Text(value) => value,
        DatabaseIdValue::Integer(value) => value.to_string(),
    })
}
