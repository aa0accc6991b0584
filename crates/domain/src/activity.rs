use std::fmt::{self, Formatter};
use std::str::FromStr;

use serde::de::{self, DeserializeOwned, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use waymark_core::{AppError, AppResult};

/// Action kinds recorded in the activity log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActivityAction {
    /// No action kind was recorded.
    #[default]
    Unspecified,
    /// A workspace member was created.
    MemberCreate,
    /// A workspace member's role changed.
    MemberRoleUpdate,
    /// A workspace member was activated.
    MemberActivate,
    /// A workspace member was deactivated.
    MemberDeactivate,
    /// An issue was created.
    IssueCreate,
    /// A comment was added to an issue.
    IssueCommentCreate,
    /// An issue field changed.
    IssueFieldUpdate,
    /// An issue changed status.
    IssueStatusUpdate,
    /// Approvers were notified about an issue.
    IssueApprovalNotify,
    /// A pipeline stage changed status.
    PipelineStageStatusUpdate,
    /// A pipeline task changed status.
    PipelineTaskStatusUpdate,
    /// A pipeline task file was committed to a repository.
    PipelineTaskFileCommit,
    /// A pipeline task statement changed.
    PipelineTaskStatementUpdate,
    /// A pipeline task's earliest allowed run time changed.
    PipelineTaskEarliestAllowedTimeUpdate,
    /// A pipeline task run changed status.
    PipelineTaskRunStatusUpdate,
    /// A pipeline task took a prior backup.
    PipelineTaskPriorBackup,
    /// A repository push reached a project.
    ProjectRepositoryPush,
    /// A project member was added.
    ProjectMemberCreate,
    /// A project member was removed.
    ProjectMemberDelete,
    /// A database moved between projects.
    ProjectDatabaseTransfer,
    /// A query ran in the SQL editor.
    DatabaseSqlEditorQuery,
    /// Query results were exported.
    DatabaseSqlExport,
    /// The producer sent an action kind this build does not know.
    Unrecognized,
}

/// Link shape an action kind maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkFamily {
    /// Repository pushes. Linking is deferred, so no link is produced.
    RepositoryPush,
    /// Database transfers link to the transferred database.
    DatabaseTransfer,
    /// Issue and pipeline updates link to the owning issue.
    Issue,
    /// No link is produced.
    None,
}

impl ActivityAction {
    /// Returns the stable transport name for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "ACTION_UNSPECIFIED",
            Self::MemberCreate => "ACTION_MEMBER_CREATE",
            Self::MemberRoleUpdate => "ACTION_MEMBER_ROLE_UPDATE",
            Self::MemberActivate => "ACTION_MEMBER_ACTIVATE",
            Self::MemberDeactivate => "ACTION_MEMBER_DEACTIVE",
            Self::IssueCreate => "ACTION_ISSUE_CREATE",
            Self::IssueCommentCreate => "ACTION_ISSUE_COMMENT_CREATE",
            Self::IssueFieldUpdate => "ACTION_ISSUE_FIELD_UPDATE",
            Self::IssueStatusUpdate => "ACTION_ISSUE_STATUS_UPDATE",
            Self::IssueApprovalNotify => "ACTION_ISSUE_APPROVAL_NOTIFY",
            Self::PipelineStageStatusUpdate => "ACTION_PIPELINE_STAGE_STATUS_UPDATE",
            Self::PipelineTaskStatusUpdate => "ACTION_PIPELINE_TASK_STATUS_UPDATE",
            Self::PipelineTaskFileCommit => "ACTION_PIPELINE_TASK_FILE_COMMIT",
            Self::PipelineTaskStatementUpdate => "ACTION_PIPELINE_TASK_STATEMENT_UPDATE",
            Self::PipelineTaskEarliestAllowedTimeUpdate => {
                "ACTION_PIPELINE_TASK_EARLIEST_ALLOWED_TIME_UPDATE"
            }
            Self::PipelineTaskRunStatusUpdate => "ACTION_PIPELINE_TASK_RUN_STATUS_UPDATE",
            Self::PipelineTaskPriorBackup => "ACTION_PIPELINE_TASK_PRIOR_BACKUP",
            Self::ProjectRepositoryPush => "ACTION_PROJECT_REPOSITORY_PUSH",
            Self::ProjectMemberCreate => "ACTION_PROJECT_MEMBER_CREATE",
            Self::ProjectMemberDelete => "ACTION_PROJECT_MEMBER_DELETE",
            Self::ProjectDatabaseTransfer => "ACTION_PROJECT_DATABASE_TRANSFER",
            Self::DatabaseSqlEditorQuery => "ACTION_DATABASE_SQL_EDITOR_QUERY",
            Self::DatabaseSqlExport => "ACTION_DATABASE_SQL_EXPORT",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Returns the stable numeric code for this action.
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::Unspecified => 0,
            Self::MemberCreate => 1,
            Self::MemberRoleUpdate => 2,
            Self::MemberActivate => 3,
            Self::MemberDeactivate => 4,
            Self::IssueCreate => 21,
            Self::IssueCommentCreate => 22,
            Self::IssueFieldUpdate => 23,
            Self::IssueStatusUpdate => 24,
            Self::IssueApprovalNotify => 25,
            Self::PipelineStageStatusUpdate => 31,
            Self::PipelineTaskStatusUpdate => 32,
            Self::PipelineTaskFileCommit => 33,
            Self::PipelineTaskStatementUpdate => 34,
            Self::PipelineTaskEarliestAllowedTimeUpdate => 35,
            Self::PipelineTaskRunStatusUpdate => 36,
            Self::PipelineTaskPriorBackup => 37,
            Self::ProjectRepositoryPush => 41,
            Self::ProjectMemberCreate => 42,
            Self::ProjectMemberDelete => 43,
            Self::ProjectDatabaseTransfer => 45,
            Self::DatabaseSqlEditorQuery => 51,
            Self::DatabaseSqlExport => 52,
            Self::Unrecognized => -1,
        }
    }

    /// Returns all known action kinds, excluding [`ActivityAction::Unrecognized`].
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[ActivityAction] = &[
            ActivityAction::Unspecified,
            ActivityAction::MemberCreate,
            ActivityAction::MemberRoleUpdate,
            ActivityAction::MemberActivate,
            ActivityAction::MemberDeactivate,
            ActivityAction::IssueCreate,
            ActivityAction::IssueCommentCreate,
            ActivityAction::IssueFieldUpdate,
            ActivityAction::IssueStatusUpdate,
            ActivityAction::IssueApprovalNotify,
            ActivityAction::PipelineStageStatusUpdate,
            ActivityAction::PipelineTaskStatusUpdate,
            ActivityAction::PipelineTaskFileCommit,
            ActivityAction::PipelineTaskStatementUpdate,
            ActivityAction::PipelineTaskEarliestAllowedTimeUpdate,
            ActivityAction::PipelineTaskRunStatusUpdate,
            ActivityAction::PipelineTaskPriorBackup,
            ActivityAction::ProjectRepositoryPush,
            ActivityAction::ProjectMemberCreate,
            ActivityAction::ProjectMemberDelete,
            ActivityAction::ProjectDatabaseTransfer,
            ActivityAction::DatabaseSqlEditorQuery,
            ActivityAction::DatabaseSqlExport,
        ];

        ALL
    }

    /// Maps a numeric code, falling back to [`ActivityAction::Unrecognized`].
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|action| i64::from(action.code()) == code)
            .unwrap_or(Self::Unrecognized)
    }

    /// Parses a transport value into an action.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }

    /// Classifies the link shape this action produces.
    #[must_use]
    pub fn link_family(&self) -> LinkFamily {
        match self {
            Self::ProjectRepositoryPush => LinkFamily::RepositoryPush,
            Self::ProjectDatabaseTransfer => LinkFamily::DatabaseTransfer,
            Self::PipelineTaskStatusUpdate
            | Self::PipelineStageStatusUpdate
            | Self::PipelineTaskRunStatusUpdate
            | Self::PipelineTaskPriorBackup
            | Self::IssueStatusUpdate
            | Self::IssueCreate => LinkFamily::Issue,
            _ => LinkFamily::None,
        }
    }
}

impl FromStr for ActivityAction {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|action| action.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown activity action '{value}'")))
    }
}

impl Serialize for ActivityAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

struct ActivityActionVisitor;

impl Visitor<'_> for ActivityActionVisitor {
    type Value = ActivityAction;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("an activity action name or numeric code")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(ActivityAction::from_str(value).unwrap_or(ActivityAction::Unrecognized))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(ActivityAction::from_code(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(value)
            .map(ActivityAction::from_code)
            .unwrap_or(ActivityAction::Unrecognized))
    }
}

impl<'de> Deserialize<'de> for ActivityAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ActivityActionVisitor)
    }
}

/// One recorded activity log event.
///
/// Omitted fields take their zero values, the way proto3 JSON writers drop them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityEntry {
    action: ActivityAction,
    payload: String,
    resource: String,
}

impl Default for ActivityEntry {
    fn default() -> Self {
        Self::new(ActivityAction::Unspecified, "", "")
    }
}

impl ActivityEntry {
    /// Creates an activity entry from its recorded parts.
    #[must_use]
    pub fn new(
        action: ActivityAction,
        payload: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            action,
            payload: payload.into(),
            resource: resource.into(),
        }
    }

    /// Returns the recorded action kind.
    #[must_use]
    pub fn action(&self) -> ActivityAction {
        self.action
    }

    /// Returns the raw serialized payload.
    #[must_use]
    pub fn payload(&self) -> &str {
        self.payload.as_str()
    }

    /// Returns the subject resource name.
    #[must_use]
    pub fn resource(&self) -> &str {
        self.resource.as_str()
    }

    /// Decodes the payload into the shape expected for this entry's action.
    pub fn decode_payload<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_str(self.payload.as_str()).map_err(|source| AppError::MalformedPayload {
            action: self.action.as_str(),
            source,
        })
    }
}
