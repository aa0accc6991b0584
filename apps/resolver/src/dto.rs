use serde::Serialize;
use ts_rs::TS;
use waymark_domain::Link;

/// Link payload consumed by the activity table renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../../../bindings/activity-link-response.ts")]
pub struct ActivityLinkResponse {
    pub title: String,
    pub path: String,
    pub external: bool,
}

impl From<Link> for ActivityLinkResponse {
    fn from(value: Link) -> Self {
        Self {
            title: value.title().to_owned(),
            path: value.path().to_owned(),
            external: value.external(),
        }
    }
}

/// One output line: the input line number and its link, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../../../bindings/activity-link-line.ts")]
pub struct ActivityLinkLine {
    pub line: usize,
    pub link: Option<ActivityLinkResponse>,
}
