//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod activity;
mod link;
mod payload;

pub use activity::{ActivityAction, ActivityEntry, LinkFamily};
pub use link::Link;
pub use payload::{DatabaseTransferPayload, IssueRelatedPayload};
