//! Application services and ports.

#![forbid(unsafe_code)]

mod activity_link_ports;
mod activity_link_service;

pub use activity_link_ports::IssueIdResolver;
pub use activity_link_service::ActivityLinkService;
