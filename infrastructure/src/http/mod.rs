//! HTTP adapters for the outbound ports
//!
//! Both gateways speak JSON over an authenticated POST and share the
//! failure mapping in `endpoint`.

mod completion;
mod deployment;
mod endpoint;

pub use completion::HttpCompletionGateway;
pub use deployment::HttpDeploymentGateway;
