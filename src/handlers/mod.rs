//! MCP tool handlers for the taskboard server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod add;
pub mod complete;
pub mod list;
pub mod stats;

use crate::error::TaskError;
use mcp_attr::{Result as McpResult, bail, bail_public};
use tracing::warn;

/// Convert a repository error into a tool error
///
/// Input problems are reported to the client; storage failures stay internal.
pub(crate) fn reject<T>(err: TaskError) -> McpResult<T> {
    warn!(error = %err, "request rejected");
    if err.is_client_error() {
        bail_public!(_, "{}", err);
    }
    bail!("Failed to save: {}", err);
}
