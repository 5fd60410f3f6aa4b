//! Connection resolution: IR edges → `<Connection>` elements.
//!
//! The origin anchor is chosen from the *source* tool's kind; the
//! destination anchor is always `Input`. Edges with an unknown endpoint are
//! dropped and reported, never fatal.

use crate::diagnostics::{Diagnostics, MissingEndpoint, Warning};
use crate::ir::types::{Connection, INPUT_ANCHOR};
use crate::lower::ToolPlan;

use super::writer::XmlWriter;

/// A connection whose endpoints both resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConnection {
    pub origin_tool_id: usize,
    pub origin_anchor: &'static str,
    pub destination_tool_id: usize,
    pub destination_anchor: &'static str,
}

/// Resolve every connection in input order. Unresolvable ones are skipped
/// with a `DanglingConnection` warning.
pub fn resolve_connections(
    connections: &[Connection],
    plan: &ToolPlan,
    diagnostics: &mut Diagnostics,
) -> Vec<ResolvedConnection> {
    let mut resolved = Vec::with_capacity(connections.len());

    for (index, conn) in connections.iter().enumerate() {
        let origin = plan.lookup(&conn.from);
        let destination = plan.lookup(&conn.to);

        match (origin, destination) {
            (Some(origin), Some(destination)) => resolved.push(ResolvedConnection {
                origin_tool_id: origin.tool_id,
                origin_anchor: origin.output_anchor(),
                destination_tool_id: destination.tool_id,
                destination_anchor: INPUT_ANCHOR,
            }),
            _ => {
                if let Some(missing) =
                    MissingEndpoint::from_lookups(origin.is_some(), destination.is_some())
                {
                    diagnostics.warn(Warning::DanglingConnection {
                        index,
                        from: conn.from.clone(),
                        to: conn.to.clone(),
                        missing,
                    });
                }
            }
        }
    }

    resolved
}

pub fn emit_connection(conn: &ResolvedConnection, w: &mut XmlWriter) {
    let origin_id = conn.origin_tool_id.to_string();
    let destination_id = conn.destination_tool_id.to_string();

    w.open("Connection", &[]);
    w.empty(
        "Origin",
        &[
            ("ToolID", origin_id.as_str()),
            ("Connection", conn.origin_anchor),
        ],
    );
    w.empty(
        "Destination",
        &[
            ("ToolID", destination_id.as_str()),
            ("Connection", conn.destination_anchor),
        ],
    );
    w.close("Connection");
}
