//! Per-target filtering of the canonical server map.

use serde_json::{Map, Value};

use crate::target::TargetAdapter;

/// Remove servers the target already provides natively.
///
/// Returns a new map plus the number of excluded entries; the input is not
/// mutated. Targets with no built-in servers get the map back unchanged
/// (count 0), making the filter the identity for them.
pub fn filter_servers(
    servers: &Map<String, Value>,
    target: &dyn TargetAdapter,
) -> (Map<String, Value>, usize) {
    let builtin = target.capabilities().builtin_servers;
    if builtin.is_empty() {
        return (servers.clone(), 0);
    }

    let mut kept = Map::new();
    let mut excluded = 0;
    for (name, entry) in servers {
        if builtin.contains(&name.as_str()) {
            tracing::debug!(target = target.id(), server = %name, "excluding built-in server");
            excluded += 1;
        } else {
            kept.insert(name.clone(), entry.clone());
        }
    }
    (kept, excluded)
}
