//! Structural schema for the canonical settings document.
//!
//! Validation is a data-shape check over the parsed JSON value: required
//! shapes are enforced, everything else passes through untouched. There is
//! no type hierarchy behind this; the schema is the walk below.

use serde_json::Value;

/// Top-level key holding the server map.
pub const MCP_SERVERS_KEY: &str = "mcpServers";

/// Check `value` against the settings document shape.
///
/// Returns one issue per offending path; an empty list means the document
/// conforms. Unknown keys are never reported.
pub fn validate_document(value: &Value) -> Vec<String> {
    let mut issues = Vec::new();

    let Some(root) = value.as_object() else {
        issues.push("document root must be a JSON object".to_string());
        return issues;
    };

    if let Some(servers) = root.get(MCP_SERVERS_KEY) {
        match servers.as_object() {
            Some(map) => {
                for (name, entry) in map {
                    validate_server_entry(name, entry, &mut issues);
                }
            }
            None => issues.push(format!("{MCP_SERVERS_KEY}: must be an object")),
        }
    }

    issues
}

/// Check one server entry: `command` a string, `args` an array of strings,
/// `env` an object of strings — each only when present.
fn validate_server_entry(name: &str, entry: &Value, issues: &mut Vec<String>) {
    let Some(obj) = entry.as_object() else {
        issues.push(format!("{MCP_SERVERS_KEY}.{name}: must be an object"));
        return;
    };

    if let Some(command) = obj.get("command")
        && !command.is_string()
    {
        issues.push(format!("{MCP_SERVERS_KEY}.{name}.command: must be a string"));
    }

    if let Some(args) = obj.get("args") {
        match args.as_array() {
            Some(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        issues.push(format!(
                            "{MCP_SERVERS_KEY}.{name}.args[{idx}]: must be a string"
                        ));
                    }
                }
            }
            None => issues.push(format!(
                "{MCP_SERVERS_KEY}.{name}.args: must be an array of strings"
            )),
        }
    }

    if let Some(env) = obj.get("env") {
        match env.as_object() {
            Some(vars) => {
                for (key, value) in vars {
                    if !value.is_string() {
                        issues.push(format!(
                            "{MCP_SERVERS_KEY}.{name}.env.{key}: must be a string"
                        ));
                    }
                }
            }
            None => issues.push(format!(
                "{MCP_SERVERS_KEY}.{name}.env: must be an object of strings"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_document_conforms() {
        assert!(validate_document(&json!({})).is_empty());
    }

    #[test]
    fn minimal_entries_conform() {
        let doc = json!({
            "mcpServers": {
                "bare": {},
                "full": {
                    "command": "npx",
                    "args": ["-y", "@acme/server"],
                    "env": {"TOKEN": "${TOKEN}"}
                }
            }
        });
        assert!(validate_document(&doc).is_empty());
    }

    #[test]
    fn non_object_root_is_rejected() {
        let issues = validate_document(&json!(["not", "an", "object"]));
        assert_eq!(issues, ["document root must be a JSON object"]);
    }

    #[test]
    fn non_object_server_map_is_rejected() {
        let issues = validate_document(&json!({"mcpServers": 3}));
        assert_eq!(issues, ["mcpServers: must be an object"]);
    }

    #[test]
    fn each_offending_path_is_reported() {
        let doc = json!({
            "mcpServers": {
                "demo": {
                    "command": ["not", "a", "string"],
                    "args": ["ok", 1],
                    "env": {"KEY": true}
                }
            }
        });
        let issues = validate_document(&doc);
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().any(|i| i.contains("demo.command")));
        assert!(issues.iter().any(|i| i.contains("demo.args[1]")));
        assert!(issues.iter().any(|i| i.contains("demo.env.KEY")));
    }

    #[test]
    fn extra_entry_fields_are_not_reported() {
        let doc = json!({
            "mcpServers": {
                "demo": {"command": "run", "timeout_ms": 5000, "disabled": false}
            }
        });
        assert!(validate_document(&doc).is_empty());
    }
}
