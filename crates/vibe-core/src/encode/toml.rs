//! TOML encoder (codex).
//!
//! Codex reads only the server map, as a top-level `mcp_servers` table with
//! one `[mcp_servers.<name>]` subtable per server. Built with `toml_edit` so
//! the field shapes are controlled exactly: `command` as a string, `args` as
//! an array of strings, `env` as an inline table.

use serde_json::{Map, Value};
use toml_edit::{Array, DocumentMut, InlineTable, Item, Table};

use super::ConfigEncoder;
use crate::error::{Error, Result};
use crate::settings::MCP_SERVERS_KEY;
use crate::target::ConfigFormat;

/// Renders the server map as Codex's `mcp_servers` TOML table.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlEncoder;

impl ConfigEncoder for TomlEncoder {
    fn encode(&self, document: &Map<String, Value>) -> Result<String> {
        let mut servers_tbl = Table::new();
        servers_tbl.set_implicit(true);

        if let Some(servers) = document.get(MCP_SERVERS_KEY) {
            let Some(servers) = servers.as_object() else {
                return Err(Error::encode(MCP_SERVERS_KEY, "must be an object"));
            };
            for (name, entry) in servers {
                let field = format!("mcp_servers.{name}");
                let Some(entry) = entry.as_object() else {
                    return Err(Error::encode(field, "server entry must be an object"));
                };
                servers_tbl.insert(name, Item::Table(server_table(&field, entry)?));
            }
        }

        let mut doc = DocumentMut::new();
        doc.insert("mcp_servers", Item::Table(servers_tbl));
        Ok(doc.to_string())
    }

    fn format(&self) -> ConfigFormat {
        ConfigFormat::Toml
    }
}

/// Build one server subtable. Fields absent on the entry are omitted
/// entirely, never emitted as empty or null.
fn server_table(field: &str, entry: &Map<String, Value>) -> Result<Table> {
    let mut t = Table::new();

    if let Some(command) = entry.get("command") {
        let command = command
            .as_str()
            .ok_or_else(|| Error::encode(format!("{field}.command"), "must be a string"))?;
        t["command"] = toml_edit::value(command);
    }

    if let Some(args) = entry.get("args") {
        let args = args
            .as_array()
            .ok_or_else(|| Error::encode(format!("{field}.args"), "must be an array"))?;
        let mut arr = Array::default();
        for (idx, arg) in args.iter().enumerate() {
            let arg = arg.as_str().ok_or_else(|| {
                Error::encode(format!("{field}.args[{idx}]"), "must be a string")
            })?;
            arr.push(arg);
        }
        t["args"] = toml_edit::value(arr);
    }

    if let Some(env) = entry.get("env") {
        let env = env
            .as_object()
            .ok_or_else(|| Error::encode(format!("{field}.env"), "must be an object"))?;
        let mut inline = InlineTable::new();
        for (key, value) in env {
            let value = value.as_str().ok_or_else(|| {
                Error::encode(format!("{field}.env.{key}"), "must be a string")
            })?;
            inline.insert(key, value.into());
        }
        t["env"] = toml_edit::value(inline);
    }

    // Extra entry fields are preserved through a generic conversion.
    for (key, value) in entry {
        if matches!(key.as_str(), "command" | "args" | "env") {
            continue;
        }
        t.insert(key, json_value_to_toml_item(&format!("{field}.{key}"), value)?);
    }

    Ok(t)
}

/// Generic JSON value to TOML item conversion for preserved extra fields.
///
/// Supports strings, integers, floats, booleans, arrays of scalars, and
/// shallow string-valued objects. Anything TOML cannot represent is an
/// encode error.
fn json_value_to_toml_item(field: &str, value: &Value) -> Result<Item> {
    match value {
        Value::String(s) => Ok(toml_edit::value(s.as_str())),

        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(toml_edit::value(i))
            } else if let Some(f) = n.as_f64() {
                Ok(toml_edit::value(f))
            } else {
                Err(Error::encode(field, format!("unrepresentable number {n}")))
            }
        }

        Value::Bool(b) => Ok(toml_edit::value(*b)),

        Value::Array(items) => {
            let mut arr = Array::default();
            for (idx, item) in items.iter().enumerate() {
                match item {
                    Value::String(s) => arr.push(s.as_str()),
                    Value::Number(n) if n.is_i64() => arr.push(n.as_i64().unwrap_or_default()),
                    Value::Number(n) => arr.push(n.as_f64().unwrap_or_default()),
                    Value::Bool(b) => arr.push(*b),
                    other => {
                        return Err(Error::encode(
                            format!("{field}[{idx}]"),
                            format!("unsupported array element {other}"),
                        ));
                    }
                }
            }
            Ok(toml_edit::value(arr))
        }

        Value::Object(obj) => {
            let mut inline = InlineTable::new();
            for (key, value) in obj {
                let Some(s) = value.as_str() else {
                    return Err(Error::encode(
                        format!("{field}.{key}"),
                        "nested objects must have string values",
                    ));
                };
                inline.insert(key, s.into());
            }
            Ok(toml_edit::value(inline))
        }

        Value::Null => Err(Error::encode(field, "TOML cannot represent null")),
    }
}
