//! Environment-variable expansion over settings documents.
//!
//! Strings may reference process environment variables as `${NAME}` or
//! `$NAME`. References to unset variables are left as literal text so they
//! stay visible in the deployed file instead of failing the deployment.

use serde_json::{Map, Value};

/// Expand environment-variable references in every string of `value`.
///
/// Returns a new tree structurally isomorphic to the input; sequences and
/// mappings are expanded element-wise with key order preserved, non-string
/// scalars pass through unchanged.
pub fn expand_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(expand_str(s)),
        Value::Array(items) => Value::Array(items.iter().map(expand_value).collect()),
        Value::Object(map) => Value::Object(expand_map(map)),
        other => other.clone(),
    }
}

/// Expand environment-variable references in every string of `map`.
pub fn expand_map(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.clone(), expand_value(value)))
        .collect()
}

/// Expand `${NAME}` and `$NAME` references in a single string.
///
/// The braced form is parsed before the bare form, so `${FOO}BAR` is never
/// corrupted by a bare-form partial match, and substituted text is not
/// re-scanned.
fn expand_str(input: &str) -> String {
    shellexpand::env_with_context_no_errors(input, lookup).into_owned()
}

/// Resolve a variable reference, or `None` to leave the token as-is.
///
/// Only names matching `[A-Z_][A-Z0-9_]*` are eligible for substitution.
fn lookup(name: &str) -> Option<String> {
    if !is_substitutable_name(name) {
        return None;
    }
    std::env::var(name).ok()
}

fn is_substitutable_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_uppercase() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard, OnceLock};

    use serde_json::json;

    use super::*;

    /// Serializes tests that touch the process environment.
    fn env_guard() -> MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .expect("acquire env lock")
    }

    fn set_env(key: &str, value: &str) {
        // Guarded by env_guard; no other thread reads the environment here.
        unsafe { std::env::set_var(key, value) };
    }

    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    #[test]
    fn string_without_tokens_is_untouched() {
        let _guard = env_guard();
        assert_eq!(expand_str("plain text, no references"), "plain text, no references");
    }

    #[test]
    fn unset_braced_reference_is_left_as_literal() {
        let _guard = env_guard();
        remove_env("VIBE_TEST_UNSET");
        assert_eq!(expand_str("${VIBE_TEST_UNSET}"), "${VIBE_TEST_UNSET}");
    }

    #[test]
    fn set_braced_reference_is_substituted() {
        let _guard = env_guard();
        set_env("VIBE_TEST_FOO", "bar");
        assert_eq!(expand_str("${VIBE_TEST_FOO}"), "bar");
        remove_env("VIBE_TEST_FOO");
    }

    #[test]
    fn bare_reference_is_substituted() {
        let _guard = env_guard();
        set_env("VIBE_TEST_BARE", "value");
        assert_eq!(expand_str("prefix $VIBE_TEST_BARE suffix"), "prefix value suffix");
        remove_env("VIBE_TEST_BARE");
    }

    #[test]
    fn braced_reference_with_trailing_text_keeps_boundary() {
        let _guard = env_guard();
        set_env("VIBE_TEST_HOST", "db01");
        assert_eq!(expand_str("${VIBE_TEST_HOST}BAR"), "db01BAR");
        remove_env("VIBE_TEST_HOST");
    }

    #[test]
    fn lowercase_names_are_not_substituted() {
        let _guard = env_guard();
        assert_eq!(expand_str("$path and ${home}"), "$path and ${home}");
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        let _guard = env_guard();
        set_env("VIBE_TEST_OUTER", "$VIBE_TEST_INNER");
        set_env("VIBE_TEST_INNER", "oops");
        assert_eq!(expand_str("${VIBE_TEST_OUTER}"), "$VIBE_TEST_INNER");
        remove_env("VIBE_TEST_OUTER");
        remove_env("VIBE_TEST_INNER");
    }

    #[test]
    fn non_string_scalars_pass_through() {
        let _guard = env_guard();
        assert_eq!(expand_value(&json!(42)), json!(42));
        assert_eq!(expand_value(&json!(true)), json!(true));
        assert_eq!(expand_value(&json!(null)), json!(null));
    }

    #[test]
    fn nested_structure_expands_element_wise() {
        let _guard = env_guard();
        set_env("VIBE_TEST_TOKEN", "abc123");
        let input = json!({
            "mcpServers": {
                "demo": {
                    "command": "run",
                    "args": ["-x", "${VIBE_TEST_TOKEN}"],
                    "env": {"KEY": "${VIBE_TEST_TOKEN}"}
                }
            }
        });
        let expanded = expand_value(&input);
        assert_eq!(expanded["mcpServers"]["demo"]["args"][1], json!("abc123"));
        assert_eq!(expanded["mcpServers"]["demo"]["env"]["KEY"], json!("abc123"));
        // The input tree is untouched.
        assert_eq!(input["mcpServers"]["demo"]["env"]["KEY"], json!("${VIBE_TEST_TOKEN}"));
        remove_env("VIBE_TEST_TOKEN");
    }

    #[test]
    fn map_key_order_is_preserved() {
        let _guard = env_guard();
        let mut map = Map::new();
        map.insert("zeta".to_string(), json!("1"));
        map.insert("alpha".to_string(), json!("2"));
        let expanded = expand_map(&map);
        let keys: Vec<_> = expanded.keys().collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn expansion_is_idempotent_when_nothing_resolves() {
        let _guard = env_guard();
        let input = json!({"env": {"KEY": "${VIBE_TEST_MISSING}"}});
        let once = expand_value(&input);
        let twice = expand_value(&once);
        assert_eq!(once, twice);
    }
}
