//! Dotted-path flattening of nested JSON objects.
//!
//! Objects are recursed into; every other value (scalars, arrays, `null`) is a
//! leaf bound to the dotted path that reached it. An empty nested object
//! contributes no keys.

use serde_json::{Map, Value};

use crate::errors::CoreError;

/// Separator between path segments.
pub const KEY_SEPARATOR: char = '.';

/// A single-level record keyed by dotted path, in first-seen key order.
pub type FlatRecord = Map<String, Value>;

/// What [`merge_flat`] does when a key is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Fail with [`CoreError::KeyCollision`].
    Reject,
    /// Keep the value from the earlier section.
    KeepFirst,
    /// Overwrite with the value from the later section.
    KeepLast,
}

/// Flatten `map` with every key prefixed by `prefix`.
///
/// An empty prefix leaves top-level keys bare. Within one section a later
/// duplicate path overwrites the earlier value but keeps its position.
#[must_use]
pub fn flatten_section(prefix: &str, map: &Map<String, Value>) -> FlatRecord {
    let mut out = FlatRecord::new();
    flatten_into(&mut out, prefix, map);
    out
}

fn flatten_into(out: &mut FlatRecord, prefix: &str, map: &Map<String, Value>) {
    for (key, value) in map {
        let path = join_key(prefix, key);
        match value {
            Value::Object(nested) => flatten_into(out, &path, nested),
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}{KEY_SEPARATOR}{key}")
    }
}

/// Merge flattened sections in order into one record.
///
/// # Errors
///
/// Returns [`CoreError::KeyCollision`] if `policy` is [`Collision::Reject`]
/// and a key appears in more than one section.
pub fn merge_flat<I>(sections: I, policy: Collision) -> Result<FlatRecord, CoreError>
where
    I: IntoIterator<Item = FlatRecord>,
{
    let mut merged = FlatRecord::new();
    for section in sections {
        for (key, value) in section {
            if merged.contains_key(&key) {
                match policy {
                    Collision::Reject => return Err(CoreError::KeyCollision { key }),
                    Collision::KeepFirst => continue,
                    Collision::KeepLast => {}
                }
            }
            merged.insert(key, value);
        }
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn one_level_map_is_prefixed_only() {
        let input = object(json!({"nick": "Alice", "level": 42, "pro": true}));
        let flat = flatten_section("user", &input);

        assert_eq!(
            Value::Object(flat),
            json!({"user.nick": "Alice", "user.level": 42, "user.pro": true})
        );
    }

    #[test]
    fn empty_prefix_keeps_keys_bare() {
        let input = object(json!({"a": 1, "b": {"c": 2}}));
        let flat = flatten_section("", &input);
        assert_eq!(Value::Object(flat), json!({"a": 1, "b.c": 2}));
    }

    #[test]
    fn nested_objects_produce_dotted_paths() {
        let input = object(json!({
            "verified": {"distance": 1200, "duels": {"wins": 3}},
            "gamesPlayed": 10
        }));
        let flat = flatten_section("stats", &input);

        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["stats.verified.distance", "stats.verified.duels.wins", "stats.gamesPlayed"]
        );
        assert_eq!(flat["stats.verified.duels.wins"], json!(3));
    }

    #[test]
    fn arrays_and_null_are_leaves() {
        let input = object(json!({"tags": ["a", {"b": 1}], "club": null}));
        let flat = flatten_section("user", &input);

        assert_eq!(flat["user.tags"], json!(["a", {"b": 1}]));
        assert_eq!(flat["user.club"], Value::Null);
        assert_eq!(flat.len(), 2);
    }

    #[test]
    fn empty_nested_object_emits_nothing() {
        let input = object(json!({"avatar": {}, "nick": "Bob"}));
        let flat = flatten_section("user", &input);
        assert_eq!(Value::Object(flat), json!({"user.nick": "Bob"}));
    }

    #[test]
    fn later_duplicate_path_overwrites_within_section() {
        let input = object(json!({"a": {"b": 1}, "a.b": 2}));
        let flat = flatten_section("x", &input);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat["x.a.b"], json!(2));
    }

    #[test]
    fn merge_disjoint_sections_keeps_order() {
        let user = flatten_section("user", &object(json!({"nick": "A"})));
        let stats = flatten_section("stats", &object(json!({"games": 1})));

        let merged = merge_flat([user, stats], Collision::Reject).unwrap();
        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["user.nick", "stats.games"]);
    }

    #[test]
    fn merge_reject_reports_colliding_key() {
        let first = flatten_section("s", &object(json!({"k": 1})));
        let second = flatten_section("s", &object(json!({"k": 2})));

        let err = merge_flat([first, second], Collision::Reject).unwrap_err();
        assert!(matches!(err, CoreError::KeyCollision { ref key } if key == "s.k"));
    }

    #[test]
    fn merge_keep_first_and_keep_last() {
        let first = || flatten_section("s", &object(json!({"k": 1})));
        let second = || flatten_section("s", &object(json!({"k": 2})));

        let kept_first = merge_flat([first(), second()], Collision::KeepFirst).unwrap();
        assert_eq!(kept_first["s.k"], json!(1));

        let kept_last = merge_flat([first(), second()], Collision::KeepLast).unwrap();
        assert_eq!(kept_last["s.k"], json!(2));
    }
}
