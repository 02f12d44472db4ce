//! Configuration tree
//!
//! Hierarchical key-path value store used for job definitions, core defaults
//! and plugin descriptors. Paths are dot-delimited and case-sensitive; a
//! segment may carry `[index]` suffixes to address sequence elements, e.g.
//! `job.content[0].reader.name`.
//!
//! An explicit JSON `null` is treated the same as an absent key by lookups
//! and by [`Configuration::merge`].

use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::{INDEX_CLOSE, INDEX_OPEN, MAX_INDEX_GROWTH, PATH_SEPARATOR};
use crate::error::{Error, Result};

/// One step of a parsed configuration path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

fn parse_path(path: &str) -> Result<Vec<Segment<'_>>> {
    if path.trim().is_empty() {
        return Err(Error::invalid_argument("configuration path cannot be empty"));
    }

    let mut segments = Vec::new();
    for part in path.split(PATH_SEPARATOR) {
        let key_end = part.find(INDEX_OPEN).unwrap_or(part.len());
        let key = &part[..key_end];
        if key.is_empty() {
            return Err(Error::invalid_argument(format!(
                "configuration path '{path}' contains an empty segment"
            )));
        }
        segments.push(Segment::Key(key));

        let mut rest = &part[key_end..];
        while !rest.is_empty() {
            let Some(inner) = rest.strip_prefix(INDEX_OPEN) else {
                return Err(Error::invalid_argument(format!(
                    "configuration path '{path}' has trailing characters after an index"
                )));
            };
            let close = inner.find(INDEX_CLOSE).ok_or_else(|| {
                Error::invalid_argument(format!("configuration path '{path}' has an unclosed index"))
            })?;
            let index = inner[..close].parse::<usize>().map_err(|_| {
                Error::invalid_argument(format!(
                    "configuration path '{path}' has a non-numeric index '{}'",
                    &inner[..close]
                ))
            })?;
            segments.push(Segment::Index(index));
            rest = &inner[close + 1..];
        }
    }
    Ok(segments)
}

/// Rejects writes that would pad a sequence past [`MAX_INDEX_GROWTH`]
fn check_growth(root: &Value, segments: &[Segment<'_>], path: &str) -> Result<()> {
    let mut current = Some(root);
    for segment in segments {
        current = match *segment {
            Segment::Key(key) => current.and_then(|node| node.as_object()?.get(key)),
            Segment::Index(index) => {
                let len = current.and_then(Value::as_array).map_or(0, Vec::len);
                if index.saturating_sub(len) > MAX_INDEX_GROWTH {
                    return Err(Error::invalid_argument(format!(
                        "configuration path '{path}' index {index} is too far past the end of a sequence of {len}"
                    )));
                }
                current.and_then(|node| node.as_array()?.get(index))
            }
        };
    }
    Ok(())
}

/// Returns the child for `segment`, turning `node` into the right kind of
/// container first. Sequences are padded with `null` up to the index.
fn child_mut<'a>(node: &'a mut Value, segment: &Segment<'_>) -> &'a mut Value {
    match segment {
        Segment::Key(key) => match node {
            Value::Object(map) => map.entry((*key).to_string()).or_insert(Value::Null),
            other => {
                *other = Value::Object(Map::new());
                child_mut(other, segment)
            }
        },
        Segment::Index(index) => match node {
            Value::Array(items) => {
                if items.len() <= *index {
                    items.resize(index + 1, Value::Null);
                }
                &mut items[*index]
            }
            other => {
                *other = Value::Array(Vec::new());
                child_mut(other, segment)
            }
        },
    }
}

fn merge_value(destination: &mut Value, overlay: &Value, overwrite: bool) {
    match (destination, overlay) {
        (Value::Object(dest), Value::Object(over)) => {
            for (key, value) in over {
                match dest.get_mut(key) {
                    Some(existing) => merge_value(existing, value, overwrite),
                    None => {
                        dest.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (Value::Array(dest), Value::Array(over)) => {
            for (index, value) in over.iter().enumerate() {
                match dest.get_mut(index) {
                    Some(existing) => merge_value(existing, value, overwrite),
                    None => dest.push(value.clone()),
                }
            }
        }
        (dest, over) => {
            if overwrite || dest.is_null() {
                *dest = over.clone();
            }
        }
    }
}

fn collect_keys(value: &Value, prefix: &str, keys: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}{PATH_SEPARATOR}{key}")
                };
                collect_keys(child, &path, keys);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                collect_keys(child, &format!("{prefix}[{index}]"), keys);
            }
        }
        Value::Null => {}
        _ => keys.push(prefix.to_string()),
    }
}

/// Hierarchical configuration tree backed by a JSON object
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Configuration {
    root: Value,
}

impl Configuration {
    /// Create an empty configuration tree
    pub fn new() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Wrap an existing JSON value; the root must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(_) => Ok(Self { root: value }),
            other => Err(Error::parse(format!(
                "configuration root must be a JSON object, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Parse a configuration tree from JSON text
    pub fn from_json(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source).map_err(|e| {
            Error::parse_with_source(format!("configuration is not well-formed JSON: {e}"), e)
        })?;
        Self::from_value(value)
    }

    /// Parse a configuration tree from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader).map_err(|e| {
            Error::parse_with_source(format!("configuration is not well-formed JSON: {e}"), e)
        })?;
        Self::from_value(value)
    }

    /// Read and parse a configuration file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io_with_source(format!("failed to read {}: {e}", path.display()), e)
        })?;
        Self::from_json(&content).map_err(|e| match e {
            Error::Parse { message, source } => Error::Parse {
                message: format!("{}: {message}", path.display()),
                source,
            },
            other => other,
        })
    }

    fn lookup(&self, path: &str) -> Result<Option<&Value>> {
        let mut current = &self.root;
        for segment in parse_path(path)? {
            let next = match (segment, current) {
                (Segment::Key(key), Value::Object(map)) => map.get(key),
                (Segment::Index(index), Value::Array(items)) => items.get(index),
                _ => None,
            };
            match next {
                Some(value) => current = value,
                None => return Ok(None),
            }
        }
        Ok((!current.is_null()).then_some(current))
    }

    /// Value at `path`
    pub fn get(&self, path: &str) -> Result<&Value> {
        self.lookup(path)?.ok_or_else(|| Error::missing_key(path))
    }

    /// Value at `path`, or `default` when the path is absent
    pub fn get_or(&self, path: &str, default: Value) -> Result<Value> {
        Ok(self.lookup(path)?.cloned().unwrap_or(default))
    }

    /// Whether `path` resolves to a non-null value
    pub fn contains(&self, path: &str) -> bool {
        matches!(self.lookup(path), Ok(Some(_)))
    }

    /// Scalar at `path` rendered as a string
    pub fn get_string(&self, path: &str) -> Result<String> {
        match self.get(path)? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(Error::invalid_argument(format!(
                "value at '{path}' is {}, not a scalar",
                kind_of(other)
            ))),
        }
    }

    /// Scalar at `path` rendered as a string, or `default` when absent
    pub fn get_string_or(&self, path: &str, default: &str) -> Result<String> {
        if self.contains(path) {
            self.get_string(path)
        } else {
            Ok(default.to_string())
        }
    }

    /// Boolean at `path`, or `default` when absent
    pub fn get_bool_or(&self, path: &str, default: bool) -> Result<bool> {
        match self.lookup(path)? {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::String(s)) => s.parse::<bool>().map_err(|_| {
                Error::invalid_argument(format!("value at '{path}' is not a boolean: {s}"))
            }),
            Some(other) => Err(Error::invalid_argument(format!(
                "value at '{path}' is {}, not a boolean",
                kind_of(other)
            ))),
        }
    }

    /// Integer at `path`, or `default` when absent
    pub fn get_i64_or(&self, path: &str, default: i64) -> Result<i64> {
        match self.lookup(path)? {
            None => Ok(default),
            Some(Value::Number(n)) => n.as_i64().ok_or_else(|| {
                Error::invalid_argument(format!("value at '{path}' is not an integer: {n}"))
            }),
            Some(Value::String(s)) => s.parse::<i64>().map_err(|_| {
                Error::invalid_argument(format!("value at '{path}' is not an integer: {s}"))
            }),
            Some(other) => Err(Error::invalid_argument(format!(
                "value at '{path}' is {}, not an integer",
                kind_of(other)
            ))),
        }
    }

    /// Sub-tree at `path` as its own configuration
    pub fn get_configuration(&self, path: &str) -> Result<Configuration> {
        let value = self.get(path)?;
        if !value.is_object() {
            return Err(Error::invalid_argument(format!(
                "value at '{path}' is {}, not an object",
                kind_of(value)
            )));
        }
        Ok(Self {
            root: value.clone(),
        })
    }

    /// Set `value` at `path`, creating intermediate nodes as needed.
    ///
    /// An intermediate scalar standing in the way is replaced by a container.
    /// Returns the previous value, if any.
    pub fn set(&mut self, path: &str, value: Value) -> Result<Option<Value>> {
        let segments = parse_path(path)?;
        check_growth(&self.root, &segments, path)?;
        let mut current = &mut self.root;
        for segment in &segments {
            current = child_mut(current, segment);
        }
        let previous = std::mem::replace(current, value);
        Ok((!previous.is_null()).then_some(previous))
    }

    /// Remove and return the value at `path`
    pub fn remove(&mut self, path: &str) -> Result<Option<Value>> {
        let segments = parse_path(path)?;
        let Some((last, parents)) = segments.split_last() else {
            return Ok(None);
        };

        let mut current = &mut self.root;
        for segment in parents {
            let next = match (segment, current) {
                (Segment::Key(key), Value::Object(map)) => map.get_mut(*key),
                (Segment::Index(index), Value::Array(items)) => items.get_mut(*index),
                _ => None,
            };
            match next {
                Some(value) => current = value,
                None => return Ok(None),
            }
        }

        let removed = match (last, current) {
            (Segment::Key(key), Value::Object(map)) => map.remove(*key),
            (Segment::Index(index), Value::Array(items)) if *index < items.len() => {
                Some(items.remove(*index))
            }
            _ => None,
        };
        Ok(removed.filter(|v| !v.is_null()))
    }

    /// Merge `overlay` into this tree leaf by leaf.
    ///
    /// When a leaf exists on both sides the destination value is kept unless
    /// `overwrite` is set. Objects merge recursively and sequences merge
    /// element-wise by index.
    pub fn merge(&mut self, overlay: &Configuration, overwrite: bool) -> &mut Self {
        merge_value(&mut self.root, &overlay.root, overwrite);
        self
    }

    /// Every leaf path in the tree
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(&self.root, "", &mut keys);
        keys
    }

    /// Underlying JSON structure, for bulk embedding into another tree
    pub fn as_raw(&self) -> &Value {
        &self.root
    }

    /// Consume the tree and return the underlying JSON structure
    pub fn into_raw(self) -> Value {
        self.root
    }

    /// Compact JSON rendering
    pub fn to_json(&self) -> String {
        self.root.to_string()
    }

    /// Indented JSON rendering
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "an object",
    }
}
