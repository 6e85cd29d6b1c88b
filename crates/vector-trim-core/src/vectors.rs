//! Typed model of a test-vector file and the trimming operation.
//!
//! A vector file is a JSON array. Element 0 is metadata and is never touched.
//! Every later element is a vector set holding `testGroups`, and every group
//! holds `tests`. Trimming keeps one test per group.
//!
//! Objects are kept as ordered maps so that keys the trimmer does not care
//! about, and the order of all keys, survive the round-trip unchanged.

use serde_json::{Map, Value};
use tracing::trace;

use crate::error::ShapeError;
use crate::{Error, Result};

/// Position of the test kept in groups with more than `KEEP_INDEX` tests.
pub const KEEP_INDEX: usize = 10;

const TEST_GROUPS: &str = "testGroups";
const TESTS: &str = "tests";

/// A single test case. Its content is never inspected.
pub type Test = Value;

/// Index of the test to keep in a group of `len` tests, or `None` if the
/// group is empty.
pub fn keep_index(len: usize) -> Option<usize> {
    len.checked_sub(1).map(|last| last.min(KEEP_INDEX))
}

/// Counters describing what a trim did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimStats {
    pub sets: usize,
    pub groups: usize,
    pub tests_before: usize,
    pub tests_after: usize,
}

impl TrimStats {
    pub fn tests_removed(&self) -> usize {
        self.tests_before - self.tests_after
    }
}

/// A decoded vector file.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorFile {
    /// Element 0, if the array is not empty
    pub metadata: Option<Value>,
    pub sets: Vec<VectorSet>,
}

/// One vector set: an object with a `testGroups` array.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorSet {
    // `testGroups` stays in the map as a placeholder to hold its position.
    fields: Map<String, Value>,
    pub groups: Vec<TestGroup>,
}

/// One test group: an object with a `tests` array.
#[derive(Debug, Clone, PartialEq)]
pub struct TestGroup {
    // `tests` stays in the map as a placeholder to hold its position.
    fields: Map<String, Value>,
    pub tests: Vec<Test>,
}

impl VectorFile {
    /// Decode a vector file from raw JSON bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(data)?;
        Self::from_value(value)
    }

    /// Decode a vector file from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let elements = match value {
            Value::Array(elements) => elements,
            other => {
                return Err(Error::Parse(format!(
                    "expected a top-level array, found {}",
                    kind(&other)
                )))
            }
        };

        let mut elements = elements.into_iter();
        let metadata = elements.next();
        let sets = elements
            .enumerate()
            .map(|(i, element)| VectorSet::from_value(i + 1, element))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { metadata, sets })
    }

    /// Keep a single test in every group of every vector set.
    ///
    /// Fails without modifying anything if any group has no tests.
    pub fn trim(&mut self) -> Result<TrimStats> {
        let mut keep = Vec::new();
        for (i, set) in self.sets.iter().enumerate() {
            for (g, group) in set.groups.iter().enumerate() {
                let index = keep_index(group.tests.len()).ok_or(ShapeError::EmptyTests {
                    set: i + 1,
                    group: g,
                })?;
                keep.push(index);
            }
        }

        let mut stats = TrimStats {
            sets: self.sets.len(),
            ..Default::default()
        };
        let mut keep = keep.into_iter();
        for set in &mut self.sets {
            for group in &mut set.groups {
                let Some(index) = keep.next() else { break };
                stats.groups += 1;
                stats.tests_before += group.tests.len();
                let kept = group.tests.swap_remove(index);
                group.tests = vec![kept];
                stats.tests_after += 1;
            }
        }

        Ok(stats)
    }

    /// Re-assemble the JSON array.
    pub fn into_value(self) -> Value {
        let mut elements = Vec::with_capacity(self.sets.len() + 1);
        elements.extend(self.metadata);
        elements.extend(self.sets.into_iter().map(VectorSet::into_value));
        Value::Array(elements)
    }

    /// Serialize as pretty-printed JSON with two-space indentation.
    pub fn to_pretty_json(self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(&self.into_value())
            .map_err(|e| Error::Serialization(format!("Failed to encode trimmed vectors: {}", e)))
    }
}

impl VectorSet {
    fn from_value(set: usize, value: Value) -> std::result::Result<Self, ShapeError> {
        let Value::Object(mut fields) = value else {
            return Err(ShapeError::SetNotObject { set });
        };
        let groups = match fields.get_mut(TEST_GROUPS).map(Value::take) {
            Some(Value::Array(groups)) => groups,
            _ => return Err(ShapeError::MissingTestGroups { set }),
        };
        let groups = groups
            .into_iter()
            .enumerate()
            .map(|(group, value)| TestGroup::from_value(set, group, value))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        trace!(set, groups = groups.len(), "Decoded vector set");
        Ok(Self { fields, groups })
    }

    fn into_value(self) -> Value {
        let mut fields = self.fields;
        let groups = self.groups.into_iter().map(TestGroup::into_value).collect();
        fields.insert(TEST_GROUPS.to_string(), Value::Array(groups));
        Value::Object(fields)
    }
}

impl TestGroup {
    fn from_value(set: usize, group: usize, value: Value) -> std::result::Result<Self, ShapeError> {
        let Value::Object(mut fields) = value else {
            return Err(ShapeError::GroupNotObject { set, group });
        };
        match fields.get_mut(TESTS).map(Value::take) {
            Some(Value::Array(tests)) => Ok(Self { fields, tests }),
            _ => Err(ShapeError::MissingTests { set, group }),
        }
    }

    fn into_value(self) -> Value {
        let mut fields = self.fields;
        fields.insert(TESTS.to_string(), Value::Array(self.tests));
        Value::Object(fields)
    }
}

/// Trim raw vector file bytes, returning the re-encoded file.
pub fn trim(vectors: &[u8]) -> Result<Vec<u8>> {
    trim_with_stats(vectors).map(|(trimmed, _)| trimmed)
}

/// Trim raw vector file bytes, returning the re-encoded file and counters.
pub fn trim_with_stats(vectors: &[u8]) -> Result<(Vec<u8>, TrimStats)> {
    let mut file = VectorFile::from_slice(vectors)?;
    let stats = file.trim()?;
    Ok((file.to_pretty_json()?, stats))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
