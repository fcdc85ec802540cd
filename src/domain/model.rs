use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Bracket slots filled by third-placed teams, in table column order.
pub const SLOTS: [&str; 8] = ["1A", "1B", "1D", "1E", "1G", "1I", "1K", "1L"];

/// Number of groups whose third-placed team advances.
pub const ADVANCING_GROUPS: usize = SLOTS.len();

/// C(12, 8): every way 8 of the 12 groups can send a third-placed team through.
pub const EXPECTED_COMBINATIONS: usize = 495;

/// A first-round group, `A` through `L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Group(char);

impl Group {
    pub fn from_char(letter: char) -> Option<Self> {
        matches!(letter, 'A'..='L').then_some(Group(letter))
    }

    pub fn letter(self) -> char {
        self.0
    }

    /// The `3X` token naming this group's third-placed team.
    pub fn third_place(self) -> String {
        format!("3{}", self.0)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which group's third-placed team fills each slot, aligned with [`SLOTS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment([Group; ADVANCING_GROUPS]);

impl Assignment {
    pub fn new(sources: [Group; ADVANCING_GROUPS]) -> Self {
        Self(sources)
    }

    pub fn get(&self, slot: &str) -> Option<Group> {
        SLOTS
            .iter()
            .position(|s| *s == slot)
            .map(|index| self.0[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Group)> + '_ {
        SLOTS.iter().copied().zip(self.0.iter().copied())
    }
}

impl Serialize for Assignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ADVANCING_GROUPS))?;
        for (slot, group) in self.iter() {
            map.serialize_entry(slot, &group.third_place())?;
        }
        map.end()
    }
}

/// One data line of the source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The advancing groups, sorted and concatenated (e.g. `ABDEGIKL`).
    pub key: String,
    pub assignment: Assignment,
}

/// Group-set key to slot assignment. Keys serialize in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ThirdMapping {
    entries: BTreeMap<String, Assignment>,
}

impl ThirdMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins; returns the assignment that was replaced, if any.
    pub fn insert(&mut self, row: Row) -> Option<Assignment> {
        self.entries.insert(row.key, row.assignment)
    }

    pub fn get(&self, key: &str) -> Option<&Assignment> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub mapping: ThirdMapping,
    /// Lines that produced a row, duplicates included.
    pub parsed_lines: usize,
    pub skipped_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub parsed_lines: usize,
    pub unique_keys: usize,
    pub expected_keys: usize,
    pub written: bool,
}

impl RunSummary {
    pub fn has_count_mismatch(&self) -> bool {
        self.unique_keys != self.expected_keys
    }

    pub fn mismatch_warning(&self) -> Option<String> {
        self.has_count_mismatch().then(|| {
            format!(
                "Warning: expected {} unique combinations but found {}. \
                 The source table formatting has probably drifted; check the skipped lines.",
                self.expected_keys, self.unique_keys
            )
        })
    }
}
