// wordstrip-core/src/record.rs
//! Row and table types shared by the codec, the term-set builder and the engine.
//!
//! A [`Record`] keeps its fields in insertion order so that export reproduces
//! the column layout of the source file. Two field names are reserved: the
//! raw product name the engine reads and the column it writes.

use std::collections::HashSet;

/// Field holding the raw product name.
pub const SOURCE_FIELD: &str = "*상품명";

/// Field receiving the product name with forbidden terms removed.
pub const DERIVED_FIELD: &str = "금지어가 제거된 상품명";

/// One row of tabular data: an ordered mapping of field name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Sets `field` to `value`. An existing field keeps its position;
    /// a new one is appended.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((field, value)),
        }
    }

    /// Returns a copy of this record with `field` set to `value`.
    pub fn with(&self, field: &str, value: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.set(field, value);
        copy
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The raw product name, if the row has one.
    pub fn source_value(&self) -> Option<&str> {
        self.get(SOURCE_FIELD)
    }

    /// The sanitized product name, if it has been computed.
    pub fn derived_value(&self) -> Option<&str> {
        self.get(DERIVED_FIELD)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (field, value) in iter {
            record.set(field, value);
        }
        record
    }
}

/// An ordered sequence of records plus the schema they were decoded with.
///
/// The schema is not enforced: records may lack schema fields or carry extra ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub fields: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(fields: Vec<String>, records: Vec<Record>) -> Self {
        Self { fields, records }
    }

    /// Builds a dataset whose schema is the field names in first-seen order.
    pub fn from_records(records: Vec<Record>) -> Self {
        let fields = union_fields(&[], &records);
        Self { fields, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First field name of the schema.
    pub fn first_field(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    /// Every field name in the schema or in any record, in first-seen order.
    ///
    /// Export uses this so columns added after decoding are never dropped,
    /// even when only some rows carry them.
    pub fn all_fields(&self) -> Vec<String> {
        union_fields(&self.fields, &self.records)
    }
}

fn union_fields(schema: &[String], records: &[Record]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    let names = schema
        .iter()
        .map(String::as_str)
        .chain(records.iter().flat_map(|r| r.field_names()));
    for name in names {
        if seen.insert(name) {
            out.push(name.to_string());
        }
    }
    out
}
