//! Required-field presence checks (phase 1).

use crate::record::Record;

/// Schema fields of a passport record.
pub const PASSPORT_FIELDS: [&str; 8] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid", "cid"];

/// Passport fields that may be absent without failing phase 1.
pub const PASSPORT_IGNORED: [&str; 1] = ["cid"];

/// Ordered set of field names every record must carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredFields {
    names: Vec<String>,
}

impl RequiredFields {
    /// Build from a list of names. Duplicates keep their first position.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut required = Self::default();
        for name in names {
            let name = name.into();
            if !required.names.contains(&name) {
                required.names.push(name);
            }
        }
        required
    }

    /// All schema fields except those listed in `ignore`.
    pub fn from_schema<S, T>(fields: &[S], ignore: &[T]) -> Self
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self::new(
            fields
                .iter()
                .map(|f| f.as_ref())
                .filter(|f| !ignore.iter().any(|i| i.as_ref() == *f)),
        )
    }

    /// Passport schema minus `cid`.
    pub fn passport() -> Self {
        Self::from_schema(&PASSPORT_FIELDS[..], &PASSPORT_IGNORED[..])
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Check that every required field is a key of the record.
///
/// Values are not inspected: an empty value still counts as present. An
/// empty required set is always satisfied.
pub fn has_required_fields(record: &Record, required: &RequiredFields) -> bool {
    required.iter().all(|name| record.contains(name))
}

/// Required fields absent from the record, in required-set order.
pub fn missing_fields<'a>(record: &Record, required: &'a RequiredFields) -> Vec<&'a str> {
    required
        .iter()
        .filter(|name| !record.contains(name))
        .collect()
}
