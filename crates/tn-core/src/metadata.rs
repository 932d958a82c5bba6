//! `<KEY> value` header blocks shared by the net and trips dialects.
//!
//! ```text
//! <NUMBER OF ZONES> 24
//! <TOTAL OD FLOW> 360600.0
//! <END OF METADATA>
//! ```

/// Marker line closing a metadata block.  It carries no value.
pub const END_OF_METADATA: &str = "END OF METADATA";

/// Ordered key/value pairs of a file header.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    entries: Vec<(String, String)>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a `<KEY> value` line.  Returns `None` for anything else.
    pub fn parse_line(line: &str) -> Option<(String, String)> {
        let rest = line.trim().strip_prefix('<')?;
        let (key, value) = rest.split_once('>')?;
        Some((key.trim().to_owned(), value.trim().to_owned()))
    }

    /// Record the line if it is a metadata tag; returns whether it was one.
    pub fn absorb_line(&mut self, line: &str) -> bool {
        match Self::parse_line(line) {
            Some((key, _)) if key == END_OF_METADATA => true,
            Some((key, value)) => {
                self.insert(key, value);
                true
            }
            None => false,
        }
    }

    /// Insert or replace `key`.  Insertion order of first occurrence is kept.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn number_of_zones(&self) -> Option<u32> {
        self.get("NUMBER OF ZONES")?.parse().ok()
    }

    pub fn number_of_nodes(&self) -> Option<u32> {
        self.get("NUMBER OF NODES")?.parse().ok()
    }

    pub fn number_of_links(&self) -> Option<u32> {
        self.get("NUMBER OF LINKS")?.parse().ok()
    }

    pub fn first_thru_node(&self) -> Option<u32> {
        self.get("FIRST THRU NODE")?.parse().ok()
    }

    pub fn total_od_flow(&self) -> Option<f64> {
        self.get("TOTAL OD FLOW")?.parse().ok()
    }
}
