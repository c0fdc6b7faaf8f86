use std::collections::BTreeMap;

use regex::Regex;

use crate::error::TableError;

/// Label of an edge that consumes no input symbol.
pub const EMPTY_PATH: &str = "\\Lambda";
/// Value of a pair of states with no edge between them.
pub const EMPTY_SET: &str = "\\emptyset";

pub type StatePair = (usize, usize);

const STANDARD_EDGES: [(&str, &str); 6] = [
    ("1-2", "(a \\vee b)"),
    ("2-3", "(a \\vee b)"),
    ("1-3", "a"),
    ("2-1", EMPTY_PATH),
    ("1-4", EMPTY_PATH),
    ("2-4", EMPTY_PATH),
];

/// Read-only map from ordered state pairs to the markup label of the edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeTable {
    labels: BTreeMap<StatePair, String>,
}

impl EdgeTable {
    /// Builds a table from `("from-to", label)` entries.
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<EdgeTable, TableError> {
        let key = Regex::new(r"^(\d+)-(\d+)$")?;

        let mut labels = BTreeMap::new();
        for (raw, label) in entries {
            labels.insert(parse_key(&key, raw)?, label.to_string());
        }
        log::debug!("edge table with {} entries", labels.len());

        Ok(EdgeTable { labels })
    }

    /// The four-state graph the derivation is printed for.
    pub fn standard() -> Result<EdgeTable, TableError> {
        EdgeTable::from_entries(STANDARD_EDGES)
    }

    pub fn lookup(&self, from: usize, to: usize) -> &str {
        self.labels
            .get(&(from, to))
            .map(String::as_str)
            .unwrap_or(EMPTY_SET)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn parse_key(key: &Regex, raw: &str) -> Result<StatePair, TableError> {
    let malformed = || TableError::MalformedKey(raw.to_string());
    let cap = key.captures(raw.trim()).ok_or_else(malformed)?;
    let from = cap[1].parse().map_err(|_| malformed())?;
    let to = cap[2].parse().map_err(|_| malformed())?;
    Ok((from, to))
}
