use crate::formula::Formula;

/// Largest `k` whose reduced value is still appended to the formula line.
pub const MAX_K: usize = 2;

pub const QUERY: Formula = Formula { k: 3, i: 1, j: 4 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub max_k: usize,
    pub query: Formula,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_k: MAX_K,
            query: QUERY,
        }
    }
}
