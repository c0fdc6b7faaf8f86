use crate::edges::EdgeTable;
use crate::formula::Formula;

/// Reduced value of `R(k, i, j)` as markup, built by substituting edge
/// labels at `k = 0`.
pub fn find_r_value(table: &EdgeTable, k: usize, i: usize, j: usize) -> String {
    if k == 0 {
        return table.lookup(i, j).to_string();
    }
    Formula::new(k, i, j)
        .expansion()
        .map(|sub| find_r_value(table, sub.k, sub.i, sub.j))
        .to_latex("")
}
