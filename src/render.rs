use crate::edges::EdgeTable;
use crate::evaluate::find_r_value;
use crate::formula::Formula;

/// `R^k_{ij} = <expansion>`, followed by ` = <value>` while `k <= max_k`.
/// Past that the reduced value grows too long to read.
pub fn get_latex_formula(table: &EdgeTable, formula: &Formula, max_k: usize) -> String {
    let expansion = formula
        .expansion()
        .map(|sub| sub.to_string())
        .to_latex(" ");

    let value = if formula.k <= max_k {
        format!(" = {}", find_r_value(table, formula.k, formula.i, formula.j))
    } else {
        String::new()
    };

    format!("{} = {}{}", formula, expansion, value)
}
