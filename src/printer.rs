use std::io::Write;

use crate::config::Config;
use crate::edges::EdgeTable;
use crate::error::Error;
use crate::formula::{Case, Formula};
use crate::render::get_latex_formula;

/// Moves a line one tab stop to the right inside `tabbing`.
pub const TAB: &str = "\\>";

const BEGIN: &str = "\\begin{tabbing}";
const TAB_STOPS: &str = "M \\= M \\= M \\= M \\=M \\=M \\=M \\=\\kill";
const END: &str = "\\end{tabbing}";
const LINE_BREAK: &str = "\\\\";

/// An edge table together with the query to derive from it.
#[derive(Debug, Clone)]
pub struct Derivation {
    table: EdgeTable,
    config: Config,
}

impl Derivation {
    pub fn new(table: EdgeTable, config: Config) -> Derivation {
        Derivation { table, config }
    }

    pub fn standard() -> Result<Derivation, Error> {
        Ok(Derivation::new(EdgeTable::standard()?, Config::default()))
    }

    /// Writes `formula` and then, one tab stop further in, every formula of
    /// its expansion, down to `k = 1`.
    pub fn print_formula<W: Write>(
        &self,
        out: &mut W,
        formula: &Formula,
        indent: usize,
    ) -> Result<(), Error> {
        log::trace!("{} at indent {}", formula, indent);
        writeln!(
            out,
            "{} $ {} $ {}",
            TAB.repeat(indent),
            get_latex_formula(&self.table, formula, self.config.max_k),
            LINE_BREAK
        )?;

        if formula.k == 1 {
            return Ok(());
        }

        writeln!(out, "{}", LINE_BREAK)?;
        for sub in formula.sub_formulas() {
            self.print_formula(out, &sub, indent + 1)?;
        }
        if formula.case() == Case::General {
            writeln!(out, "{}", LINE_BREAK)?;
        }
        Ok(())
    }

    /// The whole `tabbing` environment for the configured query.
    pub fn write_document<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        if self.table.is_empty() {
            log::warn!("edge table is empty, every base value is {}", crate::edges::EMPTY_SET);
        }
        log::debug!(
            "deriving {} over {} edges (values shown up to k = {})",
            self.config.query,
            self.table.len(),
            self.config.max_k
        );
        writeln!(out, "{}", BEGIN)?;
        writeln!(out, "{}", TAB_STOPS)?;
        self.print_formula(out, &self.config.query, 0)?;
        writeln!(out, "{}", END)?;
        Ok(())
    }

    pub fn document(&self) -> Result<String, Error> {
        let mut buf = vec![];
        self.write_document(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
