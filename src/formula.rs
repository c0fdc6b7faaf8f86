use std::fmt;

use itertools::Itertools;

/// `R(k, i, j)`: every path from state `i` to state `j` whose intermediate
/// states are all at most `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Formula {
    pub k: usize,
    pub i: usize,
    pub j: usize,
}

impl Formula {
    pub fn new(k: usize, i: usize, j: usize) -> Formula {
        Formula { k, i, j }
    }

    /// How `R(k, i, j)` splits around the pivot state `k`. At `k = 0` the
    /// value is read from the edge table instead and the case is unused.
    pub fn case(&self) -> Case {
        if self.i == self.k {
            Case::SourceIsPivot
        } else if self.k == self.j {
            Case::TargetIsPivot
        } else {
            Case::General
        }
    }

    /// Formulas of level `k - 1` that appear in the expansion, in the
    /// order they are written.
    pub fn sub_formulas(&self) -> Vec<Formula> {
        let Expansion {
            avoiding,
            into_pivot,
            pivot_loop,
            from_pivot,
        } = self.expansion();
        avoiding
            .into_iter()
            .chain(into_pivot)
            .chain(Some(pivot_loop))
            .chain(from_pivot)
            .collect_vec()
    }

    /// # Panics
    ///
    /// Panics if `k = 0`; level-zero formulas have no expansion.
    pub fn expansion(&self) -> Expansion<Formula> {
        assert!(self.k > 0, "{} has no expansion", self);
        let (k, i, j) = (self.k - 1, self.i, self.j);
        let pivot = self.k;
        let pivot_loop = Formula::new(k, pivot, pivot);
        match self.case() {
            Case::SourceIsPivot => Expansion {
                avoiding: None,
                into_pivot: None,
                pivot_loop,
                from_pivot: Some(Formula::new(k, pivot, j)),
            },
            Case::TargetIsPivot => Expansion {
                avoiding: None,
                into_pivot: Some(Formula::new(k, i, pivot)),
                pivot_loop,
                from_pivot: None,
            },
            Case::General => Expansion {
                avoiding: Some(Formula::new(k, i, j)),
                into_pivot: Some(Formula::new(k, i, pivot)),
                pivot_loop,
                from_pivot: Some(Formula::new(k, pivot, j)),
            },
        }
    }
}

// Indices are concatenated without a separator, so `R(3, 1, 4)` is `R^3_{14}`.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R^{}_{{{}{}}}", self.k, self.i, self.j)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// `i == k`: loop at `k`, then leave for `j`.
    SourceIsPivot,
    /// `k == j`: reach `k`, then loop there.
    TargetIsPivot,
    General,
}

/// The terms of `avoiding ∨ into_pivot (pivot_loop)* from_pivot` that a
/// given case keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion<T> {
    pub avoiding: Option<T>,
    pub into_pivot: Option<T>,
    pub pivot_loop: T,
    pub from_pivot: Option<T>,
}

impl<T> Expansion<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Expansion<U> {
        Expansion {
            avoiding: self.avoiding.map(&mut f),
            into_pivot: self.into_pivot.map(&mut f),
            pivot_loop: f(self.pivot_loop),
            from_pivot: self.from_pivot.map(&mut f),
        }
    }
}

impl Expansion<String> {
    /// Writes the expansion as markup. `gap` goes between adjacent terms of
    /// the concatenation.
    pub fn to_latex(&self, gap: &str) -> String {
        let mut concat = vec![];
        if let Some(into) = &self.into_pivot {
            concat.push(into.clone());
        }
        concat.push(format!("({})^*", self.pivot_loop));
        if let Some(from) = &self.from_pivot {
            concat.push(from.clone());
        }
        let path = concat.iter().join(gap);
        match &self.avoiding {
            Some(avoiding) => format!("{} \\vee {}", avoiding, path),
            None => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Formula::new(3, 1, 4).to_string(), "R^3_{14}");
        assert_eq!(Formula::new(0, 2, 2).to_string(), "R^0_{22}");
    }

    #[test]
    fn test_case() {
        assert_eq!(Formula::new(1, 1, 2).case(), Case::SourceIsPivot);
        assert_eq!(Formula::new(2, 1, 2).case(), Case::TargetIsPivot);
        assert_eq!(Formula::new(3, 1, 4).case(), Case::General);
        // source wins when both ends are the pivot
        assert_eq!(Formula::new(2, 2, 2).case(), Case::SourceIsPivot);
    }

    #[test]
    fn test_sub_formulas() {
        assert_eq!(
            Formula::new(3, 1, 4).sub_formulas(),
            vec![
                Formula::new(2, 1, 4),
                Formula::new(2, 1, 3),
                Formula::new(2, 3, 3),
                Formula::new(2, 3, 4),
            ]
        );
        assert_eq!(
            Formula::new(2, 2, 4).sub_formulas(),
            vec![Formula::new(1, 2, 2), Formula::new(1, 2, 4)]
        );
        assert_eq!(
            Formula::new(3, 1, 3).sub_formulas(),
            vec![Formula::new(2, 1, 3), Formula::new(2, 3, 3)]
        );
    }

    #[test]
    fn test_expansion_latex() {
        let names = |f: Formula| f.expansion().map(|sub| sub.to_string());
        assert_eq!(
            names(Formula::new(3, 1, 4)).to_latex(" "),
            "R^2_{14} \\vee R^2_{13} (R^2_{33})^* R^2_{34}"
        );
        assert_eq!(
            names(Formula::new(2, 2, 4)).to_latex(" "),
            "(R^1_{22})^* R^1_{24}"
        );
        assert_eq!(
            names(Formula::new(2, 1, 2)).to_latex(""),
            "R^1_{12}(R^1_{22})^*"
        );
    }

    #[test]
    #[should_panic(expected = "R^0_{12} has no expansion")]
    fn test_level_zero_has_no_expansion() {
        Formula::new(0, 1, 2).expansion();
    }
}
