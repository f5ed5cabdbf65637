use std::collections::HashSet;

use crate::{Clause, Formula, Lit};

// based on lit being true:
// drop every clause that contains lit, strike !lit from the rest
pub fn assign(lit: Lit, formula: &Formula) -> Formula {
    let negated = !lit;
    let mut clauses = Vec::with_capacity(formula.num_clauses());
    for clause in formula.clauses() {
        if clause.contains(lit) {
            continue;
        }
        let survivors = clause
            .inner()
            .iter()
            .copied()
            .filter(|&l| l != negated)
            .collect::<Vec<_>>();
        clauses.push(Clause(survivors));
    }
    log::debug!(
        "after assigning {}, {} of {} clauses left",
        lit,
        clauses.len(),
        formula.num_clauses()
    );
    Formula(clauses)
}

// the literal of the first clause of length one, in formula order
pub fn find_unit(formula: &Formula) -> Option<Lit> {
    formula.clauses().iter().find_map(Clause::unit)
}

// the first literal (first-seen order) whose negation occurs nowhere
pub fn find_pure(formula: &Formula) -> Option<Lit> {
    let lits = formula.distinct_lits();
    let occurs: HashSet<Lit> = lits.iter().copied().collect();
    lits.into_iter().find(|&lit| !occurs.contains(&!lit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(value: i32) -> Lit {
        Lit::from_dimacs(value)
    }

    #[test]
    fn assign_drops_satisfied_and_strikes_negation() {
        let formula = Formula::from(vec![vec![1, -2, -3], vec![-1, 2, -3], vec![-1, -2, 3]]);
        let simplified = assign(lit(1), &formula);
        assert_eq!(simplified, Formula::from(vec![vec![2, -3], vec![-2, 3]]));
    }

    #[test]
    fn assign_preserves_clause_and_literal_order() {
        let formula = Formula::from(vec![vec![2, -1, 3], vec![4, 2], vec![-1, 4]]);
        let simplified = assign(lit(1), &formula);
        assert_eq!(
            simplified,
            Formula::from(vec![vec![2, 3], vec![4, 2], vec![4]])
        );
    }

    #[test]
    fn assign_shrinks_monotonically() {
        let formula = Formula::from(vec![
            vec![1, 2, -3],
            vec![-1, -2],
            vec![2, 3, -1, -2],
            vec![3],
        ]);
        for &chosen in &formula.distinct_lits() {
            let simplified = assign(chosen, &formula);
            for clause in simplified.clauses() {
                assert!(!clause.contains(chosen));
                assert!(!clause.contains(!chosen));
                // every surviving clause is a subsequence of some input clause
                assert!(formula.clauses().iter().any(|original| {
                    let mut rest = original.inner().iter();
                    clause
                        .inner()
                        .iter()
                        .all(|l| rest.any(|candidate| candidate == l))
                }));
            }
        }
    }

    #[test]
    fn assign_can_produce_an_empty_clause() {
        let formula = Formula::from(vec![vec![1], vec![-1]]);
        let simplified = assign(lit(1), &formula);
        assert!(simplified.has_empty_clause());
    }

    #[test]
    fn find_unit_takes_first_in_formula_order() {
        let formula = Formula::from(vec![vec![1, 2], vec![-3], vec![4]]);
        assert_eq!(find_unit(&formula), Some(lit(-3)));
    }

    #[test]
    fn find_unit_none_iff_no_short_clause() {
        assert_eq!(find_unit(&Formula::default()), None);
        assert_eq!(find_unit(&Formula::from(vec![vec![1, 2], vec![2, 3]])), None);
    }

    #[test]
    fn find_pure_takes_first_seen() {
        // both 2 and 3 are pure, 2 is seen first
        let formula = Formula::from(vec![vec![1, 2], vec![-1, 2], vec![-1, 3]]);
        assert_eq!(find_pure(&formula), Some(lit(2)));
    }

    #[test]
    fn find_pure_none_iff_every_negation_occurs() {
        let formula = Formula::from(vec![vec![1, -2], vec![-1, 2]]);
        assert_eq!(find_pure(&formula), None);
        assert_eq!(find_pure(&Formula::default()), None);
    }

    #[test]
    fn assigning_a_pure_literal_leaves_survivors_untouched() {
        let formula = Formula::from(vec![vec![2, 1], vec![-1, 2], vec![1, 3]]);
        assert_eq!(find_pure(&formula), Some(lit(2)));
        let simplified = assign(lit(2), &formula);
        // no negation to strike, so the remaining clause survives as-is
        assert_eq!(simplified, Formula::from(vec![vec![1, 3]]));
    }
}
