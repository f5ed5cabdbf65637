use rand::seq::IteratorRandom;

use crate::{Formula, Lit, Strategy};

// pick a literal to branch on once no unit clause or pure literal is left;
// None only for an empty formula, which the search never asks about
pub fn choose_literal(formula: &Formula, strategy: Strategy) -> Option<Lit> {
    match strategy {
        // first clause of minimal length, then its first literal
        Strategy::Shortest => formula
            .clauses()
            .iter()
            .min_by_key(|clause| clause.len())
            .and_then(|clause| clause.inner().first().copied()),
        Strategy::Random => formula
            .distinct_lits()
            .into_iter()
            .choose(&mut rand::thread_rng()),
    }
}
