use std::fmt;

use crate::branch::choose_literal;
use crate::simplify::{assign, find_pure, find_unit};
use crate::{Formula, Lit, Strategy, Var};

// literals decided true so far, in decision order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment(Vec<Lit>);

impl Assignment {
    pub fn lits(&self) -> &[Lit] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, lit: Lit) -> bool {
        self.0.contains(&lit)
    }

    // substitution check: every clause holds at least one decided literal
    pub fn satisfies(&self, formula: &Formula) -> bool {
        formula
            .clauses()
            .iter()
            .all(|clause| clause.inner().iter().any(|&lit| self.contains(lit)))
    }

    pub fn true_vars(&self) -> Vec<Var> {
        self.0
            .iter()
            .filter(|lit| lit.is_positive())
            .map(|lit| lit.var())
            .collect()
    }

    fn extended(mut self, lit: Lit) -> Assignment {
        self.0.push(lit);
        self
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lits = self.0.iter();
        if let Some(first) = lits.next() {
            write!(f, "{}", first)?;
            for lit in lits {
                write!(f, " {}", lit)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    Sat(Assignment),
    Unsat,
}

impl Solution {
    pub fn is_sat(&self) -> bool {
        matches!(self, Solution::Sat(_))
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Solution::Sat(assignment) => Some(assignment),
            Solution::Unsat => None,
        }
    }
}

pub fn dpll(formula: Formula) -> Solution {
    dpll_with(formula, Strategy::default())
}

pub fn dpll_with(formula: Formula, strategy: Strategy) -> Solution {
    match search(formula, Assignment::default(), strategy) {
        Some(assignment) => Solution::Sat(assignment),
        None => Solution::Unsat,
    }
}

// every call owns its formula and assignment, so abandoning a branch is
// just returning: the parent keeps using its own untouched locals
fn search(formula: Formula, assignment: Assignment, strategy: Strategy) -> Option<Assignment> {
    if formula.is_empty() {
        return Some(assignment);
    }
    if formula.has_empty_clause() {
        return None;
    }

    // 1. unit propagation
    if let Some(unit) = find_unit(&formula) {
        log::debug!("unit clause forces {}", unit);
        return search(assign(unit, &formula), assignment.extended(unit), strategy);
    }

    // 2. pure literal elimination
    if let Some(pure) = find_pure(&formula) {
        log::debug!("pure literal {}", pure);
        return search(assign(pure, &formula), assignment.extended(pure), strategy);
    }

    // 3. branch
    let Some(guess) = choose_literal(&formula, strategy) else {
        unreachable!("branching on an empty formula");
    };
    log::debug!("guessing {}", guess);
    let attempt = search(
        assign(guess, &formula),
        assignment.clone().extended(guess),
        strategy,
    );
    match attempt {
        Some(solved) => Some(solved),
        // 3.1. the guess failed, retry its negation from this branch point
        None => search(assign(!guess, &formula), assignment.extended(!guess), strategy),
    }
}
