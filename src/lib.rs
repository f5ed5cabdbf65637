mod branch;
mod clause;
mod dpll;
mod input;
mod lit;
mod simplify;
pub mod sudoku;

pub use branch::choose_literal;
pub use clause::{Clause, Formula};
pub use dpll::{dpll, dpll_with, Assignment, Solution};
pub use input::{load_formula, read_formula, InputError};
pub use lit::{Lit, Var};
pub use simplify::{assign, find_pure, find_unit};

// how the search picks a branch literal once simplification stalls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    Shortest,
    Random,
}
