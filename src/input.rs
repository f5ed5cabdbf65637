//! Loads the clause-list input format: one clause per line, written as
//! whitespace-separated nonzero integers. A blank line is an empty clause.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use thiserror::Error;

use crate::{Clause, Formula, Lit};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid literal {token:?}")]
    BadLiteral { line: usize, token: String },

    #[error("line {line}: literal 0 is not allowed")]
    ZeroLiteral { line: usize },

    #[error("input contains no clauses")]
    Empty,
}

pub fn read_formula<R: Read>(reader: R) -> Result<Formula, InputError> {
    let reader = BufReader::new(reader);
    let mut clauses = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let mut lits = Vec::new();
        for token in line.split_whitespace() {
            let value: i32 = token.parse().map_err(|_| InputError::BadLiteral {
                line: idx + 1,
                token: token.to_string(),
            })?;
            if value == 0 {
                return Err(InputError::ZeroLiteral { line: idx + 1 });
            }
            lits.push(Lit::from_dimacs(value));
        }
        clauses.push(Clause(lits));
    }
    if clauses.is_empty() {
        return Err(InputError::Empty);
    }
    log::info!("loaded {} clauses", clauses.len());
    Ok(Formula::new(clauses))
}

pub fn load_formula<P: AsRef<Path>>(path: P) -> Result<Formula, InputError> {
    read_formula(File::open(path)?)
}
