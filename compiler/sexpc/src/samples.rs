//! Built-in programs for the driver.
//!
//! There is no source parser; programs are built with [`sexp!`].

use sexp_ir::{sexp, Expr};

/// A named program.
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> Vec<Expr>,
}

impl Sample {
    /// The program's statements.
    pub fn program(&self) -> Vec<Expr> {
        (self.build)()
    }
}

pub const DEFAULT_SAMPLE: &str = "countdown";

pub static SAMPLES: &[Sample] = &[
    Sample {
        name: "countdown",
        description: "sum the numbers from 10 down to 1",
        build: countdown,
    },
    Sample {
        name: "loop-break",
        description: "infinite loop left through a conditional break",
        build: loop_break,
    },
    Sample {
        name: "branches",
        description: "if with and without else",
        build: branches,
    },
    Sample {
        name: "stray-break",
        description: "break outside of any loop (fails)",
        build: stray_break,
    },
    Sample {
        name: "malformed",
        description: "statement form the compiler does not know (fails)",
        build: malformed,
    },
];

/// Look up a sample by name.
pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|sample| sample.name == name)
}

fn countdown() -> Vec<Expr> {
    vec![
        sexp!(assign n 10),
        sexp!(assign total 0),
        sexp!(while (< 0 n) (
            (assign total (+ total n))
            (assign n (- n 1))
        )),
        sexp!(return total),
    ]
}

/// Reads `b` without assigning it, so only the C target accepts it.
fn loop_break() -> Vec<Expr> {
    vec![sexp!(while true (
        (if true ((assign a b) break))
        (return 0)
    ))]
}

fn branches() -> Vec<Expr> {
    vec![
        sexp!(assign x 7),
        sexp!(assign y 0),
        sexp!(if (== x 7) ((assign y 1))),
        sexp!(if (< y x) ((assign y (* y 2))) ((assign y 0))),
        sexp!(return y),
    ]
}

fn stray_break() -> Vec<Expr> {
    vec![sexp!(assign i 0), sexp!(break)]
}

fn malformed() -> Vec<Expr> {
    vec![sexp!(assign a 1), sexp!(goto a)]
}
