use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::error::FormulaError;
use crate::parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Pow => lhs.powf(rhs),
        }
    }

    fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Variable(String),
    Neg(Box<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn eval(&self, values: &HashMap<String, f64>) -> Result<f64, FormulaError> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Variable(name) => values
                .get(name)
                .copied()
                .ok_or_else(|| FormulaError::UnknownVariable(name.clone())),
            Expr::Neg(inner) => Ok(-inner.eval(values)?),
            Expr::Binary { op, lhs, rhs } => Ok(op.apply(lhs.eval(values)?, rhs.eval(values)?)),
        }
    }

    fn collect_variables<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
        match self {
            Expr::Number(_) => {}
            Expr::Variable(name) => {
                out.insert(name.as_str());
            }
            Expr::Neg(inner) => inner.collect_variables(out),
            Expr::Binary { lhs, rhs, .. } => {
                lhs.collect_variables(out);
                rhs.collect_variables(out);
            }
        }
    }
}

impl fmt::Display for Expr {
    /// Fully parenthesized rendering, used in debug logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Variable(name) => f.write_str(name),
            Expr::Neg(inner) => write!(f, "(-{inner})"),
            Expr::Binary { op, lhs, rhs } => write!(f, "({lhs} {} {rhs})", op.symbol()),
        }
    }
}

/// A parsed formula, reusable across evaluations.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    source: String,
    expr: Expr,
}

impl Formula {
    pub fn parse(source: &str) -> Result<Self, FormulaError> {
        Ok(Self {
            source: source.to_string(),
            expr: parser::parse(source)?,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Distinct variable names the formula refers to, sorted.
    pub fn variables(&self) -> Vec<&str> {
        let mut out = BTreeSet::new();
        self.expr.collect_variables(&mut out);
        out.into_iter().collect()
    }

    /// Evaluate against `values`. Only finite results are returned.
    pub fn eval(&self, values: &HashMap<String, f64>) -> Result<f64, FormulaError> {
        let result = self.expr.eval(values)?;
        if result.is_finite() {
            Ok(result)
        } else {
            Err(FormulaError::NonFinite)
        }
    }
}
