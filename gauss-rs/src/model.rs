use std::io::Read;

use gauss_core::DenseMatrix;
use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};

/// One linear equation: `coefficients · x = constant`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    pub coefficients: Vec<f64>,
    pub constant: f64,
}

impl Equation {
    pub fn new(coefficients: Vec<f64>, constant: f64) -> Self {
        Self {
            coefficients,
            constant,
        }
    }

    /// Number of tokens this equation is written with (coefficients + constant).
    pub fn term_count(&self) -> usize {
        self.coefficients.len() + 1
    }
}

/// A system of equations as entered by the user, before any shape checks
/// beyond per-line parsing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EquationSystem {
    pub equations: Vec<Equation>,
}

impl EquationSystem {
    pub fn new(equations: Vec<Equation>) -> Self {
        Self { equations }
    }

    pub fn len(&self) -> usize {
        self.equations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Parses one equation per line. Blank lines and lines starting with `#`
    /// are skipped; the number of remaining lines fixes n.
    pub fn parse(text: &str) -> core::result::Result<Self, ParseError> {
        let lines: Vec<&str> = text.lines().filter(|line| is_equation_line(line)).collect();
        let n = lines.len();
        Self::from_lines(lines.as_slice(), n)
    }

    /// Parses exactly `n` equation lines, each with `n + 1` numeric tokens.
    pub fn from_lines<S: AsRef<str>>(
        lines: &[S],
        n: usize,
    ) -> core::result::Result<Self, ParseError> {
        if n == 0 {
            return Err(ParseError::NoEquations);
        }
        if lines.len() != n {
            return Err(ParseError::EquationCountMismatch {
                declared: n,
                found: lines.len(),
            });
        }
        let equations = lines
            .iter()
            .enumerate()
            .map(|(i, line)| parse_equation(line.as_ref(), i + 1, n))
            .collect::<core::result::Result<Vec<_>, _>>()?;
        Ok(Self { equations })
    }

    /// Reads a headerless CSV document, one equation per record.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // term counts are checked per equation below
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let records = csv_reader
            .records()
            .collect::<core::result::Result<Vec<_>, _>>()?;
        let n = records.len();
        if n == 0 {
            return Err(ParseError::NoEquations.into());
        }

        let mut equations = Vec::with_capacity(n);
        for (i, record) in records.iter().enumerate() {
            let tokens: Vec<&str> = record.iter().filter(|t| !t.is_empty()).collect();
            equations.push(equation_from_tokens(&tokens, i + 1, n)?);
        }
        Ok(Self { equations })
    }

    /// Splits the system into the coefficient matrix and the constant vector.
    /// Every equation must carry exactly `len()` coefficients.
    pub fn to_parts(&self) -> Result<(DenseMatrix, Vec<f64>)> {
        let n = self.equations.len();
        if n == 0 {
            return Err(ParseError::NoEquations.into());
        }
        let mut data = Vec::with_capacity(n * n);
        for (i, equation) in self.equations.iter().enumerate() {
            if equation.coefficients.len() != n {
                return Err(ParseError::WrongTermCount {
                    equation: i + 1,
                    expected: n + 1,
                    found: equation.term_count(),
                }
                .into());
            }
            if let Some(bad) = equation
                .coefficients
                .iter()
                .chain(std::iter::once(&equation.constant))
                .find(|v| !v.is_finite())
            {
                return Err(ParseError::NonFiniteToken {
                    equation: i + 1,
                    token: bad.to_string(),
                }
                .into());
            }
            data.extend_from_slice(&equation.coefficients);
        }
        let constants = self.equations.iter().map(|e| e.constant).collect();
        let matrix = DenseMatrix::new(n, n, data)?;
        Ok((matrix, constants))
    }
}

fn is_equation_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}

/// Parses a single line such as `2 3 -1 5` (for `2x + 3y - z = 5`) belonging to
/// an `n`-equation system. Tokens are separated by whitespace or commas.
pub fn parse_equation(
    line: &str,
    equation: usize,
    n: usize,
) -> core::result::Result<Equation, ParseError> {
    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    equation_from_tokens(&tokens, equation, n)
}

fn equation_from_tokens(
    tokens: &[&str],
    equation: usize,
    n: usize,
) -> core::result::Result<Equation, ParseError> {
    let mut values = Vec::with_capacity(tokens.len());
    for token in tokens {
        let value: f64 = token.parse().map_err(|_| ParseError::InvalidToken {
            equation,
            token: token.to_string(),
        })?;
        if !value.is_finite() {
            return Err(ParseError::NonFiniteToken {
                equation,
                token: token.to_string(),
            });
        }
        values.push(value);
    }
    if values.len() != n + 1 {
        return Err(ParseError::WrongTermCount {
            equation,
            expected: n + 1,
            found: values.len(),
        });
    }
    let constant = values.pop().unwrap_or_default();
    Ok(Equation::new(values, constant))
}
