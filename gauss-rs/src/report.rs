use std::fmt;

use serde::Serialize;

/// Result of recomputing one original equation with the solution.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EquationCheck {
    /// 1-based equation number.
    pub equation: usize,
    pub lhs: f64,
    pub rhs: f64,
    pub residual: f64,
}

/// Everything a front end needs to show a solved system.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SolutionReport {
    pub solution: Vec<f64>,
    pub row_swaps: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<Vec<EquationCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_abs_residual: Option<f64>,
    #[serde(skip)]
    pub precision: usize,
}

impl SolutionReport {
    /// `(name, value)` pairs, named `x1..xn`.
    pub fn named_solution(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        self.solution
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("x{}", i + 1), *v))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision;
        writeln!(f, "Solution:")?;
        for (name, value) in self.named_solution() {
            writeln!(f, "{name} = {value:.p$}")?;
        }
        if let Some(checks) = &self.verification {
            writeln!(f, "Verification:")?;
            for check in checks {
                writeln!(
                    f,
                    "Equation {}: {:.p$} ≈ {} (residual {:.3e})",
                    check.equation, check.lhs, check.rhs, check.residual
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_six_decimals() {
        let report = SolutionReport {
            solution: vec![5.0, 3.0],
            row_swaps: 1,
            verification: None,
            max_abs_residual: None,
            precision: 6,
        };
        assert_eq!(report.to_string(), "Solution:\nx1 = 5.000000\nx2 = 3.000000\n");
    }

    #[test]
    fn test_display_verification() {
        let report = SolutionReport {
            solution: vec![2.0],
            row_swaps: 0,
            verification: Some(vec![EquationCheck {
                equation: 1,
                lhs: 4.0,
                rhs: 4.0,
                residual: 0.0,
            }]),
            max_abs_residual: Some(0.0),
            precision: 2,
        };
        let text = report.to_string();
        assert!(text.contains("x1 = 2.00\n"));
        assert!(text.contains("Equation 1: 4.00 ≈ 4 (residual 0.000e0)"));
    }

    #[test]
    fn test_json_skips_precision() {
        let report = SolutionReport {
            solution: vec![1.0],
            row_swaps: 0,
            verification: None,
            max_abs_residual: None,
            precision: 6,
        };
        let json = report.to_json().unwrap();
        assert!(json.contains("\"solution\""));
        assert!(!json.contains("precision"));
        assert!(!json.contains("verification"));
    }
}
