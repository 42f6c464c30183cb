//! Statement, branch and condition coverage.
//!
//! Everything here is derived from path signatures. The signature already
//! records every decision outcome, so raw triples are never re-evaluated.

use std::collections::BTreeSet;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use trifuzz_ir::PathSignature;

/// Statements of the classifier under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    InputPrint,
    TriangleInequality,
    NonTrianglePrint,
    EqualSidesCheck,
    TrianglePrint,
    EquilateralCheck,
    IsoscelesPrint,
    EquilateralPrint,
}

impl Statement {
    pub const ALL: [Statement; 8] = [
        Statement::InputPrint,
        Statement::TriangleInequality,
        Statement::NonTrianglePrint,
        Statement::EqualSidesCheck,
        Statement::TrianglePrint,
        Statement::EquilateralCheck,
        Statement::IsoscelesPrint,
        Statement::EquilateralPrint,
    ];

    /// Statements executed along a path.
    pub fn on_path(signature: PathSignature) -> &'static [Statement] {
        use self::Statement::*;
        match signature {
            PathSignature::NonTriangle => &[InputPrint, TriangleInequality, NonTrianglePrint],
            PathSignature::Scalene => &[
                InputPrint,
                TriangleInequality,
                EqualSidesCheck,
                TrianglePrint,
            ],
            PathSignature::Isosceles => &[
                InputPrint,
                TriangleInequality,
                EqualSidesCheck,
                EquilateralCheck,
                IsoscelesPrint,
            ],
            PathSignature::Equilateral => &[
                InputPrint,
                TriangleInequality,
                EqualSidesCheck,
                EquilateralCheck,
                EquilateralPrint,
            ],
        }
    }
}

/// One outcome of one decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOutcome {
    TriangleInequality(bool),
    EqualPair(bool),
    AllEqual(bool),
}

impl ConditionOutcome {
    pub const ALL: [ConditionOutcome; 6] = [
        ConditionOutcome::TriangleInequality(true),
        ConditionOutcome::TriangleInequality(false),
        ConditionOutcome::EqualPair(true),
        ConditionOutcome::EqualPair(false),
        ConditionOutcome::AllEqual(true),
        ConditionOutcome::AllEqual(false),
    ];

    /// Condition outcomes observed along a path.
    pub fn on_path(signature: PathSignature) -> Vec<ConditionOutcome> {
        let trace = signature.decisions();
        let mut outcomes = vec![ConditionOutcome::TriangleInequality(trace.triangle_inequality)];
        outcomes.extend(trace.equal_pair.map(ConditionOutcome::EqualPair));
        outcomes.extend(trace.all_equal.map(ConditionOutcome::AllEqual));
        outcomes
    }
}

/// `covered / total` for one coverage criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    pub covered: usize,
    pub total: usize,
}

impl Ratio {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.covered as f64 * 100.0 / self.total as f64
        }
    }

    pub fn is_full(&self) -> bool {
        self.covered == self.total
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageBreakdown {
    pub statements: Ratio,
    pub branches: Ratio,
    pub conditions: Ratio,
}

impl CoverageBreakdown {
    /// Compute all three criteria from the set of observed signatures.
    pub fn from_signatures(signatures: impl IntoIterator<Item = PathSignature>) -> Self {
        let paths: BTreeSet<PathSignature> = signatures.into_iter().collect();

        let statements: BTreeSet<Statement> = paths
            .iter()
            .flat_map(|sig| Statement::on_path(*sig).iter().copied())
            .collect();
        let conditions: BTreeSet<ConditionOutcome> = paths
            .iter()
            .flat_map(|sig| ConditionOutcome::on_path(*sig))
            .collect();

        Self {
            statements: Ratio {
                covered: statements.len(),
                total: Statement::ALL.len(),
            },
            branches: Ratio {
                covered: paths.len(),
                total: PathSignature::ALL.len(),
            },
            conditions: Ratio {
                covered: conditions.len(),
                total: ConditionOutcome::ALL.len(),
            },
        }
    }
}

/// A simple wall-clock timer for run duration.
#[derive(Debug)]
pub struct RunTimer {
    start: Instant,
}

impl RunTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_paths_give_full_coverage() {
        let breakdown = CoverageBreakdown::from_signatures(PathSignature::ALL);
        assert_eq!(breakdown.statements, Ratio { covered: 8, total: 8 });
        assert_eq!(breakdown.branches, Ratio { covered: 4, total: 4 });
        assert_eq!(breakdown.conditions, Ratio { covered: 6, total: 6 });
    }

    #[test]
    fn test_non_triangle_only() {
        let breakdown = CoverageBreakdown::from_signatures([PathSignature::NonTriangle]);
        assert_eq!(breakdown.statements.covered, 3);
        assert_eq!(breakdown.branches.covered, 1);
        assert_eq!(breakdown.conditions.covered, 1);
        assert!((breakdown.branches.percent() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_isosceles_path_conditions() {
        let outcomes = ConditionOutcome::on_path(PathSignature::Isosceles);
        assert_eq!(
            outcomes,
            vec![
                ConditionOutcome::TriangleInequality(true),
                ConditionOutcome::EqualPair(true),
                ConditionOutcome::AllEqual(false),
            ]
        );
    }

    #[test]
    fn test_duplicate_signatures_count_once() {
        let breakdown = CoverageBreakdown::from_signatures([
            PathSignature::Scalene,
            PathSignature::Scalene,
        ]);
        assert_eq!(breakdown.branches.covered, 1);
        assert_eq!(breakdown.statements.covered, 4);
    }

    #[test]
    fn test_empty_coverage() {
        let breakdown = CoverageBreakdown::from_signatures([]);
        assert_eq!(breakdown.statements.covered, 0);
        assert_eq!(breakdown.statements.percent(), 0.0);
        assert!(!breakdown.branches.is_full());
    }

    #[test]
    fn test_zero_total_percent() {
        let ratio = Ratio { covered: 0, total: 0 };
        assert_eq!(ratio.percent(), 0.0);
    }
}
