use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classifier input: three sides, each an `i32`.
///
/// No range invariant. Whether the sides form a triangle is computed by
/// the classifier, not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

impl Triple {
    pub const fn new(a: i32, b: i32, c: i32) -> Self {
        Self { a, b, c }
    }

    pub fn components(&self) -> [i32; 3] {
        [self.a, self.b, self.c]
    }
}

impl From<(i32, i32, i32)> for Triple {
    fn from((a, b, c): (i32, i32, i32)) -> Self {
        Self { a, b, c }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.c)
    }
}

// ── Path signatures ──────────────────────────────────────────────────

/// Which sequence of decisions a classifier execution took.
///
/// Each symbol is the outcome (`T`/`F`) of one decision point, in order:
/// triangle inequality, any equal pair, all sides equal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum PathSignature {
    #[serde(rename = "F")]
    NonTriangle,
    #[serde(rename = "TF")]
    Scalene,
    #[serde(rename = "TTF")]
    Isosceles,
    #[serde(rename = "TTT")]
    Equilateral,
}

impl PathSignature {
    /// Every reachable signature, in decision-tree order.
    pub const ALL: [PathSignature; 4] = [
        PathSignature::NonTriangle,
        PathSignature::Scalene,
        PathSignature::Isosceles,
        PathSignature::Equilateral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PathSignature::NonTriangle => "F",
            PathSignature::Scalene => "TF",
            PathSignature::Isosceles => "TTF",
            PathSignature::Equilateral => "TTT",
        }
    }

    /// The label a classifier execution along this path produces.
    pub fn classification(&self) -> Classification {
        match self {
            PathSignature::NonTriangle => Classification::NonTriangle,
            PathSignature::Scalene => Classification::Triangle,
            PathSignature::Isosceles => Classification::Isosceles,
            PathSignature::Equilateral => Classification::Equilateral,
        }
    }

    /// Human description used in path distribution listings.
    pub fn description(&self) -> &'static str {
        match self {
            PathSignature::NonTriangle => "Non-triangle",
            PathSignature::Scalene => "Regular triangle",
            PathSignature::Isosceles => "Isosceles triangle",
            PathSignature::Equilateral => "Equilateral triangle",
        }
    }

    /// Decision outcomes encoded by this signature.
    pub fn decisions(&self) -> DecisionTrace {
        match self {
            PathSignature::NonTriangle => DecisionTrace {
                triangle_inequality: false,
                equal_pair: None,
                all_equal: None,
            },
            PathSignature::Scalene => DecisionTrace {
                triangle_inequality: true,
                equal_pair: Some(false),
                all_equal: None,
            },
            PathSignature::Isosceles => DecisionTrace {
                triangle_inequality: true,
                equal_pair: Some(true),
                all_equal: Some(false),
            },
            PathSignature::Equilateral => DecisionTrace {
                triangle_inequality: true,
                equal_pair: Some(true),
                all_equal: Some(true),
            },
        }
    }
}

impl fmt::Display for PathSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown path signature '{0}' (expected F, TF, TTF or TTT)")]
pub struct ParseSignatureError(pub String);

impl FromStr for PathSignature {
    type Err = ParseSignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => Ok(PathSignature::NonTriangle),
            "TF" => Ok(PathSignature::Scalene),
            "TTF" => Ok(PathSignature::Isosceles),
            "TTT" => Ok(PathSignature::Equilateral),
            other => Err(ParseSignatureError(other.to_string())),
        }
    }
}

/// Outcome of each decision point the classifier evaluated.
///
/// Decisions the classifier never reached are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecisionTrace {
    pub triangle_inequality: bool,
    pub equal_pair: Option<bool>,
    pub all_equal: Option<bool>,
}

impl DecisionTrace {
    /// Fold the evaluated decisions into a path signature.
    pub fn signature(&self) -> PathSignature {
        match (self.triangle_inequality, self.equal_pair, self.all_equal) {
            (false, _, _) => PathSignature::NonTriangle,
            (true, Some(true), Some(true)) => PathSignature::Equilateral,
            (true, Some(true), _) => PathSignature::Isosceles,
            (true, _, _) => PathSignature::Scalene,
        }
    }
}

// ── Classification labels ────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    NonTriangle,
    Triangle,
    Isosceles,
    Equilateral,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::NonTriangle => "non-triangle",
            Classification::Triangle => "triangle",
            Classification::Isosceles => "isosceles triangle",
            Classification::Equilateral => "equilateral triangle",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Test cases ───────────────────────────────────────────────────────

/// One classified input. Built once by [`crate::classify::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestCase {
    pub triple: Triple,
    pub classification: Classification,
    pub signature: PathSignature,
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} [Path: {}]",
            self.triple, self.classification, self.signature
        )
    }
}
