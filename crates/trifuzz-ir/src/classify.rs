//! The triangle classifier under test.
//!
//! Pure and total: every `i32` triple yields a decision trace. Sums are
//! computed in `i64`, so no input overflows.

use crate::types::{DecisionTrace, TestCase, Triple};

/// Evaluate the classifier's decision points for `triple`.
///
/// Decisions are short-circuited the same way the branches nest: the
/// equal-pair test runs only for valid triangles, the all-equal test only
/// when some pair matched.
pub fn classify(triple: Triple) -> DecisionTrace {
    let a = i64::from(triple.a);
    let b = i64::from(triple.b);
    let c = i64::from(triple.c);

    let triangle_inequality = (a + b > c) && (a + c > b) && (b + c > a);
    if !triangle_inequality {
        return DecisionTrace {
            triangle_inequality,
            equal_pair: None,
            all_equal: None,
        };
    }

    let equal_pair = (a == b) || (a == c) || (b == c);
    if !equal_pair {
        return DecisionTrace {
            triangle_inequality,
            equal_pair: Some(false),
            all_equal: None,
        };
    }

    let all_equal = (a == b) && (a == c);
    DecisionTrace {
        triangle_inequality,
        equal_pair: Some(true),
        all_equal: Some(all_equal),
    }
}

/// Classify `triple` and package the result as a [`TestCase`].
pub fn execute(triple: Triple) -> TestCase {
    let signature = classify(triple).signature();
    TestCase {
        triple,
        classification: signature.classification(),
        signature,
    }
}
