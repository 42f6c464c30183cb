pub mod classify;
pub mod types;

pub use classify::{classify, execute};
pub use types::{
    Classification, DecisionTrace, ParseSignatureError, PathSignature, TestCase, Triple,
};
