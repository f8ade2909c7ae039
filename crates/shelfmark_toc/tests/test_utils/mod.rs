//! Test utilities for pipeline and service tests.

pub mod mock_generator;
pub mod static_source;

#[allow(unused_imports)]
pub use mock_generator::{MockBehavior, MockGenerator, MockResponse};
#[allow(unused_imports)]
pub use static_source::{Answer, StaticSource};

use shelfmark_core::{Outline, OutlineNode};

/// Build an outline from `(title, level)` pairs.
#[allow(dead_code)]
pub fn outline(entries: &[(&str, u32)]) -> Outline {
    entries
        .iter()
        .map(|(title, level)| OutlineNode::new(title, *level).expect("valid node"))
        .collect()
}
