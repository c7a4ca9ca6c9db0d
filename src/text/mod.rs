//! Font resolution and text measurement.
//!
//! Layout code only sees the [`FontMetrics`] capability, so the algorithms are independent of the
//! font backend. Two implementations exist: shaped outline fonts through `parley`, and a built-in
//! fixed-advance block face used when no system font can be found.

pub(crate) mod engine;
pub(crate) mod metrics;
pub(crate) mod typeface;
