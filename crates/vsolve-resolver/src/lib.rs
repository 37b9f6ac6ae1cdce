//! Constraint resolution engine: a linear merge scan of sorted package
//! indexes against a sorted constraint list, tracking which packages are
//! satisfied across indexes and reporting the ones that never are.

pub mod report;
pub mod resolver;
pub mod scan;
pub mod state;
