//! Public library API for ordered, named, typed field structures.

/// Structure store, typed values, set algebra, fixation, and the text format.
pub mod structure;
