/// Field fixation command.
pub mod fixate;
/// Structure intersection command.
pub mod intersect;
/// Parse and re-serialize command.
pub mod parse;
/// Subset check command.
pub mod subset;
pub(crate) mod util;

#[cfg(test)]
pub(crate) mod test_support;
