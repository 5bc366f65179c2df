/// The runtime value type.
///
/// Defines `Value`, the tagged union of numbers and text that variables hold
/// and expressions produce.
pub mod core;
