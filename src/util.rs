/// Numeric conversion and formatting helpers.
///
/// Provides the display form of numbers used when a program prints a value.
pub mod num;
