/// Numeric conversion and checked arithmetic helpers.
///
/// This module provides safe functions for converting between integer types
/// and for computing integer powers without silent wrapping. Use these
/// helpers whenever an out-of-range value must surface as an error instead
/// of corrupting a result.
pub mod num;
