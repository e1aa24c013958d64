/// The runtime value type.
///
/// Defines the `Value` enum with its error, integer and string variants,
/// checked accessors and the rendering used by `print`.
pub mod core;
