/// Rendering of the syntax tree as source text.
///
/// Walks statements recursively and delegates the per-language pieces to
/// [`target::Target`].
pub mod core;

/// The supported output languages and their formatting rules.
pub mod target;
