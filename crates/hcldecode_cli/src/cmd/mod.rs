/// Shape-driven decode command.
pub mod decode;
/// Value and tree rendering helpers.
pub mod print;
/// Syntax tree dump command.
pub mod tree;
/// Shared file loading and JSON helpers.
pub mod util;

#[cfg(test)]
mod test_support;
