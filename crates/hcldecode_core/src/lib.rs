//! Public library API for decoding HCL syntax trees into typed and dynamic values.

/// Tree model, parser, output shapes, and the shape-driven decoder.
pub mod hcl;
