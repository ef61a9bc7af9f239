// Domain-specific error types
pub mod errors;

// Model interface and feature layout
pub mod ml;

// Request schema and attribute domains
pub mod vehicle;
