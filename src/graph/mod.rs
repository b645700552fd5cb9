//! Word co-occurrence graph construction and representation.

pub mod builder;
pub mod csr;
pub mod invert;
