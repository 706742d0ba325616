//! Utility modules for greenapi

pub mod mime;
