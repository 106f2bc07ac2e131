//! Reusable building blocks shared by puzzle units

pub mod remap;
pub mod tokens;
