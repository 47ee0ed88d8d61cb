// crates/profile/src/lib.rs

pub mod application;
pub mod domain;

#[cfg(test)]
pub(crate) mod utils;
