//! Implementation of the `#[derive(KeyPaths)]` macro.
//!
//! This module provides derive macro support for the keypath crate,
//! generating one key path constructor per struct field.

mod attrs;
mod derive;

pub use derive::keypaths_derive_impl;
