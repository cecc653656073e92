//! Proc macros for keypath.
//!
//! # Available Macros
//!
//! - [`KeyPaths`] - Generate a typed key path constructor for every named field

mod keypaths;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives key path constructors for a struct with named fields.
///
/// For every field `name: Type` the macro generates an associated function
/// `fn name() -> keypath::KeyPath<Self, Type>` with the field's visibility.
/// The generated key path clones the field on each read, so field types must
/// implement `Clone`.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `skip` | Do not generate a key path for this field |
/// | `rename = "..."` | Use a custom name for the generated function |
///
/// # Example
///
/// ```ignore
/// use keypath::{KeyPaths, SliceExt, Sort};
///
/// #[derive(KeyPaths)]
/// struct Person {
///     name: String,
///     age: u32,
///
///     #[key(rename = "surname")]
///     last_name: String,
///
///     #[key(skip)]
///     internal_id: u64,
/// }
///
/// let people = vec![/* ... */];
///
/// let adults = people.filter_where(&Person::age().greater_than(18));
/// let sorted = people.sorted_by_keys(&[
///     Sort::ascending(Person::age()),
///     Sort::ascending(Person::surname()),
/// ]);
/// ```
///
/// # Restrictions
///
/// Only non-generic structs with named fields are supported.
#[proc_macro_derive(KeyPaths, attributes(key))]
pub fn keypaths_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    keypaths::keypaths_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
