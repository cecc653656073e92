//! Typed key paths and their conversion into plain functions.
//!
//! A [`KeyPath`] is a first-class reference to "read something of type
//! `Value` out of a `Root`". It can name a stored field or a computed
//! property; either way it is just a shared, pure function value.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

/// A typed, reusable read of a `Value` out of a `Root`.
///
/// Key paths are immutable and cheap to clone. The value is produced by
/// value: stored fields are cloned and computed properties are evaluated on
/// each read. Optional fields simply use an `Option<_>` value type.
///
/// # Example
///
/// ```
/// use keypath::KeyPath;
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let age = KeyPath::new(|p: &Person| p.age);
/// let name = KeyPath::new(|p: &Person| p.name.clone());
///
/// let people = vec![
///     Person { name: "John".into(), age: 45 },
///     Person { name: "Tony".into(), age: 16 },
/// ];
///
/// let ages: Vec<u32> = people.iter().map(age.getter()).collect();
/// assert_eq!(ages, vec![45, 16]);
/// assert_eq!(name.get(&people[1]), "Tony");
/// ```
pub struct KeyPath<Root, Value> {
    get: Arc<dyn Fn(&Root) -> Value + Send + Sync>,
}

impl<Root, Value> KeyPath<Root, Value> {
    /// Creates a key path from a read function.
    pub fn new<F>(get: F) -> Self
    where
        F: Fn(&Root) -> Value + Send + Sync + 'static,
    {
        KeyPath { get: Arc::new(get) }
    }

    /// Reads the value out of `root`.
    pub fn get(&self, root: &Root) -> Value {
        (self.get)(root)
    }

    /// Borrows this key path as a plain unary function.
    ///
    /// Useful wherever the standard library expects a closure, such as
    /// `Iterator::map`.
    pub fn getter(&self) -> impl Fn(&Root) -> Value + '_ {
        move |root| self.get(root)
    }

    /// Converts this key path into an owned unary function.
    pub fn into_fn(self) -> impl Fn(&Root) -> Value {
        move |root| (self.get)(root)
    }
}

impl<Root: 'static, Value: 'static> KeyPath<Root, Value> {
    /// Extends this key path with one that reads from its value.
    ///
    /// ```
    /// use keypath::KeyPath;
    ///
    /// struct Address { city: String }
    /// struct User { address: Address }
    ///
    /// let address = KeyPath::new(|u: &User| Address { city: u.address.city.clone() });
    /// let city = KeyPath::new(|a: &Address| a.city.clone());
    ///
    /// let user_city = address.appending(&city);
    /// let user = User { address: Address { city: "Logroño".into() } };
    /// assert_eq!(user_city.get(&user), "Logroño");
    /// ```
    pub fn appending<Next: 'static>(&self, next: &KeyPath<Value, Next>) -> KeyPath<Root, Next> {
        let first = self.clone();
        let next = next.clone();
        KeyPath::new(move |root| next.get(&first.get(root)))
    }

    /// Derives a computed key path by transforming this one's value.
    pub fn map<Next, F>(&self, f: F) -> KeyPath<Root, Next>
    where
        F: Fn(Value) -> Next + Send + Sync + 'static,
    {
        let first = self.clone();
        KeyPath::new(move |root| f(first.get(root)))
    }
}

impl<Root, Value> Clone for KeyPath<Root, Value> {
    fn clone(&self) -> Self {
        KeyPath {
            get: Arc::clone(&self.get),
        }
    }
}

impl<Root, Value> fmt::Debug for KeyPath<Root, Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPath")
            .field("root", &type_name::<Root>())
            .field("value", &type_name::<Value>())
            .finish()
    }
}

/// Converts a key path into a plain unary function.
pub fn get<Root, Value>(key: &KeyPath<Root, Value>) -> impl Fn(&Root) -> Value + '_ {
    key.getter()
}

/// Keeps the items whose boolean key path reads `true`, in input order.
pub fn filter_by<'a, T>(items: &'a [T], key: &KeyPath<T, bool>) -> Vec<&'a T> {
    items.iter().filter(|item| key.get(item)).collect()
}

/// Reads `key` out of every item, one value per item, in input order.
pub fn map_by<T, V>(items: &[T], key: &KeyPath<T, V>) -> Vec<V> {
    items.iter().map(key.getter()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Profile {
        name: String,
        nickname: Option<String>,
        visits: i64,
    }

    fn sample() -> Vec<Profile> {
        vec![
            Profile {
                name: "Ada".to_string(),
                nickname: None,
                visits: 3,
            },
            Profile {
                name: "Grace".to_string(),
                nickname: Some("Amazing".to_string()),
                visits: 8,
            },
        ]
    }

    #[test]
    fn get_reads_stored_field() {
        let visits = KeyPath::new(|p: &Profile| p.visits);
        let profiles = sample();

        assert_eq!(visits.get(&profiles[0]), 3);
        assert_eq!(visits.get(&profiles[1]), 8);
    }

    #[test]
    fn computed_property() {
        let is_even = KeyPath::new(|n: &i32| n % 2 == 0);
        let data = [1, 2, 3, 4, 5, 6, 7, 8, 9];

        let evens: Vec<i32> = filter_by(&data, &is_even).into_iter().copied().collect();
        assert_eq!(evens, vec![2, 4, 6, 8]);
    }

    #[test]
    fn optional_value_passes_through() {
        let nickname = KeyPath::new(|p: &Profile| p.nickname.clone());
        let profiles = sample();

        assert_eq!(
            map_by(&profiles, &nickname),
            vec![None, Some("Amazing".to_string())]
        );
    }

    #[test]
    fn getter_plugs_into_iterator_map() {
        let description = KeyPath::new(|n: &i32| n.to_string());
        let data = [1, 2, 3];

        let described: Vec<String> = data.iter().map(get(&description)).collect();
        assert_eq!(described, vec!["1", "2", "3"]);
    }

    #[test]
    fn into_fn_outlives_key_path_binding() {
        let f = {
            let name = KeyPath::new(|p: &Profile| p.name.clone());
            name.into_fn()
        };

        assert_eq!(f(&sample()[1]), "Grace");
    }

    #[test]
    fn appending_and_map() {
        let name = KeyPath::new(|p: &Profile| p.name.clone());
        let len = KeyPath::new(|s: &String| s.len());

        let name_len = name.appending(&len);
        let name_is_empty = name.map(|n| n.is_empty());

        let profiles = sample();
        assert_eq!(name_len.get(&profiles[1]), 5);
        assert!(!name_is_empty.get(&profiles[0]));
    }

    #[test]
    fn map_by_preserves_length_and_order() {
        let profiles = sample();
        let names = map_by(&profiles, &KeyPath::new(|p: &Profile| p.name.clone()));

        assert_eq!(names.len(), profiles.len());
        assert_eq!(names, vec!["Ada", "Grace"]);
    }

    #[test]
    fn map_by_keeps_duplicates() {
        let data = [1, 1, 2];
        let doubled = map_by(&data, &KeyPath::new(|n: &i32| n * 2));
        assert_eq!(doubled, vec![2, 2, 4]);
    }

    #[test]
    fn clone_shares_function() {
        let visits = KeyPath::new(|p: &Profile| p.visits);
        let copy = visits.clone();
        let profiles = sample();

        assert_eq!(visits.get(&profiles[0]), copy.get(&profiles[0]));
    }

    #[test]
    fn debug_names_types() {
        let visits = KeyPath::new(|p: &Profile| p.visits);
        let debug = format!("{:?}", visits);

        assert!(debug.contains("Profile"));
        assert!(debug.contains("i64"));
    }
}
