//! Functional combinators over a [`Collection`].
//!
//! Note the asymmetric callback contracts: [`Collection::map`] hands the
//! transform only the value, while [`Collection::filter`],
//! [`Collection::for_all`], [`Collection::exists`] and
//! [`Collection::partition`] hand their predicates both key and value.
//!
//! All combinators returning a collection build fresh storage; keys are
//! preserved.

use super::{Collection, Key, Value};

impl Collection {
    /// Replaces every value with `f(value)`, keeping keys and order.
    ///
    /// ```
    /// # use keyed_collection::{Collection, Value};
    /// let c = Collection::from_values([1, 2, 3]);
    /// let doubled = c.map(|v| Value::from(v.as_int().unwrap_or(0) * 2));
    /// assert_eq!(doubled, Collection::from_values([2, 4, 6]));
    /// ```
    pub fn map<F>(&self, mut f: F) -> Collection
    where
        F: FnMut(&Value) -> Value,
    {
        self.iter().map(|(key, value)| (key.clone(), f(value))).collect()
    }

    /// Keeps the entries for which `predicate(key, value)` holds.
    pub fn filter<P>(&self, mut predicate: P) -> Collection
    where
        P: FnMut(&Key, &Value) -> bool,
    {
        self.iter()
            .filter(|&(key, value)| predicate(key, value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns true if `predicate` holds for every entry.
    ///
    /// Stops at the first counterexample. Vacuously true when empty.
    pub fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Key, &Value) -> bool,
    {
        self.iter().all(|(key, value)| predicate(key, value))
    }

    /// Returns true if `predicate` holds for at least one entry.
    ///
    /// Stops at the first match.
    pub fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Key, &Value) -> bool,
    {
        self.iter().any(|(key, value)| predicate(key, value))
    }

    /// Splits into `(non_matches, matches)` according to `predicate`.
    ///
    /// Each side keeps the original keys and relative order.
    pub fn partition<P>(&self, mut predicate: P) -> (Collection, Collection)
    where
        P: FnMut(&Key, &Value) -> bool,
    {
        let mut non_matches = Collection::new();
        let mut matches = Collection::new();
        for (key, value) in self.iter() {
            let side = if predicate(key, value) {
                &mut matches
            } else {
                &mut non_matches
            };
            side.set(key.clone(), value.clone());
        }
        (non_matches, matches)
    }

    /// Key of the first entry strictly equal to `value`.
    pub fn index_of(&self, value: &Value) -> Option<&Key> {
        self.iter().find(|(_, v)| *v == value).map(|(key, _)| key)
    }

    /// Key-preserving copy of a run of entries.
    ///
    /// A negative `offset` counts from the end. `length` of `None` runs to
    /// the end; a negative `length` stops that many entries before the end.
    ///
    /// ```
    /// # use keyed_collection::{Collection, Key};
    /// let c = Collection::from_values(["a", "b", "c", "d"]);
    /// let tail = c.slice(-2, None);
    /// assert_eq!(tail.key_array(), vec![Key::Int(2), Key::Int(3)]);
    /// ```
    pub fn slice(&self, offset: i64, length: Option<i64>) -> Collection {
        let len = self.count() as i64;
        let start = if offset < 0 {
            (len + offset).max(0)
        } else {
            offset.min(len)
        };
        let end = match length {
            None => len,
            Some(length) if length < 0 => (len + length).max(start),
            Some(length) => start.saturating_add(length).min(len),
        };

        self.iter()
            .skip(start as usize)
            .take(end.saturating_sub(start) as usize)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Removes every entry whose value strictly equals an earlier entry's
    /// value. Surviving entries keep their keys and order.
    ///
    /// Values of different kinds never match: `1` and `"1"` are both kept,
    /// unlike a loose comparison that would treat them as duplicates.
    pub fn uniquify(&mut self) -> &mut Self {
        let mut seen: Vec<&Value> = Vec::with_capacity(self.count());
        let mut duplicates = Vec::new();
        for (key, value) in self.entries.iter() {
            if seen.contains(&value) {
                duplicates.push(key.clone());
            } else {
                seen.push(value);
            }
        }
        for key in &duplicates {
            self.remove(key);
        }
        self
    }
}
