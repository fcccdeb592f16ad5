use std::collections::HashMap;

/// The variable table of one program run.
///
/// Maps case-sensitive names to the integer they were last assigned. A binding
/// is only ever written after its right-hand side evaluated successfully, and
/// bindings are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: HashMap<String, i64>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value currently bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.bindings.get(name).copied()
    }

    /// Binds `name` to `value`, returning the value it replaced.
    ///
    /// # Example
    /// ```
    /// use catlang::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// assert_eq!(env.assign("x", 5), None);
    /// assert_eq!(env.assign("x", 6), Some(5));
    /// assert_eq!(env.get("x"), Some(6));
    /// assert_eq!(env.get("X"), None);
    /// ```
    pub fn assign(&mut self, name: &str, value: i64) -> Option<i64> {
        self.bindings.insert(name.to_string(), value)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no variable has been bound yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the bindings in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Returns the bindings sorted by name, for stable reports.
    ///
    /// # Example
    /// ```
    /// use catlang::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.assign("y", 7);
    /// env.assign("x", 5);
    /// assert_eq!(env.sorted(), vec![("x", 5), ("y", 7)]);
    /// ```
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, i64)> {
        let mut bindings: Vec<_> = self.iter().collect();
        bindings.sort_unstable_by_key(|&(name, _)| name);
        bindings
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in self.sorted() {
            writeln!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}
