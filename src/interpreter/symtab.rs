use std::collections::HashMap;

use crate::error::TableError;

/// A mutable mapping from variable names to integer values.
///
/// Names are unique; binding an existing name overwrites its value.
/// Entries persist for the lifetime of the table and cannot be removed.
/// Enumeration order is unspecified.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: HashMap<String, i64>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a symbol table from bootstrap source text.
    ///
    /// The format is one `name value` pair per line, separated by
    /// whitespace. Lines starting with `#` are skipped. The name must
    /// start with a letter and the value must be a 64-bit integer; fields
    /// after the value are ignored.
    ///
    /// # Parameters
    /// - `source`: The contents of a bootstrap file.
    ///
    /// # Returns
    /// The populated table.
    ///
    /// # Errors
    /// - `TableError::MalformedEntry` if a non-comment line does not hold
    ///   a name and an integer value.
    /// - `TableError::InvalidSymbolName` if a name does not start with a
    ///   letter.
    ///
    /// ## Example
    /// ```
    /// use repol::interpreter::symtab::SymbolTable;
    ///
    /// let table = SymbolTable::from_source("x 10\ny -3").unwrap();
    ///
    /// assert_eq!(table.get("x"), Some(10));
    /// assert_eq!(table.get("y"), Some(-3));
    /// ```
    pub fn from_source(source: &str) -> Result<Self, TableError> {
        let mut table = Self::new();

        for (index, entry) in source.lines().enumerate() {
            let line = index + 1;
            if entry.starts_with('#') {
                continue;
            }

            let mut fields = entry.split_whitespace();
            let (Some(name), Some(value)) = (fields.next(), fields.next()) else {
                return Err(TableError::MalformedEntry { line });
            };

            if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
                return Err(TableError::InvalidSymbolName { name: name.to_string(),
                                                           line });
            }

            let value = value.parse()
                             .map_err(|_| TableError::MalformedEntry { line })?;

            table.set(name, value);
        }

        Ok(table)
    }

    /// Looks up the value bound to `name`.
    /// ## Example
    /// ```
    /// use repol::interpreter::symtab::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    /// table.set("x", 7);
    ///
    /// assert_eq!(table.get("x"), Some(7));
    /// assert_eq!(table.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries.get(name).copied()
    }

    /// Binds `name` to `value`, creating the entry if it does not exist
    /// and overwriting it otherwise.
    pub fn set(&mut self, name: &str, value: i64) {
        self.entries.insert(name.to_string(), value);
    }

    /// Iterates over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
