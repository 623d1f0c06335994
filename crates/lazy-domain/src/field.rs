//! Field module - three-valued inputs as submitted by the host

/// An input value in a submission
///
/// A plain `Option` cannot tell "the caller said nothing" apart from "the
/// caller said null". Carry-forward depends on that difference, so inputs
/// stay three-valued until they are resolved against the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// The caller did not mention the field
    #[default]
    Omitted,

    /// The caller explicitly set the field to null
    Cleared,

    /// The caller supplied a value
    Value(T),
}

impl<T> Field<T> {
    /// Collapse the field against the value stored for it
    ///
    /// - `Omitted` carries `stored` forward
    /// - `Cleared` yields `None`
    /// - `Value(v)` yields `Some(v)`
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_domain::Field;
    ///
    /// let stored = Some("kept".to_string());
    /// assert_eq!(Field::Omitted.resolve(stored.clone()), stored);
    /// assert_eq!(Field::<String>::Cleared.resolve(stored.clone()), None);
    /// assert_eq!(
    ///     Field::Value("new".to_string()).resolve(stored),
    ///     Some("new".to_string())
    /// );
    /// ```
    pub fn resolve(self, stored: Option<T>) -> Option<T> {
        match self {
            Field::Omitted => stored,
            Field::Cleared => None,
            Field::Value(v) => Some(v),
        }
    }
}

impl From<&str> for Field<String> {
    fn from(value: &str) -> Self {
        Field::Value(value.to_string())
    }
}
