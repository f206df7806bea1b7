//! Field validators, as seen by the form style.
//!
//! Validation itself belongs to the host. The style only asks validators
//! two questions: do they enumerate options (which turns the field into a
//! select), and do they accept empty values (which makes an upload field
//! deletable).

/// Trait for field validators attached to a [`Field`](crate::Field).
pub trait Validator: Send + Sync {
    /// Returns the `(key, display name)` options this validator accepts.
    fn options(&self) -> Option<Vec<(String, String)>> {
        None
    }

    /// Returns whether several options may be chosen at once.
    fn is_multiple(&self) -> bool {
        false
    }

    /// Returns whether the validator lets an empty value through.
    fn allows_empty(&self) -> bool {
        false
    }
}

/// Validator that requires a non-empty value.
#[derive(Debug, Clone, Default)]
pub struct IsNotEmpty;

impl IsNotEmpty {
    /// Creates a new IsNotEmpty.
    pub fn new() -> Self {
        Self
    }
}

impl Validator for IsNotEmpty {}

/// Validator restricting a value to a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct IsIn {
    options: Vec<(String, String)>,
    multiple: bool,
}

impl IsIn {
    /// Creates a new IsIn with the given `(key, display name)` options.
    pub fn new(options: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            options: options
                .into_iter()
                .map(|(k, n)| (k.into(), n.into()))
                .collect(),
            multiple: false,
        }
    }

    /// Allows several options to be chosen.
    #[must_use]
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }
}

impl Validator for IsIn {
    fn options(&self) -> Option<Vec<(String, String)>> {
        Some(self.options.clone())
    }

    fn is_multiple(&self) -> bool {
        self.multiple
    }
}

/// Wraps another validator and additionally accepts empty values.
pub struct IsEmptyOr {
    inner: Box<dyn Validator>,
}

impl std::fmt::Debug for IsEmptyOr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IsEmptyOr").finish_non_exhaustive()
    }
}

impl IsEmptyOr {
    /// Creates a new IsEmptyOr around `inner`.
    pub fn new(inner: impl Validator + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Validator for IsEmptyOr {
    fn options(&self) -> Option<Vec<(String, String)>> {
        self.inner.options()
    }

    fn is_multiple(&self) -> bool {
        self.inner.is_multiple()
    }

    fn allows_empty(&self) -> bool {
        true
    }
}
