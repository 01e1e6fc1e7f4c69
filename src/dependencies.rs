//! Named values handed to handler constructors.

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::MediatorError;

/// Immutable map of dependency name to value.
///
/// Built once with the `with*` methods and then shared by the mediator it is
/// injected into. Values are stored as `Arc<dyn Any + Send + Sync>` and
/// recovered by name and type.
///
/// ```
/// use request_mediator::Dependencies;
/// use std::sync::Arc;
///
/// let deps = Dependencies::new()
///     .with("retries", 3u32)
///     .with("prefix", "job-".to_string());
///
/// let retries: Arc<u32> = deps.get("retries").unwrap();
/// assert_eq!(*retries, 3);
/// assert!(deps.get::<u32>("prefix").is_err());
/// ```
#[derive(Clone, Default)]
pub struct Dependencies {
    values: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl Dependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named value, replacing any value already stored under `name`.
    pub fn with<T: Send + Sync + 'static>(self, name: impl Into<String>, value: T) -> Self {
        self.with_arc(name, Arc::new(value))
    }

    /// Adds an `Arc`-wrapped value without wrapping it again.
    pub fn with_arc<T: Send + Sync + 'static>(mut self, name: impl Into<String>, value: Arc<T>) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Looks up the value stored under `name`.
    ///
    /// # Errors
    ///
    /// - [`MediatorError::MissingDependency`] if nothing was injected under `name`
    /// - [`MediatorError::DependencyTypeMismatch`] if the stored value is not a `T`
    pub fn get<T: Send + Sync + 'static>(&self, name: &str) -> Result<Arc<T>, MediatorError> {
        let value = self
            .values
            .get(name)
            .cloned()
            .ok_or_else(|| MediatorError::MissingDependency { name: name.to_string() })?;

        value
            .downcast::<T>()
            .map_err(|_| MediatorError::DependencyTypeMismatch {
                name: name.to_string(),
                expected: type_name::<T>(),
            })
    }

    pub fn get_cloned<T: Send + Sync + Clone + 'static>(&self, name: &str) -> Result<T, MediatorError> {
        let arc = self.get::<T>(name)?;
        Ok((*arc).clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Dependencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("Dependencies").field("names", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct SumUtils {
        offset: i32,
    }

    #[test]
    fn test_empty() {
        let deps = Dependencies::new();
        assert!(deps.is_empty());
        assert_eq!(deps.len(), 0);
        assert!(!deps.contains("anything"));
    }

    #[test]
    fn test_with_and_get() {
        let deps = Dependencies::new().with("sum_utils", SumUtils { offset: 1 });

        let utils: Arc<SumUtils> = deps.get("sum_utils").unwrap();
        assert_eq!(utils.offset, 1);
        assert!(deps.contains("sum_utils"));
        assert_eq!(deps.len(), 1);
    }

    #[test]
    fn test_with_arc_shares_value() {
        let utils = Arc::new(SumUtils { offset: 2 });
        let deps = Dependencies::new().with_arc("sum_utils", utils.clone());

        let retrieved: Arc<SumUtils> = deps.get("sum_utils").unwrap();
        assert!(Arc::ptr_eq(&utils, &retrieved));
    }

    #[test]
    fn test_get_missing() {
        let deps = Dependencies::new();
        assert_eq!(
            deps.get::<SumUtils>("sum_utils").unwrap_err(),
            MediatorError::MissingDependency {
                name: "sum_utils".to_string()
            }
        );
    }

    #[test]
    fn test_get_wrong_type() {
        let deps = Dependencies::new().with("sum_utils", 5u8);
        assert_eq!(
            deps.get::<u16>("sum_utils").unwrap_err(),
            MediatorError::DependencyTypeMismatch {
                name: "sum_utils".to_string(),
                expected: "u16"
            }
        );
    }

    #[test]
    fn test_get_cloned() {
        let deps = Dependencies::new().with("sum_utils", SumUtils { offset: 7 });
        let utils: SumUtils = deps.get_cloned("sum_utils").unwrap();
        assert_eq!(utils, SumUtils { offset: 7 });
    }

    #[test]
    fn test_same_name_replaces() {
        let deps = Dependencies::new().with("n", 1i32).with("n", 2i32);
        assert_eq!(deps.len(), 1);
        assert_eq!(*deps.get::<i32>("n").unwrap(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Dependencies::new().with("a", 1i32);
        let extended = original.clone().with("b", 2i32);

        assert_eq!(original.len(), 1);
        assert_eq!(extended.len(), 2);
        assert!(!original.contains("b"));
    }

    #[test]
    fn test_debug_lists_sorted_names() {
        let deps = Dependencies::new().with("b", 1i32).with("a", 2i32);
        assert_eq!(format!("{:?}", deps), r#"Dependencies { names: ["a", "b"] }"#);
    }
}
