//! Registry of part footprints, grouped by category.
//!
//! A category (`button`, `jack`, `usb_c`, ...) holds one or more named part
//! types. Building a part from a category without naming a type falls back
//! to the category's default type, or to its only type.

use std::rc::Rc;

use indexmap::IndexMap;
use log::debug;
use thiserror::Error;

use panelkit_core::footprint::PartFootprint;

/// Errors raised by [`PartCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Invalid part category `{0}`: expected an identifier")]
    InvalidCategory(String),

    #[error("Part type `{part_type}` is already registered in category `{category}`")]
    AlreadyRegistered { category: String, part_type: String },

    #[error("Unknown part category `{0}`")]
    UnknownCategory(String),

    #[error("Unknown part type `{part_type}` in category `{category}`")]
    UnknownType { category: String, part_type: String },

    #[error("Category `{0}` has several part types and no default type")]
    NoDefaultType(String),
}

#[derive(Debug, Default)]
struct Category {
    types: IndexMap<String, Rc<PartFootprint>>,
    default_type: Option<String>,
}

/// Part footprints by category and type, in registration order.
///
/// # Examples
///
/// ```
/// use panelkit::catalog::PartCatalog;
/// use panelkit_core::footprint::PartFootprint;
/// use panelkit_core::geometry::Size;
///
/// let mut catalog = PartCatalog::new();
/// catalog
///     .register("button", "SPST", PartFootprint::new(Size::new(12.0, 12.0), Size::new(8.0, 8.0)))
///     .unwrap();
///
/// let button = catalog.build("button", None).unwrap();
/// assert_eq!(*button, PartFootprint::new(Size::new(12.0, 12.0), Size::new(8.0, 8.0)));
/// ```
#[derive(Debug, Default)]
pub struct PartCatalog {
    categories: IndexMap<String, Category>,
}

impl PartCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a part type, creating its category on first use.
    ///
    /// # Errors
    ///
    /// [`CatalogError::InvalidCategory`] when `category` is not an
    /// identifier, [`CatalogError::AlreadyRegistered`] when the type exists.
    pub fn register(
        &mut self,
        category: &str,
        part_type: &str,
        footprint: PartFootprint,
    ) -> Result<(), CatalogError> {
        if !is_identifier(category) {
            return Err(CatalogError::InvalidCategory(category.to_string()));
        }

        let entry = self.categories.entry(category.to_string()).or_default();
        if entry.types.contains_key(part_type) {
            return Err(CatalogError::AlreadyRegistered {
                category: category.to_string(),
                part_type: part_type.to_string(),
            });
        }

        entry.types.insert(part_type.to_string(), Rc::new(footprint));
        debug!(category, part_type; "Registered part type");
        Ok(())
    }

    /// Chooses the type [`Self::build`] uses when none is given.
    pub fn set_default_type(&mut self, category: &str, part_type: &str) -> Result<(), CatalogError> {
        let entry = self.category_mut(category)?;
        if !entry.types.contains_key(part_type) {
            return Err(CatalogError::UnknownType {
                category: category.to_string(),
                part_type: part_type.to_string(),
            });
        }
        entry.default_type = Some(part_type.to_string());
        Ok(())
    }

    pub fn default_type(&self, category: &str) -> Option<&str> {
        self.categories
            .get(category)
            .and_then(|entry| entry.default_type.as_deref())
    }

    /// Returns the footprint of a part type.
    ///
    /// Without a `part_type`, uses the default type, or the only registered
    /// type of the category.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnknownCategory`], [`CatalogError::UnknownType`], or
    /// [`CatalogError::NoDefaultType`] when no type can be chosen.
    pub fn build(
        &self,
        category: &str,
        part_type: Option<&str>,
    ) -> Result<Rc<PartFootprint>, CatalogError> {
        let entry = self
            .categories
            .get(category)
            .ok_or_else(|| CatalogError::UnknownCategory(category.to_string()))?;

        let part_type = match part_type {
            Some(part_type) => part_type,
            None => match (&entry.default_type, entry.types.len()) {
                (Some(default_type), _) => default_type.as_str(),
                (None, 1) => entry.types.keys().next().map(String::as_str).unwrap_or_default(),
                (None, _) => return Err(CatalogError::NoDefaultType(category.to_string())),
            },
        };

        entry
            .types
            .get(part_type)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownType {
                category: category.to_string(),
                part_type: part_type.to_string(),
            })
    }

    /// Registered types of a category, in registration order.
    pub fn list_types(&self, category: &str) -> Result<Vec<&str>, CatalogError> {
        let entry = self
            .categories
            .get(category)
            .ok_or_else(|| CatalogError::UnknownCategory(category.to_string()))?;
        Ok(entry.types.keys().map(String::as_str).collect())
    }

    /// Category names, in registration order.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn category_mut(&mut self, category: &str) -> Result<&mut Category, CatalogError> {
        self.categories
            .get_mut(category)
            .ok_or_else(|| CatalogError::UnknownCategory(category.to_string()))
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
