use std::collections::HashMap;

use insertkit_core::ConfigError;
use tracing::debug;

use crate::model::{InsertId, InsertSpec};

/// Read-only collection of insert specifications keyed by identifier
///
/// Preserves insertion order so the selection dialog lists inserts in the
/// order the configuration file declares them. Built once at load time and
/// treated as immutable afterwards; safe to share across invocations.
#[derive(Debug, Clone, Default)]
pub struct InsertCatalog {
    entries: HashMap<InsertId, InsertSpec>,
    order: Vec<InsertId>,
}

impl InsertCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a specification, validating it first
    ///
    /// Fails with [`ConfigError::DuplicateInsert`] when the identifier is
    /// already present, leaving the catalog unchanged.
    pub fn insert(&mut self, spec: InsertSpec) -> Result<(), ConfigError> {
        spec.validate()?;
        if self.entries.contains_key(&spec.id) {
            return Err(ConfigError::DuplicateInsert(spec.id.to_string()));
        }
        debug!(insert = %spec.id, custom = spec.custom, "catalog entry added");
        self.order.push(spec.id.clone());
        self.entries.insert(spec.id.clone(), spec);
        Ok(())
    }

    /// Add a statically known specification without duplicate checking.
    /// Reserved for the builtin library, whose identifiers are unique.
    pub(crate) fn insert_unchecked(&mut self, spec: InsertSpec) {
        self.order.push(spec.id.clone());
        self.entries.insert(spec.id.clone(), spec);
    }

    /// Look up a specification by identifier
    pub fn get(&self, id: &InsertId) -> Option<&InsertSpec> {
        self.entries.get(id)
    }

    /// Whether the catalog contains the identifier
    pub fn contains(&self, id: &InsertId) -> bool {
        self.entries.contains_key(id)
    }

    /// Specifications in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &InsertSpec> {
        self.order.iter().filter_map(move |id| self.entries.get(id))
    }

    /// Identifiers in declaration order
    pub fn ids(&self) -> impl Iterator<Item = &InsertId> {
        self.order.iter()
    }

    /// The first declared specification, the dialog's fallback selection
    pub fn first(&self) -> Option<&InsertSpec> {
        self.order.first().and_then(|id| self.entries.get(id))
    }

    /// Number of specifications
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut catalog = InsertCatalog::new();
        catalog
            .insert(InsertSpec::new("M3 x 5.7mm (standard)", 4.4, 5.7, 1.6))
            .unwrap();

        let id = InsertId::from("M3 x 5.7mm (standard)");
        let spec = catalog.get(&id).unwrap();
        assert_eq!(spec.bore_diameter, 4.4);
        assert_eq!(spec.insert_length, 5.7);
        assert!(catalog.contains(&id));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let mut catalog = InsertCatalog::new();
        catalog
            .insert(InsertSpec::new("M6 x 12.7mm", 8.0, 12.7, 3.0))
            .unwrap();

        let err = catalog
            .insert(InsertSpec::new("M6 x 12.7mm", 8.1, 12.7, 3.0))
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateInsert("M6 x 12.7mm".to_string()));
        // Original entry is untouched
        assert_eq!(
            catalog.get(&InsertId::from("M6 x 12.7mm")).unwrap().bore_diameter,
            8.0
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_invalid_spec_rejected() {
        let mut catalog = InsertCatalog::new();
        let err = catalog
            .insert(InsertSpec::new("Bad", -1.0, 5.7, 1.6))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_declaration_order_preserved() {
        let mut catalog = InsertCatalog::new();
        catalog
            .insert(InsertSpec::new("M5 x 9.5mm (standard)", 6.4, 9.5, 2.5))
            .unwrap();
        catalog
            .insert(InsertSpec::new("M2 x 3mm", 3.2, 3.0, 1.5))
            .unwrap();
        catalog
            .insert(InsertSpec::new("M4 x 4mm (short)", 5.6, 4.0, 2.0))
            .unwrap();

        let names: Vec<&str> = catalog.ids().map(|id| id.as_str()).collect();
        assert_eq!(
            names,
            vec!["M5 x 9.5mm (standard)", "M2 x 3mm", "M4 x 4mm (short)"]
        );
        assert_eq!(catalog.first().unwrap().id.as_str(), "M5 x 9.5mm (standard)");
    }
}
