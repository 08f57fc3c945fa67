use insertkit_core::limits;
use insertkit_core::ConfigError;
use serde::{Deserialize, Serialize};

/// Insert identifier, e.g. `"M3 x 5.7mm (standard)"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct InsertId(pub String);

impl InsertId {
    /// Create an identifier from any string-like value
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is blank (no insert selected)
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for InsertId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for InsertId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Dimensional specification for one heat-set insert
///
/// All dimensions are millimeters. Immutable once loaded into a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertSpec {
    /// Unique identifier within the catalog
    pub id: InsertId,
    /// Diameter of the bore that receives the insert
    pub bore_diameter: f64,
    /// Length of the insert body
    pub insert_length: f64,
    /// Advisory minimum wall thickness around the bore; not used in
    /// geometry derivation
    pub min_wall_thickness: f64,
    /// Whether this is a user-defined entry rather than a builtin one
    #[serde(default)]
    pub custom: bool,
}

impl InsertSpec {
    /// Create a builtin specification
    pub fn new(
        id: impl Into<InsertId>,
        bore_diameter: f64,
        insert_length: f64,
        min_wall_thickness: f64,
    ) -> Self {
        Self {
            id: id.into(),
            bore_diameter,
            insert_length,
            min_wall_thickness,
            custom: false,
        }
    }

    /// Validate dimensions against the shared limits
    ///
    /// Bore diameter and insert length must be strictly positive; the wall
    /// thickness may be zero. Errors name the insert and the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id.is_blank() {
            return Err(ConfigError::InvalidValue {
                section: "inserts".to_string(),
                key: "name".to_string(),
                reason: "identifier is empty".to_string(),
            });
        }
        check_dimension(
            self.id.as_str(),
            "bore_diameter",
            self.bore_diameter,
            limits::MAX_BORE_DIAMETER,
        )?;
        check_dimension(
            self.id.as_str(),
            "insert_length",
            self.insert_length,
            limits::MAX_INSERT_LENGTH,
        )?;
        if !(0.0..=limits::MAX_WALL_THICKNESS).contains(&self.min_wall_thickness)
            || !self.min_wall_thickness.is_finite()
        {
            return Err(ConfigError::InvalidValue {
                section: self.id.to_string(),
                key: "min_wall_thickness".to_string(),
                reason: format!(
                    "{} mm is outside 0-{} mm",
                    self.min_wall_thickness,
                    limits::MAX_WALL_THICKNESS
                ),
            });
        }
        Ok(())
    }
}

fn check_dimension(section: &str, key: &str, value: f64, max: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 || value > max {
        return Err(ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            reason: format!("{} mm is outside 0-{} mm", value, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_spec() {
        let spec = InsertSpec::new("M3 x 5.7mm (standard)", 4.4, 5.7, 1.6);
        assert!(spec.validate().is_ok());
        assert!(!spec.custom);
    }

    #[test]
    fn test_negative_bore_diameter_rejected() {
        let spec = InsertSpec::new("Bad M3", -4.4, 5.7, 1.6);
        let err = spec.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref key, .. } if key == "bore_diameter"
        ));
    }

    #[test]
    fn test_zero_insert_length_rejected() {
        let spec = InsertSpec::new("Bad M3", 4.4, 0.0, 1.6);
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let spec = InsertSpec::new("Giant", 80.0, 5.7, 1.6);
        assert!(spec.validate().is_err());

        let spec = InsertSpec::new("Long", 4.4, 150.0, 1.6);
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_zero_wall_thickness_allowed() {
        let spec = InsertSpec::new("No wall info", 4.4, 5.7, 0.0);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_blank_identifier_rejected() {
        let spec = InsertSpec::new("  ", 4.4, 5.7, 1.6);
        assert!(spec.validate().is_err());
    }
}
