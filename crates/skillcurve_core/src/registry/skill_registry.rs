//! Immutable, insertion-ordered skill registry.
//!
//! # Responsibility
//! - Admit skill definitions only after name and parameter validation.
//! - Preserve insertion order as the stable display order.
//!
//! # Invariants
//! - Names are trimmed, non-blank and unique.
//! - Every stored definition satisfies `validate_parameters` under the
//!   registry's ceiling policy.
//! - A built registry is never mutated; clone it for per-session changes.

use crate::model::skill::{CeilingPolicy, SkillDefinition, SkillField, SkillValidationError};
use log::{info, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Registry construction errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Name is blank after trim or contains control characters.
    InvalidName(String),
    DuplicateName(String),
    /// A numeric field violates its domain.
    InvalidParameter {
        skill: String,
        error: SkillValidationError,
    },
}

impl RegistryError {
    /// Offending field for parameter errors.
    pub fn field(&self) -> Option<SkillField> {
        match self {
            Self::InvalidParameter { error, .. } => Some(error.field()),
            Self::InvalidName(_) | Self::DuplicateName(_) => None,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => "invalid_name",
            Self::DuplicateName(_) => "duplicate_name",
            Self::InvalidParameter { .. } => "invalid_parameter",
        }
    }
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(value) => write!(f, "skill name is invalid: `{value}`"),
            Self::DuplicateName(value) => write!(f, "skill name already registered: {value}"),
            Self::InvalidParameter { skill, error } => write!(
                f,
                "skill `{skill}` has invalid {}: {error}",
                error.field()
            ),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidParameter { error, .. } => Some(error),
            Self::InvalidName(_) | Self::DuplicateName(_) => None,
        }
    }
}

/// Validated table of skill definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRegistry {
    definitions: Vec<SkillDefinition>,
    index: HashMap<String, usize>,
    ceiling_policy: CeilingPolicy,
}

impl SkillRegistry {
    /// Starts a builder with the default `CeilingPolicy::Reject`.
    pub fn builder() -> SkillRegistryBuilder {
        SkillRegistryBuilder::default()
    }

    /// Builds a registry from definitions in iteration order.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = SkillDefinition>,
    ) -> Result<Self, RegistryError> {
        definitions
            .into_iter()
            .fold(Self::builder(), SkillRegistryBuilder::skill)
            .build()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn ceiling_policy(&self) -> CeilingPolicy {
        self.ceiling_policy
    }

    /// Returns one definition by name. Input is trimmed.
    pub fn get(&self, name: &str) -> Option<&SkillDefinition> {
        self.index
            .get(name.trim())
            .map(|position| &self.definitions[*position])
    }

    /// Iterates definitions in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SkillDefinition> {
        self.definitions.iter()
    }

    /// Returns names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.definitions
            .iter()
            .map(|definition| definition.name.as_str())
            .collect()
    }

    /// Returns distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::<&str>::new();
        for definition in &self.definitions {
            if !seen.contains(&definition.category.as_str()) {
                seen.push(definition.category.as_str());
            }
        }
        seen
    }
}

impl<'a> IntoIterator for &'a SkillRegistry {
    type Item = &'a SkillDefinition;
    type IntoIter = std::slice::Iter<'a, SkillDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects definitions and validates them all at `build` time.
#[derive(Debug, Clone, Default)]
pub struct SkillRegistryBuilder {
    definitions: Vec<SkillDefinition>,
    ceiling_policy: CeilingPolicy,
}

impl SkillRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how `ceiling < base` definitions are treated.
    pub fn with_ceiling_policy(mut self, policy: CeilingPolicy) -> Self {
        self.ceiling_policy = policy;
        self
    }

    /// Appends one definition (chaining form).
    pub fn skill(mut self, definition: SkillDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Appends one definition.
    pub fn push(&mut self, definition: SkillDefinition) {
        self.definitions.push(definition);
    }

    /// Validates every definition and freezes the registry.
    ///
    /// # Errors
    /// - `InvalidName` for blank names or names with control characters.
    /// - `DuplicateName` when a trimmed name repeats.
    /// - `InvalidParameter` for the first numeric field violation.
    pub fn build(self) -> Result<SkillRegistry, RegistryError> {
        let policy = self.ceiling_policy;
        match admit_all(self.definitions, policy) {
            Ok((definitions, index)) => {
                info!(
                    "event=registry_build module=registry status=ok skills={} ceiling_policy={}",
                    definitions.len(),
                    policy.as_str()
                );
                Ok(SkillRegistry {
                    definitions,
                    index,
                    ceiling_policy: policy,
                })
            }
            Err(err) => {
                warn!(
                    "event=registry_build module=registry status=error error_code={} error={}",
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }
}

type Admitted = (Vec<SkillDefinition>, HashMap<String, usize>);

fn admit_all(
    definitions: Vec<SkillDefinition>,
    policy: CeilingPolicy,
) -> Result<Admitted, RegistryError> {
    let mut admitted = Vec::with_capacity(definitions.len());
    let mut index = HashMap::with_capacity(definitions.len());

    for mut definition in definitions {
        let name = definition.name.trim().to_string();
        if !is_valid_skill_name(&name) {
            return Err(RegistryError::InvalidName(definition.name));
        }
        if index.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        definition
            .validate_parameters(policy)
            .map_err(|error| RegistryError::InvalidParameter {
                skill: name.clone(),
                error,
            })?;

        definition.name = name.clone();
        index.insert(name, admitted.len());
        admitted.push(definition);
    }

    Ok((admitted, index))
}

fn is_valid_skill_name(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::{RegistryError, SkillRegistry};
    use crate::model::skill::{CeilingPolicy, SkillDefinition, SkillField};

    fn skill(name: &str, base: f64, ceiling: f64) -> SkillDefinition {
        SkillDefinition::new(name, base, ceiling, 0.5, 1.0)
    }

    #[test]
    fn preserves_insertion_order() {
        let registry = SkillRegistry::builder()
            .skill(skill("SQL", 60.0, 90.0))
            .skill(skill("Ansible", 30.0, 85.0))
            .skill(skill("Git", 50.0, 90.0))
            .build()
            .expect("registry should build");
        assert_eq!(registry.names(), vec!["SQL", "Ansible", "Git"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn trims_names_on_admission_and_lookup() {
        let registry = SkillRegistry::from_definitions([skill("  Docker ", 20.0, 90.0)])
            .expect("registry should build");
        assert_eq!(registry.names(), vec!["Docker"]);
        assert!(registry.get(" Docker ").is_some());
        assert!(registry.get("docker").is_none());
    }

    #[test]
    fn rejects_blank_and_control_names() {
        let blank = SkillRegistry::from_definitions([skill("   ", 10.0, 20.0)]);
        assert!(matches!(blank, Err(RegistryError::InvalidName(_))));

        let control = SkillRegistry::from_definitions([skill("Py\nthon", 10.0, 20.0)]);
        assert!(matches!(control, Err(RegistryError::InvalidName(_))));
    }

    #[test]
    fn rejects_duplicate_names_after_trim() {
        let err = SkillRegistry::from_definitions([
            skill("Kubernetes", 10.0, 88.0),
            skill(" Kubernetes", 12.0, 88.0),
        ])
        .expect_err("duplicate must fail");
        assert_eq!(err, RegistryError::DuplicateName("Kubernetes".to_string()));
    }

    #[test]
    fn parameter_errors_name_skill_and_field() {
        let mut bad = skill("MLOps", 15.0, 92.0);
        bad.rate = 0.0;
        let err = SkillRegistry::from_definitions([skill("Python", 70.0, 95.0), bad])
            .expect_err("zero rate must fail");
        assert_eq!(err.field(), Some(SkillField::Rate));
        let message = err.to_string();
        assert!(message.contains("MLOps"), "unexpected message: {message}");
        assert!(message.contains("rate"), "unexpected message: {message}");
    }

    #[test]
    fn ceiling_policy_controls_regression() {
        let regressing = skill("Flash", 70.0, 20.0);
        let err = SkillRegistry::from_definitions([regressing.clone()])
            .expect_err("default policy rejects regression");
        assert_eq!(err.field(), Some(SkillField::Ceiling));

        let registry = SkillRegistry::builder()
            .with_ceiling_policy(CeilingPolicy::AllowRegression)
            .skill(regressing)
            .build()
            .expect("regression should be accepted when allowed");
        assert_eq!(registry.ceiling_policy(), CeilingPolicy::AllowRegression);
    }

    #[test]
    fn categories_follow_first_appearance() {
        let registry = SkillRegistry::from_definitions([
            skill("Python", 70.0, 95.0).with_category("ML"),
            skill("Docker", 20.0, 90.0).with_category("DevOps"),
            skill("Deep Learning", 60.0, 95.0).with_category("ML"),
        ])
        .expect("registry should build");
        assert_eq!(registry.categories(), vec!["ML", "DevOps"]);
    }

    #[test]
    fn empty_registry_is_allowed() {
        let registry = SkillRegistry::builder().build().expect("empty build");
        assert!(registry.is_empty());
    }
}
