use std::fmt::Display;

use crate::{
    DEFAULT_PARAMETER_CAPACITY, DEFAULT_PARAMETER_GROWTH, TiniError,
    models::parameter::Parameter,
    storage::{GrowableStorage, GrowthPolicy, try_copy},
};

/// A named, ordered group of parameters with unique keys.
#[derive(Debug)]
pub struct Section {
    name: String,
    parameters: GrowableStorage<Parameter>,
}

impl Section {
    /// Creates an empty section with the default parameter storage settings.
    pub fn new(name: &str) -> Result<Self, TiniError> {
        Self::with_storage(name, DEFAULT_PARAMETER_CAPACITY, DEFAULT_PARAMETER_GROWTH)
    }

    pub(crate) fn with_storage(name: &str, capacity: usize, growth: GrowthPolicy) -> Result<Self, TiniError> {
        Ok(Self {
            name: try_copy(name)?,
            parameters: GrowableStorage::with_capacity(capacity, growth)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds `key=value` at the end of the section.
    ///
    /// If the key is already present its value is overwritten in place when `replace` is set,
    /// otherwise [`TiniError::AlreadyExists`] is returned. On any error the section is unchanged.
    pub fn add_parameter(&mut self, key: &str, value: &str, replace: bool) -> Result<(), TiniError> {
        if let Some(existing) = self.parameters.find_mut(|parameter| parameter.key == key) {
            if !replace {
                return Err(TiniError::AlreadyExists { key: key.to_owned() });
            }
            existing.value = try_copy(value)?;
            log::trace!("Replaced {key} in section [{}]", self.name);
            return Ok(());
        }

        let parameter = Parameter::try_new(key, value)?;
        self.parameters.try_push(parameter)?;
        log::trace!("Added {key} to section [{}]", self.name);
        Ok(())
    }

    pub fn remove_parameter(&mut self, key: &str) -> Result<(), TiniError> {
        let index = self
            .parameters
            .position(|parameter| parameter.key == key)
            .ok_or_else(|| TiniError::ParameterNotFound(key.to_owned()))?;

        self.parameters.remove(index);
        log::trace!("Removed {key} from section [{}]", self.name);
        Ok(())
    }

    pub fn find_parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find_map(|parameter| if parameter.key == key { Some(parameter.value.as_str()) } else { None })
    }

    pub fn find_parameter_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.find_parameter(key).unwrap_or(default)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.parameters.position(|parameter| parameter.key == key).is_some()
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Number of parameters the section can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.parameters.capacity()
    }

    pub fn growth_policy(&self) -> GrowthPolicy {
        self.parameters.policy()
    }

    pub fn parameters(&self) -> &[Parameter] {
        self.parameters.as_slice()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(Parameter::key)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(Parameter::value)
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[{}]", self.name)?;
        for parameter in self.parameters.iter() {
            writeln!(f, "{parameter}")?;
        }
        Ok(())
    }
}
