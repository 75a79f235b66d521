use super::{Error, Parameter, Result};
use std::fmt;

/// Holds the named parameters available to the model factories
///
/// The names are unique and the insertion order is preserved. The factories only
/// borrow parameters from the registry; thus, the registry must outlive the models.
#[derive(Clone, Debug, Default)]
pub struct Parameters {
    all: Vec<Parameter>,
}

impl Parameters {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        Parameters { all: Vec::new() }
    }

    /// Adds a parameter
    ///
    /// Returns an error if another parameter with the same name exists already.
    pub fn add(&mut self, parameter: Parameter) -> Result<&mut Self> {
        if self.find(parameter.name()).is_some() {
            return Err(Error::DuplicateParameter {
                name: parameter.name().to_string(),
            });
        }
        self.all.push(parameter);
        Ok(self)
    }

    /// Returns the parameter with the given name, if any
    pub fn find(&self, name: &str) -> Option<&Parameter> {
        self.all.iter().find(|p| p.name() == name)
    }

    /// Returns an iterator over the parameters in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.all.iter()
    }

    /// Returns the number of parameters
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Indicates that there are no parameters
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;
    fn into_iter(self) -> Self::IntoIter {
        self.all.iter()
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameters\n")?;
        write!(f, "==========\n")?;
        for p in &self.all {
            write!(f, "{} ({} component(s))\n", p.name(), p.n_components())?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
