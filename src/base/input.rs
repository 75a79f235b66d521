use super::{ConfigError, ConfigNode, Error, Parameter, Parameters, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds the definition of a parameter as written in an input file
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum ParameterDefinition {
    /// Constant scalar (`value`) or vector (`values`)
    Constant {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        values: Option<Vec<f64>>,
    },

    /// Scalar piecewise-linear function of time
    Curve { name: String, times: Vec<f64>, values: Vec<f64> },
}

impl ParameterDefinition {
    /// Returns the name of the parameter
    pub fn name(&self) -> &str {
        match self {
            ParameterDefinition::Constant { name, .. } => name,
            ParameterDefinition::Curve { name, .. } => name,
        }
    }

    /// Allocates the parameter described by this definition
    pub fn to_parameter(&self) -> Result<Parameter> {
        match self {
            ParameterDefinition::Constant { name, value, values } => match (value, values) {
                (Some(v), None) => Parameter::constant_vector(name, &[*v]),
                (None, Some(vv)) => Parameter::constant_vector(name, vv),
                _ => Err(Error::InvalidParameter {
                    name: name.clone(),
                    reason: "exactly one of 'value' and 'values' is required",
                }),
            },
            ParameterDefinition::Curve { name, times, values } => Parameter::curve(name, times, values),
        }
    }
}

/// Holds the input data describing a set of solid models
///
/// # Example
///
/// ```text
/// {
///   "ndim": 2,
///   "parameters": [
///     { "type": "Constant", "name": "E", "value": 1500.0 },
///     { "type": "Curve", "name": "nu", "times": [0.0, 1.0], "values": [0.2, 0.3] }
///   ],
///   "solids": [
///     { "type": "LinearElasticIsotropic", "youngs_modulus": "E", "poissons_ratio": "nu" }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SolidsInput {
    /// Space dimension (2 or 3)
    pub ndim: usize,

    /// Parameter definitions
    #[serde(default)]
    pub parameters: Vec<ParameterDefinition>,

    /// Configuration of each solid model
    #[serde(default)]
    pub solids: Vec<serde_json::Value>,
}

impl SolidsInput {
    /// Parses a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let input = serde_json::from_str(json).map_err(ConfigError::Json)?;
        Ok(input)
    }

    /// Reads a JSON file containing the input data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(&path).map_err(|source| ConfigError::Io { path, source })?;
        let buffered = BufReader::new(input);
        let data = serde_json::from_reader(buffered).map_err(ConfigError::Json)?;
        Ok(data)
    }

    /// Allocates the parameter registry
    pub fn parameters(&self) -> Result<Parameters> {
        let mut parameters = Parameters::new();
        for definition in &self.parameters {
            parameters.add(definition.to_parameter()?)?;
        }
        Ok(parameters)
    }

    /// Returns one configuration node per solid
    pub fn solid_nodes(&self) -> Result<Vec<ConfigNode<'_>>> {
        let mut nodes = Vec::with_capacity(self.solids.len());
        for (i, value) in self.solids.iter().enumerate() {
            nodes.push(ConfigNode::new(value, &format!("solids.{}", i))?);
        }
        Ok(nodes)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
