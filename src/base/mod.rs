//! Implements the configuration and parameter structures used by the factories

mod config_node;
mod error;
mod find_parameter;
mod input;
mod parameter;
mod parameters;
mod sample_params;
pub use crate::base::config_node::*;
pub use crate::base::error::*;
pub use crate::base::find_parameter::*;
pub use crate::base::input::*;
pub use crate::base::parameter::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_params::*;
