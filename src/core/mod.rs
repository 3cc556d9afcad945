pub mod error;
pub mod types;

pub use error::{ForgeError, Result};
pub use types::{Attribute, ClassName, TrainingTier};
