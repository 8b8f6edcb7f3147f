//! Awesome sauces
//!
//! An [AwesomeSauce] is a plain value with a name and a level of awesomeness. It can be
//! serialized and deserialized with [serde_json]:
//!
//! ```
//! use fancy_description::{AwesomeSauce, FancyDescription};
//!
//! let sauce: AwesomeSauce =
//!     serde_json::from_str(r#"{"name": "Mild Mole", "awesomeLevel": "Fine"}"#).unwrap();
//! assert_eq!(sauce.describe_fancy(), "<<< SAUCE: Mild Mole is Fine >>>");
//! ```

use serde::{Deserialize, Serialize};

use crate::fancy::FancyDescription;

/// A sauce and how awesome it is.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash, Default)]
pub struct AwesomeSauce {
    name: String,
    #[serde(rename = "awesomeLevel")]
    awesome_level: String,
}

impl AwesomeSauce {
    /// Create a new sauce, both values are stored as they are.
    pub fn new(name: impl Into<String>, awesome_level: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            awesome_level: awesome_level.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn awesome_level(&self) -> &str {
        &self.awesome_level
    }
}

impl FancyDescription for AwesomeSauce {
    fn describe_fancy(&self) -> String {
        format!("<<< SAUCE: {} is {} >>>", self.name, self.awesome_level)
    }
}
