//! Fancy descriptions for everything
//!
//! A small trait, [FancyDescription], asks implementors for a fancy string representation of
//! themselves and gives every implementor a louder [proclamation](FancyDescription::proclaim_fancy)
//! for free.
//!
//! # Basic usage
//!
//! ```
//! use fancy_description::{AwesomeSauce, FancyDescription};
//!
//! let spicy_sauce = AwesomeSauce::new("Hot Pig Sauce", "Pretty Amazing!");
//!
//! assert_eq!(
//!     spicy_sauce.describe_fancy(),
//!     "<<< SAUCE: Hot Pig Sauce is Pretty Amazing! >>>"
//! );
//! assert_eq!(
//!     spicy_sauce.proclaim_fancy(),
//!     "EVEN MORE FANCY ---> <<< SAUCE: Hot Pig Sauce is Pretty Amazing! >>> <---"
//! );
//! ```

pub mod fancy;
pub mod sauce;

pub use crate::{fancy::FancyDescription, sauce::AwesomeSauce};
