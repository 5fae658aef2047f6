//! Password generation from selectable character classes, with a
//! length-based strength rating.
//!
//! ```no_run
//! use strongpass::pass::{self, CharClass, ClassSet, Configuration, Strength};
//! use strongpass::rand::OsSource;
//!
//! let config = Configuration::new(8, ClassSet::only(CharClass::Numbers))?;
//! let password = pass::generate(&config, &mut OsSource)?;
//! assert_eq!(password.len(), 8);
//! assert_eq!(pass::classify(password.as_str()), Strength::Good);
//! # Ok::<(), strongpass::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod error;
pub mod exits;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
