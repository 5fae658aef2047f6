//! Password generation core: pool building, generation, strength rating.

pub mod charset;
pub mod config;
pub mod display;
mod generate;
mod password;
pub mod strength;

pub use charset::{CharClass, ClassSet};
pub use config::Configuration;
pub use generate::{generate, generate_batch, generate_from_pool};
pub use password::Password;
pub use strength::{Strength, classify};
