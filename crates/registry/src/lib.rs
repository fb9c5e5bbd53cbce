//! `staticentity-registry`: managers for static entity catalogs and the
//! registry that caches them, one manager per catalog type.
//!
//! ```ignore
//! use staticentity_registry::Catalog;
//!
//! let red = Color::get(&1)?;
//! let names = Color::get_associative()?; // {1: "Red", 2: "Green"}
//! ```

pub mod catalog;
pub mod config;
pub mod manager;
pub mod registry;

pub use catalog::Catalog;
pub use config::{DEFAULT_VALUE_KEY, RegistryConfig, VALUE_KEY_ENV};
pub use manager::EntityManager;
pub use registry::ManagerRegistry;
