//! `staticentity-core`: building blocks for static entity catalogs.
//!
//! This crate only describes catalogs (entity trait, identifiers, data sets,
//! errors). Managers and the registry that caches them live in
//! `staticentity-registry`.

pub mod data_set;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use data_set::{DataSet, Record};
pub use entity::StaticEntity;
pub use error::{CatalogError, CatalogResult};
pub use id::{EntityId, IdOrEntity};
pub use value_object::ValueObject;
