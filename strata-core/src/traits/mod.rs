//! Traits at the storage seam.

pub mod catalog;

pub use catalog::ISkipCatalog;
