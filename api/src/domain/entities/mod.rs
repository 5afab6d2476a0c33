//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod package;

pub use package::{NewPackage, Package, PackageId};
