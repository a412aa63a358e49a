//! Core data model for Taverna: attributes, reference catalog, and the
//! build documents exchanged with the character store.
//!
//! This crate holds no rules. It defines the typed records the mechanics
//! engine reads from the reference-data service and the documents it
//! accepts from and hands back to clients.

/// The six attributes and the point-buy constants.
pub mod attribute;
/// Typed registry of races, classes, advantages, and disadvantages.
pub mod catalog;
/// Build submission and character snapshot documents.
pub mod character;
/// Error types used throughout the crate.
pub mod error;

/// Re-export attribute types and constants.
pub use attribute::{ATTRIBUTE_CAP, Attribute, BASE_SCORE, POINT_BUDGET};
/// Re-export catalog types.
pub use catalog::{
    Advantage, CatalogState, ClassDefinition, Disadvantage, RaceDefinition, RacialTrait,
    ReferenceCatalog, ReferenceKind,
};
/// Re-export character documents.
pub use character::{BuildSubmission, CharacterSnapshot, DerivedAttribute};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
