//! Foundation types for the Content Entity Store (CES).
//!
//! An entity collection is an ordered sequence of schema-less JSON records,
//! one per line of an NDJSON export file. This crate provides the record
//! model every other CES crate builds on.
//!
//! # Key Types
//!
//! - [`EntityRecord`] — One content item; a union over the record shapes
//!   that coexist in real export files
//! - [`EntityId`] — Opaque numeric or string identifier
//! - [`KeyedEntity`] — The `{ "type", "id", "data" }` shape with its
//!   category discriminator
//! - [`DocumentEntity`] — The `{ "documentId", ... }` shape
//!
//! # Design Rules
//!
//! 1. No uniform shape is assumed across a collection; unknown shapes are
//!    preserved verbatim, never rejected.
//! 2. Round-trips are lossless: parsing a JSON object and serializing it
//!    back yields an equal value (key order aside).
//! 3. Discriminators are read from parsed structure, never from raw text.

pub mod entity;
pub mod error;

pub use entity::{DocumentEntity, EntityId, EntityRecord, JsonMap, KeyedEntity};
pub use error::TypeError;
