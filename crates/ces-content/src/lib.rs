//! Typed CMS content-record shapes for the Content Entity Store.
//!
//! The entity store itself is schema-less; this crate is where shape lives.
//! Each builder produces the exact JSON layout the CMS export format uses
//! (camelCase component fields, explicit `null`s for unset component slots,
//! RFC 3339 millisecond timestamps) and converts into a keyed
//! [`ces_types::EntityRecord`] with the right `api::<model>.<model>`
//! discriminator.
//!
//! Content text is always caller-supplied; nothing here hardcodes copy.
//!
//! # Key Types
//!
//! - [`Block`] / [`Inline`] — structured rich-text blocks
//! - [`Seo`] — SEO metadata component
//! - [`Navbar`] / [`Footer`] — site navigation components
//! - [`Article`], [`Category`], [`Page`], [`BlogPage`], [`Faq`],
//!   [`Global`] — record builders

pub mod blocks;
pub mod nav;
pub mod records;
pub mod seo;

pub use blocks::{Block, Inline, ListFormat};
pub use nav::{Copyright, Footer, FooterColumn, NavLink, Navbar};
pub use records::{
    generate_document_id, model, Article, BlogPage, Category, Faq, Global, Page,
};
pub use seo::Seo;
