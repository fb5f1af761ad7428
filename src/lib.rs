#![forbid(unsafe_code)]

//! Named output profiles for markup generation.
//!
//! An output profile is a small bundle of formatting options that a markup
//! generation engine consults while rendering tags: tag and attribute name
//! case, attribute quoting, self-closing style, indentation and line-break
//! policy, cursor placeholder insertion.
//!
//! Profiles live in a [`ProfileRegistry`] keyed by name. A fresh registry
//! holds the four built-in profiles `xhtml`, `html`, `xml` and `plain`;
//! hosts register their own with [`ProfileRegistry::create`] and resolve
//! them with [`ProfileRegistry::get`]. Unknown names fall back to `plain`
//! rather than failing, and unrecognized option values fall back to their
//! defaults, so no operation in this crate returns an error.
//!
//! ```
//! use outprofile::{ProfileOptions, ProfileRegistry, SelfClosingStyle};
//!
//! let mut registry = ProfileRegistry::new();
//! registry.create(
//!     "custom",
//!     ProfileOptions {
//!         self_closing_tag: Some(SelfClosingStyle::Slash),
//!         ..Default::default()
//!     },
//! );
//! let profile = registry.get("custom");
//! assert_eq!(profile.self_closing(), "/");
//! assert_eq!(profile.tag_name("DIV"), "div");
//! ```

mod case;
mod cursor;
mod legacy;
mod options;
mod profile;
mod registry;

pub use case::string_case;
pub use cursor::{CursorSource, NoCursor};
#[allow(deprecated)]
pub use legacy::{quote, self_closing};
pub use options::{CaseStyle, NewlineMode, ProfileOptions, QuoteStyle, SelfClosingStyle};
pub use profile::Profile;
pub use registry::{ProfileRegistry, ProfileSpec, SyntaxProfiles};
