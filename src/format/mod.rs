//! File formats for persisting parameters.
//!
//! A format converts a set of parameters to and from the bytes of a file. All formats implement
//! the [`Format`] trait.
//!
//! Formats are selected by name through a [`FormatRegistry`], which maps the extension of a file
//! path to the format used to read and write it. The registry returned by
//! [`FormatRegistry::default`] contains the built-in formats:
//!
//! Name | Type
//! --- | ---
//! `json` | [`JsonFormat`]
//! `msgpack` | [`MessagePackFormat`]
//!
//! [`Format`]: crate::format::Format
//! [`FormatRegistry`]: crate::format::FormatRegistry
//! [`FormatRegistry::default`]: crate::format::FormatRegistry::default
//! [`JsonFormat`]: crate::format::JsonFormat
//! [`MessagePackFormat`]: crate::format::MessagePackFormat

pub use self::format::Format;
pub use self::json::JsonFormat;
pub use self::msgpack::MessagePackFormat;
pub use self::registry::{create, default_registry, FormatRegistry};

mod format;
mod json;
mod msgpack;
mod registry;
