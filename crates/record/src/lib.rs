#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `record` defines the vocabulary shared by every stage of the testrig
//! logging pipeline: the [`Level`] scale, the caller-facing [`Detail`]
//! builder, the annotated [`Details`] attached to each emitted record, the
//! [`Gate`] describing how a record may be suppressed, and the final
//! [`LogRecord`] handed to sinks. The [`render`] module turns a `Details`
//! value into the printable line, applying indentation, context labels and
//! optional ANSI styling.
//!
//! # Design
//!
//! The crate is free of I/O and carries no notion of a logger
//! hierarchy. A `Detail` is what a call site supplies (key, optional value,
//! color, extra shift); [`Detail::annotate`] combines it with the ambient
//! state a logger contributes (labels, accumulated shift, gating levels)
//! into a `Details` value. Filters downstream match on [`Details::gate`]
//! instead of probing for optional attributes, so "no gate" is an explicit
//! [`Gate::None`] rather than a missing field.
//!
//! Styling goes through [`ColorMode`]: `Plain` produces the literal text,
//! `Ansi` wraps the styled substrings in [`anstyle`] escape sequences. The
//! decision is made once, at render time, and the stored message is final.
//!
//! # Invariants
//!
//! - A `Details` value carries at most one gating dimension: verbosity and
//!   debug levels never appear on the same record.
//! - Rendered messages are `indent + label prefix + body`, with each label
//!   formatted as `[label]` followed by a single space.
//! - Indentation is [`render::INDENT_WIDTH`] spaces per shift unit, and
//!   multi-line values are indented one unit deeper than their key.
//!
//! # Examples
//!
//! ```
//! use record::render;
//! use record::{ColorMode, Detail, Gate};
//!
//! let details = Detail::new("step")
//!     .with_value("discover")
//!     .annotate(vec!["smoke".into()], Gate::None, false, 1);
//!
//! assert_eq!(
//!     render::line(&details, ColorMode::Plain),
//!     "    [smoke] step: discover",
//! );
//! ```
//!
//! # See also
//!
//! - The `logging` crate for the logger tree, the record filters and the
//!   sinks consuming these types.

pub mod detail;
pub mod level;
pub mod record;
pub mod render;
pub mod style;

pub use detail::{Detail, Details, Gate};
pub use level::{Level, ParseLevelError};
pub use record::LogRecord;
pub use style::{Color, ColorMode, ParseColorError};
