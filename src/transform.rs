//! Object-to-text transforms for [`Log::obj`](crate::Log::obj).
//!
//! A transform is any `FnOnce(&str, &T) -> Result<String, E>` whose error
//! converts into [`BoxError`]. The tag is passed so a transform can vary its
//! output per origin. The constructors here cover the common cases.

use std::convert::Infallible;
use std::fmt;

use serde::Serialize;

pub use crate::error::BoxError;

/// Pretty `Debug` output (`{:#?}`).
pub fn debug<T>() -> impl Fn(&str, &T) -> Result<String, Infallible>
where
    T: fmt::Debug + ?Sized,
{
    |_tag: &str, obj: &T| Ok(format!("{obj:#?}"))
}

/// `Display` output.
pub fn display<T>() -> impl Fn(&str, &T) -> Result<String, Infallible>
where
    T: fmt::Display + ?Sized,
{
    |_tag: &str, obj: &T| Ok(obj.to_string())
}

/// Pretty-printed JSON through `serde_json`.
pub fn json<T>() -> impl Fn(&str, &T) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    |_tag: &str, obj: &T| serde_json::to_string_pretty(obj)
}
