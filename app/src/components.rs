//! This module serves as a container for the reusable UI components of the
//! application.
//!
//! Each sub-module within `components` defines a specific UI element, such as
//! the error page or the animated loader mark.

pub mod error_template;
pub mod loader;
