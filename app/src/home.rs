//! This module defines the `home` component: the application's single
//! screen.
//!
//! It is a plain full-viewport container that centers the animated loader
//! mark on both axes over a white background. All behavior lives in the
//! loader itself; this screen holds no state.

use leptos::{html::div, prelude::*};
use leptos_meta::{Title, TitleProps};

use crate::components::loader::{self, LoaderProps};

/// Renders the splash screen: the loader mark, centered, on white.
///
/// The loader is invoked with empty props, so every animation parameter
/// comes from its built-in defaults.
pub fn component() -> impl IntoView {
    div()
        .class("flex justify-center items-center w-screen h-screen bg-white")
        .child((
            Title(TitleProps::builder().text("Spinmark").build()),
            loader::component(LoaderProps::default()),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_function_signature() {
        let _component_fn: fn() -> _ = component;
    }
}
