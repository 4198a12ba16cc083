// Core application modules and components
use crate::components::error_template;
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    SsrMode, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod animation;
pub mod artwork;
pub mod components;
mod home;
pub mod types;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/spinmark.css")
                    .build(),
            ),
            Title(TitleProps::builder().text("Spinmark").build()),
        )),
        body().class("bg-white").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <main class="w-screen h-screen bg-white">
                <FlatRoutes fallback=|| {
                    let mut outside_errors = Errors::default();
                    outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                    error_template::component(Some(outside_errors), None)
                }>
                    <Route path=StaticSegment("") view=home::component ssr=SsrMode::InOrder/>
                </FlatRoutes>
            </main>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_creation() {
        // Test shell function with default options
        let options = LeptosOptions::builder().output_name("spinmark").build();
        let shell_view = shell(options);
        // We can't easily test the rendered content without a full Leptos context,
        // but we can verify the function executes without panicking
        drop(shell_view); // Explicitly consume the view to verify it was created
    }

    #[test]
    fn test_component_function_signatures() {
        // Verify function signatures compile and are callable
        let _shell_fn: fn(LeptosOptions) -> _ = shell;
        let _component_fn: fn() -> _ = component;

        // Test that LeptosOptions can be created (this is the testable logic)
        let options = LeptosOptions::builder().output_name("spinmark").build();
        assert_eq!(options.site_addr.port(), 3000); // Default port
        assert_eq!(options.site_addr.ip().to_string(), "127.0.0.1"); // Default IP
    }
}
