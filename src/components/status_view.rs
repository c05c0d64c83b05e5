//! Status Views
//!
//! Centered placeholders shown while loading and after a failed load.

use leptos::prelude::*;

#[component]
pub fn LoadingView(text: &'static str) -> impl IntoView {
    view! {
        <div class="centered-view">
            <div class="spinner"></div>
            <p class="loading-text">{text}</p>
        </div>
    }
}

/// No retry button: a failed load stays failed for this mount
#[component]
pub fn ErrorView(message: String) -> impl IntoView {
    view! {
        <div class="centered-view">
            <p class="error-message">{message}</p>
        </div>
    }
}
