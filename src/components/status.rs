use leptos::*;

const SCREEN_STYLE: &str = "display: flex; min-height: 100vh; align-items: center; justify-content: center; background: var(--bg-page);";

/// Full-screen fetch failure state; replaces the page entirely.
#[component]
pub fn ErrorScreen(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div style=SCREEN_STYLE>
            <div style="text-align: center;">
                <h2 style="font-size: 1.5rem; font-weight: 700; color: var(--state-error); margin-bottom: 0.5rem;">"Error"</h2>
                <p style="color: var(--text-muted);">{message}</p>
            </div>
        </div>
    }
}

/// Full-screen loading state shown until the page's fetch settles.
#[component]
pub fn LoadingScreen(#[prop(into)] subject: String) -> impl IntoView {
    view! {
        <div style=SCREEN_STYLE>
            <div style="text-align: center;">
                <h2 style="font-size: 1.5rem; font-weight: 700; color: var(--text-heading); margin-bottom: 0.5rem;">"Loading..."</h2>
                <p style="color: var(--text-muted);">{format!("Please wait while we fetch the {subject}")}</p>
            </div>
        </div>
    }
}
