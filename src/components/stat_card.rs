use leptos::*;

/// Stateless summary widget for the overview grid. The icon goes in the
/// children slot.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div style="background: var(--bg-surface); padding: 1.5rem; border-radius: var(--radius-lg); border: 1px solid var(--border-subtle);">
            <div style="display: flex; align-items: center; justify-content: space-between;">
                <div>
                    <p style="color: var(--text-muted); font-size: 0.875rem;">{title}</p>
                    <h3 style="font-size: 1.5rem; font-weight: 700; color: var(--text-heading); margin-top: 0.25rem;">{value}</h3>
                </div>
                <span style="color: var(--brand-primary);">{children()}</span>
            </div>
        </div>
    }
}
