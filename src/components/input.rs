use leptos::*;

/// Labelled text input bound to a string signal.
#[component]
pub fn Field(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] set_value: WriteSignal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <label style="display: flex; flex-direction: column; gap: 0.35rem; width: 100%;">
            <span style="font-weight: 500; font-size: 0.85rem; color: var(--text-muted);">{label}</span>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                style="padding: 0.75rem; border: 1px solid var(--border-input); border-radius: var(--radius-md);"
            />
        </label>
    }
}
