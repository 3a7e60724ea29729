//! Entity Form Component
//!
//! Inputs generated from a record's [`FieldSpec`]s, bound to a map of raw
//! text values. Validation happens on submit through `build_payload`.

use leptos::*;

use almazara::forms::{FieldKind, FieldSpec, FormValues};

#[component]
pub fn EntityForm(
    fields: Vec<FieldSpec>,
    values: RwSignal<FormValues>,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            {fields.into_iter().map(|field| view! { <Field field=field values=values /> }).collect_view()}
        </div>
    }
}

#[component]
fn Field(field: FieldSpec, values: RwSignal<FormValues>) -> impl IntoView {
    let name = field.name;
    let current = move || values.with(|v| v.get(name).cloned().unwrap_or_default());
    let set = move |value: String| {
        values.update(|v| {
            v.insert(name.to_string(), value);
        })
    };
    let input_class = "w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 \
                       focus:outline-none focus:border-primary-500";

    let input = match field.kind {
        FieldKind::Select(options) => view! {
            <select
                class=input_class
                prop:value=current
                on:change=move |ev| set(event_target_value(&ev))
            >
                {(!field.required).then(|| view! { <option value="">"-"</option> })}
                {options.iter().map(|o| view! {
                    <option value=*o selected=move || current() == *o>{*o}</option>
                }).collect_view()}
            </select>
        }.into_view(),
        FieldKind::Boolean => view! {
            <input
                type="checkbox"
                class="w-5 h-5"
                prop:checked=move || current() == "true"
                on:change=move |ev| set(event_target_checked(&ev).to_string())
            />
        }.into_view(),
        _ => view! {
            <input
                type=field.input_type()
                class=input_class
                step=matches!(field.kind, FieldKind::Number).then_some("any")
                prop:value=current
                on:input=move |ev| set(event_target_value(&ev))
            />
        }.into_view(),
    };

    view! {
        <label class="block">
            <span class="block text-sm text-gray-400 mb-1">
                {field.label}
                {field.required.then_some(" *")}
            </span>
            {input}
        </label>
    }
}
