//! Typed form controls.
//!
//! DESIGN
//! ======
//! Each control is configured entirely by props and writes straight into the
//! caller's `RwSignal<String>`. Conversion and validation happen at submit
//! time in `util::forms`, so controls never hold parsed values.

use leptos::prelude::*;

/// One `<option>` of a [`SelectField`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Labelled single-line input.
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                placeholder=placeholder
                required=required
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Numeric input. The value stays a string until submit.
#[component]
pub fn NumberField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "1")] step: &'static str,
    #[prop(optional)] min: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type="number"
                inputmode="decimal"
                step=step
                min=min
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextArea(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = 4)] rows: u32,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input field__input--multiline"
                rows=rows.to_string()
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

#[component]
pub fn SelectField(label: &'static str, value: RwSignal<String>, options: Vec<SelectOption>) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class="field__input"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|opt| {
                        view! {
                            <option value=opt.value selected=move || value.get() == opt.value>
                                {opt.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Visual weight of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn--primary",
            Self::Secondary => "btn btn--secondary",
            Self::Danger => "btn btn--danger",
            Self::Ghost => "btn btn--ghost",
        }
    }
}

/// Submit button (or plain button with `on_click`) that shows a busy label.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(into, default = Signal::stored(false))] busy: Signal<bool>,
    #[prop(optional)] busy_label: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let button_type = if on_click.is_some() { "button" } else { "submit" };
    let content = children();
    view! {
        <button
            class=variant.class()
            type=button_type
            disabled=move || busy.get()
            on:click=move |_| {
                if let Some(cb) = on_click.as_ref() {
                    cb.run(());
                }
            }
        >
            <span class:hidden=move || busy.get() && busy_label.is_some()>{content}</span>
            {move || busy.get().then_some(busy_label).flatten()}
        </button>
    }
}

/// Inline error or success line. Renders nothing when the message is empty.
#[component]
pub fn Notice(#[prop(into)] message: Signal<Option<String>>, #[prop(optional)] success: bool) -> impl IntoView {
    let class = if success { "notice notice--success" } else { "notice notice--error" };
    view! {
        <Show when=move || message.with(Option::is_some)>
            <p class=class role="status">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
