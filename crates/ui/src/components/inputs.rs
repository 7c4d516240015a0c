//! # Input Components
//!
//! Reusable form input components for the Tablero UI.
//!
//! This module provides styled, accessible input components including:
//! - **TextInput**: Single-line text input
//! - **TextArea**: Multi-line text input
//! - **NumberInput**: Numeric input with optional min/max
//! - **Select**: Dropdown selection
//! - **Toggle**: Switch-style toggle
//!
//! All components follow consistent styling with Tailwind CSS and
//! support common accessibility features.
//!

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Whether the input is readonly
    #[props(default = false)]
    pub readonly: bool,

    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Suffix icon or text (e.g. a pending-check spinner)
    #[props(default)]
    pub suffix: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let has_error = props.error.is_some();
    let input_class = build_input_class(has_error, props.disabled);

    rsx! {
        div {
            class: "input-group",

            // Label
            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-slate-300 mb-1.5",
                    "{label}"
                    if props.required {
                        span { class: "text-rose-400 ml-0.5", "*" }
                    }
                }
            }

            div {
                class: "relative",

                input {
                    class: "{input_class}",
                    class: if props.suffix.is_some() { "pr-8" } else { "" },
                    r#type: "{props.input_type}",
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    disabled: props.disabled,
                    readonly: props.readonly,
                    oninput: move |e| props.on_change.call(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            props.on_enter.call(props.value.clone());
                        }
                    },
                }

                if let Some(suffix) = &props.suffix {
                    span {
                        class: "absolute right-3 top-1/2 -translate-y-1/2 text-slate-400 text-sm pointer-events-none",
                        "{suffix}"
                    }
                }
            }

            // Help text or error
            if let Some(error) = &props.error {
                p {
                    class: "mt-1 text-xs text-rose-400",
                    "{error}"
                }
            } else if let Some(help) = &props.help_text {
                p {
                    class: "mt-1 text-xs text-slate-500",
                    "{help}"
                }
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let has_error = props.error.is_some();
    let input_class = build_input_class(has_error, props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-slate-300 mb-1.5",
                    "{label}"
                    if props.required {
                        span { class: "text-rose-400 ml-0.5", "*" }
                    }
                }
            }

            textarea {
                class: "{input_class}",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
            }

            if let Some(error) = &props.error {
                p {
                    class: "mt-1 text-xs text-rose-400",
                    "{error}"
                }
            }
        }
    }
}

// ============================================================================
// Number Input Component
// ============================================================================

/// Properties for NumberInput component
#[derive(Props, Clone, PartialEq)]
pub struct NumberInputProps {
    /// Input value
    pub value: f64,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Minimum allowed value
    #[props(default)]
    pub min: Option<f64>,

    /// Maximum allowed value
    #[props(default)]
    pub max: Option<f64>,

    /// Step size
    #[props(default = 0.1)]
    pub step: f64,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<f64>,
}

/// Numeric input component
#[component]
pub fn NumberInput(props: NumberInputProps) -> Element {
    let has_error = props.error.is_some();
    let input_class = build_input_class(has_error, props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-slate-300 mb-1.5",
                    "{label}"
                }
            }

            input {
                class: "{input_class}",
                r#type: "number",
                value: "{props.value}",
                min: props.min.map(|m| m.to_string()),
                max: props.max.map(|m| m.to_string()),
                step: "{props.step}",
                disabled: props.disabled,
                oninput: move |e| {
                    if let Ok(parsed) = e.value().parse::<f64>() {
                        props.on_change.call(parsed);
                    }
                },
            }

            if let Some(error) = &props.error {
                p {
                    class: "mt-1 text-xs text-rose-400",
                    "{error}"
                }
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// An option in a Select dropdown
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    /// Value submitted when selected
    pub value: String,
    /// Label shown to the user
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Currently selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder shown as a disabled first option
    #[props(default)]
    pub placeholder: Option<String>,

    /// Whether the select is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown selection component
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-slate-300 mb-1.5",
                    "{label}"
                }
            }

            select {
                class: "w-full px-3 py-2 bg-slate-700 border border-slate-600 rounded-lg text-sm text-slate-100 focus:outline-none focus:ring-2 focus:ring-indigo-500",
                value: "{props.value}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        disabled: true,
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }

                for opt in &props.options {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == props.value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Toggle Component
// ============================================================================

/// Properties for Toggle component
#[derive(Props, Clone, PartialEq)]
pub struct ToggleProps {
    /// Whether the toggle is on
    pub checked: bool,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Help text shown below the toggle
    #[props(default)]
    pub help_text: Option<String>,

    /// Whether the toggle is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Switch-style toggle component
#[component]
pub fn Toggle(props: ToggleProps) -> Element {
    let track_class = if props.checked {
        "bg-indigo-600"
    } else {
        "bg-slate-600"
    };
    let knob_class = if props.checked {
        "translate-x-4"
    } else {
        "translate-x-0"
    };

    rsx! {
        div {
            class: "input-group",

            div {
                class: "flex items-center gap-3",

                button {
                    r#type: "button",
                    class: "relative inline-flex h-5 w-9 items-center rounded-full transition-colors {track_class}",
                    class: if props.disabled { "opacity-50 cursor-not-allowed" } else { "" },
                    disabled: props.disabled,
                    onclick: move |_| props.on_change.call(!props.checked),

                    span {
                        class: "inline-block h-4 w-4 transform rounded-full bg-white transition-transform ml-0.5 {knob_class}",
                    }
                }

                if let Some(label) = &props.label {
                    span { class: "text-sm text-slate-300", "{label}" }
                }
            }

            if let Some(help) = &props.help_text {
                p {
                    class: "mt-1 text-xs text-slate-500",
                    "{help}"
                }
            }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Build the shared input class string
fn build_input_class(has_error: bool, disabled: bool) -> String {
    let mut class = String::from(
        "w-full px-3 py-2 bg-slate-700 border rounded-lg text-sm text-slate-100 \
         placeholder-slate-500 focus:outline-none focus:ring-2 transition-colors",
    );

    if has_error {
        class.push_str(" border-rose-500 focus:ring-rose-500");
    } else {
        class.push_str(" border-slate-600 focus:ring-indigo-500");
    }

    if disabled {
        class.push_str(" opacity-50 cursor-not-allowed");
    }

    class
}
