//! Small Dioxus wrappers around Pico.css markup.
//! Pico must be linked by the app root for these to be styled.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

/// A centered container. Renders `<main class="container">`.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

#[derive(Props, PartialEq, Clone)]
pub struct CardProps {
    /// Rendered in bold inside the card header, when present.
    #[props(optional, into)]
    title: Option<String>,
    #[props(optional, into)]
    style: Option<String>,
    children: Element,
}

/// A card for grouping related content, as an `<article>`.
pub fn Card(props: CardProps) -> Element {
    rsx! {
        article {
            style: props.style.unwrap_or_default(),
            if let Some(title) = props.title {
                header {
                    strong { "{title}" }
                }
            }
            {props.children}
        }
    }
}

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn class(self, outline: bool) -> &'static str {
        match (self, outline) {
            (Self::Primary, false) => "",
            (Self::Primary, true) => "outline",
            (Self::Secondary, false) => "secondary",
            (Self::Secondary, true) => "secondary outline",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: props.button_type.class(props.outline),
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

/// Placeholder shown until the first data arrives.
#[component]
pub fn Loading(#[props(into)] label: String) -> Element {
    rsx! {
        div {
            "{label}"
            progress {}
        }
    }
}
