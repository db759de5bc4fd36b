//! App header bar component
//!
//! Displays the application title, the current phone scope, and the
//! matching group count.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Title (defaults to "groupdeck")
    pub title: Option<String>,

    /// Current phone selector value
    pub phone: Option<String>,

    /// Matching group count
    pub group_count: Option<usize>,
}

/// App header bar showing title, phone scope, and group count
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let title = props.title.clone().unwrap_or_else(|| "groupdeck".to_string());
    let left_text = match props.phone.as_ref() {
        Some(phone) => format!("{} [{}]", title, phone),
        None => title,
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: left_text,
                color: theme.text,
                weight: Weight::Bold,
            )
            #(props.group_count.map(|count| element! {
                Text(
                    content: format!("{} groups", count),
                    color: theme.text_dimmed,
                )
            }))
        }
    }
}
