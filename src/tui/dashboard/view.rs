//! Main dashboard view component
//!
//! Renders the group table with filter bar, search input, detail panel, and
//! footer. Every state transition flows through the pure reducer in `model`;
//! this module owns the side effects: directory fetches, the search debounce
//! timer, and the clipboard.

use std::sync::Arc;
use std::time::Duration;

use clipboard_rs::{Clipboard, ClipboardContext};
use iocraft::prelude::*;
use jiff::Timestamp;
use tracing::warn;

use crate::directory::memory::MemoryDirectory;
use crate::directory::{GroupQuery, SharedDirectory};
use crate::tui::components::{Footer, Header, InlineSearchBox, ToastLevel, render_toast};
use crate::tui::theme::theme;
use crate::types::LookupSets;
use crate::view_link::ViewLink;

use super::model::{
    DashboardAction, DashboardState, DashboardViewModel, SEARCH_DEBOUNCE_MS,
    compute_dashboard_view_model, current_view_link, key_to_action, reduce_dashboard_state,
};

/// A listing request captured at schedule time, so a late response can be
/// matched against the generation that scheduled it
struct FetchPlan {
    generation: u64,
    query: GroupQuery,
}

/// Run one action through the reducer, replacing the state in place
fn dispatch(mut state: State<DashboardState>, action: DashboardAction) {
    let current = state.read().clone();
    let next = reduce_dashboard_state(current, action);
    state.set(next);
}

/// Props for the Dashboard component
#[derive(Default, Props)]
pub struct DashboardProps {
    /// Directory backend; defaults to the built-in demo dataset
    pub directory: Option<SharedDirectory>,

    /// Initial filter and page position, usually decoded from a view link
    pub initial: ViewLink,

    /// Lookup data fetched ahead of time; suppresses the lookup requests
    pub initial_lookups: Option<LookupSets>,
}

/// Main dashboard component
#[component]
pub fn Dashboard(props: &DashboardProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let theme = theme();

    let directory: SharedDirectory = props
        .directory
        .clone()
        .unwrap_or_else(|| Arc::new(MemoryDirectory::demo()));

    let dashboard_state = hooks
        .use_state(|| DashboardState::new(props.initial.clone(), props.initial_lookups.clone()));

    // Text buffer owned by the search input; reconciled with the model below
    let mut search_input = hooks.use_state(|| props.initial.filter.search.clone());
    let mut applied_search_revision = hooks.use_state(|| 0u64);

    // Markers for the render-driven effects
    let mut launched_generation = hooks.use_state(|| 0u64);
    let mut launched_epoch = hooks.use_state(|| 0u64);
    let mut lookups_started = hooks.use_state(|| false);

    // Listing fetches: the reducer bumps `fetch_generation`, the render
    // below launches one request per generation.
    let mut fetch_handler: Handler<FetchPlan> = hooks.use_async_handler({
        let directory = directory.clone();
        move |plan: FetchPlan| {
            let directory = directory.clone();
            async move {
                let result = directory
                    .list_groups(&plan.query)
                    .await
                    .map_err(|e| e.to_string());
                dispatch(
                    dashboard_state,
                    DashboardAction::FetchCompleted {
                        generation: plan.generation,
                        result,
                    },
                );
            }
        }
    });

    // Search debounce: one timer per epoch, stale epochs are discarded by
    // the reducer.
    let mut debounce_handler: Handler<u64> = hooks.use_async_handler(move |epoch: u64| async move {
        tokio::time::sleep(Duration::from_millis(SEARCH_DEBOUNCE_MS)).await;
        dispatch(dashboard_state, DashboardAction::DebounceElapsed { epoch });
    });

    let mut projects_handler: Handler<()> = hooks.use_async_handler({
        let directory = directory.clone();
        move |_: ()| {
            let directory = directory.clone();
            async move {
                match directory.list_projects().await {
                    Ok(projects) => {
                        dispatch(dashboard_state, DashboardAction::ProjectsLoaded(projects));
                    }
                    Err(e) => {
                        warn!("failed to load projects: {}", e);
                        dispatch(dashboard_state, DashboardAction::ProjectsFailed);
                    }
                }
            }
        }
    });

    let mut labels_handler: Handler<()> = hooks.use_async_handler({
        let directory = directory.clone();
        move |_: ()| {
            let directory = directory.clone();
            async move {
                match directory.list_labels().await {
                    Ok(labels) => {
                        dispatch(dashboard_state, DashboardAction::LabelsLoaded(labels));
                    }
                    Err(e) => {
                        warn!("failed to load labels: {}", e);
                        dispatch(dashboard_state, DashboardAction::LabelsFailed);
                    }
                }
            }
        }
    });

    let mut phones_handler: Handler<()> = hooks.use_async_handler({
        let directory = directory.clone();
        move |_: ()| {
            let directory = directory.clone();
            async move {
                match directory.list_phones().await {
                    Ok(phones) => {
                        dispatch(dashboard_state, DashboardAction::PhonesLoaded(phones));
                    }
                    Err(e) => {
                        warn!("failed to load phone numbers: {}", e);
                        dispatch(dashboard_state, DashboardAction::PhonesFailed);
                    }
                }
            }
        }
    });

    // Reconcile the search text input with the model. A bumped revision
    // means the model rewrote the buffer (cancel, clear filters); any other
    // difference is the user typing.
    {
        let (model_input, model_revision) = {
            let state = dashboard_state.read();
            (state.search_input.clone(), state.search_revision)
        };
        if model_revision != applied_search_revision.get() {
            applied_search_revision.set(model_revision);
            search_input.set(model_input);
        } else {
            let typed = search_input.to_string();
            if typed != model_input {
                dispatch(dashboard_state, DashboardAction::UpdateSearch(typed));
            }
        }
    }

    let snapshot = dashboard_state.read().clone();

    // Launch the listing fetch for a newly scheduled generation. Generation 1
    // is pending from the start, so this also covers the initial load.
    if snapshot.fetch_generation != launched_generation.get() {
        launched_generation.set(snapshot.fetch_generation);
        fetch_handler(FetchPlan {
            generation: snapshot.fetch_generation,
            query: GroupQuery::new(
                &snapshot.filter,
                snapshot.pagination.page,
                snapshot.pagination.page_size,
            ),
        });
    }

    // Arm the debounce timer for a new epoch
    if snapshot.debounce_epoch != launched_epoch.get() {
        launched_epoch.set(snapshot.debounce_epoch);
        debounce_handler(snapshot.debounce_epoch);
    }

    // Kick off the lookup fetches once, unless the caller prefetched them
    if !lookups_started.get() {
        lookups_started.set(true);
        if !snapshot.lookups_prefetched {
            projects_handler(());
            labels_handler(());
            phones_handler(());
        }
    }

    hooks.use_terminal_events({
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let state = dashboard_state.read().clone();
                match key_to_action(code, modifiers, &state) {
                    Some(DashboardAction::CopyLink) => {
                        // The clipboard write happens here; the reducer only
                        // sees the resulting toast.
                        let link = current_view_link(&state);
                        let copied =
                            ClipboardContext::new().and_then(|clip| clip.set_text(link));
                        let (message, level) = match copied {
                            Ok(()) => ("View link copied".to_string(), ToastLevel::Success),
                            Err(_) => ("Clipboard unavailable".to_string(), ToastLevel::Error),
                        };
                        dispatch(dashboard_state, DashboardAction::ShowToast { message, level });
                    }
                    Some(action) => dispatch(dashboard_state, action),
                    None => {}
                }
            }
            _ => {}
        }
    });

    // Exit if requested
    if snapshot.should_exit {
        system.exit();
    }

    let vm = compute_dashboard_view_model(&snapshot, Timestamp::now());

    let status_line = if vm.is_paginating {
        format!("{} (updating...)", vm.showing)
    } else {
        vm.showing.clone()
    };
    let group_count = if vm.is_loading { None } else { Some(vm.total) };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            // Header row
            Header(
                phone: Some(vm.phone_label.clone()),
                group_count: group_count,
            )

            // Filter bar
            #(render_filter_bar(&vm))

            // Search bar
            View(
                width: 100pct,
                padding_left: 1,
                padding_right: 1,
                height: 1,
            ) {
                InlineSearchBox(
                    value: Some(search_input),
                    has_focus: vm.search_focused,
                )
            }

            // Listing error banner; stale rows stay visible below it
            #(render_error_banner(&vm))

            // Main content area
            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Row,
            ) {
                #(render_table(&vm))
                #(render_panel(&vm))
            }

            // Status row
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                flex_shrink: 0.0,
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
            ) {
                Text(content: status_line, color: theme.text_dimmed)
                Text(content: vm.page_label.clone(), color: theme.text_dimmed)
            }

            // Footer shortcuts
            Footer(shortcuts: vm.shortcuts.clone())

            // Toast overlay
            #(render_toast(&vm.toast))
        }
    }
}

/// Render the project, page-size, and label filter rows
fn render_filter_bar(vm: &DashboardViewModel) -> AnyElement<'static> {
    let theme = theme();

    let project_text = if vm.projects_loading {
        "loading...".to_string()
    } else {
        vm.project_label.clone()
    };
    let page_size_text = format!("{}/page", vm.page_size);

    let labels_placeholder = if vm.labels_loading {
        Some("loading...")
    } else if vm.label_choices.is_empty() {
        Some("none")
    } else {
        None
    };
    let label_choices = vm.label_choices.clone();

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                column_gap: 2,
            ) {
                View(flex_direction: FlexDirection::Row) {
                    Text(content: "Project: ", color: theme.text_dimmed)
                    Text(content: project_text, color: theme.project_tag)
                }
                View(flex_direction: FlexDirection::Row) {
                    Text(content: "Size: ", color: theme.text_dimmed)
                    Text(content: page_size_text, color: theme.text)
                }
                #(vm.has_active_filters.then(|| element! {
                    Text(content: "[filtered]", color: theme.highlight, weight: Weight::Bold)
                }))
            }
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                column_gap: 1,
            ) {
                Text(content: "Labels: ", color: theme.text_dimmed)
                #(labels_placeholder.map(|text| element! {
                    Text(content: text, color: theme.text_dimmed)
                }))
                #(label_choices.iter().map(|choice| {
                    element! {
                        Text(
                            content: format!("[{}] {}", choice.number, choice.name),
                            color: if choice.active { theme.label_tag } else { theme.text_dimmed },
                            weight: if choice.active { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }))
            }
        }
    }
    .into_any()
}

/// Render the group table: column headings plus one row per group
fn render_table(vm: &DashboardViewModel) -> AnyElement<'static> {
    let theme = theme();

    if vm.is_loading {
        return element! {
            View(
                flex_grow: 1.0,
                height: 100pct,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(content: "Loading groups...", color: theme.text_dimmed)
            }
        }
        .into_any();
    }

    if vm.rows.is_empty() {
        return element! {
            View(
                flex_grow: 1.0,
                height: 100pct,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(content: "No groups found", color: theme.text_dimmed)
            }
        }
        .into_any();
    }

    let rows = vm.rows.clone();

    element! {
        View(
            flex_grow: 1.0,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
        ) {
            View(
                width: 100pct,
                padding_left: 1,
                border_edges: Edges::Bottom,
                border_style: BorderStyle::Single,
                border_color: theme.border,
            ) {
                Text(
                    content: format!(
                        "  {:<34}{:<16}{:<28}{:>8}  {:<12}",
                        "Name", "Project", "Labels", "Members", "Updated"
                    ),
                    color: theme.text_dimmed,
                    weight: Weight::Bold,
                )
            }
            #(rows.iter().map(|row| {
                let marker = if row.is_active { "●" } else { "○" };
                element! {
                    View(
                        height: 1,
                        width: 100pct,
                        padding_left: 1,
                        background_color: if row.is_selected { Some(theme.highlight) } else { None },
                    ) {
                        Text(
                            content: format!("{} ", marker),
                            color: theme.active_color(row.is_active),
                        )
                        Text(
                            content: format!("{:<34}", row.name),
                            color: Color::White,
                            weight: if row.is_selected { Weight::Bold } else { Weight::Normal },
                        )
                        Text(
                            content: format!("{:<16}", row.project),
                            color: if row.is_selected { Color::White } else { theme.project_tag },
                        )
                        Text(
                            content: format!("{:<28}", row.labels),
                            color: if row.is_selected { Color::White } else { theme.label_tag },
                        )
                        Text(content: format!("{:>8}  ", row.members), color: Color::White)
                        Text(
                            content: format!("{:<12}", row.updated),
                            color: if row.is_selected { Color::White } else { theme.text_dimmed },
                        )
                    }
                }
            }))
        }
    }
    .into_any()
}

/// Render the listing-error banner
fn render_error_banner(vm: &DashboardViewModel) -> Option<AnyElement<'static>> {
    let theme = theme();
    let message = vm.error.clone()?;

    Some(
        element! {
            View(
                width: 100pct,
                flex_shrink: 0.0,
                padding_left: 1,
                padding_right: 1,
                border_style: BorderStyle::Round,
                border_color: theme.error,
            ) {
                Text(
                    content: format!("Error: {}", message),
                    color: theme.error,
                    weight: Weight::Bold,
                )
            }
        }
        .into_any(),
    )
}

/// Render the detail panel for the snapshotted group
fn render_panel(vm: &DashboardViewModel) -> Option<AnyElement<'static>> {
    let theme = theme();
    let panel = vm.panel.clone()?;

    let badge = if panel.is_active { "● Active" } else { "○ Inactive" };
    let labels_text = if panel.labels.is_empty() {
        "none".to_string()
    } else {
        panel.labels.join(", ")
    };

    Some(
        element! {
            View(
                width: 38,
                height: 100pct,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: theme.border_focused,
                overflow: Overflow::Hidden,
            ) {
                // Header
                View(
                    width: 100pct,
                    padding: 1,
                    flex_direction: FlexDirection::Column,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: panel.name.clone(), color: theme.text, weight: Weight::Bold)
                    Text(content: badge, color: theme.active_color(panel.is_active))
                }

                // Metadata
                View(
                    width: 100pct,
                    padding: 1,
                    flex_direction: FlexDirection::Column,
                ) {
                    Text(content: panel.description.clone(), color: theme.text)
                    View(height: 1)
                    Text(content: format!("Project: {}", panel.project), color: theme.project_tag)
                    Text(content: format!("Labels: {}", labels_text), color: theme.label_tag)
                    Text(content: format!("Members: {}", panel.members), color: theme.text)
                    Text(content: format!("Created: {}", panel.created), color: theme.text)
                }
            }
        }
        .into_any(),
    )
}
