//! Dashboard model types for testable state management
//!
//! This module separates state (DashboardState) from view model
//! (DashboardViewModel), enabling comprehensive unit testing of the filter,
//! pagination, debounce, and fetch-ordering behavior without the iocraft
//! framework.

use iocraft::prelude::{KeyCode, KeyModifiers};
use jiff::Timestamp;

use crate::directory::GroupPage;
use crate::display::{
    format_date_for_display, format_labels_summary, format_relative_time, format_showing_range,
    truncate_text,
};
use crate::tui::components::footer::Shortcut;
use crate::tui::components::toast::{Toast, ToastLevel};
use crate::types::{FilterState, GroupRecord, LookupSets, PHONE_ALL, PaginationState,
    next_page_size};
use crate::view_link::ViewLink;

/// Quiet period after the last search keystroke before the term commits.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Display label for the `all` phone sentinel.
pub const ALL_PHONES_LABEL: &str = "All phone numbers";

/// Display label for the empty project filter.
pub const ALL_PROJECTS_LABEL: &str = "All projects";

// ============================================================================
// State Types
// ============================================================================

/// Which kind of listing fetch is currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing in flight
    #[default]
    Idle,
    /// Full reload, blanking the table (page 1 of a filter combination)
    Full,
    /// Page turn within the current filter combination; rows stay visible
    Pagination,
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone)]
pub struct DashboardState {
    // Data
    /// The current page of groups, as returned by the directory
    pub groups: Vec<GroupRecord>,
    /// Filter-option values (projects, labels, phones)
    pub lookups: LookupSets,

    // Query
    /// Active filter criteria
    pub filter: FilterState,
    /// Page position and server-reported total
    pub pagination: PaginationState,

    // Navigation
    /// Index of the selected row on the current page
    pub selected_index: usize,
    /// Snapshot of the group shown in the side panel, if open
    pub panel_group: Option<GroupRecord>,

    // Search
    /// Whether the search input has focus
    pub search_active: bool,
    /// Live (uncommitted) search text
    pub search_input: String,
    /// Bumped whenever the model itself rewrites `search_input`; the view
    /// mirrors the buffer into its text-input state when this advances
    pub search_revision: u64,
    /// Bumped on every search keystroke; a debounce timer only commits when
    /// its captured epoch is still current
    pub debounce_epoch: u64,

    // Fetch bookkeeping
    /// Bumped whenever a new listing fetch is needed; completions carrying
    /// an older generation are discarded
    pub fetch_generation: u64,
    /// Which listing fetch is in flight
    pub load_phase: LoadPhase,
    /// Blocking error from the most recent listing fetch
    pub error: Option<String>,
    /// Whether the project lookup is still loading
    pub projects_loading: bool,
    /// Whether the label lookup is still loading
    pub labels_loading: bool,
    /// Whether the phone lookup is still loading
    pub phones_loading: bool,
    /// Lookup data was supplied by the caller; the view skips lookup fetches
    pub lookups_prefetched: bool,

    // Feedback
    /// Optional toast notification to display
    pub toast: Option<Toast>,

    // App
    /// Whether the application should exit
    pub should_exit: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            lookups: LookupSets::default(),
            filter: FilterState::default(),
            pagination: PaginationState::default(),
            selected_index: 0,
            panel_group: None,
            search_active: false,
            search_input: String::new(),
            search_revision: 0,
            debounce_epoch: 0,
            fetch_generation: 1,
            load_phase: LoadPhase::Full,
            error: None,
            projects_loading: true,
            labels_loading: true,
            phones_loading: true,
            lookups_prefetched: false,
            toast: None,
            should_exit: false,
        }
    }
}

impl DashboardState {
    /// Build the initial state from a decoded view link.
    ///
    /// The first listing fetch always runs (generation 1 is pending from the
    /// start); caller-supplied lookup data suppresses the lookup fetches.
    pub fn new(link: ViewLink, initial_lookups: Option<LookupSets>) -> Self {
        let search_input = link.filter.search.clone();
        let mut state = Self {
            filter: link.filter,
            search_input,
            pagination: PaginationState {
                page: link.page,
                page_size: link.page_size,
                total: 0,
            },
            ..Self::default()
        };
        if let Some(lookups) = initial_lookups {
            state.lookups = lookups;
            state.projects_loading = false;
            state.labels_loading = false;
            state.phones_loading = false;
            state.lookups_prefetched = true;
        }
        state
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// All possible actions on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    // Navigation
    /// Move the row selection up
    MoveUp,
    /// Move the row selection down
    MoveDown,
    /// Jump to the first row on the page
    GoToTop,
    /// Jump to the last row on the page
    GoToBottom,

    // Paging
    /// Go to the next page, if any
    NextPage,
    /// Go to the previous page, if any
    PrevPage,
    /// Advance the page size through the fixed choices
    CyclePageSize,

    // Filters
    /// Step the phone selector through `all` plus the known numbers
    CyclePhone { reverse: bool },
    /// Step the project filter through "no filter" plus the known projects
    CycleProject { reverse: bool },
    /// Toggle the label at the given lookup index in the label filter
    ToggleLabel(usize),
    /// Reset every filter and return to page 1
    ClearFilters,

    // Search
    /// Focus the search input
    FocusSearch,
    /// Update the live search text (from the text input)
    UpdateSearch(String),
    /// Commit the search text immediately and leave search mode
    SubmitSearch,
    /// Leave search mode, reverting the input to the committed term
    CancelSearch,
    /// A debounce timer fired; commits only if its epoch is still current
    DebounceElapsed { epoch: u64 },

    // Panel
    /// Open the side panel on the selected row
    OpenPanel,
    /// Close the side panel
    ClosePanel,

    // Data
    /// Re-run the current listing fetch
    Refresh,
    /// A listing fetch finished; stale generations are discarded
    FetchCompleted {
        generation: u64,
        result: Result<GroupPage, String>,
    },
    /// Project lookup finished
    ProjectsLoaded(Vec<String>),
    /// Project lookup failed; the filter degrades to "no options"
    ProjectsFailed,
    /// Label lookup finished
    LabelsLoaded(Vec<String>),
    /// Label lookup failed
    LabelsFailed,
    /// Phone lookup finished
    PhonesLoaded(Vec<String>),
    /// Phone lookup failed; the selector degrades to the sentinel entry
    PhonesFailed,

    // Feedback
    /// Show a toast notification
    ShowToast { message: String, level: ToastLevel },
    /// Dismiss the toast notification
    DismissToast,

    // Clipboard (handled externally by the view)
    /// Copy the current view link to the clipboard
    CopyLink,

    // App
    /// Quit the application
    Quit,
}

// ============================================================================
// View Model Types
// ============================================================================

/// Computed view model for rendering the entire dashboard
#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    /// Phone selector display label
    pub phone_label: String,
    /// Project filter display label
    pub project_label: String,
    /// Numbered label-filter choices (at most nine)
    pub label_choices: Vec<LabelChoice>,
    /// Whether any filter diverges from the defaults
    pub has_active_filters: bool,
    /// Current page size
    pub page_size: usize,
    /// Total matching groups, across all pages
    pub total: usize,
    /// Rows for the current page
    pub rows: Vec<GroupRowViewModel>,
    /// Index of the selected row
    pub selected_index: usize,
    /// "Showing X to Y of Z groups", or the empty placeholder
    pub showing: String,
    /// "Page X of Y"
    pub page_label: String,
    /// Side panel content, if open
    pub panel: Option<PanelViewModel>,
    /// Current search text and focus
    pub search_focused: bool,
    /// Whether the project lookup is still loading
    pub projects_loading: bool,
    /// Whether the label lookup is still loading
    pub labels_loading: bool,
    /// Whether a full reload is in flight
    pub is_loading: bool,
    /// Whether a page turn is in flight
    pub is_paginating: bool,
    /// Blocking listing error, if any
    pub error: Option<String>,
    /// Toast notification to display
    pub toast: Option<Toast>,
    /// Keyboard shortcuts to display in the footer
    pub shortcuts: Vec<Shortcut>,
}

/// One numbered label-filter choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelChoice {
    /// 1-based display number (the key that toggles it)
    pub number: usize,
    pub name: String,
    /// Whether the label is part of the active filter
    pub active: bool,
}

/// One table row, with display strings precomputed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRowViewModel {
    pub name: String,
    pub project: String,
    pub labels: String,
    pub members: String,
    pub updated: String,
    pub is_active: bool,
    pub is_selected: bool,
}

/// Side panel content for the selected group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelViewModel {
    pub name: String,
    pub is_active: bool,
    pub description: String,
    pub project: String,
    pub labels: Vec<String>,
    pub members: String,
    pub created: String,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Mark a new listing fetch as needed.
///
/// Must run after the page position has been updated: the load phase blanks
/// the table only for page-1 loads, matching the full/pagination split.
fn schedule_fetch(state: &mut DashboardState) {
    state.fetch_generation += 1;
    state.error = None;
    state.load_phase = if state.pagination.page == 1 {
        LoadPhase::Full
    } else {
        LoadPhase::Pagination
    };
}

/// Phone selector options: the `all` sentinel followed by the known numbers.
fn phone_options(lookups: &LookupSets) -> Vec<String> {
    let mut options = vec![PHONE_ALL.to_string()];
    options.extend(lookups.phones.iter().cloned());
    options
}

/// Project filter options: "no filter" followed by the known projects.
fn project_options(lookups: &LookupSets) -> Vec<String> {
    let mut options = vec![String::new()];
    options.extend(lookups.projects.iter().cloned());
    options
}

/// Step through `options` from `current`, wrapping at either end. Unknown
/// current values restart at the first option.
fn cycle_option(options: &[String], current: &str, reverse: bool) -> String {
    let len = options.len();
    if len == 0 {
        return current.to_string();
    }
    let idx = options.iter().position(|o| o == current).unwrap_or(0);
    let next = if reverse {
        (idx + len - 1) % len
    } else {
        (idx + 1) % len
    };
    options[next].clone()
}

/// Commit the live search text as the active search term.
fn commit_search(state: &mut DashboardState) {
    if state.search_input != state.filter.search {
        state.filter.search = state.search_input.clone();
        state.pagination.page = 1;
        state.selected_index = 0;
        schedule_fetch(state);
    }
}

/// The canonical view link for the current state.
pub fn current_view_link(state: &DashboardState) -> String {
    ViewLink {
        filter: state.filter.clone(),
        page: state.pagination.page,
        page_size: state.pagination.page_size,
    }
    .encode()
}

/// Pure function: apply action to state (reducer pattern)
///
/// This function takes the current state and an action, returning the new
/// state. It contains only pure state transitions - no side effects like
/// network I/O. Fetches are requested by bumping `fetch_generation`; the
/// view watches the counter and launches the actual request.
pub fn reduce_dashboard_state(
    mut state: DashboardState,
    action: DashboardAction,
) -> DashboardState {
    let row_count = state.groups.len();

    match action {
        // Navigation
        DashboardAction::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
        }
        DashboardAction::MoveDown => {
            if row_count > 0 {
                state.selected_index = (state.selected_index + 1).min(row_count - 1);
            }
        }
        DashboardAction::GoToTop => {
            state.selected_index = 0;
        }
        DashboardAction::GoToBottom => {
            if row_count > 0 {
                state.selected_index = row_count - 1;
            }
        }

        // Paging
        DashboardAction::NextPage => {
            let total_pages = state.pagination.total_pages();
            if state.pagination.page < total_pages {
                state.pagination.page += 1;
                state.selected_index = 0;
                schedule_fetch(&mut state);
            }
        }
        DashboardAction::PrevPage => {
            if state.pagination.page > 1 {
                state.pagination.page -= 1;
                state.selected_index = 0;
                schedule_fetch(&mut state);
            }
        }
        DashboardAction::CyclePageSize => {
            state.pagination.page_size = next_page_size(state.pagination.page_size);
            state.selected_index = 0;
            schedule_fetch(&mut state);
        }

        // Filters
        DashboardAction::CyclePhone { reverse } => {
            let options = phone_options(&state.lookups);
            let next = cycle_option(&options, &state.filter.phone, reverse);
            if next != state.filter.phone {
                state.filter.phone = next;
                state.pagination.page = 1;
                state.selected_index = 0;
                // Changing the phone scope invalidates the panel snapshot
                state.panel_group = None;
                schedule_fetch(&mut state);
            }
        }
        DashboardAction::CycleProject { reverse } => {
            let options = project_options(&state.lookups);
            let next = cycle_option(&options, &state.filter.project, reverse);
            if next != state.filter.project {
                state.filter.project = next;
                state.pagination.page = 1;
                state.selected_index = 0;
                schedule_fetch(&mut state);
            }
        }
        DashboardAction::ToggleLabel(index) => {
            if let Some(label) = state.lookups.labels.get(index).cloned() {
                match state.filter.labels.iter().position(|l| l == &label) {
                    Some(pos) => {
                        state.filter.labels.remove(pos);
                    }
                    None => {
                        state.filter.labels.push(label);
                    }
                }
                state.pagination.page = 1;
                state.selected_index = 0;
                schedule_fetch(&mut state);
            }
        }
        DashboardAction::ClearFilters => {
            let already_clear = state.filter == FilterState::default()
                && state.search_input.is_empty()
                && state.pagination.page == 1;
            if !already_clear {
                state.filter = FilterState::default();
                state.search_input.clear();
                state.search_revision += 1;
                state.debounce_epoch += 1;
                state.pagination.page = 1;
                state.selected_index = 0;
                schedule_fetch(&mut state);
            }
        }

        // Search
        DashboardAction::FocusSearch => {
            state.search_active = true;
        }
        DashboardAction::UpdateSearch(text) => {
            if text != state.search_input {
                state.search_input = text;
                state.debounce_epoch += 1;
            }
        }
        DashboardAction::SubmitSearch => {
            state.search_active = false;
            // Invalidate any pending debounce timer
            state.debounce_epoch += 1;
            commit_search(&mut state);
        }
        DashboardAction::CancelSearch => {
            state.search_active = false;
            state.debounce_epoch += 1;
            if state.search_input != state.filter.search {
                state.search_input = state.filter.search.clone();
                state.search_revision += 1;
            }
        }
        DashboardAction::DebounceElapsed { epoch } => {
            if epoch == state.debounce_epoch {
                commit_search(&mut state);
            }
        }

        // Panel
        DashboardAction::OpenPanel => {
            state.panel_group = state.groups.get(state.selected_index).cloned();
        }
        DashboardAction::ClosePanel => {
            state.panel_group = None;
        }

        // Data
        DashboardAction::Refresh => {
            schedule_fetch(&mut state);
        }
        DashboardAction::FetchCompleted { generation, result } => {
            // A newer fetch has been scheduled since this one started
            if generation != state.fetch_generation {
                return state;
            }
            state.load_phase = LoadPhase::Idle;
            match result {
                Ok(page) => {
                    state.groups = page.groups;
                    state.pagination.total = page.pagination.total;
                    state.error = None;
                    if state.selected_index >= state.groups.len() {
                        state.selected_index = state.groups.len().saturating_sub(1);
                    }
                }
                Err(message) => {
                    // Previous rows stay visible underneath the error banner
                    state.error = Some(message);
                }
            }
        }
        DashboardAction::ProjectsLoaded(projects) => {
            state.lookups.projects = projects;
            state.projects_loading = false;
        }
        DashboardAction::ProjectsFailed => {
            state.projects_loading = false;
        }
        DashboardAction::LabelsLoaded(labels) => {
            state.lookups.labels = labels;
            state.labels_loading = false;
        }
        DashboardAction::LabelsFailed => {
            state.labels_loading = false;
        }
        DashboardAction::PhonesLoaded(phones) => {
            state.lookups.phones = phones;
            state.phones_loading = false;
        }
        DashboardAction::PhonesFailed => {
            state.phones_loading = false;
        }

        // Feedback
        DashboardAction::ShowToast { message, level } => {
            state.toast = Some(Toast::new(message, level));
        }
        DashboardAction::DismissToast => {
            state.toast = None;
        }

        // Clipboard (the view writes to the clipboard and reports via toast)
        DashboardAction::CopyLink => {}

        // App
        DashboardAction::Quit => {
            state.should_exit = true;
        }
    }

    state
}

/// Keyboard shortcuts for the footer, depending on the input mode
fn compute_shortcuts(state: &DashboardState) -> Vec<Shortcut> {
    if state.search_active {
        return vec![
            Shortcut::new("Enter", "apply"),
            Shortcut::new("Esc", "cancel"),
        ];
    }

    let mut shortcuts = vec![
        Shortcut::new("j/k", "nav"),
        Shortcut::new("h/l", "page"),
        Shortcut::new("/", "search"),
        Shortcut::new("f", "phone"),
        Shortcut::new("p", "project"),
        Shortcut::new("1-9", "labels"),
        Shortcut::new("s", "page size"),
        Shortcut::new("x", "clear"),
        Shortcut::new("Enter", "details"),
        Shortcut::new("y", "copy link"),
    ];
    if state.panel_group.is_some() {
        shortcuts.push(Shortcut::new("Esc", "close"));
    }
    shortcuts.push(Shortcut::new("q", "quit"));
    shortcuts
}

/// Pure function: compute view model from state
///
/// Takes the raw dashboard state and produces a fully computed view model
/// that can be directly used for rendering. `now` anchors the relative
/// "updated" timestamps.
pub fn compute_dashboard_view_model(state: &DashboardState, now: Timestamp) -> DashboardViewModel {
    let phone_label = match state.filter.phone_restriction() {
        Some(phone) => phone.to_string(),
        None => ALL_PHONES_LABEL.to_string(),
    };
    let project_label = if state.filter.project.is_empty() {
        ALL_PROJECTS_LABEL.to_string()
    } else {
        state.filter.project.clone()
    };

    let label_choices = state
        .lookups
        .labels
        .iter()
        .take(9)
        .enumerate()
        .map(|(i, label)| LabelChoice {
            number: i + 1,
            name: label.clone(),
            active: state.filter.labels.contains(label),
        })
        .collect();

    let rows = state
        .groups
        .iter()
        .enumerate()
        .map(|(i, group)| GroupRowViewModel {
            name: truncate_text(&group.name, 32),
            project: truncate_text(group.project.as_deref().unwrap_or("General"), 14),
            labels: format_labels_summary(&group.labels),
            members: group.member_count.to_string(),
            updated: format_relative_time(&group.updated_at, now),
            is_active: group.is_active,
            is_selected: i == state.selected_index,
        })
        .collect();

    let showing = if state.pagination.total == 0 {
        "No groups found".to_string()
    } else {
        format_showing_range(&state.pagination)
    };
    let page_label = format!(
        "Page {} of {}",
        state.pagination.page,
        state.pagination.total_pages().max(1)
    );

    let panel = state.panel_group.as_ref().map(|group| PanelViewModel {
        name: group.name.clone(),
        is_active: group.is_active,
        description: group
            .description
            .clone()
            .unwrap_or_else(|| "No description".to_string()),
        project: group
            .project
            .clone()
            .unwrap_or_else(|| "General".to_string()),
        labels: group.labels.clone(),
        members: group.member_count.to_string(),
        created: format_date_for_display(&group.created_at),
    });

    DashboardViewModel {
        phone_label,
        project_label,
        label_choices,
        has_active_filters: state.filter.has_active_filters(),
        page_size: state.pagination.page_size,
        total: state.pagination.total,
        rows,
        selected_index: state.selected_index,
        showing,
        page_label,
        panel,
        search_focused: state.search_active,
        projects_loading: state.projects_loading,
        labels_loading: state.labels_loading,
        is_loading: state.load_phase == LoadPhase::Full,
        is_paginating: state.load_phase == LoadPhase::Pagination,
        error: state.error.clone(),
        toast: state.toast.clone(),
        shortcuts: compute_shortcuts(state),
    }
}

/// Convert a key event to a DashboardAction (pure function)
///
/// Maps keyboard events to abstract actions, enabling unit testing of the
/// key bindings without any terminal. Search mode captures all input first;
/// Esc peels UI layers (toast, panel) before quitting.
///
/// Returns `None` if the key doesn't map to any action.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &DashboardState,
) -> Option<DashboardAction> {
    if state.search_active {
        return search_key_to_action(code, modifiers);
    }

    if code == KeyCode::Esc {
        if state.toast.is_some() {
            return Some(DashboardAction::DismissToast);
        }
        if state.panel_group.is_some() {
            return Some(DashboardAction::ClosePanel);
        }
        return Some(DashboardAction::Quit);
    }

    normal_key_to_action(code, modifiers)
}

/// Convert a key event in search mode to a DashboardAction
fn search_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<DashboardAction> {
    match (code, modifiers) {
        // Escape reverts and exits
        (KeyCode::Esc, _) => Some(DashboardAction::CancelSearch),
        // Enter commits immediately
        (KeyCode::Enter, _) => Some(DashboardAction::SubmitSearch),
        // Ctrl+Q quits
        (KeyCode::Char('q'), m) if m.contains(KeyModifiers::CONTROL) => {
            Some(DashboardAction::Quit)
        }
        // Other characters are handled by the search box component
        _ => None,
    }
}

/// Convert a key event in normal mode to a DashboardAction
fn normal_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<DashboardAction> {
    // Shifted keys reverse the filter cycles
    if modifiers.contains(KeyModifiers::SHIFT) {
        return match code {
            KeyCode::Char('F') | KeyCode::Char('f') => {
                Some(DashboardAction::CyclePhone { reverse: true })
            }
            KeyCode::Char('P') | KeyCode::Char('p') => {
                Some(DashboardAction::CycleProject { reverse: true })
            }
            KeyCode::Char('G') | KeyCode::Char('g') => Some(DashboardAction::GoToBottom),
            _ => None,
        };
    }

    match (code, modifiers) {
        // Navigation
        (KeyCode::Char('j') | KeyCode::Down, KeyModifiers::NONE) => Some(DashboardAction::MoveDown),
        (KeyCode::Char('k') | KeyCode::Up, KeyModifiers::NONE) => Some(DashboardAction::MoveUp),
        (KeyCode::Char('g'), KeyModifiers::NONE) => Some(DashboardAction::GoToTop),
        (KeyCode::Char('G'), KeyModifiers::NONE) => Some(DashboardAction::GoToBottom),

        // Paging
        (KeyCode::Char('h') | KeyCode::Left, KeyModifiers::NONE) => Some(DashboardAction::PrevPage),
        (KeyCode::Char('l') | KeyCode::Right, KeyModifiers::NONE) => {
            Some(DashboardAction::NextPage)
        }
        (KeyCode::Char('s'), KeyModifiers::NONE) => Some(DashboardAction::CyclePageSize),

        // Filters
        (KeyCode::Char('f'), KeyModifiers::NONE) => {
            Some(DashboardAction::CyclePhone { reverse: false })
        }
        (KeyCode::Char('F'), KeyModifiers::NONE) => {
            Some(DashboardAction::CyclePhone { reverse: true })
        }
        (KeyCode::Char('p'), KeyModifiers::NONE) => {
            Some(DashboardAction::CycleProject { reverse: false })
        }
        (KeyCode::Char('P'), KeyModifiers::NONE) => {
            Some(DashboardAction::CycleProject { reverse: true })
        }
        (KeyCode::Char('x'), KeyModifiers::NONE) => Some(DashboardAction::ClearFilters),

        // Search
        (KeyCode::Char('/'), KeyModifiers::NONE) => Some(DashboardAction::FocusSearch),

        // Panel
        (KeyCode::Enter, KeyModifiers::NONE) => Some(DashboardAction::OpenPanel),

        // Data
        (KeyCode::Char('r'), KeyModifiers::NONE) => Some(DashboardAction::Refresh),

        // Clipboard
        (KeyCode::Char('y'), KeyModifiers::NONE) => Some(DashboardAction::CopyLink),

        // App
        (KeyCode::Char('q'), KeyModifiers::NONE) => Some(DashboardAction::Quit),
        (KeyCode::Char('q'), m) if m.contains(KeyModifiers::CONTROL) => {
            Some(DashboardAction::Quit)
        }

        // Label toggles (1-9)
        (KeyCode::Char(c), KeyModifiers::NONE) if c.is_ascii_digit() && c != '0' => {
            Some(DashboardAction::ToggleLabel(c as usize - '1' as usize))
        }

        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
