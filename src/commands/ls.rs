//! One-shot group listing command (`groupdeck ls`)
//!
//! Prints one page of matching groups as a table, or the raw listing
//! response as JSON for scripting.

use jiff::Timestamp;
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::commands::build_directory;
use crate::config::Config;
use crate::directory::GroupQuery;
use crate::display::{
    format_labels_summary, format_relative_time, format_showing_range, truncate_text,
};
use crate::error::Result;
use crate::types::{FilterState, GroupRecord, PaginationState};
use crate::view_link::ViewLink;

/// Flag values for `groupdeck ls`
#[derive(Debug, Default)]
pub struct LsOptions {
    pub phone: Option<String>,
    pub search: Option<String>,
    pub project: Option<String>,
    pub labels: Vec<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub view: Option<String>,
    pub server: Option<String>,
    pub demo: bool,
    pub output_json: bool,
}

/// A row in the group list table
#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Project")]
    project: String,
    #[tabled(rename = "Labels")]
    labels: String,
    #[tabled(rename = "Members")]
    members: u32,
    #[tabled(rename = "Updated")]
    updated: String,
}

/// List groups matching the filters
pub async fn cmd_ls(options: LsOptions) -> Result<()> {
    let config = Config::load()?;
    let directory = build_directory(&config, options.server.as_deref(), options.demo)?;

    let (filter, page, page_size) = resolve_query(&options, &config);
    let query = GroupQuery::new(&filter, page, page_size);
    let result = directory.list_groups(&query).await?;

    if options.output_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.groups.is_empty() {
        println!("No groups found");
        return Ok(());
    }

    let use_color = atty::is(atty::Stream::Stdout);
    let now = Timestamp::now();
    let rows: Vec<GroupRow> = result
        .groups
        .iter()
        .map(|group| group_row(group, now, use_color))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    let pagination = PaginationState {
        page,
        page_size,
        total: result.pagination.total,
    };
    let range = format_showing_range(&pagination);
    if use_color {
        println!("{}", range.dimmed());
    } else {
        println!("{}", range);
    }

    Ok(())
}

/// Merge `--view` with the explicit flags; explicit flags win. The
/// configured page size applies only when neither source names one.
fn resolve_query(options: &LsOptions, config: &Config) -> (FilterState, usize, usize) {
    let view = options.view.as_deref().map(ViewLink::decode);
    let had_view = view.is_some();
    let base = view.unwrap_or_default();

    let mut filter = base.filter;
    if let Some(phone) = &options.phone {
        filter.phone = phone.clone();
    }
    if let Some(search) = &options.search {
        filter.search = search.clone();
    }
    if let Some(project) = &options.project {
        filter.project = project.clone();
    }
    if !options.labels.is_empty() {
        filter.labels = options.labels.clone();
    }

    let page = options.page.unwrap_or(base.page);
    let page_size = match options.page_size {
        Some(size) => size,
        None if had_view => base.page_size,
        None => config.page_size(),
    };

    (filter, page, page_size)
}

/// Build one table row: marker and name, with the description indented on a
/// second line when present
fn group_row(group: &GroupRecord, now: Timestamp, use_color: bool) -> GroupRow {
    let marker = match (group.is_active, use_color) {
        (true, true) => "●".green().to_string(),
        (false, true) => "○".dimmed().to_string(),
        (true, false) => "●".to_string(),
        (false, false) => "○".to_string(),
    };

    let mut name = format!("{} {}", marker, group.name);
    if let Some(description) = group.description.as_deref() {
        let summary = truncate_text(description, 40);
        let summary = if use_color {
            summary.dimmed().to_string()
        } else {
            summary
        };
        name.push_str(&format!("\n  {}", summary));
    }

    GroupRow {
        name,
        project: group
            .project
            .clone()
            .unwrap_or_else(|| "General".to_string()),
        labels: format_labels_summary(&group.labels),
        members: group.member_count,
        updated: format_relative_time(&group.updated_at, now),
    }
}
