//! CLI inspection entry point.
//!
//! # Responsibility
//! - Render one dashboard frame as plain text, independent of the UI shell.
//! - Exercise dataset loading, grouping and selection from the terminal.

use clap::Parser;
use dropdeck_core::{
    default_log_level, init_logging, load_dataset_from_path, seed_dataset, Dashboard,
    DashboardSnapshot, DetailPane, DropdownKind, MainContent, NotificationDate, ViewState,
};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "dropdeck")]
#[command(about = "Render the DropDeck notification dashboard as text")]
#[command(version)]
struct Cli {
    /// JSON fixture to load instead of the built-in seed
    #[arg(long)]
    fixture: Option<PathBuf>,
    /// Reference date for "Today" headers (YYYY-MM-DD, defaults to local date)
    #[arg(long, value_parser = parse_date)]
    today: Option<NotificationDate>,
    /// Active view: NOTIFICATIONS, AGENDA, CALENDAR or REPORTS
    #[arg(long, default_value = "NOTIFICATIONS", value_parser = parse_view)]
    view: ViewState,
    /// Notification id to select (defaults to the first notification)
    #[arg(long)]
    select: Option<String>,
    /// Open a sidebar dropdown before rendering (repeatable)
    #[arg(long = "open", value_parser = parse_dropdown)]
    open: Vec<DropdownKind>,
    /// Absolute directory for rolling log files
    #[arg(long)]
    log_dir: Option<String>,
    /// Log level (trace, debug, info, warn or error); needs --log-dir
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,
}

fn parse_date(raw: &str) -> Result<NotificationDate, String> {
    NotificationDate::parse(raw).map_err(|err| err.to_string())
}

fn parse_view(raw: &str) -> Result<ViewState, String> {
    raw.parse().map_err(|err: dropdeck_core::ViewParseError| err.to_string())
}

fn parse_dropdown(raw: &str) -> Result<DropdownKind, String> {
    raw.parse()
        .map_err(|err: dropdeck_core::DropdownParseError| err.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("dropdeck: {err}");
            return ExitCode::FAILURE;
        }
    }

    let dataset = match cli.fixture.as_deref() {
        Some(path) => match load_dataset_from_path(path) {
            Ok(dataset) => dataset,
            Err(err) => {
                eprintln!("dropdeck: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => seed_dataset(),
    };

    let initial = cli
        .select
        .clone()
        .or_else(|| dataset.notifications.first().map(|n| n.id.clone()));
    let mut dashboard = Dashboard::new(dataset, initial);
    dashboard.change_view(cli.view);
    for kind in &cli.open {
        dashboard.toggle_dropdown(*kind);
    }

    let today = cli.today.unwrap_or_else(NotificationDate::today_local);
    info!("event=cli_render module=cli status=start view={} today={}", cli.view, today);
    print!("{}", render(&dashboard.snapshot(today)));
    ExitCode::SUCCESS
}

fn render(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();
    let sidebar = &snapshot.sidebar;

    out.push_str(&format!(
        "[project] {}\n",
        sidebar.project_label.as_deref().unwrap_or("-")
    ));
    if sidebar.project_picker_open {
        for project in &sidebar.projects {
            out.push_str(&format!("    {}\n", project.name));
        }
    }
    if sidebar.create_menu_open {
        out.push_str(&format!("[{}]\n", sidebar.create_menu_title));
        for action in &sidebar.create_actions {
            out.push_str(&format!("    {}\n", action.label()));
        }
    }
    let nav = sidebar
        .nav
        .iter()
        .map(|item| {
            if item.active {
                format!("*{}*", item.label)
            } else {
                item.label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(&format!("[nav] {nav}\n"));
    if sidebar.user_menu_open {
        for action in &sidebar.account_actions {
            out.push_str(&format!("    {}\n", action.label()));
        }
    }
    out.push('\n');

    match &snapshot.content {
        MainContent::Placeholder(panel) => {
            out.push_str(&format!("{}\n{}\n", panel.heading, panel.caption));
        }
        MainContent::Notifications { list, detail } => {
            out.push_str(&format!("{}\n{}\n", list.title, list.subtitle));
            for section in &list.sections {
                out.push_str(&format!("\n== {} ==\n", section.label));
                for row in &section.rows {
                    let marker = if row.selected { '>' } else { ' ' };
                    out.push_str(&format!(
                        "{marker} [{}] {} ({}) {}\n      {}\n",
                        row.kind.as_str(),
                        row.title,
                        row.group_name,
                        row.time,
                        row.message
                    ));
                }
            }
            out.push('\n');
            match detail {
                DetailPane::Empty { title, hint } => {
                    out.push_str(&format!("{title}\n{hint}\n"));
                }
                DetailPane::Preview(preview) => {
                    out.push_str(&format!(
                        "{}: {}\n  {}\n  {}\nRecipients ({})\n",
                        preview.badge,
                        preview.title,
                        preview.message,
                        preview.delivered_label,
                        preview.recipient_count_label
                    ));
                    for recipient in &preview.recipients {
                        out.push_str(&format!(
                            "  - {} <{}>\n",
                            recipient.name,
                            recipient.reach.as_deref().unwrap_or("no channel")
                        ));
                    }
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render, Cli};
    use clap::Parser;
    use dropdeck_core::{Dashboard, DropdownKind, NotificationDate, ViewState};

    #[test]
    fn cli_parses_view_and_today() {
        let cli = Cli::try_parse_from(["dropdeck", "--view", "reports", "--today", "2025-05-30"])
            .expect("valid args");
        assert_eq!(cli.view, ViewState::Reports);
        assert_eq!(cli.today, NotificationDate::parse("2025-05-30").ok());
    }

    #[test]
    fn cli_rejects_non_iso_today() {
        assert!(Cli::try_parse_from(["dropdeck", "--today", "May 30"]).is_err());
    }

    #[test]
    fn log_level_requires_log_dir() {
        assert!(Cli::try_parse_from(["dropdeck", "--log-level", "info"]).is_err());
        let cli = Cli::try_parse_from([
            "dropdeck",
            "--log-level",
            "info",
            "--log-dir",
            "/tmp/dropdeck-logs",
        ])
        .expect("valid args");
        assert_eq!(cli.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn render_marks_selected_row_and_today_header() {
        let dashboard = Dashboard::seeded();
        let today = NotificationDate::parse("2025-05-30").unwrap();
        let text = render(&dashboard.snapshot(today));
        assert!(text.contains("== Today =="));
        assert!(text.contains("> [SMS] Lanzamiento Musica Basura"));
        assert!(text.contains("*Home*"));
        assert!(text.contains("Recipients (4 Fans)"));
    }

    #[test]
    fn render_lists_open_menu_entries() {
        let mut dashboard = Dashboard::seeded();
        dashboard.toggle_dropdown(DropdownKind::CreateMenu);
        dashboard.toggle_dropdown(DropdownKind::UserMenu);
        let today = NotificationDate::parse("2025-05-30").unwrap();
        let text = render(&dashboard.snapshot(today));
        assert!(text.contains("[Create New]\n    Event\n    Contact\n    Notification\n"));
        assert!(text.contains("    Public Profile\n    Logout\n"));
    }
}
