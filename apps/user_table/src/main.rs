use anyhow::{anyhow, Result};
use clap::Parser;
use client_core::{load_settings, spawn_table_worker, HttpUserSource, TableEngine, TableState};
use shared::{
    domain::{FetchStatus, SortField, User, UserField},
    protocol::Command,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Load the user directory once, then filter and sort it")]
struct Args {
    /// Directory endpoint; overrides client.toml and APP__USERS_URL.
    #[arg(long)]
    users_url: Option<String>,
    /// Column filter as `field=pattern`; repeat for more columns.
    #[arg(long = "filter", value_parser = parse_filter)]
    filters: Vec<(UserField, String)>,
    /// Header click on a column; repeat to cycle asc, desc, unsorted.
    #[arg(long = "sort")]
    sorts: Vec<SortField>,
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Print the visible rows as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_filter(raw: &str) -> Result<(UserField, String), String> {
    let (field, pattern) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected field=pattern, got '{raw}'"))?;
    let field = field.trim().parse::<UserField>().map_err(|e| e.to_string())?;
    Ok((field, pattern.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings()?;
    if let Some(url) = args.users_url {
        settings.users_url = url;
    }
    if let Some(secs) = args.timeout_secs {
        settings.request_timeout_secs = Some(secs);
    }

    let source = HttpUserSource::from_settings(&settings)?;
    debug!(url = %source.users_url(), "user table source");
    let (handle, worker) = spawn_table_worker(
        TableEngine::new(source),
        settings.command_queue_capacity,
    );
    let mut events = handle.subscribe_events();
    let snapshots = handle.watch();

    // Filters and sort are queued behind the pending fetch; the worker applies
    // them in order once the records are in.
    let mut commands = vec![Command::Load];
    commands.extend(
        args.filters
            .into_iter()
            .map(|(field, pattern)| Command::SetFilter { field, pattern }),
    );
    commands.extend(args.sorts.into_iter().map(|field| Command::SetSort { field }));
    for command in commands {
        handle.send(command).await?;
    }
    drop(handle);
    worker.await?;

    while let Ok(event) = events.try_recv() {
        debug!(?event, "table event");
    }

    let state = snapshots.borrow().clone();
    print_state(&state, args.json)
}

fn print_state(state: &TableState, json: bool) -> Result<()> {
    match state.status() {
        FetchStatus::Failed => Err(anyhow!(state
            .error()
            .unwrap_or(client_core::error::FALLBACK_FETCH_ERROR)
            .to_string())),
        FetchStatus::Idle | FetchStatus::Loading => {
            Err(anyhow!("user table did not finish loading ({})", state.status()))
        }
        FetchStatus::Succeeded => {
            if json {
                println!("{}", serde_json::to_string_pretty(state.view())?);
            } else if state.view().is_empty() {
                println!("No users found matching the filters.");
            } else {
                print!("{}", render_table(state.view()));
            }
            Ok(())
        }
    }
}

fn render_table(users: &[User]) -> String {
    let header = ["id", "name", "username", "email", "phone"];
    let rows: Vec<[String; 5]> = users
        .iter()
        .map(|u| {
            [
                u.id.to_string(),
                u.name.clone(),
                u.username.clone(),
                u.email.clone(),
                u.phone.clone(),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: &[&str]| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    };
    push_line(&header);
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        push_line(&cells);
    }
    out
}
