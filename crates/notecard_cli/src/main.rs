//! Terminal host for the notes widget.
//!
//! # Responsibility
//! - Load configuration, start logging and open the slot database.
//! - Drive the widget with the same UI events a page would send.
//! - Print note lists or write the rendered page.

use clap::{Args, Parser, Subcommand};
use log::info;
use notecard_core::render::format_local_time;
use notecard_core::{
    init_logging, open_store, ElementId, KvStore, NotecardConfig, NotesWidget, UiEvent,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "notecard", version, about = "Local note cards with search and categories")]
struct Cli {
    /// TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// SQLite database file; overrides the config value.
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a note.
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        category: String,
        content: String,
    },
    /// Print visible notes, newest first.
    List(ViewArgs),
    /// Delete a note by id.
    Delete { id: String },
    /// Print the distinct categories.
    Categories,
    /// Write the rendered page as HTML.
    Render {
        #[command(flatten)]
        view: ViewArgs,
        /// Output file; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct ViewArgs {
    #[arg(long, default_value = "")]
    search: String,
    /// Exact category to show.
    #[arg(long, default_value = "")]
    category: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match cli.config.as_ref() {
        Some(path) => NotecardConfig::load(path)?,
        None => NotecardConfig::default(),
    };
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    config.validate()?;

    if let Some(log_dir) = config.log_dir.as_ref() {
        init_logging(&config.log_level, log_dir)?;
    }

    let mut widget = NotesWidget::new(open_store(&config)?);
    info!("event=cli_command module=cli status=start command={}", command_name(&cli.command));

    match cli.command {
        Command::Add {
            title,
            category,
            content,
        } => {
            type_into(&mut widget, ElementId::Title, title);
            type_into(&mut widget, ElementId::Category, category);
            type_into(&mut widget, ElementId::Content, content);
            if !widget.handle(UiEvent::AddClicked) {
                return Err("note was not added: content is empty or could not be saved".into());
            }
            if let Some(note) = widget.store().all().first() {
                println!("{}", note.id);
            }
        }
        Command::List(view) => {
            apply_view(&mut widget, view);
            print_visible(&widget);
        }
        Command::Delete { id } => {
            widget.handle(UiEvent::DeleteClicked(id));
        }
        Command::Categories => {
            for category in widget.store().categories() {
                println!("{category}");
            }
        }
        Command::Render { view, out } => {
            apply_view(&mut widget, view);
            let page = widget.page_html();
            match out {
                Some(path) => std::fs::write(path, page)?,
                None => print!("{page}"),
            }
        }
    }

    Ok(())
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Add { .. } => "add",
        Command::List(_) => "list",
        Command::Delete { .. } => "delete",
        Command::Categories => "categories",
        Command::Render { .. } => "render",
    }
}

fn type_into<S: KvStore>(widget: &mut NotesWidget<S>, field: ElementId, value: String) {
    widget.handle(UiEvent::FieldInput { field, value });
}

fn apply_view<S: KvStore>(widget: &mut NotesWidget<S>, view: ViewArgs) {
    widget.handle(UiEvent::FilterChanged(view.category));
    widget.handle(UiEvent::SearchInput(view.search));
}

fn print_visible<S: KvStore>(widget: &NotesWidget<S>) {
    let visible = &widget.view().visible_ids;
    if visible.is_empty() {
        println!("No notes yet.");
        return;
    }
    for id in visible {
        if let Some(note) = widget.store().get(id) {
            println!(
                "{}  [{}]  {}  {}",
                note.id,
                note.category,
                format_local_time(&note.created_at),
                note.title
            );
            for line in note.content.lines() {
                println!("    {line}");
            }
        }
    }
}
