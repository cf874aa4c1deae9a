//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that knows about
//! terminal I/O, uses `std::process::exit` (via `main.rs`) and formats output
//! for human consumption.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API and configuration
//! - `handle_*()`: Per-command handlers that call the API and print output

use super::render::{
    print_messages, render_config, render_full_cells, render_grid, render_grid_info,
};
use super::setup::{print_grouped_help, print_subcommand_help, Cli, Commands};
use clap::Parser;
use mandala::api::{CardUpdate, ConfigAction, MandalaApi, ResetRequest};
use mandala::editor::{edit_content, EditorContent};
use mandala::error::Result;
use mandala::init::{data_dir, initialize};
use mandala::logging::{init_logging, level_for_verbosity};
use mandala::model::{validate_title, Color, RichText};
use mandala::store::fs::FileStore;
use std::str::FromStr;

struct AppContext {
    api: MandalaApi<FileStore>,
    file_ext: String,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    if let Err(e) = init_logging(level_for_verbosity(cli.verbose)) {
        eprintln!("Warning: {}", e);
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Show) | None => handle_show(&ctx),
        Some(Commands::View { cells }) => handle_view(&ctx, cells),
        Some(Commands::Edit {
            cell,
            title,
            content,
            color,
            sync_bg,
            no_editor,
        }) => handle_edit(
            &mut ctx,
            &cell,
            EditFlags {
                title,
                content,
                color,
                sync_bg,
                no_editor,
            },
        ),
        Some(Commands::Move { from, to }) => handle_move(&mut ctx, &from, &to),
        Some(Commands::Reset) => handle_reset(&mut ctx),
        Some(Commands::Info) => handle_info(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(data_dir()?, cli.variant)?;
    Ok(AppContext {
        api: ctx.api,
        file_ext: ctx.config.file_ext().to_string(),
    })
}

fn handle_show(ctx: &AppContext) -> Result<()> {
    let shape = ctx.api.grid().shape();
    print!("{}", render_grid(&shape, &ctx.api.cells()));
    Ok(())
}

fn handle_view(ctx: &AppContext, cells: Vec<String>) -> Result<()> {
    let result = ctx.api.view_cells(&cells)?;
    let shape = ctx.api.grid().shape();
    print!("{}", render_full_cells(&shape, &result.listed_cells));
    print_messages(&result.messages);
    Ok(())
}

struct EditFlags {
    title: Option<String>,
    content: Option<String>,
    color: Option<String>,
    sync_bg: bool,
    no_editor: bool,
}

fn handle_edit(ctx: &mut AppContext, cell: &str, flags: EditFlags) -> Result<()> {
    let target = ctx.api.begin_edit(cell)?;
    let update = match build_update(&target.card, flags, &ctx.file_ext) {
        Ok(update) => update,
        Err(e) => {
            ctx.api.cancel_edit();
            return Err(e);
        }
    };
    let result = ctx.api.save_edit(update)?;
    print_messages(&result.messages);
    Ok(())
}

/// Folds command-line flags and, unless skipped, the editor buffer into the
/// update handed back to the edit session.
fn build_update(
    card: &mandala::model::Card,
    flags: EditFlags,
    file_ext: &str,
) -> Result<CardUpdate> {
    let mut update = CardUpdate::from_card(card);
    if let Some(title) = flags.title {
        validate_title(&title)?;
        update.title = title;
    }
    if let Some(content) = flags.content {
        update.content = RichText::from_str(&content)?;
    }
    if let Some(color) = flags.color {
        update.bg_color = Color::from_str(&color)?;
    }
    update.sync_background = flags.sync_bg;

    if !flags.no_editor {
        let initial = EditorContent::new(update.title.clone(), update.content.to_string());
        let edited = edit_content(&initial, file_ext)?;
        update.title = edited.title;
        update.content = RichText::from_str(&edited.content)?;
    }
    Ok(update)
}

fn handle_move(ctx: &mut AppContext, from: &str, to: &str) -> Result<()> {
    let result = ctx.api.move_cell(from, to)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.reset(ResetRequest)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_info(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.info()?;
    if let Some(info) = &result.grid_info {
        print!("{}", render_grid_info(info));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
