use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use unicode_width::UnicodeWidthStr;
use vgroups::api::{
    CmdMessage, ConfigAction, ListedView, MessageLevel, PaletteAction, TagCount, VgApi,
};
use vgroups::config::VgConfig;
use vgroups::error::{Result, VgError};
use vgroups::store::fs::FileStore;
use vgroups::store::SceneStore;

mod args;
use args::{
    Cli, Commands, MemberCommands, PaletteCommands, QueryCommands, TagCommands, ViewCommands,
    VisibilityCommands,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: VgApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Tag(cmd)) => handle_tag(&mut ctx, cmd),
        Some(Commands::Select { objects }) => {
            let result = ctx.api.select(&objects)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Palette(cmd)) => handle_palette(&mut ctx, cmd),
        Some(Commands::View(cmd)) => handle_view(&mut ctx, cmd),
        Some(Commands::Member(cmd)) => handle_member(&mut ctx, cmd),
        Some(Commands::Visibility(cmd)) => handle_visibility(&mut ctx, cmd),
        Some(Commands::Query(cmd)) => handle_query(&mut ctx, cmd),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_view(&mut ctx, ViewCommands::List),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    // Only fails if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "vgroups", "vgroups")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| VgError::Store("Could not determine config dir".to_string()))?,
    };

    let scene = if cli.scene.is_absolute() {
        cli.scene.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&cli.scene)
    };
    let store = FileStore::new(scene);
    tracing::debug!(scene = %store.location(), config = %config_dir.display(), "context");

    let api = VgApi::new(store, config_dir);
    Ok(AppContext { api })
}

fn handle_tag(ctx: &mut AppContext, cmd: TagCommands) -> Result<()> {
    let result = match cmd {
        TagCommands::Add { tag, objects } => ctx.api.add_tag(&objects, &tag)?,
        TagCommands::Remove { tag, objects } => ctx.api.remove_tag(&objects, &tag)?,
        TagCommands::List { objects } => ctx.api.list_tags(&objects)?,
    };
    print_tags(&result.listed_tags);
    print_messages(&result.messages);
    Ok(())
}

fn handle_palette(ctx: &mut AppContext, cmd: PaletteCommands) -> Result<()> {
    let none: Vec<String> = Vec::new();
    let result = match cmd {
        PaletteCommands::Toggle { tag } => ctx.api.palette_toggle(&tag)?,
        PaletteCommands::Hide => ctx.api.palette_run(PaletteAction::Hide, &none)?,
        PaletteCommands::Show => ctx.api.palette_run(PaletteAction::Show, &none)?,
        PaletteCommands::Flip => ctx.api.palette_run(PaletteAction::ToggleVisibility, &none)?,
        PaletteCommands::Select => ctx.api.palette_run(PaletteAction::Select, &none)?,
        PaletteCommands::Add { objects } => ctx.api.palette_run(PaletteAction::AddTags, &objects)?,
        PaletteCommands::Remove { objects } => {
            ctx.api.palette_run(PaletteAction::RemoveTags, &objects)?
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, cmd: ViewCommands) -> Result<()> {
    match cmd {
        ViewCommands::Add { name } => {
            let result = ctx.api.add_view(&name)?;
            print_messages(&result.messages);
        }
        ViewCommands::Delete { number } => {
            let result = ctx.api.delete_view(number)?;
            print_messages(&result.messages);
        }
        ViewCommands::Query { query, view } => {
            let result = ctx.api.set_query(view, &query)?;
            print_messages(&result.messages);
        }
        ViewCommands::Apply { number } => {
            let result = ctx.api.apply_query(number)?;
            print_messages(&result.messages);
        }
        ViewCommands::List => {
            let result = ctx.api.list_views()?;
            print_views(&result.listed_views);
            print_messages(&result.messages);
        }
        ViewCommands::Show { number } => {
            let result = ctx.api.show_view(number)?;
            print_views(&result.listed_views);
            print_objects(&result.affected_objects);
            print_messages(&result.messages);
        }
        ViewCommands::Use { number } => {
            let result = ctx.api.activate_view(number)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_member(ctx: &mut AppContext, cmd: MemberCommands) -> Result<()> {
    let result = match cmd {
        MemberCommands::Add { objects, view } => ctx.api.add_to_view(view, &objects)?,
        MemberCommands::Remove { objects, view } => ctx.api.remove_from_view(view, &objects)?,
        MemberCommands::Clear { number } => ctx.api.clear_membership(number)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_visibility(ctx: &mut AppContext, cmd: VisibilityCommands) -> Result<()> {
    let result = match cmd {
        VisibilityCommands::Toggle { number } => ctx.api.toggle_view_visibility(number)?,
        VisibilityCommands::Render { number } => ctx.api.toggle_view_render(number)?,
        VisibilityCommands::Select { number } => ctx.api.toggle_view_selection(number)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_query(ctx: &mut AppContext, cmd: QueryCommands) -> Result<()> {
    let result = match cmd {
        QueryCommands::Validate { query } => ctx.api.validate_query(&query)?,
        QueryCommands::Explain { query } => ctx.api.explain_query(&query)?,
        QueryCommands::Match { query } => ctx.api.match_query(&query)?,
    };
    print_objects(&result.affected_objects);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_config(config: &VgConfig) {
    for key in VgConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn print_objects(names: &[String]) {
    for name in names {
        println!("  {}", name);
    }
}

fn print_tags(tags: &[TagCount]) {
    let name_width = tags.iter().map(|t| t.tag.width()).max().unwrap_or(0);
    for t in tags {
        let padding = name_width.saturating_sub(t.tag.width());
        println!(
            "  {}{}  {}",
            t.tag.cyan(),
            " ".repeat(padding),
            t.count.to_string().dimmed()
        );
    }
}

const ACTIVE_MARKER: &str = "▸";

fn print_views(views: &[ListedView]) {
    let name_width = views.iter().map(|v| v.view.name.width()).max().unwrap_or(0);
    for lv in views {
        let marker = if lv.active { ACTIVE_MARKER } else { " " };
        let idx_str = format!("{}. ", lv.index + 1);
        let padding = name_width.saturating_sub(lv.view.name.width());
        let query = if lv.view.query.is_empty() {
            "(members only)".dimmed()
        } else {
            lv.view.query.normal()
        };
        let name = if lv.active {
            lv.view.name.bold()
        } else {
            lv.view.name.normal()
        };

        println!(
            "{} {}{}{}  {}  {}",
            marker.yellow(),
            idx_str.yellow(),
            name,
            " ".repeat(padding),
            format!("{:>4}", lv.view.cached_count).dimmed(),
            query
        );
    }
}
