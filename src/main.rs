use std::{io::IsTerminal, process::ExitCode};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{info, warn};

use promptkit::{
    ColorMode, Config, Logging, PROJECT_NAME, PROJECT_VERSION, Prompt, PromptError, Theme,
    init_configuration, show_configuration,
};

#[derive(Parser)]
#[command(version = PROJECT_VERSION, about, long_about = None)]
pub struct UserArgs {
    #[command(subcommand)]
    command: Option<Command>,

    /// Verbose
    #[arg(short, long)]
    verbose: bool,

    /// When to color the prompts; overrides the config file
    #[arg(long, value_enum)]
    color: Option<ColorMode>,
}

#[derive(Subcommand)]
enum Command {
    /// Ask for a line of text
    Text {
        message: String,
        /// Returned when nothing is typed
        #[arg(long)]
        default: Option<String>,
        /// Mask the input
        #[arg(long)]
        sensitive: bool,
    },

    /// Ask a yes/no question
    Confirm {
        message: String,
        /// Answer used for an empty submission
        #[arg(long)]
        default: Option<bool>,
    },

    /// Pick one entry
    Select {
        message: String,
        #[arg(required = true)]
        items: Vec<String>,
        /// Color name applied to every entry, e.g. magenta
        #[arg(long)]
        style: Option<String>,
    },

    /// Check any number of entries
    Checkbox {
        message: String,
        #[arg(required = true)]
        items: Vec<String>,
        /// Entries checked from the start
        #[arg(long)]
        checked: Vec<String>,
        /// Color name applied to every entry, e.g. magenta
        #[arg(long)]
        style: Option<String>,
    },

    /// Walk through every prompt kind
    Demo,

    /// Show Config
    #[command(visible_alias = "show-config")]
    ShowConfiguration,

    /// Write the current configuration to disk
    #[command(visible_alias = "init-config")]
    InitConfiguration,
}

fn init_logging(verbose: bool) -> Result<()> {
    let file_name = format!("{PROJECT_NAME}.log");
    Logging::for_prompts(file_name, verbose, std::io::stderr().is_terminal()).start()
}

/// Looks up a color by name, refusing unknown ones.
fn style(theme: &Theme, name: Option<&str>) -> Result<Option<promptkit::Formatter>> {
    let Some(name) = name else {
        return Ok(None);
    };
    match theme.colors.by_name(name) {
        Some(formatter) => Ok(Some(formatter.clone())),
        None => bail!("unknown color: {name}"),
    }
}

fn ask_text(theme: Theme, message: String, default: Option<&str>, sensitive: bool) -> Result<()> {
    let mut prompt = Prompt::text(message).with_theme(theme).sensitive(sensitive);
    if let Some(default) = default {
        prompt = prompt.with_default(default);
    }
    let value = prompt.ask()?;
    if !sensitive {
        println!("{value}");
    }
    Ok(())
}

fn ask_confirm(theme: Theme, message: String, default: Option<bool>) -> Result<()> {
    let answer = Prompt::confirm(message, default).with_theme(theme).ask()?;
    println!("{answer}");
    Ok(())
}

fn ask_select(
    theme: Theme,
    message: String,
    items: Vec<String>,
    style_name: Option<&str>,
) -> Result<()> {
    let formatter = style(&theme, style_name)?;
    let mut prompt = Prompt::select(message, items, String::clone).with_theme(theme);
    if let Some(formatter) = formatter {
        prompt = prompt.with_color(move |_| formatter.clone());
    }
    if let Some(choice) = prompt.ask()? {
        println!("{choice}");
    }
    Ok(())
}

fn ask_checkbox(
    theme: Theme,
    message: String,
    items: Vec<String>,
    checked: Vec<String>,
    style_name: Option<&str>,
) -> Result<()> {
    let formatter = style(&theme, style_name)?;
    let mut prompt = Prompt::checkbox(message, items, String::clone)
        .with_theme(theme)
        .with_checked(|item| checked.contains(item));
    if let Some(formatter) = formatter {
        prompt = prompt.with_color(move |_| formatter.clone());
    }
    for choice in prompt.ask()? {
        println!("{choice}");
    }
    Ok(())
}

fn demo(theme: &Theme) -> Result<()> {
    let items: Vec<String> = (1..=4).map(|i| format!("Item {i}")).collect();

    let selected = Prompt::select("Select an Option", items.clone(), String::clone)
        .with_theme(theme.clone())
        .ask()?;

    let email = Prompt::text("Enter your Email")
        .with_default("example@mail.com")
        .with_theme(theme.clone())
        .ask()?;

    let password = Prompt::text("Enter your Password")
        .sensitive(true)
        .with_theme(theme.clone())
        .ask()?;

    let checked = Prompt::checkbox("Select one or more options", items, String::clone)
        .with_theme(theme.clone())
        .ask()?;

    let confirmation = Prompt::confirm("Are you sure?", Some(false))
        .with_theme(theme.clone())
        .ask()?;

    println!("Selected Option: {}", selected.unwrap_or_default());
    println!("Entered Email: {email}");
    println!(
        "Entered Password: {}",
        theme.glyphs.mask.to_string().repeat(password.chars().count())
    );
    println!("Selected Checkboxes: {}", checked.join(", "));
    println!("Confirmation: {confirmation}");

    Ok(())
}

/// Maps a user abort to its exit status; anything else stays an error.
fn exit_code(err: anyhow::Error) -> Result<ExitCode> {
    match err.downcast_ref::<PromptError>() {
        Some(PromptError::Interrupted) => Ok(ExitCode::from(130)),
        Some(PromptError::Cancelled) => Ok(ExitCode::from(1)),
        _ => Err(err),
    }
}

fn main() -> Result<ExitCode> {
    let args = UserArgs::parse();

    init_logging(args.verbose)?;
    let mut config = Config::load().context("Unable to load configuration")?;
    if config.debug {
        Logging::set_debug_mode(true);
    }

    if let Some(color) = args.color {
        info!("color mode {color} from the command line");
        config.color = color;
    }
    let theme = Theme::from_config(&config);

    let ret = match args.command {
        None | Some(Command::Demo) => demo(&theme),
        Some(Command::Text {
            message,
            default,
            sensitive,
        }) => ask_text(theme, message, default.as_deref(), sensitive),
        Some(Command::Confirm { message, default }) => ask_confirm(theme, message, default),
        Some(Command::Select {
            message,
            items,
            style,
        }) => ask_select(theme, message, items, style.as_deref()),
        Some(Command::Checkbox {
            message,
            items,
            checked,
            style,
        }) => ask_checkbox(theme, message, items, checked, style.as_deref()),
        Some(Command::ShowConfiguration) => show_configuration(&config),
        Some(Command::InitConfiguration) => init_configuration(&config),
    };

    match ret {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            warn!("{e}");
            exit_code(e)
        }
    }
}
