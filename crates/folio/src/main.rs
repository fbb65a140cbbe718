use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use folio::document::PdfAction;
use folio::folio_render::{
    escape_html, resolve_theme, ColorSchemeQuery, FixedColorScheme, OsColorScheme, ThemePreference,
};
use folio::{logging, ProviderScope, Shell, ShellConfig};

/// Folio PDF editor shell.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the shell page as HTML
    Render(RenderArgs),
    /// Print the effective theme for a preference
    Resolve(ThemeArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HostArg {
    /// Ask the operating system
    Os,
    /// Pretend the host prefers dark
    Dark,
    /// Pretend the host prefers light
    Light,
    /// Pretend the host has no color-scheme support
    None,
}

impl HostArg {
    fn query(self) -> Option<Box<dyn ColorSchemeQuery>> {
        match self {
            HostArg::Os => Some(Box::new(OsColorScheme)),
            HostArg::Dark => Some(Box::new(FixedColorScheme::dark())),
            HostArg::Light => Some(Box::new(FixedColorScheme::light())),
            HostArg::None => None,
        }
    }
}

#[derive(Debug, Args)]
struct ThemeArgs {
    /// Theme preference (light, dark, auto); defaults to the configured one
    #[arg(long)]
    theme: Option<ThemePreference>,

    /// Where the color-scheme signal for `auto` comes from
    #[arg(long, value_enum, default_value_t = HostArg::Os)]
    host: HostArg,

    /// Shell configuration file (YAML)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ThemeArgs {
    fn load_config(&self) -> Result<ShellConfig> {
        let mut config = match &self.config {
            Some(path) => ShellConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ShellConfig::default(),
        };
        if let Some(theme) = self.theme {
            config.initial.theme = theme;
        }
        Ok(config)
    }
}

#[derive(Debug, Args)]
struct RenderArgs {
    #[command(flatten)]
    theme: ThemeArgs,

    /// Open a document with this file name
    #[arg(long)]
    file: Option<String>,

    /// Page count of the opened document
    #[arg(long, default_value_t = 1, requires = "file")]
    pages: usize,

    /// Show a success notification
    #[arg(long)]
    notify: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Command::Render(args) => render(args),
        Command::Resolve(args) => {
            let config = args.load_config()?;
            let host = args.host.query();
            let theme = resolve_theme(config.initial.theme, host.as_deref());
            println!("{}", theme);
            Ok(())
        }
    }
}

fn render(args: RenderArgs) -> Result<()> {
    let config = args.theme.load_config()?;
    let mut shell = Shell::new(config, args.theme.host.query())?;

    if let Some(file_name) = args.file {
        shell.pdf().dispatch(PdfAction::Load {
            file_name,
            page_count: args.pages,
        });
    }
    for message in args.notify {
        shell.toaster_mut().success(message);
    }

    let html = shell.render(editor_body)?;
    print!("{}", html);
    Ok(())
}

fn editor_body(scope: &ProviderScope<'_>) -> String {
    let state = scope.use_pdf().snapshot();
    let Some(file_name) = &state.file_name else {
        return r#"<main class="editor editor-empty">Drop a PDF to start editing</main>"#.to_string();
    };

    let pages: String = state
        .pages
        .iter()
        .map(|page| format!(r#"<section class="page" data-index="{}"></section>"#, page.index))
        .collect();
    format!(
        r#"<main class="editor" data-file="{}" data-theme="{}">{}</main>"#,
        escape_html(file_name),
        scope.root_theme(),
        pages
    )
}
