use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gradia_engine::logging::{init_logging, LoggingConfig};
use gradia_ui::prelude::*;

mod commands;
mod render;

use commands::{parse_command, Command, HELP};
use render::render_view;

#[derive(Parser, Debug)]
#[command(name = "gradia", version, about = "Multi-layer CSS gradient editor")]
struct Cli {
    /// Preset to open with
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PRESET)]
    preset: String,
    /// Extra .gpml preset catalog, registered after the built-in one
    #[arg(long, value_name = "FILE")]
    catalog: Vec<PathBuf>,
    /// Print the exported CSS and exit
    #[arg(long)]
    print: bool,
    /// Print preset names and exit
    #[arg(long)]
    list_presets: bool,
    /// Log filter, overrides RUST_LOG (e.g. "debug", "gradia_ui=trace")
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &cli.log {
        logging = logging.with_filter(filter);
    }
    init_logging(logging);

    let mut app = Application::new().initial_preset(&cli.preset);
    for path in &cli.catalog {
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        app = app.catalog(src);
    }
    let mut editor = app.build().context("failed to load preset catalog")?;

    if cli.list_presets {
        for name in editor.catalog().names() {
            println!("{name}");
        }
        return Ok(());
    }
    if cli.print {
        println!("{}", editor.render().css);
        return Ok(());
    }

    run_loop(&mut editor)
}

fn run_loop(editor: &mut Editor) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout();

    if interactive {
        println!("gradia {} · type `help` for commands", env!("CARGO_PKG_VERSION"));
    }
    print!("{}", render_view(&editor.render()));
    print_notifications(editor);

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            stdout.flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line.context("failed to read command")?;

        let selected = editor.store().selected();
        let command = match parse_command(&line, selected) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("error: {e}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Show => print!("{}", render_view(&editor.render())),
            Command::Css => println!("{}", editor.render().css),
            Command::Presets => {
                for name in editor.catalog().names() {
                    println!("  {name}");
                }
            }
            Command::Event(event) => {
                if editor.dispatch(event).is_consumed() {
                    print!("{}", render_view(&editor.render()));
                } else {
                    println!("(no change)");
                }
            }
        }
        print_notifications(editor);
    }
    Ok(())
}

fn print_notifications(editor: &mut Editor) {
    for note in editor.take_notifications() {
        match note.kind {
            NotificationKind::Info => println!("* {note}"),
            NotificationKind::Error => eprintln!("! {note}"),
        }
    }
}
