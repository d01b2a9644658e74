use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use quadboard::Config;
use quadboard::config::SurfaceConfig;
use quadboard::input::{DrawRect, KeyboardSession, RecordingListener, SessionSettings};
use quadboard::layout::{Mode, Token, ZONE_SIZE, current_table};
use quadboard::replay;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quadboard")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("QUADBOARD_GIT_HASH"), ")"),
    about = "Two-stage 9x9 zoom-grid virtual keyboard"
)]
struct Cli {
    /// Replay a touch script and print what the host would receive ("-" reads stdin)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Initial keyboard mode (overrides the config file)
    #[arg(long, short = 'm', value_name = "MODE")]
    mode: Option<Mode>,

    /// Keyboard bounds as LEFT,TOP,WIDTH,HEIGHT (overrides the config file)
    #[arg(long, value_name = "L,T,W,H", value_parser = parse_rect)]
    rect: Option<DrawRect>,

    /// Print the 9x9 table of a mode
    #[arg(long, value_name = "MODE")]
    dump_layout: Option<Mode>,

    /// Write a config file to the user config directory (with --mode/--rect as its values)
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn parse_rect(raw: &str) -> Result<DrawRect, String> {
    let parts = raw
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("invalid rectangle '{raw}': {err}"))?;
    match parts[..] {
        [left, top, width, height] => DrawRect::new(left, top, width, height)
            .ok_or_else(|| format!("rectangle '{raw}' must have a positive size")),
        _ => Err(format!("expected LEFT,TOP,WIDTH,HEIGHT, got '{raw}'")),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = init_config(&cli)?;
        println!("Wrote config to {}", path.display());
    } else if let Some(mode) = cli.dump_layout {
        print_layout(mode);
    } else if let Some(path) = &cli.script {
        let config = Config::load()?;
        let mut settings = SessionSettings::from(&config);
        if let Some(mode) = cli.mode {
            settings.initial_mode = mode;
        }
        let rect = cli.rect.unwrap_or_else(|| config.surface.draw_rect());

        let commands = replay::read_script(path)
            .with_context(|| format!("Failed to load script {}", path.display()))?;
        log::info!(
            "Replaying {} commands from {} in {} mode",
            commands.len(),
            path.display(),
            settings.initial_mode
        );

        let mut session = KeyboardSession::new(RecordingListener::new(), settings);
        session.draw_rect_update(rect.left(), rect.top(), rect.width(), rect.height());
        let report = replay::run_script(&mut session, &commands);

        for line in &report.transcript {
            println!("{line}");
        }
        println!("committed: {:?}", report.committed);
        println!("mode: {}", report.final_mode);
    } else {
        // No flags: show usage
        println!("quadboard: Two-stage 9x9 zoom-grid virtual keyboard");
        println!();
        println!("Usage:");
        println!("  quadboard --script <FILE>        Replay a touch script (\"-\" for stdin)");
        println!("  quadboard --dump-layout <MODE>   Print a mode's 9x9 table");
        println!("  quadboard --init-config          Write ~/.config/quadboard/config.toml");
        println!("  quadboard --help                 Show help");
        println!();
        println!("Modes:");
        for mode in Mode::ALL {
            println!("  {:<18} {}", mode.name(), mode.label());
        }
        println!();
        println!("Script lines:");
        println!("  rect <left> <top> <width> <height>");
        println!("  down|move|up <pointer> <x> <y> <time_ms>");
        println!("  cancel <pointer> <time_ms>");
        println!("  tap <x1> <y1> <x2> <y2>");
    }

    Ok(())
}

/// Writes the documented example config, or a config holding the
/// command-line overrides when any are given. Never overwrites.
fn init_config(cli: &Cli) -> Result<PathBuf> {
    if cli.mode.is_none() && cli.rect.is_none() {
        return Config::create_default_file();
    }

    let path = Config::get_config_path()?;
    if path.exists() {
        anyhow::bail!("Config file already exists at {}", path.display());
    }

    let mut config = Config::default();
    if let Some(mode) = cli.mode {
        config.keyboard.initial_mode = mode.name().to_string();
    }
    if let Some(rect) = cli.rect {
        config.surface = SurfaceConfig {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        };
    }
    config.save()?;
    Ok(path)
}

fn print_layout(mode: Mode) {
    let table = current_table(mode);
    println!("{} ({})", mode.name(), mode.label());
    for (row_index, row) in table.rows().iter().enumerate() {
        if row_index > 0 && row_index % ZONE_SIZE == 0 {
            println!();
        }
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, token)| {
                let label = match token {
                    Token::Empty => "◦",
                    other => other.label(),
                };
                let sep = if col > 0 && col % ZONE_SIZE == 0 { "  " } else { "" };
                format!("{sep}{label:>3}")
            })
            .collect();
        println!("{}", cells.concat());
    }
}
