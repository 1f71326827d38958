use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use wf_mechanics::EncounterKind;
use wf_mission::{ChoiceProvider, GameConfig, GameSession};

/// Flags for `wf play`. Anything set here overrides the config file.
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub strategy: Option<String>,
    pub random_objective: bool,
    pub config: Option<PathBuf>,
    pub load: Option<PathBuf>,
}

pub fn run(opts: &PlayOptions) -> Result<(), String> {
    let config = build_config(opts)?;
    log::info!("starting session with {config:?}");

    let mut session = GameSession::new(config.clone()).map_err(|e| e.to_string())?;
    if let Some(path) = &opts.load {
        let character = super::load_character(path)?;
        println!("  Loaded {} from {}", character.name.bold(), path.display());
        session = session.with_character(character);
    }

    println!("  {} Wayfarer", "Starting".bold());
    println!(
        "  Grid: {}x{} | Seed: {}",
        config.width, config.height, config.seed
    );
    println!("  Type 'help' for commands, 'save <file>' to save, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut console = Console {
        reader: stdin.lock(),
    };

    while let Some(input) = console.read_line("> ")? {
        if input.is_empty() {
            continue;
        }

        let (command, rest) = input
            .split_once(char::is_whitespace)
            .unwrap_or((input.as_str(), ""));
        if command.eq_ignore_ascii_case("save") {
            match save(&session, rest.trim(), opts.load.as_deref()) {
                Ok(path) => println!("Saved to {}.\n", path.display()),
                Err(e) => println!("{}\n", e.yellow()),
            }
            continue;
        }

        match session.process(&input, &mut console) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}

fn build_config(opts: &PlayOptions) -> Result<GameConfig, String> {
    let mut config = match &opts.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            GameConfig::from_json(&json).map_err(|e| e.to_string())?
        }
        None => GameConfig::default(),
    };

    if let Some(seed) = opts.seed {
        config = config.with_seed(seed);
    }
    let width = opts.width.unwrap_or(config.width);
    let height = opts.height.unwrap_or(config.height);
    config = config.with_size(width, height);
    if let Some(name) = &opts.strategy {
        config = config.with_strategy(super::parse_strategy(name)?);
    }
    if opts.random_objective {
        config = config.with_objective(super::placement(true));
    }
    Ok(config)
}

fn save<D: wf_mechanics::DiceSource>(
    session: &GameSession<D>,
    path: &str,
    loaded_from: Option<&Path>,
) -> Result<PathBuf, String> {
    let character = session
        .character()
        .ok_or_else(|| "no active character to save".to_string())?;
    let target = match (path.is_empty(), loaded_from) {
        (false, _) => PathBuf::from(path),
        (true, Some(original)) => original.to_path_buf(),
        (true, None) => return Err("usage: save <file>".to_string()),
    };
    super::save_character(character, &target)?;
    Ok(target)
}

/// Line-based terminal input that also answers encounter prompts.
struct Console<R: BufRead> {
    reader: R,
}

impl<R: BufRead> Console<R> {
    /// Print a prompt and read one trimmed line. `None` on end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, String> {
        print!("{prompt}");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line.trim().to_string())),
            Err(e) => Err(e.to_string()),
        }
    }
}

impl<R: BufRead> ChoiceProvider for Console<R> {
    fn choose(&mut self, kind: EncounterKind, prompt: &str, options: &[String]) -> Option<String> {
        println!("{} {prompt}", format!("[{kind}]").cyan().bold());
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }

        loop {
            let answer = match self.read_line("choose> ") {
                Ok(Some(answer)) => answer,
                Ok(None) | Err(_) => return None,
            };
            if answer.is_empty() {
                return None;
            }
            if let Some(option) = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| options.get(i))
            {
                return Some(option.clone());
            }
            if let Some(option) = options.iter().find(|o| o.eq_ignore_ascii_case(&answer)) {
                return Some(option.clone());
            }
            println!(
                "{}",
                format!("Pick 1-{} or type an option.", options.len()).yellow()
            );
        }
    }
}
