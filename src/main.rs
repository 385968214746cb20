use clap::Parser;
use std::io::{self, Read};

use serde::Serialize;
use vest::{FormatArg, Text};

mod cli;
use cli::{Cli, Commands};

/// What a command produced, in a shape that prints as text or JSON.
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum Output {
    Text { text: String, length: usize },
    Offsets { pattern: String, offsets: Vec<usize> },
    Tokens { tokens: Vec<String> },
}

impl Output {
    fn from_text(text: &Text) -> Self {
        Output::Text {
            text: text.to_string(),
            length: text.length(),
        }
    }

    fn print_plain(&self) {
        match self {
            Output::Text { text, .. } => println!("{}", text),
            Output::Offsets { offsets, .. } => {
                for offset in offsets {
                    println!("{}", offset);
                }
            }
            Output::Tokens { tokens } => {
                for token in tokens {
                    println!("{}", token);
                }
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("VEST_LOG", "warn")).init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(output) => {
            if cli.json {
                match serde_json::to_string_pretty(&output) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("❌ Failed to encode report: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                output.print_plain();
            }
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn run(command: Commands) -> Result<Output, String> {
    match command {
        Commands::Find { text, pattern } => {
            let text = load_text(&text)?;
            let offsets = text.find(&pattern).map_err(|e| format!("find: {}", e))?;
            Ok(Output::Offsets {
                pattern,
                offsets: offsets.to_vec(),
            })
        }
        Commands::Replace {
            text,
            old,
            new,
            count,
        } => {
            let mut text = load_text(&text)?;
            text.replace(&old, &new, count)
                .map_err(|e| format!("replace: {}", e))?;
            Ok(Output::from_text(&text))
        }
        Commands::Remove { text, pattern } => {
            let mut text = load_text(&text)?;
            text.remove(&pattern)
                .map_err(|e| format!("remove: {}", e))?;
            Ok(Output::from_text(&text))
        }
        Commands::Split { text, sep } => {
            let mut text = load_text(&text)?;
            let tokens = text.split(&sep).map_err(|e| format!("split: {}", e))?;
            let output = Output::Tokens {
                tokens: tokens.iter().map(ToString::to_string).collect(),
            };
            Text::list_free(tokens);
            Ok(output)
        }
        Commands::Repeat { text, count } => {
            let mut text = load_text(&text)?;
            text.repeat(count)
                .map_err(|e| format!("repeat: {}", e))?;
            Ok(Output::from_text(&text))
        }
        Commands::Range { text, start, end } => {
            let text = load_text(&text)?;
            let range = text
                .range(start, end)
                .map_err(|e| format!("range: {}", e))?;
            Ok(Output::from_text(&range))
        }
        Commands::Format { fmt, args } => {
            let args = parse_format_args(&fmt, &args)?;
            let mut text = Text::empty().map_err(|e| format!("format: {}", e))?;
            text.format(&fmt, &args)
                .map_err(|e| format!("format: {}", e))?;
            Ok(Output::from_text(&text))
        }
    }
}

/// Read TEXT from the argument, or from stdin when it is `-`.
fn load_text(arg: &str) -> Result<Text, String> {
    if arg != "-" {
        return Text::new(arg).map_err(|e| format!("Failed to allocate text: {}", e));
    }

    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;
    if input.last() == Some(&b'\n') {
        input.pop();
    }
    Text::new(input).map_err(|e| format!("Failed to allocate text: {}", e))
}

/// Recognised conversion bytes of `fmt`, in order.
///
/// Walks the format string the same way `Text::format` does, so a `%%` pair or
/// an unknown conversion never claims an argument.
fn conversions(fmt: &str) -> Vec<u8> {
    let mut found = Vec::new();
    let mut after_percent = false;
    for &byte in fmt.as_bytes() {
        if after_percent {
            if matches!(byte, b's' | b'i' | b'l' | b'u' | b'f') {
                found.push(byte);
            }
            after_percent = false;
        } else if byte == b'%' {
            after_percent = true;
        }
    }
    found
}

/// Parse each raw argument as the kind its conversion renders. Arguments past
/// the last conversion are passed through as strings.
fn parse_format_args<'a>(fmt: &str, raw: &'a [String]) -> Result<Vec<FormatArg<'a>>, String> {
    let kinds = conversions(fmt);

    raw.iter()
        .enumerate()
        .map(|(i, value)| {
            let parsed = match kinds.get(i) {
                Some(b'i') => value.parse::<i32>().map(FormatArg::Int).map_err(|e| e.to_string()),
                Some(b'l') => value.parse::<i64>().map(FormatArg::Long).map_err(|e| e.to_string()),
                Some(b'u') => value
                    .parse::<u64>()
                    .map(FormatArg::Unsigned)
                    .map_err(|e| e.to_string()),
                Some(b'f') => value.parse::<f64>().map(FormatArg::Float).map_err(|e| e.to_string()),
                _ => Ok(FormatArg::from(value.as_str())),
            };
            parsed.map_err(|e| format!("Invalid argument {} ({:?}): {}", i, value, e))
        })
        .collect()
}
