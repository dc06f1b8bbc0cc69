//! Replay an editing script against a path and render the result as SVG.
//!
//! ```text
//! pathcraft <script.json> [--settings <settings.json>] [--out <file.svg>]
//! ```

#[macro_use]
extern crate serde_derive;

mod script;

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use pathcraft_lib::{export, EditorSettings};

use script::{Script, ScriptError};

const USAGE: &str = "usage: pathcraft <script.json> [--settings <settings.json>] [--out <file.svg>]";

struct Args {
    script: PathBuf,
    settings: Option<PathBuf>,
    out: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ScriptError> {
    let args = parse_args(std::env::args().skip(1))?;
    let settings = match &args.settings {
        Some(path) => script::load_settings(path)?,
        None => EditorSettings::default(),
    };

    let script = Script::load(&args.script)?;
    log::info!(
        "running {} events from {}",
        script.events.len(),
        args.script.display()
    );
    let session = script.run(settings)?;
    let path = session.path();
    log::info!(
        "result: {} segments, {}",
        path.segment_count(),
        if path.is_closed() { "closed" } else { "open" }
    );

    match &args.out {
        Some(out) => {
            let file = BufWriter::new(File::create(out)?);
            export::write_svg(path, session.settings(), file)?;
        }
        None => export::write_svg(path, session.settings(), io::stdout().lock())?,
    }
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, ScriptError> {
    let mut script = None;
    let mut settings = None;
    let mut out = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => settings = Some(flag_value(&mut args, "--settings")?),
            "--out" => out = Some(flag_value(&mut args, "--out")?),
            other if other.starts_with("--") => {
                return Err(ScriptError::Usage(format!(
                    "unknown flag '{}'\n{}",
                    other, USAGE
                )))
            }
            other if script.is_none() => script = Some(PathBuf::from(other)),
            _ => return Err(ScriptError::Usage(USAGE.to_string())),
        }
    }
    let script = script.ok_or_else(|| ScriptError::Usage(USAGE.to_string()))?;
    Ok(Args {
        script,
        settings,
        out,
    })
}

fn flag_value(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<PathBuf, ScriptError> {
    args.next()
        .map(PathBuf::from)
        .ok_or_else(|| ScriptError::Usage(format!("{} needs a value\n{}", flag, USAGE)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> impl Iterator<Item = String> {
        items
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn parse_flags() {
        let parsed = parse_args(args(&["a.json", "--out", "b.svg"])).unwrap();
        assert_eq!(parsed.script, PathBuf::from("a.json"));
        assert_eq!(parsed.out, Some(PathBuf::from("b.svg")));
        assert!(parsed.settings.is_none());
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(parse_args(args(&[])), Err(ScriptError::Usage(_))));
        assert!(matches!(
            parse_args(args(&["a.json", "--out"])),
            Err(ScriptError::Usage(_))
        ));
        assert!(matches!(
            parse_args(args(&["a.json", "--zoom", "2"])),
            Err(ScriptError::Usage(_))
        ));
    }
}
