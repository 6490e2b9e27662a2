//! Command-line entry point.

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::session::{Session, load_script};
use clap::Parser;
use std::path::PathBuf;

/// Replay a Sketchboard drawing session and export the result as PNG.
#[derive(Parser, Debug)]
#[command(name = "sketchboard", version)]
pub struct Cli {
    /// Session script: a JSON array of pointer, tool and export actions.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// JSON config file (canvas size, initial tool settings, output path).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output PNG path. Overrides the config's `output`.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Run a session script and write the final committed buffer.
/// Returns the path written.
pub fn run(cli: &Cli) -> AppResult<PathBuf> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let output = cli.output.clone().unwrap_or_else(|| config.output.clone());

    let actions = load_script(&cli.script)?;
    let mut session = Session::new(&config)?;
    session.run(&actions)?;
    session.export(&output)?;

    log::info!(
        "Replayed {} action(s), {} history entries, {} shape(s)",
        actions.len(),
        session.engine().history().len(),
        session.engine().shapes().len()
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["sketchboard", "session.json", "-c", "cfg.json", "--output", "out.png"]).unwrap();
        assert_eq!(cli.script, PathBuf::from("session.json"));
        assert_eq!(cli.config, Some(PathBuf::from("cfg.json")));
        assert_eq!(cli.output, Some(PathBuf::from("out.png")));

        assert!(Cli::try_parse_from(["sketchboard"]).is_err());
    }

    #[test]
    fn test_run_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("session.json");
        let config = dir.path().join("config.json");
        let output = dir.path().join("result.png");
        let snapshot = dir.path().join("first.png");

        std::fs::write(
            &script,
            format!(
                r#"[
                    {{"type": "pointer_down", "x": 10, "y": 10}},
                    {{"type": "pointer_move", "x": 50, "y": 30}},
                    {{"type": "pointer_up"}},
                    {{"type": "export", "path": {}}},
                    {{"type": "cycle_symmetry"}},
                    {{"type": "pointer_down", "x": 20, "y": 40}},
                    {{"type": "pointer_move", "x": 25, "y": 45}},
                    {{"type": "pointer_leave"}}
                ]"#,
                serde_json::to_string(&snapshot).unwrap()
            ),
        )
        .unwrap();
        std::fs::write(&config, r#"{"width": 64, "height": 48}"#).unwrap();

        let cli = Cli {
            script,
            config: Some(config),
            output: Some(output.clone()),
        };
        assert_eq!(run(&cli).unwrap(), output);
        assert!(output.exists());
        assert!(snapshot.exists());
    }

    #[test]
    fn test_run_missing_script() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            script: dir.path().join("absent.json"),
            config: None,
            output: Some(dir.path().join("out.png")),
        };
        assert!(matches!(run(&cli), Err(AppError::Read { .. })));
    }
}
