use anyhow::Context;
use colored::Colorize;
use mdpack_render::{assemble, AssembleConfig, RunSummary};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = build_config(&cli);
    let summary = assemble(&config).context("failed to assemble document")?;
    println!("{}", render_report(&summary, &cli.format)?);
    Ok(())
}

fn build_config(cli: &Cli) -> AssembleConfig {
    let config = AssembleConfig::default().with_root(&cli.root);
    match &cli.output {
        Some(output) => config.with_output(output),
        None => config,
    }
}

fn render_report(summary: &RunSummary, format: &OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Text => Ok(format!(
            "{} Project organized into {}\n  {} files visited: {} written, {} skipped",
            "✓".green().bold(),
            summary.output.display().to_string().bold(),
            summary.visited(),
            summary.written,
            summary.skipped,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::ffi::OsStr;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn default_config_targets_complete_md() {
        let cli = Cli::try_parse_from(["mdpack"]).unwrap();
        let config = build_config(&cli);
        assert_eq!(config.output_path(), PathBuf::from("./complete.md"));
    }

    #[test]
    fn output_flag_overrides_default() {
        let cli = Cli::try_parse_from(["mdpack", "proj", "-o", "ctx.md"]).unwrap();
        let config = build_config(&cli);
        assert_eq!(config.output_path(), PathBuf::from("proj/ctx.md"));
    }

    #[test]
    fn text_report_names_output() {
        colored::control::set_override(false);
        let summary = RunSummary {
            output: "complete.md".into(),
            written: 4,
            skipped: 1,
            bytes: 99,
        };
        let report = render_report(&summary, &OutputFormat::Text).unwrap();
        assert_eq!(report, "✓ Project organized into complete.md\n  5 files visited: 4 written, 1 skipped");
    }

    #[test]
    fn json_report_is_parseable() {
        let summary = RunSummary {
            output: "complete.md".into(),
            written: 2,
            skipped: 0,
            bytes: 10,
        };
        let report = render_report(&summary, &OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["written"], 2);
    }

    #[test]
    fn run_command_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.ts"), "const x = 1;").unwrap();

        let root = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["mdpack", root]).unwrap();
        run_command(cli).unwrap();

        let doc = fs::read_to_string(dir.path().join("complete.md")).unwrap();
        assert_eq!(doc, "app.ts\n```typescript\nconst x = 1;\n```\n\n");
    }

    #[test]
    fn run_command_fails_on_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let cli = Cli::try_parse_from([OsStr::new("mdpack"), missing.as_os_str()]).unwrap();
        let err = run_command(cli).unwrap_err();
        assert!(format!("{err:#}").contains("traversal root not found"));
    }

    #[test]
    fn run_command_fails_on_uncreatable_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.ts"), "const x = 1;").unwrap();
        let output = dir.path().join("missing/dir/out.md");
        let cli = Cli::try_parse_from([
            OsStr::new("mdpack"),
            dir.path().as_os_str(),
            OsStr::new("--output"),
            output.as_os_str(),
        ])
        .unwrap();

        let err = run_command(cli).unwrap_err();
        assert!(format!("{err:#}").contains("cannot create output"));
        assert!(!output.exists());
    }
}
