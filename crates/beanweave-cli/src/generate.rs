//! The `generate` command

use anyhow::{Context, Result};
use beanweave_core::{CodeModel, LogLevel, SynthConfig, java};
use beanweave_logging::{ReloadHandle, init_logging};
use beanweave_synth::{Engine, RunReport, SynthContext};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct GenerateArgs {
    pub model: PathBuf,
    pub output: PathBuf,
    pub config: Option<PathBuf>,
    pub passes: Vec<String>,
    pub implements: Vec<String>,
    pub debug: bool,
    pub report: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if !args.implements.is_empty() {
        config.implements = args.implements.clone();
    }

    init_logging(LogLevel::parse(&config.log_level).unwrap_or(LogLevel::Info));
    if args.debug || config.debug {
        ReloadHandle::global()
            .set_debug(true)
            .map_err(anyhow::Error::msg)?;
    }

    let passes = select_passes(&args.passes, &config)?;
    let model = CodeModel::from_file(&args.model)
        .with_context(|| format!("Failed to load class model: {}", args.model.display()))?;
    println!(
        "Loaded {} classes from {}",
        model.classes.len(),
        args.model.display()
    );

    let mut ctx = SynthContext::new(model, config);
    let report = Engine::new()
        .run(&mut ctx, &passes)
        .context("Synthesis failed")?;
    let model = ctx.into_model();

    let written = write_sources(&model, &args.output)?;
    println!(
        "✓ {} members added, {} skipped",
        report.members_added(),
        report.skipped().count()
    );
    println!("✓ Wrote {} files to {}", written.len(), args.output.display());

    if let Some(path) = &args.report {
        write_report(&report, path)?;
        println!("✓ Report: {}", path.display());
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SynthConfig> {
    match path {
        Some(path) => SynthConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration: {}", path.display())),
        None => Ok(SynthConfig::default()),
    }
}

/// Command-line passes win over the configured default selection.
fn select_passes(cli: &[String], config: &SynthConfig) -> Result<Vec<String>> {
    let passes = if cli.is_empty() {
        config.passes.clone()
    } else {
        cli.to_vec()
    };
    if passes.is_empty() {
        anyhow::bail!("No passes selected; use --pass or set `passes` in beanweave.toml");
    }
    Ok(passes)
}

/// Render every class, object factory and package-info below `output` in
/// its package directory.
fn write_sources(model: &CodeModel, output: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for class in model.classes.iter().chain(&model.object_factories) {
        let path = output.join(java::source_path(class));
        write_source(&path, &java::render_class(class))?;
        written.push(path);
    }
    for package in &model.packages {
        let path = output.join(java::package_info_path(package));
        write_source(&path, &java::render_package_info(package))?;
        written.push(path);
    }
    Ok(written)
}

fn write_source(path: &Path, code: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    fs::write(path, code)
        .with_context(|| format!("Failed to write source file: {}", path.display()))?;
    debug!("Wrote {}", path.display());
    Ok(())
}

fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    let json = report.to_json().context("Failed to serialize run report")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write report: {}", path.display()))
}
