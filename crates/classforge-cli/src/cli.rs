//! Command-line interface for the classforge utility
//!
//! Replays class diagram command scripts and writes the generated class
//! skeletons.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::info;

use crate::script::run_script;
use classforge::class::{Editor, GeneratorConfig, JavaGenerator};
use classforge::core::logging::{init_logging, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use classforge::core::RelationKind;

/// Classforge - Generate class skeletons from UML class diagrams
#[derive(Parser)]
#[command(name = "classforge")]
#[command(about = "Replay UML class diagram scripts and generate Java class skeletons")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a diagram script and generate Java class skeletons
    Generate {
        /// Input script (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for generated code (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Spaces used to indent class members
        #[arg(long, default_value_t = 4)]
        indent: usize,
    },

    /// Replay a diagram script and report what it builds
    Check {
        /// Input script (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Show supported relation kinds
    Kinds {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct KindInfo {
    name: &'static str,
    dashed: bool,
}

/// Main CLI application
#[derive(Default)]
pub struct ClassforgeApp;

impl ClassforgeApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());
        let log_format = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level), Some(&log_format)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Classforge v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Generate {
                input,
                output,
                indent,
            } => self.generate_command(input, output, indent, cli.verbose),
            Commands::Check { input } => self.check_command(input, cli.verbose),
            Commands::Kinds { json } => self.kinds_command(json),
        }
    }

    /// Replay the script from `input` into a fresh editor
    fn replay(&self, input: Option<PathBuf>, editor: &mut Editor, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;
        if verbose {
            eprintln!("Read {} bytes of script", content.len());
        }
        run_script(editor, &content)
    }

    /// Handle the generate command
    fn generate_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        indent: usize,
        verbose: bool,
    ) -> Result<()> {
        let generator = JavaGenerator::with_config(GeneratorConfig::new().with_indent(indent));
        let mut editor = Editor::with_generator(generator);
        self.replay(input, &mut editor, verbose)?;

        let code = editor.generate();
        info!(
            classes = editor.diagram().node_count(),
            bytes = code.len(),
            "Generated class skeletons"
        );
        if verbose {
            eprintln!(
                "Generated {} class(es)",
                editor.diagram().node_count()
            );
        }
        self.write_output(output, &code)
    }

    /// Handle the check command
    fn check_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let mut editor = Editor::new();
        match self.replay(input, &mut editor, verbose) {
            Ok(()) => {
                let diagram = editor.diagram();
                println!(
                    "✓ {} class(es), {} relation(s), {} dangling",
                    diagram.node_count(),
                    diagram.relation_count(),
                    diagram.dangling_relations().count()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Invalid script: {:#}", e);
                Err(e)
            }
        }
    }

    /// Handle the kinds command
    fn kinds_command(&self, json: bool) -> Result<()> {
        let kinds: Vec<_> = RelationKind::ALL
            .iter()
            .map(|kind| KindInfo {
                name: kind.as_str(),
                dashed: kind.is_dashed(),
            })
            .collect();

        if json {
            let listing = serde_json::json!({
                "relation_kinds": kinds,
                "total": kinds.len(),
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            println!("Supported relation kinds:");
            for kind in &kinds {
                let line = if kind.dashed { "dashed" } else { "solid" };
                println!("  {:<15} {}", kind.name, line);
            }
            println!();
            println!("Total: {} relation kinds", kinds.len());
        }

        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                print!("{}", content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}
