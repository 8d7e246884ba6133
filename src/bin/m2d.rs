//! Mdocx CLI - normalize markdown math notation and convert to DOCX

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use mdocx::pandoc::{check_pandoc_installed, convert_md_to_docx};
use mdocx::{metrics_source, normalize_math_delimiters, normalize_with_report, AppConfig};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "m2d")]
#[command(author = "SciPenAI")]
#[command(version)]
#[command(about = "Mdocx - Markdown math-notation normalizer and DOCX conversion front end", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Write a per-pass rewrite report JSON to this path
    #[arg(long)]
    report: Option<String>,

    /// Check mode - report delimiter metrics without converting
    #[arg(long)]
    check: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Report delimiter metrics for a document
    Check {
        /// Input file to check
        input: Option<String>,

        /// Emit metrics as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Normalize a file (default action)
    Convert {
        /// Input file path
        input: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,

        /// Write a per-pass rewrite report JSON to this path
        #[arg(long)]
        report: Option<String>,
    },

    /// Normalize and convert to DOCX via pandoc
    Docx {
        /// Input markdown file path
        input: Option<String>,

        /// Output DOCX path (defaults to the configured docx directory)
        #[arg(short, long)]
        output: Option<String>,

        /// Load configuration from a TOML file
        #[arg(long)]
        config: Option<String>,

        /// Keep the intermediate normalized markdown file
        #[arg(long)]
        keep_md: bool,
    },

    /// Batch normalize multiple files
    Batch {
        /// Input directory
        input: String,

        /// Output directory
        #[arg(short, long)]
        output_dir: String,

        /// File extension for output files
        #[arg(short, long)]
        extension: Option<String>,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let content = read_input(cli.input_file.as_deref())?;

    // If check mode, analyze and report without converting
    if cli.check {
        return run_check(&content, false);
    }

    let outcome = normalize_with_report(&content);
    if let Some(path) = cli.report.as_ref() {
        write_report(path, &outcome)?;
    }
    write_output(cli.output.as_deref(), &outcome.content)
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> io::Result<()> {
    match cmd {
        Commands::Check { input, json } => {
            let content = read_input(input.as_deref())?;
            run_check(&content, json)?;
        }

        Commands::Convert {
            input,
            output,
            report,
        } => {
            let content = read_input(input.as_deref())?;
            let outcome = normalize_with_report(&content);
            if let Some(path) = report.as_ref() {
                write_report(path, &outcome)?;
            }
            write_output(output.as_deref(), &outcome.content)?;
        }

        Commands::Docx {
            input,
            output,
            config,
            keep_md,
        } => {
            let app_config = match config {
                Some(path) => AppConfig::from_toml_file(Path::new(&path))
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?,
                None => AppConfig::from_env(),
            };

            if !check_pandoc_installed(&app_config) {
                eprintln!(
                    "Pandoc '{}' is not installed or not in PATH.",
                    app_config.pandoc_bin
                );
                eprintln!("Please install pandoc: https://pandoc.org/installing.html");
                std::process::exit(1);
            }

            let content = read_input(input.as_deref())?;
            let normalized = normalize_math_delimiters(&content);

            app_config
                .ensure_dirs()
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            let base = input
                .as_deref()
                .and_then(|p| Path::new(p).file_stem().and_then(|s| s.to_str()))
                .unwrap_or("converted")
                .to_string();
            let stamp = chrono::Local::now().format("%Y%m%d%H%M%S");
            let md_path = app_config.md_dir().join(format!("{}_{}.md", base, stamp));
            let docx_path = match output {
                Some(ref path) => PathBuf::from(path),
                None => app_config
                    .docx_dir()
                    .join(format!("{}_{}.docx", base, stamp)),
            };

            fs::write(&md_path, &normalized)?;

            match convert_md_to_docx(&app_config, &md_path, &docx_path) {
                Ok(()) => {
                    if !keep_md {
                        let _ = fs::remove_file(&md_path);
                    }
                    eprintln!("✓ DOCX written to: {}", docx_path.display());
                }
                Err(e) => {
                    if !keep_md {
                        let _ = fs::remove_file(&md_path);
                    }
                    eprintln!("✗ Conversion failed: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Batch {
            input,
            output_dir,
            extension,
        } => {
            // Create output directory if it doesn't exist
            fs::create_dir_all(&output_dir)?;

            let out_ext = extension.unwrap_or_else(|| "md".to_string());

            let input_path = Path::new(&input);
            let files: Vec<PathBuf> = if input_path.is_dir() {
                fs::read_dir(input_path)?
                    .filter_map(|e| e.ok())
                    .filter(|e| {
                        e.path().extension().and_then(|s| s.to_str()) == Some("md")
                    })
                    .map(|e| e.path())
                    .collect()
            } else {
                vec![input_path.to_path_buf()]
            };

            let mut success_count = 0;
            let mut error_count = 0;

            for file_path in files {
                let filename = file_path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("output");
                let output_path =
                    Path::new(&output_dir).join(format!("{}.{}", filename, out_ext));

                match fs::read_to_string(&file_path) {
                    Ok(content) => {
                        let result = normalize_math_delimiters(&content);
                        match fs::write(&output_path, &result) {
                            Ok(_) => {
                                eprintln!("✓ {}", output_path.display());
                                success_count += 1;
                            }
                            Err(e) => {
                                eprintln!("✗ {} - write error: {}", output_path.display(), e);
                                error_count += 1;
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("✗ {} - read error: {}", file_path.display(), e);
                        error_count += 1;
                    }
                }
            }

            eprintln!(
                "\nBatch normalization complete: {} succeeded, {} failed",
                success_count, error_count
            );

            if error_count > 0 {
                std::process::exit(1);
            }
        }

        Commands::Info => {
            println!("Mdocx - Markdown math-notation normalizer and DOCX conversion front end");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ LaTeX block \\[...\\] → $$...$$");
            println!("  ✓ LaTeX inline \\( ... \\) → $...$");
            println!("  ✓ Legacy block [...] → $$...$$ (heuristic)");
            println!("  ✓ Legacy inline ( ... ) → $...$ (heuristic)");
            println!("  ✓ Literal \\left[ / \\right] preservation");
            println!("  ✓ DOCX conversion via system pandoc");
            println!("  ✓ Batch file processing");
            println!();
            println!("Repository: https://github.com/scipenai/mdocx");
            println!();
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, content: &str) -> io::Result<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", content)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn write_report(path: &str, outcome: &mdocx::NormalizeOutcome) -> io::Result<()> {
    let serialized = serde_json::to_string_pretty(&outcome.report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    fs::write(path, serialized)
}

#[cfg(feature = "cli")]
fn run_check(content: &str, json: bool) -> io::Result<()> {
    let metrics = metrics_source(content);
    if json {
        let serialized = serde_json::to_string_pretty(&metrics)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        println!("{}", serialized);
    } else {
        println!("Canonical blocks:        {}", metrics.block_formulas);
        println!("Canonical inline:        {}", metrics.inline_formulas);
        println!("Residual \\[ \\] tokens:   {}", metrics.latex_block_delims);
        println!("Residual \\( \\) tokens:   {}", metrics.latex_inline_delims);
        println!("Residual fence lines:    {}", metrics.fence_lines);
        println!("Bracket commands:        {}", metrics.bracket_commands);
    }

    // Exit with error code if legacy notation remains
    if metrics.has_residual_notation() {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install mdocx --features cli");
    eprintln!("  m2d [OPTIONS] [INPUT_FILE]");
}
