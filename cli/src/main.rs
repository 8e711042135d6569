//! mdmend CLI - pasted report repair tool

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use mdmend::{
    read_source, save_markdown, suggest_filename, DirectoryTarget, ExportOutcome, FileTarget,
    HtmlOptions, JsonFormat, RepairOptions, RepairPipeline, RepairStats,
};

#[derive(Parser)]
#[command(name = "mdmend")]
#[command(version)]
#[command(about = "Repair pasted report Markdown: titles, numbered headings, collapsed tables", long_about = None)]
struct Cli {
    /// Input text file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Switches shared by every command that repairs text.
#[derive(Args, Clone, Copy, Default)]
struct RepairFlags {
    /// Do not promote the first line to a title
    #[arg(long)]
    no_title: bool,

    /// Do not rewrite "N.M text" lines as headings
    #[arg(long)]
    no_headings: bool,

    /// Do not split collapsed table lines
    #[arg(long)]
    no_tables: bool,

    /// Normalize input to Unicode NFC first
    #[arg(long)]
    nfc: bool,
}

impl RepairFlags {
    fn options(self) -> RepairOptions {
        RepairOptions::new()
            .with_title(!self.no_title)
            .with_headings(!self.no_headings)
            .with_tables(!self.no_tables)
            .with_unicode_normalization(self.nfc)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Repair text and print or save the Markdown
    #[command(alias = "md")]
    Repair {
        /// Input text file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print repair statistics as JSON to stderr
        #[arg(long)]
        stats: bool,

        /// Emit the content and statistics as one JSON document
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        flags: RepairFlags,
    },

    /// Repair text and save it as a .md file named after its title
    Export {
        /// Input text file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Directory to save into
        #[arg(short, long, value_name = "DIR", env = "MDMEND_EXPORT_DIR", default_value = ".")]
        dir: PathBuf,

        /// File name to use instead of the suggested one
        #[arg(short, long, value_name = "NAME")]
        name: Option<String>,

        /// Skip saving when the file already exists
        #[arg(long)]
        no_clobber: bool,

        #[command(flatten)]
        flags: RepairFlags,
    },

    /// Repair text and render it as printable HTML
    #[command(alias = "print")]
    Html {
        /// Input text file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit only the HTML body, without the page wrapper
        #[arg(long)]
        fragment: bool,

        /// Open the print dialog when the page loads
        #[arg(long)]
        auto_print: bool,

        /// Page title (defaults to the report title)
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        flags: RepairFlags,
    },

    /// Repair many files in parallel into a directory
    Batch {
        /// Input text files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "mdmend_output")]
        output: PathBuf,

        #[command(flatten)]
        flags: RepairFlags,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Repair {
            input,
            output,
            stats,
            json,
            flags,
        }) => cmd_repair(input.as_deref(), output.as_deref(), stats, json, flags),
        Some(Commands::Export {
            input,
            dir,
            name,
            no_clobber,
            flags,
        }) => cmd_export(input.as_deref(), &dir, name, no_clobber, flags),
        Some(Commands::Html {
            input,
            output,
            fragment,
            auto_print,
            title,
            flags,
        }) => cmd_html(
            input.as_deref(),
            output.as_deref(),
            fragment,
            auto_print,
            title,
            flags,
        ),
        Some(Commands::Batch {
            inputs,
            output,
            flags,
        }) => cmd_batch(&inputs, &output, flags),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: repair if input is provided
            if let Some(input) = cli.input {
                cmd_repair(
                    Some(&input),
                    cli.output.as_deref(),
                    false,
                    false,
                    RepairFlags::default(),
                )
            } else {
                println!("{}", "Usage: mdmend <FILE> [OUTPUT]".yellow());
                println!("       mdmend --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_repair(
    input: Option<&Path>,
    output: Option<&Path>,
    stats: bool,
    json: bool,
    flags: RepairFlags,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_source(input)?;
    let pipeline = RepairPipeline::new(flags.options().with_stats(stats || json));
    let result = pipeline.process_with_stats(&text);

    let rendered = if json {
        result.to_json(JsonFormat::Pretty)?
    } else {
        result.content.clone()
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", rendered);
    }

    if stats {
        eprintln!("{}", serde_json::to_string_pretty(&result.stats)?);
    }

    Ok(())
}

fn cmd_export(
    input: Option<&Path>,
    dir: &Path,
    name: Option<String>,
    no_clobber: bool,
    flags: RepairFlags,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_source(input)?;
    let markdown = RepairPipeline::new(flags.options()).process(&text);

    let suggested = match name {
        Some(name) if name.ends_with(".md") => name,
        Some(name) => format!("{}.md", name),
        None => suggest_filename(mdmend::document_title(&markdown).as_deref()),
    };

    let mut target = DirectoryTarget::new(dir);
    if no_clobber {
        target = target.no_clobber();
    }

    match save_markdown(&markdown, &suggested, &target)? {
        ExportOutcome::Saved(path) => println!("{} {}", "Saved to".green(), path.display()),
        ExportOutcome::Declined => println!("{} {}", "Skipped".yellow(), suggested),
    }

    Ok(())
}

fn cmd_html(
    input: Option<&Path>,
    output: Option<&Path>,
    fragment: bool,
    auto_print: bool,
    title: Option<String>,
    flags: RepairFlags,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_source(input)?;
    let markdown = RepairPipeline::new(flags.options()).process(&text);

    let mut options = HtmlOptions::new()
        .with_standalone(!fragment)
        .with_auto_print(auto_print);
    if let Some(title) = title {
        options = options.with_title(title);
    }

    let html = mdmend::to_html(&markdown, &options)?;

    if let Some(path) = output {
        fs::write(path, &html)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output_dir: &Path,
    flags: RepairFlags,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;
    log::debug!(
        "repairing {} files into {}",
        inputs.len(),
        output_dir.display()
    );

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let pipeline = RepairPipeline::new(flags.options().with_stats(true));
    let names = output_names(inputs);

    let outcomes: Vec<(PathBuf, Result<RepairStats, String>)> = inputs
        .par_iter()
        .zip(names.par_iter())
        .map(|(input, name)| {
            let target = FileTarget(output_dir.join(name));
            let outcome = repair_one(&pipeline, input, &target).map_err(|e| e.to_string());
            pb.inc(1);
            (input.clone(), outcome)
        })
        .collect();

    pb.finish_with_message("Done!");

    let mut totals = RepairStats::new();
    let mut failed = 0;
    println!("\n{}", "Results:".green().bold());
    for (input, outcome) in &outcomes {
        match outcome {
            Ok(stats) => {
                totals.merge(stats);
                println!(
                    "  {} {} ({} lines repaired)",
                    "├─".dimmed(),
                    input.display(),
                    stats.repaired_lines()
                );
            }
            Err(e) => {
                failed += 1;
                println!("  {} {} {}", "├─".dimmed(), input.display(), e.red());
            }
        }
    }
    println!(
        "  {} {} files, {} tables split, {} headings",
        "└─".dimmed(),
        outcomes.len() - failed,
        totals.tables_split,
        totals.section_headings + totals.subsection_headings
    );

    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, outcomes.len()).into());
    }

    Ok(())
}

/// Output file names for a batch, one per input.
///
/// Names come from the input file stem. When two inputs share a stem the
/// later ones get `_2`, `_3`, ... so no output overwrites another.
fn output_names(inputs: &[PathBuf]) -> Vec<String> {
    let mut used = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = input.file_stem().unwrap_or_default().to_string_lossy();
            let mut name = format!("{}.md", stem);
            let mut n = 2;
            while !used.insert(name.to_lowercase()) {
                name = format!("{}_{}.md", stem, n);
                n += 1;
            }
            if n > 2 {
                log::warn!("{} renamed to {} to avoid a collision", input.display(), name);
            }
            name
        })
        .collect()
}

fn repair_one(
    pipeline: &RepairPipeline,
    input: &Path,
    target: &FileTarget,
) -> mdmend::Result<RepairStats> {
    let text = read_source(Some(input))?;
    let result = pipeline.process_with_stats(&text);

    save_markdown(&result.content, "", target)?;

    Ok(result.stats)
}

fn cmd_version() {
    println!("{} {}", "mdmend".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Pasted report Markdown repair tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_names_unique_stems() {
        let inputs = vec![PathBuf::from("a/one.txt"), PathBuf::from("b/two.txt")];
        assert_eq!(output_names(&inputs), vec!["one.md", "two.md"]);
    }

    #[test]
    fn test_output_names_shared_stem() {
        let inputs = vec![
            PathBuf::from("a/report.txt"),
            PathBuf::from("b/report.txt"),
            PathBuf::from("c/report.md"),
        ];
        assert_eq!(
            output_names(&inputs),
            vec!["report.md", "report_2.md", "report_3.md"]
        );
    }

    #[test]
    fn test_output_names_skip_taken_suffix() {
        let inputs = vec![
            PathBuf::from("report_2.txt"),
            PathBuf::from("a/report.txt"),
            PathBuf::from("b/report.txt"),
        ];
        assert_eq!(
            output_names(&inputs),
            vec!["report_2.md", "report.md", "report_3.md"]
        );
    }

    #[test]
    fn test_output_names_case_insensitive() {
        let inputs = vec![PathBuf::from("Report.txt"), PathBuf::from("x/report.txt")];
        assert_eq!(output_names(&inputs), vec!["Report.md", "report_2.md"]);
    }

    #[test]
    fn test_repair_flags_options() {
        let flags = RepairFlags {
            no_tables: true,
            nfc: true,
            ..Default::default()
        };
        let options = flags.options();
        assert!(options.promote_title);
        assert!(!options.split_tables);
        assert!(options.normalize_unicode);
    }
}
