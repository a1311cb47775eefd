use anyhow::{bail, Context, Result};
use clap::Parser;
use glob::glob;
use std::path::{Path, PathBuf};
use std::process;

use svg2transparent::transform::clean_document;

#[derive(Parser)]
#[command(name = "svg2transparent")]
#[command(version, about = "Remove background rectangles from SVG files")]
#[command(long_about = "Remove background rectangles from SVG files\n\n\
    For a single file (output name derived by inserting _transparent):\n  \
    svg2transparent input.svg\n\n\
    For an explicit output path:\n  \
    svg2transparent input.svg -o output.svg\n\n\
    For batch mode (glob patterns are expanded, quoting optional):\n  \
    svg2transparent 'exports/*.svg'")]
struct Cli {
    /// Input SVG file path(s) or glob pattern(s)
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Output SVG file path (only valid with a single input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stop at the first failing file instead of continuing with the rest
    #[arg(long)]
    fail_fast: bool,

    /// Verbose output for debugging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let paths = expand_globs(&cli.inputs)?;

    if cli.verbose {
        eprintln!("Processing {} file(s)", paths.len());
    }

    if cli.output.is_some() && paths.len() > 1 {
        bail!(
            "-o/--output requires exactly one input file, got {}",
            paths.len()
        );
    }

    let mut failures = 0usize;
    for path in &paths {
        let out_path = match cli.output.as_ref() {
            Some(out) => out.clone(),
            None => derived_output_path(path),
        };

        if cli.verbose {
            eprintln!("Cleaning: {}", path.display());
        }

        let result = clean_document(path, &out_path)
            .with_context(|| format!("Failed to clean {}", path.display()));

        match result {
            Ok(removed) => {
                println!(
                    "[OK] {} → {} (removed {} background rects)",
                    path.display(),
                    out_path.display(),
                    removed
                );
            }
            Err(e) => {
                if cli.fail_fast {
                    return Err(e);
                }
                eprintln!("[FAIL] {e:#}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} file(s) failed", paths.len());
    }

    Ok(())
}

/// Expand glob patterns in input arguments, passing literal paths through
///
/// Patterns that match nothing are an error; results are sorted so batch
/// output order is stable.
fn expand_globs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        if input.contains('*') || input.contains('?') || input.contains('[') {
            let mut matched = false;
            for entry in glob(input).with_context(|| format!("Invalid pattern: {input}"))? {
                match entry {
                    Ok(path) => {
                        paths.push(path);
                        matched = true;
                    }
                    Err(e) => eprintln!("Warning: glob error for {input}: {e}"),
                }
            }
            if !matched {
                bail!("No files matched pattern: {input}");
            }
        } else {
            paths.push(PathBuf::from(input));
        }
    }

    paths.sort();
    Ok(paths)
}

/// Derive the default output path by inserting `_transparent` before the extension
///
/// `art.svg` becomes `art_transparent.svg`; extensionless inputs get `.svg`.
fn derived_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let extension = input.extension().and_then(|s| s.to_str()).unwrap_or("svg");
    input.with_file_name(format!("{stem}_transparent.{extension}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_output_path() {
        assert_eq!(
            derived_output_path(Path::new("art.svg")),
            PathBuf::from("art_transparent.svg")
        );
        assert_eq!(
            derived_output_path(Path::new("exports/deep/art.SVG")),
            PathBuf::from("exports/deep/art_transparent.SVG")
        );
    }

    #[test]
    fn test_derived_output_path_without_extension() {
        assert_eq!(
            derived_output_path(Path::new("art")),
            PathBuf::from("art_transparent.svg")
        );
    }

    #[test]
    fn test_expand_globs_literal_paths() {
        let paths = expand_globs(&["a.svg".to_string(), "b.svg".to_string()]).unwrap();
        assert_eq!(paths, vec![PathBuf::from("a.svg"), PathBuf::from("b.svg")]);
    }

    #[test]
    fn test_expand_globs_unmatched_pattern_is_error() {
        assert!(expand_globs(&["no/such/dir/*.svg".to_string()]).is_err());
    }
}
