//! CLI tool for compiling deck descriptions into interactive HTML documents.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::{DeckDescription, DeckRenderer, NavigationConfig, Theme};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Compile deck descriptions (JSON) into standalone, navigable HTML documents.
#[derive(Parser, Debug)]
#[command(name = "deck-render")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input deck file(s) (.json, one deck or an array of decks)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Built-in theme name (classic, midnight, minimal)
    #[arg(short, long, default_value = "classic", conflicts_with = "theme_file")]
    theme: String,

    /// Theme descriptor file (.json)
    #[arg(long)]
    theme_file: Option<PathBuf>,

    /// Vertical swipe distance, in pixels, that changes slides
    #[arg(long, default_value = "50")]
    swipe_threshold: f64,

    /// Fraction of the viewport a slide must fill to become current
    #[arg(long, default_value = "0.5")]
    intersection_threshold: f64,

    /// Link target for the watermark footer
    #[arg(long)]
    watermark_url: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let renderer = build_renderer(&args)?;
    let mut pages_written = 0usize;

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_file(input_path, &args, &renderer) {
            Ok(written) => pages_written += written,
            Err(e) => {
                eprintln!("Error processing {}: {:#}", input_path.display(), e);
            }
        }
    }

    if !args.print {
        eprintln!("Wrote {} page(s)", pages_written);
    }

    Ok(())
}

/// Build the renderer from theme and navigation options.
fn build_renderer(args: &Args) -> Result<DeckRenderer> {
    let theme = match &args.theme_file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read theme file {}", path.display()))?;
            Theme::from_json(&json)
                .with_context(|| format!("Invalid theme file {}", path.display()))?
        }
        None => Theme::builtin(&args.theme).with_context(|| {
            format!(
                "Available themes: {}",
                Theme::builtin_names().join(", ")
            )
        })?,
    };
    log::debug!("Using theme {}", theme.name);

    let navigation = NavigationConfig::new()
        .with_swipe_threshold(args.swipe_threshold)
        .with_intersection_threshold(args.intersection_threshold);

    let mut renderer = DeckRenderer::new(theme).with_navigation(navigation);
    if let Some(url) = &args.watermark_url {
        renderer = renderer.with_watermark_url(url.clone());
    }
    Ok(renderer)
}

/// Render every deck in one input file. Returns the number of pages written.
///
/// A deck that fails to parse or write is reported and skipped; the
/// remaining decks in the file are still rendered.
fn process_file(input_path: &Path, args: &Args, renderer: &DeckRenderer) -> Result<usize> {
    let json = std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;

    let decks = DeckDescription::from_json_batch(&json)
        .with_context(|| format!("Failed to parse deck description {}", input_path.display()))?;

    if args.verbose {
        eprintln!("  Found {} deck(s)", decks.len());
    }

    let batch = decks.len() > 1;
    let mut written = 0;

    for (idx, deck) in decks.iter().enumerate() {
        let deck = match deck {
            Ok(deck) => deck,
            Err(e) => {
                eprintln!("Error reading deck {} of {}: {}", idx + 1, input_path.display(), e);
                continue;
            }
        };

        if let Err(e) = deck.validate() {
            log::warn!("{} (deck {}): {}", input_path.display(), idx + 1, e);
        }

        let document = renderer.render(deck);

        if args.verbose {
            eprintln!(
                "  Rendered {:?}: {} slides",
                deck.company_name,
                document.slide_count()
            );
        }

        if args.print {
            print!("{}", document);
            continue;
        }

        let index = batch.then_some(idx + 1);
        let result = get_output_path(input_path, args.output.as_ref(), index)
            .and_then(|path| write_output(&path, document.as_str()).map(|_| path));

        match result {
            Ok(path) => {
                written += 1;
                if args.verbose {
                    eprintln!("  Written to: {}", path.display());
                }
            }
            Err(e) => {
                eprintln!("Error writing deck {} of {}: {:#}", idx + 1, input_path.display(), e);
            }
        }
    }

    Ok(written)
}

/// Determine the output path for a rendered deck.
///
/// Decks from a batch file get their one-based position appended to the stem.
fn get_output_path(
    input_path: &Path,
    output_dir: Option<&PathBuf>,
    index: Option<usize>,
) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("deck");

    let output_filename = match index {
        Some(n) => format!("{}-{}.html", stem, n),
        None => format!("{}.html", stem),
    };

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_next_to_input() {
        let path = get_output_path(Path::new("decks/acme.json"), None, None).unwrap();
        assert_eq!(path, PathBuf::from("decks/acme.html"));
    }

    #[test]
    fn test_output_path_for_batch_item() {
        let path = get_output_path(Path::new("decks/batch.json"), None, Some(3)).unwrap();
        assert_eq!(path, PathBuf::from("decks/batch-3.html"));
    }

    #[test]
    fn test_malformed_deck_does_not_block_batch() {
        let dir = std::env::temp_dir().join(format!("deck-render-batch-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("batch.json");
        std::fs::write(
            &input,
            r#"[{"companyName": "Good", "slides": [{"type": "title", "title": "Hi"}]}, "broken"]"#,
        )
        .unwrap();

        let args = Args::try_parse_from(["deck-render", input.to_str().unwrap()]).unwrap();
        let renderer = build_renderer(&args).unwrap();
        let written = process_file(&input, &args, &renderer).unwrap();

        assert_eq!(written, 1);
        assert!(dir.join("batch-1.html").exists());
        assert!(!dir.join("batch-2.html").exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_args_parse_defaults() {
        let args = Args::try_parse_from(["deck-render", "acme.json"]).unwrap();
        assert_eq!(args.theme, "classic");
        assert_eq!(args.swipe_threshold, 50.0);
        assert_eq!(args.intersection_threshold, 0.5);
        assert!(!args.print);

        let renderer = build_renderer(&args).unwrap();
        assert_eq!(renderer.theme().name, "classic");
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let args = Args::try_parse_from(["deck-render", "--theme", "neon", "acme.json"]).unwrap();
        assert!(build_renderer(&args).is_err());
    }

    #[test]
    fn test_theme_and_theme_file_conflict() {
        let result = Args::try_parse_from([
            "deck-render",
            "--theme",
            "midnight",
            "--theme-file",
            "brand.json",
            "acme.json",
        ]);
        assert!(result.is_err());
    }
}
