//! dox2md — generate cross-linked markdown from doxygen XML metadata.
//!
//! Two sequential stages over the input set: every unit is built into the
//! compound set first, and only then do the resolvers run — references are by
//! name, and a referenced compound may be built after the referencing one.

mod ancestry;
mod model;
mod parser;
mod render;
mod resolve;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use resolve::CompoundSet;

#[derive(Parser)]
#[command(
    name = "dox2md",
    about = "Generate markdown documentation from doxygen XML output"
)]
struct Cli {
    /// Input XML files, directories, or glob patterns
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Output directory
    #[arg(short = 'o', long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let files = expand_inputs(&cli.inputs)?;

    // Build phase: the full set must exist before any reference resolves.
    let mut set = CompoundSet::default();
    for path in &files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        match parser::parse_unit(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?
        {
            Some(compound) => set.insert(compound),
            // No top-level record marker — an empty unit, not an error.
            None => continue,
        }
    }

    // Resolve-and-render phase.
    fs::create_dir_all(&cli.output).with_context(|| {
        format!("failed to create output directory: {}", cli.output.display())
    })?;

    let mut pages = 0;
    for class in set.classes() {
        let page = render::class_page(&set, class)
            .with_context(|| format!("failed to render {}", class.full_name))?;
        let out_path = cli.output.join(format!("{}.md", class.simple_name()));
        fs::write(&out_path, page)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        pages += 1;
    }

    let index_path = cli.output.join("index.md");
    fs::write(&index_path, render::namespace_index(&set))
        .with_context(|| format!("failed to write {}", index_path.display()))?;

    println!("{pages} pages => {}", cli.output.display());
    Ok(())
}

/// Expand inputs into a sorted, deduped list of XML files. A directory is
/// scanned for `*.xml` (non-recursive); anything else is tried as a glob.
fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("xml") {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(input)
            .with_context(|| format!("invalid glob pattern: {input}"))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {input}");
        }
        files.extend(matches);
    }
    // Sort for deterministic build order.
    files.sort();
    files.dedup();
    Ok(files)
}
