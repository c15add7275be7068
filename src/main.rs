//! Binary entry point for the `iscc` command-line tool.
//!
//! Parses arguments via [`iscc::cli::args`], dispatches to the relevant
//! component builder in the library, and renders either plain text or
//! `--json` output. All file handles opened along the way are released by
//! Rust's RAII; there is no explicit cleanup path.

use anyhow::{Context, Result};
use clap::Parser;
use iscc::cli::args::{Cli, Command};
use iscc::cli::constants::set_display_level;
use iscc::schema::{DistanceResult, IsccResult};
use iscc::stream::Streamable;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    if cli.quiet {
        set_display_level(0);
    } else if cli.verbose > 0 {
        set_display_level(2 + cli.verbose as u32);
    }

    if let Err(e) = run(cli) {
        iscc::displaylevel!(1, "iscc: {e:#}\n");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Meta { title, extra } => run_meta(&title, &extra, cli.json),
        Command::Text { input, literal, partial } => run_text(&input, literal, partial, cli.json),
        #[cfg(feature = "image-io")]
        Command::Image { path, partial } => run_image(&path, partial, cli.json),
        Command::Data { path } => run_data(&path, cli.json),
        Command::Instance { path } => run_instance(&path, cli.json),
        Command::Id { paths } => run_id(&paths, cli.json),
        Command::Distance { a, b, mixed } => run_distance(&a, &b, mixed, cli.json),
        Command::Batch { paths } => run_batch(&paths, cli.json),
    }
}

fn run_meta(title: &str, extra: &str, json: bool) -> Result<()> {
    let (code, trimmed_title, trimmed_extra) =
        iscc::meta_id(title, extra).context("computing meta-id")?;
    if json {
        let result = IsccResult {
            meta_id: Some(code),
            title: Some(trimmed_title),
            extra: Some(trimmed_extra),
            ..Default::default()
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{code}");
    }
    Ok(())
}

fn run_text(input: &str, literal: bool, partial: bool, json: bool) -> Result<()> {
    let text = if literal {
        input.to_owned()
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {input}"))?
    };
    let code = iscc::content_id_text(&text, partial).context("computing content-id-text")?;
    emit_single("content_id", &code, json)
}

#[cfg(feature = "image-io")]
fn run_image(path: &Path, partial: bool, json: bool) -> Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let luma = iscc::imagehash::decode::luma_from_bytes(&bytes).context("decoding image")?;
    let code = iscc::content_id_image(&luma, partial).context("computing content-id-image")?;
    emit_single("content_id", &code, json)
}

fn run_data(path: &Path, json: bool) -> Result<()> {
    let stream = Streamable::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let code = iscc::data_id(stream).context("computing data-id")?;
    emit_single("data_id", &code, json)
}

fn run_instance(path: &Path, json: bool) -> Result<()> {
    let stream = Streamable::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let code = iscc::instance_id(stream).context("computing instance-id")?;
    emit_single("instance_id", &code, json)
}

fn run_distance(a: &str, b: &str, mixed: bool, json: bool) -> Result<()> {
    let dist = iscc::distance(a, b, mixed).context("computing hamming distance")?;
    if json {
        let result = DistanceResult { a: a.to_owned(), b: b.to_owned(), hamming_distance: dist };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{dist}");
    }
    Ok(())
}

/// Compute every applicable component code for one file, dispatching
/// Content-ID by its guessed media type.
fn compute_one(path: &Path) -> Result<IsccResult> {
    let data_stream =
        Streamable::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let data_id = iscc::data_id(data_stream).context("computing data-id")?;

    let instance_stream =
        Streamable::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let instance_id = iscc::instance_id(instance_stream).context("computing instance-id")?;

    let content_id = match iscc::mediatype::guess(path) {
        iscc::mediatype::GenericMediaType::Text => {
            std::fs::read_to_string(path).ok().and_then(|text| iscc::content_id_text(&text, false).ok())
        }
        #[cfg(feature = "image-io")]
        iscc::mediatype::GenericMediaType::Image => std::fs::read(path)
            .ok()
            .and_then(|bytes| iscc::imagehash::decode::luma_from_bytes(&bytes).ok())
            .and_then(|luma| iscc::content_id_image(&luma, false).ok()),
        #[cfg(not(feature = "image-io"))]
        iscc::mediatype::GenericMediaType::Image => None,
        iscc::mediatype::GenericMediaType::Other => None,
    };

    Ok(IsccResult {
        meta_id: None,
        content_id,
        data_id: Some(data_id),
        instance_id: Some(instance_id),
        title: None,
        extra: None,
    })
}

fn run_id(paths: &[PathBuf], json: bool) -> Result<()> {
    let refs: Vec<&Path> = paths.iter().map(|p| p.as_path()).collect();
    let files = iscc::util::create_file_list(&refs).context("expanding input paths")?;

    for file in &files {
        match compute_one(file) {
            Ok(result) => {
                if json {
                    println!("{}", serde_json::to_string(&result)?);
                } else {
                    println!(
                        "{}: data={:?} instance={:?} content={:?}",
                        file.display(),
                        result.data_id,
                        result.instance_id,
                        result.content_id
                    );
                }
            }
            Err(e) => iscc::displaylevel!(1, "iscc: {}: {e:#}\n", file.display()),
        }
    }
    Ok(())
}

fn run_batch(paths: &[PathBuf], json: bool) -> Result<()> {
    let refs: Vec<&Path> = paths.iter().map(|p| p.as_path()).collect();
    let files = iscc::util::create_file_list(&refs).context("expanding input paths")?;

    let results: Vec<(PathBuf, Result<(String, String)>)> = files
        .par_iter()
        .map(|file| {
            let result = (|| -> Result<(String, String)> {
                let data_stream = Streamable::from_path(file)?;
                let data_id = iscc::data_id(data_stream)?;
                let instance_stream = Streamable::from_path(file)?;
                let instance_id = iscc::instance_id(instance_stream)?;
                Ok((data_id, instance_id))
            })();
            (file.clone(), result)
        })
        .collect();

    for (file, result) in results {
        match result {
            Ok((data_id, instance_id)) => {
                if json {
                    let result = IsccResult {
                        data_id: Some(data_id),
                        instance_id: Some(instance_id),
                        ..Default::default()
                    };
                    println!("{}", serde_json::to_string(&result)?);
                } else {
                    println!("{}: data={data_id} instance={instance_id}", file.display());
                }
            }
            Err(e) => iscc::displaylevel!(1, "iscc: {}: {e:#}\n", file.display()),
        }
    }
    Ok(())
}

fn emit_single(kind: &'static str, code: &str, json: bool) -> Result<()> {
    if json {
        let result = iscc::schema::ComponentResult { kind, code: code.to_owned() };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{code}");
    }
    Ok(())
}
