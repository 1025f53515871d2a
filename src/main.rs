//! # hashtag-report CLI
//!
//! Command-line front end for the hashtag-report library.

use std::io::{self, Write};
use std::process;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use hashtag_report::ReportError;
use hashtag_report::cli::{Args, Command};
use hashtag_report::core::output::CsvExporter;
use hashtag_report::core::{Report, ReportAssembler};
use hashtag_report::store::{MemoryStore, RevisionStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ReportError> {
    let args = <Args as ClapParser>::parse();
    let config = args.config();
    let store = MemoryStore::from_json_path(&args.data)?.with_config(config.clone());
    let rows = store.len()?;
    tracing::info!(rows, path = %args.data.display(), "dataset loaded");

    let mut stdout = io::stdout().lock();

    match args.command {
        Command::Report {
            tag,
            source,
            offset,
            json,
        } => {
            let report = ReportAssembler::new(&store)
                .with_config(config)
                .search(tag.as_deref(), source.as_deref(), offset)?;
            if json {
                serde_json::to_writer_pretty(&mut stdout, &report)?;
                writeln!(stdout)?;
            } else {
                print_report(&mut stdout, &report)?;
            }
        }
        Command::Csv {
            tag,
            source,
            limit,
            output,
        } => {
            let exporter = CsvExporter::new(&store).with_config(config);
            match output {
                Some(path) => {
                    let count = exporter.export_to_path(&tag, source.as_deref(), limit, &path)?;
                    eprintln!("✅ Exported {} revisions to {}", count, path.display());
                }
                None => {
                    let document = exporter.export(&tag, source.as_deref(), limit)?;
                    stdout.write_all(&document)?;
                }
            }
        }
        Command::Top => {
            let home = ReportAssembler::new(&store).with_config(config).home()?;
            for entry in home.top_tags {
                writeln!(stdout, "{:>8}  #{}", entry.count, entry.tag)?;
            }
        }
        Command::Sources => {
            for source in store.sources()? {
                writeln!(stdout, "{}", source)?;
            }
        }
    }

    stdout.flush()?;
    Ok(())
}

/// Prints a report as plain text.
fn print_report(out: &mut impl Write, report: &Report) -> io::Result<()> {
    let tag = report
        .tag
        .as_deref()
        .map_or_else(|| "all tags".to_string(), |t| format!("#{}", t));
    let source = report.source.as_deref().unwrap_or("all sources");

    writeln!(out, "🏷️  {} ({})", tag, source)?;
    writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;

    let (Some(stats), Some(page)) = (&report.stats, &report.page) else {
        writeln!(out, "No revisions found.")?;
        writeln!(out, "Sources: {}", report.sources.join(", "))?;
        return Ok(());
    };

    writeln!(
        out,
        "📊 {} revisions · {} pages · {} users · {} bytes",
        stats.revisions, stats.pages, stats.users, stats.bytes
    )?;
    writeln!(out, "📅 {} – {}", stats.oldest.trim(), stats.newest.trim())?;
    writeln!(out)?;

    for rev in &report.revisions {
        writeln!(
            out,
            "{}  [{}] {} ({:+}) by {}",
            rev.date.trim(),
            rev.raw.source,
            rev.spaced_title,
            rev.diff_size,
            rev.raw.user_text
        )?;
        if !rev.comment_plain.is_empty() {
            writeln!(out, "    {}", rev.comment_plain)?;
        }
        writeln!(out, "    {}", rev.diff_url)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Showing {}-{} · prev: {} · next: {}",
        page.start,
        page.end,
        page.prev_offset(),
        page.next_offset()
    )?;
    Ok(())
}
