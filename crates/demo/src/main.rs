// File: crates/demo/src/main.rs
// Summary: Demo loads the purchases CSV, builds the dashboard, and prints view data
//          for each chart while simulating a few filter/hover interactions.

use anyhow::{Context, Result};
use iap_core::record::{Gender, Record, SpendingSegment};
use iap_core::{Dashboard, MarkEmphasis, PipelineOptions};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "mobile_game_inapp_purchases.csv".to_string());

    let records = match load_records_csv(Path::new(&path)) {
        Ok(r) => r,
        Err(e) => {
            // Load failure: report and render nothing.
            log::error!("failed to load dataset '{}': {:#}", path, e);
            return Err(e);
        }
    };
    println!("Loaded {} records from {}", records.len(), path);
    if records.is_empty() {
        anyhow::bail!("no records loaded; check headers/delimiter.");
    }

    let mut board = Dashboard::new(records, PipelineOptions::default());
    print_frame(&board);

    // Simulate a click on a genre in the stacked bar chart.
    if let Some(genre) = board.data().stacked.categories.first().cloned() {
        println!("\n--- toggle '{genre}' ---");
        board.toggle_category(&genre);
        print_frame(&board);

        println!("\n--- hover Whale ---");
        board.set_active(Some(SpendingSegment::Whale));
        print_emphasis(&board);

        println!("\n--- clear ---");
        board.set_active(None);
        board.clear_selection();
        print_frame(&board);
    }

    Ok(())
}

fn print_frame(board: &Dashboard) {
    let data = board.data();
    println!("Filter: {}", board.filter_label());
    println!(
        "Scatter: {} points, x [{:.0}, {:.0}], y [{:.1}, {:.1}] (log)",
        data.scatter.points.len(),
        data.scatter.x.min,
        data.scatter.x.max,
        data.scatter.y.min,
        data.scatter.y.max
    );
    println!(
        "Line: {} ages x {} series, y up to {:.0}",
        data.line.points.len(),
        data.line.series.len(),
        data.line.y.max
    );
    println!(
        "Stacked: {} genres, {} bands, y up to {:.0}",
        data.stacked.categories.len(),
        data.stacked.bands.len(),
        data.stacked.y.max
    );
    for bar in &data.grouped.bars {
        println!("  {} / {}: {:.2}", bar.genre, bar.gender, bar.total);
    }
}

fn print_emphasis(board: &Dashboard) {
    println!("Highlight: {}", board.active_label().unwrap_or("none"));
    let (mut full, mut dimmed) = (0usize, 0usize);
    for p in &board.data().scatter.points {
        match board.emphasis(p.segment) {
            MarkEmphasis::Full => full += 1,
            MarkEmphasis::Dimmed => dimmed += 1,
        }
    }
    println!("Scatter marks: {full} full, {dimmed} dimmed");
}

/// Loader collaborator: reads the delimited dataset and coerces field types.
/// Rows with unparseable or out-of-range fields are skipped with a warning;
/// the core only ever sees well-typed records.
fn load_records_csv(path: &Path) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |name: &str| -> Option<usize> { headers.iter().position(|h| h == name) };

    let i_age = idx("age");
    let i_amount = idx("inapppurchaseamount");
    let i_genre = idx("gamegenre");
    let i_gender = idx("gender");
    let i_segment = idx("spendingsegment");
    let i_sessions = idx("sessioncount");

    if [i_age, i_amount, i_genre, i_gender, i_segment, i_sessions].iter().any(Option::is_none) {
        anyhow::bail!("missing expected columns; found headers {:?}", headers);
    }

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: Option<usize>| -> &str { i.and_then(|ix| rec.get(ix)).unwrap_or("").trim() };

        let parsed = (|| -> Option<Record> {
            let age = field(i_age).parse::<i32>().ok()?;
            let amount = field(i_amount).parse::<f64>().ok()?;
            if !(amount >= 0.0) {
                return None;
            }
            Some(Record {
                age,
                purchase_amount: amount,
                genre: field(i_genre).to_string(),
                gender: field(i_gender).parse::<Gender>().ok()?,
                segment: field(i_segment).parse::<SpendingSegment>().ok()?,
                session_count: field(i_sessions).parse::<u32>().ok()?,
            })
        })();

        match parsed {
            Some(r) => out.push(r),
            None => {
                skipped += 1;
                log::warn!("skipping malformed row: {:?}", rec);
            }
        }
    }
    if skipped > 0 {
        log::warn!("skipped {skipped} malformed rows");
    }
    Ok(out)
}
