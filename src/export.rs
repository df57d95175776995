//! Report export: render an analysis as a text report or a JSON document.
//!
//! ```text
//! AnalysisResult → render_report()     → numbered plain-text sections
//!                → write_result_json() → ResultDocument (pretty JSON)
//! ```
//!
//! Both writers only read the result; room names and types are looked up in
//! the catalog, and ids stand in for names of unknown rooms.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{sorted_by_count, AnalysisResult, Histogram};
use crate::catalog::{RoomCatalog, SourceFailure};
use crate::config::AnalysisConfig;
use crate::model::RoomId;
use crate::Result;

const RULE: &str = "================================================================================";
const THIN_RULE: &str = "----------------------------------------";

// ============================================================================
// Text report
// ============================================================================

/// Write the human-readable connectivity report.
///
/// `config` only sizes the listings; expectations and opt-in checks come
/// from the result itself.
pub fn render_report(
    result: &AnalysisResult,
    catalog: &RoomCatalog,
    config: &AnalysisConfig,
    writer: &mut dyn Write,
) -> Result<()> {
    let limit = config.listing_limit;

    writeln!(writer, "{RULE}")?;
    writeln!(writer, "Room connectivity report")?;
    writeln!(writer, "{RULE}")?;

    // 1. Basics
    section(writer, 1, "Basic statistics")?;
    writeln!(writer, "Total rooms: {}", result.total_rooms)?;
    writeln!(writer, "Sources loaded: {}", catalog.sources_loaded())?;
    for failure in catalog.failures() {
        writeln!(writer, "[WARNING] skipped {}: {}", failure.source, failure.reason)?;
    }
    if let Some(expected) = result.expected_room_count {
        writeln!(writer, "Expected rooms: {expected}")?;
        if expected == result.total_rooms {
            writeln!(writer, "Room count check: [OK]")?;
        } else {
            let diff = expected as i64 - result.total_rooms as i64;
            writeln!(writer, "Room count check: [ERROR] off by {diff}")?;
        }
    }
    writeln!(writer, "Rooms without exits: {}", result.rooms_without_exits.len())?;
    list_rooms(writer, catalog, &result.rooms_without_exits, limit)?;
    writeln!(writer, "Rooms with a single exit: {}", result.single_exit_rooms.len())?;

    // 2. Connectivity
    section(writer, 2, "Connectivity")?;
    writeln!(writer, "Connected components: {}", result.connected_components.len())?;
    for (i, component) in result.connected_components.iter().enumerate() {
        writeln!(writer, "  Component {}: {} room(s)", i + 1, component.len())?;
        if component.len() <= config.component_listing_max {
            for id in component {
                writeln!(writer, "    - {} ({id})", catalog.display_name(id.as_str()))?;
            }
        }
    }
    if result.isolated_rooms.is_empty() {
        writeln!(writer, "[OK] every room is reachable from the first room")?;
    } else {
        writeln!(writer, "[WARNING] {} room(s) unreachable from the first room:", result.isolated_rooms.len())?;
        list_rooms(writer, catalog, &result.isolated_rooms, limit)?;
    }

    // 3. Symmetry
    section(writer, 3, "Connection symmetry")?;
    if result.violations.is_empty() {
        writeln!(writer, "[OK] every connection has a way back")?;
    } else {
        writeln!(writer, "[WARNING] {} asymmetric connection(s)", result.violations.len())?;

        let missing: Vec<_> = result.missing_targets().collect();
        if !missing.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "  Exits to rooms that do not exist ({}):", missing.len())?;
            for v in missing.iter().take(limit) {
                writeln!(
                    writer,
                    "    {} ({}->) {} (missing)",
                    catalog.display_name(v.from.as_str()),
                    v.direction(),
                    v.to,
                )?;
            }
            more(writer, missing.len(), limit)?;
        }

        let one_way: Vec<_> = result.no_reverse().collect();
        if !one_way.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "  Connections without a way back ({}):", one_way.len())?;
            for v in one_way.iter().take(limit) {
                let from = catalog.display_name(v.from.as_str());
                let to = catalog.display_name(v.to.as_str());
                writeln!(writer, "    {from} ({}->) {to}", v.direction())?;
                writeln!(writer, "      but {to} has no exit back to {from}")?;
            }
            more(writer, one_way.len(), limit)?;
        }
    }
    if result.strict_direction_pairing {
        if result.direction_mismatches.is_empty() {
            writeln!(writer, "[OK] every compass exit is answered by its opposite")?;
        } else {
            writeln!(writer)?;
            writeln!(writer, "  Exits without an opposite-direction return ({}):", result.direction_mismatches.len())?;
            for m in result.direction_mismatches.iter().take(limit) {
                writeln!(
                    writer,
                    "    {} --{}--> {} (expected {} back)",
                    catalog.display_name(m.from.as_str()),
                    m.direction,
                    catalog.display_name(m.to.as_str()),
                    m.expected,
                )?;
            }
            more(writer, result.direction_mismatches.len(), limit)?;
        }
    }

    // 4. Hubs
    section(writer, 4, "Hub rooms (most connections)")?;
    writeln!(writer, "Rank Room                 Type       Links")?;
    writeln!(writer, "--------------------------------------------------")?;
    for (i, hub) in result.top_hubs.iter().enumerate() {
        let id = hub.room_id.as_str();
        let room_type = catalog.room(id).map_or(crate::model::UNKNOWN, |r| r.room_type.as_str());
        writeln!(
            writer,
            "{:2}. {:<20} {:<10} {:3}",
            i + 1,
            clip(catalog.display_name(id), 20),
            clip(room_type, 10),
            hub.degree,
        )?;
    }

    // 5-7. Histograms
    section(writer, 5, "Room types")?;
    histogram(writer, &result.room_types, "room(s)")?;
    section(writer, 6, "Regions")?;
    histogram(writer, &result.region_stats, "room(s)")?;
    section(writer, 7, "Direction usage")?;
    histogram(writer, &result.direction_stats, "exit(s)")?;

    // 8. Summary
    section(writer, 8, "Issue summary")?;
    let issues = result.issues();
    if issues.is_empty() {
        writeln!(writer, "[OK] no connectivity problems found")?;
    } else {
        writeln!(writer, "[WARNING] found the following problems:")?;
        for (i, issue) in issues.iter().enumerate() {
            writeln!(writer, "  {}. {issue}", i + 1)?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "{RULE}")?;
    Ok(())
}

fn section(writer: &mut dyn Write, number: usize, title: &str) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{number}. {title}")?;
    writeln!(writer, "{THIN_RULE}")?;
    Ok(())
}

fn list_rooms(writer: &mut dyn Write, catalog: &RoomCatalog, rooms: &[RoomId], limit: usize) -> Result<()> {
    for id in rooms.iter().take(limit) {
        writeln!(writer, "  - {} ({id})", catalog.display_name(id.as_str()))?;
    }
    more(writer, rooms.len(), limit)
}

fn more(writer: &mut dyn Write, total: usize, shown: usize) -> Result<()> {
    if total > shown {
        writeln!(writer, "    ... and {} more", total - shown)?;
    }
    Ok(())
}

fn histogram(writer: &mut dyn Write, counts: &Histogram, unit: &str) -> Result<()> {
    for (label, count) in sorted_by_count(counts) {
        writeln!(writer, "{:<20}: {count:3} {unit}", clip(label, 20))?;
    }
    Ok(())
}

/// Truncate to `max` characters (not bytes; room names are often CJK).
fn clip(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

// ============================================================================
// JSON result document
// ============================================================================

/// Serialized artifact of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDocument {
    pub generated_at: DateTime<Utc>,
    pub sources_loaded: usize,
    pub source_failures: Vec<SourceFailure>,
    pub issues: Vec<crate::analysis::Issue>,
    pub analysis: AnalysisResult,
}

impl ResultDocument {
    pub fn new(result: &AnalysisResult, catalog: &RoomCatalog) -> Self {
        Self {
            generated_at: Utc::now(),
            sources_loaded: catalog.sources_loaded(),
            source_failures: catalog.failures().to_vec(),
            issues: result.issues(),
            analysis: result.clone(),
        }
    }
}

/// Write the result document as pretty-printed JSON.
pub fn write_result_json(result: &AnalysisResult, catalog: &RoomCatalog, writer: &mut dyn Write) -> Result<()> {
    let doc = ResultDocument::new(result, catalog);
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_counts_chars() {
        assert_eq!(clip("hello", 3), "hel");
        assert_eq!(clip("天京城正门", 2), "天京");
        assert_eq!(clip("short", 20), "short");
    }

    #[test]
    fn test_more_only_when_truncated() {
        let mut out = Vec::new();
        more(&mut out, 3, 10).unwrap();
        assert!(out.is_empty());
        more(&mut out, 12, 10).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "    ... and 2 more\n");
    }

    #[test]
    fn test_histogram_sorted() {
        let mut h = Histogram::new();
        h.insert("east".into(), 1);
        h.insert("north".into(), 4);
        let mut out = Vec::new();
        histogram(&mut out, &h, "exit(s)").unwrap();
        let text = String::from_utf8(out).unwrap();
        let north = text.find("north").unwrap();
        let east = text.find("east").unwrap();
        assert!(north < east);
        assert!(text.contains("  4 exit(s)"));
    }
}
