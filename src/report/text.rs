use std::fmt::Write;

use crate::report::DiagramSnapshot;

const TOP_PILEUPS_SHOWN: usize = 10;

pub fn render_summary_text(snap: &DiagramSnapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} v{}", snap.tool, snap.tool_version);
    let _ = writeln!(
        out,
        "sequence length: {}  x domain: {}  y domain: {}",
        snap.sequence_length, snap.x_axis.domain_max, snap.y_axis.domain_max
    );
    let _ = writeln!(
        out,
        "mutations: {} visible / {} total{}",
        snap.visible_mutation_count,
        snap.total_mutation_count,
        if snap.filtered { " (filtered)" } else { "" }
    );
    let _ = writeln!(out, "pileups: {}", snap.pileups.len());

    if !snap.highlighted_locations.is_empty() {
        let locations: Vec<String> = snap
            .highlighted_locations
            .iter()
            .map(|l| l.to_string())
            .collect();
        let _ = writeln!(out, "highlighted: {}", locations.join(", "));
    }

    if !snap.pileups.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{:>8}  {:>5}  {:<5}  label", "pos", "count", "shown");
        for p in snap.pileups.iter().take(TOP_PILEUPS_SHOWN) {
            let _ = writeln!(
                out,
                "{:>8}  {:>5}  {:<5}  {}",
                p.location,
                p.count,
                if p.labeled { "yes" } else { "no" },
                p.label
            );
        }
        if snap.pileups.len() > TOP_PILEUPS_SHOWN {
            let _ = writeln!(out, "... {} more", snap.pileups.len() - TOP_PILEUPS_SHOWN);
        }
    }

    out
}
