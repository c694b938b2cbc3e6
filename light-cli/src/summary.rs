//! Plain-text rendering of an interning report.

use light_dom::InterningReport;
use std::fmt::Write;

/// Format the report the way `light stats` prints it
pub fn format_report(report: &InterningReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Lines:                        {}", report.lines);
    let _ = writeln!(out, "Child elements in root:       {}", report.root_children);
    let _ = writeln!(out, "Unique descriptors (interned): {}", report.interned_descriptors);
    let _ = writeln!(out, "Descriptors (fresh):          {}", report.fresh_descriptors);
    let _ = writeln!(out, "Descriptors saved:            {}", report.saved());
    let _ = writeln!(
        out,
        "Outputs identical:            {}",
        if report.outputs_match { "yes" } else { "no" }
    );
    let _ = writeln!(out, "Tags:                         {}", report.tags.join(", "));
    out
}
