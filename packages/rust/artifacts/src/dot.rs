//! Graphviz export of the compatibility graph.
//!
//! Nodes are meeting ids colored by the slot they ended up in. Edges join
//! *compatible* meetings, so each slot shows up as a clique of one color.

use std::io::Write as _;
use std::path::Path;

use tracing::{debug, instrument};

use meetslot_shared::{DEFAULT_PALETTE, Meeting, MeetingId, MeetslotError, Result};

use crate::create_file;

/// Write the DOT graph to `path`.
#[instrument(skip_all, fields(path = %path.display(), slots = slots.len()))]
pub fn write_dot(
    path: &Path,
    slots: &[Vec<&Meeting>],
    edges: impl IntoIterator<Item = (MeetingId, MeetingId)>,
    palette: &[String],
) -> Result<()> {
    let dot = render_dot(slots, edges, palette);

    let mut file = create_file(path)?;
    file.write_all(dot.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| MeetslotError::io(path, e))?;

    debug!(bytes = dot.len(), "graph written");
    Ok(())
}

/// Render the DOT graph. An empty `palette` falls back to [`DEFAULT_PALETTE`].
pub fn render_dot(
    slots: &[Vec<&Meeting>],
    edges: impl IntoIterator<Item = (MeetingId, MeetingId)>,
    palette: &[String],
) -> String {
    let mut dot = String::new();
    dot.push_str("strict graph {\n");
    dot.push_str("  graph [overlap=false outputorder=edgesfirst]\n");
    dot.push_str("  node [fontcolor=black shape=circle fixedsize=true style=filled]\n");

    for (position, slot) in slots.iter().enumerate() {
        let color = slot_color(palette, position);
        for meeting in slot {
            dot.push_str(&format!("  {} [color={color}]\n", meeting.id));
        }
    }

    for (a, b) in edges {
        dot.push_str(&format!("  {a} -- {b}\n"));
    }

    dot.push_str("}\n");
    dot
}

/// Color for the slot at `position`, cycling through the palette.
fn slot_color(palette: &[String], position: usize) -> &str {
    if palette.is_empty() {
        DEFAULT_PALETTE[position % DEFAULT_PALETTE.len()]
    } else {
        &palette[position % palette.len()]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<String> {
        DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn nodes_colored_by_slot_and_edges_listed() {
        let m0 = Meeting::new(0, "A", ["x"]);
        let m1 = Meeting::new(1, "B", ["y"]);
        let m2 = Meeting::new(2, "C", ["x"]);

        let dot = render_dot(
            &[vec![&m1, &m0], vec![&m2]],
            [(MeetingId(0), MeetingId(1)), (MeetingId(1), MeetingId(2))],
            &palette(),
        );

        assert_eq!(
            dot,
            "strict graph {\n\
             \x20 graph [overlap=false outputorder=edgesfirst]\n\
             \x20 node [fontcolor=black shape=circle fixedsize=true style=filled]\n\
             \x20 1 [color=aqua]\n\
             \x20 0 [color=aqua]\n\
             \x20 2 [color=aquamarine]\n\
             \x20 0 -- 1\n\
             \x20 1 -- 2\n\
             }\n"
        );
    }

    #[test]
    fn palette_cycles() {
        let short = vec!["red".to_string(), "blue".to_string()];
        let meetings: Vec<Meeting> = (0..3).map(|i| Meeting::new(i, "m", ["p"])).collect();
        let slots: Vec<Vec<&Meeting>> = meetings.iter().map(|m| vec![m]).collect();

        let dot = render_dot(&slots, [], &short);
        assert!(dot.contains("  0 [color=red]\n"));
        assert!(dot.contains("  1 [color=blue]\n"));
        assert!(dot.contains("  2 [color=red]\n"));
    }

    #[test]
    fn empty_palette_uses_default_colors() {
        let m0 = Meeting::new(0, "A", ["x"]);
        let m1 = Meeting::new(1, "B", ["x"]);

        let dot = render_dot(&[vec![&m0], vec![&m1]], [], &[]);
        assert!(dot.contains("  0 [color=aqua]\n"));
        assert!(dot.contains("  1 [color=aquamarine]\n"));
    }

    #[test]
    fn empty_schedule_renders_bare_graph() {
        let dot = render_dot(&[], [], &palette());
        assert!(dot.starts_with("strict graph {\n"));
        assert!(dot.ends_with("style=filled]\n}\n"));
    }

    #[test]
    fn write_dot_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("slots.dot");
        let m0 = Meeting::new(0, "A", ["x"]);

        write_dot(&path, &[vec![&m0]], [], &palette()).expect("write");
        let written = std::fs::read_to_string(&path).expect("read back");
        assert!(written.contains("  0 [color=aqua]\n"));
    }
}
