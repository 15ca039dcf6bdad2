// ui.rs - HTML for the board page and the fragments htmx swaps in
//
// Each cell polls for itself: it posts its own state plus its neighbors'
// states on load, and the response replaces it, which loads it again.

use conway::{Board, PATTERNS, Pattern, Position, neighbor_positions};

use crate::pace::{MAX_PACE_MS, MIN_PACE_MS};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

const STYLE: &str = r#"
body { font-family: sans-serif; background: #202020; color: #ddd; margin: 2rem; }
#board { display: grid; gap: 1px; background: #000; width: max-content; }
.cell { width: 20px; height: 20px; background: #282828; }
.cell.alive { background: #00c800; }
#controls { margin: 1rem 0; display: flex; gap: 0.5rem; align-items: center; }
#speed-error { color: #e05050; min-height: 1.2em; }
nav a { color: #8cf; margin-right: 0.75rem; }
"#;

// Neighbor lookup run in the browser. Each cell lists its neighbor ids,
// with an empty slot for every off-board neighbor; those go out as "" and
// the server drops them before counting.
const SCRIPT: &str = r#"
function cellState(id) {
  const el = id ? document.getElementById(id) : null;
  return el ? el.dataset.alive : "";
}
function neighborStates(id) {
  const el = document.getElementById(id);
  return el ? el.dataset.neighbors.split(",").map(cellState) : [];
}
"#;

fn cell_id(pos: Position) -> String {
    format!("cell-{}-{}", pos.x, pos.y)
}

/// One cell on a `size`x`size` board. `alive` is the state the cell will
/// report on its next request.
pub fn render_cell(pos: Position, alive: bool, size: u32) -> String {
    let Position { x, y } = pos;
    let id = cell_id(pos);
    let neighbors: Vec<String> = neighbor_positions(pos, size)
        .iter()
        .map(|n| n.map(cell_id).unwrap_or_default())
        .collect();
    format!(
        concat!(
            r#"<div id="{id}" class="cell{class}" data-alive="{token}" data-neighbors="{neighbors}" "#,
            r#"hx-post="/cell/{x}/{y}" hx-trigger="load" hx-swap="outerHTML" "#,
            r#"hx-vals='js:{{state: cellState("{id}"), neighbors: neighborStates("{id}")}}'></div>"#,
        ),
        id = id,
        x = x,
        y = y,
        class = if alive { " alive" } else { "" },
        token = if alive { "1" } else { "0" },
        neighbors = neighbors.join(","),
    )
}

/// Pace form; the 400 body lands in `#speed-error` next to it.
pub fn render_controls(pace_ms: u64) -> String {
    format!(
        concat!(
            r#"<form id="controls" hx-post="/speed" hx-swap="outerHTML" "#,
            r#"hx-on::before-request="document.getElementById('speed-error').textContent = ''" "#,
            r#"hx-on::response-error="document.getElementById('speed-error').textContent = event.detail.xhr.responseText">"#,
            r#"<label for="speed">Pace (ms)</label>"#,
            r#"<input id="speed" name="speed" type="number" min="{min}" max="{max}" step="50" value="{pace}">"#,
            r#"<button type="submit">Set</button>"#,
            r#"<span class="current">Current: {pace}ms</span>"#,
            r#"</form>"#,
        ),
        min = MIN_PACE_MS,
        max = MAX_PACE_MS,
        pace = pace_ms,
    )
}

pub fn render_board(board: &Board, pattern: Option<&Pattern>, pace_ms: u64) -> String {
    let title = match pattern {
        Some(p) => format!("Game of Life: {}", escape_html(p.name)),
        None    => "Game of Life".to_string(),
    };

    let mut html = String::with_capacity(512 * (board.size() * board.size()) as usize);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str(&format!("<script src=\"{HTMX_SRC}\"></script>\n"));
    html.push_str(&format!("<style>{STYLE}</style>\n"));
    html.push_str(&format!("<script>{SCRIPT}</script>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));
    html.push_str(&render_nav());
    html.push_str(&render_controls(pace_ms));
    html.push_str("\n<div id=\"speed-error\"></div>\n");
    html.push_str(&format!(
        "<p class=\"stats\">Live cells at start: {} of {}</p>\n",
        board.live_cells(),
        board.size() * board.size()
    ));

    html.push_str(&format!(
        "<div id=\"board\" style=\"grid-template-columns: repeat({}, 20px)\">\n",
        board.size()
    ));
    for (pos, cell) in board.iter_cells() {
        html.push_str(&render_cell(pos, cell.is_alive(), board.size()));
        html.push('\n');
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_nav() -> String {
    let mut html = String::from("<nav><a href=\"/\">Random</a>");
    for pattern in PATTERNS {
        html.push_str(&format!(
            "<a href=\"/?pattern={}\">{}</a>",
            escape_html(&pattern.name.to_ascii_lowercase()),
            escape_html(pattern.name)
        ));
    }
    html.push_str("</nav>\n");
    html
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
