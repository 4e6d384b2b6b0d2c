//! Renders a `(student_name, text)` pair onto a fixed-size SVG card for
//! display or sharing.

pub const CARD_WIDTH: u32 = 640;
pub const CARD_HEIGHT: u32 = 360;

const BODY_WRAP_CHARS: usize = 42;
const BODY_MAX_LINES: usize = 6;

pub fn render_card(student_name: &str, text: &str) -> String {
    let (mut lines, truncated) = wrap_lines(text, BODY_WRAP_CHARS, BODY_MAX_LINES);
    if truncated && let Some(last) = lines.last_mut() {
        last.push('…');
    }

    let mut svg = String::with_capacity(1024);
    svg.push_str(&format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" viewBox="0 0 {CARD_WIDTH} {CARD_HEIGHT}">"##
    ));
    svg.push_str(&format!(
        r##"<rect width="{CARD_WIDTH}" height="{CARD_HEIGHT}" rx="16" fill="#1f2937"/>"##
    ));
    svg.push_str(&format!(
        r##"<text x="40" y="64" font-family="sans-serif" font-size="28" font-weight="bold" fill="#f9fafb">{}</text>"##,
        escape_xml(student_name)
    ));
    svg.push_str(r##"<line x1="40" y1="84" x2="600" y2="84" stroke="#4b5563" stroke-width="2"/>"##);
    for (i, line) in lines.iter().enumerate() {
        let y = 128 + i as u32 * 36;
        svg.push_str(&format!(
            r##"<text x="40" y="{y}" font-family="sans-serif" font-size="22" fill="#e5e7eb">{}</text>"##,
            escape_xml(line)
        ));
    }
    svg.push_str("</svg>");
    svg
}

/// Greedy word wrap by character count; words longer than a line are
/// hard-broken. Returns at most `max_lines` lines plus a truncation flag.
fn wrap_lines(text: &str, max_chars: usize, max_lines: usize) -> (Vec<String>, bool) {
    let mut pieces: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() <= max_chars {
            pieces.push(word.to_string());
        } else {
            for chunk in chars.chunks(max_chars) {
                pieces.push(chunk.iter().collect());
            }
        }
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for piece in pieces {
        let piece_len = piece.chars().count();
        if current_len == 0 {
            current = piece;
            current_len = piece_len;
        } else if current_len + 1 + piece_len <= max_chars {
            current.push(' ');
            current.push_str(&piece);
            current_len += 1 + piece_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current = piece;
            current_len = piece_len;
        }
    }
    if current_len > 0 {
        lines.push(current);
    }

    let truncated = lines.len() > max_lines;
    lines.truncate(max_lines);
    (lines, truncated)
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
