//! M3U playlist text handling
//!
//! Playlists are handled as raw bytes. Legacy `.m3u` files are often Latin-1
//! rather than UTF-8, and their entries are passed through unchanged.

/// Render playlist entries as M3U file content
///
/// Entries are joined with `\n`. No `#EXTM3U` header and no trailing newline
/// are written, so an empty playlist renders as an empty file.
pub fn render_m3u<T: AsRef<[u8]>>(entries: &[T]) -> Vec<u8> {
    let mut out = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            out.push(b'\n');
        }
        out.extend_from_slice(entry.as_ref());
    }
    out
}

/// Whether a line is dropped as a comment
///
/// Any `#` in the line counts, not only a leading one, so `a#b.mp3` is dropped
/// along with `#EXTINF:...` directives.
pub fn is_comment_line(line: &[u8]) -> bool {
    line.contains(&b'#')
}

/// Extract playlist entries from existing M3U content
///
/// Carriage returns are removed, lines are trimmed, and blank or comment lines
/// are skipped. Entries keep their original order.
pub fn parse_entries(content: &[u8]) -> Vec<Vec<u8>> {
    let content: Vec<u8> = content.iter().copied().filter(|&b| b != b'\r').collect();
    content
        .split(|&b| b == b'\n')
        .map(trim_line)
        .filter(|line| !line.is_empty() && !is_comment_line(line))
        .map(<[u8]>::to_vec)
        .collect()
}

/// Trim ASCII whitespace plus NUL and vertical tab
fn trim_line(line: &[u8]) -> &[u8] {
    let is_blank = |b: &u8| b.is_ascii_whitespace() || matches!(b, b'\0' | b'\x0B');
    let start = line.iter().position(|b| !is_blank(b)).unwrap_or(line.len());
    let end = line.iter().rposition(|b| !is_blank(b)).map_or(start, |i| i + 1);
    &line[start..end]
}
