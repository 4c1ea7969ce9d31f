//! Line splitting that remembers each line's terminator, so a file can be
//! rebuilt byte-for-byte with only selected line bodies replaced.

/// One line of a text file: its body and the terminator that followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub body: &'a str,
    /// `"\n"`, `"\r\n"` or `""` for an unterminated last line
    pub ending: &'a str,
}

/// Split `content` into lines without losing any bytes.
pub fn split_lines(content: &str) -> Vec<Line<'_>> {
    content
        .split_inclusive('\n')
        .map(|raw| {
            if let Some(body) = raw.strip_suffix("\r\n") {
                Line {
                    body,
                    ending: "\r\n",
                }
            } else if let Some(body) = raw.strip_suffix('\n') {
                Line { body, ending: "\n" }
            } else {
                Line {
                    body: raw,
                    ending: "",
                }
            }
        })
        .collect()
}

/// Rebuild the text, swapping in new bodies for the given line indices.
///
/// Replaced lines keep their original terminator.
pub fn join_with_replacements(lines: &[Line<'_>], replacements: &[(usize, String)]) -> String {
    let mut out = String::new();
    for (index, line) in lines.iter().enumerate() {
        match replacements.iter().find(|(i, _)| *i == index) {
            Some((_, body)) => out.push_str(body),
            None => out.push_str(line.body),
        }
        out.push_str(line.ending);
    }
    out
}
