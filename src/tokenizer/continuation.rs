//! Backslash line continuation.

/// A line is continued when it ends in a single backslash; `\\` is an
/// escaped backslash and ends the line normally.
pub fn ends_with_continuation(line: &str) -> bool {
    line.ends_with('\\') && !line.ends_with("\\\\")
}

/// Joins the logical line that starts at `start`.
///
/// `first` is the already comment-stripped text of `lines[start]`. Each
/// continued line loses its trailing backslash and the next line is appended
/// with its leading whitespace removed. Returns the joined line and the index
/// of the last physical line consumed.
///
/// If the input ends while a continuation is still open, whatever was joined
/// so far is returned.
#[tracing::instrument(level = "debug", skip(lines))]
pub fn read_continued_line(lines: &[String], start: usize, first: &str) -> (String, usize) {
    let mut joined = String::new();
    let mut position = start;
    let mut work = first.trim().to_string();

    while ends_with_continuation(&work) {
        joined.push_str(work.trim_start());
        joined.pop();
        joined = joined.trim_start().to_string();

        if position + 1 >= lines.len() {
            tracing::warn!(start, "input ended inside a continued line");
            return (joined, position);
        }
        position += 1;
        work = lines[position].trim().to_string();
    }

    joined.push_str(work.trim_start());
    (joined, position)
}
