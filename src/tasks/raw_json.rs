use std::io::Write;

use serde::de::IgnoredAny;

use crate::errors::AppResult;

const INDENT: &str = "    ";

/// Re-indents a read API payload with four spaces and writes it after a
/// `---` separator.
///
/// Only whitespace between tokens changes: escapes, number spelling and key
/// order are printed exactly as the server sent them.
pub fn write_raw_json<W: Write>(json: &str, out: &mut W) -> AppResult<()> {
    serde_json::from_str::<IgnoredAny>(json)?;
    let indented = indent(json);

    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out, "{indented}")?;
    out.flush()?;
    Ok(())
}

/// Expects well-formed JSON.
fn indent(json: &str) -> String {
    let mut out = String::with_capacity(json.len() * 2);
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    // set after `{` or `[` until we know whether the container is empty
    let mut pending_open = false;

    for c in json.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        if matches!(c, ' ' | '\t' | '\n' | '\r') {
            continue;
        }
        if pending_open && c != '}' && c != ']' {
            pending_open = false;
            depth += 1;
            newline(&mut out, depth);
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '{' | '[' => {
                out.push(c);
                pending_open = true;
            }
            '}' | ']' => {
                if pending_open {
                    pending_open = false;
                } else {
                    depth = depth.saturating_sub(1);
                    newline(&mut out, depth);
                }
                out.push(c);
            }
            ',' => {
                out.push(c);
                newline(&mut out, depth);
            }
            ':' => out.push_str(": "),
            _ => out.push(c),
        }
    }
    out
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
