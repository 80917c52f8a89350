//! Runtime message formatting that never panics
//!
//! Templates use `{}` for the next argument and `{N}` for a positional one,
//! with `{{` and `}}` as escapes. Anything malformed is rendered with a
//! `%!(...)` marker instead of failing the log call.

use std::fmt::{self, Write};

pub const MISSING_MARKER: &str = "%!(MISSING)";
pub const BAD_INDEX_MARKER: &str = "%!(BADINDEX)";
pub const BAD_FORMAT_MARKER: &str = "%!(BADFMT)";

/// Interpolate `args` into `template`.
pub fn safe_format(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut used = vec![false; args.len()];
    let mut next = 0usize;
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            // Stray closing brace
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let Some(close) = tail.find('}') else {
            // Unterminated placeholder, keep the remainder as-is
            out.push_str(tail);
            rest = "";
            break;
        };

        let spec = tail[1..close].trim();
        let index = if spec.is_empty() {
            let idx = next;
            next += 1;
            Some(idx)
        } else {
            spec.parse::<usize>().ok()
        };

        match index {
            Some(idx) if idx < args.len() => {
                used[idx] = true;
                write_arg(&mut out, args[idx]);
            }
            Some(_) if spec.is_empty() => out.push_str(MISSING_MARKER),
            _ => out.push_str(BAD_INDEX_MARKER),
        }
        rest = &tail[close + 1..];
    }
    out.push_str(rest);

    let extra: Vec<String> = args
        .iter()
        .zip(&used)
        .filter(|(_, used)| !**used)
        .map(|(arg, _)| {
            let mut s = String::new();
            write_arg(&mut s, *arg);
            s
        })
        .collect();
    if !extra.is_empty() {
        let _ = write!(out, " %!(EXTRA {})", extra.join(", "));
    }

    out
}

fn write_arg(out: &mut String, arg: &dyn fmt::Display) {
    let mark = out.len();
    if write!(out, "{}", arg).is_err() {
        out.truncate(mark);
        out.push_str(BAD_FORMAT_MARKER);
    }
}
