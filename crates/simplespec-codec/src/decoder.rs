//! Decoder: spec text → tree
//!
//! Each line is classified by its first whitespace-delimited token:
//!
//! - `mountpoint <path>` sets `mountpoint` on the directive node
//! - `plugins <name>*` sets `infos/plugins` on the directive node
//! - `<enumKeyword> <name> <assignOp> <value>*` creates an enum key
//! - anything else is skipped
//!
//! A wrong assignment token is reported to the diagnostic sink as an error
//! and the line is dropped; decoding continues. A `mountpoint` line without
//! a path is dropped with a warning. The directive node, named after the decode
//! target, is appended once after the last line.

use crate::errors::{mountpoint_without_path, read_failed, unexpected_assignment, Result};
use simplespec_core::{DiagnosticSink, Key, KeySet, Severity, Tokens};
use simplespec_core_types::schema::{
    META_CHECK_ENUM, META_INFOS_PLUGINS, META_MANDATORY, META_MOUNTPOINT, META_REQUIRED,
};
use std::io::BufRead;

pub const MOUNTPOINT_KEYWORD: &str = "mountpoint";
pub const PLUGINS_KEYWORD: &str = "plugins";

/// Counters describing one decode call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeSummary {
    /// Lines read
    pub lines: usize,
    /// Enum keys created
    pub keys: usize,
    /// Directive lines applied to the directive node
    pub directives: usize,
    /// Lines skipped as unrecognized
    pub skipped: usize,
    /// Lines rejected with a parse error
    pub errors: usize,
}

/// Decode spec text from `reader` into `ks`
///
/// Keys are created below `parent`; parse errors are reported against
/// `parent`. Only a failing read aborts the call.
pub fn decode<R, S>(
    reader: &mut R,
    parent: &Key,
    ks: &mut KeySet,
    tokens: &Tokens,
    sink: &mut S,
) -> Result<DecodeSummary>
where
    R: BufRead + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let mut summary = DecodeSummary::default();
    let mut directive = Key::new(parent.name());
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| read_failed(parent, summary.lines + 1, e))?;
        if read == 0 {
            break;
        }
        summary.lines += 1;

        let line = String::from_utf8_lossy(&buf);
        let mut words = line.split_whitespace();
        let line_no = summary.lines;

        match words.next() {
            Some(MOUNTPOINT_KEYWORD) => match words.next() {
                Some(path) => {
                    directive.set_meta(META_MOUNTPOINT, path);
                    summary.directives += 1;
                }
                None => {
                    tracing::debug!(line = line_no, "mountpoint without path, skipping");
                    sink.report(
                        Severity::Warning,
                        parent,
                        mountpoint_without_path(parent, line_no),
                    );
                    summary.skipped += 1;
                }
            },
            Some(PLUGINS_KEYWORD) => {
                let plugins: String = words.map(|w| format!("{} ", w)).collect();
                directive.set_meta(META_INFOS_PLUGINS, plugins);
                summary.directives += 1;
            }
            Some(first) if first == tokens.enum_keyword => {
                let name = words.next();
                let assign = words.next();
                match (name, assign) {
                    (Some(name), Some(op)) if op == tokens.assign_operator => {
                        let key = enum_key(parent, name, words);
                        tracing::debug!(
                            line = line_no,
                            key = key.name(),
                            "decoded enum key"
                        );
                        if key.name() == directive.name() {
                            merge_metadata(&mut directive, &key);
                        } else {
                            ks.append(key);
                        }
                        summary.keys += 1;
                    }
                    (_, found) => {
                        let err = unexpected_assignment(
                            parent,
                            line_no,
                            &tokens.assign_operator,
                            found.unwrap_or_default(),
                        );
                        tracing::debug!(line = line_no, error = %err, "rejected enum line");
                        sink.report(Severity::Error, parent, err);
                        summary.errors += 1;
                    }
                }
            }
            Some(first) => {
                tracing::trace!(line = line_no, token = first, "not an enum, skipping");
                summary.skipped += 1;
            }
            None => {
                summary.skipped += 1;
            }
        }
    }

    ks.append(directive);

    Ok(summary)
}

fn enum_key<'a>(parent: &Key, name: &str, values: impl Iterator<Item = &'a str>) -> Key {
    let mut key = Key::new(parent.name());
    key.add_name(name);

    let mut appended = 0;
    for value in values {
        key.metadata_mut().array_append(META_CHECK_ENUM, value);
        appended += 1;
    }
    if appended > 0 {
        key.metadata_mut().finalize_array(META_CHECK_ENUM);
    }

    key.set_meta(META_REQUIRED, "yes");
    key.set_meta(META_MANDATORY, "yes");
    key
}

fn merge_metadata(target: &mut Key, source: &Key) {
    for entry in source.metadata().iter() {
        target.set_meta(entry.name.clone(), entry.value.clone());
    }
}
