//! Plugin boundary
//!
//! [`SimpleSpecLang`] is the capability a configuration host loads: it
//! resolves the grammar tokens once and exposes encode/decode over open
//! streams, plus the file-backed `get`/`set` entry points, the module
//! contract and the configuration check.
//!
//! ## Logging Ownership
//!
//! Each entry point owns its `log_op_start!`/`log_op_end!` pair. Fatal
//! errors are reported to the diagnostic sink exactly once, by the entry
//! point that hit them.

use crate::atomic::atomic_write;
use crate::decoder::{self, DecodeSummary};
use crate::encoder;
use crate::errors::{missing_path, open_failed, Result};
use simplespec_core::errors::ExError;
use simplespec_core::{log_op_end, log_op_error, log_op_start};
use simplespec_core::{DiagnosticSink, Key, KeySet, Severity, Tokens};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::time::Instant;

pub const CONTRACT_ROOT: &str = "system/elektra/modules/simplespeclang";
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encode/decode capability independent of how a host registers it
pub trait SpecCodec {
    /// Tokens used for every line
    fn tokens(&self) -> &Tokens;

    /// Write enum lines for `ks` relative to `parent`; returns lines written
    ///
    /// Write failures drop the affected line and never abort the traversal.
    fn encode(&self, parent: &Key, ks: &KeySet, writer: &mut dyn Write) -> usize;

    /// Read spec lines into `ks` below `parent`
    fn decode(
        &self,
        reader: &mut dyn BufRead,
        parent: &Key,
        ks: &mut KeySet,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<DecodeSummary>;
}

/// What a `get` call produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetOutcome {
    /// The module contract was appended
    Contract,
    /// The backing file was decoded
    Decoded(DecodeSummary),
}

/// The simple spec language plugin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleSpecLang {
    tokens: Tokens,
}

impl SimpleSpecLang {
    pub fn new(tokens: Tokens) -> Self {
        Self { tokens }
    }

    /// Build the plugin from its configuration set
    pub fn from_config(config: &KeySet) -> Self {
        Self::new(Tokens::resolve(config))
    }

    /// Load from the file named by `parent`'s value
    ///
    /// When `parent` is the contract key the module contract is appended
    /// instead and no file is touched.
    pub fn get<S>(&self, parent: &Key, ks: &mut KeySet, sink: &mut S) -> Result<GetOutcome>
    where
        S: DiagnosticSink,
    {
        if parent.name() == CONTRACT_ROOT {
            ks.extend(Self::contract());
            return Ok(GetOutcome::Contract);
        }

        log_op_start!("get", key = parent.name());
        let start = Instant::now();

        let result = fatal_guard(parent, &mut *sink, || open_for_read(parent))
            .and_then(|mut reader| self.decode(&mut reader, parent, ks, &mut *sink));

        match result {
            Ok(summary) => {
                log_op_end!(
                    "get",
                    duration_ms = start.elapsed().as_millis() as u64,
                    keys = summary.keys as u64
                );
                Ok(GetOutcome::Decoded(summary))
            }
            Err(err) => {
                log_op_error!(
                    "get",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }

    /// Persist `ks` to the file named by `parent`'s value
    ///
    /// Returns the number of enum lines written.
    pub fn set<S>(&self, parent: &Key, ks: &KeySet, sink: &mut S) -> Result<usize>
    where
        S: DiagnosticSink,
    {
        log_op_start!("set", key = parent.name());
        let start = Instant::now();

        let mut buffer = Vec::new();
        let lines = self.encode(parent, ks, &mut buffer);
        let result = fatal_guard(parent, sink, || {
            let path = target_path(parent)?;
            atomic_write(path, &buffer).map_err(|e| open_failed(parent, path, e))
        })
        .map(|()| lines);

        match result {
            Ok(lines) => {
                log_op_end!(
                    "set",
                    duration_ms = start.elapsed().as_millis() as u64,
                    lines = lines as u64
                );
                Ok(lines)
            }
            Err(err) => {
                log_op_error!(
                    "set",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }

    /// The module contract describing this plugin to a host
    pub fn contract() -> KeySet {
        let entry = |suffix: &str, value: &str| {
            Key::with_value(&format!("{}/{}", CONTRACT_ROOT, suffix), value)
        };

        vec![
            Key::with_value(CONTRACT_ROOT, "simplespeclang plugin waits for your orders"),
            Key::new(&format!("{}/exports", CONTRACT_ROOT)),
            entry("exports/get", "get"),
            entry("exports/set", "set"),
            entry("exports/checkconf", "checkconf"),
            entry("infos/author", "SimpleSpec maintainers"),
            entry("infos/licence", "BSD"),
            entry(
                "infos/description",
                "Reads and writes enum constraints and mount directives in a simple spec language",
            ),
            entry("infos/provides", "storage"),
            entry("infos/placements", "getstorage setstorage"),
            entry("infos/status", "maintained nodep"),
            entry("infos/version", PLUGIN_VERSION),
        ]
        .into_iter()
        .collect()
    }

    /// Validate a plugin configuration set
    pub fn check_config(config: &KeySet) -> Result<()> {
        Tokens::resolve(config).validate().map_err(ExError::from)
    }
}

impl SpecCodec for SimpleSpecLang {
    fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    fn encode(&self, parent: &Key, ks: &KeySet, writer: &mut dyn Write) -> usize {
        log_op_start!("encode", key = parent.name());
        let start = Instant::now();

        let lines = encoder::encode(writer, parent, ks, &self.tokens);

        log_op_end!(
            "encode",
            duration_ms = start.elapsed().as_millis() as u64,
            lines = lines as u64
        );
        lines
    }

    fn decode(
        &self,
        reader: &mut dyn BufRead,
        parent: &Key,
        ks: &mut KeySet,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<DecodeSummary> {
        log_op_start!("decode", key = parent.name());
        let start = Instant::now();

        match decoder::decode(reader, parent, ks, &self.tokens, &mut *sink) {
            Ok(summary) => {
                log_op_end!(
                    "decode",
                    duration_ms = start.elapsed().as_millis() as u64,
                    keys = summary.keys as u64,
                    errors = summary.errors as u64,
                    skipped = summary.skipped as u64
                );
                Ok(summary)
            }
            Err(err) => {
                sink.report(Severity::Error, parent, err.clone());
                log_op_error!(
                    "decode",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }
}

/// Run `op`, reporting a failure to `sink` before returning it
fn fatal_guard<T, S, F>(parent: &Key, sink: &mut S, op: F) -> Result<T>
where
    S: DiagnosticSink + ?Sized,
    F: FnOnce() -> Result<T>,
{
    op().map_err(|err| {
        sink.report(Severity::Error, parent, err.clone());
        err
    })
}

fn target_path(parent: &Key) -> Result<&Path> {
    parent
        .value()
        .filter(|v| !v.is_empty())
        .map(Path::new)
        .ok_or_else(|| missing_path(parent))
}

fn open_for_read(parent: &Key) -> Result<BufReader<File>> {
    let path = target_path(parent)?;
    let file = File::open(path).map_err(|e| open_failed(parent, path, e))?;
    Ok(BufReader::new(file))
}
