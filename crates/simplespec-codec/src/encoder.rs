//! Encoder: tree → spec text
//!
//! Emits one line per key carrying an enum constraint:
//!
//! ```text
//! <enumKeyword> <relativeName> <assignOp> <value> <value> ...
//! ```
//!
//! The trailing values are a dump of the key's metadata ordered by name, so
//! array elements come out in index order however they were set. Array
//! length markers and the `required`/`mandatory` flags are skipped: the
//! decoder re-derives them on load.
//!
//! A failed write drops that line with a warning trace; traversal always
//! runs to the end.

use simplespec_core::{Key, KeySet, MetaEntry, Tokens};
use simplespec_core_types::schema::{META_CHECK_ENUM, META_MANDATORY, META_REQUIRED};
use std::io::Write;

/// Flags the decoder adds to every enum key
const SYNTHESIZED_FLAGS: [&str; 2] = [META_REQUIRED, META_MANDATORY];

/// Relative name written for a key equal to the parent
pub const SELF_NAME: &str = ".";

/// Encode every enum-constrained key of `ks` relative to `parent`
///
/// Returns the number of lines the writer accepted.
pub fn encode<W: Write + ?Sized>(
    writer: &mut W,
    parent: &Key,
    ks: &KeySet,
    tokens: &Tokens,
) -> usize {
    let mut lines = 0;

    for key in ks.iter().filter(|k| has_enum(k)) {
        let line = encode_line(key, parent, tokens);
        tracing::trace!(key = key.name(), line = %line, "encoding enum key");
        match writeln!(writer, "{}", line) {
            Ok(()) => lines += 1,
            Err(err) => {
                tracing::warn!(key = key.name(), error = %err, "write failed, line dropped")
            }
        }
    }

    lines
}

/// Render the spec line for a single key
pub fn encode_line(key: &Key, parent: &Key, tokens: &Tokens) -> String {
    let relative = match key.relative_name(parent) {
        "" => SELF_NAME,
        name => name,
    };

    let mut line = format!(
        "{} {} {}",
        tokens.enum_keyword, relative, tokens.assign_operator
    );
    for value in dump_values(key) {
        line.push(' ');
        line.push_str(value);
    }
    line
}

/// Check whether `key` carries an enum constraint
pub fn has_enum(key: &Key) -> bool {
    key.meta(META_CHECK_ENUM).is_some() || key.metadata().has_array(META_CHECK_ENUM)
}

fn dump_values(key: &Key) -> Vec<&str> {
    let meta = key.metadata();
    let mut entries: Vec<&MetaEntry> = meta
        .iter()
        .filter(|e| !meta.is_array_header(e))
        .filter(|e| !SYNTHESIZED_FLAGS.contains(&e.name.as_str()))
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries.into_iter().map(|e| e.value.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use simplespec_core::model::metadata::array_index;

    fn enum_key(name: &str, values: &[&str]) -> Key {
        let mut key = Key::new(name);
        for value in values {
            key.metadata_mut().array_append(META_CHECK_ENUM, *value);
        }
        key.metadata_mut().finalize_array(META_CHECK_ENUM);
        key
    }

    fn encode_to_string(parent: &Key, ks: &KeySet, tokens: &Tokens) -> String {
        let mut out = Vec::new();
        encode(&mut out, parent, ks, tokens);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_encode_single_enum_key() {
        let parent = Key::new("user/tests/spec");
        let ks: KeySet = vec![enum_key("user/tests/spec/a/b", &["x", "y"])]
            .into_iter()
            .collect();

        let text = encode_to_string(&parent, &ks, &Tokens::default());
        assert_eq!(text, "enum a/b = x y\n");
    }

    #[test]
    fn test_keys_without_enum_are_skipped() {
        let parent = Key::new("user/tests/spec");
        let mut plain = Key::new("user/tests/spec/plain");
        plain.set_meta("description", "nothing to see");
        let ks: KeySet = vec![plain, enum_key("user/tests/spec/c", &["on", "off"])]
            .into_iter()
            .collect();

        let text = encode_to_string(&parent, &ks, &Tokens::default());
        assert_eq!(text, "enum c = on off\n");
    }

    #[test]
    fn test_full_metadata_dump_in_name_order() {
        let parent = Key::new("user/tests/spec");
        let mut key = Key::new("user/tests/spec/level");
        key.set_meta("description", "verbosity");
        key.metadata_mut().array_append(META_CHECK_ENUM, "low");
        key.metadata_mut().array_append(META_CHECK_ENUM, "high");
        key.metadata_mut().finalize_array(META_CHECK_ENUM);
        key.set_meta(META_REQUIRED, "yes");
        key.set_meta(META_MANDATORY, "yes");

        let line = encode_line(&key, &parent, &Tokens::default());
        assert_eq!(line, "enum level = low high verbosity");
    }

    #[test]
    fn test_elements_set_out_of_order_keep_index_order() {
        let parent = Key::new("user/tests/spec");
        let mut key = Key::new("user/tests/spec/a");
        key.set_meta("check/enum/#1", "y");
        key.set_meta("check/enum/#0", "x");
        key.set_meta(META_CHECK_ENUM, "#1");
        let ks: KeySet = vec![key].into_iter().collect();

        assert_eq!(
            encode_to_string(&parent, &ks, &Tokens::default()),
            "enum a = x y\n"
        );
    }

    #[test]
    fn test_index_order_past_ten_elements() {
        let parent = Key::new("user");
        let mut key = Key::new("user/n");
        for i in (0..12).rev() {
            key.set_meta(format!("check/enum/{}", array_index(i)), i.to_string());
        }

        let line = encode_line(&key, &parent, &Tokens::default());
        assert_eq!(line, "enum n = 0 1 2 3 4 5 6 7 8 9 10 11");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_does_not_abort_traversal() {
        let parent = Key::new("user");
        let ks: KeySet = vec![enum_key("user/a", &["1"]), enum_key("user/b", &["2"])]
            .into_iter()
            .collect();

        let lines = encode(&mut FailingWriter, &parent, &ks, &Tokens::default());
        assert_eq!(lines, 0);
    }

    #[test]
    fn test_scalar_enum_metadata_is_dumped() {
        let parent = Key::new("user");
        let mut key = Key::new("user/mode");
        key.set_meta(META_CHECK_ENUM, "'a', 'b'");

        assert!(has_enum(&key));
        assert_eq!(
            encode_line(&key, &parent, &Tokens::default()),
            "enum mode = 'a', 'b'"
        );
    }

    #[test]
    fn test_custom_tokens() {
        let parent = Key::new("user/tests/spec");
        let key = enum_key("user/tests/spec/a", &["x"]);
        let tokens = Tokens::default()
            .with_enum_keyword("rule")
            .with_assign_operator(":=");

        assert_eq!(encode_line(&key, &parent, &tokens), "rule a := x");
    }

    #[test]
    fn test_parent_itself_and_outside_keys() {
        let parent = Key::new("user/tests/spec");
        let itself = enum_key("user/tests/spec", &["x"]);
        let outside = enum_key("system/other", &["y"]);

        assert_eq!(
            encode_line(&itself, &parent, &Tokens::default()),
            "enum . = x"
        );
        assert_eq!(
            encode_line(&outside, &parent, &Tokens::default()),
            "enum system/other = y"
        );
    }

    #[test]
    fn test_line_count() {
        let parent = Key::new("user");
        let ks: KeySet = vec![
            enum_key("user/a", &["1"]),
            Key::new("user/b"),
            enum_key("user/c", &["2"]),
        ]
        .into_iter()
        .collect();

        let mut out = Vec::new();
        let lines = encode(&mut out, &parent, &ks, &Tokens::default());
        assert_eq!(lines, 2);
    }

    #[test]
    fn test_empty_tree_writes_nothing() {
        let text = encode_to_string(&Key::new("user"), &KeySet::new(), &Tokens::default());
        assert!(text.is_empty());
    }
}
