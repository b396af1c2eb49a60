pub mod jacoco;
pub mod pitest;
pub mod spotbugs;
pub mod surefire;

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{QasumError, Result};

/// Every report parser implements this trait.
pub trait ReportParser {
    /// The record a single report reduces to.
    type Output;

    /// Parse the input bytes into a metric record.
    fn parse(&self, input: &[u8]) -> Result<Self::Output>;

    /// Read a report from disk and parse it.
    fn parse_file(&self, path: &Path) -> Result<Self::Output> {
        let content = std::fs::read(path)?;
        self.parse(&content)
    }
}

/// Walk every element of an XML document in document order, calling `visit`
/// with the element and its depth (0 for the root).
///
/// Besides reader errors, a document with no root element or with elements
/// still open at end of input is rejected. The reader alone would accept both.
pub(crate) fn visit_elements<F>(input: &[u8], mut visit: F) -> Result<()>
where
    F: FnMut(&BytesStart<'_>, usize) -> Result<()>,
{
    let mut reader = Reader::from_reader(input);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut depth: usize = 0;
    let mut seen_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Err(e) => return Err(xml_err(e, &reader)),
            Ok(Event::Eof) => break,
            Ok(Event::Start(ref e)) => {
                seen_root = true;
                visit(e, depth)?;
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => {
                seen_root = true;
                visit(e, depth)?;
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(QasumError::Malformed("document has no root element".into()));
    }
    if depth != 0 {
        return Err(QasumError::Malformed(format!(
            "unexpected end of document with {depth} unclosed element(s)"
        )));
    }
    Ok(())
}

fn xml_err(source: quick_xml::Error, reader: &Reader<&[u8]>) -> QasumError {
    QasumError::Xml {
        source,
        position: reader.buffer_position(),
    }
}

/// Look up an attribute by name and return its unescaped value.
pub(crate) fn get_attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

/// Read a non-negative integer attribute, defaulting to 0 when absent.
pub(crate) fn count_attr(e: &BytesStart<'_>, key: &[u8]) -> Result<u64> {
    match get_attr(e, key) {
        None => Ok(0),
        Some(value) => value.trim().parse().map_err(|_| {
            QasumError::Malformed(format!(
                "attribute '{}' is not a count: {:?}",
                String::from_utf8_lossy(key),
                value
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element_names(input: &[u8]) -> Result<Vec<(String, usize)>> {
        let mut names = Vec::new();
        visit_elements(input, |e, depth| {
            names.push((String::from_utf8_lossy(e.name().as_ref()).into_owned(), depth));
            Ok(())
        })?;
        Ok(names)
    }

    #[test]
    fn test_visit_elements_depths() {
        let names = element_names(b"<a><b><c/></b><d/></a>").unwrap();
        assert_eq!(
            names,
            vec![
                ("a".to_string(), 0),
                ("b".to_string(), 1),
                ("c".to_string(), 2),
                ("d".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_visit_elements_rejects_non_xml() {
        let err = element_names(b"this is not xml").unwrap_err();
        assert!(matches!(err, QasumError::Malformed(_)), "{err}");
    }

    #[test]
    fn test_visit_elements_rejects_truncated() {
        assert!(element_names(b"<a><b/>").is_err());
    }

    #[test]
    fn test_visit_elements_rejects_mismatched_end() {
        let err = element_names(b"<a><b></a>").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("position"), "Error should contain position info: {msg}");
    }

    #[test]
    fn test_count_attr() {
        let mut seen = Vec::new();
        visit_elements(br#"<x tests="12" bad="abc"/>"#, |e, _| {
            seen.push(count_attr(e, b"tests").unwrap());
            seen.push(count_attr(e, b"missing").unwrap());
            assert!(count_attr(e, b"bad").is_err());
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, vec![12, 0]);
    }
}
