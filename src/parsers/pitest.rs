//! Parser for PIT (pitest) `mutations.xml` reports.
//!
//!   <mutations partial="false">
//!     <mutation detected='true' status='KILLED' numberOfTestsRun='2'>
//!       <sourceFile>Foo.java</sourceFile>
//!       <mutatedClass>com.example.Foo</mutatedClass>
//!       ...
//!     </mutation>
//!     <mutation detected='false' status='SURVIVED' numberOfTestsRun='1'>...</mutation>
//!   </mutations>
//!
//! Statuses other than `KILLED` (SURVIVED, NO_COVERAGE, TIMED_OUT, ...) all
//! count as not killed.

use super::{get_attr, visit_elements, ReportParser};
use crate::error::Result;
use crate::model::MutationRecord;

const KILLED: &str = "KILLED";

pub struct PitestParser;

impl ReportParser for PitestParser {
    type Output = MutationRecord;

    fn parse(&self, input: &[u8]) -> Result<Self::Output> {
        parse(input)
    }
}

pub fn parse(input: &[u8]) -> Result<MutationRecord> {
    let mut record = MutationRecord {
        total_mutants: 0,
        killed_mutants: 0,
    };
    visit_elements(input, |e, _| {
        if e.name().as_ref() == b"mutation" {
            record.total_mutants += 1;
            if get_attr(e, b"status").as_deref() == Some(KILLED) {
                record.killed_mutants += 1;
            }
        }
        Ok(())
    })?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pitest() {
        let input = include_bytes!("../../tests/fixtures/mutations.xml");
        let record = parse(input).unwrap();
        assert_eq!(record.total_mutants, 4);
        assert_eq!(record.killed_mutants, 3);
        assert_eq!(record.percentage(), 75.0);
    }

    #[test]
    fn test_parse_pitest_no_mutations() {
        let record = parse(br#"<?xml version="1.0"?><mutations partial="false"/>"#).unwrap();
        assert_eq!(record.total_mutants, 0);
        assert_eq!(record.percentage(), 0.0);
    }

    #[test]
    fn test_parse_pitest_status_is_case_sensitive() {
        let record = parse(b"<mutations><mutation status='killed'/></mutations>").unwrap();
        assert_eq!(record.total_mutants, 1);
        assert_eq!(record.killed_mutants, 0);
    }

    #[test]
    fn test_parse_pitest_malformed() {
        assert!(parse(b"<mutations><mutation status='KILLED'>").is_err());
    }
}
