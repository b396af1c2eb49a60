//! Parser for Maven Surefire `TEST-*.xml` suite reports.
//!
//! Each file describes one suite and carries the counts on its root element:
//!   <testsuite name="com.example.FooTest" tests="4" failures="0"
//!              errors="0" skipped="1" time="0.12">
//!     <testcase name="..." classname="..." time="..."/>
//!   </testsuite>
//!
//! Only the root attributes are read; the `<testcase>` children are not
//! re-counted.

use super::{count_attr, visit_elements, ReportParser};
use crate::error::Result;
use crate::model::TestRunRecord;

pub struct SurefireParser;

impl ReportParser for SurefireParser {
    type Output = TestRunRecord;

    fn parse(&self, input: &[u8]) -> Result<Self::Output> {
        parse(input)
    }
}

/// Parse the counts of a single suite report.
pub fn parse(input: &[u8]) -> Result<TestRunRecord> {
    let mut record = TestRunRecord::default();
    visit_elements(input, |e, depth| {
        if depth == 0 {
            record = TestRunRecord {
                total: count_attr(e, b"tests")?,
                failures: count_attr(e, b"failures")?,
                errors: count_attr(e, b"errors")?,
                skipped: count_attr(e, b"skipped")?,
            };
        }
        Ok(())
    })?;
    Ok(record)
}
