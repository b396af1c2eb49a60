//! Parser for JaCoCo XML coverage reports.
//!
//! JaCoCo XML structure:
//!   <report name="...">
//!     <sessioninfo id="..." start="..." dump="..."/>
//!     <package name="com/example">
//!       <class name="com/example/Foo" sourcefilename="Foo.java">
//!         <method name="doStuff" desc="()V" line="10">
//!           <counter type="LINE" missed="0" covered="3"/>
//!         </method>
//!         <counter type="LINE" missed="1" covered="5"/>
//!       </class>
//!       <counter type="LINE" missed="1" covered="5"/>
//!     </package>
//!     <counter type="INSTRUCTION" missed="2" covered="10"/>
//!     <counter type="LINE" missed="1" covered="5"/>
//!   </report>
//!
//! Counters repeat at every level. The coverage figure is the first `LINE`
//! counter in document order, wherever it sits; later counters are ignored.

use super::{count_attr, get_attr, visit_elements, ReportParser};
use crate::error::{QasumError, Result};
use crate::model::CoverageRecord;

/// JaCoCo XML format parser.
pub struct JacocoParser;

impl ReportParser for JacocoParser {
    /// `None` when the report holds no `LINE` counter at all.
    type Output = Option<CoverageRecord>;

    fn parse(&self, input: &[u8]) -> Result<Self::Output> {
        parse(input)
    }
}

/// Parse the line coverage of a JaCoCo report.
pub fn parse(input: &[u8]) -> Result<Option<CoverageRecord>> {
    let mut first: Option<CoverageRecord> = None;

    visit_elements(input, |e, _depth| {
        if first.is_some() || e.name().as_ref() != b"counter" {
            return Ok(());
        }
        if get_attr(e, b"type").as_deref() != Some("LINE") {
            return Ok(());
        }
        let covered_lines = count_attr(e, b"covered")?;
        let missed_lines = count_attr(e, b"missed")?;
        if covered_lines.checked_add(missed_lines).is_none() {
            return Err(QasumError::Malformed(format!(
                "LINE counter total overflows: covered={covered_lines} missed={missed_lines}"
            )));
        }
        first = Some(CoverageRecord {
            covered_lines,
            missed_lines,
        });
        Ok(())
    })?;

    Ok(first)
}
