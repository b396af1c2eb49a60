//! Parser for SpotBugs XML reports (`spotbugsXml.xml` / `spotbugs.xml`).
//!
//!   <BugCollection version="4.8.3" sequence="0" timestamp="..." analysisTimestamp="...">
//!     <Project projectName="..."/>
//!     <BugInstance type="EI_EXPOSE_REP" priority="2" rank="18" category="MALICIOUS_CODE">
//!       ...
//!     </BugInstance>
//!     <Errors errors="0" missingClasses="0"/>
//!     <FindBugsSummary total_bugs="1" .../>
//!   </BugCollection>
//!
//! The issue count is the number of `<BugInstance>` elements, whatever their
//! priority or rank.

use super::{visit_elements, ReportParser};
use crate::error::Result;

pub struct SpotbugsParser;

impl ReportParser for SpotbugsParser {
    type Output = u64;

    fn parse(&self, input: &[u8]) -> Result<Self::Output> {
        parse(input)
    }
}

pub fn parse(input: &[u8]) -> Result<u64> {
    let mut count = 0;
    visit_elements(input, |e, _| {
        if e.name().as_ref() == b"BugInstance" {
            count += 1;
        }
        Ok(())
    })?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spotbugs() {
        let input = include_bytes!("../../tests/fixtures/spotbugsXml.xml");
        assert_eq!(parse(input).unwrap(), 2);
    }

    #[test]
    fn test_parse_spotbugs_clean() {
        let input = br#"<BugCollection version="4.8.3"><Errors errors="0"/></BugCollection>"#;
        assert_eq!(parse(input).unwrap(), 0);
    }

    #[test]
    fn test_parse_spotbugs_malformed() {
        assert!(parse(b"<BugCollection><BugInstance></BugCollection>").is_err());
    }
}
