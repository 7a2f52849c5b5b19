/// Canonical binding name of an unnamed wildcard.
pub const WILDCARD_NAME: &str = "*";

/// One classified segment of a route pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSegment<'a> {
    Static(&'a str),
    Param(&'a str),
    Wildcard(&'a str),
}

impl<'a> PatternSegment<'a> {
    /// Classifies a segment. Never fails: anything that is not `:name` or
    /// `*`/`*name` is a literal.
    pub fn parse(segment: &'a str) -> Self {
        if let Some(name) = segment.strip_prefix(':') {
            PatternSegment::Param(name)
        } else if segment == WILDCARD_NAME {
            PatternSegment::Wildcard(WILDCARD_NAME)
        } else if let Some(name) = segment.strip_prefix('*') {
            PatternSegment::Wildcard(name)
        } else {
            PatternSegment::Static(segment)
        }
    }
}

/// Classifies pattern segments in order, discarding everything after the
/// first wildcard.
pub fn parse_pattern<'a, S>(segments: &'a [S]) -> Vec<PatternSegment<'a>>
where
    S: AsRef<str>,
{
    let mut parsed = Vec::with_capacity(segments.len());
    for segment in segments {
        let pat = PatternSegment::parse(segment.as_ref());
        parsed.push(pat);
        if matches!(pat, PatternSegment::Wildcard(_)) {
            break;
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_segment_kind() {
        assert_eq!(PatternSegment::parse("users"), PatternSegment::Static("users"));
        assert_eq!(PatternSegment::parse(":id"), PatternSegment::Param("id"));
        assert_eq!(PatternSegment::parse("*"), PatternSegment::Wildcard("*"));
        assert_eq!(
            PatternSegment::parse("*filepath"),
            PatternSegment::Wildcard("filepath")
        );
    }

    #[test]
    fn bare_colon_is_an_unnamed_parameter() {
        assert_eq!(PatternSegment::parse(":"), PatternSegment::Param(""));
    }

    #[test]
    fn segments_after_wildcard_are_dropped() {
        let segments = ["files", "*rest", "meta", ":id"];
        assert_eq!(
            parse_pattern(&segments),
            vec![PatternSegment::Static("files"), PatternSegment::Wildcard("rest")]
        );
    }
}
