mod segment;

pub use segment::{PatternSegment, WILDCARD_NAME, parse_pattern};
