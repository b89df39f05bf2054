use regex::Regex;

lazy_static! {
    // 8-4-4-4-12 hex groups, case-insensitive. Stricter than general UUID
    // parsing: braced, URN, and undashed forms are all rejected.
    static ref UUID_PATTERN: Regex =
        Regex::new(r"^(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
            .expect("hard-coded UUID pattern compiles");
}

/// Whether `candidate` is a textual UUID.
pub fn is_uuid(candidate: &str) -> bool {
    UUID_PATTERN.is_match(candidate)
}
