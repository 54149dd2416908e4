/// A regex compiled once on first use and shared for the life of the process.
///
/// `regex!(i "...")` compiles case-insensitively, like trigger rules. Only
/// for literal patterns written in this crate; an invalid one is a bug and
/// panics on first use.
macro_rules! regex {
    (@build $pat:literal, $insensitive:expr) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
            regex::RegexBuilder::new($pat).case_insensitive($insensitive).build().expect("built-in pattern must compile")
        });
        &*RE
    }};
    (i $pat:literal) => {
        regex!(@build $pat, true)
    };
    ($pat:literal) => {
        regex!(@build $pat, false)
    };
}
