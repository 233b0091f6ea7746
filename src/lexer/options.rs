/// How the scanner treats numeric and character literals whose shape the
/// grammar does not allow (`1.2.3`, `1e+e2`, `'ab'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiteralPolicy {
    /// Reject malformed literals with a lexing error.
    #[default]
    Strict,
    /// Accept them: keep the usable prefix of a numeric run and the first
    /// character of a char literal.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    pub literal_policy: LiteralPolicy,
}

impl ScanOptions {
    pub fn lenient() -> Self {
        ScanOptions {
            literal_policy: LiteralPolicy::Lenient,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.literal_policy == LiteralPolicy::Strict
    }
}
