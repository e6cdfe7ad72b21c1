//! Validation levels

/// How thoroughly a CA vetted the certificate subject
///
/// Ordered from weakest to strongest, so the strongest of several
/// indications is simply the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ValidationLevel {
    #[default]
    Unknown,
    /// Domain validated
    DV,
    /// Organization validated
    OV,
    /// Extended validation
    EV,
}

impl ValidationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationLevel::Unknown => "unknown",
            ValidationLevel::DV => "DV",
            ValidationLevel::OV => "OV",
            ValidationLevel::EV => "EV",
        }
    }
}

impl std::fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
