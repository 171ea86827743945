//! DMARC policy classification.

use colored::{ColoredString, Colorize};
use strum_macros::{Display, EnumIter};

/// Enforcement policy requested by a DMARC record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum DmarcPolicy {
    /// `p=none`, monitor only
    None,
    /// `p=quarantine`
    Quarantine,
    /// `p=reject`
    Reject,
    /// No recognizable `p=` tag
    Unknown,
}

impl DmarcPolicy {
    /// Classifies a DMARC record by substring.
    ///
    /// Tags are tested in the order none, quarantine, reject; the first one
    /// present wins, even if a later one also appears in the text.
    pub fn classify(record: &str) -> Self {
        if record.contains("p=none") {
            DmarcPolicy::None
        } else if record.contains("p=quarantine") {
            DmarcPolicy::Quarantine
        } else if record.contains("p=reject") {
            DmarcPolicy::Reject
        } else {
            DmarcPolicy::Unknown
        }
    }

    /// The policy as a `p=` tag, colored by severity.
    pub fn colored_tag(self) -> ColoredString {
        let tag = format!("p={self}");
        match self {
            DmarcPolicy::None => tag.red(),
            DmarcPolicy::Quarantine => tag.yellow(),
            DmarcPolicy::Reject => tag.cyan(),
            DmarcPolicy::Unknown => tag.magenta(),
        }
    }
}
