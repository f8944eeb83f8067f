//! Family lookup tool definition.
//!
//! Answers "who are the children of X" style questions from a small fixed
//! table. The surname is the last word of the question, matched without
//! regard to case, so `"Children of RUJIMIN"` and `"rujimin"` hit the same
//! entry.

use tracing::{info, instrument};

use crate::domains::tools::registry::ToolEntry;

/// Known parents, keyed by lowercase surname.
const FAMILY_TABLE: &[(&str, &str)] = &[
    (
        "rujimin",
        "The children of the Rujimin family are: stella hermine lufgard and markus rujimin",
    ),
    (
        "damanik",
        "The children of the Damanik family are: yohana damanik, samuel damanik and ester damanik",
    ),
    (
        "makalew",
        "The children of the Makalew family are: grace makalew",
    ),
];

/// Family lookup tool - finds the children registered for a parent.
pub struct FamilyLookupTool;

impl FamilyLookupTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "findChildrenOfParent";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Find the children of a parent. Pass a question or a name; the last word is used as the family name (case-insensitive).";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(message: &str) -> String {
        let lowered = message.to_lowercase();
        let surname = lowered.split_whitespace().last();

        match surname.and_then(Self::lookup) {
            Some(children) => {
                info!("Family entry found for '{}'", surname.unwrap_or_default());
                children.to_string()
            }
            None => {
                info!("No family entry for '{}'", message);
                format!("No information found for: {}", message)
            }
        }
    }

    /// Look up a lowercase surname in the fixed table.
    pub fn lookup(surname: &str) -> Option<&'static str> {
        FAMILY_TABLE
            .iter()
            .find(|(key, _)| *key == surname)
            .map(|(_, children)| *children)
    }

    /// Registry entry for this tool.
    pub const fn entry() -> ToolEntry {
        ToolEntry::new(Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_word_is_looked_up() {
        let answer = FamilyLookupTool::execute("hello rujimin");
        assert!(answer.contains("stella hermine lufgard"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let answer = FamilyLookupTool::execute("Who are the children of DAMANIK");
        assert!(answer.contains("samuel damanik"));
        assert_eq!(
            FamilyLookupTool::execute("Makalew"),
            FamilyLookupTool::execute("makalew")
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let answer = FamilyLookupTool::execute("  children of\tmakalew \n");
        assert!(answer.contains("grace makalew"));
    }

    #[test]
    fn test_only_the_last_word_counts() {
        let answer = FamilyLookupTool::execute("rujimin or someone else");
        assert_eq!(answer, "No information found for: rujimin or someone else");
    }

    #[test]
    fn test_unknown_keeps_original_input() {
        assert_eq!(FamilyLookupTool::execute("xyz"), "No information found for: xyz");
        assert_eq!(FamilyLookupTool::execute("XYZ"), "No information found for: XYZ");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(FamilyLookupTool::execute(""), "No information found for: ");
        assert_eq!(FamilyLookupTool::execute("   "), "No information found for:    ");
    }

    #[test]
    fn test_lookup_expects_lowercase_key() {
        assert!(FamilyLookupTool::lookup("rujimin").is_some());
        assert!(FamilyLookupTool::lookup("Rujimin").is_none());
    }
}
