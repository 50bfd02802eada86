//! Gesture rule table loader.

use std::path::Path;

use gesture::RuleTable;

use crate::loaders::{LoadResult, read_file};

/// Loader for ordered gesture rule tables from RON files.
///
/// The file holds a list of rules; order is preserved and decides ties.
pub struct RuleTableLoader;

impl RuleTableLoader {
    pub fn load(path: &Path) -> LoadResult<RuleTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid rule table {}: {}", path.display(), e))
    }

    /// Parse and validate a rule table from RON text.
    pub fn parse(content: &str) -> LoadResult<RuleTable> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse rules RON: {}", e))
    }

    /// The rule table shipped with the crate.
    pub fn bundled() -> LoadResult<RuleTable> {
        Self::parse(include_str!("../../data/rules.ron"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_rules_match_the_builtin_table() {
        let table = RuleTableLoader::bundled().expect("Failed to load bundled rules");
        assert_eq!(table, RuleTable::canonical());
    }

    #[test]
    fn invalid_tables_are_rejected() {
        assert!(RuleTableLoader::parse("[]").is_err());

        let ambiguous = r#"[
            (name: "both", condition: (), action: Attack, element: Some(Fire)),
        ]"#;
        let err = RuleTableLoader::parse(ambiguous).unwrap_err().to_string();
        assert!(err.contains("both"), "{err}");
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.ron");
        std::fs::write(
            &path,
            r#"[(name: "only_water", condition: (thumb_angle: AtMost(14.0)), element: Some(Water))]"#,
        )
        .unwrap();

        let table = RuleTableLoader::load(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rules()[0].name, "only_water");
    }
}
