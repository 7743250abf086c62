//! YAML policy seed files.
//!
//! Lets operators author policies independently of any inquiry, which is
//! how the guard's store is normally populated at startup.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::policy::Policy;

/// On-disk policy seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyFile {
    /// Schema version; currently must be "1.0".
    pub version: String,
    /// Authored policies, stored in file order.
    #[serde(default)]
    pub policies: Vec<PolicySeed>,
}

/// One authored policy entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicySeed {
    pub id: String,
    pub subject: String,
    pub action: String,
    pub resource: String,
    pub condition: String,
}

impl From<PolicySeed> for Policy {
    fn from(seed: PolicySeed) -> Self {
        Policy {
            id: seed.id,
            subject_rule: seed.subject,
            action_rule: seed.action,
            resource_rule: seed.resource,
            condition_rule: seed.condition,
        }
    }
}

/// Load and validate a policy seed file from disk.
pub fn load_policies(path: impl AsRef<Path>) -> Result<Vec<Policy>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read policy file: {}", path.display()))?;
    load_policies_from_str(&contents)
        .with_context(|| format!("failed to parse policy file: {}", path.display()))
}

/// Parse and validate a policy seed file from a YAML string.
///
/// This is the primary entry point used in tests.
pub fn load_policies_from_str(yaml: &str) -> Result<Vec<Policy>> {
    let file: PolicyFile = serde_yml::from_str(yaml).context("YAML deserialization failed")?;
    validate(&file)?;
    Ok(file.policies.into_iter().map(Policy::from).collect())
}

/// Run post-deserialization validation checks.
fn validate(file: &PolicyFile) -> Result<()> {
    // Version gate
    if file.version != "1.0" {
        bail!(
            "unsupported policy file version '{}'; only '1.0' is supported",
            file.version
        );
    }

    let mut seen = HashSet::new();
    for seed in &file.policies {
        if seed.id.is_empty() {
            bail!("policy id must not be empty");
        }
        if !seen.insert(&seed.id) {
            bail!("duplicate policy id: '{}'", seed.id);
        }
        for (field, value) in [
            ("subject", &seed.subject),
            ("action", &seed.action),
            ("resource", &seed.resource),
            ("condition", &seed.condition),
        ] {
            if value.is_empty() {
                bail!("policy '{}' has an empty {field}", seed.id);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_minimal_file() {
        let yaml = r#"
version: "1.0"
policies: []
"#;
        let policies = load_policies_from_str(yaml).unwrap();
        assert!(policies.is_empty());
    }

    #[test]
    fn load_seeds_in_file_order() {
        let yaml = r#"
version: "1.0"
policies:
  - id: "alice-reads-reports"
    subject: "alice"
    action: "read"
    resource: "report"
    condition: "ifAuthenticated"
  - id: "bob-writes-logs"
    subject: "bob"
    action: "write"
    resource: "log"
    condition: "ifOnShift"
"#;
        let policies = load_policies_from_str(yaml).unwrap();
        assert_eq!(policies.len(), 2);
        assert_eq!(policies[0].id, "alice-reads-reports");
        assert_eq!(policies[0].subject_rule, "alice");
        assert_eq!(policies[1].condition_rule, "ifOnShift");
    }

    #[test]
    fn reject_wrong_version() {
        let yaml = r#"
version: "2.0"
policies: []
"#;
        let err = load_policies_from_str(yaml).unwrap_err();
        assert!(
            err.to_string().contains("unsupported policy file version"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn reject_duplicate_ids() {
        let yaml = r#"
version: "1.0"
policies:
  - id: "dup"
    subject: "a"
    action: "b"
    resource: "c"
    condition: "d"
  - id: "dup"
    subject: "e"
    action: "f"
    resource: "g"
    condition: "h"
"#;
        let err = load_policies_from_str(yaml).unwrap_err();
        assert!(
            err.to_string().contains("duplicate policy id"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn reject_empty_rule_field() {
        let yaml = r#"
version: "1.0"
policies:
  - id: "p1"
    subject: "alice"
    action: ""
    resource: "report"
    condition: "always"
"#;
        let err = load_policies_from_str(yaml).unwrap_err();
        assert!(
            err.to_string().contains("empty action"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn load_from_nonexistent_file() {
        let err = load_policies("/does/not/exist.yaml").unwrap_err();
        assert!(
            err.to_string().contains("failed to read policy file"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn load_from_disk_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policies.yaml");
        std::fs::write(
            &path,
            r#"
version: "1.0"
policies:
  - id: "p1"
    subject: "alice"
    action: "read"
    resource: "report"
    condition: "always"
"#,
        )
        .unwrap();

        let policies = load_policies(&path).unwrap();
        assert_eq!(policies[0].id, "p1");
    }
}
