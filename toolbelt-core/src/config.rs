//! Configuration management for `toolbelt-core`.
//!
//! This module defines named string policies: a length window, a set of
//! [`check_str`] rules and a serial transformation applied before checking.
//! Policies are read from YAML, either from a file or from the embedded
//! defaults, and can be merged so that user entries override defaults by name.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::check_str::{check_str, CheckStrResult, RuleMask};
use crate::errors::ToolbeltError;
use crate::transform::{transform_serially, TransformStep};

/// A single [`check_str`] rule, named the way it appears in YAML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    AllowEmpty,
    DenySpaces,
    DenyNumbers,
    DenyLetters,
    DenySymbols,
    DenyMoreThanOneWord,
    DenyUppercase,
    DenyLowercase,
    DenyUnicode,
    RequireNumbers,
    RequireLetters,
    RequireSymbols,
    RequireMoreThanOneWord,
    RequireUppercase,
    RequireLowercase,
}

impl From<Rule> for RuleMask {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::AllowEmpty => RuleMask::ALLOW_EMPTY,
            Rule::DenySpaces => RuleMask::DENY_SPACES,
            Rule::DenyNumbers => RuleMask::DENY_NUMBERS,
            Rule::DenyLetters => RuleMask::DENY_LETTERS,
            Rule::DenySymbols => RuleMask::DENY_SYMBOLS,
            Rule::DenyMoreThanOneWord => RuleMask::DENY_MORE_THAN_ONE_WORD,
            Rule::DenyUppercase => RuleMask::DENY_UPPERCASE,
            Rule::DenyLowercase => RuleMask::DENY_LOWERCASE,
            Rule::DenyUnicode => RuleMask::DENY_UNICODE,
            Rule::RequireNumbers => RuleMask::REQUIRE_NUMBERS,
            Rule::RequireLetters => RuleMask::REQUIRE_LETTERS,
            Rule::RequireSymbols => RuleMask::REQUIRE_SYMBOLS,
            Rule::RequireMoreThanOneWord => RuleMask::REQUIRE_MORE_THAN_ONE_WORD,
            Rule::RequireUppercase => RuleMask::REQUIRE_UPPERCASE,
            Rule::RequireLowercase => RuleMask::REQUIRE_LOWERCASE,
        }
    }
}

/// Deny/require pairs that can never both be satisfied by non-empty input.
const CONTRADICTIONS: [(Rule, Rule); 6] = [
    (Rule::DenyNumbers, Rule::RequireNumbers),
    (Rule::DenyLetters, Rule::RequireLetters),
    (Rule::DenySymbols, Rule::RequireSymbols),
    (Rule::DenyMoreThanOneWord, Rule::RequireMoreThanOneWord),
    (Rule::DenyUppercase, Rule::RequireUppercase),
    (Rule::DenyLowercase, Rule::RequireLowercase),
];

/// A named validation policy for one kind of user input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StringPolicy {
    /// Unique identifier for the policy (e.g., "username").
    pub name: String,
    pub description: Option<String>,
    /// Minimum length in runes.
    pub min_len: usize,
    /// Maximum length in runes. `0` means unbounded.
    pub max_len: usize,
    pub rules: Vec<Rule>,
    /// Steps applied, in order, by [`StringPolicy::normalize`].
    pub transform: Vec<TransformStep>,
}

impl StringPolicy {
    pub fn rule_mask(&self) -> RuleMask {
        self.rules
            .iter()
            .fold(RuleMask::empty(), |mask, &rule| mask | RuleMask::from(rule))
    }

    /// Applies the policy's transformation steps, truncating to `max_len`.
    pub fn normalize(&self, input: &str) -> String {
        transform_serially(input, self.max_len, &self.transform)
    }

    /// Checks `input` as is, without normalizing it first.
    pub fn check(&self, input: &str) -> CheckStrResult {
        check_str(input, self.min_len, self.max_len, self.rule_mask())
    }

    /// Normalizes `input` and checks the result.
    ///
    /// # Returns
    ///
    /// The normalized string, or the first rule it violates.
    pub fn sanitize(&self, input: &str) -> std::result::Result<String, CheckStrResult> {
        let normalized = self.normalize(input);
        match self.check(&normalized) {
            CheckStrResult::Ok => Ok(normalized),
            violation => {
                debug!("Policy '{}' rejected input: {}", self.name, violation);
                Err(violation)
            }
        }
    }
}

/// Represents the top-level policy file.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    pub policies: Vec<StringPolicy>,
}

impl PolicyConfig {
    /// Loads policies from a YAML file and validates them.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading string policies from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read policy file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to load policy file {}", path.display()))?;

        info!("Loaded {} policies from file {}.", config.policies.len(), path.display());
        Ok(config)
    }

    /// Parses and validates policies from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: PolicyConfig = serde_yml::from_str(yaml).context("Failed to parse policy YAML")?;
        validate_policies(&config.policies)?;
        Ok(config)
    }

    /// Loads the policies embedded in the library.
    pub fn load_default_policies() -> Result<Self> {
        debug!("Loading default policies from embedded string...");
        let default_yaml = include_str!("../config/default_policies.yaml");
        let config: PolicyConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default policies")?;

        debug!("Loaded {} default policies.", config.policies.len());
        Ok(config)
    }

    /// Serializes the policies to `path` as YAML.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> std::result::Result<(), ToolbeltError> {
        let path = path.as_ref();
        let yaml = serde_yml::to_string(self)
            .map_err(|e| anyhow!("Failed to serialize policies: {}", e))?;
        std::fs::write(path, yaml)?;
        info!("Wrote {} policies to {}.", self.policies.len(), path.display());
        Ok(())
    }

    pub fn get(&self, name: &str) -> std::result::Result<&StringPolicy, ToolbeltError> {
        self.policies
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| {
                warn!("String policy '{}' was requested but is not configured.", name);
                ToolbeltError::PolicyNotFound(name.to_string())
            })
    }
}

/// Merges user-defined policies with defaults. A user policy replaces the
/// default of the same name; new names are appended after the defaults.
pub fn merge_policies(default_config: PolicyConfig, user_config: Option<PolicyConfig>) -> PolicyConfig {
    debug!("merge_policies called. Initial default policies count: {}", default_config.policies.len());

    let mut policies = default_config.policies;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user policies.", user_cfg.policies.len());
        let mut index: HashMap<String, usize> = policies
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();

        for user_policy in user_cfg.policies {
            match index.get(&user_policy.name) {
                Some(&i) => {
                    debug!("Overriding default policy '{}'.", user_policy.name);
                    policies[i] = user_policy;
                }
                None => {
                    index.insert(user_policy.name.clone(), policies.len());
                    policies.push(user_policy);
                }
            }
        }
    }

    debug!("Final total policies after merge: {}", policies.len());
    PolicyConfig { policies }
}

/// Validates policy integrity, collecting every problem before failing.
///
/// Contradictory deny/require pairs are only warned about: they are legal,
/// they just reject every non-empty input.
pub fn validate_policies(policies: &[StringPolicy]) -> std::result::Result<(), ToolbeltError> {
    let mut names = HashSet::new();
    let mut errors = Vec::new();

    for policy in policies {
        if policy.name.is_empty() {
            errors.push("A policy has an empty `name` field.".to_string());
        } else if !names.insert(policy.name.as_str()) {
            errors.push(format!("Duplicate policy name found: '{}'.", policy.name));
        }

        if policy.max_len > 0 && policy.min_len > policy.max_len {
            errors.push(format!(
                "Policy '{}' has min_len {} greater than max_len {}.",
                policy.name, policy.min_len, policy.max_len
            ));
        }

        for (deny, require) in CONTRADICTIONS {
            if policy.rules.contains(&deny) && policy.rules.contains(&require) {
                warn!(
                    "Policy '{}' both denies and requires the same content ({:?} / {:?}).",
                    policy.name, deny, require
                );
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ToolbeltError::PolicyValidation(errors.join("\n")))
    }
}
