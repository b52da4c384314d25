//! # Profile Variable Evaluation
//!
//! Build and runtime paths in the catalog configuration may reference profile
//! variables written as `[Name]`, e.g. `ServerData/[BuildTarget]/East`. A
//! [`ProfileEvaluator`] resolves those tokens for the active profile.
//!
//! Brace tokens such as `{UnityEngine.AddressableAssets.Addressables.RuntimePath}`
//! are resolved by the player at load time and are left untouched here.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Nesting limit for variables whose values reference other variables.
const MAX_EVALUATION_DEPTH: usize = 8;

/// Resolves profile-scoped tokens in a path string.
pub trait ProfileEvaluator {
    fn evaluate(&self, input: &str) -> String;
}

/// Evaluator that returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl ProfileEvaluator for Identity {
    fn evaluate(&self, input: &str) -> String {
        input.to_string()
    }
}

/// Profile variables of the active build profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileVariables {
    values: BTreeMap<String, String>,
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[([^\[\]]+)\]").expect("static token pattern"))
}

impl ProfileVariables {
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    fn substitute_once(&self, input: &str) -> String {
        token_pattern()
            .replace_all(input, |caps: &Captures| match self.values.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

impl ProfileEvaluator for ProfileVariables {
    fn evaluate(&self, input: &str) -> String {
        let mut current = input.to_string();
        for _ in 0..MAX_EVALUATION_DEPTH {
            let next = self.substitute_once(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProfileVariables {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
