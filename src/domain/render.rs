// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Placeholder substitution for `<VAR_X>` tokens

use crate::infrastructure::constants::PLACEHOLDER_MARKER;
use crate::shared::error::{Result, ScaffoldError};
use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<VAR_[A-Z0-9_]+>").expect("placeholder regex is valid"));

static PLACEHOLDER_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<VAR_[A-Z0-9_]+>$").expect("placeholder token regex is valid"));

/// Ordered table of placeholder tokens and their literal values.
///
/// Values never contain `<VAR_`, so substitution order cannot cause one
/// replacement to introduce another token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    entries: Vec<(String, String)>,
}

impl ReplacementTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let token = token.into();
        let value = value.into();

        if !PLACEHOLDER_TOKEN_REGEX.is_match(&token) {
            return Err(ScaffoldError::InvalidPlaceholder { token });
        }

        if self.get(&token).is_some() {
            return Err(ScaffoldError::DuplicatePlaceholder { token });
        }

        if value.contains(PLACEHOLDER_MARKER) {
            return Err(ScaffoldError::PlaceholderInValue { token, value });
        }

        self.entries.push((token, value));
        Ok(())
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == token)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace every literal occurrence of each token, in insertion order.
    pub fn render(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_string(), |acc, (token, value)| {
                acc.replace(token.as_str(), value)
            })
    }
}

/// Tokens still present in `text`, deduplicated, in order of first appearance.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for m in PLACEHOLDER_REGEX.find_iter(text) {
        if !found.iter().any(|t| t == m.as_str()) {
            found.push(m.as_str().to_string());
        }
    }

    found
}
