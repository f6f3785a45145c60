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

//! RFC 1123 label validation for generated resource names

/// Returns true iff `label` matches `^[a-z0-9]([-a-z0-9]*[a-z0-9])?$`.
pub fn is_valid_label(label: &str) -> bool {
    let is_alnum = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();

    let (Some(first), Some(last)) = (label.chars().next(), label.chars().last()) else {
        return false;
    };

    if !is_alnum(first) || !is_alnum(last) {
        return false;
    }

    label.chars().all(|c| is_alnum(c) || c == '-')
}
