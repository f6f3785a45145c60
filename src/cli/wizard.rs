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

//! Interactive choices before a build

use crate::domain::flavor::AppFlavor;
use crate::shared::error::{Result, ScaffoldError};
use std::io::{BufRead, Write};

const FLAVOR_PROMPT: &str = "Please enter your numeric choice: ";
const FLAVOR_RETRY_PROMPT: &str = "Please enter a value between 1 and 2: ";
const SCAFFOLD_PROMPT: &str = "Please enter your choice [Y/n]: ";

/// Source of the operator's decisions
pub trait Prompt {
    fn choose_flavor(&mut self) -> Result<AppFlavor>;

    fn confirm_scaffold(&mut self, flavor: AppFlavor) -> Result<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardChoices {
    pub flavor: AppFlavor,
    pub create_project: bool,
}

pub fn run_wizard(prompt: &mut dyn Prompt) -> Result<WizardChoices> {
    let flavor = prompt.choose_flavor()?;
    let create_project = prompt.confirm_scaffold(flavor)?;
    Ok(WizardChoices {
        flavor,
        create_project,
    })
}

/// Line-based prompt over any reader/writer pair; re-asks until the answer is valid
pub struct ConsoleWizard<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleWizard<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ScaffoldError::PromptClosed);
        }
        Ok(line.trim().to_string())
    }
}

fn parse_flavor_choice(answer: &str) -> Option<AppFlavor> {
    match answer.parse::<u32>().ok()? {
        1 => Some(AppFlavor::LocalApp),
        2 => Some(AppFlavor::ServiceApi),
        _ => None,
    }
}

fn parse_confirmation(answer: &str) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Prompt for ConsoleWizard<R, W> {
    fn choose_flavor(&mut self) -> Result<AppFlavor> {
        writeln!(
            self.output,
            "Choose the type of application you want to deploy:"
        )?;
        for (index, flavor) in AppFlavor::ALL.iter().enumerate() {
            let end = if index + 1 == AppFlavor::ALL.len() { "." } else { ";" };
            writeln!(
                self.output,
                "  [{}] {}: {}{}",
                index + 1,
                flavor,
                flavor.description(),
                end
            )?;
        }

        let mut message = FLAVOR_PROMPT;
        loop {
            let answer = self.ask(message)?;
            if let Some(flavor) = parse_flavor_choice(&answer) {
                writeln!(self.output, "You chose to deploy a {}.", flavor)?;
                return Ok(flavor);
            }
            message = FLAVOR_RETRY_PROMPT;
        }
    }

    fn confirm_scaffold(&mut self, flavor: AppFlavor) -> Result<bool> {
        writeln!(self.output, "\nDo you want to create a base project?")?;

        loop {
            let answer = self.ask(SCAFFOLD_PROMPT)?;
            match parse_confirmation(&answer) {
                Some(true) => {
                    writeln!(
                        self.output,
                        "You chose to create a base project: '{}'.",
                        flavor
                    )?;
                    return Ok(true);
                }
                Some(false) => {
                    writeln!(self.output, "Skipping base project creation.")?;
                    return Ok(false);
                }
                None => continue,
            }
        }
    }
}
