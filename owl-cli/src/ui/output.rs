// Copyright 2025 The Owl Rust Authors
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

//! Colored status lines around command output

use colored::Colorize;

/// Print error message with red prefix
pub fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}

/// Print warning message with yellow prefix
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), message);
}

/// Print info message with blue prefix
pub fn print_info(message: &str) {
    println!("{} {}", "[INFO]".blue().bold(), message);
}

/// Print empty result message
pub fn print_empty_result(entity: &str) {
    print_info(&format!("No {entity} found"));
}

/// Format count with proper pluralization
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
