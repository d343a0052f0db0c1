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

use std::fmt::Debug;
use std::path::Path;

use config::Config;
use owl_error::OwlResult;
use serde::de::DeserializeOwned;

/// Load a YAML, JSON or TOML file (chosen by extension) into `C`
pub fn parse_config_file<C>(config_file: impl AsRef<Path>) -> OwlResult<C>
where
    C: Debug + DeserializeOwned,
{
    let cfg = Config::builder()
        .add_source(config::File::from(config_file.as_ref()))
        .build()?;
    let config_file = cfg.try_deserialize::<C>()?;
    Ok(config_file)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        log_level: String,
        #[serde(default)]
        retries: u32,
    }

    #[test]
    fn parses_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "log_level: DEBUG\nretries: 3").unwrap();

        let sample: Sample = parse_config_file(file.path()).unwrap();
        assert_eq!(sample.log_level, "DEBUG");
        assert_eq!(sample.retries, 3);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let result = parse_config_file::<Sample>("/definitely/not/here.yaml");
        assert!(matches!(result, Err(owl_error::OwlError::Config(_))));
    }
}
