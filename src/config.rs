use std::default::Default;
use std::path::{Path, PathBuf};

use quire::validate::{Structure, Scalar};
use quire::{parse_config, Options};


pub const DEFAULT_CONFIG: &'static str = "stamp.yaml";

const METADATA_PATH: &'static str = "GrindCompanion.toc";
const VERSION_LINE_PATTERN: &'static str = r"(?m)^## Version: (.+)$";
const README_PATH: &'static str = "README.md";
const BADGE_PATTERN: &'static str =
    r"\[!\[Version\]\(https://img\.shields\.io/badge/version-[^-]+-blue\.svg\)\]";
const BADGE_TEMPLATE: &'static str =
    "[![Version](https://img.shields.io/github/v/release\
     /anthonygauthier/GrindCompanion?label=version)]";


/// Target files and substitution patterns.
///
/// The version line pattern must contain exactly one capture group
/// marking the old version. The badge pattern has no groups, the whole
/// match is replaced by the badge template.
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub metadata_path: PathBuf,
    pub version_line_pattern: String,
    pub readme_path: PathBuf,
    pub badge_pattern: String,
    pub badge_template: String,
}

impl Config {
    fn validator<'x>() -> Structure<'x> {
        Structure::new()
        .member("metadata_path", Scalar::new().default(METADATA_PATH))
        .member("version_line_pattern",
            Scalar::new().default(VERSION_LINE_PATTERN))
        .member("readme_path", Scalar::new().default(README_PATH))
        .member("badge_pattern", Scalar::new().default(BADGE_PATTERN))
        .member("badge_template", Scalar::new().default(BADGE_TEMPLATE))
    }
    pub fn parse_file(p: &Path) -> Result<Config, String> {
        parse_config(p, &Config::validator(), &Options::default())
        .map_err(|e| format!("{}", e))
    }
    /// Missing config file is fine, defaults cover the common layout.
    pub fn load(p: &Path) -> Result<Config, String> {
        if p.exists() {
            Config::parse_file(p)
        } else {
            Ok(Config::default())
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            metadata_path: PathBuf::from(METADATA_PATH),
            version_line_pattern: VERSION_LINE_PATTERN.to_string(),
            readme_path: PathBuf::from(README_PATH),
            badge_pattern: BADGE_PATTERN.to_string(),
            badge_template: BADGE_TEMPLATE.to_string(),
        }
    }
}
