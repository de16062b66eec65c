use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::runtime::Error;
use crate::utils::expand_path;

pub const NUM_READS: usize = 2;

pub const DEFAULT_THREADS: usize = 1;
pub const DEFAULT_PRESET_NAME: &str = "bd-sc-xcr-rhapsody-full-length";
pub const DEFAULT_SPECIES: &str = "rabbit";
pub const DEFAULT_LOCAL_PRESET: &str = "bd_rabbit_bcr";
pub const DEFAULT_LIBRARY_NAME: &str = "imgt.202312-3.sv8_rabbit.json";
pub const DEFAULT_HEAP_SIZE: &str = "100g";
pub const DEFAULT_OUTPUT_NAME: &str = "Out";

/// A file reference in the run file: `{class: File, location: /path}`
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct LocatedFile {
    #[serde(default)]
    pub class: String,
    pub location: PathBuf,
}
impl LocatedFile {
    /// Location with ~ and environment variables expanded
    pub fn path(&self) -> PathBuf {
        expand_path(&self.location)
    }
}

/// Names MiXCR is told to use. The defaults are the BD Rhapsody rabbit BCR setup
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Built-in preset that is exported
    pub preset_name: String,
    /// Value for `exportPreset -s`
    pub species: String,
    /// File stem of the exported preset; referred to as `local:<stem>`
    pub local_preset: String,
    /// File name the reference library is copied to, and passed to `--library`
    pub library_name: String,
    /// JVM heap, rendered as `-Xmx<heap_size>`
    pub heap_size: String,
    /// Output prefix inside the working directory
    pub output_name: String,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            preset_name: DEFAULT_PRESET_NAME.to_string(),
            species: DEFAULT_SPECIES.to_string(),
            local_preset: DEFAULT_LOCAL_PRESET.to_string(),
            library_name: DEFAULT_LIBRARY_NAME.to_string(),
            heap_size: DEFAULT_HEAP_SIZE.to_string(),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

fn default_threads() -> usize {
    DEFAULT_THREADS
}

///////////////////////////////
/// Everything needed for one run, as read from the YAML run file
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct RunConfig {
    #[serde(rename = "Reads")]
    pub reads: Vec<LocatedFile>,

    pub mixcr_path: LocatedFile,

    pub mixcr_json: LocatedFile,

    #[serde(default)]
    pub version: String,

    #[serde(default = "default_threads")]
    pub threads: usize,

    #[serde(default)]
    pub analysis: AnalysisSettings,
}

impl RunConfig {
    /// Read and check a run file
    pub fn from_path(path: &Path) -> Result<RunConfig, Error> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::file_not_valid(path, Some(format!("cannot read: {}", e))))?;

        let config = RunConfig::from_yaml(&content)
            .map_err(|e| Error::file_not_valid(path, Some(e.to_string())))?;

        Ok(config)
    }

    /// Parse a run file from text. Fields not listed in RunConfig are ignored
    pub fn from_yaml(content: &str) -> Result<RunConfig, Error> {
        let config: RunConfig = serde_yaml::from_str(content)
            .map_err(|e| Error::parse_error("run configuration", Some(e.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.reads.len() != NUM_READS {
            return Err(Error::parse_error(
                "run configuration",
                Some(format!(
                    "expected {} entries under Reads, found {}",
                    NUM_READS,
                    self.reads.len()
                )),
            ));
        }
        Ok(())
    }

    /// Read files in the order given in the run file
    pub fn read_paths(&self) -> Vec<PathBuf> {
        self.reads.iter().map(|r| r.path()).collect()
    }

    pub fn mixcr_path(&self) -> PathBuf {
        self.mixcr_path.path()
    }

    pub fn reference_path(&self) -> PathBuf {
        self.mixcr_json.path()
    }

    /// The configuration rendered back to YAML, for the log
    pub fn to_yaml(&self) -> String {
        serde_yaml::to_string(self).unwrap_or_else(|e| format!("<unprintable: {}>", e))
    }
}
