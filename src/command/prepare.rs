use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::info;

use crate::fileformat::AnalysisSettings;
use crate::runtime::Error;
use crate::utils::run_utility;

pub const MIXCR_HOME_DIR: &str = ".mixcr";
pub const PRESETS_DIR: &str = "presets";
pub const LIBRARIES_DIR: &str = "libraries";

/// MiXCR's per-user directory, `<home>/.mixcr`. Local presets and libraries are looked up here
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MixcrHome {
    root: PathBuf,
}
impl MixcrHome {
    pub fn new(user_home: &Path) -> Self {
        Self {
            root: user_home.join(MIXCR_HOME_DIR),
        }
    }

    /// Resolve from the current user. Only called once, by the CLI layer
    pub fn from_user() -> Result<Self, Error> {
        let home = dirs::home_dir().ok_or(Error::HomeNotFound)?;
        Ok(Self::new(&home))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn presets_dir(&self) -> PathBuf {
        self.root.join(PRESETS_DIR)
    }

    pub fn libraries_dir(&self) -> PathBuf {
        self.root.join(LIBRARIES_DIR)
    }

    pub fn preset_file(&self, local_preset: &str) -> PathBuf {
        self.presets_dir().join(format!("{}.yaml", local_preset))
    }

    pub fn library_file(&self, library_name: &str) -> PathBuf {
        self.libraries_dir().join(library_name)
    }
}

pub struct PrepareParams {
    pub path_mixcr: PathBuf,
    pub path_reference: PathBuf,
    pub home: MixcrHome,
    pub analysis: AnalysisSettings,
}

/// Arguments for `mixcr exportPreset`; -f overwrites an existing preset file
pub fn export_preset_args(home: &MixcrHome, analysis: &AnalysisSettings) -> Vec<OsString> {
    vec![
        "exportPreset".into(),
        "--preset-name".into(),
        analysis.preset_name.clone().into(),
        "-f".into(),
        "-s".into(),
        analysis.species.clone().into(),
        home.preset_file(&analysis.local_preset).into(),
    ]
}

pub fn create_dir(path: &Path) -> Result<(), Error> {
    fs::create_dir_all(path).map_err(|e| Error::environment("create directory", path, &e))
}

/// Copy the reference library into the MiXCR library directory under its fixed name. Returns the destination
pub fn install_library(
    path_reference: &Path,
    home: &MixcrHome,
    library_name: &str,
) -> Result<PathBuf, Error> {
    let dest = home.library_file(library_name);
    fs::copy(path_reference, &dest)
        .map_err(|e| Error::environment("copy reference library to", &dest, &e))?;
    Ok(dest)
}

/// Sets up `~/.mixcr` so that the local preset and library can be referred to by name
pub struct Prepare {}
impl Prepare {
    pub fn run(params: &PrepareParams) -> Result<(), Error> {
        create_dir(&params.home.presets_dir())?;

        let mut cmd = Command::new(&params.path_mixcr);
        cmd.args(export_preset_args(&params.home, &params.analysis));
        let output = run_utility("build presets", &mut cmd)?;
        println!("Output of build presets command:\n{}", output);

        create_dir(&params.home.libraries_dir())?;
        let dest = install_library(
            &params.path_reference,
            &params.home,
            &params.analysis.library_name,
        )?;
        info!("Installed reference library as {:?}", dest);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_home_layout() {
        let home = MixcrHome::new(Path::new("/home/alice"));
        assert_eq!(home.root(), Path::new("/home/alice/.mixcr"));
        assert_eq!(
            home.preset_file("bd_rabbit_bcr"),
            PathBuf::from("/home/alice/.mixcr/presets/bd_rabbit_bcr.yaml")
        );
        assert_eq!(
            home.library_file("imgt.202312-3.sv8_rabbit.json"),
            PathBuf::from("/home/alice/.mixcr/libraries/imgt.202312-3.sv8_rabbit.json")
        );
    }

    #[test]
    fn test_export_preset_args_default() {
        let home = MixcrHome::new(Path::new("/home/alice"));
        let args = export_preset_args(&home, &AnalysisSettings::default());
        let expected: Vec<OsString> = vec![
            "exportPreset".into(),
            "--preset-name".into(),
            "bd-sc-xcr-rhapsody-full-length".into(),
            "-f".into(),
            "-s".into(),
            "rabbit".into(),
            "/home/alice/.mixcr/presets/bd_rabbit_bcr.yaml".into(),
        ];
        assert_eq!(args, expected);
    }

    #[test]
    fn test_export_preset_args_only_depend_on_home() {
        let analysis = AnalysisSettings::default();
        let a = export_preset_args(&MixcrHome::new(Path::new("/home/a")), &analysis);
        let a_again = export_preset_args(&MixcrHome::new(Path::new("/home/a")), &analysis);
        let b = export_preset_args(&MixcrHome::new(Path::new("/home/b")), &analysis);
        assert_eq!(a, a_again);
        assert_ne!(a, b);
        assert_eq!(&a[..6], &b[..6]);
    }

    #[test]
    fn test_install_library_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let home = MixcrHome::new(dir.path());
        create_dir(&home.libraries_dir()).unwrap();

        let reference = dir.path().join("imgt.json");
        fs::write(&reference, "{\"v\": 2}").unwrap();
        fs::write(home.library_file("lib.json"), "old").unwrap();

        let dest = install_library(&reference, &home, "lib.json").unwrap();
        assert_eq!(dest, home.library_file("lib.json"));
        assert_eq!(fs::read_to_string(dest).unwrap(), "{\"v\": 2}");
    }

    #[test]
    fn test_install_library_without_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let home = MixcrHome::new(dir.path());
        let reference = dir.path().join("imgt.json");
        fs::write(&reference, "{}").unwrap();

        let err = install_library(&reference, &home, "lib.json").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_prepare_with_failing_tool_stops_before_library() {
        let dir = tempfile::tempdir().unwrap();
        let home = MixcrHome::new(dir.path());
        let reference = dir.path().join("imgt.json");
        fs::write(&reference, "{}").unwrap();

        let params = PrepareParams {
            path_mixcr: PathBuf::from("false"),
            path_reference: reference,
            home: home.clone(),
            analysis: AnalysisSettings::default(),
        };
        let err = Prepare::run(&params).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(home.presets_dir().is_dir());
        assert!(!home.libraries_dir().exists());
    }
}
