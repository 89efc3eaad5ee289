use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const DESKTOP_FILE: &str = "krishimitra.desktop";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

impl InstallOutcome {
    pub fn label(self) -> &'static str {
        match self {
            InstallOutcome::Accepted => "accepted",
            InstallOutcome::Dismissed => "dismissed",
        }
    }
}

/// Where the launcher entry lives for the current user.
pub fn desktop_entry_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("applications").join(DESKTOP_FILE))
}

/// The app counts as installable while no launcher entry exists.
pub fn installable_at(path: &Path) -> bool {
    !path.exists()
}

pub fn detect() -> Option<PathBuf> {
    desktop_entry_path().filter(|path| installable_at(path))
}

fn entry_contents(exec: &Path) -> String {
    format!(
        "[Desktop Entry]\n\
         Type=Application\n\
         Name=KrishiMitra\n\
         Comment=Smart Farming Assistant\n\
         Exec={}\n\
         Terminal=true\n\
         Categories=Utility;Education;\n",
        exec.display()
    )
}

/// Writes the launcher entry pointing at `exec`.
pub fn install(path: &Path, exec: &Path) -> io::Result<InstallOutcome> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(entry_contents(exec).as_bytes())?;
    Ok(InstallOutcome::Accepted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_writes_entry_and_clears_installable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("applications").join(DESKTOP_FILE);
        assert!(installable_at(&path));

        let outcome = install(&path, Path::new("/usr/bin/krishimitra")).unwrap();
        assert_eq!(outcome, InstallOutcome::Accepted);
        assert!(!installable_at(&path));

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[Desktop Entry]"));
        assert!(written.contains("Exec=/usr/bin/krishimitra"));
    }

    #[test]
    fn test_entry_path_ends_with_desktop_file() {
        if let Some(path) = desktop_entry_path() {
            assert!(path.ends_with("applications/krishimitra.desktop"));
        }
    }
}
