//! Finding a usable engine executable.
//!
//! Probe order: explicit override, local build under the working directory,
//! build next to the running binary, then every `PATH` entry. The first
//! candidate that is a regular, executable file wins.

use std::env;
use std::fs::Metadata;
use std::path::{Path, PathBuf};

use tracing::debug;

pub const ENGINE_BINARY: &str = "gnubg";

/// `./gnubg/gnubg`, where the setup helper leaves its build.
pub fn local_build_path() -> Option<PathBuf> {
    env::current_dir()
        .ok()
        .map(|cwd| cwd.join(ENGINE_BINARY).join(ENGINE_BINARY))
}

/// `<binary dir>/../gnubg/gnubg`.
fn relative_build_path() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let dir = exe.parent()?;
    Some(dir.join("..").join(ENGINE_BINARY).join(ENGINE_BINARY))
}

fn search_path() -> Vec<PathBuf> {
    env::var_os("PATH")
        .map(|paths| {
            env::split_paths(&paths)
                .map(|dir| dir.join(ENGINE_BINARY))
                .collect()
        })
        .unwrap_or_default()
}

/// Every location probed, in order.
pub fn candidate_paths(override_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = override_path.map(Path::to_path_buf).into_iter().collect();
    candidates.extend(local_build_path());
    candidates.extend(relative_build_path());
    candidates.extend(search_path());
    candidates
}

pub fn locate_engine(override_path: Option<&Path>) -> Option<PathBuf> {
    first_executable(candidate_paths(override_path))
}

pub fn first_executable<I>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let found = candidates.into_iter().find(|path| is_executable_file(path));
    debug!(found = ?found, "Engine executable probe finished");
    found
}

pub fn is_executable_file(path: &Path) -> bool {
    let Ok(meta) = path.metadata() else {
        return false;
    };
    meta.is_file() && has_exec_bit(&meta)
}

#[cfg(unix)]
fn has_exec_bit(meta: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn has_exec_bit(_meta: &Metadata) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_and_directory_candidates_are_rejected() {
        let dir = tempfile::tempdir().unwrap();

        assert!(!is_executable_file(&dir.path().join("absent")));
        assert!(!is_executable_file(dir.path()));
        assert_eq!(first_executable(vec![dir.path().join("absent")]), None);
    }

    #[cfg(unix)]
    #[test]
    fn first_executable_candidate_wins() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain");
        let first = dir.path().join("first");
        let second = dir.path().join("second");
        for path in [&plain, &first, &second] {
            fs::write(path, "#!/bin/sh\n").unwrap();
        }
        fs::set_permissions(&plain, fs::Permissions::from_mode(0o644)).unwrap();
        fs::set_permissions(&first, fs::Permissions::from_mode(0o755)).unwrap();
        fs::set_permissions(&second, fs::Permissions::from_mode(0o755)).unwrap();

        let found = first_executable(vec![plain.clone(), first.clone(), second]);

        assert!(!is_executable_file(&plain));
        assert_eq!(found, Some(first));
    }

    #[test]
    fn override_is_probed_first() {
        let custom = PathBuf::from("/opt/engines/gnubg");
        let candidates = candidate_paths(Some(&custom));

        assert_eq!(candidates.first(), Some(&custom));
        assert!(candidates.len() >= 2);
    }
}
