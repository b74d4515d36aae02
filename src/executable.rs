use std::path::Path;

/// Returns true when `path` is a regular file the current process may run.
///
/// Symlinks are followed. Any error while inspecting `path` counts as "not
/// executable".
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use rustix::fs::{accessat, Access, AtFlags, CWD};
    use std::os::unix::fs::PermissionsExt;

    let Ok(metadata) = path.metadata() else {
        return false;
    };
    if !metadata.is_file() || metadata.permissions().mode() & 0o111 == 0 {
        return false;
    }
    // checked against the effective uid/gid
    accessat(CWD, path, Access::EXEC_OK, AtFlags::EACCESS).is_ok()
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(all(test, unix))]
mod test {
    use std::fs::{self, File, Permissions};
    use std::os::unix::fs::PermissionsExt;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn executable_file() -> anyhow::Result<()> {
        let tmp_dir = tempdir()?;
        let path = tmp_dir.path().join("tool");
        File::create(&path)?;
        fs::set_permissions(&path, Permissions::from_mode(0o755))?;

        assert!(is_executable(&path));
        Ok(())
    }

    #[test]
    fn regular_file_without_execute_bit() -> anyhow::Result<()> {
        let tmp_dir = tempdir()?;
        let path = tmp_dir.path().join("tool");
        File::create(&path)?;
        fs::set_permissions(&path, Permissions::from_mode(0o644))?;

        assert!(!is_executable(&path));
        Ok(())
    }

    #[test]
    fn directory_is_not_executable() -> anyhow::Result<()> {
        let tmp_dir = tempdir()?;
        let path = tmp_dir.path().join("tool");
        fs::create_dir(&path)?;

        assert!(!is_executable(&path));
        Ok(())
    }

    #[test]
    fn missing_file() -> anyhow::Result<()> {
        let tmp_dir = tempdir()?;
        assert!(!is_executable(&tmp_dir.path().join("missing")));
        Ok(())
    }

    #[test]
    fn symlink_to_executable() -> anyhow::Result<()> {
        let tmp_dir = tempdir()?;
        let target = tmp_dir.path().join("real");
        File::create(&target)?;
        fs::set_permissions(&target, Permissions::from_mode(0o755))?;
        let link = tmp_dir.path().join("tool");
        std::os::unix::fs::symlink(&target, &link)?;

        assert!(is_executable(&link));
        Ok(())
    }

    #[test]
    fn dangling_symlink() -> anyhow::Result<()> {
        let tmp_dir = tempdir()?;
        let link = tmp_dir.path().join("tool");
        std::os::unix::fs::symlink(tmp_dir.path().join("missing"), &link)?;

        assert!(!is_executable(&link));
        Ok(())
    }
}
