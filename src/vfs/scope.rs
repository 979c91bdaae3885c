use crate::core::utils;
use crate::error::Result;

use super::fake_fs::FakeFs;
use super::options::{DirOptions, FileContent};

/// Builder returned by [`FakeFs::at`]: the same building operations as
/// [`FakeFs`], with every path resolved under a fixed prefix.
#[derive(Debug)]
pub struct Scope<'a> {
    fs: &'a mut FakeFs,
    prefix: String,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(fs: &'a mut FakeFs, prefix: &str) -> Self {
        Self {
            fs,
            prefix: prefix.to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// See [`FakeFs::dir`].
    pub fn dir(&mut self, path: &str) -> Result<&mut Self> {
        self.fs.dir(&utils::join(&self.prefix, path))?;
        Ok(self)
    }

    /// See [`FakeFs::dir_with`].
    pub fn dir_with(&mut self, path: &str, options: DirOptions) -> Result<&mut Self> {
        self.fs.dir_with(&utils::join(&self.prefix, path), options)?;
        Ok(self)
    }

    /// See [`FakeFs::file`].
    pub fn file(&mut self, path: &str, content: impl Into<FileContent>) -> Result<&mut Self> {
        self.fs.file(&utils::join(&self.prefix, path), content)?;
        Ok(self)
    }

    /// See [`FakeFs::touch`].
    pub fn touch(&mut self, path: &str) -> Result<&mut Self> {
        self.fs.touch(&utils::join(&self.prefix, path))?;
        Ok(self)
    }

    /// Narrows the scope further: `fs.at("a").at("b")` builds under `a/b`.
    pub fn at(&mut self, prefix: &str) -> Scope<'_> {
        let prefix = utils::join(&self.prefix, prefix);
        Scope::new(&mut *self.fs, &prefix)
    }

    /// Gives back the whole file system.
    pub fn fs(&mut self) -> &mut FakeFs {
        &mut *self.fs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::{Duration, SystemTime};

    use crate::core::Filesystem;
    use crate::encoding::Encoding;

    #[test]
    fn test_at_prefixes_paths() -> Result<()> {
        let mut fs = FakeFs::new();
        fs.at("home").touch(".gitignore")?.dir(".local")?;

        assert!(fs.stat_sync("home/.gitignore")?.is_file());
        assert!(fs.stat_sync("home/.local")?.is_dir());
        Ok(())
    }

    #[test]
    fn test_at_equivalent_to_full_paths() -> Result<()> {
        let mut scoped = FakeFs::new();
        scoped.at("home").touch(".gitignore")?.dir(".local")?;

        let mut plain = FakeFs::new();
        plain.touch("home/.gitignore")?.dir("home/.local")?;

        assert_eq!(scoped, plain);
        Ok(())
    }

    #[test]
    fn test_at_file_content_and_options() -> Result<()> {
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_millis(42);
        let mut fs = FakeFs::new();
        fs.at("/srv/")
            .file("index.html", ("<p>hi</p>", Encoding::Utf8))?
            .dir_with("logs", DirOptions::new().mtime(mtime))?;

        assert_eq!(fs.read_file_sync("srv/index.html")?, b"<p>hi</p>");
        assert_eq!(fs.stat_sync("srv/logs")?.mtime, mtime);
        Ok(())
    }

    #[test]
    fn test_nested_at() -> Result<()> {
        let mut fs = FakeFs::new();
        let mut home = fs.at("home");
        home.at("user").touch(".bashrc")?;
        home.touch(".profile")?;
        assert_eq!(home.prefix(), "home");

        assert_eq!(fs.readdir_sync("home")?, vec!["user", ".profile"]);
        assert!(fs.stat_sync("home/user/.bashrc")?.is_file());
        Ok(())
    }

    #[test]
    fn test_at_root_path_targets_prefix() -> Result<()> {
        let mut fs = FakeFs::new();
        fs.at("a/b").dir(".")?;
        assert!(fs.stat_sync("a/b")?.is_dir());
        Ok(())
    }

    #[test]
    fn test_scope_gives_back_fs() -> Result<()> {
        let mut fs = FakeFs::new();
        let mut scope = fs.at("x");
        scope.touch("y")?;
        scope.fs().touch("z")?;

        assert_eq!(fs.readdir_sync("")?, vec!["x", "z"]);
        Ok(())
    }

    #[test]
    fn test_scope_errors_propagate() -> Result<()> {
        let mut fs = FakeFs::new();
        fs.touch("file")?;
        assert!(fs.at("file").touch("inner").is_err());
        Ok(())
    }
}
