use super::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Output written to a temporary file beside its destination and moved over it
/// by [`Staged::commit`]. Dropping it uncommitted leaves the destination as it was.
pub(super) struct Staged {
    file: NamedTempFile,
    target: PathBuf,
}

impl Staged {
    pub(super) fn write<F>(target: &Path, write: F) -> Result<Self, Error>
    where
        F: FnOnce(BufWriter<&mut File>) -> Result<(), crate::io::Error>,
    {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir).map_err(|e| Error::file(dir, e))?;
        write(BufWriter::new(file.as_file_mut()))?;
        Ok(Self {
            file,
            target: target.to_path_buf(),
        })
    }

    pub(super) fn commit(self) -> Result<(), Error> {
        let Self { file, target } = self;
        file.persist(&target).map_err(|e| Error::file(&target, e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    fn entries(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn commit_replaces_the_destination() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("ranked_0.pdb");
        fs::write(&target, "old\n").unwrap();

        let staged = Staged::write(&target, |mut w| {
            writeln!(w, "new")?;
            w.flush()?;
            Ok(())
        })
        .unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "old\n");

        staged.commit().unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new\n");
        assert_eq!(entries(dir.path()), 1);
    }

    #[test]
    fn failed_write_leaves_the_destination_intact() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("ranked_0.pdb");
        fs::write(&target, "ATOM\n").unwrap();

        let result = Staged::write(&target, |mut w| {
            writeln!(w, "partial")?;
            Err(crate::io::Error::parse(crate::io::Format::Pdb, 1, "interrupted"))
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&target).unwrap(), "ATOM\n");
        assert_eq!(entries(dir.path()), 1);
    }

    #[test]
    fn uncommitted_output_is_discarded() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("table.tsv");

        let staged = Staged::write(&target, |_| Ok(())).unwrap();
        drop(staged);

        assert!(!target.exists());
        assert_eq!(entries(dir.path()), 0);
    }
}
