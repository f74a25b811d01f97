/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Providers of raw benchmark files.
//!
//! The readers only need a readable stream per file. Downloading,
//! unpacking and storing the benchmark archives is left to the
//! implementations of [`Source`]. Files are addressed by a key, a relative
//! path like `orlib/gap1.txt` (see [`crate::fetch`] for the conventions).

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Cursor, Read};
use std::path::PathBuf;

use tracing::debug;

/// A provider of raw benchmark files.
pub trait Source {
    type Reader: Read;

    /// Open the file with the given key.
    fn open(&self, key: &str) -> io::Result<Self::Reader>;

    /// Return the names of all files in the directory `dir` in sorted order.
    ///
    /// The key of a returned file `name` is `{dir}/{name}`. This is needed
    /// for reading complete sets of multi-file libraries.
    fn list(&self, dir: &str) -> io::Result<Vec<String>> {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("listing directory '{}' is not supported", dir),
        ))
    }
}

impl<'a, S> Source for &'a S
where
    S: Source,
{
    type Reader = S::Reader;

    fn open(&self, key: &str) -> io::Result<Self::Reader> {
        (**self).open(key)
    }

    fn list(&self, dir: &str) -> io::Result<Vec<String>> {
        (**self).list(dir)
    }
}

/// Files stored below some root directory.
///
/// The key is interpreted as a path relative to the root.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        DirSource { root: root.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        key.split('/').fold(self.root.clone(), |path, part| path.join(part))
    }
}

impl Source for DirSource {
    type Reader = File;

    fn open(&self, key: &str) -> io::Result<File> {
        let path = self.path(key);
        debug!(path = %path.display(), "opening benchmark file");
        File::open(path)
    }

    fn list(&self, dir: &str) -> io::Result<Vec<String>> {
        let mut names = vec![];
        for entry in fs::read_dir(self.path(dir))? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Files held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Default::default()
    }

    /// Add (or replace) a file.
    pub fn insert<K, D>(&mut self, key: K, data: D)
    where
        K: Into<String>,
        D: Into<Vec<u8>>,
    {
        self.files.insert(key.into(), data.into());
    }

    /// Add a file, builder style.
    pub fn with<K, D>(mut self, key: K, data: D) -> Self
    where
        K: Into<String>,
        D: Into<Vec<u8>>,
    {
        self.insert(key, data);
        self
    }
}

impl Source for MemorySource {
    type Reader = Cursor<Vec<u8>>;

    fn open(&self, key: &str) -> io::Result<Cursor<Vec<u8>>> {
        self.files
            .get(key)
            .map(|data| Cursor::new(data.clone()))
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no such file: {}", key)))
    }

    fn list(&self, dir: &str) -> io::Result<Vec<String>> {
        let prefix = format!("{}/", dir);
        let mut names = self
            .files
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .filter(|name| !name.contains('/'))
            .map(str::to_string)
            .collect::<Vec<_>>();
        if names.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", dir),
            ));
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::{DirSource, MemorySource, Source};
    use std::io::{ErrorKind, Read};

    #[test]
    fn memory_source() {
        let src = MemorySource::new().with("a/b.txt", "1 2 3\n");
        let mut content = String::new();
        src.open("a/b.txt").unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "1 2 3\n");

        match src.open("a/c.txt") {
            Err(err) => assert_eq!(err.kind(), ErrorKind::NotFound),
            Ok(_) => panic!("file must not exist"),
        }
    }

    #[test]
    fn list_files() {
        let src = MemorySource::new()
            .with("pisa/grid/grid2", "")
            .with("pisa/grid/grid1", "")
            .with("pisa/grid/sub/x", "")
            .with("pisa/planar/planar30", "");
        assert_eq!(src.list("pisa/grid").unwrap(), vec!["grid1", "grid2"]);
        assert_eq!(src.list("pisa/planar").unwrap(), vec!["planar30"]);
        assert_eq!(src.list("pisa/none").unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn dir_source() {
        let root = std::env::temp_dir().join(format!("or-datasets-source-{}", std::process::id()));
        std::fs::create_dir_all(root.join("orlib")).unwrap();
        std::fs::write(root.join("orlib").join("rcsp1.txt"), "1 0 0\n").unwrap();
        std::fs::write(root.join("orlib").join("gap1.txt"), "0\n").unwrap();

        let src = DirSource::new(&root);
        let mut content = String::new();
        src.open("orlib/rcsp1.txt").unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "1 0 0\n");
        assert_eq!(src.list("orlib").unwrap(), vec!["gap1.txt", "rcsp1.txt"]);
        assert!(src.open("orlib/rcsp2.txt").is_err());

        std::fs::remove_dir_all(&root).unwrap();
    }
}
