//! The backing file: an ordered sequence of raw lines.
//!
//! The line sequence, not the index built over it, is the ground truth
//! for rewrites. Lines that fail UTF-8 decoding are carried as opaque
//! bytes so an externally-edited file survives an engine rewrite intact.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use smol_str::SmolStr;

use crate::constants::UTF8_BOM;

/// One raw line of the backing file.
#[derive(Debug, Clone)]
pub enum Line {
    /// A line that decoded as UTF-8 and contributes one dictionary word
    Word(SmolStr),
    /// A line with invalid UTF-8, kept byte for byte for rewrite
    Malformed(Vec<u8>),
}

/// An on-disk word list, one word per line.
///
/// Mutations reconcile the file before they touch the in-memory line
/// sequence, so a failed write leaves both the file and the sequence in
/// their pre-call state.
#[derive(Debug, Default)]
pub struct WordlistFile {
    path: Option<PathBuf>,
    bom: bool,
    lines: Vec<Line>,
}

impl WordlistFile {
    /// Opens and parses a word list file.
    ///
    /// A missing file yields an empty list; it is created on first append.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<WordlistFile> {
        let path = path.as_ref().to_path_buf();
        let (bom, lines) = match fs::read(&path) {
            Ok(bytes) => parse(&bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => (false, vec![]),
            Err(e) => return Err(e),
        };
        Ok(WordlistFile {
            path: Some(path),
            bom,
            lines,
        })
    }

    /// A word list with no backing file; mutations skip persistence.
    pub fn in_memory() -> WordlistFile {
        WordlistFile::default()
    }

    /// Re-reads the file, replacing the line sequence wholesale.
    ///
    /// This is how externally-made edits become visible. A no-op for an
    /// in-memory list.
    pub fn reload(&mut self) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let (bom, lines) = match fs::read(path) {
            Ok(bytes) => parse(&bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => (false, vec![]),
            Err(e) => return Err(e),
        };
        self.bom = bom;
        self.lines = lines;
        Ok(())
    }

    /// The current line sequence, in file order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Appends `word` as a new final line and flushes it durably.
    pub fn append(&mut self, word: &str) -> io::Result<()> {
        if let Some(path) = &self.path {
            let mut file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let mut line = Vec::with_capacity(word.len() + 1);
            line.extend_from_slice(word.as_bytes());
            line.push(b'\n');
            file.write_all(&line)?;
            file.sync_all()?;
        }
        self.lines.push(Line::Word(SmolStr::new(word)));
        Ok(())
    }

    /// Removes the line at `index`, rewriting the file without it.
    ///
    /// Every other line keeps its byte content and position. A leading
    /// byte-order mark is dropped only when the first line is the one
    /// removed.
    pub fn remove_line(&mut self, index: usize) -> io::Result<()> {
        let bom = self.bom && index != 0;
        if let Some(path) = &self.path {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
            if bom {
                tmp.write_all(UTF8_BOM)?;
            }
            for (i, line) in self.lines.iter().enumerate() {
                if i == index {
                    continue;
                }
                match line {
                    Line::Word(word) => tmp.write_all(word.as_bytes())?,
                    Line::Malformed(bytes) => tmp.write_all(bytes)?,
                }
                tmp.write_all(b"\n")?;
            }
            tmp.as_file().sync_all()?;
            tmp.persist(path).map_err(|e| e.error)?;
        }
        self.bom = bom;
        self.lines.remove(index);
        Ok(())
    }
}

/// Splits raw file bytes into retained lines.
///
/// Accepts CR, LF, and CRLF terminators. A UTF-8 byte-order mark is
/// stripped from the head of the first line only, and reported back as
/// the returned flag. Empty lines are skipped, not stored.
pub fn parse(bytes: &[u8]) -> (bool, Vec<Line>) {
    let (bom, rest) = match bytes.strip_prefix(UTF8_BOM) {
        Some(rest) => (true, rest),
        None => (false, bytes),
    };

    let mut lines = Vec::new();
    for (n, raw) in split_lines(rest).into_iter().enumerate() {
        if raw.is_empty() {
            continue;
        }
        match std::str::from_utf8(raw) {
            Ok(word) => lines.push(Line::Word(SmolStr::new(word))),
            Err(_) => {
                log::warn!("skipping malformed line {} ({} bytes)", n + 1, raw.len());
                lines.push(Line::Malformed(raw.to_vec()));
            }
        }
    }
    (bom, lines)
}

fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                out.push(&bytes[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                out.push(&bytes[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        out.push(&bytes[start..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(lines: &[Line]) -> Vec<&str> {
        lines
            .iter()
            .filter_map(|l| match l {
                Line::Word(w) => Some(w.as_str()),
                Line::Malformed(_) => None,
            })
            .collect()
    }

    #[test]
    fn splits_all_terminators() {
        let (_, lines) = parse(b"cat\nhat\r\nthat\rbat");
        assert_eq!(words(&lines), vec!["cat", "hat", "that", "bat"]);
    }

    #[test]
    fn skips_empty_lines() {
        let (_, lines) = parse(b"cat\n\n\nhat\n");
        assert_eq!(words(&lines), vec!["cat", "hat"]);
    }

    #[test]
    fn strips_leading_bom() {
        let (bom, lines) = parse(b"\xef\xbb\xbfcat\nhat");
        assert!(bom);
        assert_eq!(words(&lines), vec!["cat", "hat"]);
    }

    #[test]
    fn bom_bytes_mid_file_are_content() {
        let (bom, lines) = parse(b"cat\n\xef\xbb\xbfhat");
        assert!(!bom);
        assert_eq!(words(&lines), vec!["cat", "\u{feff}hat"]);
    }

    #[test]
    fn malformed_line_kept_in_place() {
        let (_, lines) = parse(b"cat\n\xa5\xf1\x08\nhat");
        assert_eq!(lines.len(), 3);
        assert!(matches!(&lines[1], Line::Malformed(b) if b == b"\xa5\xf1\x08"));
        assert_eq!(words(&lines), vec!["cat", "hat"]);
    }

    #[test]
    fn append_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qaa.dic");

        let mut file = WordlistFile::open(&path).unwrap();
        assert!(file.lines().is_empty());

        file.append("cat").unwrap();
        file.append("hat").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"cat\nhat\n");
    }

    #[test]
    fn remove_line_preserves_neighbors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qaa.dic");
        fs::write(&path, b"cat\nhat\nthat\n").unwrap();

        let mut file = WordlistFile::open(&path).unwrap();
        file.remove_line(1).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"cat\nthat\n");
        assert_eq!(words(file.lines()), vec!["cat", "that"]);
    }

    #[test]
    fn remove_line_keeps_malformed_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qaa.dic");
        fs::write(&path, b"cat\n\xa5\xf1\x08\nhat\n").unwrap();

        let mut file = WordlistFile::open(&path).unwrap();
        file.remove_line(2).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"cat\n\xa5\xf1\x08\n");
    }

    #[test]
    fn remove_first_line_drops_bom_with_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qaa.dic");
        fs::write(&path, b"\xef\xbb\xbfhello\ncat\nhat\n").unwrap();

        let mut file = WordlistFile::open(&path).unwrap();
        file.remove_line(0).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"cat\nhat\n");
    }

    #[test]
    fn remove_other_line_keeps_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qaa.dic");
        fs::write(&path, b"\xef\xbb\xbfhello\ncat\nhat\n").unwrap();

        let mut file = WordlistFile::open(&path).unwrap();
        file.remove_line(1).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"\xef\xbb\xbfhello\nhat\n");
    }

    #[test]
    fn in_memory_mutations_touch_no_disk() {
        let mut file = WordlistFile::in_memory();
        file.append("cat").unwrap();
        file.append("hat").unwrap();
        file.remove_line(0).unwrap();
        assert_eq!(words(file.lines()), vec!["hat"]);
    }
}
