use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the file line by line
/// - Splits on `\n` / `\r\n`
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let reader = BufReader::new(File::open(filename)?);
	reader.lines().collect()
}

/// Writes each string on its own line.
///
/// - `append = true` adds to the end of an existing file
/// - `append = false` truncates the file first
/// - The file is created if missing
pub fn write_lines<P, S>(filename: P, lines: &[S], append: bool) -> io::Result<()>
where
	P: AsRef<Path>,
	S: AsRef<str>,
{
	let file = OpenOptions::new()
		.create(true)
		.write(true)
		.append(append)
		.truncate(!append)
		.open(filename)?;

	let mut writer = BufWriter::new(file);
	for line in lines {
		writer.write_all(line.as_ref().as_bytes())?;
		writer.write_all(b"\n")?;
	}
	writer.flush()
}

/// Name under which a corpus file is listed and loaded: its file stem.
///
/// `data/election.csv` is the corpus `election`.
///
/// # Errors
/// Returns `InvalidInput` if the path ends in `..` or is empty.
pub fn corpus_name<P: AsRef<Path>>(corpus_path: P) -> io::Result<String> {
	match corpus_path.as_ref().file_stem() {
		Some(stem) => Ok(stem.to_string_lossy().into_owned()),
		None => Err(io::Error::new(io::ErrorKind::InvalidInput, "corpus path has no file name")),
	}
}

/// Resolves the corpus directory given on the command line.
///
/// The current directory (`.`) is made absolute so that log lines show where
/// corpora are read from; any other path is kept as given.
pub fn resolve_data_dir(dir: &str) -> PathBuf {
	match dir {
		"." | "./" => env::current_dir().unwrap_or_else(|_| PathBuf::from(dir)),
		_ => PathBuf::from(dir),
	}
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn write_then_read_lines() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("out.txt");
		write_lines(&path, &["first tweet.", "second tweet!"], false).unwrap();
		assert_eq!(read_file(&path).unwrap(), vec!["first tweet.", "second tweet!"]);
	}

	#[test]
	fn append_keeps_previous_lines() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("out.txt");
		write_lines(&path, &["one"], false).unwrap();
		write_lines(&path, &["two"], true).unwrap();
		assert_eq!(read_file(&path).unwrap(), vec!["one", "two"]);
	}

	#[test]
	fn overwrite_replaces_previous_lines() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("out.txt");
		write_lines(&path, &["one", "two", "three"], false).unwrap();
		write_lines(&path, &["four"], false).unwrap();
		assert_eq!(read_file(&path).unwrap(), vec!["four"]);
	}

	#[test]
	fn read_missing_file_fails() {
		let dir = tempfile::tempdir().unwrap();
		assert!(read_file(dir.path().join("missing.csv")).is_err());
	}

	#[test]
	fn corpus_name_is_the_file_stem() {
		assert_eq!(corpus_name("./data/election.csv").unwrap(), "election");
		assert_eq!(corpus_name("election.csv").unwrap(), "election");
		assert_eq!(corpus_name("data/election").unwrap(), "election");
		assert!(corpus_name("data/..").is_err());
	}

	#[test]
	fn data_dir_is_kept_unless_current() {
		assert_eq!(resolve_data_dir("corpora/tweets"), PathBuf::from("corpora/tweets"));
		assert_eq!(resolve_data_dir("."), env::current_dir().unwrap());
	}

	#[test]
	fn list_files_filters_by_extension() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.csv"), "").unwrap();
		fs::write(dir.path().join("a.csv"), "").unwrap();
		fs::write(dir.path().join("notes.txt"), "").unwrap();
		fs::create_dir(dir.path().join("nested.csv")).unwrap();
		assert_eq!(list_files(dir.path(), "csv").unwrap(), vec!["a.csv", "b.csv"]);
	}
}
