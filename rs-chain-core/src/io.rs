use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Path standing for the standard input in sample file lists.
pub const STDIN_PATH: &str = "-";

/// Reads a whole sample into memory.
///
/// - `"-"` reads the standard input until end of stream
/// - Any other path is read as a UTF-8 text file
pub fn read_sample<P: AsRef<Path>>(path: P) -> io::Result<String> {
	let path = path.as_ref();
	let mut contents = String::new();
	if path == Path::new(STDIN_PATH) {
		io::stdin().lock().read_to_string(&mut contents)?;
	} else {
		File::open(path)?.read_to_string(&mut contents)?;
	}
	Ok(contents)
}

/// Reads every sample of a path list, in order.
///
/// Stops at the first file that cannot be read.
pub fn read_samples<I, P>(paths: I) -> io::Result<Vec<String>>
where
	I: IntoIterator<Item = P>,
	P: AsRef<Path>,
{
	paths.into_iter().map(read_sample).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn reads_files_in_order() {
		let dir = tempfile::tempdir().unwrap();
		let first = dir.path().join("first.txt");
		let second = dir.path().join("second.txt");
		fs::write(&first, "One fish.").unwrap();
		fs::write(&second, "Two fish.").unwrap();

		let samples = read_samples([&first, &second]).unwrap();
		assert_eq!(samples, vec!["One fish.".to_owned(), "Two fish.".to_owned()]);
	}

	#[test]
	fn missing_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = read_sample(dir.path().join("missing.txt")).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::NotFound);
	}
}
