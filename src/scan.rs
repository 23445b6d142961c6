use regex::bytes::Regex;
use walkdir::{DirEntry, WalkDir};
use crate::helpers::*;


/// Walks a directory tree lazily, yielding every `map_<id>.dat` file.
/// Order follows the file system and is not stable.
pub struct Map_file_scanner {
	walker: walkdir::IntoIter,
	matcher: Regex,
}

impl Map_file_scanner {
	pub fn new(root: &Path) -> Result<Self> {
		Ok(Map_file_scanner {
			walker: WalkDir::new(root).into_iter(),
			matcher: Regex::new(r"^map_(.*)\.dat$")?,
		})
	}

	// names are matched as raw bytes, they need not be UTF-8
	fn is_map_file(&self, entry: &DirEntry) -> bool {
		let file_type = entry.file_type();
		let is_file = file_type.is_file()
			|| (file_type.is_symlink() && entry.path().is_file());
		is_file && self.matcher.is_match(entry.file_name().as_encoded_bytes())
	}
}

impl Iterator for Map_file_scanner {
	type Item = Result<PathBuf>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			match self.walker.next()? {
				Ok(entry) => if self.is_map_file(&entry) {
					return Some(Ok(entry.into_path()));
				},
				Err(error) => {
					let location = error.path()
						.map(|path| path.display().to_string())
						.unwrap_or_default();
					return Some(Err(anyhow::Error::from(error)
						.context(format!("Could not scan {location}"))));
				},
			}
		}
	}
}
