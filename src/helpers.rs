pub use std::path::{Path, PathBuf};
pub use anyhow::{anyhow, Context, Result};

pub const data_directory_name: &str = "data";
pub const maps_directory_name: &str = "maps";
pub const legacy_state_file_name: &str = "overviewer.dat";
pub const poi_index_file_name: &str = "overviewer.json";

/// Maps carry no height, every marker is placed at this y.
pub const poi_height: i32 = 60;
/// Newer map files omit `width`/`height`, the game always uses 128.
pub const default_map_side: i32 = 128;


pub fn ascertain_directory_exists(path: &Path) -> Result<()> {
	if !std::fs::exists(path)? {
		std::fs::create_dir(path)
			.with_context(|| format!("Could not create {}", path.display()))?;
	}
	else if !path.is_dir() {
		return Err(anyhow!("{} exists but is not a directory", path.display()));
	}
	return Ok(());
}
