use tracing::{debug, info};
use crate::{
	helpers::*,
	map_record::load_map_record,
	poi::Poi_record,
	render::{rasterize, write_map_png},
	scan::Map_file_scanner,
};


pub struct Extraction_paths {
	pub data_directory: PathBuf,
	pub output_directory: PathBuf,
	pub maps_directory: PathBuf,
}


/// Checks every input location before touching the output directory.
pub fn prepare_paths(world_directory: &Path, output_directory: &Path) -> Result<Extraction_paths> {
	if !world_directory.exists() {
		return Err(anyhow!("Bad WorldDir"));
	}
	let data_directory = world_directory.join(data_directory_name);
	if !data_directory.is_dir() {
		return Err(anyhow!("Bad WorldDir or no maps crafted"));
	}
	println!("Scanning for maps in {}", data_directory.display());

	if !output_directory.is_dir() {
		return Err(anyhow!("Bad OutputDir"));
	}
	let maps_directory = output_directory.join(maps_directory_name);
	ascertain_directory_exists(&maps_directory)?;

	Ok(Extraction_paths {
		data_directory,
		output_directory: output_directory.to_path_buf(),
		maps_directory,
	})
}


/// Renders every map under the data directory. Stops at the first bad file.
pub fn extract_maps(paths: &Extraction_paths) -> Result<Vec<Poi_record>> {
	let mut poi = Vec::new();
	for map_path in Map_file_scanner::new(&paths.data_directory)? {
		let map_path = map_path?;
		let record = extract_map(&map_path, &paths.maps_directory)
			.with_context(|| format!("Failed to convert {}", map_path.display()))?;
		println!("Found map centred at ({}, {})", record.x, record.z);
		poi.push(record);
	}
	info!(maps = poi.len(), "finished rendering maps");
	Ok(poi)
}


pub fn extract_map(map_path: &Path, maps_directory: &Path) -> Result<Poi_record> {
	let file_name = map_path.file_name()
		.ok_or_else(|| anyhow!("{} has no file name", map_path.display()))?;
	debug!(path = %map_path.display(), "decoding map");

	let record = load_map_record(map_path)?;
	debug!(
		width = record.width,
		height = record.height,
		scale = ?record.scale,
		dimension = %record.dimension_name(),
		"decoded map"
	);

	let image = rasterize(&record)?;
	let output_path = maps_directory.join(output_file_name(file_name));
	write_map_png(&image, &output_path)?;
	debug!(path = %output_path.display(), "wrote map image");

	Ok(Poi_record::from_map(&record, &file_name.to_string_lossy()))
}


pub fn output_file_name(file_name: impl AsRef<Path>) -> PathBuf {
	file_name.as_ref().with_extension("png")
}


/// The old combined state file, if it is still lying in the data directory.
pub fn legacy_state_file(data_directory: &Path) -> Option<PathBuf> {
	let path = data_directory.join(legacy_state_file_name);
	path.is_file().then_some(path)
}

pub fn report_legacy_state_file(data_directory: &Path) {
	if let Some(path) = legacy_state_file(data_directory) {
		println!("Overviewer.dat detected in WorldDir - this is no longer the correct location\n");
		println!("You may wish to delete the old file. A new overviewer.dat will be created\n");
		println!("Old file:  {}", path.display());
	}
}
