use clap::Parser;
use tracing::info;

use crate::extraction::{extract_maps, prepare_paths, report_legacy_state_file};
use crate::helpers::*;
use crate::poi::{write_poi_index, North_direction};


pub fn handle_arguments() -> Result<()> {
	Command_line_interface::parse().go()
}


#[derive(Debug, Parser)]
#[command(about = "Render the crafted map items of a world into PNG images")]
struct Command_line_interface {
	/// World directory, maps are read from its `data` folder
	world_directory: PathBuf,
	/// Existing output directory, images go into its `maps` folder
	output_directory: PathBuf,
	/// Corner of the render facing north, only stored in the POI index
	#[arg(value_enum, default_value_t = North_direction::lower_left)]
	north_direction: North_direction,

	/// Also write the collected markers to `overviewer.json`
	#[arg(long)]
	write_poi_index: bool,
}


impl Command_line_interface {
	fn go(self) -> Result<()> {
		let paths = prepare_paths(&self.world_directory, &self.output_directory)?;
		let poi = extract_maps(&paths)?;
		report_legacy_state_file(&paths.data_directory);

		if self.write_poi_index {
			let index_path = paths.output_directory.join(poi_index_file_name);
			write_poi_index(&index_path, &poi, self.north_direction)?;
			info!(path = %index_path.display(), markers = poi.len(), "wrote POI index");
		}
		Ok(())
	}
}
