use std::fs;
use serde::Serialize;
use crate::{helpers::*, map_record::Map_record};


/// Which corner of the rendered world faces north. Only recorded in the
/// POI index, the map images themselves are never rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize)]
pub enum North_direction {
	#[serde(rename = "upper-left")]
	upper_left,
	#[serde(rename = "upper-right")]
	upper_right,
	#[serde(rename = "lower-left")]
	lower_left,
	#[serde(rename = "lower-right")]
	lower_right,
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Poi_record {
	#[serde(rename = "type")]
	pub kind: &'static str,
	pub x: i32,
	pub y: i32,
	pub z: i32,
	pub msg: String,
	pub chunk: (i32, i32),
}

impl Poi_record {
	// dimension and scale are not taken into account
	pub fn from_map(record: &Map_record, file_name: &str) -> Self {
		Poi_record {
			kind: "map",
			x: record.x_center,
			y: poi_height,
			z: record.z_center,
			msg: file_name.to_string(),
			chunk: chunk_of(record.x_center, record.z_center),
		}
	}
}

/// Rounds toward negative infinity, block -1 lives in chunk -1.
pub fn chunk_of(x: i32, z: i32) -> (i32, i32) {
	(x.div_euclid(16), z.div_euclid(16))
}


#[derive(Serialize)]
struct Poi_index<'a> {
	#[serde(rename = "POI")]
	poi: &'a [Poi_record],
	north_direction: North_direction,
}

pub fn write_poi_index(path: &Path, poi: &[Poi_record], north_direction: North_direction) -> Result<()> {
	let index = Poi_index{ poi, north_direction };
	let json = serde_json::to_string_pretty(&index)?;
	fs::write(path, json)
		.with_context(|| format!("Could not write {}", path.display()))
}
