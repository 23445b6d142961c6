use std::{fs::File, io::{BufReader, Read}};
use fastnbt::{ByteArray, Value};
use flate2::read::GzDecoder;
use serde::Deserialize;
use crate::helpers::*;


#[derive(Debug, Deserialize)]
struct Map_file {
	data: Map_record,
}


/// The `data` compound of a `map_<id>.dat` item file.
#[derive(Debug, Deserialize)]
pub struct Map_record {
	#[serde(default = "default_side")]
	pub width: i32,
	#[serde(default = "default_side")]
	pub height: i32,
	pub colors: ByteArray,
	#[serde(rename = "xCenter")]
	pub x_center: i32,
	#[serde(rename = "zCenter")]
	pub z_center: i32,
	#[serde(default)]
	pub scale: Option<i8>,
	// byte before 1.13, int until 1.16, namespaced string after
	#[serde(default)]
	pub dimension: Option<Value>,
}

fn default_side() -> i32 {default_map_side}


impl Map_record {
	/// Number of pixels, after checking it agrees with the declared size.
	pub fn pixel_count(&self) -> Result<usize> {
		if self.width <= 0 || self.height <= 0 {
			return Err(anyhow!("Map has invalid dimensions {}x{}", self.width, self.height));
		}
		let expected = self.width as usize * self.height as usize;
		if self.colors.len() != expected {
			return Err(anyhow!(
				"Map declares {}x{} pixels but carries {} colours",
				self.width, self.height, self.colors.len()
			));
		}
		Ok(expected)
	}

	pub fn dimension_name(&self) -> String {
		match &self.dimension {
			None => "overworld".into(),
			Some(Value::Byte(id)) => legacy_dimension_name(i32::from(*id)),
			Some(Value::Short(id)) => legacy_dimension_name(i32::from(*id)),
			Some(Value::Int(id)) => legacy_dimension_name(*id),
			Some(Value::String(name)) => name.trim_start_matches("minecraft:").to_string(),
			Some(other) => format!("{other:?}"),
		}
	}
}

fn legacy_dimension_name(id: i32) -> String {
	match id {
		0 => "overworld".into(),
		-1 => "the_nether".into(),
		1 => "the_end".into(),
		other => format!("dimension {other}"),
	}
}


pub fn load_map_record(path: &Path) -> Result<Map_record> {
	let file = File::open(path)
		.with_context(|| format!("Could not open {}", path.display()))?;
	let mut bytes = Vec::new();
	GzDecoder::new(BufReader::new(file))
		.read_to_end(&mut bytes)
		.with_context(|| format!("{} is not a gzip compressed NBT file", path.display()))?;
	decode_map_record(&bytes)
		.with_context(|| format!("{} is not a map item", path.display()))
}

/// Decodes uncompressed NBT.
pub fn decode_map_record(bytes: &[u8]) -> Result<Map_record> {
	let file: Map_file = fastnbt::from_bytes(bytes)?;
	Ok(file.data)
}
