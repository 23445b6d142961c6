use std::{fs, io::BufWriter};
use image::RgbImage;
use crate::{helpers::*, map_record::Map_record, palette::{lookup_map_color, unexplored_color}};


/// Colours a map record into an RGB grid.
///
/// The colour stream is cut into `width` rows of `height` pixels, so a map
/// with `width != height` comes out transposed relative to its declared
/// size. The game only writes square maps, where the two agree.
pub fn rasterize(record: &Map_record) -> Result<RgbImage> {
	let pixel_count = record.pixel_count()?;
	let mut rgb = Vec::with_capacity(pixel_count * 3);
	for &raw in record.colors.iter() {
		rgb.extend(lookup_map_color(raw)?.rgb);
	}

	let row_count = record.width as u32;
	let row_length = record.height as u32;
	RgbImage::from_raw(row_length, row_count, rgb)
		.ok_or_else(|| anyhow!("Colour buffer does not fill a {row_length}x{row_count} image"))
}


/// 8 bit RGB, with the unexplored colour marked transparent through `tRNS`.
pub fn write_map_png(image: &RgbImage, path: &Path) -> Result<()> {
	let file = fs::File::create(path)
		.with_context(|| format!("Could not create {}", path.display()))?;
	let ref mut writer = BufWriter::new(file);
	let mut encoder = png::Encoder::new(writer, image.width(), image.height());
	encoder.set_color(png::ColorType::Rgb);
	encoder.set_depth(png::BitDepth::Eight);
	let [red, green, blue] = unexplored_color.rgb;
	encoder.set_trns(vec![0, red, 0, green, 0, blue]);

	let mut writer = encoder.write_header()?;
	writer.write_image_data(image.as_raw())?;
	writer.finish()?;
	Ok(())
}


#[cfg(test)]
mod tests {
	use super::*;
	use crate::{map_record::{decode_map_record, fixtures::map_nbt}, palette::map_colors};
	use image::Rgb;

	fn record(width: i16, height: i16, colors: Vec<i8>) -> Map_record {
		decode_map_record(&map_nbt(width, height, colors, 0, 0)).unwrap()
	}

	#[test]
	fn square_map_keeps_pixel_order() {
		let image = rasterize(&record(2, 2, vec![-1, 3, 47, 54])).unwrap();

		assert_eq!(image.dimensions(), (2, 2));
		assert_eq!(*image.get_pixel(0, 0), Rgb([0, 0, 0]));
		assert_eq!(*image.get_pixel(1, 0), Rgb([89, 125, 39]));
		assert_eq!(*image.get_pixel(0, 1), Rgb([45, 45, 180]));
		assert_eq!(*image.get_pixel(1, 1), Rgb([89, 71, 43]));
	}

	#[test]
	fn rows_follow_width_and_columns_follow_height() {
		let (width, height) = (2i16, 3i16);
		let colors: Vec<i8> = (0..6).map(|i| i * 4 + 3).collect();
		let image = rasterize(&record(width, height, colors.clone())).unwrap();

		assert_eq!(image.height(), width as u32);
		assert_eq!(image.width(), height as u32);
		for i in 0..width as usize {
			for j in 0..height as usize {
				let expected: Rgb<u8> = map_colors[(colors[i * height as usize + j] + 1) as usize].into();
				assert_eq!(*image.get_pixel(j as u32, i as u32), expected);
			}
		}
	}

	#[test]
	fn unknown_colour_aborts_the_map() {
		assert!(rasterize(&record(1, 2, vec![0, 100])).is_err());
	}

	#[test]
	fn png_is_transparent_where_unexplored() {
		let directory = tempfile::tempdir().unwrap();
		let path = directory.path().join("map_0.png");
		let image = rasterize(&record(1, 2, vec![-1, 33])).unwrap();
		write_map_png(&image, &path).unwrap();

		let mut decoder = png::Decoder::new(fs::File::open(&path).unwrap());
		decoder.set_transformations(png::Transformations::IDENTITY);
		let mut reader = decoder.read_info().unwrap();
		// the decoder narrows the 16 bit RGB key to one byte per channel
		assert_eq!(reader.info().trns.as_deref(), Some(&[0u8, 0, 0][..]));
		let mut buffer = vec![0; reader.output_buffer_size()];
		let info = reader.next_frame(&mut buffer).unwrap();

		assert_eq!((info.width, info.height), (2, 1));
		assert_eq!(info.color_type, png::ColorType::Rgb);
		assert_eq!(&buffer[..info.buffer_size()], &[0, 0, 0, 255, 255, 255]);
	}

	#[test]
	fn trns_chunk_is_written_as_16_bit_key() {
		let directory = tempfile::tempdir().unwrap();
		let path = directory.path().join("map_0.png");
		write_map_png(&rasterize(&record(1, 1, vec![-1])).unwrap(), &path).unwrap();

		let bytes = fs::read(&path).unwrap();
		let chunk: &[u8] = &[0, 0, 0, 6, b't', b'R', b'N', b'S', 0, 0, 0, 0, 0, 0];
		assert!(bytes.windows(chunk.len()).any(|window| window == chunk));
	}

	#[test]
	fn same_record_gives_same_bytes() {
		let directory = tempfile::tempdir().unwrap();
		let first = directory.path().join("a.png");
		let second = directory.path().join("b.png");
		let image = rasterize(&record(2, 2, vec![4, 5, 6, 7])).unwrap();
		write_map_png(&image, &first).unwrap();
		write_map_png(&rasterize(&record(2, 2, vec![4, 5, 6, 7])).unwrap(), &second).unwrap();

		assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
	}
}
