use image::Rgb;
use crate::helpers::*;


#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Color24 {
	pub rgb: [u8; 3]
}

impl From<[u8; 3]> for Color24 {
	fn from(value: [u8; 3]) -> Self {
		Color24{rgb:value}
	}
}

impl Into<Rgb<u8>> for Color24 {
	fn into(self) -> Rgb<u8> {
		Rgb(self.rgb)
	}
}

const fn c(r: u8, g: u8, b: u8) -> Color24 {
	Color24{rgb:[r, g, b]}
}


/// Map item colours, indexed by the raw (signed) pixel value plus one.
/// Four shades per material, slot 0 doubles as the transparent colour.
pub const map_colors: [Color24; 56] = [
	c(0, 0, 0),       c(0, 0, 0),       c(0, 0, 0),       c(0, 0, 0),       // not explored
	c(89, 125, 39),   c(109, 153, 48),  c(127, 178, 56),  c(109, 153, 48),  // grass
	c(174, 164, 115), c(213, 201, 140), c(247, 233, 163), c(213, 201, 140), // sand, gravel
	c(117, 117, 117), c(144, 144, 144), c(167, 167, 167), c(144, 144, 144), // other
	c(180, 0, 0),     c(220, 0, 0),     c(255, 0, 0),     c(220, 0, 0),     // lava
	c(112, 112, 180), c(138, 138, 220), c(160, 160, 255), c(138, 138, 220), // ice
	c(117, 117, 117), c(144, 144, 144), c(167, 167, 167), c(144, 144, 144), // other
	c(0, 87, 0),      c(0, 106, 0),     c(0, 124, 0),     c(0, 106, 0),     // leaves
	c(180, 180, 180), c(220, 220, 220), c(255, 255, 255), c(220, 220, 220), // snow
	c(115, 118, 129), c(141, 144, 158), c(164, 168, 184), c(141, 144, 158), // clay
	c(129, 74, 33),   c(157, 91, 40),   c(183, 106, 47),  c(157, 91, 40),   // dirt
	c(79, 79, 79),    c(96, 96, 96),    c(112, 112, 112), c(96, 96, 96),    // stone, cobblestone, ore
	c(45, 45, 180),   c(55, 55, 220),   c(64, 64, 255),   c(55, 55, 220),   // water
	c(73, 58, 35),    c(89, 71, 43),    c(104, 83, 50),   c(89, 71, 43),    // log, wood
];

pub const unexplored_color: Color24 = map_colors[0];


/// Out of range values are an error, newer games have colours this table lacks.
pub fn lookup_map_color(raw: i8) -> Result<Color24> {
	let slot = i32::from(raw) + 1;
	usize::try_from(slot).ok()
		.and_then(|slot| map_colors.get(slot))
		.copied()
		.ok_or_else(|| anyhow!("Map colour index {raw} is outside the known palette (-1..={})", map_colors.len() - 2))
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_skips_the_reserved_slot() {
		assert_eq!(lookup_map_color(-1).unwrap(), unexplored_color);
		assert_eq!(lookup_map_color(3).unwrap(), Color24::from([89, 125, 39]));
		assert_eq!(lookup_map_color(47).unwrap(), Color24::from([45, 45, 180]));
		assert_eq!(lookup_map_color(54).unwrap(), Color24::from([89, 71, 43]));
	}

	#[test]
	fn lookup_is_total_over_the_documented_domain() {
		for raw in -1i8..=54 {
			assert!(lookup_map_color(raw).is_ok(), "{raw}");
		}
	}

	#[test]
	fn lookup_rejects_instead_of_clamping() {
		assert!(lookup_map_color(55).is_err());
		assert!(lookup_map_color(-2).is_err());
		assert!(lookup_map_color(i8::MIN).is_err());
		assert!(lookup_map_color(i8::MAX).is_err());
	}

	#[test]
	fn converts_to_image_pixel() {
		let pixel: Rgb<u8> = Color24::from([1, 2, 3]).into();
		assert_eq!(pixel, Rgb([1, 2, 3]));
	}
}
