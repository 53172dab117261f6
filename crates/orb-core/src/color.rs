//! CSS color strings to normalized RGB.
//!
//! Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, the `rgb()`/`rgba()`,
//! `hsl()`/`hsla()` and `hwb()` functions in both the comma and the space
//! separated syntax, and the CSS named colors including `transparent`. Alpha
//! is parsed for validity and then dropped: uniforms only carry RGB.

use crate::error::ColorParseError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    fn from_packed(rgb: u32) -> Self {
        Self::from_bytes((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// `#rrggbb`, the form `<input type=color>` accepts.
    pub fn to_css_hex(self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::BadHex(s.to_string()));
        }
        let lower = s.to_ascii_lowercase();
        if lower.contains('(') {
            return parse_function(&lower)
                .ok_or_else(|| ColorParseError::BadFunction(s.to_string()));
        }
        named(&lower).ok_or_else(|| ColorParseError::UnknownName(s.to_string()))
    }
}

pub fn parse_css_color(s: &str) -> Result<Rgb, ColorParseError> {
    s.parse()
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 | 4 => Some(Rgb::from_bytes(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 | 8 => Some(Rgb::from_bytes(byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

fn parse_function(s: &str) -> Option<Rgb> {
    let open = s.find('(')?;
    let name = s[..open].trim_end();
    let body = s[open + 1..].strip_suffix(')')?;
    let parts: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    if let Some(alpha) = parts.get(3) {
        finite(alpha.strip_suffix('%').unwrap_or(alpha))?;
    }
    match name {
        "rgb" | "rgba" => Some(Rgb::new(
            rgb_channel(parts[0])?,
            rgb_channel(parts[1])?,
            rgb_channel(parts[2])?,
        )),
        "hsl" | "hsla" => Some(hsl_to_rgb(
            hue(parts[0])?,
            fraction(parts[1])?,
            fraction(parts[2])?,
        )),
        "hwb" => Some(hwb_to_rgb(hue(parts[0])?, fraction(parts[1])?, fraction(parts[2])?)),
        _ => None,
    }
}

fn finite(p: &str) -> Option<f32> {
    p.parse::<f32>().ok().filter(|v| v.is_finite())
}

fn rgb_channel(p: &str) -> Option<f32> {
    let v = match p.strip_suffix('%') {
        Some(pct) => finite(pct)? / 100.0,
        None => finite(p)? / 255.0,
    };
    Some(v.clamp(0.0, 1.0))
}

/// Saturation, lightness, whiteness and blackness: `50%` or a bare `50`.
fn fraction(p: &str) -> Option<f32> {
    let v = finite(p.strip_suffix('%').unwrap_or(p))? / 100.0;
    Some(v.clamp(0.0, 1.0))
}

/// Hue in degrees, wrapped into [0, 360).
fn hue(p: &str) -> Option<f32> {
    let deg = if let Some(v) = p.strip_suffix("deg") {
        finite(v)?
    } else if let Some(v) = p.strip_suffix("grad") {
        finite(v)? * 0.9
    } else if let Some(v) = p.strip_suffix("rad") {
        finite(v)?.to_degrees()
    } else if let Some(v) = p.strip_suffix("turn") {
        finite(v)? * 360.0
    } else {
        finite(p)?
    };
    Some(deg.rem_euclid(360.0))
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let a = s * l.min(1.0 - l);
    let f = |n: f32| {
        let k = (n + h / 30.0) % 12.0;
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };
    Rgb::new(f(0.0), f(8.0), f(4.0))
}

fn hwb_to_rgb(h: f32, w: f32, b: f32) -> Rgb {
    if w + b >= 1.0 {
        let gray = w / (w + b);
        return Rgb::new(gray, gray, gray);
    }
    let pure = hsl_to_rgb(h, 1.0, 0.5);
    let scale = |c: f32| c * (1.0 - w - b) + w;
    Rgb::new(scale(pure.r), scale(pure.g), scale(pure.b))
}

fn named(name: &str) -> Option<Rgb> {
    if name == "transparent" {
        return Some(Rgb::BLACK);
    }
    NAMED_COLORS
        .binary_search_by(|(n, _)| n.cmp(&name))
        .ok()
        .map(|i| Rgb::from_packed(NAMED_COLORS[i].1))
}

// Sorted by name for the binary search.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];
