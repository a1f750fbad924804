//! ASCII shade maps of flattened images.
//!
//! Images are stored column-major: pixel `(row, col)` of an `h × w` image
//! is element `col * h + row` of the flattened vector.

/// Shade ramp from dark (0.0) to bright (1.0)
pub const SHADES: &[u8] = b" .:-=+*#%@";

/// Height and width of a flattened image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageShape {
    pub height: usize,
    pub width: usize,
}

impl ImageShape {
    /// Square shape for `len` pixels, if `len` is a perfect square
    pub fn square(len: usize) -> Option<Self> {
        let side = (len as f64).sqrt().round() as usize;
        (side > 0 && side * side == len).then_some(Self {
            height: side,
            width: side,
        })
    }

    /// Best-effort shape: square when possible, otherwise a single column
    pub fn infer(len: usize) -> Self {
        Self::square(len).unwrap_or(Self {
            height: len,
            width: 1,
        })
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        self.height * self.width
    }

    /// Whether the shape holds no pixels
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn shade(v: f64) -> char {
    if !v.is_finite() {
        return '?';
    }
    let top = SHADES.len() - 1;
    let idx = (v.clamp(0.0, 1.0) * top as f64).round() as usize;
    char::from(SHADES[idx.min(top)])
}

/// Render `pixels` as text rows, two characters per pixel.
///
/// Returns `None` when the pixel count does not match `shape`.
pub fn render_image(pixels: &[f64], shape: ImageShape) -> Option<Vec<String>> {
    if pixels.len() != shape.len() {
        return None;
    }
    let rows = (0..shape.height)
        .map(|r| {
            (0..shape.width)
                .flat_map(|c| {
                    let s = shade(pixels[c * shape.height + r]);
                    [s, s]
                })
                .collect()
        })
        .collect();
    Some(rows)
}

/// Render titled panels side by side.
///
/// Every panel must match `shape`; returns `None` otherwise.
pub fn render_panels(panels: &[(&str, &[f64])], shape: ImageShape) -> Option<String> {
    let rendered = panels
        .iter()
        .map(|(_, pixels)| render_image(pixels, shape))
        .collect::<Option<Vec<_>>>()?;

    let col_width = (shape.width * 2).max(panels.iter().map(|(t, _)| t.chars().count()).max()?);
    let gap = "  ";

    let mut out = String::new();
    let titles: Vec<String> = panels
        .iter()
        .map(|(title, _)| format!("{title:<col_width$}"))
        .collect();
    out.push_str(titles.join(gap).trim_end());
    out.push('\n');

    let border: Vec<String> = panels.iter().map(|_| "-".repeat(col_width)).collect();
    out.push_str(&border.join(gap));
    out.push('\n');

    for r in 0..shape.height {
        let row: Vec<String> = rendered
            .iter()
            .map(|img| format!("{:<col_width$}", img[r]))
            .collect();
        out.push_str(row.join(gap).trim_end());
        out.push('\n');
    }
    Some(out)
}
