use font8x8::UnicodeFonts;
use rentscout_application::AssetImage;

pub(crate) const GLYPH_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: usize,
    pub h: usize,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: usize, h: usize) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    pub fn center_x(&self) -> i32 {
        self.x + (self.w / 2) as i32
    }

    pub fn center_y(&self) -> i32 {
        self.y + (self.h / 2) as i32
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x as f32
            && px < self.right() as f32
            && py >= self.y as f32
            && py < self.bottom() as f32
    }

    /// Same rectangle shifted vertically, used to translate content-space
    /// layout into screen space under a scroll offset.
    pub fn shifted_y(&self, dy: i32) -> Rect {
        Rect::new(self.x, self.y + dy, self.w, self.h)
    }

    pub fn shifted_x(&self, dx: i32) -> Rect {
        Rect::new(self.x + dx, self.y, self.w, self.h)
    }
}

pub(crate) fn set_pixel(buffer: &mut [u32], width: usize, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    let height = buffer.len() / width;
    if x < width && y < height {
        buffer[y * width + x] = color;
    }
}

pub(crate) fn fill_rect(buffer: &mut [u32], width: usize, rect: &Rect, color: u32) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            set_pixel(buffer, width, x, y, color);
        }
    }
}

pub(crate) fn draw_rect(buffer: &mut [u32], width: usize, rect: &Rect, color: u32) {
    if rect.w == 0 || rect.h == 0 {
        return;
    }
    for x in rect.x..rect.right() {
        set_pixel(buffer, width, x, rect.y, color);
        set_pixel(buffer, width, x, rect.bottom() - 1, color);
    }
    for y in rect.y..rect.bottom() {
        set_pixel(buffer, width, rect.x, y, color);
        set_pixel(buffer, width, rect.right() - 1, y, color);
    }
}

/// Darkens whatever is already in the region; the filter sheet uses this to
/// dim the feed behind the modal.
pub(crate) fn dim_rect(buffer: &mut [u32], width: usize, rect: &Rect, amount: u8) {
    let height = buffer.len() / width;
    let x0 = rect.x.max(0) as usize;
    let y0 = rect.y.max(0) as usize;
    let x1 = (rect.right().max(0) as usize).min(width);
    let y1 = (rect.bottom().max(0) as usize).min(height);
    for y in y0..y1 {
        for x in x0..x1 {
            let index = y * width + x;
            buffer[index] = darken_color(buffer[index], amount);
        }
    }
}

pub(crate) fn fill_circle(
    buffer: &mut [u32],
    width: usize,
    cx: i32,
    cy: i32,
    radius: i32,
    color: u32,
) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                set_pixel(buffer, width, cx + dx, cy + dy, color);
            }
        }
    }
}

pub(crate) fn darken_color(color: u32, amount: u8) -> u32 {
    let r = ((color >> 16) & 0xFF).saturating_sub(amount as u32);
    let g = ((color >> 8) & 0xFF).saturating_sub(amount as u32);
    let b = (color & 0xFF).saturating_sub(amount as u32);
    (r << 16) | (g << 8) | b
}

pub(crate) fn text_width(text: &str, scale: usize) -> usize {
    text.chars().count() * GLYPH_WIDTH * scale
}

pub(crate) fn draw_text(buffer: &mut [u32], width: usize, x: i32, y: i32, text: &str, color: u32) {
    draw_text_scaled(buffer, width, x, y, text, color, 1);
}

pub(crate) fn draw_text_scaled(
    buffer: &mut [u32],
    width: usize,
    x: i32,
    y: i32,
    text: &str,
    color: u32,
    scale: usize,
) {
    let mut cursor_x = x;
    for ch in text.chars() {
        if ch == '\n' {
            continue;
        }
        draw_char(buffer, width, cursor_x, y, ch, color, scale);
        cursor_x += (GLYPH_WIDTH * scale) as i32;
    }
}

fn draw_char(buffer: &mut [u32], width: usize, x: i32, y: i32, ch: char, color: u32, scale: usize) {
    // The separator dot used on card stat lines is outside the basic font
    // table; plot it directly.
    if ch == '•' {
        let offset = (3 * scale) as i32;
        for dy in 0..(2 * scale) as i32 {
            for dx in 0..(2 * scale) as i32 {
                set_pixel(buffer, width, x + offset + dx, y + offset + dy, color);
            }
        }
        return;
    }

    let glyph = font8x8::BASIC_FONTS.get(ch).unwrap_or([0; 8]);
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..8 {
            if (bits >> col) & 1 == 1 {
                for sy in 0..scale {
                    for sx in 0..scale {
                        set_pixel(
                            buffer,
                            width,
                            x + (col * scale + sx) as i32,
                            y + (row * scale + sy) as i32,
                            color,
                        );
                    }
                }
            }
        }
    }
}

const HEART_PATTERN: [&str; 7] = [
    ".XX.XX.",
    "XXXXXXX",
    "XXXXXXX",
    "XXXXXXX",
    ".XXXXX.",
    "..XXX..",
    "...X...",
];

pub(crate) fn draw_heart(buffer: &mut [u32], width: usize, x: i32, y: i32, color: u32) {
    for (row, line) in HEART_PATTERN.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if ch == 'X' {
                set_pixel(buffer, width, x + col as i32, y + row as i32, color);
            }
        }
    }
}

pub(crate) fn draw_magnifier(buffer: &mut [u32], width: usize, x: i32, y: i32, color: u32) {
    for dy in -3i32..=3 {
        for dx in -3i32..=3 {
            let d = dx * dx + dy * dy;
            if (5..=9).contains(&d) {
                set_pixel(buffer, width, x + dx, y + dy, color);
            }
        }
    }
    for step in 2..5 {
        set_pixel(buffer, width, x + step, y + step, color);
    }
}

/// Blits `image` into `rect` scaled to fill it, cropping the overflow on
/// the longer axis (nearest neighbor).
pub(crate) fn blit_cover(buffer: &mut [u32], width: usize, rect: &Rect, image: &AssetImage) {
    if rect.w == 0 || rect.h == 0 || image.width == 0 || image.height == 0 {
        return;
    }

    let scale_x = rect.w as f32 / image.width as f32;
    let scale_y = rect.h as f32 / image.height as f32;
    let scale = scale_x.max(scale_y);
    let src_visible_w = rect.w as f32 / scale;
    let src_visible_h = rect.h as f32 / scale;
    let src_off_x = (image.width as f32 - src_visible_w) / 2.0;
    let src_off_y = (image.height as f32 - src_visible_h) / 2.0;

    for dy in 0..rect.h {
        let src_y = (src_off_y + dy as f32 / scale) as u32;
        let src_y = src_y.min(image.height - 1);
        for dx in 0..rect.w {
            let src_x = (src_off_x + dx as f32 / scale) as u32;
            let src_x = src_x.min(image.width - 1);
            let color = image.pixels[(src_y * image.width + src_x) as usize];
            set_pixel(buffer, width, rect.x + dx as i32, rect.y + dy as i32, color);
        }
    }
}
