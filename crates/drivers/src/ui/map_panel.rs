use rentscout_domain::Property;

use super::draw::{draw_rect, fill_circle, fill_rect, set_pixel, Rect};

const COLOR_WATERMARK: u32 = 0xDCE6DC;
const COLOR_GRID: u32 = 0xCBD8CB;
const COLOR_BORDER: u32 = 0xB3C2B3;
const COLOR_PIN: u32 = 0xD14343;
const GRID_STEP: usize = 28;

/// Visible map area: a center coordinate and the degree span shown across
/// the panel on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MapRegion {
    pub center_lat: f64,
    pub center_lon: f64,
    pub lat_span: f64,
    pub lon_span: f64,
}

impl MapRegion {
    pub fn new(center_lat: f64, center_lon: f64, span: f64) -> Self {
        Self {
            center_lat,
            center_lon,
            lat_span: span,
            lon_span: span,
        }
    }

    pub fn centered_on(property: &Property, span: f64) -> Self {
        Self::new(property.latitude, property.longitude, span)
    }
}

/// The feed map shows the neighborhood around campus, matching the
/// original prototype's initial region.
pub(crate) const FEED_REGION: MapRegion = MapRegion {
    center_lat: 33.42,
    center_lon: -111.93,
    lat_span: 0.05,
    lon_span: 0.05,
};

pub(crate) const DETAIL_SPAN: f64 = 0.02;

/// Maps a coordinate into panel pixels, north up. Returns None when the
/// coordinate falls outside the region; markers are clipped, never wrapped.
pub(crate) fn project(region: &MapRegion, rect: &Rect, lat: f64, lon: f64) -> Option<(i32, i32)> {
    let tx = (lon - (region.center_lon - region.lon_span / 2.0)) / region.lon_span;
    let ty = ((region.center_lat + region.lat_span / 2.0) - lat) / region.lat_span;
    if !(0.0..=1.0).contains(&tx) || !(0.0..=1.0).contains(&ty) {
        return None;
    }
    Some((
        rect.x + (tx * rect.w as f64) as i32,
        rect.y + (ty * rect.h as f64) as i32,
    ))
}

pub(crate) fn draw_map(
    buffer: &mut [u32],
    width: usize,
    rect: &Rect,
    region: &MapRegion,
    markers: &[(f64, f64)],
) {
    fill_rect(buffer, width, rect, COLOR_WATERMARK);

    let mut gx = rect.x + GRID_STEP as i32;
    while gx < rect.right() {
        for y in rect.y..rect.bottom() {
            set_pixel(buffer, width, gx, y, COLOR_GRID);
        }
        gx += GRID_STEP as i32;
    }
    let mut gy = rect.y + GRID_STEP as i32;
    while gy < rect.bottom() {
        for x in rect.x..rect.right() {
            set_pixel(buffer, width, x, gy, COLOR_GRID);
        }
        gy += GRID_STEP as i32;
    }

    draw_rect(buffer, width, rect, COLOR_BORDER);

    for (lat, lon) in markers {
        if let Some((px, py)) = project(region, rect, *lat, *lon) {
            draw_pin(buffer, width, px, py);
        }
    }
}

fn draw_pin(buffer: &mut [u32], width: usize, x: i32, y: i32) {
    fill_circle(buffer, width, x, y - 5, 4, COLOR_PIN);
    for dy in 0..4 {
        set_pixel(buffer, width, x, y - 1 + dy, COLOR_PIN);
    }
    set_pixel(buffer, width, x - 1, y - 4, 0xFFFFFF);
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: Rect = Rect {
        x: 10,
        y: 20,
        w: 200,
        h: 100,
    };

    #[test]
    fn region_center_projects_to_the_panel_center() {
        let (px, py) = project(&FEED_REGION, &PANEL, 33.42, -111.93).expect("center is inside");
        assert_eq!(px, PANEL.x + 100);
        assert_eq!(py, PANEL.y + 50);
    }

    #[test]
    fn the_three_sample_listings_land_inside_the_feed_region() {
        let coordinates = [
            (33.41473, -111.91332),
            (33.42195, -111.94354),
            (33.41919, -111.94333),
        ];

        let mut points = Vec::new();
        for (lat, lon) in coordinates {
            let point = project(&FEED_REGION, &PANEL, lat, lon).expect("sample inside region");
            assert!(PANEL.contains(point.0 as f32, point.1 as f32));
            points.push(point);
        }

        points.sort_unstable();
        points.dedup();
        assert_eq!(points.len(), 3, "markers must be distinct");
    }

    #[test]
    fn coordinates_outside_the_region_are_clipped() {
        assert!(project(&FEED_REGION, &PANEL, 34.0, -111.93).is_none());
        assert!(project(&FEED_REGION, &PANEL, 33.42, -112.5).is_none());
    }

    #[test]
    fn north_is_up() {
        let north = project(&FEED_REGION, &PANEL, 33.44, -111.93).expect("inside");
        let south = project(&FEED_REGION, &PANEL, 33.40, -111.93).expect("inside");
        assert!(north.1 < south.1);
    }
}
