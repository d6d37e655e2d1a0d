use rentscout_domain::{FilterSelection, PRICE_RANGE_MAX, PRICE_RANGE_MIN, ROOM_MINIMUM_MAX};

use super::draw::{
    dim_rect, draw_rect, draw_text, draw_text_scaled, fill_rect, text_width, Rect,
};
use super::{
    InputState, COLOR_ACCENT, COLOR_CHIP, COLOR_OUTLINE, COLOR_SURFACE, COLOR_TEXT,
    COLOR_TEXT_MUTED, WINDOW_HEIGHT, WINDOW_WIDTH,
};

const SHEET_TOP: i32 = 110;
const SHEET_HEIGHT: usize = 560;
const SHEET_MARGIN: i32 = 16;
const INSET: i32 = 18;
const TRACK_HEIGHT: usize = 24;
const TRACK_KNOB_INSET: i32 = 8;
const SEGMENT_HEIGHT: usize = 32;
const BACKDROP_DIM: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PriceBound {
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SheetAction {
    Dismiss,
}

/// The modal filter sheet. Owns its selection; the feed drops the whole
/// sheet on dismissal, so the captured values never reach the listing.
#[derive(Debug)]
pub(crate) struct FilterSheet {
    pub selection: FilterSelection,
    active_drag: Option<PriceBound>,
}

impl FilterSheet {
    pub fn new() -> Self {
        Self {
            selection: FilterSelection::default(),
            active_drag: None,
        }
    }

    pub fn update(&mut self, input: &InputState) -> Option<SheetAction> {
        if input.escape {
            return self.dismiss("escape");
        }

        if !input.mouse_down {
            self.active_drag = None;
        }

        if let Some((mx, my)) = input.mouse {
            if input.clicked {
                if close_rect().contains(mx, my) {
                    return self.dismiss("close");
                }
                if apply_rect().contains(mx, my) {
                    return self.dismiss("apply");
                }
                if slider_rect(PriceBound::Lower).contains(mx, my) {
                    self.active_drag = Some(PriceBound::Lower);
                } else if slider_rect(PriceBound::Upper).contains(mx, my) {
                    self.active_drag = Some(PriceBound::Upper);
                }

                let beds = segments_rect(RoomGroup::Beds);
                if beds.contains(mx, my) {
                    self.selection.min_beds = segment_at(&beds, mx);
                }
                let baths = segments_rect(RoomGroup::Baths);
                if baths.contains(mx, my) {
                    self.selection.min_baths = segment_at(&baths, mx);
                }
            }

            if input.mouse_down {
                match self.active_drag {
                    Some(PriceBound::Lower) => {
                        self.selection.lower_price =
                            x_to_value(mx, &slider_rect(PriceBound::Lower));
                    }
                    Some(PriceBound::Upper) => {
                        self.selection.upper_price =
                            x_to_value(mx, &slider_rect(PriceBound::Upper));
                    }
                    None => {}
                }
            }
        }

        None
    }

    fn dismiss(&self, trigger: &str) -> Option<SheetAction> {
        // The selection is logged and then dropped; nothing downstream
        // consumes it.
        log::debug!(
            "filter sheet dismissed via {trigger}: price {}..{}, beds {}+, baths {}+ (not applied)",
            self.selection.lower_price as i32,
            self.selection.upper_price as i32,
            self.selection.min_beds,
            self.selection.min_baths
        );
        Some(SheetAction::Dismiss)
    }

    pub fn draw(&self, buffer: &mut [u32], width: usize) {
        dim_rect(
            buffer,
            width,
            &Rect::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT),
            BACKDROP_DIM,
        );

        let sheet = sheet_rect();
        fill_rect(buffer, width, &sheet, COLOR_SURFACE);
        draw_rect(buffer, width, &sheet, COLOR_OUTLINE);

        draw_text_scaled(
            buffer,
            width,
            sheet.x + INSET,
            sheet.y + 18,
            "Filters",
            COLOR_TEXT,
            2,
        );
        let close = close_rect();
        draw_text(buffer, width, close.x, close.y + 4, "Close", COLOR_ACCENT);

        draw_text(
            buffer,
            width,
            sheet.x + INSET,
            sheet.y + 64,
            "PRICE RANGE",
            COLOR_TEXT_MUTED,
        );
        let price_caption = format!(
            "${} - ${}",
            self.selection.lower_price as i32, self.selection.upper_price as i32
        );
        draw_text(
            buffer,
            width,
            sheet.x + INSET,
            sheet.y + 84,
            &price_caption,
            COLOR_TEXT,
        );
        self.draw_slider(buffer, width, PriceBound::Lower, self.selection.lower_price);
        self.draw_slider(buffer, width, PriceBound::Upper, self.selection.upper_price);

        draw_text(
            buffer,
            width,
            sheet.x + INSET,
            sheet.y + 196,
            "BEDROOMS",
            COLOR_TEXT_MUTED,
        );
        draw_segments(
            buffer,
            width,
            &segments_rect(RoomGroup::Beds),
            self.selection.min_beds,
        );

        draw_text(
            buffer,
            width,
            sheet.x + INSET,
            sheet.y + 268,
            "BATHROOMS",
            COLOR_TEXT_MUTED,
        );
        draw_segments(
            buffer,
            width,
            &segments_rect(RoomGroup::Baths),
            self.selection.min_baths,
        );

        let apply = apply_rect();
        fill_rect(buffer, width, &apply, COLOR_ACCENT);
        let caption = "Apply Filters";
        draw_text(
            buffer,
            width,
            apply.center_x() - (text_width(caption, 1) / 2) as i32,
            apply.center_y() - 4,
            caption,
            COLOR_SURFACE,
        );
    }

    fn draw_slider(&self, buffer: &mut [u32], width: usize, bound: PriceBound, value: f32) {
        let track = slider_rect(bound);
        fill_rect(buffer, width, &track, COLOR_CHIP);
        draw_rect(buffer, width, &track, COLOR_OUTLINE);

        let knob_x = value_to_x(value, &track);
        let center_y = track.center_y();
        for x in (track.x + TRACK_KNOB_INSET)..knob_x {
            set_line_pixel(buffer, width, x, center_y, COLOR_ACCENT);
        }
        for x in knob_x..(track.right() - TRACK_KNOB_INSET) {
            set_line_pixel(buffer, width, x, center_y, COLOR_OUTLINE);
        }

        let highlighted = self.active_drag == Some(bound);
        let knob = Rect::new(knob_x - 5, track.y + 3, 10, TRACK_HEIGHT - 6);
        fill_rect(
            buffer,
            width,
            &knob,
            if highlighted { COLOR_TEXT } else { COLOR_ACCENT },
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoomGroup {
    Beds,
    Baths,
}

fn set_line_pixel(buffer: &mut [u32], width: usize, x: i32, y: i32, color: u32) {
    for dy in -1..=1 {
        super::draw::set_pixel(buffer, width, x, y + dy, color);
    }
}

fn draw_segments(buffer: &mut [u32], width: usize, rect: &Rect, selected: u32) {
    let count = ROOM_MINIMUM_MAX + 1;
    let segment_w = rect.w / count as usize;
    for value in 0..count {
        let segment = Rect::new(
            rect.x + (value as usize * segment_w) as i32,
            rect.y,
            segment_w,
            rect.h,
        );
        let active = value == selected;
        fill_rect(
            buffer,
            width,
            &segment,
            if active { COLOR_ACCENT } else { COLOR_CHIP },
        );
        draw_rect(buffer, width, &segment, COLOR_OUTLINE);

        let caption = FilterSelection::room_minimum_label(value);
        draw_text(
            buffer,
            width,
            segment.center_x() - (text_width(&caption, 1) / 2) as i32,
            segment.center_y() - 4,
            &caption,
            if active { COLOR_SURFACE } else { COLOR_TEXT },
        );
    }
}

pub(crate) fn sheet_rect() -> Rect {
    Rect::new(
        SHEET_MARGIN,
        SHEET_TOP,
        WINDOW_WIDTH - 2 * SHEET_MARGIN as usize,
        SHEET_HEIGHT,
    )
}

fn close_rect() -> Rect {
    let sheet = sheet_rect();
    let w = text_width("Close", 1);
    Rect::new(sheet.right() - INSET - w as i32, sheet.y + 18, w, 16)
}

fn slider_rect(bound: PriceBound) -> Rect {
    let sheet = sheet_rect();
    let y = match bound {
        PriceBound::Lower => sheet.y + 104,
        PriceBound::Upper => sheet.y + 140,
    };
    Rect::new(
        sheet.x + INSET,
        y,
        sheet.w - 2 * INSET as usize,
        TRACK_HEIGHT,
    )
}

pub(crate) fn segments_rect(group: RoomGroup) -> Rect {
    let sheet = sheet_rect();
    let y = match group {
        RoomGroup::Beds => sheet.y + 216,
        RoomGroup::Baths => sheet.y + 288,
    };
    Rect::new(
        sheet.x + INSET,
        y,
        sheet.w - 2 * INSET as usize,
        SEGMENT_HEIGHT,
    )
}

fn apply_rect() -> Rect {
    let sheet = sheet_rect();
    Rect::new(
        sheet.x + INSET,
        sheet.bottom() - INSET - 44,
        sheet.w - 2 * INSET as usize,
        44,
    )
}

fn segment_at(rect: &Rect, mouse_x: f32) -> u32 {
    let count = ROOM_MINIMUM_MAX + 1;
    let segment_w = (rect.w / count as usize).max(1);
    let offset = (mouse_x as i32 - rect.x).max(0) as usize;
    ((offset / segment_w) as u32).min(ROOM_MINIMUM_MAX)
}

fn value_to_x(value: f32, track: &Rect) -> i32 {
    let left = (track.x + TRACK_KNOB_INSET) as f32;
    let right = (track.right() - TRACK_KNOB_INSET) as f32;
    let clamped = value.clamp(PRICE_RANGE_MIN, PRICE_RANGE_MAX);
    let t = (clamped - PRICE_RANGE_MIN) / (PRICE_RANGE_MAX - PRICE_RANGE_MIN);
    (left + t * (right - left)).round() as i32
}

fn x_to_value(x: f32, track: &Rect) -> f32 {
    let left = (track.x + TRACK_KNOB_INSET) as f32;
    let right = (track.right() - TRACK_KNOB_INSET) as f32;
    let clamped = x.clamp(left, right);
    let t = (clamped - left) / (right - left);
    PRICE_RANGE_MIN + t * (PRICE_RANGE_MAX - PRICE_RANGE_MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click_at(x: f32, y: f32) -> InputState {
        InputState {
            mouse: Some((x, y)),
            mouse_down: true,
            clicked: true,
            ..InputState::default()
        }
    }

    #[test]
    fn opens_with_default_selection() {
        let sheet = FilterSheet::new();
        assert_eq!(sheet.selection, FilterSelection::default());
    }

    #[test]
    fn price_mapping_round_trips_within_tolerance() {
        let track = slider_rect(PriceBound::Lower);
        let original = 2750.0;
        let x = value_to_x(original, &track);
        let back = x_to_value(x as f32, &track);
        assert!((original - back).abs() < 25.0, "got {back}");
    }

    #[test]
    fn dragging_past_the_track_edges_clamps_to_the_range() {
        let track = slider_rect(PriceBound::Upper);
        assert_eq!(x_to_value(-1000.0, &track), PRICE_RANGE_MIN);
        assert_eq!(x_to_value(10_000.0, &track), PRICE_RANGE_MAX);
    }

    #[test]
    fn lower_slider_may_pass_the_upper_one() {
        let mut sheet = FilterSheet::new();

        let upper = slider_rect(PriceBound::Upper);
        sheet.update(&click_at(upper.x as f32, upper.center_y() as f32));
        sheet.update(&InputState::default());

        let lower = slider_rect(PriceBound::Lower);
        sheet.update(&click_at(lower.right() as f32 - 1.0, lower.center_y() as f32));

        assert!(sheet.selection.lower_price > sheet.selection.upper_price);
        assert!(sheet.selection.validate().is_ok());
    }

    #[test]
    fn segment_clicks_select_room_minimums() {
        let mut sheet = FilterSheet::new();
        let beds = segments_rect(RoomGroup::Beds);
        let segment_w = (beds.w / 5) as f32;

        sheet.update(&click_at(
            beds.x as f32 + segment_w * 2.5,
            beds.center_y() as f32,
        ));
        assert_eq!(sheet.selection.min_beds, 2);

        let baths = segments_rect(RoomGroup::Baths);
        sheet.update(&click_at(
            beds.x as f32 + segment_w * 4.5,
            baths.center_y() as f32,
        ));
        assert_eq!(sheet.selection.min_baths, 4);
        assert_eq!(sheet.selection.min_beds, 2);
    }

    #[test]
    fn segment_hit_testing_clamps_to_the_option_set() {
        let rect = segments_rect(RoomGroup::Beds);
        assert_eq!(segment_at(&rect, rect.x as f32), 0);
        assert_eq!(segment_at(&rect, rect.right() as f32 + 50.0), 4);
    }

    #[test]
    fn close_and_apply_both_dismiss() {
        let mut sheet = FilterSheet::new();
        let close = close_rect();
        let action = sheet.update(&click_at(close.center_x() as f32, close.center_y() as f32));
        assert_eq!(action, Some(SheetAction::Dismiss));

        let mut sheet = FilterSheet::new();
        let apply = apply_rect();
        let action = sheet.update(&click_at(apply.center_x() as f32, apply.center_y() as f32));
        assert_eq!(action, Some(SheetAction::Dismiss));
    }

    #[test]
    fn escape_dismisses_the_sheet() {
        let mut sheet = FilterSheet::new();
        let action = sheet.update(&InputState {
            escape: true,
            ..InputState::default()
        });
        assert_eq!(action, Some(SheetAction::Dismiss));
    }
}
