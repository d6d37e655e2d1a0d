use rentscout_application::ApplicationService;
use rentscout_domain::Property;

use super::draw::{
    blit_cover, dim_rect, draw_heart, draw_rect, draw_text, draw_text_scaled, fill_circle,
    fill_rect, text_width, Rect,
};
use super::map_panel::{draw_map, MapRegion, DETAIL_SPAN};
use super::{
    AssetCache, InputState, COLOR_ACCENT, COLOR_BACKGROUND, COLOR_CHIP, COLOR_OUTLINE,
    COLOR_SURFACE, COLOR_TEXT, COLOR_TEXT_MUTED, MARGIN, WINDOW_HEIGHT, WINDOW_WIDTH,
};

const STRIP_HEIGHT: usize = 300;
const MAP_HEIGHT: usize = 200;
const CHIP_RADIUS: i32 = 14;
const INSIGHT_CARD_HEIGHT: usize = 88;
const PARAGRAPH_CHARS_PER_LINE: usize = 46;
const SCROLL_STEP: f32 = 36.0;

/// Fixed marketing copy from the prototype; identical for every listing.
const DESCRIPTION: &str = "This beautiful apartment features modern finishes, an open floor \
plan, and plenty of natural light. The kitchen includes stainless steel appliances and granite \
countertops. Walking distance to shops, restaurants, and public transportation.";

/// Hard-coded neighborhood figures; not derived from any data source.
const INSIGHTS: [(&str, &str); 3] = [
    ("School Rating", "8/10"),
    ("Crime Rate", "Low"),
    ("Walk Score", "85/100"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DetailAction {
    Back,
}

/// Detail screen for a single listing. Receives the Property by value at
/// navigation time and owns all of its transient state.
#[derive(Debug)]
pub(crate) struct DetailScreen {
    property: Property,
    image_index: usize,
    scroll: i32,
}

impl DetailScreen {
    pub fn new(property: Property) -> Self {
        Self {
            property,
            image_index: 0,
            scroll: 0,
        }
    }

    #[cfg(test)]
    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn update(&mut self, input: &InputState) -> Option<DetailAction> {
        if input.escape {
            return Some(DetailAction::Back);
        }

        if input.left {
            self.step_image(-1);
        }
        if input.right {
            self.step_image(1);
        }

        if input.wheel_y != 0.0 {
            let max = max_scroll(self.content_height());
            self.scroll = (self.scroll - (input.wheel_y * SCROLL_STEP) as i32).clamp(0, max);
        }

        if let Some((mx, my)) = input.mouse {
            if input.clicked {
                let content_y = my + self.scroll as f32;
                if chip_rect(0).contains(mx, content_y) {
                    return Some(DetailAction::Back);
                }
                if chip_rect(1).contains(mx, content_y) {
                    log::debug!("share tapped; sharing is not wired up");
                }
                if chip_rect(2).contains(mx, content_y) {
                    log::debug!("favorite tapped; favorites are not wired up");
                }
                if self.property.image_names.len() > 1 {
                    if page_arrow_rect(false).contains(mx, content_y) {
                        self.step_image(-1);
                    }
                    if page_arrow_rect(true).contains(mx, content_y) {
                        self.step_image(1);
                    }
                }
            }
        }

        None
    }

    fn step_image(&mut self, delta: i32) {
        self.image_index = step_index(self.image_index, delta, self.property.image_names.len());
    }

    fn content_height(&self) -> usize {
        let description_lines = word_wrap(DESCRIPTION, PARAGRAPH_CHARS_PER_LINE).len();
        STRIP_HEIGHT + 330 + description_lines * 14 + 40 + MAP_HEIGHT + 40
    }

    pub fn draw(
        &self,
        buffer: &mut [u32],
        width: usize,
        assets: &mut AssetCache,
        service: &ApplicationService,
    ) {
        fill_rect(
            buffer,
            width,
            &Rect::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT),
            COLOR_BACKGROUND,
        );

        let dy = -self.scroll;
        self.draw_strip(buffer, width, assets, service, dy);

        let left = MARGIN as i32;
        let mut y = STRIP_HEIGHT as i32 + 20 + dy;

        draw_text_scaled(buffer, width, left, y, &self.property.price, COLOR_TEXT, 2);
        y += 26;
        draw_text(buffer, width, left, y, &self.property.title, COLOR_TEXT);
        y += 18;
        draw_text(
            buffer,
            width,
            left,
            y,
            &self.property.address,
            COLOR_TEXT_MUTED,
        );
        y += 22;
        divider(buffer, width, y);
        y += 14;

        self.draw_stats_row(buffer, width, y);
        y += 52;
        divider(buffer, width, y);
        y += 14;

        draw_text(buffer, width, left, y, "Neighborhood Insights", COLOR_TEXT);
        y += 20;
        draw_insight_cards(buffer, width, y);
        y += INSIGHT_CARD_HEIGHT as i32 + 14;
        divider(buffer, width, y);
        y += 14;

        draw_text(buffer, width, left, y, "Description", COLOR_TEXT);
        y += 18;
        for line in word_wrap(DESCRIPTION, PARAGRAPH_CHARS_PER_LINE) {
            draw_text(buffer, width, left, y, &line, COLOR_TEXT_MUTED);
            y += 14;
        }
        y += 12;
        divider(buffer, width, y);
        y += 14;

        draw_text(buffer, width, left, y, "Location", COLOR_TEXT);
        y += 20;
        let map_rect = Rect::new(left, y, WINDOW_WIDTH - 2 * MARGIN, MAP_HEIGHT);
        let region = MapRegion::centered_on(&self.property, DETAIL_SPAN);
        draw_map(
            buffer,
            width,
            &map_rect,
            &region,
            &[(self.property.latitude, self.property.longitude)],
        );
    }

    fn draw_strip(
        &self,
        buffer: &mut [u32],
        width: usize,
        assets: &mut AssetCache,
        service: &ApplicationService,
        dy: i32,
    ) {
        let strip = Rect::new(0, dy, WINDOW_WIDTH, STRIP_HEIGHT);
        let name = self
            .property
            .image_names
            .get(self.image_index)
            .map(String::as_str)
            .unwrap_or("");
        let image = assets.image(service, name);
        blit_cover(buffer, width, &strip, image);
        dim_rect(buffer, width, &Rect::new(0, dy, WINDOW_WIDTH, 4), 30);

        for (index, caption) in ["<", "^"].iter().enumerate() {
            let chip = chip_rect(index).shifted_y(dy);
            fill_circle(
                buffer,
                width,
                chip.center_x(),
                chip.center_y(),
                CHIP_RADIUS,
                COLOR_SURFACE,
            );
            draw_text(
                buffer,
                width,
                chip.center_x() - 4,
                chip.center_y() - 4,
                caption,
                COLOR_TEXT,
            );
        }
        let heart_chip = chip_rect(2).shifted_y(dy);
        fill_circle(
            buffer,
            width,
            heart_chip.center_x(),
            heart_chip.center_y(),
            CHIP_RADIUS,
            COLOR_SURFACE,
        );
        draw_heart(
            buffer,
            width,
            heart_chip.center_x() - 3,
            heart_chip.center_y() - 3,
            COLOR_TEXT,
        );

        if self.property.image_names.len() > 1 {
            for (forward, caption) in [(false, "<"), (true, ">")] {
                let arrow = page_arrow_rect(forward).shifted_y(dy);
                fill_circle(
                    buffer,
                    width,
                    arrow.center_x(),
                    arrow.center_y(),
                    CHIP_RADIUS,
                    COLOR_CHIP,
                );
                draw_text(
                    buffer,
                    width,
                    arrow.center_x() - 4,
                    arrow.center_y() - 4,
                    caption,
                    COLOR_TEXT,
                );
            }
        }
    }

    fn draw_stats_row(&self, buffer: &mut [u32], width: usize, y: i32) {
        let stats = [
            (self.property.beds.to_string(), "Beds"),
            (self.property.baths.to_string(), "Baths"),
            (self.property.sqft.to_string(), "Sq Ft"),
        ];
        let column_w = (WINDOW_WIDTH - 2 * MARGIN) / stats.len();
        for (index, (value, caption)) in stats.iter().enumerate() {
            let center_x = MARGIN as i32 + (index * column_w + column_w / 2) as i32;
            draw_text_scaled(
                buffer,
                width,
                center_x - (text_width(value, 2) / 2) as i32,
                y,
                value,
                COLOR_TEXT,
                2,
            );
            draw_text(
                buffer,
                width,
                center_x - (text_width(caption, 1) / 2) as i32,
                y + 24,
                caption,
                COLOR_TEXT_MUTED,
            );
        }
    }
}

fn divider(buffer: &mut [u32], width: usize, y: i32) {
    fill_rect(
        buffer,
        width,
        &Rect::new(MARGIN as i32, y, WINDOW_WIDTH - 2 * MARGIN, 1),
        COLOR_OUTLINE,
    );
}

fn draw_insight_cards(buffer: &mut [u32], width: usize, y: i32) {
    let gap = 12usize;
    let card_w = (WINDOW_WIDTH - 2 * MARGIN - 2 * gap) / INSIGHTS.len();
    for (index, (title, value)) in INSIGHTS.iter().enumerate() {
        let card = Rect::new(
            (MARGIN + index * (card_w + gap)) as i32,
            y,
            card_w,
            INSIGHT_CARD_HEIGHT,
        );
        fill_rect(buffer, width, &card, COLOR_CHIP);
        draw_rect(buffer, width, &card, COLOR_OUTLINE);

        fill_rect(
            buffer,
            width,
            &Rect::new(card.center_x() - 5, card.y + 10, 10, 10),
            COLOR_ACCENT,
        );
        for (line_index, line) in title.split(' ').enumerate() {
            draw_text(
                buffer,
                width,
                card.center_x() - (text_width(line, 1) / 2) as i32,
                card.y + 30 + line_index as i32 * 12,
                line,
                COLOR_TEXT_MUTED,
            );
        }
        draw_text(
            buffer,
            width,
            card.center_x() - (text_width(value, 1) / 2) as i32,
            card.bottom() - 20,
            value,
            COLOR_TEXT,
        );
    }
}

fn chip_rect(index: usize) -> Rect {
    let size = (CHIP_RADIUS * 2) as usize;
    match index {
        0 => Rect::new(MARGIN as i32, 16, size, size),
        1 => Rect::new((WINDOW_WIDTH - MARGIN - 2 * size - 10) as i32, 16, size, size),
        _ => Rect::new((WINDOW_WIDTH - MARGIN - size) as i32, 16, size, size),
    }
}

fn page_arrow_rect(forward: bool) -> Rect {
    let size = (CHIP_RADIUS * 2) as usize;
    let y = (STRIP_HEIGHT / 2) as i32 - CHIP_RADIUS;
    if forward {
        Rect::new((WINDOW_WIDTH - MARGIN - size) as i32, y, size, size)
    } else {
        Rect::new(MARGIN as i32, y, size, size)
    }
}

fn max_scroll(content_height: usize) -> i32 {
    content_height.saturating_sub(WINDOW_HEIGHT) as i32
}

/// Pages the image strip: clamps to [0, len - 1], no looping. An empty
/// strip stays at 0 and renders the placeholder.
fn step_index(current: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = (len - 1) as i64;
    (current as i64 + delta as i64).clamp(0, last) as usize
}

fn word_wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use rentscout_domain::PropertyId;

    use super::*;

    fn property_with_images(names: &[&str]) -> Property {
        Property {
            id: PropertyId::new(1).expect("id"),
            title: "Spacious 3BR with View".to_string(),
            price: "$2,400/mo".to_string(),
            beds: 3,
            baths: 2,
            sqft: 1600,
            address: "105 S Mill Ave, Tempe, AZ 85281".to_string(),
            image_names: names.iter().map(|name| name.to_string()).collect(),
            latitude: 33.41919,
            longitude: -111.94333,
        }
    }

    #[test]
    fn image_index_starts_at_zero() {
        let screen = DetailScreen::new(property_with_images(&["View", "Modern", "Balcony"]));
        assert_eq!(screen.image_index(), 0);
    }

    #[test]
    fn paging_steps_within_bounds() {
        assert_eq!(step_index(0, 1, 3), 1);
        assert_eq!(step_index(1, 1, 3), 2);
        assert_eq!(step_index(2, 1, 3), 2);
        assert_eq!(step_index(0, -1, 3), 0);
        assert_eq!(step_index(0, 1, 1), 0);
        assert_eq!(step_index(0, -1, 0), 0);
    }

    #[test]
    fn arrow_keys_page_the_strip() {
        let mut screen = DetailScreen::new(property_with_images(&["View", "Modern", "Balcony"]));

        screen.update(&InputState {
            right: true,
            ..InputState::default()
        });
        assert_eq!(screen.image_index(), 1);

        screen.update(&InputState {
            left: true,
            ..InputState::default()
        });
        assert_eq!(screen.image_index(), 0);

        for _ in 0..5 {
            screen.update(&InputState {
                right: true,
                ..InputState::default()
            });
        }
        assert_eq!(screen.image_index(), 2);
    }

    #[test]
    fn escape_and_the_back_chip_return_to_the_feed() {
        let mut screen = DetailScreen::new(property_with_images(&["View"]));
        let action = screen.update(&InputState {
            escape: true,
            ..InputState::default()
        });
        assert_eq!(action, Some(DetailAction::Back));

        let mut screen = DetailScreen::new(property_with_images(&["View"]));
        let back = chip_rect(0);
        let action = screen.update(&InputState {
            mouse: Some((back.center_x() as f32, back.center_y() as f32)),
            mouse_down: true,
            clicked: true,
            ..InputState::default()
        });
        assert_eq!(action, Some(DetailAction::Back));
    }

    #[test]
    fn share_and_favorite_chips_do_nothing() {
        let mut screen = DetailScreen::new(property_with_images(&["View", "Modern"]));
        for index in [1, 2] {
            let chip = chip_rect(index);
            let action = screen.update(&InputState {
                mouse: Some((chip.center_x() as f32, chip.center_y() as f32)),
                mouse_down: true,
                clicked: true,
                ..InputState::default()
            });
            assert_eq!(action, None);
            assert_eq!(screen.image_index(), 0);
        }
    }

    #[test]
    fn word_wrap_keeps_words_whole_within_the_line_limit() {
        let lines = word_wrap("alpha beta gamma delta", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
        for line in word_wrap(DESCRIPTION, PARAGRAPH_CHARS_PER_LINE) {
            assert!(line.chars().count() <= PARAGRAPH_CHARS_PER_LINE);
        }
    }

    #[test]
    fn an_empty_image_list_never_panics() {
        let mut screen = DetailScreen::new(property_with_images(&[]));
        screen.update(&InputState {
            right: true,
            ..InputState::default()
        });
        assert_eq!(screen.image_index(), 0);
    }
}
