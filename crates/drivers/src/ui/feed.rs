use rentscout_adapters::{present_card_lines, present_compact_lines};
use rentscout_application::ApplicationService;
use rentscout_domain::{Category, Property};

use super::draw::{
    blit_cover, draw_heart, draw_magnifier, draw_rect, draw_text, draw_text_scaled, fill_circle,
    fill_rect, text_width, Rect,
};
use super::filter_sheet::FilterSheet;
use super::map_panel::{draw_map, FEED_REGION};
use super::{
    AssetCache, InputState, COLOR_ACCENT, COLOR_BACKGROUND, COLOR_CHIP, COLOR_OUTLINE,
    COLOR_SURFACE, COLOR_TEXT, COLOR_TEXT_MUTED, MARGIN, WINDOW_HEIGHT, WINDOW_WIDTH,
};

const SEARCH_PLACEHOLDER: &str = "Search by location, zip code, or address";
const SEARCH_MAX_CHARS: usize = 60;
const SCROLL_STEP: f32 = 36.0;

const CARD_WIDTH: usize = WINDOW_WIDTH - 2 * MARGIN;
const CARD_IMAGE_HEIGHT: usize = 180;
const CARD_HEIGHT: usize = CARD_IMAGE_HEIGHT + 92;
const CARD_GAP: usize = 16;
const STRIP_CARD_WIDTH: usize = 160;
const STRIP_CARD_IMAGE_HEIGHT: usize = 100;
const STRIP_CARD_HEIGHT: usize = STRIP_CARD_IMAGE_HEIGHT + 58;
const STRIP_GAP: usize = 14;

#[derive(Debug)]
pub(crate) enum FeedAction {
    OpenDetail(Property),
    Quit,
}

/// The home feed. All state here is transient and screen-local: search
/// text, the active category chip, the modal filter sheet, scroll offsets.
#[derive(Debug)]
pub(crate) struct FeedScreen {
    search_text: String,
    search_focused: bool,
    category: Category,
    sheet: Option<FilterSheet>,
    scroll: i32,
    chip_scroll: i32,
    strip_scroll: i32,
}

impl FeedScreen {
    pub fn new() -> Self {
        Self {
            search_text: String::new(),
            search_focused: false,
            category: Category::default(),
            sheet: None,
            scroll: 0,
            chip_scroll: 0,
            strip_scroll: 0,
        }
    }

    #[cfg(test)]
    pub fn category(&self) -> Category {
        self.category
    }

    #[cfg(test)]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[cfg(test)]
    pub fn sheet_is_open(&self) -> bool {
        self.sheet.is_some()
    }

    /// The card list is always the full store order: the category chip,
    /// search text, and filter selection are captured but never joined
    /// against the listing.
    pub fn visible_listings<'a>(&self, all: &'a [Property]) -> &'a [Property] {
        all
    }

    pub fn update(
        &mut self,
        input: &InputState,
        properties: &[Property],
        recent: &[Property],
    ) -> Option<FeedAction> {
        if let Some(mut sheet) = self.sheet.take() {
            if sheet.update(input).is_none() {
                self.sheet = Some(sheet);
            }
            return None;
        }

        if input.escape {
            return Some(FeedAction::Quit);
        }

        let layout = feed_layout(properties.len(), recent.len());
        self.handle_wheel(input, &layout);

        if self.search_focused {
            for ch in &input.typed {
                if self.search_text.chars().count() < SEARCH_MAX_CHARS {
                    self.search_text.push(*ch);
                }
            }
            if input.backspace {
                self.search_text.pop();
            }
        }

        if let Some((mx, my)) = input.click_at() {
            let cy = my + self.scroll as f32;

            self.search_focused = layout.search.contains(mx, cy);
            if !self.search_text.is_empty() && layout.search_clear.contains(mx, cy) {
                self.search_text.clear();
            }

            if layout.profile.contains(mx, cy) {
                log::debug!("profile tapped; there is no account screen");
            }

            for (chip, category) in layout.chips.iter().zip(Category::ALL) {
                if chip.shifted_x(-self.chip_scroll).contains(mx, cy) {
                    self.category = category;
                    log::info!("category selected: {}", category.label());
                }
            }
            if layout
                .filters_chip
                .shifted_x(-self.chip_scroll)
                .contains(mx, cy)
            {
                self.sheet = Some(FilterSheet::new());
                return None;
            }

            if layout.view_all.contains(mx, cy) {
                log::debug!("view all tapped; there is no browse screen");
            }

            for (index, card) in layout.cards.iter().enumerate() {
                if card.contains(mx, cy) {
                    if layout.card_hearts[index].contains(mx, cy) {
                        log::debug!("favorite tapped; favorites are not wired up");
                        return None;
                    }
                    return Some(FeedAction::OpenDetail(properties[index].clone()));
                }
            }

            for (index, card) in layout.strip_cards.iter().enumerate() {
                if card.shifted_x(-self.strip_scroll).contains(mx, cy) {
                    return Some(FeedAction::OpenDetail(recent[index].clone()));
                }
            }
        }

        None
    }

    fn handle_wheel(&mut self, input: &InputState, layout: &FeedLayout) {
        if input.wheel_x == 0.0 && input.wheel_y == 0.0 {
            return;
        }
        let Some((mx, my)) = input.mouse else {
            return;
        };

        let chip_row = layout.chip_row.shifted_y(-self.scroll);
        let strip = layout.strip.shifted_y(-self.scroll);
        let sideways = if input.wheel_x != 0.0 {
            input.wheel_x
        } else {
            input.wheel_y
        };

        if chip_row.contains(mx, my) {
            let overflow = row_overflow(layout.filters_chip.right());
            self.chip_scroll =
                (self.chip_scroll + (sideways * SCROLL_STEP) as i32).clamp(0, overflow);
        } else if strip.contains(mx, my) {
            let overflow = layout
                .strip_cards
                .last()
                .map(|card| row_overflow(card.right()))
                .unwrap_or(0);
            self.strip_scroll =
                (self.strip_scroll + (sideways * SCROLL_STEP) as i32).clamp(0, overflow);
        } else {
            let max = max_scroll(layout.content_height);
            self.scroll = (self.scroll - (input.wheel_y * SCROLL_STEP) as i32).clamp(0, max);
        }
    }

    pub fn draw(
        &self,
        buffer: &mut [u32],
        width: usize,
        properties: &[Property],
        recent: &[Property],
        assets: &mut AssetCache,
        service: &ApplicationService,
    ) {
        fill_rect(
            buffer,
            width,
            &Rect::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT),
            COLOR_BACKGROUND,
        );

        let listings = self.visible_listings(properties);
        let layout = feed_layout(listings.len(), recent.len());
        let dy = -self.scroll;

        let header = layout.header.shifted_y(dy);
        draw_text_scaled(
            buffer,
            width,
            header.x,
            header.y + 10,
            "RentScout",
            COLOR_ACCENT,
            2,
        );
        draw_profile_icon(buffer, width, &layout.profile.shifted_y(dy));

        self.draw_search(buffer, width, &layout, dy);
        self.draw_chips(buffer, width, &layout, dy);

        let map = layout.map.shifted_y(dy);
        let markers: Vec<(f64, f64)> = listings
            .iter()
            .map(|property| (property.latitude, property.longitude))
            .collect();
        draw_map(buffer, width, &map, &FEED_REGION, &markers);

        draw_text(
            buffer,
            width,
            MARGIN as i32,
            layout.featured_heading_y + dy,
            "Featured Apartments",
            COLOR_TEXT,
        );
        let view_all = layout.view_all.shifted_y(dy);
        draw_text(buffer, width, view_all.x, view_all.y, "View All", COLOR_ACCENT);

        for (index, card) in layout.cards.iter().enumerate() {
            draw_card(
                buffer,
                width,
                &card.shifted_y(dy),
                &layout.card_hearts[index].shifted_y(dy),
                &listings[index],
                assets,
                service,
            );
        }

        draw_text(
            buffer,
            width,
            MARGIN as i32,
            layout.recent_heading_y + dy,
            "Recently Viewed",
            COLOR_TEXT,
        );
        for (index, card) in layout.strip_cards.iter().enumerate() {
            let on_screen = card.shifted_x(-self.strip_scroll).shifted_y(dy);
            draw_strip_card(buffer, width, &on_screen, &recent[index], assets, service);
        }

        if let Some(sheet) = &self.sheet {
            sheet.draw(buffer, width);
        }
    }

    fn draw_search(&self, buffer: &mut [u32], width: usize, layout: &FeedLayout, dy: i32) {
        let search = layout.search.shifted_y(dy);
        fill_rect(buffer, width, &search, COLOR_SURFACE);
        draw_rect(
            buffer,
            width,
            &search,
            if self.search_focused {
                COLOR_ACCENT
            } else {
                COLOR_OUTLINE
            },
        );
        draw_magnifier(buffer, width, search.x + 16, search.center_y(), COLOR_TEXT_MUTED);

        let text_x = search.x + 30;
        let text_y = search.center_y() - 4;
        if self.search_text.is_empty() {
            draw_text(buffer, width, text_x, text_y, SEARCH_PLACEHOLDER, COLOR_TEXT_MUTED);
        } else {
            let mut shown = self.search_text.clone();
            if self.search_focused {
                shown.push('_');
            }
            draw_text(buffer, width, text_x, text_y, &shown, COLOR_TEXT);

            let clear = layout.search_clear.shifted_y(dy);
            fill_circle(
                buffer,
                width,
                clear.center_x(),
                clear.center_y(),
                8,
                COLOR_CHIP,
            );
            draw_text(
                buffer,
                width,
                clear.center_x() - 4,
                clear.center_y() - 4,
                "x",
                COLOR_TEXT_MUTED,
            );
        }
    }

    fn draw_chips(&self, buffer: &mut [u32], width: usize, layout: &FeedLayout, dy: i32) {
        for (chip, category) in layout.chips.iter().zip(Category::ALL) {
            let on_screen = chip.shifted_x(-self.chip_scroll).shifted_y(dy);
            let active = category == self.category;
            fill_rect(
                buffer,
                width,
                &on_screen,
                if active { COLOR_ACCENT } else { COLOR_CHIP },
            );
            draw_text(
                buffer,
                width,
                on_screen.x + 12,
                on_screen.center_y() - 4,
                category.label(),
                if active { COLOR_SURFACE } else { COLOR_TEXT },
            );
        }

        let filters = layout
            .filters_chip
            .shifted_x(-self.chip_scroll)
            .shifted_y(dy);
        fill_rect(buffer, width, &filters, COLOR_CHIP);
        for line in 0..3 {
            fill_rect(
                buffer,
                width,
                &Rect::new(filters.x + 10, filters.y + 9 + line * 5, 12, 2),
                COLOR_TEXT,
            );
        }
        draw_text(
            buffer,
            width,
            filters.x + 28,
            filters.center_y() - 4,
            "Filters",
            COLOR_TEXT,
        );
    }
}

fn draw_card(
    buffer: &mut [u32],
    width: usize,
    card: &Rect,
    heart: &Rect,
    property: &Property,
    assets: &mut AssetCache,
    service: &ApplicationService,
) {
    fill_rect(buffer, width, card, COLOR_SURFACE);
    draw_rect(buffer, width, card, COLOR_OUTLINE);

    let photo = Rect::new(card.x, card.y, card.w, CARD_IMAGE_HEIGHT);
    let name = property.primary_image().unwrap_or("");
    blit_cover(buffer, width, &photo, assets.image(service, name));

    fill_circle(
        buffer,
        width,
        heart.center_x(),
        heart.center_y(),
        12,
        COLOR_SURFACE,
    );
    draw_heart(
        buffer,
        width,
        heart.center_x() - 3,
        heart.center_y() - 3,
        COLOR_TEXT,
    );

    let lines = present_card_lines(property);
    let left = card.x + 12;
    draw_text_scaled(buffer, width, left, card.y + 190, &lines[0], COLOR_TEXT, 2);
    draw_text(buffer, width, left, card.y + 212, &lines[1], COLOR_TEXT);
    draw_text(buffer, width, left, card.y + 228, &lines[2], COLOR_TEXT_MUTED);
    draw_text(buffer, width, left, card.y + 244, &lines[3], COLOR_TEXT_MUTED);
}

fn draw_strip_card(
    buffer: &mut [u32],
    width: usize,
    card: &Rect,
    property: &Property,
    assets: &mut AssetCache,
    service: &ApplicationService,
) {
    fill_rect(buffer, width, card, COLOR_SURFACE);
    draw_rect(buffer, width, card, COLOR_OUTLINE);

    let photo = Rect::new(card.x, card.y, card.w, STRIP_CARD_IMAGE_HEIGHT);
    let name = property.primary_image().unwrap_or("");
    blit_cover(buffer, width, &photo, assets.image(service, name));

    let lines = present_compact_lines(property);
    let left = card.x + 8;
    draw_text(buffer, width, left, card.y + 108, &lines[0], COLOR_TEXT);
    draw_text(buffer, width, left, card.y + 122, &lines[1], COLOR_TEXT_MUTED);
    draw_text(buffer, width, left, card.y + 136, &lines[2], COLOR_TEXT_MUTED);
}

fn draw_profile_icon(buffer: &mut [u32], width: usize, rect: &Rect) {
    fill_circle(
        buffer,
        width,
        rect.center_x(),
        rect.center_y(),
        (rect.w / 2) as i32,
        COLOR_ACCENT,
    );
    fill_circle(
        buffer,
        width,
        rect.center_x(),
        rect.center_y() - 4,
        4,
        COLOR_SURFACE,
    );
    fill_circle(
        buffer,
        width,
        rect.center_x(),
        rect.center_y() + 7,
        7,
        COLOR_SURFACE,
    );
}

#[derive(Debug)]
pub(crate) struct FeedLayout {
    pub header: Rect,
    pub profile: Rect,
    pub search: Rect,
    pub search_clear: Rect,
    pub chip_row: Rect,
    pub chips: Vec<Rect>,
    pub filters_chip: Rect,
    pub map: Rect,
    pub featured_heading_y: i32,
    pub view_all: Rect,
    pub cards: Vec<Rect>,
    pub card_hearts: Vec<Rect>,
    pub recent_heading_y: i32,
    pub strip: Rect,
    pub strip_cards: Vec<Rect>,
    pub content_height: usize,
}

/// Content-space layout of the feed, top to bottom. Scroll offsets are
/// applied by callers when hit-testing or drawing.
pub(crate) fn feed_layout(property_count: usize, recent_count: usize) -> FeedLayout {
    let left = MARGIN as i32;
    let inner_w = WINDOW_WIDTH - 2 * MARGIN;

    let header = Rect::new(left, 14, inner_w, 36);
    let profile = Rect::new(header.right() - 32, header.y + 2, 32, 32);
    let search = Rect::new(left, 64, inner_w, 44);
    let search_clear = Rect::new(search.right() - 30, search.y + 12, 20, 20);

    let chip_row = Rect::new(0, 122, WINDOW_WIDTH, 34);
    let mut chips = Vec::new();
    let mut chip_x = left;
    for category in Category::ALL {
        let w = text_width(category.label(), 1) + 24;
        chips.push(Rect::new(chip_x, chip_row.y + 2, w, 30));
        chip_x += w as i32 + 10;
    }
    let filters_chip = Rect::new(chip_x, chip_row.y + 2, text_width("Filters", 1) + 38, 30);

    let map = Rect::new(left, 170, inner_w, 200);

    let featured_heading_y = map.bottom() + 18;
    let view_all = Rect::new(
        (WINDOW_WIDTH - MARGIN - text_width("View All", 1)) as i32,
        featured_heading_y,
        text_width("View All", 1),
        12,
    );

    let cards_top = featured_heading_y + 26;
    let mut cards = Vec::new();
    let mut card_hearts = Vec::new();
    for index in 0..property_count {
        let card = Rect::new(
            left,
            cards_top + (index * (CARD_HEIGHT + CARD_GAP)) as i32,
            CARD_WIDTH,
            CARD_HEIGHT,
        );
        card_hearts.push(Rect::new(card.right() - 38, card.y + 10, 28, 28));
        cards.push(card);
    }
    let cards_bottom = cards_top + (property_count * (CARD_HEIGHT + CARD_GAP)) as i32;

    let recent_heading_y = cards_bottom + 6;
    let strip = Rect::new(0, recent_heading_y + 22, WINDOW_WIDTH, STRIP_CARD_HEIGHT);
    let mut strip_cards = Vec::new();
    for index in 0..recent_count {
        strip_cards.push(Rect::new(
            left + (index * (STRIP_CARD_WIDTH + STRIP_GAP)) as i32,
            strip.y,
            STRIP_CARD_WIDTH,
            STRIP_CARD_HEIGHT,
        ));
    }

    FeedLayout {
        header,
        profile,
        search,
        search_clear,
        chip_row,
        chips,
        filters_chip,
        map,
        featured_heading_y,
        view_all,
        cards,
        card_hearts,
        recent_heading_y,
        strip,
        strip_cards,
        content_height: (strip.bottom() + 24) as usize,
    }
}

fn row_overflow(content_right: i32) -> i32 {
    (content_right + MARGIN as i32 - WINDOW_WIDTH as i32).max(0)
}

fn max_scroll(content_height: usize) -> i32 {
    content_height.saturating_sub(WINDOW_HEIGHT) as i32
}
