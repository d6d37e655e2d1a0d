mod detail;
mod draw;
mod feed;
mod filter_sheet;
mod map_panel;

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

use minifb::{InputCallback, Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use rentscout_adapters::placeholder_image;
use rentscout_application::{
    ApplicationService, AssetImage, ListListingsCommand, LoadAssetCommand, RecentlyViewedQuery,
};

use self::detail::{DetailAction, DetailScreen};
use self::feed::{FeedAction, FeedScreen};

pub(crate) const WINDOW_WIDTH: usize = 420;
pub(crate) const WINDOW_HEIGHT: usize = 780;
pub(crate) const MARGIN: usize = 16;

pub(crate) const COLOR_BACKGROUND: u32 = 0xF4F6F8;
pub(crate) const COLOR_SURFACE: u32 = 0xFFFFFF;
pub(crate) const COLOR_ACCENT: u32 = 0x2563EB;
pub(crate) const COLOR_CHIP: u32 = 0xE8EAED;
pub(crate) const COLOR_TEXT: u32 = 0x1F2430;
pub(crate) const COLOR_TEXT_MUTED: u32 = 0x6B7280;
pub(crate) const COLOR_OUTLINE: u32 = 0xD4D9E0;

/// One frame's worth of user input, gathered from the window before the
/// active screen updates.
#[derive(Debug, Clone, Default)]
pub(crate) struct InputState {
    pub mouse: Option<(f32, f32)>,
    pub mouse_down: bool,
    pub clicked: bool,
    pub wheel_x: f32,
    pub wheel_y: f32,
    pub typed: Vec<char>,
    pub backspace: bool,
    pub left: bool,
    pub right: bool,
    pub escape: bool,
}

impl InputState {
    pub fn click_at(&self) -> Option<(f32, f32)> {
        if self.clicked {
            self.mouse
        } else {
            None
        }
    }
}

struct CharSink {
    sender: Sender<u32>,
}

impl InputCallback for CharSink {
    fn add_char(&mut self, uni_char: u32) {
        let _ = self.sender.send(uni_char);
    }
}

/// Per-name memo of decoded assets so the event loop never re-decodes on
/// redraw. A load failure is cached as the placeholder.
pub(crate) struct AssetCache {
    images: HashMap<String, AssetImage>,
}

impl AssetCache {
    fn new() -> Self {
        Self {
            images: HashMap::new(),
        }
    }

    pub fn image(&mut self, service: &ApplicationService, name: &str) -> &AssetImage {
        self.images
            .entry(name.to_string())
            .or_insert_with(|| fetch_asset(service, name))
    }
}

fn fetch_asset(service: &ApplicationService, name: &str) -> AssetImage {
    if name.is_empty() {
        return placeholder_image(name);
    }
    match service.load_asset(LoadAssetCommand {
        name: name.to_string(),
    }) {
        Ok(image) => image,
        Err(error) => {
            log::warn!("asset `{name}` failed to load: {error}");
            placeholder_image(name)
        }
    }
}

enum Screen {
    Feed,
    Detail(DetailScreen),
}

pub fn launch_window(service: &ApplicationService) -> Result<(), String> {
    let properties = service
        .list_listings(ListListingsCommand)
        .map_err(|error| format!("list listings failed: {error}"))?;
    let recent = service
        .recently_viewed(RecentlyViewedQuery)
        .map_err(|error| format!("recently viewed failed: {error}"))?;

    let mut window = Window::new(
        "RentScout",
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        WindowOptions::default(),
    )
    .map_err(|error| format!("failed to start UI window: {error}"))?;
    window.limit_update_rate(Some(Duration::from_micros(16_000)));

    let (sender, receiver) = channel();
    window.set_input_callback(Box::new(CharSink { sender }));

    log::info!("window open with {} listings", properties.len());

    let mut buffer = vec![COLOR_BACKGROUND; WINDOW_WIDTH * WINDOW_HEIGHT];
    let mut assets = AssetCache::new();
    let mut feed = FeedScreen::new();
    let mut screen = Screen::Feed;
    let mut was_mouse_down = false;
    let mut quitting = false;

    while window.is_open() && !quitting {
        let input = gather_input(&window, &receiver, was_mouse_down);
        was_mouse_down = input.mouse_down;

        let mut next_screen = None;
        match &mut screen {
            Screen::Feed => match feed.update(&input, &properties, &recent) {
                Some(FeedAction::OpenDetail(property)) => {
                    log::info!("opening listing {}", property.id.get());
                    next_screen = Some(Screen::Detail(DetailScreen::new(property)));
                }
                Some(FeedAction::Quit) => quitting = true,
                None => {}
            },
            Screen::Detail(detail_screen) => {
                if detail_screen.update(&input) == Some(DetailAction::Back) {
                    next_screen = Some(Screen::Feed);
                }
            }
        }
        if let Some(new_screen) = next_screen {
            screen = new_screen;
        }

        match &screen {
            Screen::Feed => feed.draw(
                &mut buffer,
                WINDOW_WIDTH,
                &properties,
                &recent,
                &mut assets,
                service,
            ),
            Screen::Detail(detail_screen) => {
                detail_screen.draw(&mut buffer, WINDOW_WIDTH, &mut assets, service)
            }
        }

        window
            .update_with_buffer(&buffer, WINDOW_WIDTH, WINDOW_HEIGHT)
            .map_err(|error| format!("failed to update UI window: {error}"))?;
    }

    Ok(())
}

fn gather_input(window: &Window, chars: &Receiver<u32>, was_mouse_down: bool) -> InputState {
    let mouse_down = window.get_mouse_down(MouseButton::Left);
    let (wheel_x, wheel_y) = window.get_scroll_wheel().unwrap_or((0.0, 0.0));
    let typed = chars
        .try_iter()
        .filter_map(char::from_u32)
        .filter(|ch| !ch.is_control())
        .collect();

    InputState {
        mouse: window.get_mouse_pos(MouseMode::Clamp),
        mouse_down,
        clicked: mouse_down && !was_mouse_down,
        wheel_x,
        wheel_y,
        typed,
        backspace: window.is_key_pressed(Key::Backspace, KeyRepeat::Yes),
        left: window.is_key_pressed(Key::Left, KeyRepeat::No),
        right: window.is_key_pressed(Key::Right, KeyRepeat::No),
        escape: window.is_key_pressed(Key::Escape, KeyRepeat::No),
    }
}
