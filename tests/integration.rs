// SPDX-License-Identifier: MPL-2.0
use iced::{Point, Rectangle, Size};
use photofolio::app::config;
use photofolio::app::i18n::fluent::I18n;
use photofolio::app::Screen;
use photofolio::content::{self, FocusPoint, ImageAsset};
use photofolio::media::{self, LoadTier, MemoryAssetSource, SharedAssetSource};
use photofolio::ui::lazy_image::{Effect, LazyImage, LazyImageOptions, Message};
use photofolio::ui::pages::{self, Page, PageOptions};
use photofolio::ui::state::{Carousel, ListenerRegistry, ScrollViewport};
use std::collections::VecDeque;
use std::fs;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn png(width: u32, height: u32) -> Vec<u8> {
    let buffer = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([90, 110, 130, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    buffer
        .write_to(&mut out, image_rs::ImageFormat::Png)
        .expect("png encoding should succeed");
    out.into_inner()
}

fn photo(file_id: &str) -> ImageAsset {
    ImageAsset {
        file_id: file_id.to_string(),
        extension: "png".to_string(),
        width: 1600,
        height: 1200,
        description: String::new(),
        focus: None,
    }
}

fn source_with_all_tiers(file_id: &str) -> SharedAssetSource {
    let mut source = MemoryAssetSource::new();
    for tier in LoadTier::ALL {
        source.insert(tier.asset_name(file_id, "png"), png(8, 6));
    }
    Arc::new(source)
}

fn window() -> Size {
    Size::new(800.0, 600.0)
}

fn on_screen(width: f32) -> Option<Rectangle> {
    Some(Rectangle::new(Point::new(10.0, 10.0), Size::new(width, width * 0.75)))
}

/// Runs fetch and decode effects against `source` until the instance stops
/// asking for work. Returns the tiers in the order they were fetched.
async fn drive(
    image: &mut LazyImage,
    source: &SharedAssetSource,
    effects: Vec<Effect>,
) -> Vec<LoadTier> {
    let mut queue: VecDeque<Effect> = effects.into();
    let mut fetched = Vec::new();
    while let Some(effect) = queue.pop_front() {
        let message = match effect {
            Effect::Fetch { tier, asset } => {
                fetched.push(tier);
                let result = media::asset::fetch(source.clone(), asset).await;
                Message::Fetched { tier, result }
            }
            Effect::Decode { tier, asset, bytes } => {
                let result = media::decode::decode_async(asset, bytes).await;
                Message::Decoded { tier, result }
            }
            Effect::Crop { tier, image: decoded, rect } => {
                let handle = media::decode::crop_async(decoded, rect).await;
                Message::Cropped { tier, rect, handle }
            }
            Effect::MediumShown => continue,
        };
        queue.extend(image.update(message, Instant::now()));
    }
    fetched
}

#[test]
fn content_directory_loads_in_album_order() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join(content::HOME_FILE),
        r#"{"photos":[{"file_id":"h1","extension":"jpg","width":1200,"height":800}],
            "biography":"ignored"}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join(content::PORTFOLIO_FILE),
        r#"{"photos":{
            "Zebra":[{"file_id":"z1","extension":"jpg","width":800,"height":800}],
            "Alpine":[{"file_id":"a1","extension":"jpg","width":800,"height":1200,"focus":[0.3,0.7]}]
        }}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join(content::CONTACT_FILE),
        r#"{"email":"studio@example.com","instagram":"studio"}"#,
    )
    .unwrap();

    let content = content::load_from_dir(dir.path()).expect("content should load");
    let names: Vec<_> = content.portfolio.albums.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Zebra", "Alpine"]);
    assert!(content.home.slideshow.is_empty());
    assert_eq!(content.contact.email, "studio@example.com");
    assert!(content.portfolio.albums[1].photos[0].focus.is_some());
}

#[test]
fn missing_content_file_is_reported_by_name() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join(content::HOME_FILE), r#"{"photos":[]}"#).unwrap();

    let err = content::load_from_dir(dir.path()).unwrap_err();
    assert!(err.to_string().contains(content::PORTFOLIO_FILE));
}

#[test]
fn config_language_selects_locale() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"fr\"\n\n[loading]\nmax_medium_size_px = 500.0\n",
    )
    .unwrap();

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.loading.max_medium_size(), 500.0);

    let i18n = I18n::new(None, &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn broken_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("settings.toml"), "[loading\nnot toml").unwrap();

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, config::Config::default());
    assert_eq!(warning.as_deref(), Some("warning-config-load"));
}

#[tokio::test]
async fn wide_image_loads_every_tier_in_order() {
    let source = source_with_all_tiers("wide");
    let registry = ListenerRegistry::new();
    let mut image = LazyImage::new(&registry, photo("wide"), LazyImageOptions::default());

    let mut effects = image.resize(Size::new(400.0, 300.0));
    assert!(effects.is_empty(), "nothing loads before the image nears the viewport");
    effects.extend(image.viewport_changed(on_screen(400.0), window()));

    let fetched = drive(&mut image, &source, effects).await;
    assert_eq!(fetched, [LoadTier::Preview, LoadTier::Medium, LoadTier::Large]);
    assert_eq!(image.loader().state().highest_filled(), Some(LoadTier::Large));
}

#[tokio::test]
async fn narrow_image_stops_at_medium_until_it_grows() {
    let source = source_with_all_tiers("narrow");
    let registry = ListenerRegistry::new();
    let mut image = LazyImage::new(&registry, photo("narrow"), LazyImageOptions::default());

    let mut effects = image.resize(Size::new(200.0, 150.0));
    effects.extend(image.viewport_changed(on_screen(200.0), window()));
    let fetched = drive(&mut image, &source, effects).await;
    assert_eq!(fetched, [LoadTier::Preview, LoadTier::Medium]);

    // Recomputing at the same width requests nothing.
    assert!(image.viewport_changed(on_screen(200.0), window()).is_empty());

    let effects = image.resize(Size::new(400.0, 300.0));
    let fetched = drive(&mut image, &source, effects).await;
    assert_eq!(fetched, [LoadTier::Large]);
}

#[tokio::test]
async fn focused_image_draws_cropped_layers() {
    let source = source_with_all_tiers("focus");
    let registry = ListenerRegistry::new();
    let asset = ImageAsset {
        focus: Some(FocusPoint::new(0.1, 0.1)),
        ..photo("focus")
    };
    let mut image = LazyImage::new(&registry, asset, LazyImageOptions::default());

    let mut effects = image.resize(Size::new(400.0, 400.0));
    effects.extend(image.viewport_changed(on_screen(400.0), window()));
    drive(&mut image, &source, effects).await;

    assert_eq!(image.surface().layers().count(), 3);
    for layer in image.surface().layers() {
        match &layer.display {
            iced::widget::image::Handle::Rgba { width, height, .. } => {
                assert_eq!((*width, *height), (6, 6), "{} layer", layer.tier);
            }
            other => panic!("unexpected handle: {other:?}"),
        }
    }
}

#[tokio::test]
async fn missing_tier_keeps_best_available() {
    let mut source = MemoryAssetSource::new();
    source.insert(LoadTier::Preview.asset_name("gap", "png"), png(4, 3));
    let source: SharedAssetSource = Arc::new(source);

    let registry = ListenerRegistry::new();
    let mut image = LazyImage::new(&registry, photo("gap"), LazyImageOptions::default());
    let mut effects = image.resize(Size::new(400.0, 300.0));
    effects.extend(image.viewport_changed(on_screen(400.0), window()));

    let fetched = drive(&mut image, &source, effects).await;
    assert_eq!(fetched, [LoadTier::Preview, LoadTier::Medium]);
    assert_eq!(image.loader().failed(), Some(LoadTier::Medium));
    assert_eq!(image.loader().state().highest_filled(), Some(LoadTier::Preview));
    assert!(source.fetch("gap.medium.png").is_err());
}

#[test]
fn carousel_waits_for_medium_on_next_slide() {
    let start = Instant::now();
    let pause = Duration::from_millis(5000);
    let mut carousel = Carousel::new(3, true, pause, start);
    carousel.mark_medium_ready(0);
    carousel.mark_medium_ready(1);

    let after_pause = start + pause + Duration::from_millis(1000);
    assert!(carousel.tick(after_pause));
    assert_eq!(carousel.index(), 1);

    let much_later = after_pause + pause * 4;
    assert!(!carousel.tick(much_later));
    assert_eq!(carousel.index(), 1);
}

#[test]
fn carousel_manual_navigation_wraps() {
    let now = Instant::now();
    let mut carousel = Carousel::new(4, false, Duration::from_millis(5000), now);
    carousel.next(now);
    carousel.next(now);
    assert_eq!(carousel.index(), 2);

    let mut carousel = Carousel::new(4, false, Duration::from_millis(5000), now);
    carousel.previous(now);
    assert_eq!(carousel.index(), 3);
    assert!(carousel.is_manual());
}

#[tokio::test]
async fn completion_after_page_switch_is_ignored() {
    let source = source_with_all_tiers("late");
    let content = content::Content {
        home: content::HomeContent {
            photos: vec![photo("late")],
            slideshow: Vec::new(),
        },
        ..content::Content::default()
    };
    let registry = ListenerRegistry::new();
    let options = PageOptions::default();
    let mut viewport = ScrollViewport::default();
    viewport.set_size(window());

    let mut page = Page::mount(Screen::Home, &registry, &content, &options, Instant::now());
    let mut effects = page.layout(&viewport);
    effects.extend(page.viewport_changed(&viewport, &registry, Instant::now()));
    let (id, asset) = effects
        .into_iter()
        .find_map(|(id, effect)| match effect {
            Effect::Fetch { asset, .. } => Some((id, asset)),
            _ => None,
        })
        .expect("the first gallery tile should request its preview");
    assert!(registry.is_registered(id));

    // The visitor switches pages while the fetch is still running.
    page = Page::mount(Screen::Portfolio, &registry, &content, &options, Instant::now());
    assert!(!registry.is_registered(id));

    let result = media::asset::fetch(source.clone(), asset).await;
    let late = pages::Message::Image {
        id,
        message: Message::Fetched {
            tier: LoadTier::Preview,
            result,
        },
    };
    let effects = page.update(late, &viewport, &registry, Instant::now());
    assert!(effects.is_empty());
    assert_eq!(page.screen(), Screen::Portfolio);
}
