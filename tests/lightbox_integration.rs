// SPDX-License-Identifier: MPL-2.0
//! End-to-end lightbox scenarios over a real directory of images.

use iced_gallery::config::SortOrder;
use iced_gallery::error::ImageError;
use iced_gallery::gallery::{self, DirectoryGallery, GallerySource};
use iced_gallery::lightbox::{
    Effect, ImageState, Input, InputKey, Lightbox, LightboxSettings, Message,
};
use iced_gallery::media::loader::load_async;
use iced_gallery::media::{FsImageLoader, ImageLoader, SharedLoader};
use image_rs::{Rgba, RgbaImage};
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
    let img = RgbaImage::from_pixel(width, height, Rgba([40, 80, 120, 255]));
    img.save(dir.join(name)).expect("failed to write png");
}

fn lightbox_for(dir: &Path) -> Lightbox {
    let entries = DirectoryGallery::new(dir, SortOrder::Alphabetical)
        .entries()
        .expect("failed to read gallery");
    let images = gallery::describe(entries, |index| format!("Gallery image {index}"));
    Lightbox::new(images, LightboxSettings::default())
}

/// Runs a load effect synchronously and feeds the result back.
fn complete(lightbox: &mut Lightbox, loader: &FsImageLoader, effect: Effect) -> Effect {
    match effect {
        Effect::LoadImage { ticket, source } => {
            let result = loader.load(&source);
            lightbox.handle(Message::ImageLoaded { ticket, result })
        }
        other => other,
    }
}

/// Completes every preload request.
fn complete_preloads(lightbox: &mut Lightbox, loader: &FsImageLoader, effect: Effect) {
    if let Effect::Preload(sources) = effect {
        for source in sources {
            let result = loader.load(&source);
            lightbox.handle(Message::Preloaded { source, result });
        }
    }
}

#[test]
fn browsing_a_directory_gallery() {
    let dir = tempdir().expect("failed to create temp dir");
    write_png(dir.path(), "a.png", 4, 3);
    write_png(dir.path(), "b.png", 2, 2);
    write_png(dir.path(), "c.png", 3, 4);
    std::fs::write(dir.path().join("readme.txt"), b"not an image").expect("write file");

    let loader = FsImageLoader;
    let mut lightbox = lightbox_for(dir.path());
    assert_eq!(lightbox.len(), 3);
    assert_eq!(lightbox.images()[1].alt_text, "Gallery image 2");

    let effect = lightbox.handle(Message::Open(0));
    assert!(lightbox.is_loading());
    let effect = complete(&mut lightbox, &loader, effect);

    match lightbox.image_state() {
        ImageState::Loaded(image) => assert_eq!((image.width, image.height), (4, 3)),
        other => panic!("expected loaded image, got {other:?}"),
    }
    assert_eq!(lightbox.counter().map(|c| c.to_string()), Some("1 / 3".into()));

    // Only the next image is a neighbour of the first one.
    match &effect {
        Effect::Preload(sources) => {
            assert_eq!(sources.len(), 1);
            assert_eq!(sources[0].file_name(), "b.png");
        }
        other => panic!("expected preload, got {other:?}"),
    }
    complete_preloads(&mut lightbox, &loader, effect);

    // The preloaded neighbour shows without a load round trip.
    let effect = lightbox.handle(Message::Input(Input::Key(InputKey::Right)));
    assert!(!lightbox.is_loading());
    assert!(!matches!(effect, Effect::LoadImage { .. }));
    assert_eq!(lightbox.counter().map(|c| c.current), Some(2));

    // Previous from the first image wraps to the last.
    lightbox.handle(Message::Previous);
    let effect = lightbox.handle(Message::Previous);
    complete(&mut lightbox, &loader, effect);
    assert_eq!(lightbox.current_index(), 2);
    assert!(matches!(lightbox.image_state(), ImageState::Loaded(_)));

    lightbox.handle(Message::BackgroundPressed);
    assert!(!lightbox.is_open());
    assert!(!lightbox.frame().visible);
}

#[test]
fn deleted_file_shows_an_error_and_keeps_navigation() {
    let dir = tempdir().expect("failed to create temp dir");
    write_png(dir.path(), "a.png", 2, 2);
    write_png(dir.path(), "b.png", 2, 2);

    let loader = FsImageLoader;
    let mut lightbox = lightbox_for(dir.path());
    std::fs::remove_file(dir.path().join("b.png")).expect("remove file");

    let effect = lightbox.handle(Message::Open(1));
    complete(&mut lightbox, &loader, effect);

    let frame = lightbox.frame();
    assert_eq!(frame.slot.error(), Some(&ImageError::NotFound));
    assert!(frame.next_enabled);
    assert!(frame.previous_enabled);

    let effect = lightbox.handle(Message::Next);
    complete(&mut lightbox, &loader, effect);
    assert_eq!(lightbox.current_index(), 0);
    assert!(lightbox.frame().slot.image().is_some());
}

#[test]
fn slow_load_is_discarded_after_navigation() {
    let dir = tempdir().expect("failed to create temp dir");
    write_png(dir.path(), "a.png", 8, 8);
    write_png(dir.path(), "b.png", 1, 1);

    let loader = FsImageLoader;
    let mut lightbox = lightbox_for(dir.path());

    let slow = lightbox.handle(Message::Open(0));
    let fast = lightbox.handle(Message::Next);

    complete(&mut lightbox, &loader, fast);
    complete(&mut lightbox, &loader, slow);

    assert_eq!(lightbox.current_index(), 1);
    match lightbox.image_state() {
        ImageState::Loaded(image) => assert_eq!(image.width, 1),
        other => panic!("expected second image, got {other:?}"),
    }
}

#[test]
fn swipe_navigates_only_past_threshold() {
    let dir = tempdir().expect("failed to create temp dir");
    for name in ["a.png", "b.png", "c.png"] {
        write_png(dir.path(), name, 1, 1);
    }

    let mut lightbox = lightbox_for(dir.path());
    lightbox.handle(Message::Open(0));

    lightbox.handle(Message::Input(Input::TouchStarted(200.0)));
    lightbox.handle(Message::Input(Input::TouchEnded(150.0)));
    assert_eq!(lightbox.current_index(), 0);

    lightbox.handle(Message::Input(Input::TouchStarted(200.0)));
    lightbox.handle(Message::Input(Input::TouchEnded(120.0)));
    assert_eq!(lightbox.current_index(), 1);

    lightbox.handle(Message::Input(Input::TouchStarted(100.0)));
    lightbox.handle(Message::Input(Input::TouchEnded(300.0)));
    assert_eq!(lightbox.current_index(), 0);
}

#[tokio::test]
async fn async_loader_reports_source_and_result() {
    let dir = tempdir().expect("failed to create temp dir");
    write_png(dir.path(), "a.png", 5, 7);

    let mut lightbox = lightbox_for(dir.path());
    let loader: SharedLoader = Arc::new(FsImageLoader);

    let Effect::LoadImage { ticket, source } = lightbox.handle(Message::Open(0)) else {
        panic!("expected a load request");
    };
    let (loaded_source, result) = load_async(loader, source.clone()).await;
    assert_eq!(loaded_source, source);

    lightbox.handle(Message::ImageLoaded { ticket, result });
    let frame = lightbox.frame();
    let image = frame.slot.image().expect("image should be loaded");
    assert_eq!((image.width, image.height), (5, 7));
    assert_eq!(frame.alt_text, "Gallery image 1");
}
