// SPDX-License-Identifier: MPL-2.0
//! Gallery sources, configuration and localization working together.

use iced_gallery::app::read_gallery;
use iced_gallery::config::{self, Config, NavigationMode};
use iced_gallery::gallery::{self, GalleryEntry, GallerySource, ManifestGallery, StaticGallery};
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::lightbox::{Lightbox, LightboxSettings, Message};
use tempfile::tempdir;

#[test]
fn manifest_labels_become_alt_text() {
    let dir = tempdir().expect("failed to create temp dir");
    let manifest = dir.path().join("trip.toml");
    std::fs::write(
        &manifest,
        r#"
            [[image]]
            source = "harbour.jpg"
            label = "Harbour at dusk"

            [[image]]
            source = "market.jpg"
            label = "   "

            [[image]]
            source = "bridge.jpg"
        "#,
    )
    .expect("failed to write manifest");

    let entries = ManifestGallery::new(&manifest)
        .entries()
        .expect("failed to read manifest");
    let images = gallery::describe(entries, |index| format!("Gallery image {index}"));

    let alts: Vec<_> = images.iter().map(|image| image.alt_text.as_str()).collect();
    assert_eq!(alts, ["Harbour at dusk", "Gallery image 2", "Gallery image 3"]);
    assert_eq!(images[0].source.path(), dir.path().join("harbour.jpg"));
}

#[test]
fn malformed_manifest_is_reported() {
    let dir = tempdir().expect("failed to create temp dir");
    let manifest = dir.path().join("broken.toml");
    std::fs::write(&manifest, "[[image]]\nlabel = \"no source\"\n").expect("write manifest");

    let err = read_gallery(&manifest, &Config::default()).expect_err("manifest should fail");
    assert!(matches!(err, iced_gallery::error::Error::Manifest(_)));
}

#[test]
fn clamped_mode_from_saved_config() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let mut saved = Config::default();
    saved.lightbox.navigation_mode = Some(NavigationMode::Clamped);
    config::save_to_path(&saved, &path).expect("failed to save config");
    let loaded = config::load_from_path(&path).expect("failed to load config");

    let gallery = StaticGallery::new(vec![
        GalleryEntry::new("one.png"),
        GalleryEntry::new("two.png"),
    ]);
    let images = gallery::describe(gallery.entries().expect("entries"), |i| i.to_string());
    let mut lightbox = Lightbox::new(images, LightboxSettings::from(&loaded.lightbox));

    lightbox.handle(Message::Open(1));
    lightbox.handle(Message::Next);
    assert_eq!(lightbox.current_index(), 1);
    assert!(!lightbox.affordances().next);
    assert!(lightbox.affordances().previous);
}

#[test]
fn alt_text_and_counter_follow_language() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let mut saved = Config::default();
    saved.general.language = Some("fr".to_string());
    config::save_to_path(&saved, &path).expect("failed to save config");
    let loaded = config::load_from_path(&path).expect("failed to load config");

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    let images = gallery::describe(vec![GalleryEntry::new("a.png")], |index| {
        let index = index.to_string();
        i18n.tr_with_args("gallery-image-alt", &[("index", index.as_str())])
    });
    assert_eq!(images[0].alt_text, "Image de la galerie 1");
    assert_eq!(
        i18n.tr_with_args("lightbox-counter", &[("current", "1"), ("total", "4")]),
        "1 / 4"
    );
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}
