use gpui_gallery_core::{GalleryError, GallerySeed};

#[test]
fn parses_a_seed_document() {
    let seed = GallerySeed::from_json(
        r#"{ "images": ["https://x/a.png", "", "https://x/b.png"] }"#,
    )
    .unwrap();
    assert_eq!(seed.images.len(), 3);

    let gallery = seed.into_gallery();
    let refs: Vec<_> = gallery.iter().map(|entry| entry.image_ref()).collect();
    assert_eq!(refs, vec!["https://x/a.png", "https://x/b.png"]);
    assert_eq!(gallery.selected_count(), 0);
}

#[test]
fn missing_images_key_means_empty() {
    let seed = GallerySeed::from_json("{}").unwrap();
    assert!(seed.into_gallery().is_empty());
}

#[test]
fn malformed_seed_is_an_error() {
    let err = GallerySeed::from_json(r#"{ "images": 3 }"#).unwrap_err();
    assert!(matches!(err, GalleryError::InvalidSeed(_)));
}

#[test]
fn demo_seed_is_populated() {
    let gallery = GallerySeed::demo().into_gallery();
    assert_eq!(gallery.len(), 11);
    assert!(gallery.iter().all(|entry| entry.image_ref().starts_with("https://")));
}
