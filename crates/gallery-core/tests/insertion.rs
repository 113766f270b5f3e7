use gpui_gallery_core::{Gallery, GalleryError};

#[test]
fn insert_appends_an_unselected_entry_with_a_fresh_id() {
    let mut gallery = Gallery::with_image_refs(["a.png", "b.png"]);
    let existing: Vec<_> = gallery.iter().map(|entry| entry.id()).collect();

    let id = gallery.insert("http://x/1.png").unwrap();

    assert_eq!(gallery.len(), 3);
    let last = gallery.entries().last().unwrap();
    assert_eq!(last.id(), id);
    assert_eq!(last.image_ref(), "http://x/1.png");
    assert!(!last.is_selected());
    assert!(!existing.contains(&id));
    assert_eq!(gallery.position(id), Some(2));
}

#[test]
fn blank_references_are_rejected_without_changes() {
    let mut gallery = Gallery::with_image_refs(["a.png"]);
    let before = gallery.snapshot();

    for blank in ["", "   ", "\t\n"] {
        let err = gallery.insert(blank).unwrap_err();
        assert!(matches!(err, GalleryError::EmptyImageRef));
        assert_eq!(gallery.entries(), &before[..]);
    }
}

#[test]
fn references_are_stored_as_submitted() {
    let mut gallery = Gallery::new();
    gallery.insert(" https://x/padded.png ").unwrap();
    assert_eq!(gallery.entries()[0].image_ref(), " https://x/padded.png ");
}

#[test]
fn insertion_keeps_existing_selection() {
    let mut gallery = Gallery::with_image_refs(["a.png", "b.png"]);
    let first = gallery.entries()[0].id();
    gallery.toggle_selection(first);

    gallery.insert("c.png").unwrap();

    assert!(gallery.entries()[0].is_selected());
    assert_eq!(gallery.selected_ids(), vec![first]);
}

#[test]
fn ids_are_not_reused_after_deletion() {
    let mut gallery = Gallery::new();
    let first = gallery.insert("a.png").unwrap();
    gallery.delete([first]);

    let second = gallery.insert("a.png").unwrap();
    assert_ne!(first, second);
}

#[test]
fn seeding_skips_blank_references() {
    let gallery = Gallery::with_image_refs(["a.png", "", "  ", "b.png"]);
    let refs: Vec<_> = gallery.iter().map(|entry| entry.image_ref()).collect();
    assert_eq!(refs, vec!["a.png", "b.png"]);
}

#[test]
fn every_entry_comes_from_an_insert() {
    let mut gallery = Gallery::new();
    let mut inserted = Vec::new();
    for image_ref in ["a.png", "b.png", "c.png", "d.png"] {
        inserted.push(gallery.insert(image_ref).unwrap());
    }

    gallery.toggle_selection(inserted[1]);
    gallery.reorder(inserted[3], inserted[0]);
    gallery.delete([inserted[2]]);
    inserted.push(gallery.insert("e.png").unwrap());

    let clone = gallery.clone();
    assert_eq!(clone.entries(), gallery.entries());
    for entry in gallery.iter() {
        assert!(inserted.contains(&entry.id()));
    }
    assert_eq!(gallery.len(), 4);
    assert_eq!(gallery.selected_ids(), vec![inserted[1]]);
}
