use gpui_gallery_core::{EntryId, Gallery};

fn refs(gallery: &Gallery) -> Vec<&str> {
    gallery.iter().map(|entry| entry.image_ref()).collect()
}

#[test]
fn delete_removes_exactly_the_given_entries_in_order() {
    let mut gallery = Gallery::with_image_refs(["a", "b", "c", "d", "e"]);
    let ids: Vec<EntryId> = gallery.iter().map(|entry| entry.id()).collect();

    let removed = gallery.delete([ids[3], ids[1]]);

    assert_eq!(removed, 2);
    assert_eq!(refs(&gallery), vec!["a", "c", "e"]);
    assert_eq!(gallery.position(ids[4]), Some(2));
    assert_eq!(gallery.position(ids[1]), None);
}

#[test]
fn empty_set_is_a_no_op() {
    let mut gallery = Gallery::with_image_refs(["a", "b"]);
    let before = gallery.snapshot();

    assert_eq!(gallery.delete([]), 0);
    assert_eq!(gallery.entries(), &before[..]);
}

#[test]
fn absent_ids_are_ignored() {
    let mut gallery = Gallery::with_image_refs(["a", "b"]);
    let keep = gallery.entries()[0].id();
    let gone = gallery.entries()[1].id();
    gallery.delete([gone]);

    assert_eq!(gallery.delete([gone]), 0);
    assert_eq!(gallery.delete([gone, keep]), 1);
    assert!(gallery.is_empty());
}

#[test]
fn delete_selected_removes_flagged_entries() {
    let mut gallery = Gallery::with_image_refs(["a", "b", "c", "d"]);
    let ids: Vec<EntryId> = gallery.iter().map(|entry| entry.id()).collect();
    gallery.toggle_selection(ids[0]);
    gallery.toggle_selection(ids[2]);

    assert_eq!(gallery.delete_selected(), 2);
    assert_eq!(refs(&gallery), vec!["b", "d"]);
    assert_eq!(gallery.selected_count(), 0);
    assert_eq!(gallery.delete_selected(), 0);
}

