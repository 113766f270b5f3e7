use gpui_gallery_core::{EntryId, Gallery};

fn gallery(refs: &[&str]) -> (Gallery, Vec<EntryId>) {
    let gallery = Gallery::with_image_refs(refs.iter().copied());
    let ids = gallery.iter().map(|entry| entry.id()).collect();
    (gallery, ids)
}

#[test]
fn toggle_flips_only_the_matching_entry() {
    let (mut gallery, ids) = gallery(&["a.png", "b.png", "c.png"]);
    let before = gallery.snapshot();

    assert!(gallery.toggle_selection(ids[1]));

    let after = gallery.entries();
    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(after) {
        assert_eq!(old.id(), new.id());
        assert_eq!(old.image_ref(), new.image_ref());
        if new.id() == ids[1] {
            assert!(new.is_selected());
        } else {
            assert_eq!(old.is_selected(), new.is_selected());
        }
    }
}

#[test]
fn toggle_twice_restores_the_original() {
    let (mut gallery, ids) = gallery(&["a.png", "b.png"]);
    let before = gallery.snapshot();

    gallery.toggle_selection(ids[0]);
    gallery.toggle_selection(ids[0]);

    assert_eq!(gallery.entries(), &before[..]);
}

#[test]
fn toggle_unknown_id_is_a_no_op() {
    let (mut gallery, ids) = gallery(&["a.png", "b.png"]);
    let before = gallery.snapshot();

    let other = Gallery::with_image_refs(["z.png"]);
    let stranger = other.entries()[0].id();

    assert!(!gallery.toggle_selection(stranger));
    assert_eq!(gallery.entries(), &before[..]);
    assert_eq!(gallery.position(ids[0]), Some(0));
}

#[test]
fn snapshots_are_not_affected_by_later_toggles() {
    let (mut gallery, ids) = gallery(&["a.png"]);
    let snapshot = gallery.snapshot();

    gallery.toggle_selection(ids[0]);

    assert!(!snapshot[0].is_selected());
    assert!(gallery.entries()[0].is_selected());
    assert_eq!(gallery.selected_ids(), vec![ids[0]]);
    assert_eq!(gallery.selected_count(), 1);
}
