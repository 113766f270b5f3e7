use gpui_gallery_core::Gallery;

#[test]
fn reorder_select_then_delete() {
    let mut gallery = Gallery::with_image_refs(["A", "B", "C"]);
    let a = gallery.entries()[0].id();
    let c = gallery.entries()[2].id();

    gallery.reorder(a, c);
    let order: Vec<_> = gallery.iter().map(|entry| entry.image_ref()).collect();
    assert_eq!(order, vec!["B", "C", "A"]);

    gallery.toggle_selection(c);
    let selection: Vec<_> = gallery.iter().map(|entry| entry.is_selected()).collect();
    assert_eq!(selection, vec![false, true, false]);

    gallery.delete([c]);
    let order: Vec<_> = gallery.iter().map(|entry| entry.image_ref()).collect();
    assert_eq!(order, vec!["B", "A"]);
}

#[test]
fn insert_into_empty_then_reject_blank() {
    let mut gallery = Gallery::new();

    gallery.insert("http://x/1.png").unwrap();
    assert_eq!(gallery.len(), 1);
    assert_eq!(gallery.entries()[0].image_ref(), "http://x/1.png");
    assert!(!gallery.entries()[0].is_selected());

    let before = gallery.snapshot();
    assert!(gallery.insert("").is_err());
    assert_eq!(gallery.len(), 1);
    assert_eq!(gallery.entries(), &before[..]);
}
