use gpui_gallery_core::{EntryId, EntryMove, Gallery};

fn gallery(refs: &[&'static str]) -> (Gallery, Vec<EntryId>) {
    let gallery = Gallery::with_image_refs(refs.iter().copied());
    let ids = gallery.iter().map(|entry| entry.id()).collect();
    (gallery, ids)
}

fn refs(gallery: &Gallery) -> Vec<&str> {
    gallery.iter().map(|entry| entry.image_ref()).collect()
}

#[test]
fn reorder_moves_entry_forward() {
    let (mut gallery, ids) = gallery(&["A", "B", "C", "D"]);

    let entry_move = gallery.reorder(ids[0], ids[2]);

    assert_eq!(
        entry_move,
        Some(EntryMove {
            id: ids[0],
            from: 0,
            to: 2
        })
    );
    assert_eq!(refs(&gallery), vec!["B", "C", "A", "D"]);
}

#[test]
fn reorder_moves_entry_backward() {
    let (mut gallery, ids) = gallery(&["A", "B", "C", "D"]);

    gallery.reorder(ids[3], ids[1]);

    assert_eq!(refs(&gallery), vec!["A", "D", "B", "C"]);
    assert_eq!(gallery.position(ids[3]), Some(1));
    assert_eq!(gallery.position(ids[2]), Some(3));
}

#[test]
fn reorder_is_a_move_not_a_swap() {
    let (mut gallery, ids) = gallery(&["A", "B", "C", "D", "E"]);

    gallery.reorder(ids[1], ids[3]);

    assert_eq!(refs(&gallery), vec!["A", "C", "D", "B", "E"]);
}

#[test]
fn every_pair_shifts_the_span_by_one() {
    let names = ["A", "B", "C", "D", "E"];
    for i in 0..names.len() {
        for j in 0..names.len() {
            if i == j {
                continue;
            }
            let (mut gallery, ids) = gallery(&names);
            gallery.reorder(ids[i], ids[j]).unwrap();

            let mut expected: Vec<EntryId> = ids.clone();
            let moved = expected.remove(i);
            expected.insert(j, moved);

            let actual: Vec<EntryId> = gallery.iter().map(|entry| entry.id()).collect();
            assert_eq!(actual, expected, "move {i} -> {j}");
        }
    }
}

#[test]
fn reorder_onto_itself_is_a_no_op() {
    let (mut gallery, ids) = gallery(&["A", "B", "C"]);
    let before = gallery.snapshot();

    assert_eq!(gallery.reorder(ids[1], ids[1]), None);
    assert_eq!(gallery.entries(), &before[..]);
}

#[test]
fn reorder_with_unknown_ids_is_a_no_op() {
    let (mut gallery, ids) = gallery(&["A", "B", "C"]);
    let (_, strangers) = self::gallery(&["X"]);
    let before = gallery.snapshot();

    assert_eq!(gallery.reorder(strangers[0], ids[1]), None);
    assert_eq!(gallery.reorder(ids[1], strangers[0]), None);
    assert_eq!(gallery.entries(), &before[..]);
}

#[test]
fn reorder_carries_selection_along() {
    let (mut gallery, ids) = gallery(&["A", "B", "C"]);
    gallery.toggle_selection(ids[0]);

    gallery.reorder(ids[0], ids[2]);

    assert!(gallery.entries()[2].is_selected());
    assert_eq!(gallery.selected_ids(), vec![ids[0]]);
}
