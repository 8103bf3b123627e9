use super::*;

fn item(src: &str, category: &str) -> GalleryItem {
    GalleryItem { src: src.to_owned(), caption: format!("{src} caption"), category: category.to_owned() }
}

fn gallery() -> Gallery {
    Gallery::new(vec![
        item("pool.jpg", "amenities"),
        item("suite.jpg", "rooms"),
        item("spa.jpg", "amenities"),
        item("lobby.jpg", "interior"),
        item("deluxe.jpg", "rooms"),
    ])
}

// =============================================================
// Filter
// =============================================================

#[test]
fn filter_parse_recognizes_all_sentinel() {
    assert_eq!(Filter::parse("all"), Filter::All);
    assert_eq!(Filter::parse(""), Filter::All);
    assert_eq!(Filter::parse("rooms"), Filter::Category("rooms".into()));
}

#[test]
fn filter_match_is_exact() {
    let rooms = Filter::Category("rooms".into());
    assert!(rooms.matches("rooms"));
    assert!(!rooms.matches("Rooms"));
    assert!(!rooms.matches("rooms-suite"));
    assert!(Filter::All.matches("anything"));
}

#[test]
fn set_filter_shows_exactly_matching_items() {
    let mut gallery = gallery();
    let flags = gallery.set_filter(Filter::parse("rooms"));
    for (item, shown) in gallery.items().iter().zip(&flags) {
        assert_eq!(*shown, item.category == "rooms");
    }
    assert_eq!(gallery.visible_indices(), vec![1, 4]);
}

#[test]
fn all_filter_shows_everything() {
    let mut gallery = gallery();
    gallery.set_filter(Filter::parse("rooms"));
    let flags = gallery.set_filter(Filter::parse("all"));
    assert!(flags.iter().all(|shown| *shown));
    assert_eq!(gallery.visible_indices().len(), 5);
}

#[test]
fn unknown_category_hides_everything() {
    let mut gallery = gallery();
    let flags = gallery.set_filter(Filter::parse("garden"));
    assert!(flags.iter().all(|shown| !*shown));
}

// =============================================================
// Lightbox over filtered items
// =============================================================

#[test]
fn open_navigates_only_visible_items() {
    let mut gallery = gallery();
    gallery.set_filter(Filter::parse("amenities"));
    assert_eq!(gallery.open(2).map(|i| i.src.as_str()), Some("spa.jpg"));

    assert_eq!(gallery.command(LightboxCommand::Next), Some(LightboxUpdate::Show(0)));
    assert_eq!(gallery.current().map(|i| i.src.as_str()), Some("pool.jpg"));
    assert_eq!(gallery.command(LightboxCommand::Prev), Some(LightboxUpdate::Show(2)));
}

#[test]
fn hidden_item_does_not_open() {
    let mut gallery = gallery();
    gallery.set_filter(Filter::parse("rooms"));
    assert!(gallery.open(0).is_none());
    assert!(!gallery.lightbox().is_active());
}

#[test]
fn open_recomputes_visible_list_after_filter_change() {
    let mut gallery = gallery();
    gallery.open(3);
    gallery.command(LightboxCommand::Close);

    gallery.set_filter(Filter::parse("rooms"));
    gallery.open(4);
    assert_eq!(gallery.command(LightboxCommand::Next), Some(LightboxUpdate::Show(1)));
    assert_eq!(gallery.command(LightboxCommand::Next), Some(LightboxUpdate::Show(4)));
}

#[test]
fn keys_inert_until_opened() {
    let mut gallery = gallery();
    assert_eq!(gallery.command(LightboxCommand::from_key("ArrowRight").unwrap()), None);
    assert_eq!(gallery.command(LightboxCommand::from_key("Escape").unwrap()), None);
}

#[test]
fn empty_gallery_never_opens() {
    let mut gallery = Gallery::new(Vec::new());
    assert!(gallery.open(0).is_none());
    assert_eq!(gallery.command(LightboxCommand::Next), None);
}

#[test]
fn filter_change_while_open_updates_navigation() {
    let mut gallery = gallery();
    assert_eq!(gallery.open(1).map(|i| i.src.as_str()), Some("suite.jpg"));

    // Shown item stays visible: navigation walks the new list.
    gallery.set_filter(Filter::parse("rooms"));
    assert_eq!(gallery.command(LightboxCommand::Next), Some(LightboxUpdate::Show(4)));
    assert_eq!(gallery.command(LightboxCommand::Next), Some(LightboxUpdate::Show(1)));

    // Shown item filtered out: step to its nearest visible neighbour.
    gallery.set_filter(Filter::parse("amenities"));
    assert_eq!(gallery.command(LightboxCommand::Next), Some(LightboxUpdate::Show(2)));
    assert_eq!(gallery.current().map(|i| i.src.as_str()), Some("spa.jpg"));
}
