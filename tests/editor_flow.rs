use egui::Pos2;
use tee_studio::StudioApp;

// The app starts with the placeholder text element and a seeded history.

#[test]
fn add_and_undo_round_trip() {
    let mut app = StudioApp::default();
    assert_eq!(app.design().len(), 1);
    assert!(!app.history().can_undo());

    app.add_text();
    assert_eq!(app.design().len(), 2);
    assert!(app.history().can_undo());

    app.undo();
    assert_eq!(app.design().len(), 1);

    app.redo();
    assert_eq!(app.design().len(), 2);
}

#[test]
fn drag_commit_is_one_history_entry() {
    let mut app = StudioApp::default();
    let id = app.design().elements()[0].id();
    let history_len = app.history().len();

    // Grab the placeholder text near its corner and drag it around.
    app.pointer_down(Pos2::new(160.0, 210.0));
    app.pointer_move(Pos2::new(200.0, 250.0));
    app.pointer_move(Pos2::new(240.0, 280.0));
    app.pointer_up();

    assert_eq!(
        app.design().find_element_by_id(id).unwrap().position(),
        Pos2::new(230.0, 270.0)
    );
    // Many pointer-moves, one committed mutation.
    assert_eq!(app.history().len(), history_len + 1);

    app.undo();
    assert_eq!(
        app.design().find_element_by_id(id).unwrap().position(),
        Pos2::new(150.0, 200.0)
    );
}

#[test]
fn plain_click_selects_without_history_entry() {
    let mut app = StudioApp::default();
    let id = app.design().elements()[0].id();
    let history_len = app.history().len();

    app.pointer_down(Pos2::new(160.0, 210.0));
    app.pointer_up();

    assert_eq!(app.design().selected_id(), Some(id));
    assert_eq!(app.history().len(), history_len);
}

#[test]
fn delete_and_duplicate_commit_history() {
    let mut app = StudioApp::default();
    let id = app.design().elements()[0].id();
    app.design_mut().select(id);

    app.duplicate_selected();
    assert_eq!(app.design().len(), 2);

    app.delete_selected();
    assert_eq!(app.design().len(), 1);

    // Two undos walk back through both mutations.
    app.undo();
    assert_eq!(app.design().len(), 2);
    app.undo();
    assert_eq!(app.design().len(), 1);
    assert!(!app.history().can_undo());
}

#[test]
fn apply_color_only_affects_selection() {
    let mut app = StudioApp::default();
    let id = app.design().elements()[0].id();
    let red = egui::Color32::from_rgb(0xFF, 0x00, 0x00);

    // No selection: nothing happens, nothing is committed.
    let history_len = app.history().len();
    app.apply_color(red);
    assert_eq!(app.history().len(), history_len);

    app.design_mut().select(id);
    app.apply_color(red);
    assert_eq!(app.design().find_element_by_id(id).unwrap().color(), red);
    assert_eq!(app.history().len(), history_len + 1);
}

#[test]
fn new_elements_land_inside_the_canvas() {
    let mut app = StudioApp::default();
    app.add_text();
    app.add_shape(tee_studio::ShapeKind::Triangle);

    let canvas = app.design().canvas();
    for element in app.design().elements() {
        let pos = element.position();
        assert!((0.0..=canvas.width).contains(&pos.x));
        assert!((0.0..=canvas.height).contains(&pos.y));
    }

    // Ids stay unique across additions.
    let mut ids: Vec<usize> = app.design().elements().iter().map(|e| e.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), app.design().len());
}
