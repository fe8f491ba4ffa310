mod common;

use common::{gedcom_file, session_with};
use famsun_client::ViewerError;
use famsun_client::core::{ColorBy, Palette};

#[test]
fn defaults_match_initial_ui_state() {
    let session = session_with(vec![]);
    assert_eq!(session.config().generation_depth(), 3);
    assert_eq!(session.config().color_by(), ColorBy::Generation);
    assert_eq!(session.config().palette(), Palette::Pastel);
    assert!(session.config().selected_file().is_none());
    assert!(session.is_sidebar_open());
}

#[test]
fn depth_accepts_every_value_in_range() {
    let mut session = session_with(vec![]);
    for depth in 1..=20 {
        session
            .set_generation_depth(depth)
            .expect("depth in range is accepted");
        assert_eq!(session.config().generation_depth(), depth);
    }
}

#[test]
fn depth_rejects_out_of_range_and_keeps_prior_value() {
    let mut session = session_with(vec![]);
    session.set_generation_depth(7).expect("valid depth");

    for depth in [0, 21, 100, u32::MAX] {
        let err = session
            .set_generation_depth(depth)
            .expect_err("out-of-range depth is rejected");
        assert!(matches!(err, ViewerError::InvalidConfig(_)));
        assert_eq!(session.config().generation_depth(), 7);
    }
}

#[test]
fn color_by_parses_every_wire_name() {
    let mut session = session_with(vec![]);
    for color_by in ColorBy::ALL {
        session
            .set_color_by(color_by.as_str())
            .expect("catalog name parses");
        assert_eq!(session.config().color_by(), color_by);
    }
}

#[test]
fn color_by_rejects_unknown_value_and_keeps_prior() {
    let mut session = session_with(vec![]);
    session.set_color_by("region").expect("valid dimension");

    let err = session
        .set_color_by("shoe_size")
        .expect_err("unknown dimension is rejected");
    assert!(matches!(err, ViewerError::InvalidConfig(_)));
    assert_eq!(session.config().color_by(), ColorBy::Region);
}

#[test]
fn palette_parses_every_catalog_key() {
    let mut session = session_with(vec![]);
    for palette in Palette::ALL {
        session
            .set_palette(palette.as_str())
            .expect("catalog key parses");
        assert_eq!(session.config().palette(), palette);
    }
}

#[test]
fn palette_rejects_unknown_value_and_keeps_prior() {
    let mut session = session_with(vec![]);
    session.set_palette("moss").expect("valid palette");

    let err = session
        .set_palette("Moss")
        .expect_err("keys are case-sensitive wire names");
    assert!(matches!(err, ViewerError::InvalidConfig(_)));
    assert_eq!(session.config().palette(), Palette::Moss);
}

#[test]
fn file_selection_is_replace_and_clear() {
    let mut session = session_with(vec![]);
    session.select_file(gedcom_file());
    assert_eq!(
        session
            .config()
            .selected_file()
            .expect("file stored")
            .name(),
        "famille.ged"
    );

    session.clear_selected_file();
    assert!(session.config().selected_file().is_none());
}

#[test]
fn sidebar_toggle_gates_controls() {
    let mut session = session_with(vec![]);
    assert!(session.controls_enabled());

    session.toggle_sidebar();
    assert!(!session.is_sidebar_open());
    assert!(!session.controls_enabled());

    session.toggle_sidebar();
    assert!(session.controls_enabled());
}
