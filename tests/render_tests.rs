//! Frame rendering tests - pixels produced for whole states

use std::path::PathBuf;

use hexplot::core::{dump, Board, GridCell, State, Unit};
use hexplot::render::{centroid, vertices, FontConfig, Frame, FrameView, RenderError};
use hexplot::types::{Palette, Rgb};

fn bundled_font() -> PathBuf {
    PathBuf::from(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/fonts/DejaVuSansMono.ttf"
    ))
}

fn view(edge: u32) -> FrameView {
    let fonts = FontConfig {
        primary: bundled_font(),
        fallback: bundled_font(),
    };
    FrameView::new(edge, fonts.load().unwrap().font).unwrap()
}

fn single_cell(locked: bool, unit: Vec<GridCell>) -> State {
    let board = Board::from_rows(1, 1, &[vec![locked]]).unwrap();
    State::new(board, Unit::new(unit, GridCell::new(0, 0)))
}

/// Point inside the top of hexagon (0, 0), clear of its label
const TOP_INTERIOR: (u32, u32) = (16, 5);

#[test]
fn test_single_unit_cell_end_to_end() {
    let json = r#"{
        "board": {"width": 1, "height": 1, "cells": [[false]]},
        "unit": {"cells": [[0, 0]], "pivot": [0, 0]},
        "previousMove": ""
    }"#;
    let states = dump::parse_states(json).unwrap();
    let palette = Palette::default();
    let frame = view(16).render(&states[0]).unwrap();

    assert_eq!((frame.width(), frame.height()), (32, 32));
    assert_eq!(
        frame.get(TOP_INTERIOR.0, TOP_INTERIOR.1),
        Some(palette.unit_fill)
    );

    let pixels: Vec<Rgb> = (0..32)
        .flat_map(|y| (0..32).map(move |x| (x, y)))
        .filter_map(|(x, y)| frame.get(x, y))
        .collect();
    assert!(
        pixels.contains(&palette.pivot_outline),
        "pivot outline not drawn"
    );
    assert!(
        !pixels.contains(&palette.unit_outline),
        "pivot outline should replace the unit outline"
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let mut board = Board::new(5, 4).unwrap();
    board.set(GridCell::new(2, 3), true);
    board.set(GridCell::new(4, 0), true);
    let state = State::new(
        board,
        Unit::new(vec![GridCell::new(1, 1), GridCell::new(2, 1)], GridCell::new(1, 1)),
    )
    .with_previous_move("E");

    let view = view(12);
    let a = view.render(&state).unwrap();
    let b = view.render(&state).unwrap();
    assert_eq!(a.as_raw(), b.as_raw());
    assert_eq!(a.encode_png().unwrap(), b.encode_png().unwrap());
}

#[test]
fn test_out_of_bounds_unit_draws_nothing_extra() {
    let board = Board::new(3, 3).unwrap();
    let with_oob = State::new(
        board.clone(),
        Unit::new(vec![GridCell::new(5, 5)], GridCell::new(0, 0)),
    );
    let empty = State::new(board, Unit::empty(GridCell::new(0, 0)));

    let view = view(16);
    assert_eq!(view.render(&with_oob).unwrap(), view.render(&empty).unwrap());
}

#[test]
fn test_unit_fill_wins_over_locked() {
    let palette = Palette::default();
    let view = view(16);
    let (x, y) = TOP_INTERIOR;

    let locked_only = view.render(&single_cell(true, vec![])).unwrap();
    assert_eq!(locked_only.get(x, y), Some(palette.locked_fill));

    let both = view.render(&single_cell(true, vec![GridCell::new(0, 0)])).unwrap();
    assert_eq!(both.get(x, y), Some(palette.unit_fill));

    let empty = view.render(&single_cell(false, vec![])).unwrap();
    assert_eq!(empty.get(x, y), Some(palette.empty_fill));
}

#[test]
fn test_caption_is_drawn() {
    let board = Board::new(3, 3).unwrap();
    let plain = State::new(board.clone(), Unit::empty(GridCell::new(0, 0)));
    let captioned = plain.clone().with_previous_move("SW");
    let blank = plain.clone().with_previous_move("");

    let view = view(16);
    assert_ne!(view.render(&plain).unwrap(), view.render(&captioned).unwrap());
    assert_eq!(view.render(&plain).unwrap(), view.render(&blank).unwrap());
}

#[test]
fn test_frame_size_tracks_board_and_edge() {
    let state = State::new(Board::new(7, 3).unwrap(), Unit::empty(GridCell::new(0, 0)));
    for edge in [4, 10, 16, 25] {
        let view = view(edge);
        assert_eq!(view.frame_size(&state).unwrap(), (7 * edge * 2, 3 * edge * 2));
        let frame = view.render(&state).unwrap();
        assert_eq!((frame.width(), frame.height()), (7 * edge * 2, 3 * edge * 2));
    }
}

#[test]
fn test_edge_below_minimum_is_rejected() {
    let font = FontConfig {
        primary: bundled_font(),
        fallback: bundled_font(),
    }
    .load()
    .unwrap()
    .font;
    match FrameView::new(3, font) {
        Err(RenderError::InvalidEdge { edge: 3, min: 4 }) => {}
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("edge 3 should be rejected"),
    }
}

#[test]
fn test_custom_palette_is_used() {
    let palette = Palette {
        unit_fill: Rgb::new(0, 160, 0),
        ..Palette::default()
    };
    let view = view(16).with_palette(palette);
    let frame = view.render(&single_cell(false, vec![GridCell::new(0, 0)])).unwrap();
    assert_eq!(
        frame.get(TOP_INTERIOR.0, TOP_INTERIOR.1),
        Some(Rgb::new(0, 160, 0))
    );
    assert_eq!(view.palette(), &palette);
}

#[test]
fn test_oversized_frame_is_an_error() {
    let state = State::new(Board::new(8, 1).unwrap(), Unit::empty(GridCell::new(0, 0)));
    let view = view(300_000_000);
    match view.frame_size(&state) {
        Err(RenderError::FrameTooLarge {
            width: 8,
            height: 1,
            edge: 300_000_000,
        }) => {}
        other => panic!("expected FrameTooLarge, got {:?}", other),
    }
    assert!(matches!(
        view.render(&state),
        Err(RenderError::FrameTooLarge { .. })
    ));
}

/// Count pixels within the middle of hexagon (0, 0) that are close to `color`
fn label_pixels(frame: &Frame, edge: u32, color: Rgb) -> usize {
    let center = centroid(&vertices(0, 0, edge as f32));
    // Half the inradius keeps the box well inside the outline.
    let half = edge as f32 * 0.43;
    let (x0, x1) = ((center.x - half) as u32, (center.x + half) as u32);
    let (y0, y1) = ((center.y - half) as u32, (center.y + half) as u32);
    let near = |a: u8, b: u8| (a as i32 - b as i32).abs() <= 30;
    (y0..=y1)
        .flat_map(|y| (x0..=x1).map(move |x| (x, y)))
        .filter_map(|(x, y)| frame.get(x, y))
        .filter(|p| near(p.r, color.r) && near(p.g, color.g) && near(p.b, color.b))
        .count()
}

#[test]
fn test_label_uses_resolved_outline_color() {
    let edge = 64;
    let palette = Palette {
        pivot_outline: Rgb::new(0, 200, 0),
        locked_outline: Rgb::new(0, 0, 200),
        ..Palette::default()
    };
    let view = view(edge).with_palette(palette);

    // Unit cell that is also the pivot: the label takes the pivot color.
    let pivot = view
        .render(&single_cell(false, vec![GridCell::new(0, 0)]))
        .unwrap();
    assert!(label_pixels(&pivot, edge, palette.pivot_outline) > 0);
    assert_eq!(label_pixels(&pivot, edge, palette.unit_outline), 0);

    // Locked cell whose pivot lies elsewhere: the label takes the locked outline.
    let board = Board::from_rows(1, 1, &[vec![true]]).unwrap();
    let locked = view
        .render(&State::new(board, Unit::empty(GridCell::new(3, 3))))
        .unwrap();
    assert!(label_pixels(&locked, edge, palette.locked_outline) > 0);
    assert_eq!(label_pixels(&locked, edge, palette.pivot_outline), 0);
}
