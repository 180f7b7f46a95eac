// Host-side tests for grid layout and cell classification.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod grid {
    pub mod config {
        include!("../src/grid/config.rs");
    }
    pub mod constants {
        include!("../src/grid/constants.rs");
    }
    pub mod layout {
        include!("../src/grid/layout.rs");
    }
}

use grid::config::*;
use grid::layout::*;

fn landing(width: f32, height: f32) -> GridLayout {
    GridLayout::compute(&Variant::Landing.config(), width, height).expect("layout")
}

#[test]
fn landscape_canvas_uses_sixteen_columns_of_height_derived_cells() {
    let layout = landing(1600.0, 700.0);
    assert_eq!(layout.rows, 7);
    assert_eq!(layout.columns, 16);
    assert!((layout.cell_size - 100.0).abs() < 1e-4);
    // 5 note rows x 14 note columns between the margins and drum columns
    assert_eq!(layout.note_rows(), 5);
    assert_eq!(layout.note_columns(), 14);
    assert_eq!(layout.note_cell_count(), 70);
}

#[test]
fn first_interior_cell_is_note_zero() {
    let layout = landing(1600.0, 700.0);
    let (cell, role) = layout.locate(150.0, 150.0).expect("inside grid");
    assert_eq!(cell, Cell { row: 1, col: 1 });
    assert_eq!(role, CellRole::Note(0));
}

#[test]
fn note_index_is_row_major_over_the_note_region() {
    let layout = landing(1600.0, 700.0);
    assert_eq!(layout.classify(Cell { row: 1, col: 14 }), Some(CellRole::Note(13)));
    assert_eq!(layout.classify(Cell { row: 2, col: 1 }), Some(CellRole::Note(14)));
    assert_eq!(layout.classify(Cell { row: 5, col: 14 }), Some(CellRole::Note(69)));
}

#[test]
fn edge_columns_are_drums_and_edge_rows_are_silent() {
    let layout = landing(1600.0, 700.0);
    assert_eq!(layout.locate(0.0, 150.0).map(|(_, r)| r), Some(CellRole::Drum));
    assert_eq!(layout.locate(1599.0, 450.0).map(|(_, r)| r), Some(CellRole::Drum));
    assert_eq!(layout.locate(750.0, 50.0).map(|(_, r)| r), Some(CellRole::Silent));
    assert_eq!(layout.locate(750.0, 650.0).map(|(_, r)| r), Some(CellRole::Silent));
    // margin rows win over drum columns in the corners
    assert_eq!(layout.locate(0.0, 0.0).map(|(_, r)| r), Some(CellRole::Silent));
}

#[test]
fn positions_outside_the_grid_are_ignored() {
    let layout = landing(1600.0, 700.0);
    assert!(layout.locate(-1.0, 150.0).is_none());
    assert!(layout.locate(150.0, -0.5).is_none());
    assert!(layout.locate(1600.0, 150.0).is_none());
    assert!(layout.locate(150.0, 700.0).is_none());
    assert!(layout.locate(f32::NAN, 150.0).is_none());
    assert!(layout.classify(Cell { row: 7, col: 0 }).is_none());
}

#[test]
fn portrait_canvas_switches_to_nine_columns() {
    let layout = landing(700.0, 1600.0);
    assert_eq!(layout.columns, 9);
    assert!((layout.cell_size - 1600.0 / 7.0).abs() < 1e-3);
    assert_eq!(layout.note_cell_count(), 5 * 7);
}

#[test]
fn zero_sized_or_rowless_canvas_has_no_layout() {
    let config = Variant::Landing.config();
    assert!(GridLayout::compute(&config, 0.0, 700.0).is_none());
    assert!(GridLayout::compute(&config, 1600.0, 0.0).is_none());
    assert!(GridLayout::compute(&config, f32::INFINITY, 700.0).is_none());
    let rowless = GridConfig { rows: 0, ..config };
    assert!(GridLayout::compute(&rowless, 1600.0, 700.0).is_none());
}

#[test]
fn derived_columns_follow_the_aspect_ratio() {
    let layout = GridLayout::compute(&Variant::Open.config(), 1250.0, 600.0).expect("layout");
    assert_eq!(layout.columns, 12);
    assert_eq!(layout.note_cell_count(), 6 * 12);
    assert_eq!(layout.locate(150.0, 150.0).map(|(_, r)| r), Some(CellRole::Note(13)));
    assert!(layout.drum_column_ranges().is_empty());
}

#[test]
fn fixed_columns_leave_a_gutter_on_wide_canvases() {
    let layout = GridLayout::compute(&Variant::Fixed.config(), 2000.0, 700.0).expect("layout");
    assert_eq!(layout.columns, 16);
    assert!((layout.grid_width() - 1600.0).abs() < 1e-3);
    assert!(layout.locate(1700.0, 150.0).is_none());
}

#[test]
fn one_sided_and_double_drum_columns() {
    let fluid = GridLayout::compute(&Variant::Fluid.config(), 800.0, 800.0).expect("layout");
    assert_eq!(fluid.columns, 8);
    assert_eq!(fluid.locate(50.0, 50.0).map(|(_, r)| r), Some(CellRole::Drum));
    assert_eq!(fluid.locate(750.0, 50.0).map(|(_, r)| r), Some(CellRole::Note(6)));
    assert_eq!(fluid.drum_column_ranges().as_slice(), &[0..1]);

    let wide = GridLayout::compute(&Variant::Wide.config(), 2000.0, 700.0).expect("layout");
    assert_eq!(wide.columns, 20);
    assert_eq!(wide.locate(150.0, 150.0).map(|(_, r)| r), Some(CellRole::Drum));
    assert_eq!(wide.locate(250.0, 150.0).map(|(_, r)| r), Some(CellRole::Note(0)));
    assert_eq!(wide.drum_column_ranges().as_slice(), &[0..2, 18..20]);
}

#[test]
fn oversized_reservations_leave_no_notes() {
    let config = GridConfig {
        margins: Margins { top: 4, bottom: 4 },
        ..Variant::Landing.config()
    };
    let layout = GridLayout::compute(&config, 1600.0, 700.0).expect("layout");
    assert_eq!(layout.note_cell_count(), 0);
    assert_eq!(layout.locate(750.0, 350.0).map(|(_, r)| r), Some(CellRole::Silent));
}

#[test]
fn flat_index_matches_cell_from_index() {
    let layout = landing(1600.0, 700.0);
    let cell = Cell { row: 3, col: 7 };
    let index = layout.flat_index(cell);
    assert_eq!(index, 3 * 16 + 7);
    assert_eq!(layout.cell_from_index(index), Some(cell));
    assert_eq!(layout.cell_from_index(7 * 16), None);
    assert_eq!(layout.cell_center(cell), (750.0, 350.0));
}
