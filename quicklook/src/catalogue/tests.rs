//! Tests for catalogue overlays.

use super::*;

fn source(classification: Option<f32>, ellipticity: f32) -> CatalogueSource {
    CatalogueSource {
        x: 100.0,
        y: 200.0,
        classification,
        gaussian_sigma: 1.0,
        ellipticity,
        position_angle: 0.0,
    }
}

fn assert_close(actual: (f32, f32), expected: (f32, f32)) {
    assert!(
        (actual.0 - expected.0).abs() < 1e-3 && (actual.1 - expected.1).abs() < 1e-3,
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn test_colour_by_classification() {
    assert_eq!(SourceColour::for_source(&source(Some(-1.0), 0.9)), Some(SourceColour::Blue));
    assert_eq!(SourceColour::for_source(&source(Some(-2.0), 0.9)), Some(SourceColour::Blue));
    assert_eq!(SourceColour::for_source(&source(Some(0.0), 0.0)), Some(SourceColour::Red));
    assert_eq!(SourceColour::for_source(&source(Some(1.0), 0.0)), Some(SourceColour::Green));
    assert_eq!(SourceColour::for_source(&source(Some(2.0), 0.0)), Some(SourceColour::Green));
    assert_eq!(SourceColour::for_source(&source(Some(-9.0), 0.0)), None);
}

#[test]
fn test_colour_by_ellipticity_when_unclassified() {
    assert_eq!(SourceColour::for_source(&source(None, 0.1)), Some(SourceColour::Blue));
    assert_eq!(SourceColour::for_source(&source(None, 0.2)), Some(SourceColour::Blue));
    assert_eq!(SourceColour::for_source(&source(None, 0.3)), None);
    assert_eq!(SourceColour::for_source(&source(None, 0.4)), None);
    assert_eq!(SourceColour::for_source(&source(None, 0.5)), Some(SourceColour::Red));
}

#[test]
fn test_pgplot_indices() {
    assert_eq!(SourceColour::Red.pgplot_index(), 2);
    assert_eq!(SourceColour::Green.pgplot_index(), 3);
    assert_eq!(SourceColour::Blue.pgplot_index(), 4);
}

#[test]
fn test_circle_outline() {
    let outline = ellipse_outline(&source(None, 0.0), (0.0, 0.0), 2.0);
    assert_eq!(outline.len(), OUTLINE_VERTICES);

    // Radius 2.4 * 2 * 1.
    assert_close(outline[0], (104.8, 200.0));
    assert_close(outline[15], (100.0, 204.8));
    assert_close(outline[30], (95.2, 200.0));
    assert_close(outline[45], (100.0, 195.2));
}

#[test]
fn test_rotated_ellipse_outline() {
    let tilted = CatalogueSource {
        ellipticity: 0.5,
        position_angle: 90.0,
        ..source(None, 0.0)
    };
    let outline = ellipse_outline(&tilted, (0.0, 0.0), 2.0);

    // Major axis along y, minor axis half as long along x.
    assert_close(outline[0], (100.0, 204.8));
    assert_close(outline[15], (97.6, 200.0));
}

#[test]
fn test_outline_applies_section_offset() {
    let outline = ellipse_outline(&source(None, 0.0), (99.0, 199.0), 1.0);
    assert_close(outline[0], (1.0 + 2.4, 1.0));
}

#[test]
fn test_outline_is_open() {
    let outline = ellipse_outline(&source(None, 0.0), (0.0, 0.0), 1.0);
    let first = outline[0];
    let last = outline[OUTLINE_VERTICES - 1];
    assert!((first.0 - last.0).abs() > 1e-3 || (first.1 - last.1).abs() > 1e-3);
}

#[test]
fn test_markers_keep_previous_colour() {
    let sources = [
        source(None, 0.3),
        source(None, 0.1),
        source(None, 0.3),
        source(None, 0.9),
        source(None, 0.35),
    ];
    let colours: Vec<_> = source_markers(&sources, (0.0, 0.0), 2.0)
        .into_iter()
        .map(|marker| marker.colour)
        .collect();
    assert_eq!(
        colours,
        vec![
            SourceColour::Red,
            SourceColour::Blue,
            SourceColour::Blue,
            SourceColour::Red,
            SourceColour::Red,
        ]
    );
}

#[test]
fn test_columns_to_sources() {
    let x = [10.0, 20.0];
    let y = [11.0, 21.0];
    let class = [-1.0, 1.0];
    let sigma = [1.5, 2.5];
    let ell = [0.1, 0.6];
    let pa = [30.0, 60.0];

    let columns = CatalogueColumns {
        x: &x,
        y: &y,
        classification: Some(&class[..]),
        gaussian_sigma: &sigma,
        ellipticity: &ell,
        position_angle: &pa,
    };
    let sources = columns.sources().unwrap();
    assert_eq!(sources.len(), 2);
    assert_eq!(
        sources[1],
        CatalogueSource {
            x: 20.0,
            y: 21.0,
            classification: Some(1.0),
            gaussian_sigma: 2.5,
            ellipticity: 0.6,
            position_angle: 60.0,
        }
    );

    let unclassified = CatalogueColumns {
        classification: None,
        ..columns
    };
    assert!(unclassified
        .sources()
        .unwrap()
        .iter()
        .all(|s| s.classification.is_none()));
}

#[test]
fn test_column_length_mismatch() {
    let x = [1.0, 2.0, 3.0];
    let short = [1.0, 2.0];
    let columns = CatalogueColumns {
        x: &x,
        y: &x,
        classification: None,
        gaussian_sigma: &x,
        ellipticity: &short,
        position_angle: &x,
    };
    assert_eq!(
        columns.sources(),
        Err(CatalogueError::LengthMismatch {
            column: ELLIPTICITY_COLUMN,
            expected: 3,
            found: 2,
        })
    );
}
