use svgpath::{parse_path, Arc, CubicBezier, Line, Move, Path, PathError, Point, QuadraticBezier, Segment};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn assert_continuous(path: &Path) {
    let mut previous: Option<Point> = None;
    for segment in path {
        if let (Some(end), false) = (previous, segment.is_move()) {
            assert_eq!(segment.start(), end, "discontinuity at {:?}", segment);
        }
        previous = Some(segment.end());
    }
}

#[test]
fn test_first_segment_is_move() {
    init();
    for data in [
        "M3 4 L10 10",
        "M3,4 H7 V9 C1 2 3 4 5 6",
        "M3 4 Q1 1 2 2 T5 5 A1 1 0 0 1 9 9 Z",
        "M3 4",
    ] {
        let path = parse_path(data, None).unwrap();
        assert_eq!(path[0], Segment::Move(Move { to: p(3.0, 4.0) }), "{}", data);
    }
}

#[test]
fn test_square() {
    init();
    let path = parse_path("M0 0 L10 0 L10 10 Z", None).unwrap();
    let expected = vec![
        Segment::Move(Move { to: p(0.0, 0.0) }),
        Segment::Line(Line {
            start: p(0.0, 0.0),
            end: p(10.0, 0.0),
        }),
        Segment::Line(Line {
            start: p(10.0, 0.0),
            end: p(10.0, 10.0),
        }),
        Segment::Line(Line {
            start: p(10.0, 10.0),
            end: p(0.0, 0.0),
        }),
    ];
    assert_eq!(path.segments(), expected.as_slice());
    assert!(path.is_closed());
}

#[test]
fn test_relative_commands_after_move() {
    init();
    let origin = p(10.0, 20.0);
    let cases = [
        ("l1 2", p(11.0, 22.0)),
        ("h3", p(13.0, 20.0)),
        ("v-4", p(10.0, 16.0)),
        ("c1 1 2 2 3 4", p(13.0, 24.0)),
        ("s2 2 3 4", p(13.0, 24.0)),
        ("q1 1 3 4", p(13.0, 24.0)),
        ("t3 4", p(13.0, 24.0)),
        ("a5 5 0 0 1 3 4", p(13.0, 24.0)),
    ];
    for (data, end) in cases {
        let path = parse_path(&format!("M10 20 {}", data), None).unwrap();
        assert_eq!(path.len(), 2, "{}", data);
        assert_eq!(path[1].start(), origin, "{}", data);
        assert_eq!(path[1].end(), end, "{}", data);
    }
}

#[test]
fn test_relative_cubic_controls() {
    init();
    let path = parse_path("M10 20 c1 1 2 2 3 4", None).unwrap();
    assert_eq!(
        path[1],
        Segment::CubicBezier(CubicBezier {
            start: p(10.0, 20.0),
            control1: p(11.0, 21.0),
            control2: p(12.0, 22.0),
            end: p(13.0, 24.0),
        })
    );

    let path = parse_path("M10 20 q1 1 3 4", None).unwrap();
    assert_eq!(
        path[1],
        Segment::QuadraticBezier(QuadraticBezier {
            start: p(10.0, 20.0),
            control: p(11.0, 21.0),
            end: p(13.0, 24.0),
        })
    );
}

#[test]
fn test_arc_radii_are_not_relative() {
    init();
    let path = parse_path("M10 20 a5 6 45 1 1 3 4", None).unwrap();
    assert_eq!(
        path[1],
        Segment::Arc(Arc {
            start: p(10.0, 20.0),
            radius: p(5.0, 6.0),
            rotation: 45.0,
            large_arc: true,
            sweep: true,
            end: p(13.0, 24.0),
        })
    );
}

#[test]
fn test_smooth_cubic_reflection() {
    init();
    let path = parse_path("M0 0 C0 10 10 10 10 0 S20 -10 20 0", None).unwrap();
    match path.last() {
        Some(Segment::CubicBezier(c)) => assert_eq!(c.control1, p(10.0, -10.0)),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_smooth_quadratic_reflection() {
    init();
    let path = parse_path("M0 0 Q10 10 20 0 T40 0", None).unwrap();
    match path.last() {
        Some(Segment::QuadraticBezier(q)) => assert_eq!(q.control, p(30.0, -10.0)),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_implicit_repetition() {
    init();
    let path = parse_path("M0 0 L10 10 20 20", None).unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(
        path[2],
        Segment::Line(Line {
            start: p(10.0, 10.0),
            end: p(20.0, 20.0),
        })
    );
}

#[test]
fn test_bare_numbers_fail() {
    init();
    assert!(matches!(
        parse_path("10 10", None),
        Err(PathError::UnallowedImplicitCommand { .. })
    ));
}

#[test]
fn test_truncated_fails() {
    init();
    assert!(matches!(
        parse_path("M0 0 A1 1 0 0 1 5", None),
        Err(PathError::TruncatedData { expected: 7, found: 6, .. })
    ));
    assert!(matches!(
        parse_path("M", None),
        Err(PathError::TruncatedData { expected: 2, found: 0, .. })
    ));
}

#[test]
fn test_compact_notation() {
    init();
    let path = parse_path("M.5-.5l1.5.5.5-1e1z", None).unwrap();
    assert_eq!(path[0], Segment::Move(Move { to: p(0.5, -0.5) }));
    assert_eq!(path[1].end(), p(2.0, 0.0));
    assert_eq!(path[2].end(), p(2.5, -10.0));
    assert!(path.is_closed());
    assert_continuous(&path);
}

#[test]
fn test_continuity() {
    init();
    let data = "M10 10 h20 v20 c0 5 5 10 10 10 s10 -5 10 -10 q5 -5 10 0 t10 0 \
                a5 5 0 0 1 10 10 L0 0 z m5 5 l1 1 Z M100 100 60 60";
    let path = parse_path(data, None).unwrap();
    assert_continuous(&path);
    assert!(path.is_closed());
    assert_eq!(path.iter().filter(|s| s.is_move()).count(), 3);
}

#[test]
fn test_error_message() {
    let err = parse_path("M0 0 C1", None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Truncated path data: `C` expects 6 numbers, found 1"
    );
}
