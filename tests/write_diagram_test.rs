//! Tests for writing diagrams to disk and for the document layout on canvas

use std::fs;

use tempfile::TempDir;

use kite_diagram::{
    write_diagram, DiagramConfig, RenderConfig, RenderError, Stylesheet, SvgConfig, WordTable,
};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_write_creates_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("diagram.svg");
    let table = WordTable::align(&words(&["A", "B"]), &words(&["X"]), &[]);

    write_diagram(&path, &table, &RenderConfig::default()).expect("write should succeed");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("<?xml"));
    assert!(content.trim_end().ends_with("</svg>"));
    assert!(content.contains(">A</text>"));
    assert!(content.contains(">X</text>"));
}

#[test]
fn test_write_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("diagram.svg");
    fs::write(&path, "stale content that is longer than nothing").unwrap();

    write_diagram(&path, &WordTable::empty(), &RenderConfig::default()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("stale"));
}

#[test]
fn test_write_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("diagram.svg");

    let err = write_diagram(&path, &WordTable::empty(), &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, RenderError::Io(_)));
}

#[test]
fn test_invalid_config_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("diagram.svg");
    let config = RenderConfig::new().with_diagram(DiagramConfig::new().with_radii(50, 80));

    let err = write_diagram(&path, &WordTable::empty(), &config).unwrap_err();
    assert!(matches!(err, RenderError::Config(_)));
    assert!(!path.exists());
}

#[test]
fn test_config_files_drive_output() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("kite.toml");
    let style_path = dir.path().join("style.toml");
    fs::write(
        &config_path,
        "[diagram]\nfont-size = 18\nouter-radius = 100\ninner-radius = 80\ncanvas-scale = 3.5\n",
    )
    .unwrap();
    fs::write(&style_path, "[style]\nstroke = \"#336699\"\n").unwrap();

    let diagram = DiagramConfig::from_file(&config_path).unwrap();
    let stylesheet = Stylesheet::from_file(&style_path).unwrap();
    let config = RenderConfig::new()
        .with_diagram(diagram)
        .with_stylesheet(stylesheet)
        .with_svg(SvgConfig::new().with_standalone(false));

    let out = dir.path().join("out.svg");
    write_diagram(&out, &WordTable::empty(), &config).unwrap();
    let svg = fs::read_to_string(&out).unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"viewBox="-175 -175 350 350""#));
    assert!(svg.contains("font: 18px sans-serif"));
    assert!(svg.contains(r##"stroke="#336699""##));
    assert!(svg.contains(r#"<g transform="translate(100,0)">"#));
}

#[test]
fn test_wedge_rotations_cover_circle() {
    let table = WordTable::align(&vec![String::from("w"); 8], &[], &[]);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eight.svg");
    write_diagram(&path, &table, &RenderConfig::default()).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();

    let rotations: Vec<f64> = doc
        .descendants()
        .filter(|n| n.attribute("class") == Some("kite-wedge"))
        .map(|n| {
            n.attribute("transform")
                .and_then(|t| t.strip_prefix("rotate(")?.strip_suffix(')')?.parse().ok())
                .unwrap_or(0.0)
        })
        .collect();

    assert_eq!(rotations, vec![0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0]);
    let step = rotations[1] - rotations[0];
    assert!((step * rotations.len() as f64 - 360.0).abs() < 1e-9);
}

#[test]
fn test_stylesheet_with_markup_characters_stays_well_formed() {
    let dir = TempDir::new().unwrap();
    let style_path = dir.path().join("style.toml");
    fs::write(
        &style_path,
        "[style]\nstroke = 'a\"b'\nfont-family = '\"Fira Sans\" & <serif>'\n",
    )
    .unwrap();

    let config = RenderConfig::new().with_stylesheet(Stylesheet::from_file(&style_path).unwrap());
    let out = dir.path().join("out.svg");
    write_diagram(&out, &WordTable::empty(), &config).unwrap();

    let svg = fs::read_to_string(&out).unwrap();
    let doc = roxmltree::Document::parse(&svg).expect("well-formed SVG");
    let strokes: Vec<_> = doc
        .descendants()
        .filter_map(|n| n.attribute("stroke"))
        .collect();
    assert_eq!(strokes.len(), 6);
    assert!(strokes.iter().all(|s| *s == "a\"b"));
}
