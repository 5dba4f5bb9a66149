use super::*;

const START: &str = "obupyrgn
........
........
........
........
........
........
NGRYPUBO
";

#[test]
fn test_label_corners() {
    assert_eq!(Coord::from_label("a1").unwrap(), Coord::new(7, 0).unwrap());
    assert_eq!(Coord::from_label("h8").unwrap(), Coord::new(0, 7).unwrap());
    assert_eq!(Coord::from_label(" D3\n").unwrap(), Coord::new(5, 3).unwrap());
}

#[test]
fn test_invalid_labels() {
    for bad in ["", "a", "i1", "a9", "a0", "11", "a1b"] {
        assert_eq!(
            Coord::from_label(bad),
            Err(KamisadoError::InvalidLabel(bad.to_string())),
            "{bad:?}"
        );
    }
}

#[test]
fn test_label_display() {
    let c = Coord::new(6, 0).unwrap();
    assert_eq!(c.label(), "a2");
    assert_eq!(c.to_string(), "a2");
    for cell in Coord::all() {
        assert_eq!(Coord::from_label(&cell.label()).unwrap(), cell);
    }
}

#[test]
fn test_startpos_diagram() {
    assert_eq!(State::startpos().to_diagram(), START);
    assert_eq!(State::from_diagram(START).unwrap(), State::startpos());
}

#[test]
fn test_diagram_ignores_whitespace() {
    let spaced = START.replace('\n', "  \n  ");
    assert_eq!(State::from_diagram(&spaced).unwrap(), State::startpos());
}

#[test]
fn test_diagram_errors() {
    assert!(matches!(
        State::from_diagram("obupyrgn"),
        Err(KamisadoError::InvalidDiagram(_))
    ));

    let duplicate = START.replacen('b', "o", 1);
    assert!(matches!(
        State::from_diagram(&duplicate),
        Err(KamisadoError::InvalidDiagram(msg)) if msg.contains("two orange")
    ));

    let missing = START.replacen('N', ".", 1);
    assert!(matches!(
        State::from_diagram(&missing),
        Err(KamisadoError::InvalidDiagram(msg)) if msg.contains("no brown")
    ));

    let junk = START.replacen('.', "x", 1);
    assert!(matches!(
        State::from_diagram(&junk),
        Err(KamisadoError::InvalidDiagram(msg)) if msg.contains("unexpected character")
    ));
}

#[test]
fn test_color_from_str() {
    assert_eq!("Purple".parse::<Color>().unwrap(), Color::Purple);
    assert_eq!(" brown ".parse::<Color>().unwrap(), Color::Brown);
    assert!("teal".parse::<Color>().is_err());
}
