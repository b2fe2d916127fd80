use sparselife_lib::{
    bounding_box, render, render_cell, render_with, Coord, Format, Generation, Glyphs, Pattern,
    Trace,
};

#[test]
fn rpentomino() {
    assert_eq!(
        render(&Pattern::RPentomino.generation()),
        String::from(
            "▢ ▣ ▣\n\
             ▣ ▣ ▢\n\
             ▢ ▣ ▢\n"
        )
    );
}

#[test]
fn glider() {
    assert_eq!(
        render(&Pattern::Glider.generation()),
        String::from(
            "▢ ▢ ▢ ▢ ▣ ▢\n\
             ▢ ▢ ▢ ▢ ▢ ▣\n\
             ▢ ▢ ▢ ▣ ▣ ▣\n\
             ▢ ▢ ▢ ▢ ▢ ▢\n\
             ▣ ▣ ▢ ▢ ▢ ▢\n\
             ▣ ▣ ▢ ▢ ▢ ▢\n"
        )
    );
}

#[test]
fn empty() {
    assert_eq!(render(&Generation::empty()), "\u{25A2}\n");
}

#[test]
fn plaintext() {
    assert_eq!(
        render_with(&Pattern::RPentomino.generation(), Glyphs::PLAINTEXT),
        ". o o\no o .\n. o .\n"
    );
    assert_eq!(
        render_with(&Pattern::Square.generation(), Format::Plaintext.glyphs()),
        "o o\no o\n"
    );
}

#[test]
fn display_uses_default_glyphs() {
    let square = Pattern::Square.generation();
    assert_eq!(square.to_string(), render(&square));
    assert_eq!(square.to_string(), "▣ ▣\n▣ ▣\n");
}

#[test]
fn single_cells() {
    let square = Pattern::Square.generation();
    assert_eq!(render_cell(Coord::new(1, 1), &square, Glyphs::SQUARES), "▣");
    assert_eq!(render_cell(Coord::new(0, 1), &square, Glyphs::SQUARES), "▢");
    assert_eq!(render_cell(Coord::new(0, 1), &square, Glyphs::PLAINTEXT), ".");
}

#[test]
fn shape_matches_bounding_box() {
    let trace = Trace::new(Pattern::RPentomino.generation(), 12);
    for generation in &trace {
        let bbox = bounding_box(generation);
        let text = render_with(generation, Glyphs::PLAINTEXT);
        assert!(text.ends_with('\n'));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len() as u64, bbox.height());
        for line in lines {
            assert_eq!(line.split(' ').count() as u64, bbox.width());
        }
    }
}

#[test]
fn formats() {
    assert_eq!("glyph".parse(), Ok(Format::Glyph));
    assert_eq!("plaintext".parse(), Ok(Format::Plaintext));
    assert!("rle".parse::<Format>().is_err());
    assert_eq!(Format::Plaintext.to_string(), "plaintext");
    assert_eq!(Format::default(), Format::Glyph);
}
