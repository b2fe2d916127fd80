use sparselife_lib::{Config, Coord, Error, Format, Generation, Pattern, Trace};

#[test]
fn catalog() {
    assert_eq!("rpentomino".parse(), Ok(Pattern::RPentomino));
    assert_eq!("glider".parse(), Ok(Pattern::Glider));
    assert_eq!("square".parse(), Ok(Pattern::Square));
    assert_eq!(
        "Glider".parse::<Pattern>(),
        Err(Error::UnknownPattern(String::from("Glider")))
    );
    for &pattern in &Pattern::ALL {
        assert_eq!(pattern.to_string().parse(), Ok(pattern));
    }
    assert_eq!(Pattern::Glider.generation().len(), 9);
    assert_eq!(
        Pattern::Square.generation(),
        Generation::new(vec![(1, 1), (2, 1), (1, 2), (2, 2)])
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        Error::UnknownPattern(String::from("gun")).to_string(),
        "Unknown pattern \"gun\". Available patterns: rpentomino, glider, square."
    );
    assert_eq!(
        Error::InvalidIterationCount(String::from("-2")).to_string(),
        "Invalid iteration count \"-2\". It should be a non-negative integer."
    );
}

#[test]
fn default() {
    let config = Config::default();
    assert_eq!(config.pattern, Pattern::RPentomino);
    assert_eq!(config.iterations, 10);
    assert_eq!(config.format, Format::Glyph);
    assert_eq!(config.cells, None);
    assert_eq!(config.trace().len(), 11);
}

#[test]
fn builder() {
    let config = Config::new(Pattern::Square, 3).set_format(Format::Plaintext);
    let trace = config.trace();
    assert_eq!(trace.len(), 4);
    assert!(trace.iter().all(|g| *g == Pattern::Square.generation()));
    assert_eq!(config.set_iterations(0).trace().len(), 1);
}

#[test]
fn explicit_cells() {
    let cells = vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)];
    let config = Config::new(Pattern::Glider, 2).set_cells(cells);
    assert_eq!(config.initial().len(), 3);
    assert_eq!(config.trace().last(), &config.initial());
    let config = Config {
        cells: None,
        ..config
    };
    assert_eq!(config.initial(), Pattern::Glider.generation());
}

#[test]
#[cfg(feature = "serde")]
fn ser() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::new(Pattern::Glider, 4).set_format(Format::Plaintext);
    let json = serde_json::to_string(&config)?;
    assert_eq!(
        json,
        r#"{"pattern":"glider","cells":null,"iterations":4,"format":"plaintext"}"#
    );
    assert_eq!(serde_json::from_str::<Config>(&json)?, config);

    let partial: Config = serde_json::from_str(r#"{"cells":[[0,0],[1,0],[2,0]]}"#)?;
    assert_eq!(partial.iterations, 10);
    assert_eq!(
        partial.initial(),
        Generation::new(vec![(0, 0), (1, 0), (2, 0)])
    );

    let generation = Pattern::Square.generation();
    assert_eq!(
        serde_json::to_string(&generation)?,
        "[[1,2],[2,2],[1,1],[2,1]]"
    );
    let outside: Generation = serde_json::from_str("[[0,0],[2147483647,0]]")?;
    assert_eq!(outside, Generation::new(vec![(0, 0)]));

    let trace = Config::new(Pattern::Square, 1).trace();
    let json = serde_json::to_string(&trace)?;
    assert_eq!(json, "[[[1,2],[2,2],[1,1],[2,1]],[[1,2],[2,2],[1,1],[2,1]]]");
    assert_eq!(serde_json::from_str::<Trace>(&json)?, trace);
    assert!(serde_json::from_str::<Trace>("[]").is_err());
    Ok(())
}

#[test]
fn empty_trace() {
    assert_eq!(Trace::try_from(Vec::new()), Err(Error::EmptyTrace));
    let trace = Trace::try_from(vec![Pattern::Square.generation()]);
    assert_eq!(trace.map(|t| t.iterations()), Ok(0));
}
