use line_clamp::{
    layout::width::string_width, CellSurface, ClampBinding, ClampConfig, ClampOutcome,
    HostElement, LineClamp, ELLIPSIS,
};
use pretty_assertions::assert_eq;

const NO_OVERFLOW: &str = "This is a text that has no overflow, just standard wrapping";
const OVERFLOW: &str =
    "This is a text that exceeds the height of its container and an ellipsis should be inserted";

const TEXTS: [&str; 8] = [
    NO_OVERFLOW,
    OVERFLOW,
    "Another example of a text that exceeds the height of its container.",
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Praesent commodo scelerisque dolor",
    "Lorem ipsum nisl ante, laoreet eu tempor eget, efficitur nec augue. Morbi a erat vel mi cursus porta. Lorem ipsum dolor sit amet, consectetur adipiscing elit",
    "Lorem ipsum vestibulum ante ipsum primis in faucibus orci luctus et ultrices posuere cubilia curae",
    "xx abcd e fgh ij k l m",
    "a bb c dd e ff g hh i jj k",
];

fn clamp(columns: u16, text: &str, allowed_lines: usize) -> ClampOutcome {
    let mut surface = CellSurface::new(columns);
    let config = ClampConfig::new(allowed_lines).unwrap();
    LineClamp::new().run(&mut surface, &config, text).unwrap()
}

fn kept_text(outcome: &ClampOutcome) -> &str {
    let text = outcome.text().unwrap();
    text.strip_suffix(ELLIPSIS).unwrap_or(text)
}

fn normalized(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn text_that_wraps_within_the_limit_is_untouched() {
    assert_eq!(CellSurface::with_text(24, NO_OVERFLOW).rendered_lines().len(), 3);

    assert_eq!(
        clamp(24, NO_OVERFLOW, 3),
        ClampOutcome::NoOverflow {
            text: NO_OVERFLOW.to_owned()
        }
    );
}

#[test]
fn narrow_container_gets_an_ellipsis_within_three_lines() {
    let outcome = clamp(24, OVERFLOW, 3);

    assert_eq!(
        outcome.text(),
        Some("This is a text that exceeds the height of its container an...")
    );
    assert!(OVERFLOW.starts_with(kept_text(&outcome)));

    let lines = CellSurface::with_text(24, outcome.text().unwrap()).rendered_lines();
    assert_eq!(
        lines,
        vec!["This is a text that", "exceeds the height of", "its container an..."]
    );
}

#[test]
fn long_word_on_a_single_line_is_cut_inside() {
    let outcome = clamp(20, "Pneumonoultramicroscopicsilicovolcanoconiosis is a long word", 1);
    assert_eq!(outcome.text(), Some("Pneumonoultramic..."));
}

#[test]
fn lone_word_wider_than_the_container_is_cut_inside() {
    let word = "Pneumonoultramicroscopicsilicovolcanoconiosis";
    let outcome = clamp(20, word, 1);

    assert_eq!(
        outcome,
        ClampOutcome::Clamped {
            text: "Pneumonoultramic...".to_owned(),
            realized_lines: 1
        }
    );
    assert!(word.starts_with(kept_text(&outcome)));
    assert_eq!(
        CellSurface::with_text(20, outcome.text().unwrap()).rendered_lines(),
        vec!["Pneumonoultramic..."]
    );
}

#[test]
fn one_letter_words_at_the_cut_do_not_add_a_line() {
    let cases = [
        ("xx abcd e fgh", 9, 1, "xx ab..."),
        ("a bb c dd e ff g hh i jj k", 11, 1, "a b..."),
        ("xx abcd e fgh ij k l m", 10, 2, "xx abcd e fgh i..."),
    ];

    for (text, columns, allowed_lines, expected) in cases {
        let outcome = clamp(columns, text, allowed_lines);
        assert_eq!(outcome.text(), Some(expected));

        let lines = CellSurface::with_text(columns, expected).rendered_lines();
        assert!(
            lines.len() <= allowed_lines,
            "{text:?} at {columns} columns: {lines:?}"
        );
    }
}

#[test]
fn resize_switches_between_verbatim_and_clamped() {
    let config = ClampConfig::new(3).unwrap();
    let mut binding =
        ClampBinding::new(CellSurface::with_text(120, OVERFLOW), config, LineClamp::new());

    assert_eq!(binding.mount().unwrap().text(), Some(OVERFLOW));

    binding.element_mut().resize(24);
    let clamped = binding.on_resize().unwrap();
    assert!(clamped.is_clamped());
    assert_eq!(binding.element().text_content(), clamped.text().unwrap());
}

#[test]
fn passes_are_idempotent_on_a_stable_layout() {
    for text in TEXTS {
        for columns in [16, 24, 37, 52] {
            let mut surface = CellSurface::new(columns);
            let config = ClampConfig::new(2).unwrap();
            let engine = LineClamp::new();

            let first = engine.run(&mut surface, &config, text).unwrap();
            let content = surface.text_content();
            let second = engine.run(&mut surface, &config, text).unwrap();

            assert_eq!(first, second);
            assert_eq!(content, surface.text_content());
        }
    }
}

#[test]
fn clamped_text_is_a_prefix_ending_in_ellipsis() {
    for text in TEXTS {
        let source = normalized(text);
        for columns in 12..=80 {
            for allowed_lines in 1..=5 {
                let outcome = clamp(columns, text, allowed_lines);
                if !outcome.is_clamped() {
                    continue;
                }

                assert!(outcome.text().unwrap().ends_with(ELLIPSIS));
                assert!(
                    source.starts_with(kept_text(&outcome)),
                    "{columns} columns, {allowed_lines} lines: {outcome:?}"
                );
            }
        }
    }
}

#[test]
fn clamped_text_fits_the_container() {
    for text in TEXTS {
        for columns in 12..=80u16 {
            for allowed_lines in 1..=5 {
                let outcome = clamp(columns, text, allowed_lines);
                if !outcome.is_clamped() {
                    continue;
                }

                let lines =
                    CellSurface::with_text(columns, outcome.text().unwrap()).rendered_lines();
                assert!(
                    lines.len() <= allowed_lines,
                    "{columns} columns, {allowed_lines} lines: {lines:?}"
                );
                assert!(lines.iter().all(|line| string_width(line) <= columns as usize));
            }
        }
    }
}

#[test]
fn more_lines_never_keep_less_text() {
    for text in TEXTS {
        for columns in 12..=80 {
            let mut previous = 0;
            for allowed_lines in 1..=5 {
                let kept = kept_text(&clamp(columns, text, allowed_lines)).len();
                assert!(
                    kept >= previous,
                    "{columns} columns: {allowed_lines} lines kept {kept} < {previous}"
                );
                previous = kept;
            }
        }
    }
}

#[test]
fn wide_container_never_clamps() {
    for text in TEXTS {
        assert_eq!(clamp(400, text, 1).text(), Some(text));
    }
}
