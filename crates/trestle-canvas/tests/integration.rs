use trestle_canvas::{visual_index, visual_width, TextCanvas};

#[test]
fn measures_plain_and_colored_text_alike() {
    assert_eq!(visual_width("diff"), 4);
    assert_eq!(visual_width("\u{1b}[31;1;4mdiff\u{1b}[0m"), 4);
}

#[test]
fn measures_multibyte_code_points_as_single_columns() {
    for text in ["1", "£", "€", "北", "😃"] {
        assert_eq!(visual_width(text), 1, "width of {text:?}");
    }
}

#[test]
fn index_and_width_agree_on_prefixes() {
    let text = "a£b€c";
    for column in 0..=visual_width(text) {
        let index = visual_index(text, column);
        assert_eq!(visual_width(&text[..index]), column);
    }
}

#[test]
fn assembles_a_column_aligned_block() {
    let mut canvas = TextCanvas::new(7, 3);
    canvas.write(0, 0, "name");
    canvas.write(5, 0, "n");
    canvas.write(0, 1, "ab");
    canvas.write(5, 1, "1");
    canvas.write(0, 2, "cde");
    canvas.write(5, 2, "22");
    assert_eq!(
        canvas.into_string(),
        ["name n ", "ab   1 ", "cde  22"].join("\n")
    );
}

#[test]
fn colored_content_aligns_with_plain_content() {
    let mut canvas = TextCanvas::new(5, 2);
    canvas.write(1, 0, "\u{1b}[32mok\u{1b}[0m");
    canvas.write(1, 1, "no");
    let rendered = canvas.into_string();
    let lines: Vec<&str> = rendered.split('\n').collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(visual_width(lines[0]), 5);
    assert_eq!(visual_width(lines[1]), 5);
    assert!(lines[0].contains("\u{1b}[32mok\u{1b}[0m"));
}

#[test]
fn clip_confines_writes_to_its_rectangle() {
    let mut canvas = TextCanvas::new(6, 3);
    let mut clip = canvas.clip(2, 1, 4, 2);
    clip.write(0, 0, "wide");
    clip.write(1, 1, "x");
    assert_eq!(
        canvas.into_string(),
        ["      ", "  wide", "   x  "].join("\n")
    );
}
