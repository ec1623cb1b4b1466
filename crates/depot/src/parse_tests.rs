use super::*;

#[test]
fn parse_files_output_extracts_paths() {
    let out = "//depot/a.txt#1 - edit change 5 (text+w)\n//depot/b.txt#2 - add change 6 (text)";
    assert_eq!(
        parse_files_output(out),
        vec!["//depot/a.txt".to_owned(), "//depot/b.txt".to_owned()]
    );
}

#[test]
fn parse_files_output_skips_noise_and_blank_lines() {
    let out = "\n\
        //depot/main/src/lib.rs#12 - integrate change 900 (text)\n\
        //depot/... - no such file(s).\n\
        \n\
        random chatter\n\
        //depot/docs/My Notes.md#3 - delete change 77 (utf8)\r\n";

    assert_eq!(
        parse_files_output(out),
        vec![
            "//depot/main/src/lib.rs".to_owned(),
            "//depot/docs/My Notes.md".to_owned(),
        ]
    );
}

#[test]
fn parse_files_output_takes_shortest_path_before_revision() {
    // A '#' inside the name only counts when followed by a revision and " - ".
    let out = "//depot/odd#name.txt#4 - edit change 1 (text)";
    assert_eq!(parse_files_output(out), vec!["//depot/odd#name.txt".to_owned()]);
}

#[test]
fn parse_files_output_of_empty_string_is_empty() {
    assert!(parse_files_output("").is_empty());
}

#[test]
fn parse_head_type_cases() {
    let cases: &[(&str, Option<&str>)] = &[
        ("... headType text+w", Some("text+w")),
        ("... headType text", Some("text")),
        ("... headType binary+lw\n", Some("binary+lw")),
        ("... depotFile //depot/a\n... headType ktext+w\n", Some("ktext+w")),
        ("... headType text extra words", Some("text extra words")),
        ("", None),
        ("//depot/a.txt - no such file(s).", None),
    ];

    for (input, expected) in cases {
        let got = parse_head_type(input).expect("parse_head_type");
        assert_eq!(
            got.as_deref(),
            *expected,
            "input {:?} should yield {:?}",
            input,
            expected
        );
    }
}

#[test]
fn parse_head_type_without_value_is_an_error() {
    let err = parse_head_type("... headType").expect_err("missing value must fail");
    assert_eq!(
        err,
        HeadTypeError {
            line: "... headType".to_owned()
        }
    );
}
