#[cfg(test)]
use super::*;

#[test]
fn test_parse_pinyin() {
    assert_eq!(parse_pinyin("[ni3 hao3] /hello/"), Ok((" /hello/", "ni3 hao3")));
}

#[test]
fn test_parse_pinyin_unterminated() {
    assert!(parse_pinyin("[ni3 hao3 /hello/").is_err());
}

#[test]
fn test_parse_definitions_single() {
    assert_eq!(parse_definitions("/China/"), Ok(("", vec!["China"])));
}

#[test]
fn test_parse_definitions_multiple() {
    assert_eq!(
        parse_definitions("/hello/hi/how are you?/"),
        Ok(("", vec!["hello", "hi", "how are you?"]))
    );
}

#[test]
fn test_parse_line_simple() {
    let expected = Ok(CedictLine {
        trad: "你好".to_owned(),
        simp: "你好".to_owned(),
        pinyin: "ni3 hao3".to_owned(),
        definitions: vec!["hello".to_owned(), "hi".to_owned()],
    });
    assert_eq!(parse_line("你好 你好 [ni3 hao3] /hello/hi/"), expected);
}

#[test]
fn test_parse_line_trad_simp() {
    let parsed = parse_line("綠色 绿色 [lu:4 se4] /green/").unwrap();
    assert_eq!(parsed.trad, "綠色");
    assert_eq!(parsed.simp, "绿色");
    assert_eq!(parsed.pinyin, "lu:4 se4");
    assert_eq!(parsed.definitions, vec!["green".to_owned()]);
}

#[test]
fn test_parse_line_definition_with_brackets() {
    let parsed = parse_line("中國 中国 [Zhong1 guo2] /China/Middle Kingdom [archaic]/").unwrap();
    assert_eq!(
        parsed.definitions,
        vec!["China".to_owned(), "Middle Kingdom [archaic]".to_owned()]
    );
}

#[test]
fn test_parse_line_missing_definition() {
    assert!(parse_line("你好 你好 [ni3 hao3]").is_err());
}

#[test]
fn test_parse_line_missing_pinyin() {
    assert!(parse_line("你好 你好 /hello/").is_err());
}

#[test]
fn test_parse_line_trailing_text() {
    assert!(parse_line("你好 你好 [ni3 hao3] /hello/ trailing").is_err());
}

#[test]
fn test_to_entry() {
    let entry = parse_line("說話 说话 [shuo1 hua4] /to speak/to say/")
        .unwrap()
        .to_entry();
    assert_eq!(
        entry,
        DictEntry::new("說話／说话", "shuo1 hua4", "to speak; to say")
    );
}

#[test]
fn test_reader_skips_comments_and_blank_lines() {
    let lines = vec![
        "# CC-CEDICT".to_owned(),
        "#! version=1".to_owned(),
        "".to_owned(),
        "你好 你好 [ni3 hao3] /hello/".to_owned(),
        "broken line".to_owned(),
    ];
    let parsed: Vec<ParsedLine> = CedictReader::new(lines.into_iter()).collect();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].line_num, 4);
    assert!(parsed[0].line.is_ok());
    assert_eq!(parsed[1].line_num, 5);
    assert!(parsed[1].line.is_err());
}

#[test]
fn test_read_cedict_collects_errors() {
    let input = "# header\r\n好 好 [hao3] /good/\r\nnot an entry\r\n人 人 [ren2] /person/\r\n";
    let report = read_cedict(input.as_bytes(), None).unwrap();
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.entries[1].pinyin, "ren2");
    assert_eq!(report.errors.len(), 1);
    assert!(matches!(report.errors[0], CedictError::Parse { line_num: 3, .. }));
}

#[test]
fn test_read_cedict_limit() {
    let input = "好 好 [hao3] /good/\n人 人 [ren2] /person/\n大 大 [da4] /big/\n";
    let report = read_cedict(input.as_bytes(), Some(2)).unwrap();
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.entries[0].simp, "好");
}

#[test]
fn test_read_cedict_invalid_utf8() {
    let input: &[u8] = b"\xff\xfe [x] /y/\n";
    assert!(matches!(
        read_cedict(input, None),
        Err(CedictError::Io { .. })
    ));
}
