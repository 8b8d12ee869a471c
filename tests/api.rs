use rust_textseg::{
    Config, Error, Mode, NO_CHARACTER, Segmenter, WidthCategory, WordKind, break_positions, eaw_width, explain,
    segment, table, text_width, width_category,
};

#[test]
fn width_cases() {
    // (text, no locale, "en", "ja", "zh", "ko")
    let cases = [
        ("A", 1, 1, 1, 1, 1),
        ("あ", 2, 2, 2, 2, 2),
        ("ｱ", 1, 1, 1, 1, 1),
        ("Ａ", 2, 2, 2, 2, 2),
        ("§", 1, 1, 2, 2, 2),
        ("±", 1, 1, 2, 2, 2),
        ("×", 1, 1, 2, 2, 2),
        ("Hello", 1, 1, 1, 1, 1),
        ("あいう", 2, 2, 2, 2, 2),
    ];
    for (text, none, en, ja, zh, ko) in cases {
        assert_eq!(eaw_width(text, None), none, "{:?} without locale", text);
        assert_eq!(eaw_width(text, Some("en")), en, "{:?} in en", text);
        assert_eq!(eaw_width(text, Some("ja")), ja, "{:?} in ja", text);
        assert_eq!(eaw_width(text, Some("zh")), zh, "{:?} in zh", text);
        assert_eq!(eaw_width(text, Some("ko")), ko, "{:?} in ko", text);
    }
    for locale in [None, Some("default"), Some("ja"), Some("en")] {
        assert_eq!(eaw_width("", locale), NO_CHARACTER);
    }
}

#[test]
fn width_categories() {
    let cases = [
        ('A', WidthCategory::Narrow),
        ('あ', WidthCategory::Wide),
        ('ｱ', WidthCategory::Halfwidth),
        ('Ａ', WidthCategory::Fullwidth),
        ('§', WidthCategory::Ambiguous),
        ('\u{0301}', WidthCategory::Zero),
        ('\u{00AD}', WidthCategory::Ambiguous),
        ('\u{200B}', WidthCategory::Zero),
        ('\u{1160}', WidthCategory::Zero),
        // unassigned in a default-Wide block
        ('\u{3FFFD}', WidthCategory::Wide),
        ('\u{E0080}', WidthCategory::Neutral),
    ];
    for (ch, expected) in cases {
        assert_eq!(width_category(ch), expected, "category of U+{:04X}", ch as u32);
    }
}

#[test]
fn lookups_are_total() {
    let t = table();
    for cp in [0xD800, 0xDFFF, 0x11_0000, u32::MAX] {
        assert_eq!(t.width_category(cp), WidthCategory::Neutral);
        assert!(!t.extended_pictographic(cp));
    }
}

#[test]
fn original_segmentation_texts() {
    let cases: Vec<(&str, Option<&str>, Vec<&str>)> = vec![
        ("Hello World", None, vec!["H", "e", "l", "l", "o", " ", "W", "o", "r", "l", "d"]),
        ("Hello World", Some("word"), vec!["Hello", " ", "World"]),
        ("Hello World", Some("sentence"), vec!["Hello World"]),
        (
            "こんにちは👋世界",
            Some("grapheme"),
            vec!["こ", "ん", "に", "ち", "は", "👋", "世", "界"],
        ),
        ("🇺🇸🏳️‍🌈👨‍👩‍👧‍👦", Some("grapheme"), vec!["🇺🇸", "🏳️‍🌈", "👨‍👩‍👧‍👦"]),
    ];
    for (text, mode, expected) in cases {
        let seq = segment(text, mode, Some("ja")).unwrap();
        assert_eq!(seq.to_vec(), expected, "{:?} in {:?} mode", text, mode);
        assert_eq!(seq.len(), break_positions(text, seq_mode(mode)).segment_count());
    }
}

fn seq_mode(mode: Option<&str>) -> Mode {
    mode.map_or(Mode::Grapheme, |m| m.parse().unwrap())
}

#[test]
fn construction_paths_agree() {
    let texts = ["こんにちは👋世界", "Hello World", "🇺🇸🏳️‍🌈👨‍👩‍👧‍👦", "Dr. Who? Yes."];
    for text in texts {
        for mode in [None, Some("grapheme"), Some("word"), Some("sentence")] {
            let object = Segmenter::new(mode, Some("ja")).unwrap().segment(text);
            let function = segment(text, mode, Some("ja")).unwrap();
            assert_eq!(object, function);
            assert_eq!(object.to_vec(), function.to_vec());
        }
    }
}

#[test]
fn invalid_mode_is_rejected() {
    let err = Segmenter::new(Some("invalid_mode"), None).unwrap_err();
    assert!(matches!(err, Error::InvalidMode(_)));
    assert_eq!(err.to_string(), "Unsupported mode: invalid_mode");
    assert!(segment("", Some("invalid_mode"), None).is_err());
}

#[test]
fn empty_text() {
    for mode in ["grapheme", "word", "sentence"] {
        let seq = segment("", Some(mode), None).unwrap();
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
        assert_eq!(seq.break_set().offsets(), &[0]);
        assert!(matches!(seq.segment_at(0), Err(Error::IndexOutOfRange { index: 0, len: 0 })));
    }
}

#[test]
fn sequences_are_restartable_and_indexable() {
    let seq = segment("The quick (\"brown\") fox can't jump 32.3 feet, right?", Some("word"), None).unwrap();
    let first: Vec<&str> = seq.iter().collect();
    let second: Vec<&str> = (&seq).into_iter().collect();
    assert_eq!(first, second);
    for (i, s) in seq.iter().enumerate() {
        assert_eq!(seq.segment_at(i).unwrap(), s);
    }
    assert_eq!(seq.iter().collect::<String>(), seq.text());

    let words: Vec<&str> = seq
        .iter()
        .enumerate()
        .filter(|&(i, _)| seq.is_word_like(i).unwrap())
        .map(|(_, s)| s)
        .collect();
    assert_eq!(words, vec!["The", "quick", "brown", "fox", "can't", "jump", "32.3", "feet", "right"]);

    let kinds: Vec<WordKind> = (0..seq.len()).map(|i| seq.word_kind(i).unwrap()).collect();
    assert!(kinds.contains(&WordKind::Number));
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn shared_across_threads() {
    assert_send_sync::<rust_textseg::SegmentSequence>();
    assert_send_sync::<Segmenter>();
    assert_send_sync::<rust_textseg::PropertyTable>();

    let text = "Hello World. こんにちは👋世界! 🇺🇸🏳️‍🌈";
    let shared = segment(text, Some("word"), None).unwrap();
    let expected = shared.to_vec();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let seq = shared.clone();
            let expected = expected.clone();
            std::thread::spawn(move || {
                // first lookups race the table's one-time decode
                assert_eq!(eaw_width("§", Some("ja")), 2);
                assert_eq!(eaw_width("ｱ", None), 1);
                let mode = ["grapheme", "word", "sentence"][i % 3];
                let own = segment(text, Some(mode), None).unwrap();
                assert_eq!(own.iter().collect::<String>(), text);

                assert_eq!(seq.to_vec(), expected);
                for (j, s) in seq.iter().enumerate() {
                    assert_eq!(seq.segment_at(j).unwrap(), s);
                }
                seq.len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), shared.len());
    }
    assert!(std::ptr::eq(table(), table()));
}

#[test]
fn explain_reports_rules() {
    let trace = explain("\u{1F1FA}\u{1F1F8}\u{1F1EC}", Mode::Grapheme);
    let rules: Vec<&str> = trace.iter().map(|b| b.rule).collect();
    assert_eq!(rules, vec!["sot", "GB12", "GB999", "eot"]);
}

#[test]
fn width_of_whole_strings() {
    // the demo's per-character sum
    let demo = "こんにちは、世界！Hello";
    let summed: i32 = demo
        .chars()
        .map(|c| eaw_width(c.encode_utf8(&mut [0; 4]), None))
        .sum();
    assert_eq!(text_width(demo, None), summed as usize);
    assert_eq!(text_width(demo, None), 23);
}

#[test]
fn config_drives_segmenter() {
    let config = Config::from_toml_str("mode = \"word\"\nlocale = \"ko\"").unwrap();
    let segmenter = Segmenter::from_config(&config);
    assert_eq!(segmenter.mode(), Mode::Word);
    assert_eq!(segmenter.locale(), Some("ko"));
    assert_eq!(segmenter.segment("Hello World").len(), 3);
    assert_eq!(config.width("±"), 2);

    let path = std::env::temp_dir().join(format!("rust-textseg-config-{}.toml", std::process::id()));
    std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();
    let loaded = Config::load_toml(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, config);

    assert!(matches!(Config::load_toml("/nonexistent/textseg.toml"), Err(Error::Io(_))));
}
