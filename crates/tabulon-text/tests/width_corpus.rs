//! Width corpus tests.
//!
//! Covers the categories the layout engine depends on: ASCII, CJK unified
//! ideographs, fullwidth forms, halfwidth katakana, and combining marks.
//! Any divergence from true display width shows up as misaligned borders,
//! so these are pinned exactly.

use tabulon_text::{display_width, wrap_cell};

struct WidthCase {
    input: &'static str,
    description: &'static str,
    expected: usize,
}

const fn case(input: &'static str, description: &'static str, expected: usize) -> WidthCase {
    WidthCase {
        input,
        description,
        expected,
    }
}

const CASES: &[WidthCase] = &[
    // ASCII: width equals byte length.
    case("a", "single letter", 1),
    case("hello", "word", 5),
    case("Hello, World!", "sentence", 13),
    case("    ", "spaces", 4),
    case("{}[]()<>", "brackets", 8),
    // CJK unified ideographs: two cells each.
    case("朝", "single ideograph", 2),
    case("時間帯", "three ideographs", 6),
    case("こんばんわ", "hiragana greeting", 10),
    case("おはようございます", "nine hiragana", 18),
    // Fullwidth forms.
    case("ＡＢＣ", "fullwidth latin", 6),
    case("１２３", "fullwidth digits", 6),
    // Halfwidth katakana: one cell each.
    case("ｱｲｳ", "halfwidth katakana", 3),
    // Combining marks: zero cells.
    case("e\u{0301}", "combining acute", 1),
    case("a\u{0300}b\u{0301}", "two combined pairs", 2),
    // Mixed.
    case("hi你好", "ascii plus cjk", 6),
];

#[test]
fn corpus_widths_are_exact() {
    for case in CASES {
        assert_eq!(
            display_width(case.input),
            case.expected,
            "width mismatch for {} ({:?})",
            case.description,
            case.input
        );
    }
}

#[test]
fn wrapped_corpus_lines_stay_bounded() {
    for case in CASES {
        for cap in [2usize, 4, 7] {
            for line in wrap_cell(case.input, cap, ' ', "-") {
                assert!(
                    display_width(&line) <= cap,
                    "line {:?} from {} exceeds cap {}",
                    line,
                    case.description,
                    cap
                );
            }
        }
    }
}
