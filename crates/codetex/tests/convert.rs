use std::collections::HashSet;

use codetex::{convert, ColorSyntax, ConvertOptions, LatexService, ENVIRONMENT_DEFINITION};
use pretty_assertions::assert_eq;
use regex::Regex;

const BEGIN: &str = "\\begin{code}\n";
const END: &str = "\n\\end{code}";

/// Split output into (definecolor lines, body).
fn split(latex: &str) -> (Vec<&str>, &str) {
    let inner = latex
        .strip_prefix(ENVIRONMENT_DEFINITION)
        .and_then(|rest| rest.strip_prefix(BEGIN))
        .and_then(|rest| rest.strip_suffix(END))
        .expect("fixed envelope");

    let mut defs = Vec::new();
    let mut rest = inner;
    while rest.starts_with("\\definecolor{") {
        let end = rest.find('\n').expect("definition line");
        defs.push(&rest[..end]);
        rest = &rest[end + 1..];
    }
    (defs, rest)
}

fn assert_colors_consistent(latex: &str) {
    let (defs, body) = split(latex);
    let def_re = Regex::new(r"^\\definecolor\{([A-Za-z0-9]+)\}\{RGB\}\{\d+,\d+,\d+\}$").unwrap();
    let use_re = Regex::new(r"\\textcolor\{([A-Za-z0-9]+)\}").unwrap();

    let mut defined = HashSet::new();
    for def in &defs {
        let caps = def_re.captures(def).expect("well-formed definecolor");
        assert!(defined.insert(caps[1].to_string()), "defined twice: {def}");
    }

    let used: HashSet<String> = use_re
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .collect();
    assert_eq!(used, defined);
}

#[test]
fn empty_input_has_empty_body() {
    let latex = convert("");
    assert_eq!(latex, format!("{ENVIRONMENT_DEFINITION}{BEGIN}{END}"));
}

#[test]
fn envelope_is_fixed() {
    let latex = convert("x");
    assert!(latex.starts_with(
        "\\newsavebox\\spacewd\n\\savebox\\spacewd{\\texttt{ }}\n\\newenvironment{code}"
    ));
    assert!(latex.contains(
        "\\phantom{\\textcolor{white}{\\fontfamily{lmtt}\\selectfont\\large\\smash{\\char32}}}}}%\n}\n\\begin{code}\n"
    ));
    assert!(latex.ends_with("x\n\\end{code}"));
}

#[test]
fn single_colored_div() {
    let latex = convert(r#"<div style="color: rgb(255,0,0)">Hi</div>"#);
    let (defs, body) = split(&latex);
    assert_eq!(defs, vec!["\\definecolor{Red}{RGB}{255,0,0}"]);
    assert_eq!(body, "\\textcolor{Red}{Hi}");
}

#[test]
fn line_break_between_spans() {
    let latex = convert("<span>A</span><br><span>B</span>");
    let (defs, body) = split(&latex);
    assert!(defs.is_empty());
    assert_eq!(body, "A\\\\\nB");
}

#[test]
fn special_characters_escaped_once() {
    let latex = convert("<span>a & b % c_d</span>");
    let (_, body) = split(&latex);
    assert_eq!(body, "a \\& b \\% c\\_d");
}

#[test]
fn backslash_brace_escaped_in_order() {
    let latex = convert("<span>\\{</span>");
    let (_, body) = split(&latex);
    assert_eq!(body, "\\textbackslash\\{");
}

#[test]
fn hsl_color_is_ignored() {
    let html = concat!(
        r#"<div style="color: rgb(10,20,30)">a"#,
        r#"<span style="color: hsl(10,50%,50%)">b</span></div>"#,
        r#"<span style="color: hsl(10,50%,50%)">c</span>"#,
    );
    let latex = convert(html);
    let (defs, body) = split(&latex);

    assert_eq!(defs.len(), 1);
    assert!(defs[0].ends_with("{RGB}{10,20,30}"));
    let name = &defs[0]["\\definecolor{".len()..defs[0].find('}').unwrap()];
    assert_eq!(
        body,
        format!("\\textcolor{{{name}}}{{a}}\\textcolor{{{name}}}{{b}}c")
    );
}

#[test]
fn uncolored_input_defines_nothing() {
    let latex = convert("<div><p>one</p><p style=\"font-weight: bold\">two</p></div>");
    assert!(!latex.contains("\\definecolor"));
    let (_, body) = split(&latex);
    assert!(!body.contains("\\textcolor"));
    assert_eq!(body, "one\\\\\ntwo");
}

#[test]
fn repeated_color_defined_once() {
    let html = concat!(
        r#"<div><span style="color: rgb(86, 156, 214)">let</span> x "#,
        r#"<span style="color: rgb(212, 212, 212)">=</span> "#,
        r#"<span style="color: rgb(86, 156, 214)">true</span>;</div>"#,
        r#"<div><span style="color: rgb(212, 212, 212)">x</span></div>"#,
    );
    let latex = convert(html);
    let (defs, _) = split(&latex);

    assert_eq!(defs.len(), 2);
    assert!(defs[0].ends_with("{RGB}{86,156,214}"));
    assert!(defs[1].ends_with("{RGB}{212,212,212}"));
    assert_colors_consistent(&latex);
}

#[test]
fn colliding_names_stay_distinct() {
    let html = concat!(
        r#"<span style="color: rgb(255, 0, 0)">a</span>"#,
        r#"<span style="color: rgb(254, 2, 1)">b</span>"#,
    );
    let latex = convert(html);
    let (defs, body) = split(&latex);

    assert_eq!(
        defs,
        vec![
            "\\definecolor{Red}{RGB}{255,0,0}",
            "\\definecolor{Red2}{RGB}{254,2,1}"
        ]
    );
    assert_eq!(body, "\\textcolor{Red}{a}\\textcolor{Red2}{b}");
}

#[test]
fn colors_always_defined_before_use() {
    let samples = [
        "",
        "plain",
        r#"<p style="color: rgb(1, 2, 3)"><span style="color: rgb(200, 100, 0)">x</span>y</p>"#,
        r#"<div style="color: rgb(0,0,0)"><div style="color: red">a</div><br>b</div>"#,
        r#"<span style="color: rgb(300, 0, 0)">clamped</span><span style="color: rgb(255, 0, 0)">same</span>"#,
    ];

    for html in samples {
        assert_colors_consistent(&convert(html));
    }
}

#[test]
fn whitespace_preserved() {
    let latex = convert("<div>    if x:</div><div>        pass</div>");
    let (_, body) = split(&latex);
    assert_eq!(body, "    if x:\\\\\n        pass");
}

#[test]
fn vscode_clipboard_html() {
    let html = concat!(
        "<meta charset='utf-8'>",
        r#"<div style="color: #d4d4d4;background-color: #1e1e1e;font-family: Consolas;white-space: pre;">"#,
        r#"<div><span style="color: #569cd6;">fn</span><span style="color: #d4d4d4;"> </span>"#,
        r#"<span style="color: #dcdcaa;">main</span><span style="color: #d4d4d4;">() {}</span></div>"#,
        "</div>",
    );

    // Hex colors are not recognized by default.
    let latex = convert(html);
    let (defs, body) = split(&latex);
    assert!(defs.is_empty());
    assert_eq!(body, "fn main() \\{\\}");

    let options = ConvertOptions {
        color_syntax: ColorSyntax::Cssom,
        ..Default::default()
    };
    let latex = LatexService::with_options(options).convert_html(html);
    let (defs, body) = split(&latex);
    assert_eq!(defs.len(), 3);
    assert!(defs[0].ends_with("{RGB}{86,156,214}"));
    assert!(defs[1].ends_with("{RGB}{212,212,212}"));
    assert!(defs[2].ends_with("{RGB}{220,220,170}"));
    assert!(body.contains("{fn}"));
    assert!(body.contains("{() \\{\\}}"));
    assert_colors_consistent(&latex);
}

#[test]
fn entities_decoded_then_escaped() {
    let latex = convert("<span>a &amp;&amp; b &#36;c</span>");
    let (_, body) = split(&latex);
    assert_eq!(body, "a \\&\\& b \\$c");
}

#[test]
fn repeated_calls_are_independent() {
    let html = r#"<span style="color: rgb(254, 2, 1)">x</span>"#;
    let first = convert(html);
    let second = convert(html);
    assert_eq!(first, second);
    assert!(first.contains("\\textcolor{Red}{x}"));
}

#[test]
fn deep_nesting_on_small_stack() {
    let handle = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(|| convert(&format!("{}x", "<span>".repeat(100_000))))
        .expect("spawn converter thread");

    let latex = handle.join().expect("conversion finished");
    let (defs, body) = split(&latex);
    assert!(defs.is_empty());
    assert_eq!(body, "x");
}
