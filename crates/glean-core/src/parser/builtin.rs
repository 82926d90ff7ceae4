//! Built-in grammars and their language profiles.
//!
//! The reference classification table was written against C-family tag
//! names. Each profile adds the tags another grammar uses for the same
//! concepts, so e.g. a Python `call` is counted like a C `call_expression`.

use crate::concepts::TableExtension;

use super::grammar::Grammar;

/// Every grammar the registry ships with.
pub fn builtin_grammars() -> Vec<Grammar> {
    vec![
        c(),
        cpp(),
        c_sharp(),
        go(),
        java(),
        javascript(),
        python(),
        rust(),
        typescript(),
        tsx(),
    ]
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

pub fn c() -> Grammar {
    Grammar::new(tree_sitter_c::LANGUAGE.into(), "c", "C", &["c", "h"])
}

pub fn cpp() -> Grammar {
    Grammar::new(
        tree_sitter_cpp::LANGUAGE.into(),
        "cpp",
        "C++",
        &["cpp", "cc", "cxx", "hpp", "hh", "hxx"],
    )
    .with_aliases(&["c++"])
    .with_profile(TableExtension {
        control_structures: tags(&["for_range_loop"]),
        literals: tags(&["raw_string_literal"]),
        ..Default::default()
    })
}

pub fn c_sharp() -> Grammar {
    Grammar::new(tree_sitter_c_sharp::LANGUAGE.into(), "c_sharp", "C#", &["cs"])
        .with_aliases(&["csharp", "c#", "cs"])
        .with_profile(TableExtension {
            control_structures: tags(&["foreach_statement"]),
            function_calls: tags(&["invocation_expression"]),
            literals: tags(&[
                "integer_literal",
                "real_literal",
                "character_literal",
                "verbatim_string_literal",
            ]),
            keywords: tags(&["foreach"]),
            ..Default::default()
        })
}

pub fn go() -> Grammar {
    Grammar::new(tree_sitter_go::LANGUAGE.into(), "go", "Go", &["go"])
        .with_aliases(&["golang"])
        .with_profile(TableExtension {
            control_structures: tags(&["expression_switch_statement", "type_switch_statement"]),
            literals: tags(&[
                "int_literal",
                "float_literal",
                "imaginary_literal",
                "rune_literal",
                "interpreted_string_literal",
                "raw_string_literal",
            ]),
            ..Default::default()
        })
}

pub fn java() -> Grammar {
    Grammar::new(tree_sitter_java::LANGUAGE.into(), "java", "Java", &["java"]).with_profile(
        TableExtension {
            control_structures: tags(&["enhanced_for_statement", "switch_expression"]),
            function_calls: tags(&["method_invocation"]),
            // `list.add(x)` has both `list` and `add` as identifier children.
            callee_fields: tags(&["name"]),
            literals: tags(&[
                "decimal_integer_literal",
                "hex_integer_literal",
                "decimal_floating_point_literal",
                "character_literal",
            ]),
            ..Default::default()
        },
    )
}

fn ecmascript_profile() -> TableExtension {
    TableExtension {
        control_structures: tags(&["for_in_statement"]),
        literals: tags(&["number", "string", "template_string"]),
        ..Default::default()
    }
}

pub fn javascript() -> Grammar {
    Grammar::new(
        tree_sitter_javascript::LANGUAGE.into(),
        "javascript",
        "JavaScript",
        &["js", "jsx", "mjs", "cjs"],
    )
    .with_aliases(&["js"])
    .with_profile(ecmascript_profile())
}

pub fn typescript() -> Grammar {
    Grammar::new(
        tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        "typescript",
        "TypeScript",
        &["ts", "mts", "cts"],
    )
    .with_aliases(&["ts"])
    .with_profile(ecmascript_profile())
}

pub fn tsx() -> Grammar {
    Grammar::new(
        tree_sitter_typescript::LANGUAGE_TSX.into(),
        "tsx",
        "TSX",
        &["tsx"],
    )
    .with_profile(ecmascript_profile())
}

pub fn python() -> Grammar {
    Grammar::new(
        tree_sitter_python::LANGUAGE.into(),
        "python",
        "Python",
        &["py", "pyi"],
    )
    .with_aliases(&["py"])
    .with_profile(TableExtension {
        function_calls: tags(&["call"]),
        literals: tags(&["integer", "float", "string"]),
        keywords: tags(&["elif"]),
        ..Default::default()
    })
}

pub fn rust() -> Grammar {
    Grammar::new(tree_sitter_rust::LANGUAGE.into(), "rust", "Rust", &["rs"])
        .with_aliases(&["rs"])
        .with_profile(TableExtension {
            control_structures: tags(&[
                "if_expression",
                "for_expression",
                "while_expression",
                "loop_expression",
                "match_expression",
            ]),
            literals: tags(&["integer_literal", "float_literal", "raw_string_literal"]),
            keywords: tags(&["loop", "match"]),
            ..Default::default()
        })
}
