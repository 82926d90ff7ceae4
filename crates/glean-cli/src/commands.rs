//! Command implementations that do not need the HTTP server.

use std::io::Read;
use std::path::Path;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;

use glean_core::parser::GrammarRegistry;
use glean_core::Analyzer;

/// Read the snippet from a file, or from stdin for `None` and `-`.
pub fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("Failed to read source from stdin")?;
            Ok(buffer)
        }
    }
}

/// Pick the language: explicit flag first, then the file extension.
pub fn resolve_language(
    registry: &GrammarRegistry,
    language: Option<&str>,
    file: Option<&Path>,
) -> Result<String> {
    if let Some(language) = language {
        return Ok(language.to_string());
    }

    file.and_then(|p| p.to_str())
        .and_then(|p| registry.grammar_for_path(p))
        .map(|g| g.name().to_string())
        .ok_or_else(|| eyre!("Cannot infer the language; pass --language"))
}

/// `glean analyze`: print the extraction result as JSON.
pub fn analyze(
    analyzer: &Analyzer,
    file: Option<&Path>,
    language: Option<&str>,
    targets: &[String],
    pretty: bool,
) -> Result<()> {
    let language = resolve_language(analyzer.registry(), language, file)?;
    let code = read_source(file)?;

    let result = analyzer.analyze(&code, &language, Some(targets))?;

    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);
    Ok(())
}

/// `glean languages`: list identifiers with their names and extensions.
pub fn languages(analyzer: &Analyzer) {
    let registry = analyzer.registry();
    for name in analyzer.languages() {
        if let Some(grammar) = registry.grammar(name) {
            println!(
                "{:<12} {:<12} {}",
                name,
                grammar.display_name(),
                grammar.extensions().join(", ")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_language_wins() {
        let registry = GrammarRegistry::new();
        let language =
            resolve_language(&registry, Some("python"), Some(Path::new("main.c"))).unwrap();
        assert_eq!(language, "python");
    }

    #[test]
    fn test_language_from_extension() {
        let registry = GrammarRegistry::new();
        let language = resolve_language(&registry, None, Some(Path::new("src/app.ts"))).unwrap();
        assert_eq!(language, "typescript");
    }

    #[test]
    fn test_language_required_for_stdin() {
        let registry = GrammarRegistry::new();
        assert!(resolve_language(&registry, None, None).is_err());
        assert!(resolve_language(&registry, None, Some(Path::new("notes.txt"))).is_err());
    }

    #[test]
    fn test_read_source_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippet.c");
        std::fs::write(&path, "int x;").unwrap();

        assert_eq!(read_source(Some(&path)).unwrap(), "int x;");
    }
}
