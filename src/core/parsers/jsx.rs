use std::path::Path;

use anyhow::{Result, anyhow, bail};
use swc_common::{FileName, Globals, SourceMap, sync::Lrc};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

/// Pick the parser dialect from the file extension.
///
/// - `ts`, `mts`, `cts`: TypeScript
/// - `tsx`: TypeScript with JSX
/// - anything else: ECMAScript with JSX
pub fn syntax_for_path(path: &Path) -> Syntax {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax {
            decorators: true,
            ..Default::default()
        }),
        Some("tsx") => Syntax::Typescript(TsSyntax {
            tsx: true,
            decorators: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            decorators: true,
            ..Default::default()
        }),
    }
}

/// Parse JS/JSX/TS/TSX source code into a module AST.
///
/// Recoverable parser errors are treated as failures too, so a file either
/// parses cleanly or contributes nothing.
pub fn parse_source(code: String, file_path: &Path) -> Result<Module> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_map: Lrc<SourceMap> = Default::default();
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.to_path_buf()).into(), code);

        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path.display(), e))?;

        if let Some(err) = parser.take_errors().into_iter().next() {
            bail!("Failed to parse {}: {:?}", file_path.display(), err);
        }

        Ok(module)
    })
}
