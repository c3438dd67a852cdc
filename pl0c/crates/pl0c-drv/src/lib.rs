//! pl0c-drv - Compiler Driver
//!
//! Runs the PL/0 front end over a source file and reports the result:
//! the token stream on success, a rendered diagnostic on failure.

pub mod config;
pub mod error;

pub use config::{Charset, Config, LexerConfig, OutputConfig};
pub use error::{DrvError, Result};

use pl0c_lex::{IdentCharset, Token, Tokenizer};
use pl0c_util::{Diagnostic, SourceFile};
use tracing::info;

/// Tokenize a whole source file, up to and including the `Eof` token.
///
/// # Errors
///
/// `DrvError::Tokenize` carrying the first tokenizer error and its report
/// rendered against `file`.
pub fn tokenize(file: &SourceFile, charset: IdentCharset) -> Result<Vec<Token<'_>>> {
    let mut tokenizer = Tokenizer::new(file.content()).with_charset(charset);
    tokenizer.tokenize_all().map_err(|error| DrvError::Tokenize {
        rendered: Diagnostic::from(&error).render(file),
        error,
    })
}

/// Format one token for the token dump.
pub fn format_token(token: &Token<'_>, spans: bool) -> String {
    if spans {
        format!("{}-{} {}", token.start(), token.end(), token)
    } else {
        token.to_string()
    }
}

/// Tokenize `file` and render the token dump, one token per line.
pub fn dump_tokens(file: &SourceFile, config: &Config) -> Result<String> {
    let tokens = tokenize(file, config.lexer.charset.into())?;
    info!(file = file.name(), tokens = tokens.len(), "tokenized");

    let mut out = String::new();
    for token in &tokens {
        out.push_str(&format_token(token, config.output.spans));
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pl0c_lex::TokenKind;
    use pl0c_util::ErrorCode;

    #[test]
    fn test_tokenize_file() {
        let file = SourceFile::new("prog.pl0", "print(1)");
        let tokens = tokenize(&file, IdentCharset::Unicode).unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].kind(), TokenKind::Print);
    }

    #[test]
    fn test_tokenize_error_is_rendered() {
        let file = SourceFile::new("prog.pl0", "var x;\nx = $;");
        let err = tokenize(&file, IdentCharset::Unicode).unwrap_err();
        match err {
            DrvError::Tokenize { error, rendered } => {
                assert_eq!(error.code, ErrorCode::InvalidInput);
                assert!(rendered.starts_with("error[E0002]: invalid input character\n"));
                assert!(rendered.contains("--> prog.pl0:2:5"));
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_format_token_with_spans() {
        let file = SourceFile::new("prog.pl0", "var");
        let tokens = tokenize(&file, IdentCharset::Unicode).unwrap();
        assert_eq!(format_token(&tokens[0], true), "1:1-1:4 Var(\"var\")");
        assert_eq!(format_token(&tokens[0], false), "Var(\"var\")");
        assert_eq!(format_token(&tokens[1], true), "1:4-1:4 Eof");
    }

    #[test]
    fn test_dump_tokens() {
        let file = SourceFile::new("prog.pl0", "x = 12;");
        let dump = dump_tokens(&file, &Config::default()).unwrap();
        assert_eq!(
            dump,
            "Identifier(\"x\")\nEqual('=')\nUnsignedInteger(12)\nSemicolon(';')\nEof\n"
        );
    }

    #[test]
    fn test_dump_tokens_respects_charset() {
        let file = SourceFile::new("prog.pl0", "_x");
        assert!(dump_tokens(&file, &Config::default()).is_err());

        let mut config = Config::default();
        config.lexer.charset = Charset::Ascii;
        assert_eq!(dump_tokens(&file, &config).unwrap(), "Identifier(\"_x\")\nEof\n");
    }
}
