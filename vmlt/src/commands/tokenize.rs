//! Tokenize command implementation.
//!
//! This module reads a VML document from a file or standard input, scans it
//! into tokens, and prints the token sequence in the requested format.

use std::io::Read;
use std::path::PathBuf;

use tracing::debug;
use vmlc_lex::{scan_str, Token, TokenKind};

use crate::config::Config;
use crate::error::{Result, VmltError};

/// Output format for the token listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One aligned line per token.
    Text,
    /// The token sequence as a JSON array.
    Json,
}

impl OutputFormat {
    /// Parse a string into an OutputFormat.
    ///
    /// # Arguments
    /// * `s` - The string to parse (case-insensitive)
    ///
    /// # Returns
    /// * `Option<OutputFormat>` - The parsed format or None if invalid
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse a token-kind name as used by the `--kind` filter.
///
/// Accepts the same names the text listing prints.
fn kind_from_name(name: &str) -> Option<TokenKind> {
    match name.to_lowercase().as_str() {
        "comment" => Some(TokenKind::Comment),
        "delimiter" => Some(TokenKind::Delimiter),
        "identifier" => Some(TokenKind::Identifier),
        "string" => Some(TokenKind::StringLiteral),
        "text" => Some(TokenKind::Text),
        _ => None,
    }
}

/// Arguments for the tokenize command.
#[derive(Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input file path; standard input when absent.
    pub input: Option<PathBuf>,
    /// Output format override (falls back to configuration).
    pub format: Option<String>,
    /// Only print tokens of this kind.
    pub kind: Option<String>,
    /// Append a per-kind token count summary.
    pub stats: bool,
}

/// Tokenize command handler.
pub struct TokenizeCommand {
    args: TokenizeArgs,
    config: Config,
}

impl TokenizeCommand {
    /// Create a new TokenizeCommand.
    pub fn new(args: TokenizeArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let source = self.read_source()?;
        debug!(chars = source.chars().count(), "scanning input");

        let mut tokens = scan_str(&source);
        debug!(tokens = tokens.len(), "scan complete");

        if let Some(kind) = self.kind_filter()? {
            tokens.retain(|token| token.kind == kind);
        }

        match self.output_format()? {
            OutputFormat::Text => print_text_listing(&tokens),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tokens)?),
        }

        if self.args.stats || self.config.tokenize.stats {
            print_stats(&tokens);
        }

        if self.args.verbose {
            eprintln!("scanned {} token(s)", tokens.len());
        }

        Ok(())
    }

    /// Read the document from the input file or standard input.
    fn read_source(&self) -> Result<String> {
        match &self.args.input {
            Some(path) => {
                debug!(path = %path.display(), "reading input file");
                std::fs::read_to_string(path).map_err(|e| {
                    VmltError::FileOperation(format!(
                        "Failed to read {}: {}",
                        path.display(),
                        e
                    ))
                })
            },
            None => {
                debug!("reading standard input");
                let mut source = String::new();
                std::io::stdin().read_to_string(&mut source)?;
                Ok(source)
            },
        }
    }

    /// Resolve the output format from arguments, then configuration.
    fn output_format(&self) -> Result<OutputFormat> {
        let name = self
            .args
            .format
            .as_deref()
            .unwrap_or(&self.config.tokenize.format);
        OutputFormat::parse(name).ok_or_else(|| {
            VmltError::Validation(format!(
                "Unknown output format '{}' (expected 'text' or 'json')",
                name
            ))
        })
    }

    /// Resolve the optional kind filter.
    fn kind_filter(&self) -> Result<Option<TokenKind>> {
        match self.args.kind.as_deref() {
            None => Ok(None),
            Some(name) => kind_from_name(name).map(Some).ok_or_else(|| {
                VmltError::Validation(format!(
                    "Unknown token kind '{}' (expected comment, delimiter, \
                     identifier, string, or text)",
                    name
                ))
            }),
        }
    }
}

/// Print one aligned line per token.
fn print_text_listing(tokens: &[Token]) {
    for (index, token) in tokens.iter().enumerate() {
        println!("{:>4}  {:<10}  {:?}", index, token.kind.to_string(), token.value);
    }
}

/// Print a per-kind token count summary.
fn print_stats(tokens: &[Token]) {
    let kinds = [
        TokenKind::Comment,
        TokenKind::Delimiter,
        TokenKind::Identifier,
        TokenKind::StringLiteral,
        TokenKind::Text,
    ];
    println!("total: {}", tokens.len());
    for kind in kinds {
        let count = tokens.iter().filter(|t| t.kind == kind).count();
        println!("{:<10}  {}", kind.to_string(), count);
    }
}

/// Run the tokenize command.
///
/// # Arguments
/// * `args` - Parsed command arguments
/// * `config` - The application configuration
///
/// # Returns
/// * `Result<()>` - Success or an error
pub fn run_tokenize(args: TokenizeArgs, config: Config) -> Result<()> {
    TokenizeCommand::new(args, config).run()
}
