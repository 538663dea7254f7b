use std::io::Read;

use thiserror::Error;
use xsd_catalog::{DecodeError, Document, ParseOptions};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to fetch {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },
    #[error("{0}")]
    Decode(#[from] DecodeError),
}

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Reads and parses the schema named by `input`: a URL, `-` for stdin, or a file path.
pub fn load(input: &str, options: &ParseOptions) -> Result<Document, InputError> {
    let source: Box<dyn Read> = if is_url(input) {
        let fetch_error = |source| InputError::Fetch {
            url: input.to_string(),
            source,
        };
        let response = reqwest::blocking::get(input)
            .and_then(|r| r.error_for_status())
            .map_err(fetch_error)?;
        Box::new(response)
    } else if input == "-" {
        Box::new(std::io::stdin().lock())
    } else {
        let file = std::fs::File::open(input).map_err(|source| InputError::Open {
            path: input.to_string(),
            source,
        })?;
        Box::new(std::io::BufReader::new(file))
    };

    Ok(xsd_catalog::parse_with_options(source, options)?)
}
