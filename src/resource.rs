use thiserror::Error;
use url::Url;

/// File key and optional node id extracted from a Figma link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigmaInfo {
    pub file_key: String,
    pub node_id: Option<String>,
}

#[derive(Debug, Error)]
pub enum ResourceParseError {
    #[error("Invalid URL '{value}': {message}. Hint: include https:// and copy the link from Figma's Share dialog.")]
    InvalidUrl { value: String, message: String },
    #[error("Not a Figma URL: '{url}'. Hint: the link must point at figma.com.")]
    NotFigma { url: String },
    #[error("Figma URL missing file key in '{url}'. Hint: use https://www.figma.com/design/<FILE_KEY>/... and node-id if needed.")]
    FigmaMissingFileKey { url: String },
}

/// Extract the file key and node id from a `/file/` or `/design/` link.
///
/// Figma writes node ids as `12-34` in links and `12:34` in the API.
pub fn parse_figma_url(value: &str) -> Result<FigmaInfo, ResourceParseError> {
    let url = Url::parse(value).map_err(|e| ResourceParseError::InvalidUrl {
        value: value.to_string(),
        message: e.to_string(),
    })?;

    let host = url.host_str().unwrap_or("");
    if !(host == "figma.com" || host.ends_with(".figma.com")) {
        return Err(ResourceParseError::NotFigma {
            url: value.to_string(),
        });
    }

    let path_segments: Vec<&str> = url.path_segments().map(|c| c.collect()).unwrap_or_default();

    let file_key = path_segments
        .iter()
        .position(|&s| s == "file" || s == "design")
        .and_then(|i| path_segments.get(i + 1))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .ok_or_else(|| ResourceParseError::FigmaMissingFileKey {
            url: value.to_string(),
        })?;

    let node_id = url
        .query_pairs()
        .find(|(k, _)| k == "node-id")
        .map(|(_, v)| v.replace('-', ":"))
        .filter(|v| !v.is_empty());

    Ok(FigmaInfo { file_key, node_id })
}
