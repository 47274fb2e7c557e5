//! Source resolution: turns source identifiers into a configuration set

use camino::{Utf8Path, Utf8PathBuf};
use confparse_core::error::ConfparseError;
use confparse_core::types::{ConfigSet, Document, SourceId};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

use crate::format::InputFormat;
use crate::ConfigResult;


/// Resolves source identifiers into parsed documents.
///
/// Implementations fail on the first source that cannot be read or parsed; the
/// error is returned unchanged to the caller.
#[allow(async_fn_in_trait)]
pub trait SourceResolver {
    async fn get_configurations(
        &self,
        hint: Option<InputFormat>,
        sources: &[String],
    ) -> ConfigResult<ConfigSet>;
}

/// Resolver reading files from disk and `-` from standard input
#[derive(Debug, Clone, Default)]
pub struct FsResolver {
    /// Directory relative paths are read from; the process working directory if unset
    base_dir: Option<Utf8PathBuf>,
}

impl FsResolver {
    /// Create a resolver reading relative to the working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver reading relative paths from `base_dir`
    pub fn with_base_dir(base_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// Path a file source is read from
    pub fn resolve_path(&self, source: &str) -> Utf8PathBuf {
        match &self.base_dir {
            Some(base) => base.join(source),
            None => Utf8PathBuf::from(source),
        }
    }

    /// Read and parse a single source
    pub async fn load_source(
        &self,
        hint: Option<InputFormat>,
        source: &SourceId,
    ) -> ConfigResult<Document> {
        let format = select_format(hint, source)?;

        if source.is_stdin() {
            return read_source(tokio::io::stdin(), source.as_str(), format).await;
        }

        let path = self.resolve_path(source.as_str());
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ConfparseError::unreadable(source.as_str(), e))?;

        debug!(
            source = %source,
            path = %path,
            format = %format,
            bytes = content.len(),
            "Read source"
        );
        format.parse(source.as_str(), &content)
    }
}

impl SourceResolver for FsResolver {
    async fn get_configurations(
        &self,
        hint: Option<InputFormat>,
        sources: &[String],
    ) -> ConfigResult<ConfigSet> {
        let mut set = ConfigSet::new();

        for source in sources {
            if set.contains(source) {
                debug!(source = %source, "Skipping duplicate source");
                continue;
            }

            let id = SourceId::new(source.as_str());
            let document = self.load_source(hint, &id).await?;
            set.insert(id, document);
        }

        debug!(count = set.len(), "Resolved sources");
        Ok(set)
    }
}

/// Read a whole stream and parse it in the given format
pub async fn read_source<R>(
    mut reader: R,
    source_id: &str,
    format: InputFormat,
) -> ConfigResult<Document>
where
    R: AsyncRead + Unpin,
{
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .await
        .map_err(|e| ConfparseError::unreadable(source_id, e))?;

    debug!(source = %source_id, format = %format, bytes = content.len(), "Read stream");
    format.parse(source_id, &content)
}

/// The hint wins; otherwise the file extension decides
fn select_format(hint: Option<InputFormat>, source: &SourceId) -> ConfigResult<InputFormat> {
    if let Some(format) = hint {
        return Ok(format);
    }

    if source.is_stdin() {
        return Err(ConfparseError::UnsupportedFormat {
            source_id: source.to_string(),
            reason: "standard input requires an explicit input format".to_string(),
        });
    }

    InputFormat::from_path(Utf8Path::new(source.as_str())).ok_or_else(|| {
        ConfparseError::UnsupportedFormat {
            source_id: source.to_string(),
            reason: "unrecognized file extension".to_string(),
        }
    })
}
