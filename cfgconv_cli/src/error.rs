use std::io;
use std::path::PathBuf;

use cfgconv_engine::ConvertError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    UnreadableInput { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    UnwritableOutput { path: PathBuf, source: io::Error },

    #[error("could not detect the dialect of {}; pass a dialect flag instead", path.display())]
    AmbiguousDetection { path: PathBuf },

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("cannot open log file {}: {source}", path.display())]
    Logging { path: PathBuf, source: io::Error },
}
