use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error(
        "expected exactly one total line matching \
         'Total planned hours from TODO items: <N>h', found {found}"
    )]
    MultipleSummaryLines { found: usize },

    #[error("total line is out of sync; expected '{expected}' but found '{found}'")]
    SummaryOutOfSync { expected: String, found: String },

    #[error("reading file: {0}")]
    Read(#[source] std::io::Error),

    #[error("writing file: {0}")]
    Write(#[source] std::io::Error),
}
