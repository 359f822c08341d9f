//! Prelude module for convenient imports.
//!
//! ```ignore
//! use lokalise::prelude::*;
//! ```

pub use crate::model::{KeyName, PlatformNames, TranslationValue};
pub use crate::services::{
    FileDownload, FileUpload, KeyListOptions, KeyRetrieveOptions, NewComment, NewKey,
    NewLanguage, NewProject, ProjectListOptions, TranslationListOptions, UpdateKey,
    UpdateTranslation,
};
pub use crate::{
    Api, ApiBuilder, CancellationToken, ClientConfig, CursorPageOptions, Error, PageOptions,
    Paged, Query, Result, StatusCode,
};
