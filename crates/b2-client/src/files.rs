//! File listing and file version operations.

use futures_util::{TryStreamExt, future};
use tracing::{debug, instrument};

use b2_core::models::ListFilesResponse;
use b2_core::pagination::paginate;
use b2_core::{
    ApiError, DeletedFileVersion, Error, File, FileNameCursor, FileVersionCursor, ListPage,
    Paginated, Result, Transport,
};

use crate::client::B2Client;
use crate::endpoints::*;

/// Filter for a file listing, bound once for every page of the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilesQuery {
    pub bucket_id: String,
    pub prefix: Option<String>,
    /// Usually `/`; folds deeper names into folder entries.
    pub delimiter: Option<String>,
    /// Overrides the configured page size.
    pub page_size: Option<u32>,
}

impl ListFilesQuery {
    pub fn new(bucket_id: impl Into<String>) -> Self {
        Self {
            bucket_id: bucket_id.into(),
            ..Default::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

impl<T: Transport> B2Client<T> {
    /// Fetch one page of file names.
    #[instrument(skip(self, query), fields(bucket_id = %query.bucket_id, prefix = ?query.prefix))]
    pub async fn list_file_names_page(
        &self,
        query: &ListFilesQuery,
        cursor: Option<&FileNameCursor>,
    ) -> Result<ListPage<File, FileNameCursor>> {
        let body = ListFileNamesRequest {
            bucket_id: &query.bucket_id,
            max_file_count: self.page_size(query.page_size)?,
            prefix: query.prefix.as_deref(),
            delimiter: query.delimiter.as_deref(),
            start_file_name: cursor.map(FileNameCursor::as_str),
        };
        let response: ListFilesResponse = self.call(LIST_FILE_NAMES, &body).await?;
        Ok(response.into_name_page())
    }

    /// Lazily list the latest version of every file matching `query`.
    pub fn list_file_names(&self, query: ListFilesQuery) -> Paginated<'_, File> {
        paginate(move |cursor: Option<FileNameCursor>| {
            let query = query.clone();
            async move { self.list_file_names_page(&query, cursor.as_ref()).await }
        })
    }

    /// Fetch one page of file versions.
    #[instrument(skip(self, query), fields(bucket_id = %query.bucket_id, prefix = ?query.prefix))]
    pub async fn list_file_versions_page(
        &self,
        query: &ListFilesQuery,
        cursor: Option<&FileVersionCursor>,
    ) -> Result<ListPage<File, FileVersionCursor>> {
        let body = ListFileVersionsRequest {
            bucket_id: &query.bucket_id,
            max_file_count: self.page_size(query.page_size)?,
            prefix: query.prefix.as_deref(),
            delimiter: query.delimiter.as_deref(),
            start_file_name: cursor.map(FileVersionCursor::file_name),
            start_file_id: cursor.and_then(FileVersionCursor::file_id),
        };
        let response: ListFilesResponse = self.call(LIST_FILE_VERSIONS, &body).await?;
        Ok(response.into_version_page())
    }

    /// Lazily list every version of every file matching `query`.
    pub fn list_file_versions(&self, query: ListFilesQuery) -> Paginated<'_, File> {
        paginate(move |cursor: Option<FileVersionCursor>| {
            let query = query.clone();
            async move { self.list_file_versions_page(&query, cursor.as_ref()).await }
        })
    }

    #[instrument(skip(self))]
    pub async fn get_file_info(&self, file_id: &str) -> Result<File> {
        debug!("Getting file info");
        self.call(GET_FILE_INFO, &FileIdRequest { file_id }).await
    }

    /// Find the latest version of a file by its exact name.
    ///
    /// Returns a not-found error when no file has that name.
    #[instrument(skip(self))]
    pub async fn get_file_by_name(&self, file_name: &str, bucket_id: &str) -> Result<File> {
        let mut listing = self.list_file_names(ListFilesQuery::new(bucket_id).with_prefix(file_name));

        while let Some(file) = listing.try_next().await? {
            if file.file_name == file_name {
                return Ok(file);
            }
        }

        Err(Error::Api(ApiError::not_found(format!(
            "file not found: {}",
            file_name
        ))))
    }

    /// Lazily list entries whose names start with `prefix`.
    ///
    /// With a delimiter, deeper names come back as folder entries.
    pub fn get_files_by_prefix(
        &self,
        prefix: &str,
        bucket_id: &str,
        delimiter: Option<&str>,
    ) -> Paginated<'_, File> {
        let mut query = ListFilesQuery::new(bucket_id).with_prefix(prefix);
        query.delimiter = delimiter.map(str::to_string);

        let prefix = prefix.to_string();
        Paginated::new(
            self.list_file_names(query)
                .try_filter(move |file| future::ready(file.file_name.starts_with(&prefix))),
        )
    }

    /// Server-side copy of a file, optionally into another bucket.
    #[instrument(skip(self))]
    pub async fn copy_file(
        &self,
        source_file_id: &str,
        file_name: &str,
        destination_bucket_id: Option<&str>,
    ) -> Result<File> {
        debug!("Copying file");
        let body = CopyFileRequest {
            source_file_id,
            file_name,
            destination_bucket_id,
        };
        self.call(COPY_FILE, &body).await
    }

    /// Not supported by this client.
    pub async fn copy_part(&self) -> Result<File> {
        Err(Error::NotImplemented("copy_part"))
    }

    /// Hide a file so that it no longer appears in name listings.
    #[instrument(skip(self))]
    pub async fn hide_file(&self, bucket_id: &str, file_name: &str) -> Result<File> {
        debug!("Hiding file");
        self.call(HIDE_FILE, &HideFileRequest { bucket_id, file_name })
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_file_version(
        &self,
        file_id: &str,
        file_name: &str,
    ) -> Result<DeletedFileVersion> {
        debug!("Deleting file version");
        self.call(DELETE_FILE_VERSION, &DeleteFileVersionRequest { file_id, file_name })
            .await
    }
}
