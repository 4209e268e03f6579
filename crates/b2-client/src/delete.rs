//! Hierarchical delete.
//!
//! B2 has no directories, only names containing `/`. Deleting by name walks
//! a delimiter listing of file versions: every version of every name is
//! deleted, hide markers included, and folder entries are descended into,
//! depth first.

use std::future::Future;
use std::pin::Pin;

use futures_util::{TryStreamExt, future};
use tracing::{debug, info, instrument, trace};

use b2_core::{Error, Result, Transport};

use crate::client::B2Client;
use crate::files::ListFilesQuery;

/// What `delete_file` removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    /// One file version, by id.
    ById { file_id: String },
    /// Every file under a name prefix, recursively.
    ByName { file_name: String, bucket_id: String },
}

impl DeleteTarget {
    /// Pick the target from optional arguments.
    ///
    /// Exactly one of `file_id` or `file_name` must be given, and a name
    /// needs a bucket.
    pub fn from_parts(
        file_id: Option<&str>,
        file_name: Option<&str>,
        bucket_id: Option<&str>,
    ) -> Result<Self> {
        match (file_id, file_name, bucket_id) {
            (Some(file_id), None, _) => Ok(DeleteTarget::ById {
                file_id: file_id.to_string(),
            }),
            (None, Some(file_name), Some(bucket_id)) => Ok(DeleteTarget::ByName {
                file_name: file_name.to_string(),
                bucket_id: bucket_id.to_string(),
            }),
            (Some(_), Some(_), _) => Err(Error::invalid_argument(
                "give either a file id or a file name, not both",
            )),
            (None, Some(_), None) => Err(Error::invalid_argument(
                "a file name must be given together with a bucket id",
            )),
            (None, None, _) => Err(Error::invalid_argument(
                "either a file id or a file name and bucket id must be given",
            )),
        }
    }
}

type DeleteFuture<'a> = Pin<Box<dyn Future<Output = Result<usize>> + Send + 'a>>;

impl<T: Transport> B2Client<T> {
    /// Delete a file version by id, or everything under a name.
    ///
    /// Arguments are checked before any request is made. Returns the number
    /// of file versions deleted. There is no rollback: if a delete fails,
    /// earlier deletes stay done.
    pub async fn delete_file(
        &self,
        file_id: Option<&str>,
        file_name: Option<&str>,
        bucket_id: Option<&str>,
    ) -> Result<usize> {
        let target = DeleteTarget::from_parts(file_id, file_name, bucket_id)?;
        self.delete_target(&target).await
    }

    #[instrument(skip(self))]
    pub async fn delete_target(&self, target: &DeleteTarget) -> Result<usize> {
        let deleted = match target {
            DeleteTarget::ById { file_id } => {
                let file = self.get_file_info(file_id).await?;
                self.delete_file_version(file_id, &file.file_name).await?;
                1
            }
            DeleteTarget::ByName {
                file_name,
                bucket_id,
            } => self.delete_prefix(file_name, bucket_id).await?,
        };

        info!(deleted, "Delete finished");
        Ok(deleted)
    }

    // Boxed so the recursion has a finite future type
    fn delete_prefix<'a>(&'a self, prefix: &'a str, bucket_id: &'a str) -> DeleteFuture<'a> {
        Box::pin(async move {
            debug!(prefix, "Deleting under prefix");
            let mut deleted = 0;
            let query = ListFilesQuery::new(bucket_id)
                .with_prefix(prefix)
                .with_delimiter("/");
            let mut entries = self
                .list_file_versions(query)
                .try_filter(|entry| future::ready(entry.file_name.starts_with(prefix)));

            while let Some(entry) = entries.try_next().await? {
                match entry.file_id.as_deref() {
                    Some(file_id) => {
                        self.delete_file_version(file_id, &entry.file_name).await?;
                        deleted += 1;
                    }
                    None if entry.is_folder() => {
                        deleted += self.delete_prefix(&entry.file_name, bucket_id).await?;
                    }
                    None => trace!(name = %entry.file_name, "Skipping entry without id"),
                }
            }

            Ok(deleted)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_by_id() {
        assert_eq!(
            DeleteTarget::from_parts(Some("4_z1"), None, None).unwrap(),
            DeleteTarget::ById {
                file_id: "4_z1".into()
            }
        );
    }

    #[test]
    fn target_by_name() {
        assert_eq!(
            DeleteTarget::from_parts(None, Some("dir/"), Some("b1")).unwrap(),
            DeleteTarget::ByName {
                file_name: "dir/".into(),
                bucket_id: "b1".into()
            }
        );
    }

    #[test]
    fn rejects_ambiguous_or_missing_targets() {
        for (id, name, bucket) in [
            (None, None, None),
            (None, None, Some("b1")),
            (None, Some("a"), None),
            (Some("1"), Some("a"), Some("b1")),
        ] {
            let err = DeleteTarget::from_parts(id, name, bucket).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{id:?} {name:?} {bucket:?}");
        }
    }
}
