//! Cursor pagination.
//!
//! Every listing operation in B2 returns a page of items plus an optional
//! cursor naming where the next page starts. [`paginate`] turns a page-fetch
//! function into a lazy [`Paginated`] stream that walks the pages in order
//! and stops on the first page without a cursor.
//!
//! Cursors are opaque: callers receive them from one page and hand them back
//! to fetch the next, but cannot build them from scratch.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tracing::trace;

use crate::Result;

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T, C> {
    /// Items in server order.
    pub items: Vec<T>,
    /// Where the next page starts; `None` on the final page.
    pub next_cursor: Option<C>,
}

impl<T, C> ListPage<T, C> {
    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}

/// Cursor for file-name listings: the next file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameCursor(String);

impl FileNameCursor {
    pub(crate) fn new(file_name: String) -> Self {
        Self(file_name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Cursor for file-version listings.
///
/// A name alone is not enough to resume: many versions share one name, so
/// the id of the next version travels with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileVersionCursor {
    file_name: String,
    file_id: Option<String>,
}

impl FileVersionCursor {
    pub(crate) fn new(file_name: String, file_id: Option<String>) -> Self {
        Self { file_name, file_id }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_id(&self) -> Option<&str> {
        self.file_id.as_deref()
    }
}

/// Cursor for key listings: the next application key id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCursor(String);

impl KeyCursor {
    pub(crate) fn new(key_id: String) -> Self {
        Self(key_id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A lazy, forward-only listing.
///
/// Pages are fetched on demand as the stream is polled. A fetch failure is
/// yielded as an `Err` item and ends the stream. Items yielded before the
/// failure remain valid.
pub struct Paginated<'a, T> {
    inner: Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>,
}

impl<'a, T> Paginated<'a, T> {
    /// Wrap any stream of results, e.g. a filtered listing.
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<T>> + Send + 'a,
    {
        Self {
            inner: Box::pin(stream),
        }
    }
}

impl<T> Stream for Paginated<'_, T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Walk a paged listing.
///
/// `fetch` is called with `None` for the first page and then with each
/// page's cursor in turn. The first page is always requested, even if it
/// turns out to be empty. Nothing is fetched until the stream is polled.
///
/// # Example
///
/// ```
/// use b2_core::pagination::{paginate, ListPage};
/// use futures_util::StreamExt;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let pages = vec![vec![1, 2], vec![3]];
/// let listing = paginate(|cursor: Option<usize>| {
///     let index = cursor.unwrap_or(0);
///     let items = pages[index].clone();
///     let next = (index + 1 < pages.len()).then_some(index + 1);
///     async move { Ok::<_, b2_core::Error>(ListPage { items, next_cursor: next }) }
/// });
///
/// let all: Vec<i32> = listing.map(|r| r.unwrap()).collect().await;
/// assert_eq!(all, vec![1, 2, 3]);
/// # }
/// ```
pub fn paginate<'a, T, C, F, Fut>(mut fetch: F) -> Paginated<'a, T>
where
    T: Send + 'a,
    C: Send + 'a,
    F: FnMut(Option<C>) -> Fut + Send + 'a,
    Fut: Future<Output = Result<ListPage<T, C>>> + Send + 'a,
{
    let stream = async_stream::stream! {
        let mut cursor: Option<C> = None;
        let mut page_number = 0usize;

        loop {
            let page = match fetch(cursor.take()).await {
                Ok(page) => page,
                Err(e) => {
                    yield Err(e);
                    break;
                }
            };
            page_number += 1;
            trace!(
                page = page_number,
                items = page.items.len(),
                more = page.next_cursor.is_some(),
                "Fetched listing page"
            );

            for item in page.items {
                yield Ok(item);
            }

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }
    };

    Paginated::new(stream)
}
