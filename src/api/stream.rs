use std::sync::{Arc, Mutex};

use futures::{stream, Stream, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};

use crate::models::FilteredReview;

pub const DEFAULT_STREAM_CAPACITY: usize = 256;

/// Process-wide feed of created reviews.
///
/// A subscriber first gets the most recently published review, then every
/// review published after it subscribed. Each subscriber may fall at most
/// `capacity` items behind; past that it skips ahead to the oldest review
/// still buffered. Publishing never waits on subscribers.
#[derive(Clone)]
pub struct ReviewStream {
	inner: Arc<Inner>,
}

struct Inner {
	sender: broadcast::Sender<FilteredReview>,
	latest: Mutex<Option<FilteredReview>>,
}

impl ReviewStream {
	pub fn new(capacity: usize) -> Self {
		let (sender, _) = broadcast::channel(capacity.max(1));
		Self {
			inner: Arc::new(Inner {
				sender,
				latest: Mutex::new(None),
			}),
		}
	}

	pub fn publish(&self, review: FilteredReview) {
		// held across the send so subscribe() never sees a gap or a duplicate
		let mut latest = self
			.inner
			.latest
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner());
		*latest = Some(review.clone());

		// no subscribers is fine, the review is kept as `latest`
		let receivers = self.inner.sender.send(review).unwrap_or(0);
		log::debug!("review published to {} stream subscribers", receivers);
	}

	pub fn subscribe(&self) -> impl Stream<Item = FilteredReview> + Send + 'static {
		let (replay, receiver) = {
			let latest = self
				.inner
				.latest
				.lock()
				.unwrap_or_else(|poisoned| poisoned.into_inner());
			(latest.clone(), self.inner.sender.subscribe())
		};

		let live = stream::unfold(receiver, |mut receiver| async move {
			loop {
				match receiver.recv().await {
					Ok(review) => return Some((review, receiver)),
					Err(RecvError::Lagged(skipped)) => {
						log::warn!("stream subscriber lagged, skipped {} reviews", skipped);
					}
					Err(RecvError::Closed) => return None,
				}
			}
		});

		stream::iter(replay).chain(live)
	}

	pub fn subscriber_count(&self) -> usize {
		self.inner.sender.receiver_count()
	}
}

impl Default for ReviewStream {
	fn default() -> Self {
		Self::new(DEFAULT_STREAM_CAPACITY)
	}
}
