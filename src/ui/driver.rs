//! Runs a listing's page fetches on the background runtime
//!
//! The UI thread owns the [`PageLoader`]. Fetches are spawned on the tokio
//! runtime and their results come back over a channel that is drained once
//! per frame. Results from before a `reset` (or after the driver is dropped)
//! are thrown away.

use crate::api::RawgClient;
use crate::error::{ApiError, ApiResult};
use crate::listing::{Listing, RawgPageSource};
use crate::loader::{Completion, PageLoader, PageRequest, SentinelTrigger, TriggerMode};
use eframe::egui;
use log::{debug, info};
use serde::de::DeserializeOwned;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Message sent from a background fetch task
struct Delivery<T> {
    generation: u64,
    request: PageRequest,
    result: ApiResult<Vec<T>>,
}

pub struct LoaderDriver<T> {
    listing: Listing,
    loader: PageLoader<T, ApiError>,
    source: RawgPageSource<T>,
    runtime: Handle,
    trigger: SentinelTrigger,
    generation: u64,
    sender: UnboundedSender<Delivery<T>>,
    receiver: UnboundedReceiver<Delivery<T>>,
}

impl<T> LoaderDriver<T>
where
    T: DeserializeOwned + Send + 'static,
{
    pub fn new(
        listing: Listing,
        client: RawgClient,
        runtime: Handle,
        mode: TriggerMode,
        seed: Option<Vec<T>>,
    ) -> Self {
        let (sender, receiver) = unbounded_channel();
        let loader = match seed {
            Some(items) => {
                info!("{}: starting from {} prefetched items", listing.title(), items.len());
                PageLoader::hydrated(listing.policy(), items)
            }
            None => PageLoader::new(listing.policy()),
        };

        Self {
            listing,
            loader,
            source: listing.source(client),
            runtime,
            trigger: SentinelTrigger::new(mode),
            generation: 0,
            sender,
            receiver,
        }
    }

    pub fn loader(&self) -> &PageLoader<T, ApiError> {
        &self.loader
    }

    /// Request the next page. Returns `false` when the loader refused (busy or settled).
    pub fn fetch_next(&mut self, ctx: &egui::Context) -> bool {
        match self.loader.begin_fetch_next() {
            Some(request) => {
                self.spawn(request, ctx);
                true
            }
            None => false,
        }
    }

    /// Re-request the page that failed. Returns `false` outside the error state.
    pub fn retry(&mut self, ctx: &egui::Context) -> bool {
        match self.loader.begin_retry() {
            Some(request) => {
                info!("{}: retrying page {}", self.listing.title(), request.page);
                self.spawn(request, ctx);
                true
            }
            None => false,
        }
    }

    /// Kick off page 1 the first time a screen is shown
    pub fn ensure_started(&mut self, ctx: &egui::Context) {
        if self.loader.pages().is_empty() && !self.loader.is_fetching() && self.loader.error().is_none() {
            self.fetch_next(ctx);
        }
    }

    /// Feed the sentinel's visibility for this frame
    pub fn observe_sentinel(&mut self, visible: bool, ctx: &egui::Context) {
        if self.trigger.observe(visible) {
            self.fetch_next(ctx);
        }
    }

    /// Apply every result that arrived since the last frame; returns how many were applied
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(delivery) = self.receiver.try_recv() {
            if delivery.generation != self.generation {
                debug!(
                    "{}: dropping page {} from an older generation",
                    self.listing.title(),
                    delivery.request.page
                );
                continue;
            }
            if self.loader.complete(delivery.request, delivery.result) != Completion::Discarded {
                applied += 1;
            }
        }
        applied
    }

    /// Throw away everything loaded and start over on the next `ensure_started`
    pub fn reset(&mut self) {
        self.generation += 1;
        self.loader = PageLoader::new(self.listing.policy());
        self.trigger.reset();
        info!("{}: listing reset", self.listing.title());
    }

    fn spawn(&self, request: PageRequest, ctx: &egui::Context) -> JoinHandle<()> {
        let fetch = self.source.fetch_owned(request.page);
        let sender = self.sender.clone();
        let generation = self.generation;
        let ctx = ctx.clone();
        let title = self.listing.title();

        self.runtime.spawn(async move {
            let result = fetch.await;
            if let Err(e) = &result {
                log::error!("{}: page {} failed: {}", title, request.page, e);
            }
            if sender
                .send(Delivery {
                    generation,
                    request,
                    result,
                })
                .is_err()
            {
                debug!("{}: listing closed, discarding page {}", title, request.page);
                return;
            }
            ctx.request_repaint();
        })
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
