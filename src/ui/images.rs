//! Card thumbnails
//!
//! Images are fetched on the background runtime (disk cache first), sent back
//! as bytes and turned into textures on the UI thread.

use crate::api::RawgClient;
use crate::cache::{fetch_image_cached, thumbnail_url, ImageCache};
use eframe::egui;
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::sync::Semaphore;

/// Message sent from background image loader tasks
struct LoadedImage {
    url: String,
    bytes: Option<Vec<u8>>,
}

pub struct ImageLoader {
    client: RawgClient,
    cache: ImageCache,
    runtime: Handle,
    textures: HashMap<String, egui::TextureHandle>,
    /// Requested but not yet delivered
    loading: HashSet<String>,
    /// Failed once; not requested again this session
    failed: HashSet<String>,
    sender: UnboundedSender<LoadedImage>,
    receiver: UnboundedReceiver<LoadedImage>,
    request_semaphore: Arc<Semaphore>,
}

impl ImageLoader {
    pub fn new(client: RawgClient, cache: ImageCache, runtime: Handle) -> Self {
        let (sender, receiver) = unbounded_channel();
        Self {
            client,
            cache,
            runtime,
            textures: HashMap::new(),
            loading: HashSet::new(),
            failed: HashSet::new(),
            sender,
            receiver,
            request_semaphore: Arc::new(Semaphore::new(6)), // Max 6 concurrent downloads
        }
    }

    /// Texture for `url` if ready; otherwise schedules a download and returns `None`
    pub fn texture(&mut self, ctx: &egui::Context, url: &str) -> Option<&egui::TextureHandle> {
        let url = thumbnail_url(url);
        if !self.textures.contains_key(&url)
            && !self.loading.contains(&url)
            && !self.failed.contains(&url)
        {
            self.request(ctx, url.clone());
        }
        self.textures.get(&url)
    }

    /// Turn downloaded bytes into textures (non-blocking)
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok(loaded) = self.receiver.try_recv() {
            self.loading.remove(&loaded.url);

            let Some(bytes) = loaded.bytes else {
                self.failed.insert(loaded.url);
                continue;
            };

            match image::load_from_memory(&bytes) {
                Ok(image) => {
                    let rgba = image.to_rgba8();
                    let size = [rgba.width() as usize, rgba.height() as usize];
                    let pixels = rgba.into_raw();
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
                    let texture =
                        ctx.load_texture(loaded.url.clone(), color_image, egui::TextureOptions::LINEAR);
                    self.textures.insert(loaded.url, texture);
                }
                Err(e) => {
                    warn!("Failed to decode image {}: {}", loaded.url, e);
                    self.failed.insert(loaded.url);
                }
            }
        }
    }

    fn request(&mut self, ctx: &egui::Context, url: String) {
        debug!("Scheduling image download: {}", url);
        self.loading.insert(url.clone());

        let client = self.client.clone();
        let cache = self.cache.clone();
        let sender = self.sender.clone();
        let semaphore = self.request_semaphore.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let bytes = match semaphore.acquire().await {
                Ok(_permit) => match fetch_image_cached(&cache, &client, &url).await {
                    Ok(bytes) => Some(bytes),
                    Err(e) => {
                        warn!("Failed to fetch image {}: {}", url, e);
                        None
                    }
                },
                Err(_) => None,
            };
            let _ = sender.send(LoadedImage { url, bytes });
            ctx.request_repaint();
        });
    }
}
