use eframe::egui;
use std::collections::HashMap;
use std::sync::mpsc;
use std::sync::Arc;
use tokio::sync::Semaphore;
use url::Url;

use super::{ArtworkProvider, ImageData};

enum ArtworkMsg {
    Ok { url: Url, data: ImageData },
    Err { url: Url },
}

/// What the thumbnail can show for one URL.
pub enum ArtworkState {
    Loading,
    Loaded {
        texture: egui::TextureHandle,
        /// `ctx.input(|i| i.time)` when the texture was uploaded
        loaded_at: f64,
    },
    Failed,
}

/// Owns artwork textures keyed by URL. Requests are idempotent; results
/// arrive over a channel and are uploaded in `poll` on the UI thread.
pub struct ArtworkManager {
    provider: Arc<dyn ArtworkProvider>,
    permits: Arc<Semaphore>,
    states: HashMap<Url, ArtworkState>,
    tx: mpsc::Sender<ArtworkMsg>,
    rx: mpsc::Receiver<ArtworkMsg>,
}

impl ArtworkManager {
    pub fn new(provider: Arc<dyn ArtworkProvider>, concurrency: usize) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            provider,
            permits: Arc::new(Semaphore::new(concurrency.max(1))),
            states: HashMap::new(),
            tx,
            rx,
        }
    }

    pub fn state(&self, url: &Url) -> Option<&ArtworkState> {
        self.states.get(url)
    }

    /// Start fetching `url` unless it is already loading, loaded or failed.
    pub fn request(&mut self, ctx: &egui::Context, url: &Url) {
        if self.states.contains_key(url) {
            return;
        }
        self.states.insert(url.clone(), ArtworkState::Loading);

        let provider = self.provider.clone();
        let permits = self.permits.clone();
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        let url = url.clone();

        crate::app::rt().spawn(async move {
            // Closed semaphore only happens on shutdown
            let Ok(_permit) = permits.acquire_owned().await else {
                return;
            };
            let msg = match provider.fetch(&url).await {
                Ok(data) => {
                    log::info!("artwork ok: {} {}x{}", url, data.width, data.height);
                    ArtworkMsg::Ok { url, data }
                }
                Err(e) => {
                    log::warn!("artwork fetch failed: {} err={}", url, e);
                    ArtworkMsg::Err { url }
                }
            };
            let _ = tx.send(msg);
            ctx.request_repaint();
        });
    }

    /// Forget a failed URL so the next `request` retries it.
    pub fn retry_failed(&mut self) {
        self.states
            .retain(|_, st| !matches!(st, ArtworkState::Failed));
    }

    pub fn poll(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                ArtworkMsg::Ok { url, data } => {
                    let image = egui::ColorImage::from_rgba_unmultiplied(
                        [data.width as usize, data.height as usize],
                        &data.rgba,
                    );
                    let texture = ctx.load_texture(
                        format!("artwork_{}", url),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.states.insert(
                        url,
                        ArtworkState::Loaded {
                            texture,
                            loaded_at: now,
                        },
                    );
                }
                ArtworkMsg::Err { url } => {
                    self.states.insert(url, ArtworkState::Failed);
                }
            }
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::artwork::provider::tests::FakeProvider;
    use std::sync::atomic::Ordering;
    use std::time::{Duration, Instant};

    fn settle(manager: &mut ArtworkManager, ctx: &egui::Context, url: &Url) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while matches!(manager.state(url), Some(ArtworkState::Loading)) {
            assert!(Instant::now() < deadline, "artwork never settled");
            std::thread::sleep(Duration::from_millis(10));
            manager.poll(ctx);
        }
    }

    #[test]
    fn loads_texture_once_per_url() {
        let ctx = egui::Context::default();
        let fake = FakeProvider::default();
        let calls = fake.calls.clone();
        let mut manager = ArtworkManager::new(Arc::new(fake), 2);
        let url = Url::parse("https://example.com/ok.png").unwrap();

        manager.request(&ctx, &url);
        manager.request(&ctx, &url);
        settle(&mut manager, &ctx, &url);
        manager.request(&ctx, &url);

        match manager.state(&url) {
            Some(ArtworkState::Loaded { texture, .. }) => assert_eq!(texture.size(), [2, 2]),
            _ => panic!("expected a loaded texture"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failure_is_sticky_until_retry() {
        let ctx = egui::Context::default();
        let fake = FakeProvider::default();
        let calls = fake.calls.clone();
        let mut manager = ArtworkManager::new(Arc::new(fake), 1);
        let url = Url::parse("https://example.com/missing.png").unwrap();

        manager.request(&ctx, &url);
        settle(&mut manager, &ctx, &url);
        assert!(matches!(manager.state(&url), Some(ArtworkState::Failed)));

        manager.request(&ctx, &url);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        manager.retry_failed();
        assert!(manager.state(&url).is_none());
        manager.request(&ctx, &url);
        settle(&mut manager, &ctx, &url);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
