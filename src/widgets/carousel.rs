//! Read-next carousel state and its auto-advance driver.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::dom::Patch;
use crate::dom::selectors::dot;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Position of a carousel over a fixed number of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    track: String,
    dots: String,
    len: usize,
    index: usize,
    paused: bool,
}

impl Carousel {
    pub fn new(track: impl Into<String>, dots: impl Into<String>, len: usize) -> Self {
        Self {
            track: track.into(),
            dots: dots.into(),
            len,
            index: 0,
            paused: false,
        }
    }

    /// Same carousel positioned at `index`, clamped.
    pub fn at(mut self, index: usize) -> Self {
        self.index = index.min(self.len.saturating_sub(1));
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Auto-advance only makes sense with something to advance to.
    pub fn auto_advances(&self) -> bool {
        self.len > 1
    }

    /// Jumps to `index`, clamped to `[0, len-1]`.
    pub fn go_to(&mut self, index: i64) -> Vec<Patch> {
        let last = self.len.saturating_sub(1) as i64;
        self.index = index.clamp(0, last) as usize;
        self.patches()
    }

    /// Moves to the next item, wrapping around.
    pub fn advance(&mut self) -> Vec<Patch> {
        let next = if self.len == 0 {
            0
        } else {
            (self.index + 1) % self.len
        };
        self.go_to(next as i64)
    }

    pub fn pointer_enter(&mut self) {
        self.paused = true;
    }

    pub fn pointer_leave(&mut self) {
        self.paused = false;
    }

    /// Track offset plus the `active` class on the current dot only.
    pub fn patches(&self) -> Vec<Patch> {
        let offset = -(self.index as i64 * 100);
        let mut patches = vec![Patch::style(
            &self.track,
            "transform",
            format!("translateX({offset}%)"),
        )];
        patches.extend(
            (0..self.len).map(|i| Patch::toggle_class(dot(&self.dots, i), "active", i == self.index)),
        );
        patches
    }
}

/// User input forwarded to a running carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    DotClicked(usize),
    PointerEnter,
    PointerLeave,
}

/// Drives `carousel` until the event channel closes.
///
/// Every transition is sent on `patches` and its index published on
/// `index`. Ticks are skipped while paused; leaving the carousel restarts
/// the interval from zero.
pub async fn run_carousel(
    mut carousel: Carousel,
    period: Duration,
    mut events: mpsc::Receiver<CarouselEvent>,
    patches: mpsc::Sender<Vec<Patch>>,
    index: watch::Sender<usize>,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        let update = tokio::select! {
            event = events.recv() => match event {
                None => break,
                Some(CarouselEvent::DotClicked(i)) => Some(carousel.go_to(i as i64)),
                Some(CarouselEvent::PointerEnter) => {
                    carousel.pointer_enter();
                    None
                }
                Some(CarouselEvent::PointerLeave) => {
                    carousel.pointer_leave();
                    ticker.reset();
                    None
                }
            },
            _ = ticker.tick(), if carousel.auto_advances() && !carousel.is_paused() => {
                Some(carousel.advance())
            }
        };

        if let Some(update) = update {
            index.send_replace(carousel.index());
            if patches.send(update).await.is_err() {
                tracing::debug!("Carousel patch receiver dropped, stopping driver");
                break;
            }
        }
    }
}

/// Handle to a spawned carousel driver.
pub struct CarouselDriver {
    pub events: mpsc::Sender<CarouselEvent>,
    pub patches: mpsc::Receiver<Vec<Patch>>,
    pub index: watch::Receiver<usize>,
    pub task: JoinHandle<()>,
}

/// Spawns [`run_carousel`] on the current runtime.
pub fn spawn_carousel(carousel: Carousel, period: Duration) -> CarouselDriver {
    let (event_tx, event_rx) = mpsc::channel(16);
    let (patch_tx, patch_rx) = mpsc::channel(16);
    let (index_tx, index_rx) = watch::channel(carousel.index());

    let task = tokio::spawn(run_carousel(carousel, period, event_rx, patch_tx, index_tx));

    CarouselDriver {
        events: event_tx,
        patches: patch_rx,
        index: index_rx,
        task,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(".track", ".dots", len)
    }

    #[test]
    fn test_initial_patches() {
        let c = carousel(3);
        let patches = c.patches();
        assert_eq!(patches[0], Patch::style(".track", "transform", "translateX(0%)"));
        assert_eq!(patches[1], Patch::add_class(dot(".dots", 0), "active"));
        assert_eq!(patches[2], Patch::remove_class(dot(".dots", 1), "active"));
        assert_eq!(patches.len(), 4);
    }

    #[test]
    fn test_index_is_clamped() {
        let mut c = carousel(3);
        c.go_to(10);
        assert_eq!(c.index(), 2);
        c.go_to(-4);
        assert_eq!(c.index(), 0);

        let mut empty = carousel(0);
        empty.go_to(5);
        assert_eq!(empty.index(), 0);
        empty.advance();
        assert_eq!(empty.index(), 0);
    }

    #[test]
    fn test_advance_wraps() {
        let mut c = carousel(3);
        c.advance();
        c.advance();
        let patches = c.advance();
        assert_eq!(c.index(), 0);
        assert_eq!(patches[0], Patch::style(".track", "transform", "translateX(0%)"));

        c.go_to(1);
        assert_eq!(
            c.patches()[0],
            Patch::style(".track", "transform", "translateX(-100%)")
        );
    }

    #[test]
    fn test_single_item_does_not_auto_advance() {
        assert!(!carousel(1).auto_advances());
        assert!(carousel(2).auto_advances());
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_auto_advances() {
        let mut driver = spawn_carousel(carousel(3), DEFAULT_INTERVAL);
        let start = Instant::now();

        let first = driver.patches.recv().await.unwrap();
        assert_eq!(first[0], Patch::style(".track", "transform", "translateX(-100%)"));
        assert_eq!(start.elapsed(), DEFAULT_INTERVAL);
        assert_eq!(*driver.index.borrow(), 1);

        driver.patches.recv().await.unwrap();
        assert_eq!(*driver.index.borrow(), 2);
        driver.patches.recv().await.unwrap();
        assert_eq!(*driver.index.borrow(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_pauses_on_hover() {
        let mut driver = spawn_carousel(carousel(3), DEFAULT_INTERVAL);

        driver.events.send(CarouselEvent::PointerEnter).await.unwrap();
        tokio::time::sleep(DEFAULT_INTERVAL * 3).await;
        assert!(driver.patches.try_recv().is_err());
        assert_eq!(*driver.index.borrow(), 0);

        driver.events.send(CarouselEvent::PointerLeave).await.unwrap();
        let start = Instant::now();
        driver.patches.recv().await.unwrap();
        assert_eq!(start.elapsed(), DEFAULT_INTERVAL);
        assert_eq!(*driver.index.borrow(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_dot_click_and_shutdown() {
        let mut driver = spawn_carousel(carousel(4), DEFAULT_INTERVAL);

        driver.events.send(CarouselEvent::DotClicked(3)).await.unwrap();
        driver.patches.recv().await.unwrap();
        assert_eq!(*driver.index.borrow(), 3);

        drop(driver.events);
        driver.task.await.unwrap();
    }
}
