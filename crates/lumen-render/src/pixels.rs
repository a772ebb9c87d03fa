//! Thread-safe pixel allocation for the rendering workers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// A pixel handed to a worker, identified by column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    /// Column index (x).
    pub col: usize,
    /// Row index (y).
    pub row: usize,
}

/// Raster-order cursor over the image.
#[derive(Debug)]
struct Cursor {
    row: usize,
    col: usize,
}

/// Hands out unique pixels to rendering workers.
///
/// The cursor advance is the only mutable state shared between workers;
/// it sits behind a single mutex and each critical section does O(1)
/// work, so contention stays negligible. Completed-pixel counting is a
/// separate atomic used purely for progress accounting.
#[derive(Debug)]
pub struct PixelManager {
    rows: usize,
    cols: usize,
    cursor: Mutex<Cursor>,
    processed: AtomicU64,
}

impl PixelManager {
    /// Create a manager for an image of `rows` x `cols` pixels.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cursor: Mutex::new(Cursor { row: 0, col: 0 }),
            processed: AtomicU64::new(0),
        }
    }

    /// Claim the next pixel in raster order.
    ///
    /// Returns `None` once every pixel has been handed out; each pixel is
    /// returned to exactly one caller.
    pub fn next_pixel(&self) -> Option<Pixel> {
        let mut cursor = self.cursor.lock().unwrap_or_else(|poisoned| {
            // A worker panicking mid-claim cannot leave the cursor in an
            // inconsistent state; keep handing out pixels.
            poisoned.into_inner()
        });

        if cursor.row == self.rows || self.cols == 0 {
            return None;
        }

        let pixel = Pixel {
            col: cursor.col,
            row: cursor.row,
        };

        cursor.col += 1;
        if cursor.col == self.cols {
            cursor.col = 0;
            cursor.row += 1;
        }

        Some(pixel)
    }

    /// Record one finished pixel (progress accounting only).
    pub fn pixel_done(&self) {
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of pixels reported finished so far.
    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }

    /// Total number of pixels to render.
    pub fn total(&self) -> u64 {
        (self.rows as u64) * (self.cols as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_raster_order_when_sequential() {
        let manager = PixelManager::new(2, 3);
        let order: Vec<Pixel> = std::iter::from_fn(|| manager.next_pixel()).collect();
        assert_eq!(
            order,
            vec![
                Pixel { col: 0, row: 0 },
                Pixel { col: 1, row: 0 },
                Pixel { col: 2, row: 0 },
                Pixel { col: 0, row: 1 },
                Pixel { col: 1, row: 1 },
                Pixel { col: 2, row: 1 },
            ]
        );
        assert_eq!(manager.next_pixel(), None);
    }

    #[test]
    fn test_empty_image_yields_nothing() {
        assert_eq!(PixelManager::new(0, 5).next_pixel(), None);
        assert_eq!(PixelManager::new(5, 0).next_pixel(), None);
    }

    #[test]
    fn test_each_pixel_claimed_exactly_once_across_threads() {
        let manager = PixelManager::new(37, 23);
        let mut claimed: Vec<Pixel> = Vec::new();

        thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        let mut mine = Vec::new();
                        while let Some(pixel) = manager.next_pixel() {
                            mine.push(pixel);
                            manager.pixel_done();
                        }
                        mine
                    })
                })
                .collect();
            for handle in handles {
                claimed.extend(handle.join().unwrap());
            }
        });

        assert_eq!(claimed.len() as u64, manager.total());
        let unique: HashSet<_> = claimed.iter().map(|p| (p.col, p.row)).collect();
        assert_eq!(unique.len() as u64, manager.total());
        assert_eq!(manager.processed(), manager.total());
    }
}
