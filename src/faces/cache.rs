use crate::faces::mask::DesirabilityMask;
use crate::faces::region::{FaceDetector, FaceRegion, detect_faces};
use image::RgbaImage;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Detection result for one source image
///
/// Holds the detected rectangles together with the desirability mask built
/// from them, so repeated quality scoring never re-runs the classifier.
#[derive(Debug, Clone)]
pub struct FaceAnalysis {
    regions: Vec<FaceRegion>,
    mask: DesirabilityMask,
    desirable: Vec<(u32, u32)>,
}

impl FaceAnalysis {
    /// Build the analysis from an already known set of regions
    pub fn from_regions(width: u32, height: u32, regions: Vec<FaceRegion>) -> Self {
        let mask = DesirabilityMask::from_regions(width, height, &regions);
        let desirable = mask.desirable_pixels();
        Self {
            regions,
            mask,
            desirable,
        }
    }

    /// Run `detector` on `source` and build the mask
    pub fn detect(detector: &dyn FaceDetector, source: &RgbaImage) -> Self {
        let regions = detect_faces(detector, source);
        Self::from_regions(source.width(), source.height(), regions)
    }

    /// Detected face rectangles
    pub fn regions(&self) -> &[FaceRegion] {
        &self.regions
    }

    /// Number of detected faces
    pub fn face_count(&self) -> usize {
        self.regions.len()
    }

    /// Test if the detector found no face
    pub fn has_no_faces(&self) -> bool {
        self.regions.is_empty()
    }

    /// Desirability mask built from the regions
    pub const fn mask(&self) -> &DesirabilityMask {
        &self.mask
    }

    /// Desirable pixel coordinates, row-major
    pub fn desirable_pixels(&self) -> &[(u32, u32)] {
        &self.desirable
    }
}

/// Identity of a source image within one rendering run
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SourceKey(pub usize);

/// Read-mostly cache of face analyses keyed by source identity
///
/// Entries are only ever added. Two tasks missing on the same key at once
/// may both run detection; the first insert wins and both get that entry.
#[derive(Default)]
pub struct FaceCache {
    entries: RwLock<HashMap<SourceKey, Arc<FaceAnalysis>>>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug)]
pub struct CacheStats {
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl CacheStats {
    /// Number of cache hits
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of cache misses
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
}

impl FaceCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the cached analysis or compute and store a new one
    ///
    /// `compute_fn` runs outside any lock, so a slow detector never blocks
    /// tasks working on other images.
    pub fn get_or_compute<F>(&self, key: SourceKey, compute_fn: F) -> Arc<FaceAnalysis>
    where
        F: FnOnce() -> FaceAnalysis,
    {
        let cached = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();
        if let Some(analysis) = cached {
            self.stats.hits.fetch_add(1, Ordering::Relaxed);
            return analysis;
        }

        self.stats.misses.fetch_add(1, Ordering::Relaxed);
        let computed = Arc::new(compute_fn());

        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(entries.entry(key).or_insert(computed))
    }

    /// Number of cached analyses
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Test if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
