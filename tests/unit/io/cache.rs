//! Tests for memoized tile image decoding

#[cfg(test)]
mod tests {
    use dungeontiles::GenerationError;
    use dungeontiles::io::cache::{AssetCache, CacheStats};
    use image::{DynamicImage, GenericImageView, Rgb, RgbImage};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // Tests the first lookup decodes and later lookups hit memory
    // Verified by decoding on every lookup
    #[test]
    fn test_cache_hit_after_miss() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tile.png");
        RgbImage::from_pixel(3, 2, Rgb([10, 20, 30])).save(&path).unwrap();

        let mut cache = AssetCache::new();
        assert!(cache.is_empty());

        let first = cache.get(&path).unwrap().dimensions();
        let second = cache.get(&path).unwrap().dimensions();

        assert_eq!(first, (3, 2));
        assert_eq!(first, second);
        assert_eq!(cache.stats, CacheStats { hits: 1, misses: 1 });
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&path));
    }

    // Tests hits return the cached image even after the file changes
    // Verified by reloading when the file is newer
    #[test]
    fn test_cache_returns_original() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tile.png");
        RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])).save(&path).unwrap();

        let mut cache = AssetCache::new();
        let _ = cache.get(&path).unwrap();

        RgbImage::from_pixel(5, 5, Rgb([9, 9, 9])).save(&path).unwrap();
        assert_eq!(cache.get(&path).unwrap().dimensions(), (2, 2));
    }

    // Tests missing files fail with their path and are not cached
    // Verified by caching a placeholder on failure
    #[test]
    fn test_cache_missing_file() {
        let mut cache = AssetCache::new();
        let path = Path::new("does/not/exist.png");

        match cache.get(path) {
            Err(GenerationError::AssetLoad { path: failed, .. }) => {
                assert_eq!(failed, path);
            }
            Err(other) => unreachable!("Expected AssetLoad, got {other}"),
            Ok(_) => unreachable!("Expected AssetLoad for a missing file"),
        }
        assert!(!cache.contains(path));
        assert_eq!(cache.stats.misses, 0);
    }

    // Tests undecodable files fail to load
    // Verified by falling back to an empty image
    #[test]
    fn test_cache_undecodable_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, "not an image").unwrap();

        let mut cache = AssetCache::new();
        assert!(matches!(
            cache.get(&path),
            Err(GenerationError::AssetLoad { .. })
        ));
    }

    // Tests inserted images are served without touching disk
    // Verified by ignoring inserted entries
    #[test]
    fn test_cache_insert() {
        let mut cache = AssetCache::default();
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([0, 255, 0])));
        cache.insert("virtual/tile.png", image);

        let loaded = cache.get(Path::new("virtual/tile.png")).unwrap();
        assert_eq!(loaded.dimensions(), (4, 4));
        assert_eq!(cache.stats.hits, 1);
    }
}
