//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use dungeontiles::io::progress::ProgressManager;
    use std::path::Path;

    // Tests completed maps are counted
    // Verified by not incrementing on completion
    #[test]
    fn test_progress_counts_maps() {
        let mut pm = ProgressManager::new();
        pm.initialize(3);

        pm.complete_map(Path::new("out/map_1.png"));
        pm.complete_map(Path::new("out/map_2.png"));
        assert_eq!(pm.completed(), 2);

        pm.finish();
    }

    // Tests an uninitialized manager can be used safely
    // Verified by requiring initialize before completion
    #[test]
    fn test_progress_default_hidden() {
        let pm = ProgressManager::default();

        pm.complete_map(Path::new("map.png"));
        assert_eq!(pm.completed(), 1);
        pm.finish();
    }

    // Tests reinitialization resets the count
    // Verified by reusing the previous bar
    #[test]
    fn test_progress_reinitialize() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        pm.complete_map(Path::new("map.png"));

        pm.initialize(5);
        assert_eq!(pm.completed(), 0);
        pm.finish();
    }
}
