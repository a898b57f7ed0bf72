//! Tests for letter progress tracking

#[cfg(test)]
mod tests {
    use faceglyph::io::progress::ProgressManager;
    use faceglyph::placement::search::PlacementCandidate;
    use faceglyph::tiles::orchestrator::{GlyphTile, TileState, blank_tile};

    fn tile(state: TileState) -> GlyphTile {
        GlyphTile {
            position: 0,
            character: 'a',
            image: blank_tile(),
            state,
        }
    }

    // Tests every finished tile advances the bar once
    // Verified by only counting face-aware tiles
    #[test]
    fn test_tile_done_increments() {
        let progress = ProgressManager::hidden();
        assert_eq!(progress.completed(), 0);

        progress.tile_done(&tile(TileState::EmptySpace));
        progress.tile_done(&tile(TileState::Fallback));
        progress.tile_done(&tile(TileState::FaceAware {
            faces: 2,
            candidate: PlacementCandidate::ORIGIN,
        }));
        progress.tile_done(&tile(TileState::Failed {
            reason: "no outline".to_string(),
        }));

        assert_eq!(progress.completed(), 4);
        progress.finish();
    }

    // Tests tiles can be reported from several threads
    // Verified by counting on a thread-local bar
    #[test]
    fn test_concurrent_updates() {
        let progress = ProgressManager::new(16);
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..4 {
                        progress.tile_done(&tile(TileState::Fallback));
                    }
                });
            }
        });
        assert_eq!(progress.completed(), 16);
        progress.finish();
    }

    // Tests the default manager starts empty
    // Verified by starting the default at one
    #[test]
    fn test_default_manager() {
        let progress = ProgressManager::default();
        assert_eq!(progress.completed(), 0);
        progress.finish();
    }
}
