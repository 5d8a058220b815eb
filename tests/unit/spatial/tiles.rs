//! Tests for tile rectangle geometry and row-major enumeration

#[cfg(test)]
mod tests {
    use photomosaic::spatial::tiles::{TileRect, tile_rectangles};

    // Tests enumeration order walks columns inside rows
    // Verified by swapping the loop nesting
    #[test]
    fn test_tile_rectangles_row_major_order() {
        let rects = tile_rectangles(400, 450, 200, 150);

        let origins: Vec<(u32, u32)> = rects.iter().map(TileRect::origin).collect();
        assert_eq!(
            origins,
            vec![(0, 0), (200, 0), (0, 150), (200, 150), (0, 300), (200, 300)]
        );
    }

    // Tests every rectangle has the configured tile size
    // Verified by building rectangles from the image size
    #[test]
    fn test_tile_rectangles_have_tile_size() {
        for rect in tile_rectangles(400, 450, 200, 150) {
            assert_eq!(rect.width(), 200);
            assert_eq!(rect.height(), 150);
        }
    }

    // Tests rectangle count equals columns times rows across several grids
    // Verified by dropping the last column
    #[test]
    fn test_tile_rectangles_count() {
        let cases = [
            (600, 600, 200, 150, 12),
            (30, 30, 30, 30, 1),
            (90, 60, 30, 30, 6),
            (7, 5, 1, 1, 35),
        ];

        for (width, height, tile_width, tile_height, expected) in cases {
            assert_eq!(
                tile_rectangles(width, height, tile_width, tile_height).len(),
                expected,
                "{width}x{height} with {tile_width}x{tile_height} tiles"
            );
        }
    }

    // Tests the last rectangle reaches the far corner exactly
    // Verified by using an inclusive upper bound
    #[test]
    fn test_tile_rectangles_cover_image() {
        let rects = tile_rectangles(90, 60, 30, 20);

        let last = rects.last().copied();
        assert_eq!(last, Some(TileRect::new(60, 40, 30, 20)));
        assert_eq!(last.map(|r| (r.x1, r.y1)), Some((90, 60)));
    }

    // Tests partial edge tiles are left out so nothing runs past the area
    // Verified by stepping over pixels instead of whole tiles
    #[test]
    fn test_tile_rectangles_skip_partial_tiles() {
        let rects = tile_rectangles(5, 5, 2, 2);

        assert_eq!(rects.len(), 4);
        assert!(rects.iter().all(|r| r.x1 <= 5 && r.y1 <= 5));
        assert_eq!(rects.last().copied(), Some(TileRect::new(2, 2, 2, 2)));
    }

    // Tests empty areas produce no rectangles
    // Verified by starting the loops at one
    #[test]
    fn test_tile_rectangles_zero_area() {
        assert!(tile_rectangles(0, 0, 200, 150).is_empty());
        assert!(tile_rectangles(0, 300, 200, 150).is_empty());
        assert!(tile_rectangles(400, 0, 200, 150).is_empty());
    }

    // Tests zero tile extents yield nothing instead of looping forever
    // Verified by removing the zero guard
    #[test]
    fn test_tile_rectangles_zero_tile_size() {
        assert!(tile_rectangles(400, 300, 0, 150).is_empty());
        assert!(tile_rectangles(400, 300, 200, 0).is_empty());
    }

    // Tests rectangle accessors
    // Verified by swapping width and height
    #[test]
    fn test_tile_rect_accessors() {
        let rect = TileRect::new(10, 20, 30, 40);

        assert_eq!(rect.origin(), (10, 20));
        assert_eq!(rect.width(), 30);
        assert_eq!(rect.height(), 40);
        assert_eq!((rect.x1, rect.y1), (40, 60));
    }
}
