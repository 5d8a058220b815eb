//! Tests for tile grid validation, tile extraction and recomposition

#[cfg(test)]
mod tests {
    use image::{GenericImageView, Rgba, RgbaImage};
    use photomosaic::MosaicError;
    use photomosaic::io::error::Dimension;
    use photomosaic::spatial::grid::Matrix;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn coordinate_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 7, 255]))
    }

    fn noise_image(width: u32, height: u32, seed: u64) -> RgbaImage {
        let mut rng = StdRng::seed_from_u64(seed);
        RgbaImage::from_fn(width, height, |_, _| Rgba(rng.random()))
    }

    // Tests indivisible width is rejected and named in the message
    // Verified by checking height before width
    #[test]
    fn test_new_rejects_indivisible_width() {
        let result = Matrix::new(RgbaImage::new(123, 150), 200, 150);

        match result {
            Err(error @ MosaicError::Dimension { .. }) => {
                assert!(error.to_string().contains("width"));
                assert!(matches!(
                    error,
                    MosaicError::Dimension {
                        dimension: Dimension::Width,
                        size: 123,
                        tile_size: 200,
                    }
                ));
            }
            other => unreachable!("Expected width dimension error, got {other:?}"),
        }
    }

    // Tests indivisible height is rejected and named in the message
    // Verified by reporting the width axis for both checks
    #[test]
    fn test_new_rejects_indivisible_height() {
        let result = Matrix::new(RgbaImage::new(200, 123), 200, 150);

        match result {
            Err(error @ MosaicError::Dimension { .. }) => {
                assert!(error.to_string().contains("height"));
                assert!(!error.to_string().contains("width"));
            }
            other => unreachable!("Expected height dimension error, got {other:?}"),
        }
    }

    // Tests zero tile extents are parameter errors rather than a division panic
    // Verified by removing the zero checks
    #[test]
    fn test_new_rejects_zero_tile_size() {
        assert!(matches!(
            Matrix::new(RgbaImage::new(10, 10), 0, 5),
            Err(MosaicError::InvalidParameter {
                parameter: "tile_width",
                ..
            })
        ));
        assert!(matches!(
            Matrix::new(RgbaImage::new(10, 10), 5, 0),
            Err(MosaicError::InvalidParameter {
                parameter: "tile_height",
                ..
            })
        ));
    }

    // Tests zero-area images are accepted with no tiles
    // Verified by rejecting empty images
    #[test]
    fn test_new_accepts_zero_area() {
        let Ok(matrix) = Matrix::new(RgbaImage::new(0, 0), 200, 150) else {
            unreachable!("Zero-area images should be accepted");
        };

        assert!(matrix.tile_rectangles().is_empty());
        assert!(matrix.tiles().is_empty());
        assert_eq!(matrix.tile_count(), 0);
    }

    // Tests tile count and size accessors agree with the enumeration
    // Verified by swapping rows and columns in tile_count
    #[test]
    fn test_tile_count_matches_rectangles() {
        let Ok(matrix) = Matrix::new(RgbaImage::new(600, 600), 200, 150) else {
            unreachable!("600x600 divides into 200x150 tiles");
        };

        assert_eq!(matrix.tile_count(), 12);
        assert_eq!(matrix.tile_rectangles().len(), 12);
        assert_eq!(matrix.tile_size(), (200, 150));
    }

    // Tests tile views match their rectangles in size and content
    // Verified by viewing every tile at the origin
    #[test]
    fn test_tiles_follow_rectangles() {
        let Ok(matrix) = Matrix::new(coordinate_image(6, 4), 3, 2) else {
            unreachable!("6x4 divides into 3x2 tiles");
        };

        let rects = matrix.tile_rectangles();
        let tiles = matrix.tiles();
        assert_eq!(tiles.len(), rects.len());

        for (rect, tile) in rects.iter().zip(&tiles) {
            assert_eq!(tile.dimensions(), (3, 2));
            assert_eq!(
                tile.get_pixel(0, 0),
                Rgba([rect.x0 as u8, rect.y0 as u8, 7, 255])
            );
            assert_eq!(
                tile.get_pixel(2, 1),
                Rgba([rect.x0 as u8 + 2, rect.y0 as u8 + 1, 7, 255])
            );
        }
    }

    // Tests writing extracted tiles straight back leaves the image unchanged
    // Verified by offsetting the destination by one pixel
    #[test]
    fn test_recompose_round_trip() {
        let original = noise_image(60, 45, 11);
        let Ok(mut matrix) = Matrix::new(original.clone(), 20, 15) else {
            unreachable!("60x45 divides into 20x15 tiles");
        };

        let copies: Vec<RgbaImage> = matrix.tiles().iter().map(|t| t.to_image()).collect();
        assert!(matrix.recompose(&copies).is_ok());

        assert_eq!(matrix.into_inner(), original);
    }

    // Tests each replacement lands in its own rectangle
    // Verified by iterating the replacements in reverse
    #[test]
    fn test_recompose_places_tiles_in_order() {
        let Ok(mut matrix) = Matrix::new(RgbaImage::new(4, 4), 2, 2) else {
            unreachable!("4x4 divides into 2x2 tiles");
        };

        let colors = [
            Rgba([255, 0, 0, 255]),
            Rgba([0, 255, 0, 255]),
            Rgba([0, 0, 255, 255]),
            Rgba([255, 255, 0, 255]),
        ];
        let replacements: Vec<RgbaImage> = colors
            .iter()
            .map(|&color| RgbaImage::from_pixel(2, 2, color))
            .collect();
        assert!(matrix.recompose(&replacements).is_ok());

        let image = matrix.into_inner();
        assert_eq!(*image.get_pixel(0, 0), colors[0]);
        assert_eq!(*image.get_pixel(3, 1), colors[1]);
        assert_eq!(*image.get_pixel(1, 2), colors[2]);
        assert_eq!(*image.get_pixel(3, 3), colors[3]);
    }

    // Tests replacements are read from their own top-left corner
    // Verified by reading replacements at the destination coordinates
    #[test]
    fn test_recompose_reads_from_replacement_origin() {
        let source = coordinate_image(8, 8);
        let replacements = vec![*source.view(5, 6, 2, 2)];
        let Ok(mut matrix) = Matrix::new(RgbaImage::new(2, 2), 2, 2) else {
            unreachable!("2x2 is a single 2x2 tile");
        };

        assert!(matrix.recompose(&replacements).is_ok());

        let image = matrix.into_inner();
        assert_eq!(*image.get_pixel(0, 0), Rgba([5, 6, 7, 255]));
        assert_eq!(*image.get_pixel(1, 1), Rgba([6, 7, 7, 255]));
    }

    // Tests a short replacement list is rejected without touching pixels
    // Verified by writing tiles before checking the count
    #[test]
    fn test_recompose_rejects_tile_count_mismatch() {
        let original = noise_image(4, 4, 3);
        let Ok(mut matrix) = Matrix::new(original.clone(), 2, 2) else {
            unreachable!("4x4 divides into 2x2 tiles");
        };

        let replacements = vec![RgbaImage::new(2, 2); 3];
        let result = matrix.recompose(&replacements);

        assert!(matches!(
            result,
            Err(MosaicError::TileCountMismatch {
                expected: 4,
                actual: 3
            })
        ));
        assert_eq!(matrix.image(), &original);
    }

    // Tests an undersized replacement only overwrites the overlap
    // Verified by copying the full rectangle regardless of replacement size
    #[test]
    fn test_recompose_clips_to_replacement() {
        let background = Rgba([9, 9, 9, 255]);
        let Ok(mut matrix) = Matrix::new(RgbaImage::from_pixel(3, 3, background), 3, 3) else {
            unreachable!("3x3 is a single 3x3 tile");
        };

        let red = Rgba([255, 0, 0, 255]);
        assert!(matrix.recompose(&[RgbaImage::from_pixel(2, 2, red)]).is_ok());

        let image = matrix.into_inner();
        assert_eq!(*image.get_pixel(1, 1), red);
        assert_eq!(*image.get_pixel(2, 2), background);
        assert_eq!(*image.get_pixel(2, 0), background);
    }
}
