//! Pixel format conversion helpers for file encoders.

/// Copies RGBA pixel data to RGB format, discarding alpha.
///
/// # Panics
/// Panics if `src` is not a multiple of 4 or if `dst.len()` is not
/// `src.len() / 4 * 3`.
pub fn copy_rgba_to_rgb(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % 4 == 0,
        "src length {} is not a multiple of 4",
        src.len()
    );
    let expected_dst_len = (src.len() / 4) * 3;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(4).zip(dst.chunks_exact_mut(3)) {
        dst_pixel.copy_from_slice(&src_pixel[..3]);
    }
}

/// Copies 8-bit grayscale data to RGB by replicating each sample.
///
/// # Panics
/// Panics if `dst.len()` is not `src.len() * 3`.
pub fn copy_gray_to_rgb(src: &[u8], dst: &mut [u8]) {
    let expected_dst_len = src.len() * 3;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (&value, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(3)) {
        dst_pixel.fill(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_rgba_to_rgb_known_values() {
        let src = vec![
            255, 0, 0, 255, // red
            0, 255, 0, 0, // green, transparent
            0, 0, 255, 128, // blue
        ];
        let mut dst = vec![0; (src.len() / 4) * 3];

        copy_rgba_to_rgb(&src, &mut dst);

        assert_eq!(dst, vec![255, 0, 0, 0, 255, 0, 0, 0, 255]);
    }

    #[test]
    fn test_copy_rgba_to_rgb_empty_buffers() {
        let src: Vec<u8> = vec![];
        let mut dst: Vec<u8> = vec![];

        copy_rgba_to_rgb(&src, &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    #[should_panic(expected = "not a multiple of 4")]
    fn test_copy_rgba_to_rgb_rejects_partial_pixel() {
        let mut dst = vec![0; 3];
        copy_rgba_to_rgb(&[1, 2, 3], &mut dst);
    }

    #[test]
    fn test_copy_gray_to_rgb_known_values() {
        let src = vec![0, 128, 255];
        let mut dst = vec![1; 9];

        copy_gray_to_rgb(&src, &mut dst);

        assert_eq!(dst, vec![0, 0, 0, 128, 128, 128, 255, 255, 255]);
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_copy_gray_to_rgb_rejects_wrong_dst() {
        let mut dst = vec![0; 4];
        copy_gray_to_rgb(&[1, 2], &mut dst);
    }
}
