//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate downscaled dimensions for an image that exceeds a maximum width.
///
/// Returns `None` when the image already fits (width ≤ `max_width`), otherwise
/// `Some((max_width, height))` with the height scaled proportionally and
/// rounded to the nearest pixel.
///
/// # Examples
/// ```
/// # use photosite::imaging::fit_width;
/// // 4000x2000 capped at 3000 → 3000x1500
/// assert_eq!(fit_width((4000, 2000), 3000), Some((3000, 1500)));
///
/// // Already narrow enough → untouched
/// assert_eq!(fit_width((3000, 2000), 3000), None);
/// ```
pub fn fit_width(original: (u32, u32), max_width: u32) -> Option<(u32, u32)> {
    let (width, height) = original;
    if width <= max_width {
        return None;
    }

    let ratio = max_width as f64 / width as f64;
    let new_height = (height as f64 * ratio).round() as u32;
    Some((max_width, new_height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_landscape_capped_proportionally() {
        assert_eq!(fit_width((4000, 2000), 3000), Some((3000, 1500)));
        assert_eq!(fit_width((6000, 4000), 3000), Some((3000, 2000)));
    }

    #[test]
    fn exact_max_width_is_untouched() {
        assert_eq!(fit_width((3000, 4500), 3000), None);
    }

    #[test]
    fn narrow_image_is_untouched() {
        assert_eq!(fit_width((800, 600), 3000), None);
        assert_eq!(fit_width((1, 1), 3000), None);
    }

    #[test]
    fn height_rounds_to_nearest_pixel() {
        // 3001 → 3000 leaves height at 2000 * 3000/3001 = 1999.33…, rounds down
        assert_eq!(fit_width((3001, 2000), 3000), Some((3000, 1999)));
        // 4001x2001 → 2001 * 3000/4001 = 1500.37…, rounds down to 1500
        assert_eq!(fit_width((4001, 2001), 3000), Some((3000, 1500)));
        // 3500x999 → 999 * 3000/3500 = 856.28…, rounds down to 856
        assert_eq!(fit_width((3500, 999), 3000), Some((3000, 856)));
    }

    #[test]
    fn portrait_images_cap_on_width_not_height() {
        // A tall portrait narrower than the cap is left alone no matter how
        // tall it is; only width triggers a downscale.
        assert_eq!(fit_width((2000, 9000), 3000), None);
        assert_eq!(fit_width((4000, 9000), 3000), Some((3000, 6750)));
    }
}
