/// Axis-aligned box in viewport coordinates (CSS pixels), the shape
/// `getBoundingClientRect` hands back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// The viewport grown (positive) or shrunk (negative) by `margin` px on every side.
    pub fn viewport(width: f64, height: f64, margin: f64) -> Self {
        Self {
            top: -margin,
            left: -margin,
            width: (width + 2.0 * margin).max(0.0),
            height: (height + 2.0 * margin).max(0.0),
        }
    }

    fn intersection(&self, other: &Rect) -> Option<Rect> {
        let top = self.top.max(other.top);
        let left = self.left.max(other.left);
        let bottom = self.bottom().min(other.bottom());
        let right = self.right().min(other.right());
        if bottom < top || right < left {
            return None;
        }
        Some(Rect::new(top, left, right - left, bottom - top))
    }
}

/// Fraction of `target` that lies inside `root`, in `0.0..=1.0`.
///
/// A zero-area target (an empty div, a collapsed line) counts as fully
/// visible as soon as it touches the root, otherwise it could never enter.
pub fn intersection_ratio(target: &Rect, root: &Rect) -> f64 {
    let Some(overlap) = target.intersection(root) else {
        return 0.0;
    };
    let area = target.area();
    if area == 0.0 {
        return 1.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

/// Whether a section at `ratio` counts as entered for `threshold`.
pub fn has_entered(ratio: f64, threshold: f64) -> bool {
    if threshold <= 0.0 {
        ratio > 0.0
    } else {
        ratio >= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW_W: f64 = 1280.0;
    const VIEW_H: f64 = 800.0;

    #[test]
    fn section_fully_inside_viewport_is_fully_visible() {
        let root = Rect::viewport(VIEW_W, VIEW_H, 0.0);
        let target = Rect::new(100.0, 0.0, 600.0, 200.0);
        assert_eq!(intersection_ratio(&target, &root), 1.0);
    }

    #[test]
    fn section_below_the_fold_is_not_visible() {
        let root = Rect::viewport(VIEW_W, VIEW_H, 0.0);
        let target = Rect::new(900.0, 0.0, 600.0, 200.0);
        assert_eq!(intersection_ratio(&target, &root), 0.0);
        assert!(!has_entered(0.0, 0.0));
    }

    #[test]
    fn partial_overlap_is_proportional() {
        let root = Rect::viewport(VIEW_W, VIEW_H, 0.0);
        // 50px of a 200px tall block peeks above the bottom edge.
        let target = Rect::new(750.0, 0.0, 600.0, 200.0);
        let ratio = intersection_ratio(&target, &root);
        assert!((ratio - 0.25).abs() < 1e-9);
        assert!(has_entered(ratio, 0.2));
        assert!(!has_entered(ratio, 0.3));
    }

    #[test]
    fn negative_margin_delays_entry() {
        let target = Rect::new(760.0, 0.0, 600.0, 200.0);
        let plain = intersection_ratio(&target, &Rect::viewport(VIEW_W, VIEW_H, 0.0));
        let shrunk = intersection_ratio(&target, &Rect::viewport(VIEW_W, VIEW_H, -50.0));
        assert!(plain > 0.0);
        assert_eq!(shrunk, 0.0);
    }

    #[test]
    fn positive_margin_triggers_early() {
        let target = Rect::new(820.0, 0.0, 600.0, 200.0);
        let grown = intersection_ratio(&target, &Rect::viewport(VIEW_W, VIEW_H, 40.0));
        assert!(grown > 0.0);
    }

    #[test]
    fn zero_area_target_touching_root_is_visible() {
        let root = Rect::viewport(VIEW_W, VIEW_H, 0.0);
        let target = Rect::new(300.0, 10.0, 0.0, 0.0);
        assert_eq!(intersection_ratio(&target, &root), 1.0);
    }
}
