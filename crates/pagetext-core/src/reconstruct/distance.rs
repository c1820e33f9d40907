use crate::model::WordBox;

/// Absolute horizontal and vertical distance between two box centers.
///
/// The axes are kept separate so the caller can decide whether a neighbor sits
/// on the same line (`h < v`) or starts another one (`h >= v`).
pub fn directional_distance(a: &WordBox, b: &WordBox) -> (f64, f64) {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    ((bx - ax).abs(), (by - ay).abs())
}

/// Which way a neighbor relates to the current anchor word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Classify a pair from its directional distances. Ties are vertical.
pub fn classify(h_dist: f64, v_dist: f64) -> Direction {
    if h_dist < v_dist {
        Direction::Horizontal
    } else {
        Direction::Vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(cx: f64, cy: f64) -> WordBox {
        WordBox::new("w", cx - 5.0, cy - 4.0, cx + 5.0, cy + 4.0)
    }

    #[test]
    fn test_distance_is_absolute_and_symmetric() {
        let a = boxed(0.0, 0.0);
        let b = boxed(-12.0, 7.5);
        assert_eq!(directional_distance(&a, &b), (12.0, 7.5));
        assert_eq!(directional_distance(&b, &a), (12.0, 7.5));
    }

    #[test]
    fn test_distance_uses_centers_not_edges() {
        let narrow = WordBox::new("a", 0.0, 0.0, 10.0, 10.0);
        let wide = WordBox::new("b", 0.0, 0.0, 30.0, 10.0);
        assert_eq!(directional_distance(&narrow, &wide), (10.0, 0.0));
    }

    #[test]
    fn test_classify_tie_is_vertical() {
        assert_eq!(classify(5.0, 5.0), Direction::Vertical);
        assert_eq!(classify(4.9, 5.0), Direction::Horizontal);
        assert_eq!(classify(10.0, 0.0), Direction::Vertical);
    }
}
