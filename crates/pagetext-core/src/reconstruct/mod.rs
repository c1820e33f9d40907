pub mod distance;

use crate::model::{LineGroup, WordBox};
use distance::{classify, directional_distance, Direction};

/// Default maximum center distance, in page units, for two words to chain.
pub const DEFAULT_LINE_THRESHOLD: f64 = 15.0;

/// Rebuild visual lines from unordered word boxes using only their geometry.
///
/// Words are visited top-to-bottom, left-to-right. Each unvisited word seeds a
/// group which is then grown by repeatedly picking a neighbor among the
/// remaining words:
///
/// - a candidate with `h < v` updates the running horizontal minimum,
///   otherwise it may update the running vertical minimum;
/// - the neighbor taken is the last candidate that updated either minimum,
///   which is a greedy choice and not necessarily the closest word;
/// - the search stops once `min(min_h, min_v)` exceeds `threshold`;
/// - a horizontal neighbor joins the current group, a vertical one closes the
///   group and seeds the next.
///
/// Groups come back in the order they were closed, each sorted by `left`.
pub fn reconstruct_lines(words: &[WordBox], threshold: f64) -> Vec<LineGroup> {
    if words.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&WordBox> = words.iter().collect();
    sorted.sort_by(|a, b| {
        a.top
            .total_cmp(&b.top)
            .then_with(|| a.left.total_cmp(&b.left))
    });

    let mut grouped = vec![false; sorted.len()];
    let mut groups = Vec::new();

    for seed in 0..sorted.len() {
        if grouped[seed] {
            continue;
        }

        grouped[seed] = true;
        let mut current = vec![sorted[seed]];
        let mut anchor = sorted[seed];

        loop {
            let Some(step) = nearest_neighbor(anchor, &sorted, &grouped) else {
                break;
            };
            if step.min_h.min(step.min_v) > threshold {
                break;
            }

            grouped[step.index] = true;
            let next = sorted[step.index];
            match step.direction {
                Direction::Horizontal => current.push(next),
                Direction::Vertical => {
                    let finished = std::mem::replace(&mut current, vec![next]);
                    groups.push(finish_group(finished));
                }
            }
            anchor = next;
        }

        if !current.is_empty() {
            groups.push(finish_group(current));
        }
    }

    tracing::trace!(words = words.len(), lines = groups.len(), "reconstructed lines");
    groups
}

struct Neighbor {
    index: usize,
    direction: Direction,
    min_h: f64,
    min_v: f64,
}

fn nearest_neighbor(anchor: &WordBox, words: &[&WordBox], grouped: &[bool]) -> Option<Neighbor> {
    let mut min_h = f64::INFINITY;
    let mut min_v = f64::INFINITY;
    let mut closest: Option<(usize, Direction)> = None;

    for (j, candidate) in words.iter().enumerate() {
        if grouped[j] {
            continue;
        }
        let (h, v) = directional_distance(anchor, candidate);
        if classify(h, v) == Direction::Horizontal && h < min_h {
            min_h = h;
            closest = Some((j, Direction::Horizontal));
        } else if v < min_v {
            min_v = v;
            closest = Some((j, Direction::Vertical));
        }
    }

    closest.map(|(index, direction)| Neighbor {
        index,
        direction,
        min_h,
        min_v,
    })
}

fn finish_group(mut words: Vec<&WordBox>) -> LineGroup {
    words.sort_by(|a, b| a.left.total_cmp(&b.left));
    LineGroup {
        words: words.into_iter().cloned().collect(),
    }
}
