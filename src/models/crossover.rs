use crate::models::{Point, Tour};
use rand::Rng;
use tracing::instrument;

/// Error returned when recombination yields something other than a full
/// valid tour. The offspring is discarded by the breeding loop; the slot is
/// skipped, not retried.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[error("crossover produced a tour with repeated or missing points")]
pub struct InvalidOffspring;

/// Builds a child from `lhs`'s first `pivot` genes, followed by the points
/// `lhs` dropped in `rhs`'s relative order.
fn recombine(lhs: &Tour, rhs: &Tour, pivot: usize) -> Vec<Point> {
    let prefix = &lhs.points()[..pivot];
    let dropped = &lhs.points()[pivot..];

    let mut child = Vec::with_capacity(lhs.len());
    child.extend_from_slice(prefix);
    child.extend(
        rhs.points()
            .iter()
            .copied()
            .filter(|point| dropped.contains(point)),
    );

    child
}

/// Order-preserving recombination of two parent tours at a random pivot.
///
/// The child keeps a prefix of `lhs` and fills the remaining positions with
/// `rhs`'s ordering of the points `lhs` dropped. A child that is not a full
/// valid tour is rejected, never repaired.
#[instrument(level = "debug", skip(rng, lhs, rhs), fields(tour_length = lhs.len()))]
pub(crate) fn crossover<R: Rng>(
    rng: &mut R,
    lhs: &Tour,
    rhs: &Tour,
) -> Result<Tour, InvalidOffspring> {
    let pivot = rng.random_range(0..lhs.len());
    let child = Tour::new(recombine(lhs, rhs, pivot));

    if child.len() == lhs.len() && child.is_valid() {
        Ok(child)
    } else {
        Err(InvalidOffspring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn tour_of(xs: &[f64]) -> Tour {
        Tour::new(xs.iter().map(|&x| Point::new(x, x)).collect())
    }

    #[test]
    fn it_keeps_the_prefix_and_reorders_the_tail() {
        let lhs = tour_of(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let rhs = tour_of(&[5.0, 4.0, 3.0, 2.0, 1.0]);

        let child = recombine(&lhs, &rhs, 2);

        // Prefix 1, 2 from lhs; dropped 3, 4, 5 appear in rhs order.
        assert_eq!(child, tour_of(&[1.0, 2.0, 5.0, 4.0, 3.0]).points());
    }

    #[test]
    fn a_zero_pivot_clones_the_second_parent_order() {
        let lhs = tour_of(&[1.0, 2.0, 3.0]);
        let rhs = tour_of(&[3.0, 1.0, 2.0]);

        let child = recombine(&lhs, &rhs, 0);

        assert_eq!(child, rhs.points());
    }

    #[test]
    fn it_produces_valid_permutations_of_the_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let lhs = tour_of(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let rhs = tour_of(&[6.0, 3.0, 1.0, 5.0, 2.0, 4.0]);

        for _ in 0..50 {
            let child = crossover(&mut rng, &lhs, &rhs).unwrap();

            assert_eq!(child.len(), lhs.len());
            assert!(child.is_valid());
            for point in lhs.points() {
                assert!(child.points().contains(point));
            }
        }
    }

    #[test]
    fn it_rejects_offspring_bred_from_degenerate_parents() {
        // A repeated point in the parents surfaces as an invalid child.
        let lhs = tour_of(&[1.0, 1.0]);
        let rhs = tour_of(&[1.0, 1.0]);
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(crossover(&mut rng, &lhs, &rhs), Err(InvalidOffspring));
    }
}
