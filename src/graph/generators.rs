use super::*;
use rand::Rng;

pub trait RandomInstances: Sized {
    /// Generates a connected graph with weights drawn uniformly from `weights`.
    /// First, each node `u > 0` is attached to a uniformly chosen node `v < u`, which yields
    /// a random spanning tree. Then each of the remaining pairs becomes an edge independently
    /// with probability `p`.
    fn random_connected_gnp<R: Rng>(rng: &mut R, n: NumNodes, p: f64, weights: Range<Weight>)
    -> Self;

    /// Generates a complete graph over `n` points placed uniformly on the grid
    /// `[0, extent)^2`. Edge weights are Euclidean distances rounded up, which preserves
    /// the triangle inequality.
    fn random_metric<R: Rng>(rng: &mut R, n: NumNodes, extent: u32) -> Self;
}

impl<G> RandomInstances for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn random_connected_gnp<R: Rng>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        weights: Range<Weight>,
    ) -> Self {
        debug_assert!((0.0..=1.0).contains(&p));
        debug_assert!(!weights.is_empty());

        let mut result = Self::new(n);

        for u in 1..n {
            let v = rng.gen_range(0..u);
            let w = rng.gen_range(weights.clone());
            result.add_edge(u, v, w);
        }

        for u in 0..n {
            for v in (u + 1)..n {
                if rng.gen_bool(p) {
                    let w = rng.gen_range(weights.clone());
                    // tree edges are already present and are kept
                    result.try_add_edge(u, v, w);
                }
            }
        }

        result
    }

    fn random_metric<R: Rng>(rng: &mut R, n: NumNodes, extent: u32) -> Self {
        debug_assert!(extent > 0);

        let points: Vec<(i64, i64)> = (0..n)
            .map(|_| {
                (
                    rng.gen_range(0..extent) as i64,
                    rng.gen_range(0..extent) as i64,
                )
            })
            .collect();

        let mut result = Self::new(n);
        for u in 0..n {
            for v in (u + 1)..n {
                let (xu, yu) = points[u as usize];
                let (xv, yv) = points[v as usize];
                let squared = ((xu - xv).pow(2) + (yu - yv).pow(2)) as u64;
                result.add_edge(u, v, ceil_sqrt(squared));
            }
        }

        result
    }
}

/// Smallest integer `s` with `s * s >= x`
fn ceil_sqrt(x: u64) -> u64 {
    let mut s = (x as f64).sqrt() as u64;
    while s * s < x {
        s += 1;
    }
    while s > 0 && (s - 1) * (s - 1) >= x {
        s -= 1;
    }
    s
}
