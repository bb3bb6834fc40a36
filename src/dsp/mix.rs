//! Sample-wise summation of independently rendered layers.

/*
Layer Mixing
============

Layers are summed sample by sample. There is no balance, normalization or
clipping; two full-scale layers can peak at ±2 and it is up to the chain
(usually a final gain stage per layer) to keep levels sane.

Lengths do NOT need to match. Each combine step only runs up to the
shorter of its two inputs and drops the tail of the longer one:

  A: ██████████████  5000
  B: ████████        3000
  ─────────────────
  =  ████████        3000

Mixing more than two layers folds left, so the result is as long as the
shortest layer.
*/

/// Sum two buffers sample-wise over the shorter length.
pub fn sum_truncated(a: &[f32], b: &[f32]) -> Vec<f32> {
    a.iter().zip(b.iter()).map(|(&x, &y)| x + y).collect()
}

/// Fold any number of layers into one buffer.
///
/// A single layer comes back unchanged; no layers gives an empty buffer.
pub fn mix_layers<I>(layers: I) -> Vec<f32>
where
    I: IntoIterator<Item = Vec<f32>>,
{
    let mut layers = layers.into_iter();
    let Some(first) = layers.next() else {
        return Vec::new();
    };
    layers.fold(first, |acc, layer| sum_truncated(&acc, &layer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorter_layer_bounds_result() {
        let a: Vec<f32> = (0..5000).map(|i| i as f32 * 0.001).collect();
        let b: Vec<f32> = (0..3000).map(|i| -(i as f32) * 0.0005).collect();

        let mixed = sum_truncated(&a, &b);

        assert_eq!(mixed.len(), 3000);
        for i in 0..3000 {
            assert_eq!(mixed[i], a[i] + b[i]);
        }
    }

    #[test]
    fn test_order_does_not_change_length() {
        let a = vec![1.0f32; 10];
        let b = vec![2.0f32; 4];
        assert_eq!(sum_truncated(&a, &b).len(), 4);
        assert_eq!(sum_truncated(&b, &a).len(), 4);
    }

    #[test]
    fn test_no_normalization() {
        let mixed = sum_truncated(&[1.0, -1.0], &[1.0, -1.0]);
        assert_eq!(mixed, vec![2.0, -2.0]);
    }

    #[test]
    fn test_mix_layers_folds_to_shortest() {
        let mixed = mix_layers(vec![vec![1.0; 6], vec![1.0; 3], vec![1.0; 5]]);
        assert_eq!(mixed, vec![3.0; 3]);
    }

    #[test]
    fn test_mix_layers_edge_cases() {
        assert!(mix_layers(Vec::<Vec<f32>>::new()).is_empty());
        assert_eq!(mix_layers(vec![vec![0.5, 0.25]]), vec![0.5, 0.25]);
    }
}
