use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::Rng;

use crate::{Result, TrainError};

/// Logistic sigmoid.
fn sigmoid(z: f32) -> f32 {
    1. / (1. + (-z).exp())
}

/// A feed-forward network over a flat weight vector.
///
/// The topology is an ordered list of layer sizes. Parameters live in one
/// contiguous `Vec<f32>`, laid out per layer as the `dim_in * dim_out`
/// weights followed by the `dim_out` biases, so a whole network is a single
/// point in the search space. Evaluation is deterministic: there is no
/// randomness inside the network itself.
#[derive(Debug, Clone)]
pub struct Network {
    sizes: Vec<usize>,
    weights: Vec<f32>,
    input: Array1<f32>,
    output: Array1<f32>,
}

/// Total parameter count implied by a topology: `(dim_in + 1) * dim_out`
/// per consecutive layer pair.
pub fn weight_count(sizes: &[usize]) -> usize {
    sizes.windows(2).map(|pair| (pair[0] + 1) * pair[1]).sum()
}

impl Network {
    /// Creates a network with the given topology and weight vector.
    ///
    /// # Errors
    /// Returns `InvalidConfig` for a degenerate topology and
    /// `DimensionMismatch` if `weights` has the wrong length.
    pub fn new(sizes: &[usize], weights: Vec<f32>) -> Result<Self> {
        if sizes.len() < 2 || sizes.contains(&0) {
            return Err(TrainError::InvalidConfig(format!(
                "topology {sizes:?} needs at least two non-empty layers"
            )));
        }

        let expected = weight_count(sizes);
        if weights.len() != expected {
            return Err(TrainError::DimensionMismatch {
                what: "weights",
                got: weights.len(),
                expected,
            });
        }

        Ok(Self {
            sizes: sizes.to_vec(),
            weights,
            input: Array1::zeros(sizes[0]),
            output: Array1::zeros(sizes[sizes.len() - 1]),
        })
    }

    /// Creates a classification network with every weight drawn uniformly
    /// from [-0.5, 0.5), sigmoid activations throughout.
    ///
    /// # Errors
    /// Returns `InvalidConfig` for a degenerate topology.
    pub fn classifier<R: Rng>(sizes: &[usize], rng: &mut R) -> Result<Self> {
        let weights = (0..weight_count(sizes))
            .map(|_| rng.random_range(-0.5..0.5))
            .collect();

        Self::new(sizes, weights)
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn weight_count(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Replaces the full weight vector.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `weights` does not match the topology's
    /// parameter count.
    pub fn set_weights(&mut self, weights: &[f32]) -> Result<()> {
        if weights.len() != self.weights.len() {
            return Err(TrainError::DimensionMismatch {
                what: "weights",
                got: weights.len(),
                expected: self.weights.len(),
            });
        }

        self.weights.copy_from_slice(weights);
        Ok(())
    }

    /// Stores the input for the next evaluation.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `input` does not match the input layer.
    pub fn set_input(&mut self, input: ArrayView1<f32>) -> Result<()> {
        if input.len() != self.sizes[0] {
            return Err(TrainError::DimensionMismatch {
                what: "input",
                got: input.len(),
                expected: self.sizes[0],
            });
        }

        self.input.assign(&input);
        Ok(())
    }

    /// Propagates the stored input forward and returns the output layer.
    ///
    /// Per layer: `z = x . W + b`, `a = sigmoid(z)`.
    pub fn evaluate(&mut self) -> ArrayView1<'_, f32> {
        let mut x = self.input.clone();
        let mut offset = 0;

        for pair in self.sizes.windows(2) {
            let (dim_in, dim_out) = (pair[0], pair[1]);
            let w_size = dim_in * dim_out;
            let params = &self.weights[offset..offset + w_size + dim_out];

            // Shapes are fixed by the checked topology.
            let w = ArrayView2::from_shape((dim_in, dim_out), &params[..w_size]).unwrap();
            let b = ArrayView1::from_shape(dim_out, &params[w_size..]).unwrap();

            let z = x.dot(&w) + &b;
            x = z.mapv(sigmoid);
            offset += w_size + dim_out;
        }

        self.output = x;
        self.output.view()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::Array1;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn weight_count_includes_biases() {
        // 2 -> 3: 2*3 + 3, 3 -> 1: 3*1 + 1.
        assert_eq!(weight_count(&[2, 3, 1]), 13);
    }

    #[test]
    fn rejects_degenerate_topologies() {
        assert!(matches!(
            Network::new(&[3], vec![]),
            Err(TrainError::InvalidConfig(_))
        ));
        assert!(matches!(
            Network::new(&[3, 0, 1], vec![0.0; 4]),
            Err(TrainError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_wrong_weight_vector_length() {
        let mut net = Network::new(&[2, 1], vec![0.0; 3]).unwrap();

        assert!(matches!(
            net.set_weights(&[0.0; 2]),
            Err(TrainError::DimensionMismatch {
                got: 2,
                expected: 3,
                ..
            })
        ));
        assert!(matches!(
            Network::new(&[2, 1], vec![0.0; 4]),
            Err(TrainError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn rejects_wrong_input_length() {
        let mut net = Network::new(&[2, 1], vec![0.0; 3]).unwrap();
        let input = Array1::from_vec(vec![1.0]);

        assert!(matches!(
            net.set_input(input.view()),
            Err(TrainError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn zero_weights_evaluate_to_one_half() {
        let mut net = Network::new(&[2, 2, 1], vec![0.0; 9]).unwrap();
        net.set_input(Array1::from_vec(vec![1.0, -1.0]).view()).unwrap();

        let output = net.evaluate().to_vec();
        assert_eq!(output, vec![0.5]);
    }

    #[test]
    fn forward_pass_matches_hand_computation() {
        // 1 -> 1 network: w = 1, b = 0, input 0 => sigmoid(0) = 0.5,
        // input ln(3) => sigmoid(ln 3) = 0.75.
        let mut net = Network::new(&[1, 1], vec![1.0, 0.0]).unwrap();

        net.set_input(Array1::from_vec(vec![0.0]).view()).unwrap();
        assert!((net.evaluate()[0] - 0.5).abs() < 1e-6);

        net.set_input(Array1::from_vec(vec![3f32.ln()]).view()).unwrap();
        assert!((net.evaluate()[0] - 0.75).abs() < 1e-6);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut net = Network::classifier(&[3, 4, 1], &mut rng).unwrap();
        let input = Array1::from_vec(vec![0.2, -0.4, 0.9]);

        net.set_input(input.view()).unwrap();
        let first = net.evaluate().to_vec();
        net.set_input(input.view()).unwrap();
        let second = net.evaluate().to_vec();

        assert_eq!(first, second);
    }

    #[test]
    fn weight_round_trip_preserves_output() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut net = Network::classifier(&[2, 3, 1], &mut rng).unwrap();
        let input = Array1::from_vec(vec![0.3, 0.7]);

        net.set_input(input.view()).unwrap();
        let before = net.evaluate().to_vec();

        let weights = net.weights().to_vec();
        net.set_weights(&weights).unwrap();
        net.set_input(input.view()).unwrap();
        let after = net.evaluate().to_vec();

        assert_eq!(before, after);
    }

    #[test]
    fn classifier_initializes_within_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let net = Network::classifier(&[4, 5, 1], &mut rng).unwrap();

        assert_eq!(net.weight_count(), weight_count(&[4, 5, 1]));
        assert!(net.weights().iter().all(|w| (-0.5..0.5).contains(w)));
    }
}
