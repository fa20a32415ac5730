use crate::{Dataset, Network, Result};

/// Counts the instances the network classifies correctly.
///
/// An instance is classified positive iff the first output component is
/// strictly greater than 0.5; an output of exactly 0.5 classifies negative.
/// The dataset is never mutated.
///
/// # Errors
/// Returns `DimensionMismatch` if the dataset's feature width does not match
/// the network's input layer.
pub fn count_correct(network: &mut Network, data: &Dataset) -> Result<usize> {
    let mut correct = 0;

    for instance in data.instances() {
        network.set_input(instance.features())?;
        let predicted = network.evaluate()[0] > 0.5;

        if predicted == instance.label() {
            correct += 1;
        }
    }

    Ok(correct)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::TrainError;

    #[test]
    fn exact_one_half_classifies_negative() {
        // Zero weights output exactly 0.5 for every input, which is not
        // strictly greater than the threshold.
        let mut net = Network::new(&[1, 1], vec![0.0, 0.0]).unwrap();
        let data = Dataset::parse("1,0\n2,1\n").unwrap();

        // Only the negative-labeled instance matches.
        assert_eq!(count_correct(&mut net, &data).unwrap(), 1);
    }

    #[test]
    fn saturated_outputs_classify_by_sign_of_bias() {
        // Bias 50 saturates the unit near 1: every instance predicts
        // positive.
        let mut net = Network::new(&[1, 1], vec![0.0, 50.0]).unwrap();
        let data = Dataset::parse("0,1\n1,1\n2,0\n").unwrap();

        assert_eq!(count_correct(&mut net, &data).unwrap(), 2);
    }

    #[test]
    fn mismatched_feature_width_is_an_error() {
        let mut net = Network::new(&[2, 1], vec![0.0; 3]).unwrap();
        let data = Dataset::parse("1,0\n").unwrap();

        assert!(matches!(
            count_correct(&mut net, &data),
            Err(TrainError::DimensionMismatch { .. })
        ));
    }
}
