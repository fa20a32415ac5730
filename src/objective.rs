use crate::{Dataset, Network, Result, TrainError};

/// Sum of squared error of the network over a labeled dataset.
///
/// For every instance the network is evaluated on its features and each
/// output component is compared against the label coerced to {0, 1}. Lower
/// is better; the search minimizes this value. Pure in (weights, dataset,
/// topology), so independent networks can be scored concurrently.
///
/// # Errors
/// Returns `NumericAnomaly` if the total is not finite, so a NaN or
/// infinite score can never reach an acceptance comparison.
pub fn sum_squared_error(network: &mut Network, data: &Dataset) -> Result<f32> {
    let mut total = 0.0f32;

    for instance in data.instances() {
        network.set_input(instance.features())?;
        let output = network.evaluate();
        let target = instance.target();

        total += output.iter().map(|&o| (o - target).powi(2)).sum::<f32>();
    }

    if !total.is_finite() {
        return Err(TrainError::NumericAnomaly { value: total });
    }

    Ok(total)
}
